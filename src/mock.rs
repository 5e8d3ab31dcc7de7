//! Noop implementation of embedded-io-async traits for testing purposes.

use core::convert::Infallible;

use embedded_io_async::{ErrorType, Read};

/// A reader that is always at EOF.
#[derive(Debug)]
pub struct Noop;

impl ErrorType for Noop {
    type Error = Infallible;
}

impl Read for Noop {
    async fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(0)
    }
}
