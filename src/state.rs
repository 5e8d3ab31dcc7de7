//! Internal state for reading bytes to decode.

use crate::decode::Events;

/// Internal state for reading bytes to decode.
#[derive(Debug)]
pub struct ReadState<'buf> {
    /// The current index in the buffer.
    ///
    /// Represents the number of bytes read into the buffer.
    pub index: usize,
    /// Number of bytes in the buffer already fed to the decoder.
    pub fed: usize,
    /// Stream offset of the first byte in the buffer.
    pub offset: usize,
    /// EOF was reached.
    pub eof: bool,
    /// Events of the last fed byte not yet returned, in reverse order.
    pub pending: Events<usize>,
    /// The underlying buffer to read into.
    pub buffer: &'buf mut [u8],
}

impl<'buf> ReadState<'buf> {
    /// Creates a new [`ReadState`].
    #[inline]
    pub const fn new(buffer: &'buf mut [u8]) -> Self {
        Self {
            index: 0,
            fed: 0,
            offset: 0,
            eof: false,
            pending: Events::new(),
            buffer,
        }
    }

    /// Returns the stream offset of the next byte to feed.
    #[inline]
    pub const fn position(&self) -> usize {
        self.offset + self.fed
    }

    /// Returns the number of read bytes not yet fed to the decoder.
    #[inline]
    pub const fn unfed(&self) -> usize {
        self.index - self.fed
    }
}
