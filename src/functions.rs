//! Utility functions for decoding bytes read from a [`Read`] source.
//!
//! Every byte is tagged with its offset in the stream: a byte at offset `n` spans `n..n + 1`.

use embedded_io_async::Read;

use crate::{
    ReadError,
    decoder::CobsDecoder,
    event::Event,
    logging::{debug, error, trace, warn},
    state::ReadState,
};

#[cfg(any(feature = "log", feature = "defmt", feature = "tracing"))]
use crate::logging::{Formatter, READ};

/// Tries to decode an event.
///
/// # Return value
///
/// - `Some(Ok(None))` if no event is ready yet. Call `maybe_next` again to feed or read more bytes.
/// - `Some(Ok(Some(event)))` if an event was decoded. Call `maybe_next` again to continue.
/// - `Some(Err(error))` if an error occurred. The caller should stop reading.
/// - `None` if eof was reached. The caller should stop reading.
///
/// # Usage
///
/// See [`next!`](crate::next!).
pub async fn maybe_next<R>(
    state: &mut ReadState<'_>,
    decoder: &mut CobsDecoder<usize>,
    read: &mut R,
) -> Option<Result<Option<Event<usize>>, ReadError<R::Error>>>
where
    R: Read,
{
    trace!(target: READ, "maybe_next called");

    if let Some(event) = state.pending.pop() {
        return Some(Ok(Some(event)));
    }

    if state.unfed() > 0 {
        let byte = state.buffer[state.fed];
        let position = state.position();

        state.fed += 1;

        state.pending = decoder.feed(byte, position, position + 1);
        state.pending.reverse();

        return Some(Ok(state.pending.pop()));
    }

    if state.eof {
        return None;
    }

    if state.buffer.is_empty() {
        error!(target: READ, "Buffer too small");

        return Some(Err(ReadError::BufferTooSmall));
    }

    state.offset += state.index;
    state.index = 0;
    state.fed = 0;

    trace!(target: READ, "Reading. offset: {}", state.offset);

    match read.read(&mut state.buffer[..]).await {
        Err(err) => {
            error!(target: READ, "Failed to read");

            Some(Err(ReadError::IO(err)))
        }
        Ok(0) => {
            warn!(target: READ, "Got EOF");

            if decoder.state().is_mid_run() {
                warn!(
                    target: READ,
                    "Unterminated packet dropped. outstanding: {}",
                    decoder.state().copy
                );
            }

            state.eof = true;

            Some(Ok(None))
        }
        Ok(n) => {
            debug!(
                target: READ,
                "Bytes read. bytes: {}, buffer: {:?}",
                n,
                Formatter(&state.buffer[..n])
            );

            state.index = n;

            Some(Ok(None))
        }
    }
}

/// Tries to decode an event, reading more bytes as needed.
///
/// # Return value
///
/// - `Some(Ok(event))` if an event was decoded. Call `next` again to read more events.
/// - `Some(Err(error))` if an error occurred. The caller should stop reading.
/// - `None` if eof was reached. The caller should stop reading.
pub async fn next<R>(
    state: &mut ReadState<'_>,
    decoder: &mut CobsDecoder<usize>,
    read: &mut R,
) -> Option<Result<Event<usize>, ReadError<R::Error>>>
where
    R: Read,
{
    loop {
        match maybe_next(state, decoder, read).await {
            Some(Ok(None)) => continue,
            Some(Ok(Some(event))) => return Some(Ok(event)),
            Some(Err(err)) => return Some(Err(err)),
            None => return None,
        }
    }
}
