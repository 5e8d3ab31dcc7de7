use embedded_io_async::Read;
use futures::Stream;

use crate::{ReadError, decoder::CobsDecoder, event::Event, functions, state::ReadState};

/// Reads bytes from a [`Read`] source and decodes them into [`Event`]s using a [`CobsDecoder`].
///
/// Events are positioned by stream offset: a byte at offset `n` spans `n..n + 1`.
#[derive(Debug)]
pub struct FramedRead<'buf, R> {
    /// The decoder.
    pub decoder: CobsDecoder<usize>,
    /// The underlying reader.
    pub inner: R,
    /// Internal read state.
    pub state: ReadState<'buf>,
}

impl<'buf, R> FramedRead<'buf, R> {
    /// Creates a new [`FramedRead`] with the given `reader`, reading into `buffer`.
    #[inline]
    pub const fn new(reader: R, buffer: &'buf mut [u8]) -> Self {
        Self {
            decoder: CobsDecoder::new(),
            inner: reader,
            state: ReadState::new(buffer),
        }
    }

    /// Returns reference to the decoder.
    #[inline]
    pub const fn decoder(&self) -> &CobsDecoder<usize> {
        &self.decoder
    }

    /// Returns reference to the reader.
    #[inline]
    pub const fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns mutable reference to the reader.
    #[inline]
    pub const fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Returns the stream offset of the next byte to decode.
    #[inline]
    pub const fn position(&self) -> usize {
        self.state.position()
    }

    /// Consumes the [`FramedRead`] and returns the `decoder` and `reader`.
    #[inline]
    pub fn into_parts(self) -> (CobsDecoder<usize>, R) {
        (self.decoder, self.inner)
    }

    /// Tries to decode an event from the underlying reader.
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
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::error::Error;
    ///
    /// use cobz::{FramedRead, mock::Noop, next};
    ///
    /// async fn read() -> Result<(), Box<dyn Error>> {
    ///     let buf = &mut [0u8; 64];
    ///
    ///     let mut framed = FramedRead::new(Noop, buf);
    ///
    ///     while let Some(event) = next!(framed).transpose()? {
    ///         println!("{event}");
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    pub async fn maybe_next(&mut self) -> Option<Result<Option<Event<usize>>, ReadError<R::Error>>>
    where
        R: Read,
    {
        functions::maybe_next(&mut self.state, &mut self.decoder, &mut self.inner).await
    }

    /// Tries to decode an event from the underlying reader, reading more bytes as needed.
    ///
    /// # Return value
    ///
    /// - `Some(Ok(event))` if an event was decoded. Call `next` again to read more events.
    /// - `Some(Err(error))` if an error occurred. The caller should stop reading.
    /// - `None` if eof was reached. The caller should stop reading.
    pub async fn next(&mut self) -> Option<Result<Event<usize>, ReadError<R::Error>>>
    where
        R: Read,
    {
        functions::next(&mut self.state, &mut self.decoder, &mut self.inner).await
    }

    /// Converts the [`FramedRead`] into a stream of events.
    ///
    /// The stream ends after the first error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use core::{error::Error, pin::pin};
    ///
    /// use cobz::{FramedRead, mock::Noop};
    /// use futures::StreamExt;
    ///
    /// async fn read() -> Result<(), Box<dyn Error>> {
    ///     let buf = &mut [0u8; 64];
    ///
    ///     let mut framed = FramedRead::new(Noop, buf);
    ///
    ///     let stream = framed.stream();
    ///     let mut stream = pin!(stream);
    ///
    ///     while let Some(event) = stream.next().await.transpose()? {
    ///         println!("{event}");
    ///     }
    ///
    ///     Ok(())
    /// }
    /// ```
    pub fn stream(&mut self) -> impl Stream<Item = Result<Event<usize>, ReadError<R::Error>>> + '_
    where
        R: Read,
    {
        futures::stream::unfold((self, false), |(this, errored)| async move {
            if errored {
                return None;
            }

            match this.next().await {
                Some(Ok(event)) => Some((Ok(event), (this, false))),
                Some(Err(err)) => Some((Err(err), (this, true))),
                None => None,
            }
        })
    }
}
