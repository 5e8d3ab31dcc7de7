//! Stateful decoder wrapping the [`step`] transition function.

use crate::{
    decode::{Events, State, step},
    event::{Event, EventSink},
};

/// A streaming modified COBS decoder.
///
/// Create one decoder per byte stream. The decoder waits for the first delimiter before decoding.
///
/// # Example
///
/// ```rust
/// use cobz::CobsDecoder;
///
/// let mut decoder = CobsDecoder::new();
///
/// let values: Vec<u8> = [0x00, 0x03, 0x11, 0x22, 0x02, 0x33]
///     .into_iter()
///     .enumerate()
///     .flat_map(|(i, byte)| decoder.feed(byte, i, i + 1))
///     .filter_map(|event| event.value())
///     .collect();
///
/// assert_eq!(values, [0x11, 0x22, 0x00, 0x33, 0x00]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CobsDecoder<P> {
    state: State<P>,
}

impl<P> CobsDecoder<P> {
    /// Creates a new [`CobsDecoder`] waiting for the first delimiter.
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: State::new(),
        }
    }

    /// Resets the decoder to its initial state.
    #[inline]
    pub fn reset(&mut self) {
        self.state = State::new();
    }

    /// Returns the current state.
    #[inline]
    pub const fn state(&self) -> &State<P> {
        &self.state
    }

    /// Returns `true` once a delimiter was seen.
    #[inline]
    pub const fn is_synchronized(&self) -> bool {
        !self.state.skip_packet
    }

    /// Processes one input `byte` spanning `start..end`.
    pub fn feed(&mut self, byte: u8, start: P, end: P) -> Events<P>
    where
        P: Copy,
    {
        let (state, events) = step(self.state, byte, start, end);

        self.state = state;

        events
    }

    /// Like [`CobsDecoder::feed`], but hands the events to `sink`.
    pub fn feed_into<S>(&mut self, byte: u8, start: P, end: P, sink: &mut S)
    where
        P: Copy,
        S: EventSink<P>,
    {
        for event in self.feed(byte, start, end) {
            sink.put(event);
        }
    }

    /// Decodes an iterator of `(byte, start, end)` triples into an iterator of [`Event`]s.
    pub fn decode<I>(&mut self, input: I) -> Decode<'_, P, I::IntoIter>
    where
        P: Copy,
        I: IntoIterator<Item = (u8, P, P)>,
    {
        Decode {
            decoder: self,
            input: input.into_iter(),
            events: Events::new(),
        }
    }
}

impl<P> Default for CobsDecoder<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator returned by [`CobsDecoder::decode`].
#[derive(Debug)]
pub struct Decode<'a, P, I> {
    decoder: &'a mut CobsDecoder<P>,
    input: I,
    /// Events not yet returned, in reverse order.
    events: Events<P>,
}

impl<P, I> Iterator for Decode<'_, P, I>
where
    P: Copy,
    I: Iterator<Item = (u8, P, P)>,
{
    type Item = Event<P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.events.pop() {
                return Some(event);
            }

            let (byte, start, end) = self.input.next()?;

            self.events = self.decoder.feed(byte, start, end);
            self.events.reverse();
        }
    }
}
