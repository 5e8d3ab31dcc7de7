//! The modified COBS decode state machine.
//!
//! In modified COBS the zero delimiter is sent at the *start* of each packet, followed by the
//! classical COBS stuffed bytes. Every byte after the delimiter is either a stuffing code,
//! announcing how many literal bytes follow before an eliminated zero, or a literal byte.
//! A code of `0xFF` announces `254` literal bytes and no eliminated zero.
//!
//! The transition function [`step`] is pure: it takes the current [`State`] and one input byte
//! and returns the next [`State`] with the [`Events`] the byte produced.

use crate::event::Event;

#[cfg(any(feature = "log", feature = "defmt", feature = "tracing"))]
use crate::logging::DECODE;
use crate::logging::{debug, trace};

/// The code announcing a run without an eliminated zero.
pub const NO_ZERO_CODE: u8 = 0xFF;

/// The packet delimiter.
pub const DELIMITER: u8 = 0x00;

/// Events produced by a single input byte.
///
/// One byte yields at most two events: a decoded literal followed by an implied zero.
pub type Events<P> = heapless::Vec<Event<P>, 2>;

/// The decoder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct State<P> {
    /// Resynchronizing: every byte except the delimiter is ignored.
    pub skip_packet: bool,
    /// The most recently read stuffing code.
    pub code: u8,
    /// Literal bytes left in the current run.
    pub copy: u8,
    /// Span of the previous input byte.
    ///
    /// `None` until a stuffing code was consumed after the last reset.
    pub pending_span: Option<(P, P)>,
}

impl<P> State<P> {
    /// Creates the initial state: waiting for the first delimiter.
    #[inline]
    pub const fn new() -> Self {
        Self {
            skip_packet: true,
            code: NO_ZERO_CODE,
            copy: 0,
            pending_span: None,
        }
    }

    /// The state right after a delimiter.
    #[inline]
    const fn packet_start() -> Self {
        Self {
            skip_packet: false,
            code: NO_ZERO_CODE,
            copy: 0,
            pending_span: None,
        }
    }

    /// Returns `true` if a stuffing code is expected next.
    #[inline]
    pub const fn awaits_code(&self) -> bool {
        !self.skip_packet && self.copy == 0
    }

    /// Returns `true` if the current packet is incomplete.
    ///
    /// A packet is incomplete while literal bytes of a run are outstanding.
    #[inline]
    pub const fn is_mid_run(&self) -> bool {
        !self.skip_packet && self.copy > 0
    }
}

impl<P> Default for State<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Processes one input `byte` spanning `start..end`.
///
/// Never fails: malformed input is dropped until the next delimiter.
pub fn step<P: Copy>(mut state: State<P>, byte: u8, start: P, end: P) -> (State<P>, Events<P>) {
    let mut events = Events::new();

    if byte == DELIMITER {
        if state.is_mid_run() {
            debug!(target: DECODE, "Packet truncated. outstanding: {}", state.copy);
        }

        debug!(target: DECODE, "Packet start");

        push(&mut events, Event::PacketStart { start, end });

        return (State::packet_start(), events);
    }

    if state.skip_packet {
        trace!(target: DECODE, "Skipped. byte: {:#04x}", byte);

        return (state, events);
    }

    if state.copy == 0 {
        trace!(target: DECODE, "Code. code: {:#04x}", byte);

        state.code = byte;
        state.copy = byte;
    } else if let Some((start, end)) = state.pending_span {
        push(
            &mut events,
            Event::DecodedByte {
                start,
                end,
                value: byte,
            },
        );
    }

    state.pending_span = Some((start, end));
    state.copy -= 1;

    if state.copy == 0 && state.code != NO_ZERO_CODE {
        trace!(target: DECODE, "Implied zero");

        push(
            &mut events,
            Event::DecodedByte {
                start,
                end,
                value: 0,
            },
        );
    }

    (state, events)
}

#[inline]
fn push<P>(events: &mut Events<P>, event: Event<P>) {
    // Capacity covers the worst case of a literal followed by an implied zero.
    let _ = events.push(event);
}

#[cfg(test)]
mod test {
    use std::vec::Vec;

    use super::*;

    /// Feeds `bytes` positioned by their index and collects every event.
    fn run(state: State<usize>, bytes: &[u8]) -> (State<usize>, Vec<Event<usize>>) {
        bytes
            .iter()
            .enumerate()
            .fold((state, Vec::new()), |(state, mut all), (i, &byte)| {
                let (state, events) = step(state, byte, i, i + 1);

                all.extend(events);

                (state, all)
            })
    }

    fn start(i: usize) -> Event<usize> {
        Event::PacketStart {
            start: i,
            end: i + 1,
        }
    }

    fn byte(i: usize, value: u8) -> Event<usize> {
        Event::DecodedByte {
            start: i,
            end: i + 1,
            value,
        }
    }

    #[test]
    fn initial_state_skips() {
        let state = State::<usize>::new();

        assert!(state.skip_packet);
        assert_eq!(state.code, 0xFF);
        assert_eq!(state.copy, 0);
        assert_eq!(state.pending_span, None);
        assert_eq!(state, State::default());
    }

    #[test]
    fn noise_before_first_delimiter_is_ignored() {
        let (state, events) = run(State::new(), &[0x03, 0xAA, 0xBB, 0x01, 0xFF, 0x02]);

        assert!(events.is_empty());
        assert_eq!(state, State::new());
    }

    #[test]
    fn delimiter_resets_from_any_state() {
        let prefixes: &[&[u8]] = &[
            &[],
            &[0x05],
            &[0x00],
            &[0x00, 0x05],
            &[0x00, 0x05, 0x11],
            &[0x00, 0xFF, 0x11, 0x22],
            &[0x00, 0x02, 0x11],
        ];

        for prefix in prefixes {
            let (state, _) = run(State::new(), prefix);
            let (state, events) = step(state, 0x00, 100, 101);

            assert_eq!(events.as_slice(), &[start(100)]);
            assert!(!state.skip_packet);
            assert_eq!(state.code, 0xFF);
            assert_eq!(state.copy, 0);
        }
    }

    #[test]
    fn decoded_values_lag_one_byte_behind() {
        let (_, events) = run(State::new(), &[0x00, 0x03, 0xAA, 0xBB, 0x00]);

        assert_eq!(
            events,
            [start(0), byte(1, 0xAA), byte(2, 0xBB), byte(3, 0x00), start(4)]
        );
    }

    #[test]
    fn truncated_run_drops_implied_zero() {
        let (state, events) = run(State::new(), &[0x00, 0x04, 0xAA, 0xBB]);

        assert_eq!(events, [start(0), byte(1, 0xAA), byte(2, 0xBB)]);
        assert!(state.is_mid_run());

        let (state, events) = step(state, 0x00, 4, 5);

        assert_eq!(events.as_slice(), &[start(4)]);
        assert!(state.awaits_code());
    }

    #[test]
    fn code_one_is_a_zero() {
        let (_, events) = run(State::new(), &[0x00, 0x01, 0x01, 0x02, 0x7F]);

        assert_eq!(
            events,
            [
                start(0),
                byte(1, 0x00),
                byte(2, 0x00),
                byte(3, 0x7F),
                byte(4, 0x00)
            ]
        );
    }

    #[test]
    fn implied_zero_precedes_next_run() {
        for code in 1..=254u8 {
            let mut bytes = std::vec![0x00, code];
            bytes.extend(core::iter::repeat_n(0x55, code as usize - 1));

            let (state, events) = run(State::new(), &bytes);

            assert_eq!(events.last(), Some(&byte(bytes.len() - 1, 0x00)));
            assert!(state.awaits_code());

            let values: Vec<u8> = events.iter().filter_map(Event::value).collect();

            assert_eq!(values.len(), code as usize);
            assert!(values[..code as usize - 1].iter().all(|&v| v == 0x55));
        }
    }

    #[test]
    fn no_zero_code_never_implies_zero() {
        let mut bytes = std::vec![0x00, 0xFF];
        bytes.extend((1..=254u8).collect::<Vec<_>>());

        let (state, events) = run(State::new(), &bytes);
        let values: Vec<u8> = events.iter().filter_map(Event::value).collect();

        assert_eq!(values, (1..=254u8).collect::<Vec<_>>());
        assert!(state.awaits_code());

        // The byte after a full run is a new code.
        let (state, events) = step(state, 0x02, 256, 257);

        assert!(events.is_empty());
        assert_eq!(state.code, 0x02);
        assert_eq!(state.copy, 1);
    }

    #[test]
    fn noise_after_resync_point_is_decoded() {
        let (_, events) = run(State::new(), &[0x42, 0x00, 0x02, 0x42]);

        assert_eq!(events, [start(1), byte(2, 0x42), byte(3, 0x00)]);
    }
}
