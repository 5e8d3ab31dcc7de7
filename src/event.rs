//! Events emitted by the decoder.

/// An annotation emitted while decoding a modified COBS byte stream.
///
/// `P` is the position type of the upstream byte source, e.g. a sample index or a timestamp.
/// The decoder carries positions through without interpreting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event<P> {
    /// A delimiter byte was seen. A new packet starts.
    PacketStart {
        /// Start position of the delimiter byte.
        start: P,
        /// End position of the delimiter byte.
        end: P,
    },
    /// A payload byte was recovered.
    DecodedByte {
        /// Start position of the span this byte is attached to.
        start: P,
        /// End position of the span this byte is attached to.
        end: P,
        /// The recovered byte.
        value: u8,
    },
}

impl<P> Event<P> {
    /// Returns the `(start, end)` span of this event.
    #[inline]
    pub fn span(&self) -> (P, P)
    where
        P: Copy,
    {
        match *self {
            Self::PacketStart { start, end } => (start, end),
            Self::DecodedByte { start, end, .. } => (start, end),
        }
    }

    /// Returns the recovered byte if this is a [`Event::DecodedByte`].
    #[inline]
    pub const fn value(&self) -> Option<u8> {
        match self {
            Self::PacketStart { .. } => None,
            Self::DecodedByte { value, .. } => Some(*value),
        }
    }

    /// Returns `true` if this is a [`Event::PacketStart`].
    #[inline]
    pub const fn is_packet_start(&self) -> bool {
        matches!(self, Self::PacketStart { .. })
    }
}

impl<P> core::fmt::Display for Event<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PacketStart { .. } => write!(f, "Start"),
            Self::DecodedByte { value, .. } => write!(f, "0x{value:02X}"),
        }
    }
}

/// A downstream consumer of [`Event`]s.
pub trait EventSink<P> {
    /// Receives one event.
    fn put(&mut self, event: Event<P>);
}

impl<P, F> EventSink<P> for F
where
    F: FnMut(Event<P>),
{
    fn put(&mut self, event: Event<P>) {
        self(event)
    }
}
