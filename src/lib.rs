//! # cobz
//!
//! A streaming decoder for modified Consistent Overhead Byte Stuffing (COBS) in `no_std` environments.
//!
//! Modified COBS sends the zero delimiter at the *start* of each packet instead of at the end,
//! so a receiver knows immediately when a new packet begins and a truncated packet never
//! corrupts the next one.
//!
//! The decoder consumes one byte at a time, each tagged with a `(start, end)` position of any
//! type (sample index, timestamp, stream offset, ...), and emits [`Event`]s: one
//! [`Event::PacketStart`] per delimiter and one [`Event::DecodedByte`] per recovered payload byte.
//! Malformed input is never an error: the decoder skips bytes until the next delimiter.
//!
//! - [`decode::step`] is the pure transition function.
//! - [`CobsDecoder`] owns the state and feeds bytes through [`decode::step`].
//! - [`FramedRead`] decodes bytes read from an [`embedded_io_async::Read`] source, positioned by stream offset.
//!
//! It's recommended to use [`embedded_io_adapters`](https://docs.rs/embedded-io-adapters/0.6.1/embedded_io_adapters/) if you are using other async `Read` traits like [`tokio`](https://docs.rs/tokio/latest/tokio/index.html)'s [`AsyncRead`](https://docs.rs/tokio/latest/tokio/io/trait.AsyncRead.html).
//!
//! ## Features
//!
//! - `log`: Enables logging using [`log`](https://docs.rs/log/latest/log/).
//! - `tracing`: Enables logging using [`tracing`](https://docs.rs/tracing/latest/tracing/).
//! - `defmt`: Enables logging using [`defmt`](https://docs.rs/defmt/latest/defmt/index.html)
//!   and implements [`defmt::Format`](https://docs.rs/defmt/latest/defmt/trait.Format.html) for structs and enums.

#![no_std]
#![deny(unsafe_code)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod decode;
pub mod event;
pub use event::{Event, EventSink};

mod decoder;
pub use decoder::{CobsDecoder, Decode};

mod error;
pub use error::ReadError;

mod framed;
pub use framed::FramedRead;

pub mod functions;

pub mod state;

pub(crate) mod logging;

mod macros;

#[doc(hidden)]
pub mod mock;

#[cfg(test)]
mod tests;

#[cfg(test)]
#[macro_use]
extern crate std;
