//! Recovering symbol sequences from packed bit streams.

pub(crate) mod bit_reader;
mod stream_decoder;

pub use stream_decoder::{decode, DecodeError};
