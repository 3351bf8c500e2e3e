//! Turning symbol sequences into packed bit streams.

pub(crate) mod bit_writer;
mod stream_encoder;

pub use stream_encoder::{encode, EncodeError};
