//! Shared conversion utilities

pub mod breaks;
pub mod delimited;

pub use breaks::{decode_breaks, encode_breaks, BREAK_MARKER};
pub use delimited::{read_delimited, sniff_delimiter, write_delimited};
