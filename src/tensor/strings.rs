//! UTF-8 string element codec
//!
//! Each element is stored as its own byte string with an explicit length;
//! there is no terminator, so embedded NUL bytes survive the round trip.

use crate::error::{Result, TensorError};

/// Encoder and decoder for string tensor elements
pub struct StringTensorCodec;

impl StringTensorCodec {
    /// Encode text elements, in row-major order, to UTF-8 byte strings
    pub fn encode<S: AsRef<str>>(values: &[S]) -> Vec<Vec<u8>> {
        values.iter().map(|value| value.as_ref().as_bytes().to_vec()).collect()
    }

    /// Decode UTF-8 byte strings back into text
    ///
    /// Fails on the first malformed entry, reporting its index.
    pub fn decode<B: AsRef<[u8]>>(entries: &[B]) -> Result<Vec<String>> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::decode_entry(index, entry.as_ref()).map(str::to_owned))
            .collect()
    }

    /// Borrow one entry as text
    pub fn decode_entry(index: usize, entry: &[u8]) -> Result<&str> {
        std::str::from_utf8(entry).map_err(|source| TensorError::InvalidUtf8 { index, source })
    }
}
