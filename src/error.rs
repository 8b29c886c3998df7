//! Error types for the tensor codec library

use thiserror::Error;

/// Result type alias for tensor codec operations
pub type Result<T> = core::result::Result<T, TensorError>;

/// Error types that can occur when marshalling arrays and tensors
///
/// The bit-level float codecs never fail; every variant here comes from
/// tensor construction, the marshaller, or the string codec.
#[derive(Error, Debug)]
pub enum TensorError {
    /// Payload length does not match the shape and element type
    #[error("Size mismatch: expected {expected}, found {found}")]
    SizeMismatch { expected: u64, found: u64 },

    /// The array's element kind has no tensor element type
    #[error("Unsupported element type: {0}")]
    UnsupportedElementType(String),

    /// A string entry is not valid UTF-8
    #[error("Invalid UTF-8 in string entry {index}")]
    InvalidUtf8 {
        index: usize,
        #[source]
        source: core::str::Utf8Error,
    },

    /// Flat element index past the end of the tensor
    #[error("Index {index} out of range for tensor with {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// Numeric data type code not in the element type table
    #[error("Unknown tensor data type: {0}")]
    UnknownDataType(u32),

    /// Tensor data that is structurally inconsistent
    #[error("Invalid tensor data: {0}")]
    InvalidTensorData(String),
}

impl TensorError {
    /// Shorthand for a length mismatch measured in elements or bytes
    pub(crate) fn size_mismatch(expected: usize, found: usize) -> Self {
        TensorError::SizeMismatch { expected: expected as u64, found: found as u64 }
    }
}
