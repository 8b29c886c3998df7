//! Shape-tagged, typed tensor container

use crate::error::{Result, TensorError};
use crate::format::ElementType;
use crate::tensor::{StringTensorCodec, TensorData, TensorShape};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named, typed, shape-tagged tensor payload
///
/// Construction validates that the payload matches the shape: fixed-width
/// types need exactly `element_count * element_size` bytes, strings need
/// exactly `element_count` entries. A `TensorBuffer` is immutable once built.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TensorBufferParts"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorBuffer {
    name: String,
    element_type: ElementType,
    shape: TensorShape,
    data: TensorData,
}

/// Unvalidated fields of a [`TensorBuffer`], as read from an external source
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[derive(Debug, Clone)]
pub struct TensorBufferParts {
    pub name: String,
    pub element_type: ElementType,
    pub shape: TensorShape,
    pub data: TensorData,
}

impl TensorBuffer {
    /// Create a tensor, validating the payload against shape and type
    pub fn new<N: Into<String>>(
        name: N,
        element_type: ElementType,
        shape: TensorShape,
        data: TensorData,
    ) -> Result<Self> {
        let count = usize::try_from(shape.element_count()).map_err(|_| {
            TensorError::InvalidTensorData(format!(
                "Shape {} holds more elements than fit in memory",
                shape
            ))
        })?;

        match (element_type.element_size(), &data) {
            (Some(width), TensorData::Raw(bytes)) => {
                let expected = count.checked_mul(width).ok_or_else(|| {
                    TensorError::InvalidTensorData(format!(
                        "Byte size of {} tensor with shape {} overflows",
                        element_type, shape
                    ))
                })?;
                if bytes.len() != expected {
                    return Err(TensorError::size_mismatch(expected, bytes.len()));
                }
            }
            (None, TensorData::Strings(entries)) => {
                if entries.len() != count {
                    return Err(TensorError::size_mismatch(count, entries.len()));
                }
            }
            _ => {
                return Err(TensorError::InvalidTensorData(format!(
                    "{} tensor cannot carry a {} payload",
                    element_type,
                    data.kind_name()
                )));
            }
        }

        Ok(Self { name: name.into(), element_type, shape, data })
    }

    /// Create a fixed-width tensor from raw little-endian bytes
    pub fn from_raw_bytes<N: Into<String>>(
        name: N,
        element_type: ElementType,
        dims: Vec<u64>,
        bytes: Vec<u8>,
    ) -> Result<Self> {
        Self::new(name, element_type, TensorShape::new(dims)?, TensorData::Raw(bytes))
    }

    /// Create a string tensor from UTF-8 byte strings
    ///
    /// Entries are validated as UTF-8 when decoded, not here.
    pub fn from_strings<N: Into<String>>(
        name: N,
        dims: Vec<u64>,
        entries: Vec<Vec<u8>>,
    ) -> Result<Self> {
        Self::new(name, ElementType::String, TensorShape::new(dims)?, TensorData::Strings(entries))
    }

    /// Get the tensor name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the element type
    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    /// Get the shape
    pub fn shape(&self) -> &TensorShape {
        &self.shape
    }

    /// Get the dimensions
    pub fn dims(&self) -> &[u64] {
        self.shape.dims()
    }

    /// Get the payload
    pub fn data(&self) -> &TensorData {
        &self.data
    }

    /// The contiguous element bytes, `None` for string tensors
    pub fn raw_bytes(&self) -> Option<&[u8]> {
        self.data.as_raw()
    }

    /// The string table, `None` for fixed-width tensors
    pub fn string_entries(&self) -> Option<&[Vec<u8>]> {
        self.data.as_strings()
    }

    /// Number of elements, zero if any dimension is zero
    pub fn element_count(&self) -> u64 {
        self.shape.element_count()
    }

    /// Bytes of the element at a row-major flat index
    ///
    /// For fixed-width types this is an `element_size` slice of the buffer;
    /// for strings it is the entry's UTF-8 bytes.
    pub fn byte_at(&self, index: usize) -> Result<&[u8]> {
        // element_count fits in usize, checked at construction
        let len = self.shape.element_count() as usize;
        if index >= len {
            return Err(TensorError::IndexOutOfRange { index, len });
        }
        match (&self.data, self.element_type.element_size()) {
            (TensorData::Raw(bytes), Some(width)) => {
                let start = index * width;
                bytes.get(start..start + width).ok_or(TensorError::IndexOutOfRange { index, len })
            }
            (TensorData::Strings(entries), _) => entries
                .get(index)
                .map(Vec::as_slice)
                .ok_or(TensorError::IndexOutOfRange { index, len }),
            (TensorData::Raw(_), None) => Err(TensorError::IndexOutOfRange { index, len }),
        }
    }

    /// String element at a row-major flat index, decoded as UTF-8
    pub fn string_at(&self, index: usize) -> Result<&str> {
        if self.element_type != ElementType::String {
            return Err(TensorError::InvalidTensorData(format!(
                "{} tensor has no string elements",
                self.element_type
            )));
        }
        StringTensorCodec::decode_entry(index, self.byte_at(index)?)
    }

    /// Split the tensor into its name, element type, shape and payload
    pub fn into_parts(self) -> (String, ElementType, TensorShape, TensorData) {
        (self.name, self.element_type, self.shape, self.data)
    }

    /// Decode into a typed array
    pub fn to_array(&self) -> Result<crate::array::TypedArray> {
        crate::marshal::decode(self)
    }
}

impl TryFrom<TensorBufferParts> for TensorBuffer {
    type Error = TensorError;

    fn try_from(parts: TensorBufferParts) -> Result<Self> {
        Self::new(parts.name, parts.element_type, parts.shape, parts.data)
    }
}

impl std::fmt::Display for TensorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} {} ({})", self.name, self.element_type, self.shape, self.data)
    }
}
