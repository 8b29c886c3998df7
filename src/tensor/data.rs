//! Tensor payload storage

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Payload of a tensor
///
/// Fixed-width element types carry one contiguous little-endian byte buffer.
/// String tensors carry one UTF-8 byte string per element instead.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TensorData {
    /// Contiguous element bytes in row-major order
    Raw(Vec<u8>),

    /// One byte string per element in row-major order
    Strings(Vec<Vec<u8>>),
}

impl TensorData {
    /// Total payload size in bytes
    pub fn byte_len(&self) -> usize {
        match self {
            TensorData::Raw(bytes) => bytes.len(),
            TensorData::Strings(entries) => entries.iter().map(Vec::len).sum(),
        }
    }

    /// Check if the payload has no bytes and no entries
    pub fn is_empty(&self) -> bool {
        match self {
            TensorData::Raw(bytes) => bytes.is_empty(),
            TensorData::Strings(entries) => entries.is_empty(),
        }
    }

    /// The raw byte buffer, if this is a fixed-width payload
    pub fn as_raw(&self) -> Option<&[u8]> {
        match self {
            TensorData::Raw(bytes) => Some(bytes),
            TensorData::Strings(_) => None,
        }
    }

    /// The string table, if this is a string payload
    pub fn as_strings(&self) -> Option<&[Vec<u8>]> {
        match self {
            TensorData::Raw(_) => None,
            TensorData::Strings(entries) => Some(entries),
        }
    }

    /// Short name of the payload kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            TensorData::Raw(_) => "raw bytes",
            TensorData::Strings(_) => "string table",
        }
    }

    /// Get a hexadecimal representation of the first few bytes (for debugging)
    pub fn hex_preview(&self, max_bytes: usize) -> String {
        let data: &[u8] = match self {
            TensorData::Raw(bytes) => bytes,
            TensorData::Strings(entries) => entries.first().map(Vec::as_slice).unwrap_or(&[]),
        };
        let preview_len = max_bytes.min(data.len());

        if preview_len == 0 {
            return "[]".to_string();
        }

        let hex: String = data[..preview_len]
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ");

        if data.len() > max_bytes {
            format!("[{} ... ({} more bytes)]", hex, data.len() - preview_len)
        } else {
            format!("[{}]", hex)
        }
    }
}

impl Default for TensorData {
    fn default() -> Self {
        TensorData::Raw(Vec::new())
    }
}

impl std::fmt::Display for TensorData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TensorData::Raw(bytes) => {
                write!(f, "TensorData(raw, {} bytes, {})", bytes.len(), self.hex_preview(8))
            }
            TensorData::Strings(entries) => write!(
                f,
                "TensorData(strings, {} entries, {} bytes)",
                entries.len(),
                self.byte_len()
            ),
        }
    }
}
