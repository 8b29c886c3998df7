//! # tensor-codec - typed arrays to tensors and back
//!
//! This library converts in-memory typed arrays into self-describing tensor
//! buffers (name, element type, shape, little-endian payload) and back. It
//! includes bit-exact codecs for the compact float formats used by
//! machine-learning tensors: BFloat16, Float16, Float8E4M3 and Float8E5M2.
//!
//! ```
//! use tensor_codec::prelude::*;
//!
//! let array = TypedArray::from_vec(vec![2, 2], vec![1.0f32, 2.0, 3.0, 4.0])?;
//! let tensor = array.to_tensor("weights")?;
//! assert_eq!(tensor.element_type(), ElementType::Float32);
//! assert_eq!(tensor.raw_bytes().map(<[u8]>::len), Some(16));
//!
//! let decoded = tensor.to_array()?;
//! assert_eq!(decoded, array);
//! # Ok::<(), tensor_codec::TensorError>(())
//! ```

// Public modules
pub mod array;
pub mod complex;
pub mod error;
pub mod float;
pub mod format;
pub mod marshal;
pub mod tensor;

// Re-export main types for convenience
pub use error::{Result, TensorError};
pub use marshal::{decode, encode};

// Re-export commonly used items in prelude
pub mod prelude {
    pub use crate::array::{ArrayData, Element, TypedArray};
    pub use crate::complex::{Complex32, Complex64};
    pub use crate::error::{Result, TensorError};
    pub use crate::float::{
        BFloat16, CompactFloat, CompactFormat, Float16, Float8E4M3, Float8E5M2, FloatFormat,
    };
    pub use crate::format::{ElementKind, ElementType};
    pub use crate::marshal::{decode, encode};
    pub use crate::tensor::{StringTensorCodec, TensorBuffer, TensorData, TensorShape};
}
