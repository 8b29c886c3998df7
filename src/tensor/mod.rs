//! Tensor containers
//!
//! [`TensorBuffer`] is the serialized form of an array: a name, an element
//! type, a shape and either raw little-endian bytes or a table of UTF-8
//! strings.

pub mod buffer;
pub mod data;
pub mod shape;
pub mod strings;

pub use buffer::*;
pub use data::*;
pub use shape::*;
pub use strings::*;
