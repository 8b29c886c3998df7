//! Element type system and byte layouts
//!
//! This module defines the closed set of tensor element types, the element
//! kinds of in-memory arrays, and the little-endian layout of fixed-width
//! elements.

pub mod endian;
pub mod types;

pub use endian::*;
pub use types::*;
