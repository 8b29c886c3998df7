//! Conversion between typed arrays and tensor buffers
//!
//! [`encode`] maps an array's element kind to a tensor element type and
//! serializes the elements in row-major order: fixed-width elements in their
//! little-endian layout, compact floats through their bit codec, strings as
//! UTF-8 byte strings. [`decode`] dispatches on the element type and inverts
//! the transform.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;
