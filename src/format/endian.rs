//! Little-endian element layouts
//!
//! Every fixed-width element is stored little-endian. Complex values are a
//! real/imaginary pair, real part first.

use crate::complex::{Complex32, Complex64};

/// An element with a fixed little-endian byte layout
pub trait LeBytes: Copy {
    /// Width of one element in bytes
    const WIDTH: usize;

    /// Append the element's bytes to `out`
    fn put_le(self, out: &mut Vec<u8>);

    /// Read an element from exactly `WIDTH` bytes
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_le_bytes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LeBytes for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();

                #[inline]
                fn put_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; core::mem::size_of::<$ty>()];
                    buf.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(buf)
                }
            }
        )*
    };
}

impl_le_bytes!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl LeBytes for bool {
    const WIDTH: usize = 1;

    #[inline]
    fn put_le(self, out: &mut Vec<u8>) {
        out.push(self as u8);
    }

    #[inline]
    fn from_le_slice(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }
}

impl LeBytes for Complex32 {
    const WIDTH: usize = 8;

    #[inline]
    fn put_le(self, out: &mut Vec<u8>) {
        self.re.put_le(out);
        self.im.put_le(out);
    }

    #[inline]
    fn from_le_slice(bytes: &[u8]) -> Self {
        let (re, im) = bytes.split_at(4);
        Complex32::new(f32::from_le_slice(re), f32::from_le_slice(im))
    }
}

impl LeBytes for Complex64 {
    const WIDTH: usize = 16;

    #[inline]
    fn put_le(self, out: &mut Vec<u8>) {
        self.re.put_le(out);
        self.im.put_le(out);
    }

    #[inline]
    fn from_le_slice(bytes: &[u8]) -> Self {
        let (re, im) = bytes.split_at(8);
        Complex64::new(f64::from_le_slice(re), f64::from_le_slice(im))
    }
}

/// Serialize a slice of elements into a new byte buffer
pub fn write_elements<T: LeBytes>(values: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * T::WIDTH);
    for &value in values {
        value.put_le(&mut out);
    }
    out
}

/// Deserialize a byte buffer into elements
///
/// Trailing bytes short of a whole element are ignored; callers validate the
/// length beforehand.
pub fn read_elements<T: LeBytes>(bytes: &[u8]) -> Vec<T> {
    bytes.chunks_exact(T::WIDTH).map(T::from_le_slice).collect()
}
