//! Complex element values
//!
//! Plain real/imaginary pairs. The library only stores and moves them, so
//! there is no arithmetic beyond construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! complex_type {
    ($(#[$meta:meta])* $name:ident($part:ty)) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Copy, Clone, Debug, Default, PartialEq)]
        pub struct $name {
            pub re: $part,
            pub im: $part,
        }

        impl $name {
            pub const fn new(re: $part, im: $part) -> Self {
                Self { re, im }
            }

            /// The complex conjugate
            pub fn conj(self) -> Self {
                Self::new(self.re, -self.im)
            }
        }

        impl From<($part, $part)> for $name {
            fn from((re, im): ($part, $part)) -> Self {
                Self::new(re, im)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                if self.im.is_sign_negative() {
                    write!(f, "{}-{}i", self.re, -self.im)
                } else {
                    write!(f, "{}+{}i", self.re, self.im)
                }
            }
        }
    };
}

complex_type!(
    /// Complex number with `f32` parts, the `COMPLEX64` element
    Complex32(f32)
);

complex_type!(
    /// Complex number with `f64` parts, the `COMPLEX128` element
    Complex64(f64)
);
