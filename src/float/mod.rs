//! Bit-exact codecs for compact floating-point formats
//!
//! Each format converts between a fixed-width unsigned code and `f32`. Both
//! directions are total: every code decodes to some `f32`, and every `f32`,
//! NaN and the infinities included, encodes to some code. Encoding rounds to
//! nearest with ties to even and saturates finite overflow to the largest
//! finite value of the format.
//!
//! | Format     | Width | Exp | Mant | Bias | All-ones exponent                  |
//! |------------|-------|-----|------|------|------------------------------------|
//! | BFloat16   | 16    | 8   | 7    | 127  | mantissa 0: ±Inf, otherwise NaN    |
//! | Float16    | 16    | 5   | 10   | 15   | mantissa 0: ±Inf, otherwise NaN    |
//! | Float8E4M3 | 8     | 4   | 3    | 7    | only mantissa 7 is NaN, no Inf     |
//! | Float8E5M2 | 8     | 5   | 2    | 15   | mantissa 0: ±Inf, otherwise NaN    |

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::format::endian::LeBytes;

/// Declares a `#[repr(transparent)]` value type over a format's code and
/// wires it to the format's free-standing codec functions.
macro_rules! compact_float_value {
    (
        $(#[$meta:meta])*
        $name:ident($bits:ty), $format:expr, $encode:path, $decode:path
    ) => {
        $(#[$meta])*
        ///
        /// Equality and hashing compare codes, not values.
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name(pub $bits);

        impl $name {
            /// Wrap a raw code
            #[inline]
            pub const fn from_bits(bits: $bits) -> Self {
                Self(bits)
            }

            /// Get the raw code
            #[inline]
            pub const fn to_bits(self) -> $bits {
                self.0
            }

            /// Round an `f32` into this format
            #[inline]
            pub fn from_f32(value: f32) -> Self {
                Self($encode(value))
            }

            /// Widen to the exact `f32` value of the code
            #[inline]
            pub fn to_f32(self) -> f32 {
                $decode(self.0)
            }

            /// Check if the code is a NaN pattern
            #[inline]
            pub fn is_nan(self) -> bool {
                self.to_f32().is_nan()
            }
        }

        impl $crate::float::CompactFloat for $name {
            type Bits = $bits;
            const FORMAT: $crate::float::FloatFormat = $format;

            #[inline]
            fn encode(value: f32) -> $bits {
                $encode(value)
            }

            #[inline]
            fn decode(bits: $bits) -> f32 {
                $decode(bits)
            }
        }

        impl From<$name> for f32 {
            fn from(value: $name) -> f32 {
                value.to_f32()
            }
        }

        impl From<f32> for $name {
            fn from(value: f32) -> Self {
                Self::from_f32(value)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_f32())
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.to_f32())
            }
        }
    };
}

pub mod bfloat16;
pub mod float16;
pub mod float8;

pub use bfloat16::{bf16_to_f32, f32_to_bf16, BFloat16};
pub use float16::{f16_to_f32, f32_to_f16, Float16};
pub use float8::{
    f32_to_f8e4m3, f32_to_f8e5m2, f8e4m3_to_f32, f8e5m2_to_f32, Float8E4M3, Float8E5M2,
};

/// Bit layout and special codes of a compact float format
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatFormat {
    /// Canonical format name
    pub name: &'static str,
    /// Number of exponent bits
    pub exponent_bits: u32,
    /// Number of explicit mantissa bits
    pub mantissa_bits: u32,
    /// Exponent bias
    pub bias: i32,
    /// Positive code of the largest finite value
    pub max_finite_code: u32,
    /// Largest finite value
    pub max_value: f32,
    /// Positive code produced for NaN inputs
    pub nan_code: u32,
    /// Positive infinity code, if the format has one
    pub infinity_code: Option<u32>,
}

impl FloatFormat {
    /// Total width in bits (sign + exponent + mantissa)
    pub fn width(&self) -> u32 {
        1 + self.exponent_bits + self.mantissa_bits
    }

    /// Check if the format can represent infinity
    pub fn has_infinity(&self) -> bool {
        self.infinity_code.is_some()
    }

    /// Smallest positive normal value, `2^(1 - bias)`
    pub fn min_positive_normal(&self) -> f32 {
        f32::from_bits(((1 - self.bias + 127) as u32) << 23)
    }
}

impl core::fmt::Display for FloatFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (E{}M{}, bias {}, max {})",
            self.name, self.exponent_bits, self.mantissa_bits, self.bias, self.max_value
        )
    }
}

/// The compact float formats, as a closed set
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompactFormat {
    /// Brain floating point, 8 exponent bits
    BFloat16,
    /// IEEE 754 binary16
    Float16,
    /// 8-bit, 4 exponent bits, finite only
    Float8E4M3,
    /// 8-bit, 5 exponent bits
    Float8E5M2,
}

impl CompactFormat {
    /// All supported formats
    pub const ALL: [CompactFormat; 4] = [
        CompactFormat::BFloat16,
        CompactFormat::Float16,
        CompactFormat::Float8E4M3,
        CompactFormat::Float8E5M2,
    ];

    /// Bit layout of the format
    pub fn layout(self) -> FloatFormat {
        match self {
            CompactFormat::BFloat16 => bfloat16::FORMAT,
            CompactFormat::Float16 => float16::FORMAT,
            CompactFormat::Float8E4M3 => float8::E4M3_FORMAT,
            CompactFormat::Float8E5M2 => float8::E5M2_FORMAT,
        }
    }

    /// Look up a format by name (`bf16`, `bfloat16`, `f16`, `e4m3`, ...)
    pub fn by_name(name: &str) -> Option<CompactFormat> {
        match name.to_ascii_lowercase().as_str() {
            "bf16" | "bfloat16" => Some(CompactFormat::BFloat16),
            "f16" | "fp16" | "float16" | "half" => Some(CompactFormat::Float16),
            "e4m3" | "f8e4m3" | "float8e4m3" | "float8_e4m3fn" => {
                Some(CompactFormat::Float8E4M3)
            }
            "e5m2" | "f8e5m2" | "float8e5m2" | "float8_e5m2" => {
                Some(CompactFormat::Float8E5M2)
            }
            _ => None,
        }
    }

    /// Round an `f32` into this format, widened to `u32`
    pub fn encode(self, value: f32) -> u32 {
        match self {
            CompactFormat::BFloat16 => f32_to_bf16(value) as u32,
            CompactFormat::Float16 => f32_to_f16(value) as u32,
            CompactFormat::Float8E4M3 => f32_to_f8e4m3(value) as u32,
            CompactFormat::Float8E5M2 => f32_to_f8e5m2(value) as u32,
        }
    }

    /// Decode a code of this format; bits above the format width are ignored
    pub fn decode(self, code: u32) -> f32 {
        match self {
            CompactFormat::BFloat16 => bf16_to_f32(code as u16),
            CompactFormat::Float16 => f16_to_f32(code as u16),
            CompactFormat::Float8E4M3 => f8e4m3_to_f32(code as u8),
            CompactFormat::Float8E5M2 => f8e5m2_to_f32(code as u8),
        }
    }
}

impl core::fmt::Display for CompactFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.layout().name)
    }
}

/// A compact float format with a bit-exact conversion to and from `f32`
pub trait CompactFloat {
    /// Unsigned integer holding one code
    type Bits: Copy + LeBytes;

    /// Layout of the format
    const FORMAT: FloatFormat;

    /// Round an `f32` to the nearest code, ties to even, saturating
    fn encode(value: f32) -> Self::Bits;

    /// Widen a code to its exact `f32` value
    fn decode(bits: Self::Bits) -> f32;
}

/// Split an `f32` into sign bit, biased exponent and mantissa fields
#[inline]
pub(crate) fn split_f32(value: f32) -> (u32, u32, u32) {
    let bits = value.to_bits();
    (bits >> 31, (bits >> 23) & 0xFF, bits & 0x7F_FFFF)
}

/// Round a finite, non-zero `f32` magnitude onto the grid of a format with
/// `mantissa_bits` fraction bits and the given exponent bias.
///
/// Returns the unsigned code (exponent and mantissa fields, no sign bit).
/// Mantissa carries propagate into the exponent field, so the result may
/// exceed the format's largest finite code; the caller clamps.
pub(crate) fn round_magnitude(exp: u32, mant: u32, mantissa_bits: u32, bias: i32) -> u32 {
    // value = significand * 2^scale
    let (significand, scale) = if exp == 0 {
        (mant as u64, -149i32)
    } else {
        ((mant | 0x80_0000) as u64, exp as i32 - 150)
    };
    let leading = 63 - significand.leading_zeros() as i32;
    let exponent = scale + leading;
    let min_normal = 1 - bias;
    let m = mantissa_bits as i32;

    // Target grid spacing and the biased exponent field below the implicit bit
    let (grid, field) = if exponent < min_normal {
        (min_normal - m, 0u64)
    } else {
        (exponent - m, (exponent + bias - 1) as u64)
    };

    let shift = grid - scale;
    let quantum = if shift <= 0 {
        significand << (-shift) as u32
    } else {
        round_shift_even(significand, shift as u32)
    };

    let code = (field << mantissa_bits) + quantum;
    u32::try_from(code).unwrap_or(u32::MAX)
}

/// `value >> shift`, rounded to nearest with ties to even
#[inline]
fn round_shift_even(value: u64, shift: u32) -> u64 {
    // significands are below 2^24, so anything past this is under half an ulp
    if shift > 32 {
        return 0;
    }
    let quotient = value >> shift;
    let remainder = value & ((1u64 << shift) - 1);
    let half = 1u64 << (shift - 1);
    if remainder > half || (remainder == half && quotient & 1 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Build the `f32` for a finite code of a format whose whole range, subnormals
/// included, is normal in `f32`.
#[inline]
pub(crate) fn widen(sign: u32, expo: u32, mant: u32, mantissa_bits: u32, bias: i32) -> f32 {
    let sign = sign << 31;
    if expo == 0 {
        if mant == 0 {
            return f32::from_bits(sign);
        }
        // Subnormal: renormalize around the leading mantissa bit
        let leading = 31 - mant.leading_zeros();
        let exponent = 1 - bias - mantissa_bits as i32 + leading as i32;
        let fraction = (mant ^ (1 << leading)) << (23 - leading);
        return f32::from_bits(sign | (((exponent + 127) as u32) << 23) | fraction);
    }
    let exponent = (expo as i32 - bias + 127) as u32;
    f32::from_bits(sign | (exponent << 23) | (mant << (23 - mantissa_bits)))
}
