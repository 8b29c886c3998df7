//! BFloat16: the upper half of an IEEE single-precision float
//!
//! Sign, the full 8-bit exponent and the top 7 mantissa bits of an `f32`.
//! The exponent range matches `f32`, so only precision is lost on encode.

use super::FloatFormat;

/// BFloat16 layout
pub const FORMAT: FloatFormat = FloatFormat {
    name: "bfloat16",
    exponent_bits: 8,
    mantissa_bits: 7,
    bias: 127,
    max_finite_code: 0x7F7F,
    max_value: f32::from_bits(0x7F7F_0000),
    nan_code: 0x7FC0,
    infinity_code: Some(0x7F80),
};

const SIGN_MASK: u16 = 0x8000;
const EXPONENT_MASK: u16 = 0x7F80;
const MANTISSA_MASK: u16 = 0x007F;

/// Convert an `f32` to a BFloat16 code
///
/// Rounds to nearest, ties to even. NaN becomes the quiet NaN code with the
/// input's sign, infinities stay infinities, and finite values that round
/// past the largest finite BFloat16 saturate to it.
pub fn f32_to_bf16(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = (bits >> 16) as u16 & SIGN_MASK;

    if value.is_nan() {
        return sign | FORMAT.nan_code as u16;
    }
    if value.is_infinite() {
        return sign | EXPONENT_MASK;
    }

    // Adding 0x7FFF plus the kept lsb rounds the dropped half to nearest-even;
    // a mantissa carry moves into the exponent field on its own.
    let lsb = (bits >> 16) & 1;
    let rounded = ((bits + 0x7FFF + lsb) >> 16) as u16;

    if rounded & !SIGN_MASK == EXPONENT_MASK {
        return sign | FORMAT.max_finite_code as u16;
    }
    rounded
}

/// Convert a BFloat16 code to `f32`
pub fn bf16_to_f32(code: u16) -> f32 {
    if code & EXPONENT_MASK == EXPONENT_MASK {
        let negative = code & SIGN_MASK != 0;
        return match (code & MANTISSA_MASK, negative) {
            (0, false) => f32::INFINITY,
            (0, true) => f32::NEG_INFINITY,
            _ => f32::NAN,
        };
    }
    // Normals, subnormals and zeros share the f32 layout bit for bit
    f32::from_bits((code as u32) << 16)
}

compact_float_value!(
    /// A BFloat16 value
    BFloat16(u16),
    FORMAT,
    f32_to_bf16,
    bf16_to_f32
);

impl BFloat16 {
    /// Positive zero
    pub const ZERO: Self = Self(0x0000);
    /// One
    pub const ONE: Self = Self(0x3F80);
    /// Largest finite value
    pub const MAX: Self = Self(0x7F7F);
    /// Positive infinity
    pub const INFINITY: Self = Self(0x7F80);
    /// Quiet NaN
    pub const NAN: Self = Self(0x7FC0);
}
