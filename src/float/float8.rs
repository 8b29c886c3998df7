//! 8-bit floating point formats
//!
//! - **Float8E4M3**: 1 sign + 4 exponent + 3 mantissa bits, bias 7. There is
//!   no infinity: the all-ones exponent still holds normal values except for
//!   mantissa 111, which is NaN. Largest finite value is 448.
//! - **Float8E5M2**: 1 sign + 5 exponent + 2 mantissa bits, bias 15. Laid out
//!   like the high byte of an IEEE binary16, infinities included. Largest
//!   finite value is 57344.
//!
//! Both encoders saturate: a finite input beyond the largest finite value
//! becomes that value with the input's sign. E4M3 saturates infinite inputs
//! as well, since it has no infinity code to map them to.

use super::{round_magnitude, split_f32, widen, FloatFormat};

/// Float8E4M3 layout
pub const E4M3_FORMAT: FloatFormat = FloatFormat {
    name: "float8e4m3",
    exponent_bits: 4,
    mantissa_bits: 3,
    bias: 7,
    max_finite_code: 0x7E,
    max_value: 448.0,
    nan_code: 0x7F,
    infinity_code: None,
};

/// Float8E5M2 layout
pub const E5M2_FORMAT: FloatFormat = FloatFormat {
    name: "float8e5m2",
    exponent_bits: 5,
    mantissa_bits: 2,
    bias: 15,
    max_finite_code: 0x7B,
    max_value: 57344.0,
    nan_code: 0x7F,
    infinity_code: Some(0x7C),
};

/// Convert an `f32` to a Float8E4M3 code
///
/// | Input                | Output        |
/// |----------------------|---------------|
/// | NaN                  | `0x7F` / `0xFF` |
/// | ±Inf, \|x\| > 448    | ±448 (`0x7E` / `0xFE`) |
/// | ±0                   | ±0            |
/// | \|x\| < 2^-10        | ±0            |
pub fn f32_to_f8e4m3(value: f32) -> u8 {
    let (sign, exp, mant) = split_f32(value);
    let sign = (sign as u8) << 7;

    if exp == 0xFF {
        if mant != 0 {
            return sign | E4M3_FORMAT.nan_code as u8;
        }
        return sign | E4M3_FORMAT.max_finite_code as u8;
    }
    if exp == 0 && mant == 0 {
        return sign;
    }

    let code = round_magnitude(exp, mant, E4M3_FORMAT.mantissa_bits, E4M3_FORMAT.bias);
    // 0x7F is NaN, so anything at or past it saturates
    sign | code.min(E4M3_FORMAT.max_finite_code) as u8
}

/// Convert a Float8E4M3 code to `f32`
pub fn f8e4m3_to_f32(code: u8) -> f32 {
    let sign = (code >> 7) as u32;
    let expo = ((code >> 3) & 0x0F) as u32;
    let mant = (code & 0x07) as u32;

    if expo == 0x0F && mant == 0x07 {
        return f32::NAN;
    }
    widen(sign, expo, mant, E4M3_FORMAT.mantissa_bits, E4M3_FORMAT.bias)
}

/// Convert an `f32` to a Float8E5M2 code
///
/// | Input                  | Output          |
/// |------------------------|-----------------|
/// | NaN                    | `0x7F` / `0xFF` |
/// | ±Inf                   | `0x7C` / `0xFC` |
/// | \|x\| > 57344, finite  | ±57344 (`0x7B` / `0xFB`) |
/// | \|x\| < 2^-17          | ±0              |
pub fn f32_to_f8e5m2(value: f32) -> u8 {
    let (sign, exp, mant) = split_f32(value);
    let sign = (sign as u8) << 7;

    if exp == 0xFF {
        if mant != 0 {
            return sign | E5M2_FORMAT.nan_code as u8;
        }
        return sign | 0x7C;
    }
    if exp == 0 && mant == 0 {
        return sign;
    }

    let code = round_magnitude(exp, mant, E5M2_FORMAT.mantissa_bits, E5M2_FORMAT.bias);
    sign | code.min(E5M2_FORMAT.max_finite_code) as u8
}

/// Convert a Float8E5M2 code to `f32`
pub fn f8e5m2_to_f32(code: u8) -> f32 {
    let sign = (code >> 7) as u32;
    let expo = ((code >> 2) & 0x1F) as u32;
    let mant = (code & 0x03) as u32;

    if expo == 0x1F {
        return match (mant, sign) {
            (0, 0) => f32::INFINITY,
            (0, _) => f32::NEG_INFINITY,
            _ => f32::NAN,
        };
    }
    widen(sign, expo, mant, E5M2_FORMAT.mantissa_bits, E5M2_FORMAT.bias)
}

compact_float_value!(
    /// An 8-bit float with 4 exponent and 3 mantissa bits
    Float8E4M3(u8),
    E4M3_FORMAT,
    f32_to_f8e4m3,
    f8e4m3_to_f32
);

compact_float_value!(
    /// An 8-bit float with 5 exponent and 2 mantissa bits
    Float8E5M2(u8),
    E5M2_FORMAT,
    f32_to_f8e5m2,
    f8e5m2_to_f32
);

impl Float8E4M3 {
    /// One
    pub const ONE: Self = Self(0x38);
    /// Largest finite value, 448
    pub const MAX: Self = Self(0x7E);
    /// Smallest positive normal, 2^-6
    pub const MIN_POSITIVE: Self = Self(0x08);
    /// NaN
    pub const NAN: Self = Self(0x7F);
}

impl Float8E5M2 {
    /// One
    pub const ONE: Self = Self(0x3C);
    /// Largest finite value, 57344
    pub const MAX: Self = Self(0x7B);
    /// Smallest positive normal, 2^-14
    pub const MIN_POSITIVE: Self = Self(0x04);
    /// Positive infinity
    pub const INFINITY: Self = Self(0x7C);
    /// NaN
    pub const NAN: Self = Self(0x7F);
}
