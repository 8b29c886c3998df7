//! IEEE 754 binary16 (half precision)

use super::{round_magnitude, split_f32, widen, FloatFormat};

/// Float16 layout
pub const FORMAT: FloatFormat = FloatFormat {
    name: "float16",
    exponent_bits: 5,
    mantissa_bits: 10,
    bias: 15,
    max_finite_code: 0x7BFF,
    max_value: 65504.0,
    nan_code: 0x7E00,
    infinity_code: Some(0x7C00),
};

/// Convert an `f32` to a Float16 code
///
/// Rounds to nearest, ties to even. Infinities map to the infinity codes and
/// finite values beyond 65504 saturate to ±65504.
pub fn f32_to_f16(value: f32) -> u16 {
    let (sign, exp, mant) = split_f32(value);
    let sign = (sign as u16) << 15;

    if exp == 0xFF {
        return if mant != 0 { sign | FORMAT.nan_code as u16 } else { sign | 0x7C00 };
    }
    if exp == 0 && mant == 0 {
        return sign;
    }

    let code = round_magnitude(exp, mant, FORMAT.mantissa_bits, FORMAT.bias);
    sign | code.min(FORMAT.max_finite_code) as u16
}

/// Convert a Float16 code to `f32`
pub fn f16_to_f32(code: u16) -> f32 {
    let sign = (code >> 15) as u32;
    let expo = ((code >> 10) & 0x1F) as u32;
    let mant = (code & 0x3FF) as u32;

    if expo == 0x1F {
        return match (mant, sign) {
            (0, 0) => f32::INFINITY,
            (0, _) => f32::NEG_INFINITY,
            _ => f32::NAN,
        };
    }
    widen(sign, expo, mant, FORMAT.mantissa_bits, FORMAT.bias)
}

compact_float_value!(
    /// An IEEE half-precision value
    Float16(u16),
    FORMAT,
    f32_to_f16,
    f16_to_f32
);
