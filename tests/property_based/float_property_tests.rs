//! Property-based tests for the compact float codecs

use proptest::prelude::*;
use tensor_codec::float::*;

// Any f32 bit pattern: NaNs, infinities, subnormals and zeros included
fn any_f32_bits() -> impl Strategy<Value = f32> {
    any::<u32>().prop_map(f32::from_bits)
}

proptest! {
    #[test]
    fn test_encode_is_total_and_stable(value in any_f32_bits()) {
        for format in CompactFormat::ALL {
            let code = format.encode(value);
            let layout = format.layout();
            prop_assert!(code < (1u32 << layout.width()));

            let decoded = format.decode(code);
            if value.is_nan() {
                prop_assert!(decoded.is_nan());
            } else {
                // Re-encoding a decoded value is idempotent
                prop_assert_eq!(format.encode(decoded), code);
                prop_assert!(decoded.abs() <= layout.max_value || decoded.is_infinite());
            }
        }
    }

    #[test]
    fn test_sign_is_preserved(value in any_f32_bits()) {
        prop_assume!(!value.is_nan());
        for format in CompactFormat::ALL {
            let decoded = format.decode(format.encode(value));
            prop_assert_eq!(decoded.is_sign_negative(), value.is_sign_negative());
        }
    }

    #[test]
    fn test_rounding_picks_a_nearest_neighbour(value in -400.0f32..400.0) {
        for format in CompactFormat::ALL {
            let code = format.encode(value);
            let decoded = format.decode(code);
            // No other code of the same sign lies strictly closer
            let error = (decoded - value).abs();
            for neighbour in [code.wrapping_sub(1), code + 1] {
                let other = format.decode(neighbour & ((1 << format.layout().width()) - 1));
                if other.is_finite() && other.is_sign_negative() == decoded.is_sign_negative() {
                    prop_assert!(error <= (other - value).abs());
                }
            }
        }
    }

    #[test]
    fn test_bfloat16_encode_matches_half(value in any_f32_bits()) {
        prop_assume!(value.is_finite() && value.abs() < 3.0e38);
        prop_assert_eq!(f32_to_bf16(value), half::bf16::from_f32(value).to_bits());
    }

    #[test]
    fn test_float16_encode_matches_half(value in -65504.0f32..=65504.0) {
        prop_assert_eq!(f32_to_f16(value), half::f16::from_f32(value).to_bits());
    }

    #[test]
    fn test_float16_small_values_match_half(value in -1.0e-3f32..1.0e-3) {
        prop_assert_eq!(f32_to_f16(value), half::f16::from_f32(value).to_bits());
    }

    #[test]
    fn test_float8_monotonic(a in -500.0f32..500.0, b in -500.0f32..500.0) {
        prop_assume!(a <= b);
        prop_assert!(f8e4m3_to_f32(f32_to_f8e4m3(a)) <= f8e4m3_to_f32(f32_to_f8e4m3(b)));
        prop_assert!(f8e5m2_to_f32(f32_to_f8e5m2(a)) <= f8e5m2_to_f32(f32_to_f8e5m2(b)));
    }
}
