//! Property-based round-trip tests for array/tensor marshalling

use crate::fixtures::representable_values;
use proptest::collection::vec;
use proptest::prelude::*;
use tensor_codec::prelude::*;

// Shapes of up to three dimensions, zero-length dimensions included
fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
    vec(0usize..6, 0..=3)
}

fn element_count(shape: &[usize]) -> usize {
    shape.iter().product()
}

fn round_trip(array: &TypedArray) -> TypedArray {
    let tensor = encode(array, "prop").expect("encode failed");
    decode(&tensor).expect("decode failed")
}

proptest! {
    #[test]
    fn test_int64_round_trip((shape, values) in shape_strategy().prop_flat_map(|shape| {
        let count = element_count(&shape);
        (Just(shape), vec(any::<i64>(), count))
    })) {
        let array = TypedArray::from_vec(shape, values).unwrap();
        prop_assert_eq!(round_trip(&array), array);
    }

    #[test]
    fn test_uint16_round_trip((shape, values) in shape_strategy().prop_flat_map(|shape| {
        let count = element_count(&shape);
        (Just(shape), vec(any::<u16>(), count))
    })) {
        let array = TypedArray::from_vec(shape, values).unwrap();
        prop_assert_eq!(round_trip(&array), array);
    }

    #[test]
    fn test_bool_round_trip((shape, values) in shape_strategy().prop_flat_map(|shape| {
        let count = element_count(&shape);
        (Just(shape), vec(any::<bool>(), count))
    })) {
        let array = TypedArray::from_vec(shape, values).unwrap();
        prop_assert_eq!(round_trip(&array), array);
    }

    #[test]
    fn test_float64_bits_round_trip(bits in vec(any::<u64>(), 0..64)) {
        // Compare bit patterns so NaN payloads are checked too
        let values: Vec<f64> = bits.iter().map(|&b| f64::from_bits(b)).collect();
        let array = TypedArray::from_vec(vec![values.len()], values).unwrap();
        let decoded = round_trip(&array);

        let restored: Vec<u64> =
            decoded.as_slice::<f64>().unwrap().iter().map(|v| v.to_bits()).collect();
        prop_assert_eq!(restored, bits);
    }

    #[test]
    fn test_complex64_round_trip(parts in vec((-1.0e6f32..1.0e6, -1.0e6f32..1.0e6), 0..32)) {
        let values: Vec<Complex32> = parts.iter().map(|&(re, im)| Complex32::new(re, im)).collect();
        let array = TypedArray::from_vec(vec![values.len()], values).unwrap();
        prop_assert_eq!(round_trip(&array), array);
    }

    #[test]
    fn test_string_round_trip(values in vec(any::<String>(), 0..16)) {
        let array = TypedArray::from_vec(vec![values.len()], values).unwrap();
        let decoded = round_trip(&array);
        prop_assert_eq!(decoded.element_kind(), ElementKind::Str);
        prop_assert_eq!(decoded, array);
    }

    #[test]
    fn test_compact_representable_round_trip(
        format_index in 0usize..4,
        shape in shape_strategy(),
    ) {
        let format = CompactFormat::ALL[format_index];
        let values = representable_values(format, element_count(&shape));
        let array = TypedArray::from_compact(shape, format, values).unwrap();
        prop_assert_eq!(round_trip(&array), array);
    }

    #[test]
    fn test_compact_decode_is_codec_of_input(values in vec(-1.0e5f32..1.0e5, 1..32)) {
        for format in CompactFormat::ALL {
            let shape = vec![values.len()];
            let array = TypedArray::from_compact(shape, format, values.clone()).unwrap();
            let decoded = round_trip(&array);
            let expected: Vec<f32> =
                values.iter().map(|&v| format.decode(format.encode(v))).collect();
            prop_assert_eq!(decoded.as_f32_values().unwrap(), &expected[..]);
        }
    }

    #[test]
    fn test_tensor_byte_length_matches_shape(shape in shape_strategy()) {
        let count = element_count(&shape);
        let array = TypedArray::from_vec(shape, vec![0.5f32; count]).unwrap();
        let tensor = encode(&array, "len").unwrap();
        prop_assert_eq!(tensor.element_count(), count as u64);
        prop_assert_eq!(tensor.raw_bytes().map(<[u8]>::len), Some(count * 4));
    }
}
