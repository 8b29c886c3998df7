//! Unit tests for array/tensor marshalling

use crate::fixtures::*;
use tensor_codec::prelude::*;

#[test]
fn test_shape_and_name_are_copied() {
    let array = TypedArray::from_vec(vec![1, 3, 1], vec![7u32, 8, 9]).unwrap();
    let tensor = encode(&array, "layer.0.bias").unwrap();

    assert_eq!(tensor.name(), "layer.0.bias");
    assert_eq!(tensor.dims(), &[1, 3, 1]);
    assert_eq!(tensor.raw_bytes(), Some(&[7, 0, 0, 0, 8, 0, 0, 0, 9, 0, 0, 0][..]));
}

#[test]
fn test_row_major_order() {
    let values: Vec<i16> = (0..6).collect();
    let array = TypedArray::from_vec(vec![2, 3], values).unwrap();
    let tensor = encode(&array, "m").unwrap();

    // Element [1, 2] is the last one in row-major order
    let flat = tensor.shape().flat_index(&[1, 2]).unwrap() as usize;
    assert_eq!(flat, 5);
    assert_eq!(tensor.byte_at(flat).unwrap(), &5i16.to_le_bytes());
}

#[test]
fn test_compact_values_recovered_as_stored_codes() {
    let inputs = vec![0.3f32, -1.0e-3, 300.0, 5.0e5];
    let array =
        TypedArray::from_compact(vec![4], CompactFormat::Float8E5M2, inputs.clone()).unwrap();
    let decoded = decode(&encode(&array, "lossy").unwrap()).unwrap();

    let recovered = decoded.as_f32_values().unwrap();
    for (&input, &output) in inputs.iter().zip(recovered) {
        let expected = CompactFormat::Float8E5M2.decode(CompactFormat::Float8E5M2.encode(input));
        assert_eq!(output, expected);
    }
    assert_eq!(recovered[3], 57344.0);
}

#[test]
fn test_encode_is_deterministic() {
    let array = pattern_array(ElementKind::C64);
    assert_eq!(encode(&array, "a").unwrap(), encode(&array, "a").unwrap());
}

#[test]
fn test_decode_dispatches_on_element_type() {
    // The same eight bytes decode differently per element type
    let bytes = vec![0x00, 0x00, 0x80, 0x3F, 0x00, 0x00, 0x00, 0x40];

    let as_f32 =
        TensorBuffer::from_raw_bytes("x", ElementType::Float32, vec![2], bytes.clone()).unwrap();
    assert_eq!(decode(&as_f32).unwrap().as_slice::<f32>(), Some(&[1.0f32, 2.0][..]));

    let as_bf16 =
        TensorBuffer::from_raw_bytes("x", ElementType::BFloat16, vec![4], bytes.clone()).unwrap();
    assert_eq!(decode(&as_bf16).unwrap().as_f32_values(), Some(&[0.0f32, 1.0, 0.0, 2.0][..]));

    let as_c64 = TensorBuffer::from_raw_bytes("x", ElementType::Complex64, vec![], bytes).unwrap();
    assert_eq!(
        decode(&as_c64).unwrap().as_slice::<Complex32>(),
        Some(&[Complex32::new(1.0, 2.0)][..])
    );
}
