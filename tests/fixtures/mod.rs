//! Test fixtures for tensor codec tests

#![allow(dead_code)]

use tensor_codec::prelude::*;

/// Shape used by the every-type round-trip tests
pub const SHAPE: [usize; 2] = [13, 37];

/// Element count of [`SHAPE`]
pub const ELEMENTS: usize = 481;

/// Every element kind that maps to a tensor element type
pub const SUPPORTED_KINDS: [ElementKind; 18] = [
    ElementKind::Bool,
    ElementKind::I8,
    ElementKind::I16,
    ElementKind::I32,
    ElementKind::I64,
    ElementKind::U8,
    ElementKind::U16,
    ElementKind::U32,
    ElementKind::U64,
    ElementKind::F16,
    ElementKind::BF16,
    ElementKind::F8E4M3,
    ElementKind::F8E5M2,
    ElementKind::F32,
    ElementKind::F64,
    ElementKind::C64,
    ElementKind::C128,
    ElementKind::Str,
];

/// Exactly representable, non-NaN values of a compact format, in a
/// deterministic order that covers subnormals, normals and the extremes
pub fn representable_values(format: CompactFormat, count: usize) -> Vec<f32> {
    let width = format.layout().width();
    let modulus = 1u64 << width;
    let stride: u64 = if width == 8 { 37 } else { 4099 };

    (0u64..)
        .map(|i| ((i * stride) % modulus) as u32)
        .map(|code| format.decode(code))
        .filter(|value| !value.is_nan())
        .take(count)
        .collect()
}

/// Flat elements of `kind` following a deterministic pattern
pub fn pattern_data(kind: ElementKind, count: usize) -> ArrayData {
    let indices = 0..count;
    match kind {
        ElementKind::Bool => ArrayData::Bool(indices.map(|i| i % 3 == 0).collect()),
        ElementKind::I8 => ArrayData::Int8(indices.map(|i| i as u8 as i8).collect()),
        ElementKind::I16 => {
            ArrayData::Int16(indices.map(|i| (i as i16).wrapping_mul(131)).collect())
        }
        ElementKind::I32 => ArrayData::Int32(indices.map(|i| i as i32 * -100_003).collect()),
        ElementKind::I64 => {
            ArrayData::Int64(indices.map(|i| i as i64 * -9_000_000_000_000).collect())
        }
        ElementKind::I128 => ArrayData::Int128(indices.map(|i| i as i128).collect()),
        ElementKind::U8 => ArrayData::UInt8(indices.map(|i| i as u8).collect()),
        ElementKind::U16 => {
            ArrayData::UInt16(indices.map(|i| (i as u16).wrapping_mul(137)).collect())
        }
        ElementKind::U32 => ArrayData::UInt32(indices.map(|i| i as u32 * 8_000_000).collect()),
        ElementKind::U64 => {
            ArrayData::UInt64(indices.map(|i| i as u64 * u32::MAX as u64).collect())
        }
        ElementKind::U128 => ArrayData::UInt128(indices.map(|i| i as u128).collect()),
        ElementKind::F16 => ArrayData::Float16(representable_values(CompactFormat::Float16, count)),
        ElementKind::BF16 => {
            ArrayData::BFloat16(representable_values(CompactFormat::BFloat16, count))
        }
        ElementKind::F8E4M3 => {
            ArrayData::Float8E4M3(representable_values(CompactFormat::Float8E4M3, count))
        }
        ElementKind::F8E5M2 => {
            ArrayData::Float8E5M2(representable_values(CompactFormat::Float8E5M2, count))
        }
        ElementKind::F32 => {
            ArrayData::Float32(indices.map(|i| (i as f32 - 240.0) * 0.37).collect())
        }
        ElementKind::F64 => {
            ArrayData::Float64(indices.map(|i| (i as f64 - 240.0) * 1e-3).collect())
        }
        ElementKind::C64 => ArrayData::Complex64(
            indices.map(|i| Complex32::new(i as f32, -(i as f32) / 4.0)).collect(),
        ),
        ElementKind::C128 => ArrayData::Complex128(
            indices.map(|i| Complex64::new(i as f64 * 0.5, 1.0 / (i as f64 + 1.0))).collect(),
        ),
        ElementKind::Str => ArrayData::String(indices.map(pattern_string).collect()),
    }
}

/// A string element mixing ASCII, multibyte text and empty strings
pub fn pattern_string(i: usize) -> String {
    match i % 4 {
        0 => format!("item-{}", i),
        1 => "ü".repeat(i % 5),
        2 => format!("日本{}", i),
        _ => String::new(),
    }
}

/// A [`SHAPE`]-shaped array of `kind`
pub fn pattern_array(kind: ElementKind) -> TypedArray {
    TypedArray::new(SHAPE.to_vec(), pattern_data(kind, ELEMENTS))
        .expect("Failed to build fixture array")
}

/// One [`SHAPE`]-shaped array per supported element kind
pub fn all_supported_arrays() -> Vec<TypedArray> {
    SUPPORTED_KINDS.iter().map(|&kind| pattern_array(kind)).collect()
}

/// The four names used by the string round-trip tests
pub fn names() -> Vec<String> {
    ["Amy", "Billy", "Cindy", "David"].iter().map(|s| s.to_string()).collect()
}
