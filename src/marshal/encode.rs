//! Array to tensor serialization

use crate::array::{ArrayData, TypedArray};
use crate::error::{Result, TensorError};
use crate::float::{BFloat16, CompactFloat, Float16, Float8E4M3, Float8E5M2};
use crate::format::{write_elements, ElementType, LeBytes};
use crate::tensor::{StringTensorCodec, TensorBuffer, TensorData, TensorShape};

/// Encode a typed array into a named tensor
///
/// The shape is copied verbatim and the elements are serialized in row-major
/// order. Fails with [`TensorError::UnsupportedElementType`] for element
/// kinds without a tensor element type.
pub fn encode<N: Into<String>>(array: &TypedArray, name: N) -> Result<TensorBuffer> {
    let name = name.into();
    let element_type = ElementType::from_kind(array.element_kind())?;
    let shape = TensorShape::new(array.shape().iter().map(|&dim| dim as u64).collect())?;

    let data = match array.data() {
        ArrayData::Bool(values) => TensorData::Raw(write_elements(values)),
        ArrayData::Int8(values) => TensorData::Raw(write_elements(values)),
        ArrayData::Int16(values) => TensorData::Raw(write_elements(values)),
        ArrayData::Int32(values) => TensorData::Raw(write_elements(values)),
        ArrayData::Int64(values) => TensorData::Raw(write_elements(values)),
        ArrayData::UInt8(values) => TensorData::Raw(write_elements(values)),
        ArrayData::UInt16(values) => TensorData::Raw(write_elements(values)),
        ArrayData::UInt32(values) => TensorData::Raw(write_elements(values)),
        ArrayData::UInt64(values) => TensorData::Raw(write_elements(values)),
        ArrayData::Float32(values) => TensorData::Raw(write_elements(values)),
        ArrayData::Float64(values) => TensorData::Raw(write_elements(values)),
        ArrayData::Complex64(values) => TensorData::Raw(write_elements(values)),
        ArrayData::Complex128(values) => TensorData::Raw(write_elements(values)),
        ArrayData::Float16(values) => TensorData::Raw(write_compact::<Float16>(values)),
        ArrayData::BFloat16(values) => TensorData::Raw(write_compact::<BFloat16>(values)),
        ArrayData::Float8E4M3(values) => TensorData::Raw(write_compact::<Float8E4M3>(values)),
        ArrayData::Float8E5M2(values) => TensorData::Raw(write_compact::<Float8E5M2>(values)),
        ArrayData::String(values) => TensorData::Strings(StringTensorCodec::encode(values)),
        ArrayData::Int128(_) | ArrayData::UInt128(_) => {
            return Err(TensorError::UnsupportedElementType(array.element_kind().to_string()));
        }
    };

    let tensor = TensorBuffer::new(name, element_type, shape, data)?;
    tracing::debug!(
        name = tensor.name(),
        element_type = %tensor.element_type(),
        shape = %tensor.shape(),
        bytes = tensor.data().byte_len(),
        "encoded tensor"
    );
    Ok(tensor)
}

/// Round `f32` values through a compact format's codec and lay out the codes
fn write_compact<F: CompactFloat>(values: &[f32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * <F::Bits as LeBytes>::WIDTH);
    for &value in values {
        F::encode(value).put_le(&mut out);
    }
    out
}
