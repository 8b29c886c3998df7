//! Tensor to array deserialization

use crate::array::{ArrayData, TypedArray};
use crate::error::{Result, TensorError};
use crate::float::{BFloat16, CompactFloat, Float16, Float8E4M3, Float8E5M2};
use crate::format::{read_elements, ElementType, LeBytes};
use crate::tensor::{StringTensorCodec, TensorBuffer, TensorData};

/// Decode a tensor into a typed array of its shape
///
/// Compact float elements come back as the exact `f32` value of each stored
/// code; every other element type round-trips exactly.
pub fn decode(tensor: &TensorBuffer) -> Result<TypedArray> {
    let shape = tensor
        .dims()
        .iter()
        .map(|&dim| {
            usize::try_from(dim).map_err(|_| {
                TensorError::InvalidTensorData(format!("Dimension {} does not fit in memory", dim))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let data = match tensor.data() {
        TensorData::Strings(entries) if tensor.element_type() == ElementType::String => {
            ArrayData::String(StringTensorCodec::decode(entries)?)
        }
        TensorData::Raw(bytes) => decode_fixed(tensor.element_type(), bytes)?,
        TensorData::Strings(_) => {
            return Err(TensorError::InvalidTensorData(format!(
                "{} tensor carries a string table",
                tensor.element_type()
            )));
        }
    };

    let array = TypedArray::new(shape, data)?;
    tracing::debug!(
        name = tensor.name(),
        element_type = %tensor.element_type(),
        shape = %tensor.shape(),
        elements = array.len(),
        "decoded tensor"
    );
    Ok(array)
}

fn decode_fixed(element_type: ElementType, bytes: &[u8]) -> Result<ArrayData> {
    let data = match element_type {
        ElementType::Bool => ArrayData::Bool(read_elements(bytes)),
        ElementType::Int8 => ArrayData::Int8(read_elements(bytes)),
        ElementType::Int16 => ArrayData::Int16(read_elements(bytes)),
        ElementType::Int32 => ArrayData::Int32(read_elements(bytes)),
        ElementType::Int64 => ArrayData::Int64(read_elements(bytes)),
        ElementType::UInt8 => ArrayData::UInt8(read_elements(bytes)),
        ElementType::UInt16 => ArrayData::UInt16(read_elements(bytes)),
        ElementType::UInt32 => ArrayData::UInt32(read_elements(bytes)),
        ElementType::UInt64 => ArrayData::UInt64(read_elements(bytes)),
        ElementType::Float32 => ArrayData::Float32(read_elements(bytes)),
        ElementType::Float64 => ArrayData::Float64(read_elements(bytes)),
        ElementType::Complex64 => ArrayData::Complex64(read_elements(bytes)),
        ElementType::Complex128 => ArrayData::Complex128(read_elements(bytes)),
        ElementType::Float16 => ArrayData::Float16(read_compact::<Float16>(bytes)),
        ElementType::BFloat16 => ArrayData::BFloat16(read_compact::<BFloat16>(bytes)),
        ElementType::Float8E4M3 => ArrayData::Float8E4M3(read_compact::<Float8E4M3>(bytes)),
        ElementType::Float8E5M2 => ArrayData::Float8E5M2(read_compact::<Float8E5M2>(bytes)),
        ElementType::String => {
            return Err(TensorError::InvalidTensorData(
                "STRING tensor carries raw bytes".to_string(),
            ));
        }
    };
    Ok(data)
}

/// Widen each stored code of a compact format to `f32`
fn read_compact<F: CompactFloat>(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(<F::Bits as LeBytes>::WIDTH)
        .map(|chunk| F::decode(<F::Bits as LeBytes>::from_le_slice(chunk)))
        .collect()
}
