//! JSON element values to typed arrays and back

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use tensor_codec::prelude::*;

/// Build a typed array of `kind` from a flat JSON element list
///
/// Floats accept numbers or the strings `"nan"`, `"inf"` and `"-inf"`;
/// complex elements are `[re, im]` pairs.
pub fn array_from_json(
    kind: ElementKind,
    shape: Vec<usize>,
    values: &[Value],
) -> Result<TypedArray> {
    let data = match kind {
        ElementKind::Bool => ArrayData::Bool(collect(values, kind, Value::as_bool)?),
        ElementKind::I8 => ArrayData::Int8(collect(values, kind, signed)?),
        ElementKind::I16 => ArrayData::Int16(collect(values, kind, signed)?),
        ElementKind::I32 => ArrayData::Int32(collect(values, kind, signed)?),
        ElementKind::I64 => ArrayData::Int64(collect(values, kind, Value::as_i64)?),
        ElementKind::I128 => ArrayData::Int128(collect(values, kind, signed)?),
        ElementKind::U8 => ArrayData::UInt8(collect(values, kind, unsigned)?),
        ElementKind::U16 => ArrayData::UInt16(collect(values, kind, unsigned)?),
        ElementKind::U32 => ArrayData::UInt32(collect(values, kind, unsigned)?),
        ElementKind::U64 => ArrayData::UInt64(collect(values, kind, Value::as_u64)?),
        ElementKind::U128 => ArrayData::UInt128(collect(values, kind, unsigned)?),
        ElementKind::F16 => ArrayData::Float16(collect(values, kind, single)?),
        ElementKind::BF16 => ArrayData::BFloat16(collect(values, kind, single)?),
        ElementKind::F8E4M3 => ArrayData::Float8E4M3(collect(values, kind, single)?),
        ElementKind::F8E5M2 => ArrayData::Float8E5M2(collect(values, kind, single)?),
        ElementKind::F32 => ArrayData::Float32(collect(values, kind, single)?),
        ElementKind::F64 => ArrayData::Float64(collect(values, kind, float)?),
        ElementKind::C64 => ArrayData::Complex64(collect(values, kind, |value| {
            let (re, im) = pair(value)?;
            Some(Complex32::new(re as f32, im as f32))
        })?),
        ElementKind::C128 => ArrayData::Complex128(collect(values, kind, |value| {
            let (re, im) = pair(value)?;
            Some(Complex64::new(re, im))
        })?),
        ElementKind::Str => {
            ArrayData::String(collect(values, kind, |value| value.as_str().map(str::to_owned))?)
        }
    };

    TypedArray::new(shape, data).context("Values do not fill the requested shape")
}

/// Flat JSON element list of an array
///
/// Non-finite floats are written as the strings `"nan"`, `"inf"` and `"-inf"`.
pub fn array_to_json(array: &TypedArray) -> Vec<Value> {
    match array.data() {
        ArrayData::Bool(values) => values.iter().map(|&v| json!(v)).collect(),
        ArrayData::Int8(values) => values.iter().map(|&v| json!(v)).collect(),
        ArrayData::Int16(values) => values.iter().map(|&v| json!(v)).collect(),
        ArrayData::Int32(values) => values.iter().map(|&v| json!(v)).collect(),
        ArrayData::Int64(values) => values.iter().map(|&v| json!(v)).collect(),
        ArrayData::Int128(values) => values.iter().map(|v| json!(v.to_string())).collect(),
        ArrayData::UInt8(values) => values.iter().map(|&v| json!(v)).collect(),
        ArrayData::UInt16(values) => values.iter().map(|&v| json!(v)).collect(),
        ArrayData::UInt32(values) => values.iter().map(|&v| json!(v)).collect(),
        ArrayData::UInt64(values) => values.iter().map(|&v| json!(v)).collect(),
        ArrayData::UInt128(values) => values.iter().map(|v| json!(v.to_string())).collect(),
        ArrayData::Float16(values)
        | ArrayData::BFloat16(values)
        | ArrayData::Float8E4M3(values)
        | ArrayData::Float8E5M2(values)
        | ArrayData::Float32(values) => values.iter().map(|&v| float_json(f64::from(v))).collect(),
        ArrayData::Float64(values) => values.iter().map(|&v| float_json(v)).collect(),
        ArrayData::Complex64(values) => values
            .iter()
            .map(|c| json!([float_json(f64::from(c.re)), float_json(f64::from(c.im))]))
            .collect(),
        ArrayData::Complex128(values) => {
            values.iter().map(|c| json!([float_json(c.re), float_json(c.im)])).collect()
        }
        ArrayData::String(values) => values.iter().map(|v| json!(v)).collect(),
    }
}

fn collect<T>(
    values: &[Value],
    kind: ElementKind,
    parse: impl Fn(&Value) -> Option<T>,
) -> Result<Vec<T>> {
    let mut out = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        match parse(value) {
            Some(parsed) => out.push(parsed),
            None => bail!("Element {} ({}) is not a valid {}", index, value, kind),
        }
    }
    Ok(out)
}

fn signed<T: TryFrom<i64>>(value: &Value) -> Option<T> {
    value.as_i64().and_then(|n| T::try_from(n).ok())
}

fn unsigned<T: TryFrom<u64>>(value: &Value) -> Option<T> {
    value.as_u64().and_then(|n| T::try_from(n).ok())
}

fn float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Parse a float32 element straight from its decimal text
///
/// Finite values beyond the `f32` range become `±f32::MAX`, so compact
/// formats saturate them instead of storing infinity.
fn single(value: &Value) -> Option<f32> {
    let parsed: f32 = match value {
        Value::Number(n) => n.to_string().parse().ok()?,
        Value::String(s) => s.parse().ok()?,
        _ => return None,
    };
    if parsed.is_infinite() && float(value)?.is_finite() {
        return Some(f32::MAX.copysign(parsed));
    }
    Some(parsed)
}

fn pair(value: &Value) -> Option<(f64, f64)> {
    match value.as_array()?.as_slice() {
        [re, im] => Some((float(re)?, float(im)?)),
        _ => None,
    }
}

fn float_json(value: f64) -> Value {
    if value.is_nan() {
        json!("nan")
    } else if value.is_infinite() {
        json!(if value > 0.0 { "inf" } else { "-inf" })
    } else {
        json!(value)
    }
}
