//! In-memory typed arrays
//!
//! A [`TypedArray`] is an explicit array value: a row-major shape, a flat
//! element sequence and the element kind implied by the [`ArrayData`]
//! variant holding it. Compact float arrays hold `f32` values and declare the
//! compact format they are stored in.

use crate::complex::{Complex32, Complex64};
use crate::error::{Result, TensorError};
use crate::float::CompactFormat;
use crate::format::ElementKind;
use crate::tensor::TensorBuffer;

/// Flat element storage of a [`TypedArray`]
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
    Bool(Vec<bool>),
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    Int128(Vec<i128>),
    UInt8(Vec<u8>),
    UInt16(Vec<u16>),
    UInt32(Vec<u32>),
    UInt64(Vec<u64>),
    UInt128(Vec<u128>),
    /// Half precision values, kept as `f32`
    Float16(Vec<f32>),
    /// BFloat16 values, kept as `f32`
    BFloat16(Vec<f32>),
    /// Float8E4M3 values, kept as `f32`
    Float8E4M3(Vec<f32>),
    /// Float8E5M2 values, kept as `f32`
    Float8E5M2(Vec<f32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
    Complex64(Vec<Complex32>),
    Complex128(Vec<Complex64>),
    String(Vec<String>),
}

/// Apply an expression to the vector inside any [`ArrayData`] variant
macro_rules! with_values {
    ($data:expr, $values:ident => $body:expr) => {
        match $data {
            ArrayData::Bool($values) => $body,
            ArrayData::Int8($values) => $body,
            ArrayData::Int16($values) => $body,
            ArrayData::Int32($values) => $body,
            ArrayData::Int64($values) => $body,
            ArrayData::Int128($values) => $body,
            ArrayData::UInt8($values) => $body,
            ArrayData::UInt16($values) => $body,
            ArrayData::UInt32($values) => $body,
            ArrayData::UInt64($values) => $body,
            ArrayData::UInt128($values) => $body,
            ArrayData::Float16($values) => $body,
            ArrayData::BFloat16($values) => $body,
            ArrayData::Float8E4M3($values) => $body,
            ArrayData::Float8E5M2($values) => $body,
            ArrayData::Float32($values) => $body,
            ArrayData::Float64($values) => $body,
            ArrayData::Complex64($values) => $body,
            ArrayData::Complex128($values) => $body,
            ArrayData::String($values) => $body,
        }
    };
}

impl ArrayData {
    /// Wrap `f32` values declared to be stored in a compact format
    pub fn compact(format: CompactFormat, values: Vec<f32>) -> Self {
        match format {
            CompactFormat::BFloat16 => ArrayData::BFloat16(values),
            CompactFormat::Float16 => ArrayData::Float16(values),
            CompactFormat::Float8E4M3 => ArrayData::Float8E4M3(values),
            CompactFormat::Float8E5M2 => ArrayData::Float8E5M2(values),
        }
    }

    /// Element kind of the stored values
    pub fn kind(&self) -> ElementKind {
        match self {
            ArrayData::Bool(_) => ElementKind::Bool,
            ArrayData::Int8(_) => ElementKind::I8,
            ArrayData::Int16(_) => ElementKind::I16,
            ArrayData::Int32(_) => ElementKind::I32,
            ArrayData::Int64(_) => ElementKind::I64,
            ArrayData::Int128(_) => ElementKind::I128,
            ArrayData::UInt8(_) => ElementKind::U8,
            ArrayData::UInt16(_) => ElementKind::U16,
            ArrayData::UInt32(_) => ElementKind::U32,
            ArrayData::UInt64(_) => ElementKind::U64,
            ArrayData::UInt128(_) => ElementKind::U128,
            ArrayData::Float16(_) => ElementKind::F16,
            ArrayData::BFloat16(_) => ElementKind::BF16,
            ArrayData::Float8E4M3(_) => ElementKind::F8E4M3,
            ArrayData::Float8E5M2(_) => ElementKind::F8E5M2,
            ArrayData::Float32(_) => ElementKind::F32,
            ArrayData::Float64(_) => ElementKind::F64,
            ArrayData::Complex64(_) => ElementKind::C64,
            ArrayData::Complex128(_) => ElementKind::C128,
            ArrayData::String(_) => ElementKind::Str,
        }
    }

    /// Compact format of the values, if they are compact floats
    pub fn compact_format(&self) -> Option<CompactFormat> {
        match self {
            ArrayData::BFloat16(_) => Some(CompactFormat::BFloat16),
            ArrayData::Float16(_) => Some(CompactFormat::Float16),
            ArrayData::Float8E4M3(_) => Some(CompactFormat::Float8E4M3),
            ArrayData::Float8E5M2(_) => Some(CompactFormat::Float8E5M2),
            _ => None,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        with_values!(self, values => values.len())
    }

    /// Check if there are no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A Rust element type that can back a [`TypedArray`]
pub trait Element: Sized {
    /// Kind declared by arrays of this element
    const KIND: ElementKind;

    /// Wrap a vector of elements
    fn into_data(values: Vec<Self>) -> ArrayData;

    /// Borrow the elements if `data` holds this type
    fn slice_of(data: &ArrayData) -> Option<&[Self]>;
}

macro_rules! impl_element {
    ($($ty:ty => $variant:ident, $kind:ident);* $(;)?) => {
        $(
            impl Element for $ty {
                const KIND: ElementKind = ElementKind::$kind;

                fn into_data(values: Vec<Self>) -> ArrayData {
                    ArrayData::$variant(values)
                }

                fn slice_of(data: &ArrayData) -> Option<&[Self]> {
                    match data {
                        ArrayData::$variant(values) => Some(values),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_element! {
    bool => Bool, Bool;
    i8 => Int8, I8;
    i16 => Int16, I16;
    i32 => Int32, I32;
    i64 => Int64, I64;
    i128 => Int128, I128;
    u8 => UInt8, U8;
    u16 => UInt16, U16;
    u32 => UInt32, U32;
    u64 => UInt64, U64;
    u128 => UInt128, U128;
    f32 => Float32, F32;
    f64 => Float64, F64;
    Complex32 => Complex64, C64;
    Complex64 => Complex128, C128;
    String => String, Str;
}

/// A shaped, typed, row-major array
#[derive(Debug, Clone, PartialEq)]
pub struct TypedArray {
    shape: Vec<usize>,
    data: ArrayData,
}

impl TypedArray {
    /// Create an array, checking the element count against the shape
    ///
    /// An empty shape is a scalar and needs exactly one element.
    pub fn new(shape: Vec<usize>, data: ArrayData) -> Result<Self> {
        let expected = if shape.contains(&0) {
            0
        } else {
            shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim)).ok_or_else(|| {
                TensorError::InvalidTensorData(format!(
                    "Element count of shape {:?} overflows",
                    shape
                ))
            })?
        };
        if data.len() != expected {
            return Err(TensorError::size_mismatch(expected, data.len()));
        }
        Ok(Self { shape, data })
    }

    /// Create an array from a vector of elements
    pub fn from_vec<T: Element>(shape: Vec<usize>, values: Vec<T>) -> Result<Self> {
        Self::new(shape, T::into_data(values))
    }

    /// Create a zero-dimensional array holding one element
    pub fn scalar<T: Element>(value: T) -> Self {
        Self { shape: Vec::new(), data: T::into_data(vec![value]) }
    }

    /// Create an array of `f32` values declared as a compact float format
    pub fn from_compact(
        shape: Vec<usize>,
        format: CompactFormat,
        values: Vec<f32>,
    ) -> Result<Self> {
        Self::new(shape, ArrayData::compact(format, values))
    }

    /// Get the shape
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the number of dimensions
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the array has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the element storage
    pub fn data(&self) -> &ArrayData {
        &self.data
    }

    /// Declared element kind
    pub fn element_kind(&self) -> ElementKind {
        self.data.kind()
    }

    /// Borrow the flat elements as `T`, `None` if the array holds another type
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::slice_of(&self.data)
    }

    /// Borrow the flat `f32` values of a `float32` or compact float array
    pub fn as_f32_values(&self) -> Option<&[f32]> {
        match &self.data {
            ArrayData::Float32(values)
            | ArrayData::Float16(values)
            | ArrayData::BFloat16(values)
            | ArrayData::Float8E4M3(values)
            | ArrayData::Float8E5M2(values) => Some(values),
            _ => None,
        }
    }

    /// Row-major flat index of a multi-index, `None` if out of bounds
    pub fn flat_index(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() || self.is_empty() {
            return None;
        }
        let mut flat = 0usize;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            flat = flat * dim + i;
        }
        Some(flat)
    }

    /// Element at a multi-index
    pub fn get<T: Element>(&self, index: &[usize]) -> Option<&T> {
        self.as_slice::<T>()?.get(self.flat_index(index)?)
    }

    /// Split into shape and element storage
    pub fn into_parts(self) -> (Vec<usize>, ArrayData) {
        (self.shape, self.data)
    }

    /// Encode into a named tensor
    pub fn to_tensor<N: Into<String>>(&self, name: N) -> Result<TensorBuffer> {
        crate::marshal::encode(self, name)
    }
}
