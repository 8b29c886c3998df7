//! Tensor element types and in-memory element kinds

use crate::error::{Result, TensorError};
use crate::float::CompactFormat;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Element types of a serialized tensor
///
/// Discriminants are the standard tensor `data_type` codes.
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 32-bit floating point
    Float32 = 1,
    /// 8-bit unsigned integer
    UInt8 = 2,
    /// 8-bit signed integer
    Int8 = 3,
    /// 16-bit unsigned integer
    UInt16 = 4,
    /// 16-bit signed integer
    Int16 = 5,
    /// 32-bit signed integer
    Int32 = 6,
    /// 64-bit signed integer
    Int64 = 7,
    /// Variable-length UTF-8 string
    String = 8,
    /// Boolean, one byte
    Bool = 9,
    /// IEEE 754 half precision
    Float16 = 10,
    /// 64-bit floating point
    Float64 = 11,
    /// 32-bit unsigned integer
    UInt32 = 12,
    /// 64-bit unsigned integer
    UInt64 = 13,
    /// Two 32-bit floats, real then imaginary
    Complex64 = 14,
    /// Two 64-bit floats, real then imaginary
    Complex128 = 15,
    /// Brain floating point
    BFloat16 = 16,
    /// 8-bit float, 4 exponent bits, no infinity
    Float8E4M3 = 17,
    /// 8-bit float, 5 exponent bits
    Float8E5M2 = 19,
}

impl ElementType {
    /// Every element type, in code order
    pub const ALL: [ElementType; 18] = [
        ElementType::Float32,
        ElementType::UInt8,
        ElementType::Int8,
        ElementType::UInt16,
        ElementType::Int16,
        ElementType::Int32,
        ElementType::Int64,
        ElementType::String,
        ElementType::Bool,
        ElementType::Float16,
        ElementType::Float64,
        ElementType::UInt32,
        ElementType::UInt64,
        ElementType::Complex64,
        ElementType::Complex128,
        ElementType::BFloat16,
        ElementType::Float8E4M3,
        ElementType::Float8E5M2,
    ];

    /// Convert from a `data_type` code
    pub fn from_u32(value: u32) -> Result<Self> {
        match value {
            1 => Ok(ElementType::Float32),
            2 => Ok(ElementType::UInt8),
            3 => Ok(ElementType::Int8),
            4 => Ok(ElementType::UInt16),
            5 => Ok(ElementType::Int16),
            6 => Ok(ElementType::Int32),
            7 => Ok(ElementType::Int64),
            8 => Ok(ElementType::String),
            9 => Ok(ElementType::Bool),
            10 => Ok(ElementType::Float16),
            11 => Ok(ElementType::Float64),
            12 => Ok(ElementType::UInt32),
            13 => Ok(ElementType::UInt64),
            14 => Ok(ElementType::Complex64),
            15 => Ok(ElementType::Complex128),
            16 => Ok(ElementType::BFloat16),
            17 => Ok(ElementType::Float8E4M3),
            19 => Ok(ElementType::Float8E5M2),
            _ => Err(TensorError::UnknownDataType(value)),
        }
    }

    /// The `data_type` code
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Size in bytes of one element, `None` for strings
    pub fn element_size(self) -> Option<usize> {
        match self {
            ElementType::Bool
            | ElementType::Int8
            | ElementType::UInt8
            | ElementType::Float8E4M3
            | ElementType::Float8E5M2 => Some(1),
            ElementType::Int16
            | ElementType::UInt16
            | ElementType::Float16
            | ElementType::BFloat16 => Some(2),
            ElementType::Int32 | ElementType::UInt32 | ElementType::Float32 => Some(4),
            ElementType::Int64
            | ElementType::UInt64
            | ElementType::Float64
            | ElementType::Complex64 => Some(8),
            ElementType::Complex128 => Some(16),
            ElementType::String => None,
        }
    }

    /// Check if elements vary in size
    pub fn is_variable_size(self) -> bool {
        self.element_size().is_none()
    }

    /// The compact float format of this type, if it is one
    pub fn compact_format(self) -> Option<CompactFormat> {
        match self {
            ElementType::BFloat16 => Some(CompactFormat::BFloat16),
            ElementType::Float16 => Some(CompactFormat::Float16),
            ElementType::Float8E4M3 => Some(CompactFormat::Float8E4M3),
            ElementType::Float8E5M2 => Some(CompactFormat::Float8E5M2),
            _ => None,
        }
    }

    /// Map an in-memory element kind to its tensor element type
    pub fn from_kind(kind: ElementKind) -> Result<Self> {
        match kind {
            ElementKind::Bool => Ok(ElementType::Bool),
            ElementKind::I8 => Ok(ElementType::Int8),
            ElementKind::I16 => Ok(ElementType::Int16),
            ElementKind::I32 => Ok(ElementType::Int32),
            ElementKind::I64 => Ok(ElementType::Int64),
            ElementKind::U8 => Ok(ElementType::UInt8),
            ElementKind::U16 => Ok(ElementType::UInt16),
            ElementKind::U32 => Ok(ElementType::UInt32),
            ElementKind::U64 => Ok(ElementType::UInt64),
            ElementKind::F16 => Ok(ElementType::Float16),
            ElementKind::BF16 => Ok(ElementType::BFloat16),
            ElementKind::F8E4M3 => Ok(ElementType::Float8E4M3),
            ElementKind::F8E5M2 => Ok(ElementType::Float8E5M2),
            ElementKind::F32 => Ok(ElementType::Float32),
            ElementKind::F64 => Ok(ElementType::Float64),
            ElementKind::C64 => Ok(ElementType::Complex64),
            ElementKind::C128 => Ok(ElementType::Complex128),
            ElementKind::Str => Ok(ElementType::String),
            ElementKind::I128 | ElementKind::U128 => {
                Err(TensorError::UnsupportedElementType(kind.name().to_string()))
            }
        }
    }

    /// The in-memory element kind a decoded tensor of this type holds
    pub fn kind(self) -> ElementKind {
        match self {
            ElementType::Bool => ElementKind::Bool,
            ElementType::Int8 => ElementKind::I8,
            ElementType::Int16 => ElementKind::I16,
            ElementType::Int32 => ElementKind::I32,
            ElementType::Int64 => ElementKind::I64,
            ElementType::UInt8 => ElementKind::U8,
            ElementType::UInt16 => ElementKind::U16,
            ElementType::UInt32 => ElementKind::U32,
            ElementType::UInt64 => ElementKind::U64,
            ElementType::Float16 => ElementKind::F16,
            ElementType::BFloat16 => ElementKind::BF16,
            ElementType::Float8E4M3 => ElementKind::F8E4M3,
            ElementType::Float8E5M2 => ElementKind::F8E5M2,
            ElementType::Float32 => ElementKind::F32,
            ElementType::Float64 => ElementKind::F64,
            ElementType::Complex64 => ElementKind::C64,
            ElementType::Complex128 => ElementKind::C128,
            ElementType::String => ElementKind::Str,
        }
    }

    /// Upper-case type name as used in `data_type` tables
    pub fn name(self) -> &'static str {
        match self {
            ElementType::Float32 => "FLOAT",
            ElementType::UInt8 => "UINT8",
            ElementType::Int8 => "INT8",
            ElementType::UInt16 => "UINT16",
            ElementType::Int16 => "INT16",
            ElementType::Int32 => "INT32",
            ElementType::Int64 => "INT64",
            ElementType::String => "STRING",
            ElementType::Bool => "BOOL",
            ElementType::Float16 => "FLOAT16",
            ElementType::Float64 => "DOUBLE",
            ElementType::UInt32 => "UINT32",
            ElementType::UInt64 => "UINT64",
            ElementType::Complex64 => "COMPLEX64",
            ElementType::Complex128 => "COMPLEX128",
            ElementType::BFloat16 => "BFLOAT16",
            ElementType::Float8E4M3 => "FLOAT8E4M3FN",
            ElementType::Float8E5M2 => "FLOAT8E5M2",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Element kind of an in-memory array
///
/// This is what a numeric library declares for its arrays. Not every kind
/// has a tensor element type: 128-bit integers do not.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F16,
    BF16,
    F8E4M3,
    F8E5M2,
    F32,
    F64,
    C64,
    C128,
    Str,
}

impl ElementKind {
    /// Dtype-style name of the kind
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Bool => "bool",
            ElementKind::I8 => "int8",
            ElementKind::I16 => "int16",
            ElementKind::I32 => "int32",
            ElementKind::I64 => "int64",
            ElementKind::I128 => "int128",
            ElementKind::U8 => "uint8",
            ElementKind::U16 => "uint16",
            ElementKind::U32 => "uint32",
            ElementKind::U64 => "uint64",
            ElementKind::U128 => "uint128",
            ElementKind::F16 => "float16",
            ElementKind::BF16 => "bfloat16",
            ElementKind::F8E4M3 => "float8_e4m3fn",
            ElementKind::F8E5M2 => "float8_e5m2",
            ElementKind::F32 => "float32",
            ElementKind::F64 => "float64",
            ElementKind::C64 => "complex64",
            ElementKind::C128 => "complex128",
            ElementKind::Str => "str",
        }
    }
}

impl std::str::FromStr for ElementKind {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.to_ascii_lowercase().as_str() {
            "bool" => ElementKind::Bool,
            "int8" | "i8" => ElementKind::I8,
            "int16" | "i16" => ElementKind::I16,
            "int32" | "i32" => ElementKind::I32,
            "int64" | "i64" => ElementKind::I64,
            "int128" | "i128" => ElementKind::I128,
            "uint8" | "u8" => ElementKind::U8,
            "uint16" | "u16" => ElementKind::U16,
            "uint32" | "u32" => ElementKind::U32,
            "uint64" | "u64" => ElementKind::U64,
            "uint128" | "u128" => ElementKind::U128,
            "float16" | "f16" | "half" => ElementKind::F16,
            "bfloat16" | "bf16" => ElementKind::BF16,
            "float8_e4m3fn" | "float8e4m3" | "e4m3" => ElementKind::F8E4M3,
            "float8_e5m2" | "float8e5m2" | "e5m2" => ElementKind::F8E5M2,
            "float32" | "f32" | "float" => ElementKind::F32,
            "float64" | "f64" | "double" => ElementKind::F64,
            "complex64" | "c64" => ElementKind::C64,
            "complex128" | "c128" => ElementKind::C128,
            "str" | "string" | "object" => ElementKind::Str,
            _ => return Err(TensorError::UnsupportedElementType(s.to_string())),
        };
        Ok(kind)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
