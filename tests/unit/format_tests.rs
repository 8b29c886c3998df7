//! Unit tests for element types, element kinds and byte layouts

use tensor_codec::format::*;
use tensor_codec::prelude::*;

mod element_type_tests {
    use super::*;

    #[test]
    fn test_data_type_codes() {
        let expected = [
            (ElementType::Float32, 1),
            (ElementType::UInt8, 2),
            (ElementType::Int8, 3),
            (ElementType::UInt16, 4),
            (ElementType::Int16, 5),
            (ElementType::Int32, 6),
            (ElementType::Int64, 7),
            (ElementType::String, 8),
            (ElementType::Bool, 9),
            (ElementType::Float16, 10),
            (ElementType::Float64, 11),
            (ElementType::UInt32, 12),
            (ElementType::UInt64, 13),
            (ElementType::Complex64, 14),
            (ElementType::Complex128, 15),
            (ElementType::BFloat16, 16),
            (ElementType::Float8E4M3, 17),
            (ElementType::Float8E5M2, 19),
        ];

        for (element_type, code) in expected {
            assert_eq!(element_type.code(), code);
            assert_eq!(ElementType::from_u32(code).unwrap(), element_type);
        }
    }

    #[test]
    fn test_unknown_codes() {
        for code in [0, 18, 20, 21, 999] {
            assert!(matches!(
                ElementType::from_u32(code),
                Err(TensorError::UnknownDataType(c)) if c == code
            ));
        }
    }

    #[test]
    fn test_element_sizes_match_layouts() {
        assert_eq!(ElementType::Bool.element_size(), Some(<bool as LeBytes>::WIDTH));
        assert_eq!(ElementType::Int64.element_size(), Some(<i64 as LeBytes>::WIDTH));
        assert_eq!(ElementType::Float64.element_size(), Some(<f64 as LeBytes>::WIDTH));
        assert_eq!(ElementType::Complex64.element_size(), Some(<Complex32 as LeBytes>::WIDTH));
        assert_eq!(ElementType::Complex128.element_size(), Some(<Complex64 as LeBytes>::WIDTH));

        for element_type in ElementType::ALL {
            if let Some(format) = element_type.compact_format() {
                let bits = format.layout().width() as usize;
                assert_eq!(element_type.element_size(), Some(bits / 8));
            }
        }
    }
}

mod element_kind_tests {
    use super::*;

    #[test]
    fn test_dtype_names() {
        let cases = [
            ("bool", ElementKind::Bool),
            ("int16", ElementKind::I16),
            ("uint64", ElementKind::U64),
            ("half", ElementKind::F16),
            ("bfloat16", ElementKind::BF16),
            ("float8_e5m2", ElementKind::F8E5M2),
            ("double", ElementKind::F64),
            ("complex64", ElementKind::C64),
            ("string", ElementKind::Str),
        ];

        for (name, kind) in cases {
            assert_eq!(name.parse::<ElementKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_dtype_name() {
        match "float4".parse::<ElementKind>() {
            Err(TensorError::UnsupportedElementType(name)) => assert_eq!(name, "float4"),
            other => panic!("expected UnsupportedElementType, got {:?}", other),
        }
    }

    #[test]
    fn test_wide_integers_have_no_element_type() {
        assert!(ElementType::from_kind(ElementKind::I128).is_err());
        assert!(ElementType::from_kind(ElementKind::U128).is_err());
        assert_eq!(ElementType::from_kind(ElementKind::C128).unwrap(), ElementType::Complex128);
    }
}

mod layout_tests {
    use super::*;

    #[test]
    fn test_little_endian_elements() {
        assert_eq!(write_elements(&[0x0102_0304u32]), vec![0x04, 0x03, 0x02, 0x01]);
        assert_eq!(write_elements(&[-1i16]), vec![0xFF, 0xFF]);
        assert_eq!(write_elements(&[1.0f64]), 1.0f64.to_le_bytes().to_vec());
        assert_eq!(read_elements::<u16>(&[0x34, 0x12, 0x78, 0x56]), vec![0x1234, 0x5678]);
    }

    #[test]
    fn test_complex_real_part_first() {
        let bytes = write_elements(&[Complex64::new(1.0, 2.0)]);
        assert_eq!(&bytes[..8], &1.0f64.to_le_bytes());
        assert_eq!(&bytes[8..], &2.0f64.to_le_bytes());
        assert_eq!(read_elements::<Complex64>(&bytes), vec![Complex64::new(1.0, 2.0)]);
    }

    #[test]
    fn test_bool_bytes() {
        assert_eq!(write_elements(&[true, false, true]), vec![1, 0, 1]);
        assert_eq!(read_elements::<bool>(&[0, 1, 0x80]), vec![false, true, true]);
    }
}
