//! Unit tests for the tensor module

use tensor_codec::prelude::*;

mod tensor_shape_tests {
    use super::*;

    #[test]
    fn test_element_count() {
        assert_eq!(TensorShape::new(vec![13, 37]).unwrap().element_count(), 481);
        assert_eq!(TensorShape::new(vec![2, 0, 7]).unwrap().element_count(), 0);
        assert_eq!(TensorShape::scalar().element_count(), 1);
    }

    #[test]
    fn test_row_major_addressing() {
        let shape = TensorShape::new(vec![13, 37]).unwrap();
        assert_eq!(shape.strides(), vec![37, 1]);
        assert_eq!(shape.flat_index(&[1, 0]), Some(37));
        assert_eq!(shape.flat_index(&[12, 36]), Some(480));
        assert_eq!(shape.flat_index(&[13, 0]), None);
    }
}

mod tensor_buffer_tests {
    use super::*;

    #[test]
    fn test_construction_validates_byte_length() {
        for element_type in ElementType::ALL {
            let Some(size) = element_type.element_size() else { continue };

            let ok = TensorBuffer::from_raw_bytes("t", element_type, vec![3, 2], vec![0; 6 * size]);
            assert!(ok.is_ok(), "{}", element_type);

            let short =
                TensorBuffer::from_raw_bytes("t", element_type, vec![3, 2], vec![0; 6 * size - 1]);
            assert!(matches!(short, Err(TensorError::SizeMismatch { .. })), "{}", element_type);
        }
    }

    #[test]
    fn test_string_table_must_match_count() {
        let entries = vec![b"Amy".to_vec(), b"Billy".to_vec(), b"Cindy".to_vec()];
        assert!(TensorBuffer::from_strings("s", vec![3], entries.clone()).is_ok());
        assert!(TensorBuffer::from_strings("s", vec![2, 2], entries).is_err());
        assert!(TensorBuffer::from_strings("s", vec![0], Vec::new()).is_ok());
    }

    #[test]
    fn test_byte_at_uses_element_width() {
        let bytes: Vec<u8> = (0..16).collect();
        let tensor =
            TensorBuffer::from_raw_bytes("c", ElementType::Complex64, vec![2], bytes).unwrap();

        assert_eq!(tensor.byte_at(1).unwrap(), &[8, 9, 10, 11, 12, 13, 14, 15]);
        assert!(matches!(
            tensor.byte_at(2),
            Err(TensorError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_string_at_rejects_numeric_tensor() {
        let tensor =
            TensorBuffer::from_raw_bytes("n", ElementType::UInt8, vec![1], vec![65]).unwrap();
        assert!(matches!(tensor.string_at(0), Err(TensorError::InvalidTensorData(_))));
    }

    #[test]
    fn test_overflowing_shape_is_rejected() {
        let shape = vec![u64::MAX / 2, 4];
        let result = TensorBuffer::from_raw_bytes("huge", ElementType::Float64, shape, Vec::new());
        assert!(matches!(result, Err(TensorError::InvalidTensorData(_))));
    }
}

mod string_codec_tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        let names = ["Amy", "Billy", "Cindy", "David"];
        let encoded = StringTensorCodec::encode(&names);
        assert_eq!(StringTensorCodec::decode(&encoded).unwrap(), names);
    }

    #[test]
    fn test_lengths_are_explicit() {
        let encoded = StringTensorCodec::encode(&["", "\0", "ß"]);
        let lengths: Vec<usize> = encoded.iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![0, 1, 2]);
    }

    #[test]
    fn test_first_bad_entry_is_reported() {
        let entries = vec![vec![0xFF], vec![0xFE]];
        assert!(matches!(
            StringTensorCodec::decode(&entries),
            Err(TensorError::InvalidUtf8 { index: 0, .. })
        ));
    }
}
