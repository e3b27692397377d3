//! Constructor argument encoding invariants

use authdeploy::domain::value_objects::ConstructorArg;
use authdeploy::infrastructure::evm::abi::{encode_constructor_args, parse_address};
use proptest::prelude::*;

const WORD: usize = 32;

fn constructor_arg() -> impl Strategy<Value = ConstructorArg> {
    prop_oneof![
        any::<[u8; 20]>()
            .prop_map(|bytes| ConstructorArg::address(format!("0x{}", hex::encode(bytes)))),
        ".{0,80}".prop_map(|text: String| ConstructorArg::text(text)),
    ]
}

fn word_as_usize(bytes: &[u8]) -> usize {
    let mut value = [0u8; 8];
    value.copy_from_slice(&bytes[WORD - 8..WORD]);
    u64::from_be_bytes(value) as usize
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Any 20 bytes written as 0x-hex parse back to the same bytes
    #[test]
    fn property_parse_address_accepts_any_hex_address(bytes in any::<[u8; 20]>(), upper in any::<bool>()) {
        let digits = hex::encode(bytes);
        let digits = if upper { digits.to_uppercase() } else { digits };
        let prefixed = format!("0x{}", digits);

        let parsed = parse_address(&prefixed).unwrap();
        prop_assert_eq!(parsed.as_bytes(), &bytes[..]);
    }

    /// Without the prefix or at the wrong length, an address is rejected
    #[test]
    fn property_parse_address_rejects_bad_shapes(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        let digits = hex::encode(&bytes);
        let unprefixed = parse_address(&digits);
        prop_assert!(unprefixed.is_err());

        if bytes.len() != 20 {
            let prefixed = format!("0x{}", digits);
            let wrong_length = parse_address(&prefixed);
            prop_assert!(wrong_length.is_err());
        }
    }

    /// Encoding is word-aligned and its head holds one word per argument
    #[test]
    fn property_encoding_is_word_aligned(args in prop::collection::vec(constructor_arg(), 0..6)) {
        let encoded = encode_constructor_args(&args).unwrap();
        prop_assert_eq!(encoded.len() % WORD, 0);
        let head_len = args.len() * WORD;
        prop_assert!(encoded.len() >= head_len);

        let tail_len: usize = args
            .iter()
            .map(|arg| match arg {
                ConstructorArg::Address(_) => 0,
                ConstructorArg::Text(text) => WORD + text.len().div_ceil(WORD) * WORD,
            })
            .sum();
        prop_assert_eq!(encoded.len(), head_len + tail_len);
    }

    /// Each string's head word points at its length, followed by its bytes
    #[test]
    fn property_string_offsets_point_at_contents(args in prop::collection::vec(constructor_arg(), 1..6)) {
        let encoded = encode_constructor_args(&args).unwrap();

        for (index, arg) in args.iter().enumerate() {
            let head = &encoded[index * WORD..(index + 1) * WORD];
            match arg {
                ConstructorArg::Address(address) => {
                    let padding_is_zero = head[..12].iter().all(|b| *b == 0);
                    prop_assert!(padding_is_zero);
                    let expected = parse_address(address.as_str()).unwrap();
                    prop_assert_eq!(&head[12..], expected.as_bytes());
                }
                ConstructorArg::Text(text) => {
                    let offset = word_as_usize(head);
                    prop_assert_eq!(offset % WORD, 0);
                    let length = word_as_usize(&encoded[offset..offset + WORD]);
                    prop_assert_eq!(length, text.len());
                    let start = offset + WORD;
                    prop_assert_eq!(&encoded[start..start + length], text.as_bytes());
                }
            }
        }
    }
}
