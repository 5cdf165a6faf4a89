// Emission suite: exact text, edge cases and layout invariants.

#[cfg(test)]
mod tests {
    use modelhdr_core::headers::{encode_header, payload_line_count, write_header, HeaderView, Identifier};
    use proptest::prelude::*;

    fn payload_lines(text: &str) -> Vec<&str> {
        let start = text.find("[] = {\n").unwrap() + "[] = {\n".len();
        let end = text.find("\n};\n").unwrap();
        text[start..end].lines().filter(|l| !l.is_empty()).collect()
    }

// ## 1. Exact output

    #[test]
    fn four_bytes_exact_text() {
        let a = encode_header(&[0x00, 0x01, 0x0A, 0xFF], &Identifier::new("m"));
        let expected = "#ifndef M_H\n\
                        #define M_H\n\
                        \n\
                        const unsigned char m[] = {\n\
                        \n    0x00, 0x01, 0x0A, 0xFF, \n\
                        };\n\
                        \n\
                        const unsigned int m_len = 4;\n\
                        \n\
                        #endif // M_H\n";
        assert_eq!(a.as_str(), expected);
        assert_eq!(a.byte_len(), 4);
    }

    #[test]
    fn four_bytes_contains_expected_lines() {
        let a = encode_header(&[0x00, 0x01, 0x0A, 0xFF], &Identifier::new("m"));
        let lines: Vec<&str> = a.as_str().lines().collect();
        assert!(lines.contains(&"const unsigned char m[] = {"));
        assert!(lines.contains(&"    0x00, 0x01, 0x0A, 0xFF, "));
        assert!(lines.contains(&"};"));
        assert!(lines.contains(&"const unsigned int m_len = 4;"));
    }

    #[test]
    fn empty_input_has_empty_body() {
        let a = encode_header(&[], &Identifier::new("empty"));
        let expected = "#ifndef EMPTY_H\n#define EMPTY_H\n\n\
                        const unsigned char empty[] = {\n\n};\n\n\
                        const unsigned int empty_len = 0;\n\n\
                        #endif // EMPTY_H\n";
        assert_eq!(a.as_str(), expected);
        assert_eq!(a.payload_lines(), 0);
    }

    #[test]
    fn thirteen_bytes_wrap_after_twelve() {
        let bytes: Vec<u8> = (0u8..13).collect();
        let a = encode_header(&bytes, &Identifier::new("w"));
        let body = payload_lines(a.as_str());
        assert_eq!(
            body,
            vec![
                "    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, ",
                "    0x0C, ",
            ]
        );
    }

    #[test]
    fn hex_is_uppercase_two_digits() {
        let a = encode_header(&[0xab, 0x0c, 0x7], &Identifier::new("x"));
        assert!(a.as_str().contains("0xAB, 0x0C, 0x07, "));
        assert!(!a.as_str().contains("0xab"));
    }

// ## 2. Identifier handling

    #[test]
    fn guard_is_uppercased_names_keep_case() {
        let a = encode_header(&[1], &Identifier::new("brightness_Model"));
        let text = a.as_str();
        assert!(text.starts_with("#ifndef BRIGHTNESS_MODEL_H\n#define BRIGHTNESS_MODEL_H\n"));
        assert!(text.contains("const unsigned char brightness_Model[] = {"));
        assert!(text.contains("const unsigned int brightness_Model_len = 1;"));
        assert!(text.ends_with("#endif // BRIGHTNESS_MODEL_H\n"));
    }

    #[test]
    fn identifier_is_not_sanitized() {
        let a = encode_header(&[1], &Identifier::new("my-model.v2"));
        assert!(a.as_str().contains("const unsigned char my-model.v2[] = {"));
        assert!(a.as_str().contains("#ifndef MY-MODEL.V2_H"));
    }

    #[test]
    fn identifier_helpers() {
        let id = Identifier::from("abc");
        assert_eq!(id.guard_token(), "ABC_H");
        assert_eq!(id.len_name(), "abc_len");
        assert_eq!(id.to_string(), "abc");
    }

// ## 3. Sinks

    #[test]
    fn write_header_matches_encode_header() {
        let bytes: Vec<u8> = (0..=255).collect();
        let id = Identifier::new("all_bytes");
        let mut out = Vec::new();
        write_header(&mut out, &bytes, &id).unwrap();
        assert_eq!(out, encode_header(&bytes, &id).as_bytes());
        assert_eq!(HeaderView::new(&bytes, &id).to_string().as_bytes(), out.as_slice());
    }

    #[test]
    fn write_to_matches_text() {
        let a = encode_header(b"hello", &Identifier::new("h"));
        let mut out = Vec::new();
        a.write_to(&mut out).unwrap();
        assert_eq!(out, a.as_bytes());
    }

    #[test]
    fn payload_line_count_rounds_up() {
        assert_eq!(payload_line_count(0), 0);
        assert_eq!(payload_line_count(1), 1);
        assert_eq!(payload_line_count(12), 1);
        assert_eq!(payload_line_count(13), 2);
        assert_eq!(payload_line_count(24), 2);
    }

// ## 4. Properties

    proptest! {
        #[test]
        fn prop_len_constant_matches(bytes in proptest::collection::vec(any::<u8>(), 0..600)) {
            let a = encode_header(&bytes, &Identifier::new("p"));
            let needle = format!("const unsigned int p_len = {};", bytes.len());
            prop_assert!(a.as_str().contains(&needle));
        }

        #[test]
        fn prop_lines_hold_twelve_tokens(bytes in proptest::collection::vec(any::<u8>(), 0..600)) {
            let a = encode_header(&bytes, &Identifier::new("p"));
            let body = payload_lines(a.as_str());
            prop_assert_eq!(body.len(), payload_line_count(bytes.len()));
            for (i, line) in body.iter().enumerate() {
                prop_assert!(line.starts_with("    "));
                let n = line.split_whitespace().count();
                prop_assert!(n <= 12);
                if i + 1 < body.len() {
                    prop_assert_eq!(n, 12);
                }
            }
        }

        #[test]
        fn prop_guard_tokens_identical(name in "[a-z_][a-z0-9_]{0,15}") {
            let a = encode_header(&[0x42], &Identifier::new(name.clone()));
            let guard = format!("{}_H", name.to_uppercase());
            let text = a.as_str();
            let ifndef_line = format!("#ifndef {}\n", guard);
            let define_line = format!("#define {}\n", guard);
            let endif_line = format!("#endif // {}\n", guard);
            prop_assert!(text.contains(&ifndef_line));
            prop_assert!(text.contains(&define_line));
            prop_assert!(text.ends_with(&endif_line));
        }
    }
}
