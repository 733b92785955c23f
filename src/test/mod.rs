// SPDX-FileCopyrightText: © 2020 Robin Ole Heinemann <robin.ole.heinemann@gmail.com>
// SPDX-License-Identifier: AGPL-3.0-only

#[cfg(test)]
mod tests {
    use crate::{
        config::Config,
        info::{ALL_VIEWS_DISABLED, FORCE_HEX_MARKER},
        peek::{parse_text, peek, peek_at},
    };

    fn peek_token(token: &str, c: &Config) -> Option<String> { parse_text(token, c).map(|v| peek(&v, c)) }

    macro_rules! test_peek {
        ($name:ident, $token:expr, $config:expr, [$($line:expr),* $(,)?]) => {
            #[test]
            fn $name() {
                let lines: &[&str] = &[$($line),*];
                assert_eq!(peek_token($token, &$config), Some(lines.join("\n")));
            }
        };
    }

    test_peek!(zero, "0", Config::default(), [
        "Bin: .... ....",
        "     ---+ ---+",
        "        4    0",
        "",
        "Hex: 00 (8-bit)",
        "Str:  . (0)",
        "Dec: 0 (0 B)",
    ]);

    test_peek!(octal_permission, "0o777", Config::default(), [
        "File Permission:",
        "  r w x  r w x  r w x",
        "  -----  -----  -----",
        "  User   Group  Other",
        "",
        "Hex: 01FF (16-bit)",
        "Str:  . . (1, 255)",
        "Dec: 511 (511 B)",
    ]);

    test_peek!(octal_raw_bits, "0o777", Config { raw_bits: true, show_str: false, ..Config::default() }, [
        "Bin: 0000 0001 1111 1111",
        "Hex: 01FF (16-bit)",
        "Dec: 511 (511 B)",
    ]);

    test_peek!(suffixed_decimal, "111i8", Config::default(), [
        "Bin: .11. 1111",
        "     ---+ ---+",
        "        4    0",
        "",
        "Hex: 6F (8-bit)",
        "Str:  o (111)",
        "Dec: 111 (111 B)",
    ]);

    test_peek!(msb0_bytes, "0xA5A5", Config { msb0: true, group_by_bytes: true, register_view: false, ..Config::default() }, [
        "Bin: 10100101 10100101",
        "     +------- +-------",
        "     0        8       ",
        "",
        "Hex: A5A5 (16-bit)",
        "Str:  . . (165, 165)",
        "Dec: 42,405 (41.411 KiB) / -23,131",
    ]);

    test_peek!(negative_32_bit, "-32769", Config { show_bin: false, show_str: false, ..Config::default() }, [
        "Hex: FFFF 7FFF (32-bit)",
        "Dec: 4,294,934,527 (4.000 GiB) / -32,769",
    ]);

    test_peek!(largest_unsigned, "18446744073709551615", Config { show_bin: false, show_str: false, ..Config::default() }, [
        "Hex: FFFF FFFF FFFF FFFF (64-bit)",
        "Dec: 18,446,744,073,709,551,615 (16.000 EiB) / -1",
    ]);

    test_peek!(hexdump_token, "ff", Config { force_hex: true, show_bin: false, show_str: false, ..Config::default() }, [
        "Hex: FF (8-bit)",
        "Dec: 255 (255 B) / -1",
        FORCE_HEX_MARKER,
    ]);

    test_peek!(everything_hidden, "0x1", Config {
        show_bin: false,
        show_hex: false,
        show_str: false,
        show_dec: false,
        ..Config::default()
    }, [ALL_VIEWS_DISABLED]);

    #[test]
    fn padding_sets_width() {
        let c = Config { show_bin: false, show_str: false, show_size: false, ..Config::default() };

        assert_eq!(peek_token("0x1", &c), Some("Hex: 01 (8-bit)\nDec: 1".to_string()));
        assert_eq!(peek_token("0x0001", &c), Some("Hex: 0001 (16-bit)\nDec: 1".to_string()));
        // a leading zero makes it octal, the remaining digits set the width
        assert_eq!(peek_token("0001", &c), Some("Hex: 0001 (16-bit)\nDec: 1".to_string()));
        assert_eq!(peek_token("0000255", &c), Some("Hex: 0000 00AD (32-bit)\nDec: 173".to_string()));
        assert_eq!(peek_token("255", &c), Some("Hex: FF (8-bit)\nDec: 255 / -1".to_string()));
    }

    #[test]
    fn sixty_four_bit_rows() {
        let c = Config { show_hex: false, show_str: false, show_dec: false, ..Config::default() };
        let two_rows = peek_token("0x8000000000000001", &c).unwrap();
        assert_eq!(two_rows.lines().count(), 6);
        assert!(two_rows.starts_with("Bin:   60   56"));

        let c = Config { single_row: true, ..c };
        let one_row = peek_token("0x8000000000000001", &c).unwrap();
        assert_eq!(one_row.lines().count(), 3);
        assert!(one_row.starts_with("Bin: 1... ...."));
    }

    #[test]
    fn not_numbers() {
        let c = Config::default();

        for token in &["", "-", "abcd", "0x", "0b102", "-9223372036854775809", "18446744073709551616"] {
            assert_eq!(peek_token(token, &c), None, "peeking {}", token);
        }
    }

    #[test]
    fn hover_in_source_line() {
        let c = Config { show_bin: false, show_str: false, ..Config::default() };
        let line = "    mode = 0o644;";

        assert_eq!(peek_at(line, 12, &c), Some("Hex: 01A4 (16-bit)\nDec: 420 (420 B)".to_string()));
        assert_eq!(peek_at(line, 5, &c), None);

        let c = c.toggled_force_hex();
        assert_eq!(peek_at(line, 12, &c), None);
        assert_eq!(
            peek_at("00000010: 7f45 4c46", 11, &c),
            Some(["Hex: 7F45 (16-bit)", "Dec: 32,581 (31.817 KiB)", FORCE_HEX_MARKER].join("\n"))
        );
    }
}
