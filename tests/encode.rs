//! Encoder output format tests.

use pnghex::hexdump::parse_hexdump;
use pnghex::{encode, encode_plain, encode_xxd, HexError, Style};

#[test]
fn plain_is_lowercase_contiguous() {
    assert_eq!(encode_plain(&[0x89, 0x50, 0x4E, 0x47, 0x00, 0xFF]), "89504e4700ff");
    assert_eq!(encode(&[], Style::Plain), "");
}

#[test]
fn plain_is_the_default_style() {
    assert_eq!(Style::default(), Style::Plain);
}

#[test]
fn xxd_full_line() {
    let data: Vec<u8> = (0x41..0x51).collect();
    let out = encode_xxd(&data);
    assert_eq!(
        out,
        "00000000: 41 42 43 44 45 46 47 48 49 4a 4b 4c 4d 4e 4f 50   ABCDEFGHIJKLMNOP\n"
    );
}

#[test]
fn xxd_offsets_and_gloss() {
    let mut data = vec![0u8; 16];
    data.extend_from_slice(&[0x1f, 0x20, 0x7e, 0x7f, 0x89]);
    let out = encode_xxd(&data);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("00000000: 00 00"));
    assert!(lines[1].starts_with("00000010: 1f 20 7e 7f 89"));
    assert!(lines[1].ends_with("   . ~.."));
    assert!(out.ends_with('\n'));
}

#[test]
fn xxd_lines_have_fixed_hex_field() {
    let out = encode_xxd(&[0xab; 20]);
    for line in out.lines() {
        let after_offset = &line[10..];
        assert_eq!(&after_offset[48..50], "  ");
    }
}

#[test]
fn xxd_parses_back() {
    let data: Vec<u8> = (0..=255u8).collect();
    assert_eq!(parse_hexdump(&encode_xxd(&data)).unwrap(), data);
}

#[test]
fn style_from_str() {
    assert_eq!("plain".parse::<Style>().unwrap(), Style::Plain);
    assert_eq!("XXD".parse::<Style>().unwrap(), Style::Xxd);
    assert!(matches!("hexdump".parse::<Style>(), Err(HexError::InvalidStyle(s)) if s == "hexdump"));
    assert_eq!(Style::Xxd.to_string(), "xxd");
}
