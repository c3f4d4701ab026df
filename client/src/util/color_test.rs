use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("AABBCC"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("#+1+2+3"), None);
}

#[test]
fn hex_color_canonicalizes_to_upper_long_form() {
    assert_eq!(HexColor::parse("#fe11c5").unwrap().as_str(), "#FE11C5");
    assert_eq!(HexColor::parse(" #abc ").unwrap().as_str(), "#AABBCC");
}

#[test]
fn hex_color_rejects_named_colors() {
    assert_eq!(HexColor::parse("blue"), Err(InvalidColor("blue".to_owned())));
}

#[test]
fn hex_color_deserialize_validates() {
    let ok: HexColor = serde_json::from_str("\"#00ff00\"").unwrap();
    assert_eq!(ok.to_string(), "#00FF00");
    assert!(serde_json::from_str::<HexColor>("\"green\"").is_err());
}

#[test]
fn hex_color_serializes_as_plain_string() {
    let color = HexColor::parse("#123456").unwrap();
    assert_eq!(serde_json::to_string(&color).unwrap(), "\"#123456\"");
}

#[test]
fn hex_color_rgb_matches_parse() {
    assert_eq!(HexColor::rgb(0xfe, 0x11, 0xc5), HexColor::parse("#fe11c5").unwrap());
}
