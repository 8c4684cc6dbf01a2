use super::*;

#[test]
fn color_for_is_accent_only_when_active() {
    assert_eq!(color_for(true), ColorToken::Accent);
    assert_eq!(color_for(false), ColorToken::Neutral);
}

#[test]
fn color_tokens_map_to_fixed_hex() {
    assert_eq!(ColorToken::Neutral.hex(), "#687074");
    assert_eq!(ColorToken::Accent.hex(), "#f48024");
}

#[test]
fn fill_style_formats_svg_fill() {
    assert_eq!(ColorToken::Accent.fill_style(), "fill: #f48024");
    assert_eq!(color_for(false).fill_style(), "fill: #687074");
    assert!(!ColorToken::Neutral.fill_style().ends_with(';'));
}
