//! Proportional Width Estimation
//!
//! Approximates how wide a string renders in a proportional font, measured in
//! units close to monospace character counts.
//!
//! Every printable ASCII character belongs to one of nine width classes. The
//! class widths are relative to the widest glyph, and the per-class sum is
//! scaled by [`COMPENSATION`] so that average English text measures about the
//! same as its character count. Characters without a class (space, control
//! characters, anything outside ASCII) are free: they add nothing.

/// Average letter width relative to monospace, derived from English letter frequency.
pub const COMPENSATION: f64 = 2.27;

/// Relative width of each width class, indexed by class id.
pub const CLASS_WIDTHS: [f64; 9] = [
    0.1847, 0.2753, 0.3659, 0.4565, 0.5471, 0.6377, 0.7282, 0.9094, 1.0,
];

/// First codepoint with an entry in [`CHAR_CLASSES`] (`!`).
pub const FIRST_CLASSED: u32 = 33;

/// Last codepoint with an entry in [`CHAR_CLASSES`] (`~`).
pub const LAST_CLASSED: u32 = 126;

/// Width class of every printable ASCII character, indexed by `codepoint - 33`.
#[rustfmt::skip]
pub static CHAR_CLASSES: [u8; 94] = [
    // 33-47: ! " # $ % & ' ( ) * + , - . /
    0, 2, 4, 4, 7, 5, 0, 2, 2, 2, 4, 1, 2, 1, 1,
    // 48-63: 0 1 2 3 4 5 6 7 8 9 : ; < = > ?
    4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 1, 1, 4, 4, 4, 4,
    // 64-79: @ A B C D E F G H I J K L M N O
    8, 6, 5, 5, 5, 4, 4, 6, 5, 0, 3, 5, 4, 6, 5, 6,
    // 80-95: P Q R S T U V W X Y Z [ \ ] ^ _
    4, 6, 5, 5, 4, 5, 6, 7, 5, 6, 5, 1, 1, 1, 3, 4,
    // 96-111: ` a b c d e f g h i j k l m n o
    2, 4, 4, 4, 4, 4, 2, 4, 4, 0, 0, 3, 0, 6, 4, 4,
    // 112-126: p q r s t u v w x y z { | } ~
    4, 4, 2, 4, 1, 4, 4, 7, 4, 4, 4, 2, 0, 2, 4,
];

/// Width class of `c`, or `None` when the character has no entry.
pub fn char_class(c: char) -> Option<u8> {
    let code = c as u32;
    if !(FIRST_CLASSED..=LAST_CLASSED).contains(&code) {
        return None;
    }
    CHAR_CLASSES.get((code - FIRST_CLASSED) as usize).copied()
}

/// Raw (uncompensated) width of a single character.
///
/// Unlisted characters weigh `0.0`; this lookup never fails.
pub fn char_width(c: char) -> f64 {
    char_class(c)
        .and_then(|class| CLASS_WIDTHS.get(class as usize).copied())
        .unwrap_or(0.0)
}

/// Sum of raw character widths, before compensation.
pub fn raw_length(text: &str) -> f64 {
    text.chars().map(char_width).sum()
}

/// Estimated width of `text` in average monospace units.
///
/// `length("")` is `0.0`. Whitespace and unlisted characters do not count.
pub fn length(text: &str) -> f64 {
    raw_length(text) * COMPENSATION
}

/// Convert a width in monospace units into raw class units.
pub fn to_raw(width: f64) -> f64 {
    width / COMPENSATION
}

/// Convert raw class units back into monospace units.
pub fn from_raw(raw: f64) -> f64 {
    raw * COMPENSATION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_printable_ascii_char_has_a_class() {
        for code in FIRST_CLASSED..=LAST_CLASSED {
            let c = char::from_u32(code).unwrap();
            let class = char_class(c);
            assert!(class.is_some(), "missing class for {:?}", c);
            assert!((class.unwrap() as usize) < CLASS_WIDTHS.len());
        }
    }

    #[test]
    fn test_unlisted_chars_are_free() {
        for c in [' ', '\n', '\t', '\r', '\0', '\u{7f}', 'é', '€', '日', '🦀'] {
            assert_eq!(char_class(c), None, "{:?} should have no class", c);
            assert_eq!(char_width(c), 0.0);
        }
        assert_eq!(length("   \n\t"), 0.0);
        assert_eq!(length("日本語"), 0.0);
    }

    #[test]
    fn test_known_classes() {
        assert_eq!(char_class('!'), Some(0));
        assert_eq!(char_class('i'), Some(0));
        assert_eq!(char_class('t'), Some(1));
        assert_eq!(char_class('e'), Some(4));
        assert_eq!(char_class('m'), Some(6));
        assert_eq!(char_class('W'), Some(7));
        assert_eq!(char_class('@'), Some(8));
        assert_eq!(char_class('~'), Some(4));
    }

    #[test]
    fn test_empty_length_is_zero() {
        assert_eq!(length(""), 0.0);
        assert_eq!(raw_length(""), 0.0);
    }

    #[test]
    fn test_length_applies_compensation() {
        // "@@" is two full-width glyphs
        assert!((raw_length("@@") - 2.0).abs() < 1e-12);
        assert!((length("@@") - 2.0 * COMPENSATION).abs() < 1e-12);
    }

    #[test]
    fn test_spaces_do_not_change_length() {
        assert_eq!(length("hello world"), length("helloworld"));
    }

    #[test]
    fn test_raw_conversion_round_trips() {
        let width = 75.0;
        assert!((from_raw(to_raw(width)) - width).abs() < 1e-9);
    }

    #[test]
    fn test_narrow_text_is_shorter_than_wide_text() {
        assert!(length("iiii") < length("mmmm"));
        assert!(length("llll") < length("WWWW"));
    }
}
