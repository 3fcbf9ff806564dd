//! Inline color-escape markup.
//!
//! Color escapes are an application-level byte protocol, not part of
//! UTF-8: a tag byte introduces either a 2-byte digit code, a 5-byte RGB
//! hex code, or an escaped literal tag. Spans are zero width for display
//! but consume bytes, so the measurement layer has to recognize them.

use crate::{
    Utf8Codec,
    scanner::analyze,
    tables::{COLOR_RGB_TAG, COLOR_TAG},
};

/// Classification of the bytes at a [`COLOR_TAG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpan {
    /// Tag plus one decimal digit, 2 bytes, zero width.
    Digit,
    /// Tag, [`COLOR_RGB_TAG`] and three hex digits, 5 bytes, zero width.
    Rgb,
    /// Doubled tag. Only the first byte is markup; the second renders as
    /// one literal tag glyph.
    LiteralTag,
    /// Tag byte with nothing after it before the limit or terminator.
    /// Callers can repair the string by appending another tag byte.
    Unterminated,
    /// Anything that is not a color code, including a first byte that is
    /// not a tag at all.
    NotASpan,
}

impl ColorSpan {
    /// Classify the bytes at the front of `buf`. The slice must already be
    /// limited to the caller's budget: a code that does not fit entirely
    /// inside it is not recognized, so spans are atomic and never split by
    /// a budget.
    #[must_use]
    pub fn classify(buf: &[u8]) -> ColorSpan {
        if buf.first() != Some(&COLOR_TAG) {
            return ColorSpan::NotASpan;
        }
        match buf.get(1).copied() {
            None | Some(0) => ColorSpan::Unterminated,
            Some(b'0'..=b'9') => ColorSpan::Digit,
            Some(COLOR_RGB_TAG) if buf.len() >= 5 && buf[2..5].iter().all(u8::is_ascii_hexdigit) => {
                ColorSpan::Rgb
            }
            Some(COLOR_TAG) => ColorSpan::LiteralTag,
            Some(_) => ColorSpan::NotASpan,
        }
    }
}

impl Utf8Codec {
    /// Visible length of a color-coded string: characters that would render,
    /// with color-escape spans skipped at zero width.
    ///
    /// At most `max_bytes` bytes are examined and a 0 byte terminates the
    /// scan. `valid` is false exactly when the input ends in a bare tag
    /// byte; that tag still counts one visible character, and the caller
    /// may append a second tag byte to repair the string before storing it.
    ///
    /// An escaped literal tag counts one visible character. A tag followed
    /// by anything that is not a color code renders as itself, so the tag
    /// and the following byte both count.
    #[must_use]
    pub fn visible_length_with_markup(&self, buf: &[u8], max_bytes: usize) -> VisibleLength {
        let limit = max_bytes.min(buf.len());
        let utf8 = self.utf8_enabled();
        let mut chars = 0;
        let mut pos = 0;

        loop {
            if pos >= limit || buf[pos] == 0 {
                return VisibleLength { chars, valid: true };
            }

            if buf[pos] == COLOR_TAG {
                match ColorSpan::classify(&buf[pos..limit]) {
                    ColorSpan::Unterminated => {
                        chars += 1;
                        return VisibleLength {
                            chars,
                            valid: false,
                        };
                    }
                    ColorSpan::Digit => {
                        pos += 2;
                        continue;
                    }
                    ColorSpan::Rgb => {
                        pos += 5;
                        continue;
                    }
                    ColorSpan::LiteralTag => {
                        chars += 1;
                        pos += 2;
                        continue;
                    }
                    ColorSpan::NotASpan => {
                        // the tag renders, and so does the byte after it
                        chars += 2;
                        pos += 2;
                        continue;
                    }
                }
            }

            if !utf8 || buf[pos] < 0x80 {
                chars += 1;
                pos += 1;
                continue;
            }
            if buf[pos] < 0xC2 {
                pos += 1;
                continue;
            }
            match analyze(&buf[pos..limit], usize::MAX) {
                Some(seq) => {
                    chars += 1;
                    pos += seq.end();
                }
                // nothing decodable before the limit
                None => return VisibleLength { chars, valid: true },
            }
        }
    }
}

/// Result of [`Utf8Codec::visible_length_with_markup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleLength {
    /// Characters that would render.
    pub chars: usize,
    /// False when the input ends in an unterminated color escape.
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::digit(b"^1rest", ColorSpan::Digit)]
    #[case::rgb(b"^xA4f and more", ColorSpan::Rgb)]
    #[case::rgb_upper(b"^xFFF", ColorSpan::Rgb)]
    #[case::literal(b"^^", ColorSpan::LiteralTag)]
    #[case::bare_tail(b"^", ColorSpan::Unterminated)]
    #[case::nul_after_tag(b"^\0zzz", ColorSpan::Unterminated)]
    #[case::rgb_short(b"^xA4", ColorSpan::NotASpan)]
    #[case::rgb_bad_hex(b"^xA4g", ColorSpan::NotASpan)]
    #[case::plain(b"^q", ColorSpan::NotASpan)]
    fn span_classification(#[case] buf: &[u8], #[case] expected: ColorSpan) {
        assert_eq!(ColorSpan::classify(buf), expected);
    }

    #[test]
    fn color_codes_are_invisible() {
        let codec = Utf8Codec::new(true);
        let v = codec.visible_length_with_markup(b"^1Red^7Normal", usize::MAX);
        assert_eq!(v.chars, "RedNormal".len());
        assert!(v.valid);

        let v = codec.visible_length_with_markup(b"^xF00red", usize::MAX);
        assert_eq!(v.chars, 3);
        assert!(v.valid);
    }

    #[test]
    fn trailing_bare_tag_is_invalid_but_counted() {
        let codec = Utf8Codec::new(true);
        let v = codec.visible_length_with_markup(b"abc^", usize::MAX);
        assert_eq!(v.chars, 4);
        assert!(!v.valid);
    }

    #[test]
    fn literal_tag_counts_once() {
        let codec = Utf8Codec::new(true);
        let v = codec.visible_length_with_markup(b"a^^b", usize::MAX);
        assert_eq!(v.chars, 3);
        assert!(v.valid);
    }

    #[test]
    fn tag_without_code_renders_itself() {
        let codec = Utf8Codec::new(true);
        let v = codec.visible_length_with_markup(b"^qA", usize::MAX);
        assert_eq!(v.chars, 3);
        assert!(v.valid);
    }

    #[test]
    fn budget_inside_an_rgb_span_does_not_split_it() {
        let codec = Utf8Codec::new(true);
        // the budget cuts after "^xF0": the code is not recognized, so the
        // tag renders itself and the rest count as plain bytes
        let v = codec.visible_length_with_markup(b"^xF00red", 4);
        assert_eq!(v.chars, 4);
        assert!(v.valid);
        // one byte more and the whole span fits and disappears
        let v = codec.visible_length_with_markup(b"^xF00red", 5);
        assert_eq!(v.chars, 0);
        assert!(v.valid);
    }

    #[test]
    fn multibyte_characters_count_once() {
        let codec = Utf8Codec::new(true);
        let v = codec.visible_length_with_markup("^2€uro".as_bytes(), usize::MAX);
        assert_eq!(v.chars, 4);
        assert!(v.valid);
    }

    #[test]
    fn legacy_mode_counts_bytes() {
        let codec = Utf8Codec::new(false);
        let v = codec.visible_length_with_markup("^2€uro".as_bytes(), usize::MAX);
        // the Euro sign is three bytes in legacy mode
        assert_eq!(v.chars, 6);
        assert!(v.valid);
    }

    #[test]
    fn empty_and_terminated_inputs() {
        let codec = Utf8Codec::new(true);
        assert_eq!(
            codec.visible_length_with_markup(b"", usize::MAX),
            VisibleLength {
                chars: 0,
                valid: true
            }
        );
        let v = codec.visible_length_with_markup(b"ab\0^", usize::MAX);
        assert_eq!(v.chars, 2);
        assert!(v.valid);
    }
}
