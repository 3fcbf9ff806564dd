//! Character and byte counting, bounded by byte or character budgets, with
//! markup-aware variants, plus the width-padding helper built on them.

use alloc::vec::Vec;

use crate::{
    Utf8Codec,
    codec::terminated_len,
    markup::ColorSpan,
    scanner::analyze,
    tables::COLOR_TAG,
};

impl Utf8Codec {
    /// Number of characters in `buf`, up to its terminator or end. Invalid
    /// bytes are skipped without being counted.
    #[must_use]
    pub fn char_count(&self, buf: &[u8]) -> usize {
        if !self.utf8_enabled() {
            return terminated_len(buf);
        }
        let mut count = 0;
        let mut pos = 0;
        while let Some(seq) = analyze(&buf[pos..], usize::MAX) {
            count += 1;
            pos += seq.end();
        }
        count
    }

    /// Number of characters within the first `max_bytes` bytes. A character
    /// whose encoding crosses the budget is not counted; invalid bytes
    /// consume budget without counting.
    #[must_use]
    pub fn char_count_bounded(&self, buf: &[u8], max_bytes: usize) -> usize {
        let limit = max_bytes.min(buf.len());
        if !self.utf8_enabled() {
            return terminated_len(buf).min(limit);
        }
        let mut count = 0;
        let mut pos = 0;
        while let Some(seq) = analyze(&buf[pos..limit], usize::MAX) {
            count += 1;
            pos += seq.end();
        }
        count
    }

    /// Bytes used by the first `char_budget` characters. Skipped invalid
    /// bytes are included in the byte tally without consuming character
    /// budget, so the result is a safe truncation offset.
    #[must_use]
    pub fn byte_count_for(&self, buf: &[u8], char_budget: usize) -> usize {
        if !self.utf8_enabled() {
            return terminated_len(buf).min(char_budget);
        }
        let mut bytes = 0;
        let mut remaining = char_budget;
        while bytes < buf.len() && buf[bytes] != 0 && remaining > 0 {
            let b = buf[bytes];
            if b < 0x80 {
                bytes += 1;
                remaining -= 1;
                continue;
            }
            // stray continuation bytes and overlong leaders are carried
            // along for free
            if b < 0xC2 {
                bytes += 1;
                continue;
            }
            match analyze(&buf[bytes..], usize::MAX) {
                Some(seq) => {
                    bytes += seq.end();
                    remaining -= 1;
                }
                None => break,
            }
        }
        bytes
    }

    /// [`char_count_bounded`](Self::char_count_bounded) with color-escape
    /// spans consumed at zero width. An escaped literal tag counts one
    /// character. Spans are atomic: one that does not fit inside the budget
    /// is measured as plain bytes instead.
    #[must_use]
    pub fn char_count_bounded_visible(&self, buf: &[u8], max_bytes: usize) -> usize {
        let limit = max_bytes.min(buf.len());
        let utf8 = self.utf8_enabled();
        let mut count = 0;
        let mut pos = 0;
        while pos < limit && buf[pos] != 0 {
            if buf[pos] == COLOR_TAG {
                match ColorSpan::classify(&buf[pos..limit]) {
                    ColorSpan::Digit => {
                        pos += 2;
                        continue;
                    }
                    ColorSpan::Rgb => {
                        pos += 5;
                        continue;
                    }
                    // skip the markup byte; the second tag is a plain
                    // character handled below
                    ColorSpan::LiteralTag => pos += 1,
                    ColorSpan::Unterminated | ColorSpan::NotASpan => {}
                }
            }
            if !utf8 || buf[pos] < 0x80 {
                count += 1;
                pos += 1;
                continue;
            }
            if buf[pos] < 0xC2 {
                pos += 1;
                continue;
            }
            match analyze(&buf[pos..limit], usize::MAX) {
                Some(seq) => {
                    count += 1;
                    pos += seq.end();
                }
                None => break,
            }
        }
        count
    }

    /// [`byte_count_for`](Self::byte_count_for) with color-escape spans
    /// consumed into the byte tally at zero character cost.
    #[must_use]
    pub fn byte_count_for_visible(&self, buf: &[u8], char_budget: usize) -> usize {
        let utf8 = self.utf8_enabled();
        let mut bytes = 0;
        let mut remaining = char_budget;
        while bytes < buf.len() && buf[bytes] != 0 && remaining > 0 {
            if buf[bytes] == COLOR_TAG {
                match ColorSpan::classify(&buf[bytes..]) {
                    ColorSpan::Digit => {
                        bytes += 2;
                        continue;
                    }
                    ColorSpan::Rgb => {
                        bytes += 5;
                        continue;
                    }
                    ColorSpan::LiteralTag => bytes += 1,
                    ColorSpan::Unterminated | ColorSpan::NotASpan => {}
                }
            }
            if !utf8 || buf[bytes] < 0x80 {
                bytes += 1;
                remaining -= 1;
                continue;
            }
            if buf[bytes] < 0xC2 {
                bytes += 1;
                continue;
            }
            match analyze(&buf[bytes..], usize::MAX) {
                Some(seq) => {
                    bytes += seq.end();
                    remaining -= 1;
                }
                None => break,
            }
        }
        bytes
    }

    /// Clamp `buf` to `max_width` characters and pad it with spaces to
    /// `min_width` characters, right-aligned unless `left_align`.
    #[must_use]
    pub fn pad(&self, buf: &[u8], left_align: bool, min_width: usize, max_width: usize) -> Vec<u8> {
        let buf = &buf[..terminated_len(buf)];
        let prefix = self.byte_count_for(buf, max_width);
        let width = self.char_count_bounded(buf, prefix);
        pad_bytes(&buf[..prefix], width, left_align, min_width)
    }

    /// [`pad`](Self::pad) measuring visible width: color-escape spans are
    /// kept in the output but cost nothing against either width.
    #[must_use]
    pub fn pad_visible(
        &self,
        buf: &[u8],
        left_align: bool,
        min_width: usize,
        max_width: usize,
    ) -> Vec<u8> {
        let buf = &buf[..terminated_len(buf)];
        let prefix = self.byte_count_for_visible(buf, max_width);
        let width = self.char_count_bounded_visible(buf, prefix);
        pad_bytes(&buf[..prefix], width, left_align, min_width)
    }
}

fn pad_bytes(prefix: &[u8], width: usize, left_align: bool, min_width: usize) -> Vec<u8> {
    let pad = min_width.saturating_sub(width);
    let mut out = Vec::with_capacity(prefix.len() + pad);
    if !left_align {
        out.resize(pad, b' ');
    }
    out.extend_from_slice(prefix);
    if left_align {
        out.resize(out.len() + pad, b' ');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[u8] = b"A\xE2\x82\xACB"; // A, Euro sign, B

    #[test]
    fn char_count_basics() {
        let codec = Utf8Codec::new(true);
        assert_eq!(codec.char_count(b""), 0);
        assert_eq!(codec.char_count(SAMPLE), 3);
        assert_eq!(codec.char_count(b"plain"), 5);
        // terminator stops the count
        assert_eq!(codec.char_count(b"ab\0cd"), 2);
        // invalid bytes are not characters
        assert_eq!(codec.char_count(b"a\x80\x80b"), 2);
    }

    #[test]
    fn legacy_char_count_is_byte_length() {
        let codec = Utf8Codec::new(false);
        assert_eq!(codec.char_count(SAMPLE), 5);
        assert_eq!(codec.char_count(b"a\x80\x80b"), 4);
        assert_eq!(codec.char_count_bounded(SAMPLE, 2), 2);
        assert_eq!(codec.char_count_bounded(b"ab\0cd", 4), 2);
    }

    #[test]
    fn bounded_count_never_splits_a_character() {
        let codec = Utf8Codec::new(true);
        assert_eq!(codec.char_count_bounded(SAMPLE, 5), 3);
        assert_eq!(codec.char_count_bounded(SAMPLE, 4), 2);
        // budget ends one byte into the Euro sign
        assert_eq!(codec.char_count_bounded(SAMPLE, 2), 1);
        assert_eq!(codec.char_count_bounded(SAMPLE, 1), 1);
        assert_eq!(codec.char_count_bounded(SAMPLE, 0), 0);
    }

    #[test]
    fn byte_count_for_characters() {
        let codec = Utf8Codec::new(true);
        assert_eq!(codec.byte_count_for(SAMPLE, 0), 0);
        assert_eq!(codec.byte_count_for(SAMPLE, 1), 1);
        assert_eq!(codec.byte_count_for(SAMPLE, 2), 4);
        assert_eq!(codec.byte_count_for(SAMPLE, 3), 5);
        assert_eq!(codec.byte_count_for(SAMPLE, 9), 5);
    }

    #[test]
    fn byte_count_carries_invalid_bytes_for_free() {
        let codec = Utf8Codec::new(true);
        // the two continuation bytes ride along with the character budget
        assert_eq!(codec.byte_count_for(b"a\x80\x80b", 2), 4);
        // trailing stray continuation bytes are still part of the tally
        assert_eq!(codec.byte_count_for(b"ab\x80\x80", 5), 4);
    }

    #[test]
    fn legacy_byte_count_clamps() {
        let codec = Utf8Codec::new(false);
        assert_eq!(codec.byte_count_for(SAMPLE, 2), 2);
        assert_eq!(codec.byte_count_for(SAMPLE, 9), 5);
        assert_eq!(codec.byte_count_for(b"ab\0cd", 9), 2);
    }

    #[test]
    fn visible_counts_skip_color_codes() {
        let codec = Utf8Codec::new(true);
        let buf = b"^1Red^7Normal";
        assert_eq!(codec.char_count_bounded_visible(buf, usize::MAX), 9);
        // the first three visible characters span the digit code too
        assert_eq!(codec.byte_count_for_visible(buf, 3), 5);
        // the trailing code is only consumed once a visible character
        // behind it is still owed
        assert_eq!(codec.byte_count_for_visible(buf, 4), 8);
    }

    #[test]
    fn visible_counts_handle_literal_tags() {
        let codec = Utf8Codec::new(true);
        assert_eq!(codec.char_count_bounded_visible(b"a^^b", usize::MAX), 3);
        assert_eq!(codec.byte_count_for_visible(b"a^^b", 2), 3);
    }

    #[test]
    fn visible_count_respects_byte_budget() {
        let codec = Utf8Codec::new(true);
        let buf = b"^1Red";
        assert_eq!(codec.char_count_bounded_visible(buf, 3), 1);
        // a digit code cut by the budget is measured as plain bytes
        assert_eq!(codec.char_count_bounded_visible(buf, 1), 1);
    }

    #[test]
    fn visible_counts_in_legacy_mode() {
        let codec = Utf8Codec::new(false);
        let buf = "^1€".as_bytes();
        assert_eq!(codec.char_count_bounded_visible(buf, usize::MAX), 3);
        assert_eq!(codec.byte_count_for_visible(buf, 3), 5);
    }

    #[test]
    fn pad_right_and_left_aligns() {
        let codec = Utf8Codec::new(true);
        assert_eq!(codec.pad(b"ab", false, 4, 10), b"  ab".to_vec());
        assert_eq!(codec.pad(b"ab", true, 4, 10), b"ab  ".to_vec());
        // multi-byte characters pad by character width, not byte width
        assert_eq!(codec.pad("€".as_bytes(), false, 2, 10), b" \xE2\x82\xAC".to_vec());
    }

    #[test]
    fn pad_clamps_to_max_width() {
        let codec = Utf8Codec::new(true);
        assert_eq!(codec.pad(SAMPLE, false, 0, 2), b"A\xE2\x82\xAC".to_vec());
        let codec = Utf8Codec::new(false);
        assert_eq!(codec.pad(SAMPLE, false, 0, 2), b"A\xE2".to_vec());
    }

    #[test]
    fn pad_visible_keeps_markup_at_zero_width() {
        let codec = Utf8Codec::new(true);
        assert_eq!(
            codec.pad_visible(b"^1ab", false, 4, 10),
            b"  ^1ab".to_vec()
        );
        assert_eq!(codec.pad_visible(b"^1abc", true, 0, 2), b"^1ab".to_vec());
    }
}
