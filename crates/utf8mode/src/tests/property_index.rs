//! Valid-string generators also drop U+10FFFF: `char` has it, the
//! analyzer rejects it together with everything above.

use alloc::string::String;

use quickcheck_macros::quickcheck;

use crate::Utf8Codec;

/// Character-boundary offsets translate to an index and back without
/// drift, for any valid UTF-8 string.
#[quickcheck]
fn index_offset_translation_round_trips(s: String) -> bool {
    let codec = Utf8Codec::new(true);
    let s: String = s.chars().filter(|&c| c != '\0' && c != '\u{10FFFF}').collect();
    let buf = s.as_bytes();

    for (index, (offset, ch)) in s.char_indices().enumerate() {
        let Some(pos) = codec.char_index_to_byte_offset(buf, index) else {
            return false;
        };
        if pos.offset != offset || pos.len != ch.len_utf8() {
            return false;
        }
        let back = codec.byte_offset_to_char_index(buf, offset);
        if back.index != index || back.sub_offset != 0 {
            return false;
        }
    }
    true
}

/// Stepping back from any character boundary lands on the previous
/// character's start, matching the translate-decrement-translate chain.
#[quickcheck]
fn previous_char_agrees_with_index_translation(s: String) -> bool {
    let codec = Utf8Codec::new(true);
    let s: String = s.chars().filter(|&c| c != '\0' && c != '\u{10FFFF}').collect();
    let buf = s.as_bytes();

    let mut prev_start = 0;
    for (offset, _) in s.char_indices().skip(1) {
        if codec.previous_char_byte_offset(buf, offset) != prev_start {
            return false;
        }
        prev_start = offset;
    }
    // one past the end steps back to the last character
    s.is_empty() || codec.previous_char_byte_offset(buf, buf.len()) == prev_start
}

/// Offsets strictly inside a character snap down: the reported
/// `sub_offset` is the distance from that character's start.
#[quickcheck]
fn mid_character_offsets_report_sub_offsets(s: String) -> bool {
    let codec = Utf8Codec::new(true);
    let s: String = s.chars().filter(|&c| c != '\0' && c != '\u{10FFFF}').collect();
    let buf = s.as_bytes();

    for (offset, ch) in s.char_indices() {
        for inside in 1..ch.len_utf8() {
            let back = codec.byte_offset_to_char_index(buf, offset + inside);
            if back.sub_offset != inside {
                return false;
            }
        }
    }
    true
}
