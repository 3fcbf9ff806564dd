use alloc::{vec, vec::Vec};

use quickcheck::QuickCheck;

use super::{Sequence, analyze};

#[test]
fn empty_buffer_has_no_character() {
    assert_eq!(analyze(b"", usize::MAX), None);
    assert_eq!(analyze(b"abc", 0), None);
}

#[test]
fn ascii_is_length_one() {
    assert_eq!(
        analyze(b"A", usize::MAX),
        Some(Sequence {
            start: 0,
            len: 1,
            codepoint: 0x41
        })
    );
}

#[test]
fn nul_terminates_the_scan() {
    assert_eq!(analyze(b"\0A", usize::MAX), None);
    // invalid prefix, then a terminator before anything valid
    assert_eq!(analyze(b"\x80\x80\0A", usize::MAX), None);
}

#[test]
fn skips_invalid_prefix_bytes() {
    // two continuation bytes, then 'A'
    let seq = analyze(b"\x80\xBFA", usize::MAX).unwrap();
    assert_eq!(
        seq,
        Sequence {
            start: 2,
            len: 1,
            codepoint: 0x41
        }
    );
}

#[test]
fn decodes_each_sequence_length() {
    // U+00E5, U+20AC, U+1F600
    assert_eq!(
        analyze("å".as_bytes(), usize::MAX).unwrap().codepoint,
        0xE5
    );
    let euro = analyze("€".as_bytes(), usize::MAX).unwrap();
    assert_eq!((euro.len, euro.codepoint), (3, 0x20AC));
    let emoji = analyze("😀".as_bytes(), usize::MAX).unwrap();
    assert_eq!((emoji.len, emoji.codepoint), (4, 0x1F600));
}

#[test]
fn overlong_nul_is_rejected_and_resynced() {
    // C0 80 is the classic overlong encoding of NUL; C0 is not even a valid
    // leader, so both bytes are skipped singly.
    let seq = analyze(b"\xC0\x80A", usize::MAX).unwrap();
    assert_eq!(seq.start, 2);
    assert_eq!(seq.codepoint, 0x41);
}

#[test]
fn overlong_three_byte_form_is_rejected() {
    // E0 80 AF would decode to U+002F; the whole 3-byte sequence is skipped.
    let seq = analyze(b"\xE0\x80\xAFA", usize::MAX).unwrap();
    assert_eq!(
        seq,
        Sequence {
            start: 3,
            len: 1,
            codepoint: 0x41
        }
    );
}

#[test]
fn codepoints_past_unicode_range_are_rejected() {
    // F4 90 80 80 decodes to 0x110000
    assert_eq!(analyze(b"\xF4\x90\x80\x80", usize::MAX), None);
    // U+10FFFF itself is rejected per the >= comparison
    assert_eq!(analyze(b"\xF4\x8F\xBF\xBF", usize::MAX), None);
    // U+10FFFE is the last accepted value
    let seq = analyze(b"\xF4\x8F\xBF\xBE", usize::MAX).unwrap();
    assert_eq!(seq.codepoint, 0x10_FFFE);
}

#[test]
fn failed_continuation_resumes_after_consumed_prefix() {
    // E2 82 then 'A': the leader consumed "E2 82" before 'A' failed the
    // continuation test, so scanning resumes at 'A' itself.
    let seq = analyze(b"\xE2\x82A", usize::MAX).unwrap();
    assert_eq!(
        seq,
        Sequence {
            start: 2,
            len: 1,
            codepoint: 0x41
        }
    );
}

#[test]
fn sequence_crossing_the_limit_is_not_truncated() {
    let euro = "€".as_bytes();
    assert_eq!(analyze(euro, 3).unwrap().len, 3);
    // with only 2 bytes allowed the sequence must fail, not shorten
    assert_eq!(analyze(euro, 2), None);
    assert_eq!(analyze(euro, 1), None);
}

#[test]
fn limit_is_respected_with_valid_data_behind_it() {
    // 'A' sits past the limit and must not be found
    assert_eq!(analyze(b"\x80\x80A", 2), None);
}

#[test]
fn surrogate_range_decodes() {
    // ED A0 80 is U+D800. The analyzer is codepoint-level and accepts it;
    // rejecting surrogates is left to callers that need scalar values.
    let seq = analyze(b"\xED\xA0\x80", usize::MAX).unwrap();
    assert_eq!(seq.codepoint, 0xD800);
}

#[test]
fn agrees_with_bstr_on_valid_input() {
    let samples = ["", "hello", "å€😀", "mixed åscii €uro", "\u{10FFFE}"];
    for s in samples {
        let mut bytes = s.as_bytes();
        loop {
            let ours = analyze(bytes, usize::MAX);
            let (ch, len) = bstr::decode_utf8(bytes);
            match (ours, ch) {
                (None, None) => break,
                (Some(seq), Some(ch)) => {
                    assert_eq!(seq.start, 0);
                    assert_eq!(seq.len, len);
                    assert_eq!(seq.codepoint, u32::from(ch));
                    bytes = &bytes[len..];
                }
                (ours, ch) => panic!("disagreement on {s:?}: {ours:?} vs {ch:?}"),
            }
        }
    }
}

#[test]
fn never_reports_bytes_past_the_limit() {
    fn prop(data: Vec<u8>, max_bytes: usize) -> bool {
        match analyze(&data, max_bytes) {
            Some(seq) => seq.end() <= max_bytes.min(data.len()),
            None => true,
        }
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u8>, usize) -> bool);
}

#[test]
fn truncating_at_the_reported_end_is_stable() {
    // Re-analyzing the exact prefix that contained the character must find
    // the same character.
    fn prop(data: Vec<u8>) -> bool {
        match analyze(&data, data.len()) {
            Some(seq) => analyze(&data[..seq.end()], seq.end()) == Some(seq),
            None => true,
        }
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[test]
fn found_codepoints_reencode_to_the_source_bytes() {
    // Whatever the analyzer accepts must be the minimal encoding of the
    // reported codepoint.
    fn prop(data: Vec<u8>) -> bool {
        let mut offset = 0;
        while let Some(seq) = analyze(&data[offset..], usize::MAX) {
            let encoded: Vec<u8> = match char::from_u32(seq.codepoint) {
                Some(ch) => {
                    let mut b = [0u8; 4];
                    ch.encode_utf8(&mut b).as_bytes().to_vec()
                }
                // surrogates have no char; check length class only
                None => vec![0; seq.len],
            };
            if encoded.len() != seq.len {
                return false;
            }
            offset += seq.end();
        }
        true
    }
    QuickCheck::new().quickcheck(prop as fn(Vec<u8>) -> bool);
}
