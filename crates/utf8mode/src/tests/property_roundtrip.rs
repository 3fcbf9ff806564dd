use alloc::{string::String, vec::Vec};

use quickcheck_macros::quickcheck;

use crate::{Utf8Codec, analyze};

/// Every scalar value encodes to a sequence that decodes back to itself.
/// Exhaustive rather than sampled: the range is small enough and the
/// boundaries between length classes are exactly where bugs live.
#[test]
fn encode_decode_identity_over_the_scalar_range() {
    let codec = Utf8Codec::new(true);
    let mut out = [0u8; 8];
    for codepoint in 0x20..0x10_FFFF_u32 {
        if (0xD800..=0xDFFF).contains(&codepoint) {
            continue;
        }
        let n = codec.encode(codepoint, &mut out).unwrap();
        let seq = analyze(&out[..n], n).unwrap();
        assert_eq!(seq.start, 0, "codepoint {codepoint:#X}");
        assert_eq!(seq.len, n, "codepoint {codepoint:#X}");
        assert_eq!(seq.codepoint, codepoint, "codepoint {codepoint:#X}");
    }
}

// `char` includes U+10FFFF, which the analyzer rejects along with
// everything above it, so string generators drop it before comparing
// against `chars()`.
fn decodable(c: char) -> bool {
    c != '\u{10FFFF}'
}

#[quickcheck]
fn char_count_matches_chars_on_valid_strings(s: String) -> bool {
    let codec = Utf8Codec::new(true);
    let s: String = s.chars().filter(|&c| decodable(c)).collect();
    let expected = s.chars().take_while(|&c| c != '\0').count();
    codec.char_count(s.as_bytes()) == expected
}

#[quickcheck]
fn codepoints_round_trip_through_bytes(s: String) -> bool {
    let codec = Utf8Codec::new(true);
    let s: String = s.chars().filter(|&c| c != '\0' && decodable(c)).collect();

    let decoded = codec.codepoints(s.as_bytes(), usize::MAX);
    let expected: Vec<u32> = s.chars().map(u32::from).collect();
    if decoded != expected {
        return false;
    }

    let mut buf = alloc::vec![0u8; s.len() + 1];
    let written = codec.from_codepoints(&decoded, &mut buf);
    written == s.len() && &buf[..written] == s.as_bytes()
}

#[quickcheck]
fn measurement_is_consistent_on_arbitrary_bytes(data: Vec<u8>) -> bool {
    let codec = Utf8Codec::new(true);
    let total = codec.char_count(&data);
    // a whole-buffer byte budget must count every character, and the byte
    // tally for all of them can never pass the buffer
    codec.char_count_bounded(&data, data.len()) == total
        && codec.byte_count_for(&data, total.max(1) * 2) <= data.len()
}

#[quickcheck]
fn bounded_count_is_monotonic(data: Vec<u8>, budget: usize) -> bool {
    let codec = Utf8Codec::new(true);
    let budget = budget % (data.len() + 1);
    codec.char_count_bounded(&data, budget) <= codec.char_count(&data)
}
