#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8mode::{Utf8Codec, analyze};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    utf8_enabled: bool,
    max_bytes: u16,
    char_budget: u8,
    data: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    let Input {
        utf8_enabled,
        max_bytes,
        char_budget,
        data,
    } = input;
    let max_bytes = usize::from(max_bytes);
    let char_budget = usize::from(char_budget);
    let limit = max_bytes.min(data.len());

    // the analyzer must stay inside the limit for any byte soup
    if let Some(seq) = analyze(data, max_bytes) {
        assert!(seq.start + seq.len <= limit);
        assert!((1..=4).contains(&seq.len));
        assert!(seq.codepoint != 0 && seq.codepoint < 0x10FFFF);
        // nothing outside the limit may influence the result
        assert_eq!(analyze(&data[..limit], usize::MAX), Some(seq));
    }

    let codec = Utf8Codec::new(utf8_enabled);

    let total = codec.char_count(data);
    let bounded = codec.char_count_bounded(data, max_bytes);
    assert!(bounded <= total);

    let bytes = codec.byte_count_for(data, char_budget);
    assert!(bytes <= data.len());

    let visible = codec.visible_length_with_markup(data, max_bytes);
    assert!(visible.chars <= limit);
    assert!(codec.char_count_bounded_visible(data, max_bytes) <= limit);
    assert!(codec.byte_count_for_visible(data, char_budget) <= data.len());

    for offset in (0..=limit).step_by(limit / 8 + 1) {
        let back = codec.byte_offset_to_char_index(data, offset);
        assert!(back.index <= offset);
        assert!(codec.previous_char_byte_offset(data, offset) <= offset);
    }

    if let Some(decoded) = codec.decode_char(data) {
        let mut out = [0u8; 8];
        // anything we can decode we can re-encode
        assert!(codec.encode(decoded.codepoint, &mut out).is_ok());
    }
});
