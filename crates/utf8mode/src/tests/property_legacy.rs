//! With multi-byte mode disabled, every operation must be byte-identical
//! to plain single-byte processing, for arbitrary (not just valid) bytes.

use alloc::vec::Vec;

use quickcheck_macros::quickcheck;

use crate::Utf8Codec;

fn terminated(data: &[u8]) -> &[u8] {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    &data[..end]
}

#[quickcheck]
fn char_count_equals_byte_length(data: Vec<u8>) -> bool {
    let codec = Utf8Codec::new(false);
    codec.char_count(&data) == terminated(&data).len()
}

#[quickcheck]
fn index_translation_is_identity(data: Vec<u8>) -> bool {
    let codec = Utf8Codec::new(false);
    (0..=data.len()).all(|i| {
        let back = codec.byte_offset_to_char_index(&data, i);
        back.index == i
            && back.sub_offset == 0
            && codec.previous_char_byte_offset(&data, i) == i.saturating_sub(1)
    })
}

#[quickcheck]
fn byte_offsets_are_the_index(data: Vec<u8>) -> bool {
    let codec = Utf8Codec::new(false);
    let len = terminated(&data).len();
    (0..=len).all(|i| {
        codec
            .char_index_to_byte_offset(&data, i)
            .is_some_and(|pos| pos.offset == i && pos.len == 1)
    })
}

#[quickcheck]
fn bounded_counts_clamp(data: Vec<u8>, budget: usize) -> bool {
    let codec = Utf8Codec::new(false);
    let len = terminated(&data).len();
    codec.char_count_bounded(&data, budget) == len.min(budget)
        && codec.byte_count_for(&data, budget) == len.min(budget)
}

#[quickcheck]
fn legacy_decode_inverts_legacy_encode(byte: u8) -> bool {
    if byte == 0 {
        return true;
    }
    let codec = Utf8Codec::new(false);
    let decoded = codec.decode_char(&[byte]).unwrap();
    let mut out = [0u8; 4];
    codec.encode(decoded.codepoint, &mut out) == Ok(1) && out[0] == byte
}
