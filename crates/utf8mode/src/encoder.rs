//! Codepoint to byte-sequence encoding.

use core::ops::Deref;

use crate::{Utf8Codec, error::EncodeError, tables::LEGACY_REMAP_BASE};

/// Largest scratch an encoded character can need; one sequence plus the
/// terminator fits with room to spare.
const SCRATCH_LEN: usize = 16;

/// An encoded character in a small inline buffer, NUL terminator excluded
/// from its slice view.
#[derive(Debug, Clone, Copy)]
pub struct EncodedChar {
    buf: [u8; SCRATCH_LEN],
    len: usize,
}

impl Deref for EncodedChar {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl AsRef<[u8]> for EncodedChar {
    fn as_ref(&self) -> &[u8] {
        self
    }
}

fn check_capacity(out: &[u8], needed: usize) -> Result<(), EncodeError> {
    if out.len() < needed {
        return Err(EncodeError::BufferTooSmall {
            needed,
            capacity: out.len(),
        });
    }
    Ok(())
}

impl Utf8Codec {
    /// Encode one codepoint into `out`, NUL-terminating it, and return the
    /// number of bytes written excluding the terminator.
    ///
    /// Codepoint 0 always fails: it is the terminator itself and must never
    /// appear mid-string. With multi-byte mode disabled the legacy remap
    /// block folds back to its single-byte originals (0xE000 is subtracted
    /// from anything at or above it) and the result is truncated to its low
    /// 8 bits, a deliberate lossy path for legacy content. With the mode
    /// enabled the minimal-length RFC 3629 sequence is emitted and
    /// codepoints above 0x10FFFF fail.
    ///
    /// Capacity failures write nothing.
    pub fn encode(&self, codepoint: u32, out: &mut [u8]) -> Result<usize, EncodeError> {
        if codepoint == 0 {
            return Err(EncodeError::Nul);
        }

        let utf8 = self.utf8_enabled();
        let mut w = codepoint;
        if !utf8 && w >= LEGACY_REMAP_BASE {
            w -= LEGACY_REMAP_BASE;
        }

        if w < 0x80 || !utf8 {
            check_capacity(out, 2)?;
            out[0] = (w & 0xFF) as u8;
            out[1] = 0;
            Ok(1)
        } else if w < 0x800 {
            check_capacity(out, 3)?;
            out[0] = 0xC0 | (w >> 6) as u8;
            out[1] = 0x80 | (w & 0x3F) as u8;
            out[2] = 0;
            Ok(2)
        } else if w < 0x1_0000 {
            check_capacity(out, 4)?;
            out[0] = 0xE0 | (w >> 12) as u8;
            out[1] = 0x80 | (w >> 6 & 0x3F) as u8;
            out[2] = 0x80 | (w & 0x3F) as u8;
            out[3] = 0;
            Ok(3)
        } else if w <= 0x10_FFFF {
            check_capacity(out, 5)?;
            out[0] = 0xF0 | (w >> 18) as u8;
            out[1] = 0x80 | (w >> 12 & 0x3F) as u8;
            out[2] = 0x80 | (w >> 6 & 0x3F) as u8;
            out[3] = 0x80 | (w & 0x3F) as u8;
            out[4] = 0;
            Ok(4)
        } else {
            Err(EncodeError::OutOfRange(codepoint))
        }
    }

    /// Encode one codepoint into an inline scratch buffer. `None` on any
    /// encoding failure.
    #[must_use]
    pub fn encode_char(&self, codepoint: u32) -> Option<EncodedChar> {
        let mut buf = [0u8; SCRATCH_LEN];
        let len = self.encode(codepoint, &mut buf).ok()?;
        Some(EncodedChar { buf, len })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::scanner::analyze;

    #[rstest]
    #[case::ascii(0x41, &[0x41])]
    #[case::two_byte(0xE5, &[0xC3, 0xA5])]
    #[case::three_byte(0x20AC, &[0xE2, 0x82, 0xAC])]
    #[case::four_byte(0x1F600, &[0xF0, 0x9F, 0x98, 0x80])]
    #[case::last_codepoint(0x10FFFF, &[0xF4, 0x8F, 0xBF, 0xBF])]
    fn utf8_sequences(#[case] codepoint: u32, #[case] expected: &[u8]) {
        let codec = Utf8Codec::new(true);
        let mut out = [0xAAu8; 8];
        let n = codec.encode(codepoint, &mut out).unwrap();
        assert_eq!(&out[..n], expected);
        // always NUL terminated
        assert_eq!(out[n], 0);
    }

    #[test]
    fn nul_and_out_of_range_fail() {
        let codec = Utf8Codec::new(true);
        let mut out = [0u8; 8];
        assert_eq!(codec.encode(0, &mut out), Err(EncodeError::Nul));
        assert_eq!(
            codec.encode(0x110000, &mut out),
            Err(EncodeError::OutOfRange(0x110000))
        );
    }

    #[rstest]
    #[case::ascii(0x41, 2)]
    #[case::two_byte(0xE5, 3)]
    #[case::three_byte(0x20AC, 4)]
    #[case::four_byte(0x1F600, 5)]
    fn capacity_failures_write_nothing(#[case] codepoint: u32, #[case] needed: usize) {
        let codec = Utf8Codec::new(true);
        let mut out = [0xAAu8; 8];
        let err = codec.encode(codepoint, &mut out[..needed - 1]).unwrap_err();
        assert_eq!(
            err,
            EncodeError::BufferTooSmall {
                needed,
                capacity: needed - 1
            }
        );
        assert!(out.iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn legacy_mode_truncates_to_one_byte() {
        let codec = Utf8Codec::new(false);
        let mut out = [0xAAu8; 4];
        // remap block folds back to its source byte
        assert_eq!(codec.encode(0xE0FF, &mut out), Ok(1));
        assert_eq!(&out[..2], &[0xFF, 0]);
        // anything else is truncated to its low 8 bits
        assert_eq!(codec.encode(0x20AC, &mut out), Ok(1));
        assert_eq!(&out[..2], &[0xAC, 0]);
    }

    #[test]
    fn encode_char_matches_encode() {
        let codec = Utf8Codec::new(true);
        let encoded = codec.encode_char(0x20AC).unwrap();
        assert_eq!(&*encoded, "€".as_bytes());
        assert!(codec.encode_char(0).is_none());
    }

    #[test]
    fn encode_decode_round_trip() {
        let codec = Utf8Codec::new(true);
        // step through the scalar range; exhaustive coverage lives in the
        // property suite
        for codepoint in (0x20..0x10_FFFF_u32).step_by(0x61) {
            if (0xD800..=0xDFFF).contains(&codepoint) {
                continue;
            }
            let mut out = [0u8; 8];
            let n = codec.encode(codepoint, &mut out).unwrap();
            let seq = analyze(&out[..n], n).unwrap();
            assert_eq!((seq.start, seq.len, seq.codepoint), (0, n, codepoint));
        }
    }
}
