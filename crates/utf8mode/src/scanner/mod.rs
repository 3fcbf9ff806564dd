//! Codepoint analyzer: find the next valid character in a byte buffer.
//!
//! This is the one place that understands UTF-8 byte shapes. Everything
//! above it (index translation, measurement) walks buffers by calling
//! [`analyze`] repeatedly.
//!
//! Validation rules
//! - Bytes that can never start a sequence (continuation bytes 0x80..=0xBF,
//!   the overlong-only leaders 0xC0/0xC1, and 0xF5..) are skipped one at a
//!   time.
//! - A leader whose continuation bytes do not all match `10xxxxxx` aborts
//!   the sequence; scanning resumes at the byte after the consumed prefix,
//!   not after the byte that failed the test.
//! - A well-formed sequence is still rejected when it encodes a codepoint
//!   below the minimum for its length (overlong) or at/above 0x10FFFF
//!   (RFC 3629); scanning resumes after the whole rejected sequence.
//! - Scanning never reads at or past `min(max_bytes, buf.len())`, and a 0
//!   byte terminates the scan. A sequence that would cross the limit is a
//!   failed decode, not a truncated success.

#[cfg(test)]
mod tests;

use core::cmp;

use crate::tables::{MIN_CODEPOINT, SEQ_LENGTHS};

/// One decoded character, as located by [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence {
    /// Bytes skipped before the character (invalid or rejected input).
    pub start: usize,
    /// Encoded length of the character, 1..=4.
    pub len: usize,
    /// The decoded codepoint.
    pub codepoint: u32,
}

impl Sequence {
    /// Offset of the first byte after the character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Find the next valid character in `buf`, examining at most `max_bytes`
/// bytes (clamped to the slice) and stopping early at a 0 byte.
///
/// Returns `None` when the limit or a terminator is reached before a valid
/// character; that is the canonical end-of-input signal and every walking
/// loop must check it.
#[must_use]
pub fn analyze(buf: &[u8], max_bytes: usize) -> Option<Sequence> {
    let limit = cmp::min(max_bytes, buf.len());
    let mut i = 0;

    'resync: loop {
        let mut len = 0usize;
        while i < limit && buf[i] != 0 {
            len = SEQ_LENGTHS[buf[i] as usize] as usize;
            if len != 0 {
                break;
            }
            i += 1;
        }
        if i >= limit || buf[i] == 0 {
            return None;
        }

        if len == 1 {
            return Some(Sequence {
                start: i,
                len: 1,
                codepoint: u32::from(buf[i]),
            });
        }

        let mut codepoint = u32::from(buf[i] & (0xFF >> len));
        for j in 1..len {
            // A continuation that would cross the limit counts as a failed
            // decode: resume after the consumed prefix, never read past it.
            if i + j >= limit || buf[i + j] & 0xC0 != 0x80 {
                i += j;
                continue 'resync;
            }
            codepoint = codepoint << 6 | u32::from(buf[i + j] & 0x3F);
        }

        if codepoint < MIN_CODEPOINT[len] || codepoint >= 0x10_FFFF {
            i += len;
            continue 'resync;
        }

        return Some(Sequence {
            start: i,
            len,
            codepoint,
        });
    }
}
