//! Character-index / byte-offset translation.
//!
//! Encoding is variable-width, so there is no random access: every
//! translation is a forward walk over repeated [`analyze`] calls. With
//! multi-byte mode disabled all of these collapse to identity arithmetic.

use crate::{Utf8Codec, codec::terminated_len, scanner::analyze};

/// Byte position of one character: where it starts and how many bytes it
/// occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharPos {
    /// Byte offset of the character's first byte.
    pub offset: usize,
    /// Encoded length in bytes.
    pub len: usize,
}

/// Character position of a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharIndex {
    /// Count of characters fully or partially consumed before the offset.
    pub index: usize,
    /// How far into the current character the offset falls; 0 on a
    /// character boundary. Mid-character offsets are invalid by policy but
    /// callers (cursor placement) must get a usable answer, not a crash.
    pub sub_offset: usize,
}

impl Utf8Codec {
    /// Byte offset and length of the character at `index`, skipping
    /// invalid bytes along the way. `None` when the buffer is exhausted
    /// first.
    #[must_use]
    pub fn char_index_to_byte_offset(&self, buf: &[u8], index: usize) -> Option<CharPos> {
        if !self.utf8_enabled() {
            if terminated_len(buf) < index {
                return None;
            }
            return Some(CharPos {
                offset: index,
                len: 1,
            });
        }

        let mut offset = 0;
        let mut remaining = index;
        loop {
            let seq = analyze(&buf[offset..], usize::MAX)?;
            offset += seq.start;
            if remaining == 0 {
                return Some(CharPos {
                    offset,
                    len: seq.len,
                });
            }
            remaining -= 1;
            offset += seq.len;
        }
    }

    /// Character index of byte `offset`, counting every character fully or
    /// partially consumed before it.
    ///
    /// An offset strictly inside a multi-byte character reports the index
    /// past that character together with the distance from the character's
    /// start in `sub_offset`, mirroring the cursor-snapping behavior of the
    /// legacy implementation. Invalid bytes are walked one at a time
    /// without moving the last character boundary, so an offset inside a
    /// run of skipped bytes reports `sub_offset: 0`.
    #[must_use]
    pub fn byte_offset_to_char_index(&self, buf: &[u8], offset: usize) -> CharIndex {
        if !self.utf8_enabled() {
            return CharIndex {
                index: offset,
                sub_offset: 0,
            };
        }

        let mut index = 0;
        let mut pos = 0;
        let mut last_start = 0;
        while pos < offset && pos < buf.len() && buf[pos] != 0 {
            let b = buf[pos];
            if b < 0x80 {
                last_start = pos;
                index += 1;
                pos += 1;
                continue;
            }
            // bytes that can never start a sequence step one at a time
            if b < 0xC2 {
                pos += 1;
                continue;
            }
            let Some(seq) = analyze(&buf[pos..], usize::MAX) else {
                break;
            };
            // next character starts past the target: the target sits in
            // bytes the analyzer consumed and rejected
            if pos + seq.start > offset {
                return CharIndex {
                    index,
                    sub_offset: offset - last_start,
                };
            }
            index += 1;
            last_start = pos + seq.start;
            pos += seq.end();
            if pos > offset {
                return CharIndex {
                    index,
                    sub_offset: offset - last_start,
                };
            }
        }
        CharIndex {
            index,
            sub_offset: 0,
        }
    }

    /// Byte offset of the character boundary before `offset`, found with a
    /// single forward scan that remembers the last boundary seen. Invalid
    /// bytes are walked without moving the remembered boundary.
    #[must_use]
    pub fn previous_char_byte_offset(&self, buf: &[u8], offset: usize) -> usize {
        if !self.utf8_enabled() {
            return offset.saturating_sub(1);
        }

        let mut last_start = 0;
        let mut pos = 0;
        while pos < offset && pos < buf.len() && buf[pos] != 0 {
            let b = buf[pos];
            if b < 0x80 {
                last_start = pos;
                pos += 1;
                continue;
            }
            if b < 0xC2 {
                pos += 1;
                continue;
            }
            let Some(seq) = analyze(&buf[pos..], usize::MAX) else {
                return last_start;
            };
            if pos + seq.start > offset {
                return last_start;
            }
            if pos + seq.end() >= offset {
                return pos + seq.start;
            }
            last_start = pos;
            pos += seq.end();
        }
        last_start
    }
}
