//! The codec handle and its runtime mode flag.

use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::{
    scanner::analyze,
    tables::LEGACY_TO_UNICODE,
};

/// A text codec with a runtime-switchable multi-byte mode.
///
/// With the mode disabled (the default, for compatibility with legacy
/// single-byte content) every operation degrades to exact
/// one-byte-per-character semantics: counts equal byte lengths, index
/// translation is identity arithmetic, and decoding maps single bytes
/// through the legacy code page.
///
/// The flag is a single atomic read by every operation. Mutation is
/// expected only on an administrative configuration path, so readers treat
/// it as eventually consistent: a read concurrent with a change may see
/// either value, never a torn one.
#[derive(Debug)]
pub struct Utf8Codec {
    utf8: AtomicBool,
}

/// One decoded character and the bytes it consumed from the buffer,
/// including any invalid prefix that was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded codepoint. In legacy mode, bytes outside printable
    /// ASCII land in the 0xE000..=0xE0FF remap block.
    pub codepoint: u32,
    /// Bytes consumed from the front of the buffer.
    pub consumed: usize,
}

impl Utf8Codec {
    /// Create a codec with the given initial mode.
    #[must_use]
    pub const fn new(utf8_enabled: bool) -> Self {
        Self {
            utf8: AtomicBool::new(utf8_enabled),
        }
    }

    /// Enable or disable multi-byte mode. Single-writer discipline: call
    /// this from the configuration path only.
    pub fn set_utf8_enabled(&self, enabled: bool) {
        self.utf8.store(enabled, Ordering::Relaxed);
    }

    /// Whether multi-byte mode is enabled.
    #[must_use]
    pub fn utf8_enabled(&self) -> bool {
        self.utf8.load(Ordering::Relaxed)
    }

    /// Decode the first character of `buf`.
    ///
    /// Multi-byte mode runs the analyzer, so invalid bytes before the
    /// character are skipped and counted into `consumed`. Legacy mode maps
    /// exactly one byte through the code-page table. `None` at a terminator
    /// or end of input.
    #[must_use]
    pub fn decode_char(&self, buf: &[u8]) -> Option<Decoded> {
        self.decode_char_bounded(buf, usize::MAX)
    }

    /// [`decode_char`](Self::decode_char) restricted to the first
    /// `max_bytes` bytes.
    #[must_use]
    pub fn decode_char_bounded(&self, buf: &[u8], max_bytes: usize) -> Option<Decoded> {
        if !self.utf8_enabled() {
            if max_bytes == 0 || buf.is_empty() || buf[0] == 0 {
                return None;
            }
            let b = buf[0];
            return Some(Decoded {
                codepoint: LEGACY_TO_UNICODE[b as usize],
                consumed: 1,
            });
        }
        analyze(buf, max_bytes).map(|seq| Decoded {
            codepoint: seq.codepoint,
            consumed: seq.end(),
        })
    }

    /// Decode up to `max_chars` characters into owned codepoints.
    #[must_use]
    pub fn codepoints(&self, buf: &[u8], max_chars: usize) -> Vec<u32> {
        let mut out = Vec::new();
        let mut offset = 0;
        while out.len() < max_chars {
            let Some(decoded) = self.decode_char(&buf[offset..]) else {
                break;
            };
            out.push(decoded.codepoint);
            offset += decoded.consumed;
        }
        out
    }

    /// Encode a codepoint sequence into `out`, stopping at a 0 codepoint,
    /// at the end of the slice, or when `out` cannot hold the next
    /// character. The output is always NUL-terminated; returns bytes
    /// written excluding the terminator. A buffer shorter than 2 bytes
    /// holds nothing and yields 0.
    pub fn from_codepoints(&self, codepoints: &[u32], out: &mut [u8]) -> usize {
        if out.len() < 2 {
            return 0;
        }
        let mut written = 0;
        for &codepoint in codepoints {
            if codepoint == 0 {
                break;
            }
            match self.encode(codepoint, &mut out[written..]) {
                Ok(n) => written += n,
                Err(_) => break,
            }
        }
        out[written] = 0;
        written
    }
}

impl Default for Utf8Codec {
    fn default() -> Self {
        Self::new(false)
    }
}

static GLOBAL: Utf8Codec = Utf8Codec::new(false);

/// The process-wide codec consulted by [`set_mode`]/[`get_mode`].
#[must_use]
pub fn global() -> &'static Utf8Codec {
    &GLOBAL
}

/// Switch the process-wide codec's multi-byte mode. Administrative path
/// only; see [`Utf8Codec::set_utf8_enabled`].
pub fn set_mode(enabled: bool) {
    GLOBAL.set_utf8_enabled(enabled);
}

/// Multi-byte mode of the process-wide codec.
#[must_use]
pub fn get_mode() -> bool {
    GLOBAL.utf8_enabled()
}

/// Length of `buf` up to its first 0 byte, the legacy string length.
pub(crate) fn terminated_len(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}
