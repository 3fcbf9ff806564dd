//! A text-encoding runtime that works in either a legacy
//! single-byte-per-character mode or UTF-8 multi-byte mode, switchable at
//! runtime.
//!
//! The core is a hand-rolled, resynchronizing UTF-8 scanner ([`analyze`])
//! that never reads past a supplied byte limit, rejects overlong encodings
//! and out-of-range codepoints per RFC 3629, and recovers deterministically
//! from invalid bytes. On top of it sit index translation
//! (character-index ↔ byte-offset), byte/character measurement with
//! inline color-escape awareness, and an encoder with a legacy code-page
//! fallback. Every operation consults one atomic mode flag; with the flag
//! off (the default) all results are byte-identical to plain single-byte
//! processing, so legacy content keeps working unchanged.
//!
//! All operations are pure computations over caller-owned byte buffers:
//! no I/O, no retained references, and failure is always a value (an
//! `Option`, a truncated count or a flag), never a panic on untrusted
//! input.
//!
//! ```rust
//! use utf8mode::Utf8Codec;
//!
//! let codec = Utf8Codec::new(true);
//! let buf = "A€B".as_bytes();
//! assert_eq!(codec.char_count(buf), 3);
//! let pos = codec.char_index_to_byte_offset(buf, 1).unwrap();
//! assert_eq!((pos.offset, pos.len), (1, 3));
//!
//! // legacy mode degrades to one byte per character
//! codec.set_utf8_enabled(false);
//! assert_eq!(codec.char_count(buf), 5);
//! ```

#![no_std]
#![allow(missing_docs)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod casemap;
mod codec;
mod encoder;
mod error;
mod index;
mod markup;
mod measure;
mod scanner;
mod tables;

#[cfg(test)]
mod tests;

pub use casemap::{to_lower, to_upper};
pub use codec::{Decoded, Utf8Codec, get_mode, global, set_mode};
pub use encoder::EncodedChar;
pub use error::EncodeError;
pub use index::{CharIndex, CharPos};
pub use markup::{ColorSpan, VisibleLength};
pub use scanner::{Sequence, analyze};
pub use tables::{COLOR_RGB_TAG, COLOR_TAG};
