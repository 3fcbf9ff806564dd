use thiserror::Error;

/// Failure modes of [`Utf8Codec::encode`](crate::Utf8Codec::encode).
///
/// Encoding is the only operation in this crate with a hard failure; every
/// scanning and measuring operation reports truncation through its return
/// value instead. On error nothing has been written to the output buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Codepoint 0 is reserved as the string terminator and is never
    /// emitted mid-string.
    #[error("codepoint 0 is the string terminator and cannot be encoded")]
    Nul,
    /// The codepoint is past the Unicode range (RFC 3629).
    #[error("codepoint {0:#X} is above 0x10FFFF")]
    OutOfRange(u32),
    /// The output buffer cannot hold the sequence plus its NUL terminator.
    #[error("output buffer too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall {
        /// Bytes required, terminator included.
        needed: usize,
        /// Bytes available in the caller's buffer.
        capacity: usize,
    },
}
