//! Static classification and remap tables.

/// Sequence length keyed by leading byte. 0 marks bytes that can never
/// start a valid sequence: continuation bytes 0x80-0xBF, the overlong-only
/// leaders 0xC0/0xC1, and 0xF5 upward (codepoints past 0x10FFFF or 5/6-byte
/// forms).
pub(crate) static SEQ_LENGTHS: [u8; 256] = {
    let mut t = [0u8; 256];
    let mut b = 0usize;
    while b < 256 {
        t[b] = match b {
            0x00..=0x7F => 1,
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 0,
        };
        b += 1;
    }
    t
};

/// Minimum codepoint for each sequence length; anything below it is an
/// overlong encoding. Index 0 is unused (no zero-length sequences) and kept
/// at 1 so a stray lookup can never admit a NUL.
pub(crate) static MIN_CODEPOINT: [u32; 5] = [1, 1, 0x80, 0x800, 0x1_0000];

/// First codepoint past the legacy remap block.
pub(crate) const LEGACY_REMAP_BASE: u32 = 0xE000;

/// Legacy code-page byte to codepoint remap. The printable ASCII range maps
/// to itself; the engine glyph bytes land in the 0xE000..=0xE0FF private use
/// block so they survive a round trip through codepoint space.
#[rustfmt::skip]
pub(crate) static LEGACY_TO_UNICODE: [u32; 256] = [
    0xE000, 0xE001, 0xE002, 0xE003, 0xE004, 0xE005, 0xE006, 0xE007,
    0xE008, 0xE009, 0xE00A, 0xE00B, 0xE00C, 0xE00D, 0xE00E, 0xE00F,
    0xE010, 0xE011, 0xE012, 0xE013, 0xE014, 0xE015, 0xE016, 0xE017,
    0xE018, 0xE019, 0xE01A, 0xE01B, 0xE01C, 0xE01D, 0xE01E, 0xE01F,
    0x0020, 0x0021, 0x0022, 0x0023, 0x0024, 0x0025, 0x0026, 0x0027,
    0x0028, 0x0029, 0x002A, 0x002B, 0x002C, 0x002D, 0x002E, 0x002F,
    0x0030, 0x0031, 0x0032, 0x0033, 0x0034, 0x0035, 0x0036, 0x0037,
    0x0038, 0x0039, 0x003A, 0x003B, 0x003C, 0x003D, 0x003E, 0x003F,
    0x0040, 0x0041, 0x0042, 0x0043, 0x0044, 0x0045, 0x0046, 0x0047,
    0x0048, 0x0049, 0x004A, 0x004B, 0x004C, 0x004D, 0x004E, 0x004F,
    0x0050, 0x0051, 0x0052, 0x0053, 0x0054, 0x0055, 0x0056, 0x0057,
    0x0058, 0x0059, 0x005A, 0x005B, 0x005C, 0x005D, 0x005E, 0x005F,
    0x0060, 0x0061, 0x0062, 0x0063, 0x0064, 0x0065, 0x0066, 0x0067,
    0x0068, 0x0069, 0x006A, 0x006B, 0x006C, 0x006D, 0x006E, 0x006F,
    0x0070, 0x0071, 0x0072, 0x0073, 0x0074, 0x0075, 0x0076, 0x0077,
    0x0078, 0x0079, 0x007A, 0x007B, 0x007C, 0x007D, 0x007E, 0x007F,
    0xE080, 0xE081, 0xE082, 0xE083, 0xE084, 0xE085, 0xE086, 0xE087,
    0xE088, 0xE089, 0xE08A, 0xE08B, 0xE08C, 0xE08D, 0xE08E, 0xE08F,
    0xE090, 0xE091, 0xE092, 0xE093, 0xE094, 0xE095, 0xE096, 0xE097,
    0xE098, 0xE099, 0xE09A, 0xE09B, 0xE09C, 0xE09D, 0xE09E, 0xE09F,
    0xE0A0, 0xE0A1, 0xE0A2, 0xE0A3, 0xE0A4, 0xE0A5, 0xE0A6, 0xE0A7,
    0xE0A8, 0xE0A9, 0xE0AA, 0xE0AB, 0xE0AC, 0xE0AD, 0xE0AE, 0xE0AF,
    0xE0B0, 0xE0B1, 0xE0B2, 0xE0B3, 0xE0B4, 0xE0B5, 0xE0B6, 0xE0B7,
    0xE0B8, 0xE0B9, 0xE0BA, 0xE0BB, 0xE0BC, 0xE0BD, 0xE0BE, 0xE0BF,
    0xE0C0, 0xE0C1, 0xE0C2, 0xE0C3, 0xE0C4, 0xE0C5, 0xE0C6, 0xE0C7,
    0xE0C8, 0xE0C9, 0xE0CA, 0xE0CB, 0xE0CC, 0xE0CD, 0xE0CE, 0xE0CF,
    0xE0D0, 0xE0D1, 0xE0D2, 0xE0D3, 0xE0D4, 0xE0D5, 0xE0D6, 0xE0D7,
    0xE0D8, 0xE0D9, 0xE0DA, 0xE0DB, 0xE0DC, 0xE0DD, 0xE0DE, 0xE0DF,
    0xE0E0, 0xE0E1, 0xE0E2, 0xE0E3, 0xE0E4, 0xE0E5, 0xE0E6, 0xE0E7,
    0xE0E8, 0xE0E9, 0xE0EA, 0xE0EB, 0xE0EC, 0xE0ED, 0xE0EE, 0xE0EF,
    0xE0F0, 0xE0F1, 0xE0F2, 0xE0F3, 0xE0F4, 0xE0F5, 0xE0F6, 0xE0F7,
    0xE0F8, 0xE0F9, 0xE0FA, 0xE0FB, 0xE0FC, 0xE0FD, 0xE0FE, 0xE0FF,
];

/// Byte that introduces a color-escape span.
pub const COLOR_TAG: u8 = b'^';

/// Second byte of a 5-byte RGB color-escape span.
pub const COLOR_RGB_TAG: u8 = b'x';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_byte_classes() {
        assert_eq!(SEQ_LENGTHS[0x00], 1);
        assert_eq!(SEQ_LENGTHS[0x7F], 1);
        // continuation bytes are never leaders
        assert!((0x80..=0xBF).all(|b| SEQ_LENGTHS[b] == 0));
        // C0/C1 could only produce overlong encodings
        assert_eq!(SEQ_LENGTHS[0xC0], 0);
        assert_eq!(SEQ_LENGTHS[0xC1], 0);
        assert_eq!(SEQ_LENGTHS[0xC2], 2);
        assert_eq!(SEQ_LENGTHS[0xE0], 3);
        assert_eq!(SEQ_LENGTHS[0xF4], 4);
        // F5.. would decode past 0x10FFFF
        assert!((0xF5..=0xFF).all(|b| SEQ_LENGTHS[b] == 0));
    }

    #[test]
    fn legacy_remap_shape() {
        // printable ASCII is untouched
        assert!((0x20..=0x7F).all(|b| LEGACY_TO_UNICODE[b] == b as u32));
        // everything else lands in the private use block
        assert!((0x00..=0x1F)
            .chain(0x80..=0xFF)
            .all(|b| LEGACY_TO_UNICODE[b] == LEGACY_REMAP_BASE + b as u32));
    }
}
