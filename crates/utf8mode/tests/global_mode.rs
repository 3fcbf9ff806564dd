//! Exercises the process-wide codec through the mode switch.

use utf8mode::{get_mode, global, set_mode};

// The process-wide codec is shared state, so everything that touches it
// lives in this single test.
#[test]
fn global_codec_follows_the_mode_switch() {
    let euro = "€".as_bytes();

    // disabled at startup for legacy compatibility
    assert!(!get_mode());
    assert_eq!(global().char_count(euro), 3);

    set_mode(true);
    assert!(get_mode());
    assert_eq!(global().char_count(euro), 1);
    assert_eq!(global().decode_char(euro).unwrap().codepoint, 0x20AC);

    set_mode(false);
    assert!(!get_mode());
    assert_eq!(global().char_count(euro), 3);
}
