//! Alternate character set (line drawing) characters.
//!
//! Each `ACS_*` constant is the VT100 code for the glyph tagged with
//! [`A_ALTCHARSET`]. The native library translates these through the
//! terminal's `acsc` capability at output time, so they are valid before
//! initialization and can be passed straight to `add_char`, `border` and
//! friends.

use crate::attr::{A_ALTCHARSET, A_CHARTEXT};
use crate::sys;
use crate::types::ChType;

const fn acs(code: u8) -> ChType {
    A_ALTCHARSET | code as ChType
}

/// Upper left corner.
pub const ACS_ULCORNER: ChType = acs(b'l');
/// Lower left corner.
pub const ACS_LLCORNER: ChType = acs(b'm');
/// Upper right corner.
pub const ACS_URCORNER: ChType = acs(b'k');
/// Lower right corner.
pub const ACS_LRCORNER: ChType = acs(b'j');
/// Tee pointing right.
pub const ACS_LTEE: ChType = acs(b't');
/// Tee pointing left.
pub const ACS_RTEE: ChType = acs(b'u');
/// Tee pointing up.
pub const ACS_BTEE: ChType = acs(b'v');
/// Tee pointing down.
pub const ACS_TTEE: ChType = acs(b'w');
/// Horizontal line.
pub const ACS_HLINE: ChType = acs(b'q');
/// Vertical line.
pub const ACS_VLINE: ChType = acs(b'x');
/// Large plus or crossover.
pub const ACS_PLUS: ChType = acs(b'n');
/// Scan line 1.
pub const ACS_S1: ChType = acs(b'o');
/// Scan line 3.
pub const ACS_S3: ChType = acs(b'p');
/// Scan line 7.
pub const ACS_S7: ChType = acs(b'r');
/// Scan line 9.
pub const ACS_S9: ChType = acs(b's');
/// Diamond.
pub const ACS_DIAMOND: ChType = acs(b'`');
/// Checker board (stipple).
pub const ACS_CKBOARD: ChType = acs(b'a');
/// Degree symbol.
pub const ACS_DEGREE: ChType = acs(b'f');
/// Plus/minus.
pub const ACS_PLMINUS: ChType = acs(b'g');
/// Bullet.
pub const ACS_BULLET: ChType = acs(b'~');
/// Arrow pointing left.
pub const ACS_LARROW: ChType = acs(b',');
/// Arrow pointing right.
pub const ACS_RARROW: ChType = acs(b'+');
/// Arrow pointing down.
pub const ACS_DARROW: ChType = acs(b'.');
/// Arrow pointing up.
pub const ACS_UARROW: ChType = acs(b'-');
/// Board of squares.
pub const ACS_BOARD: ChType = acs(b'h');
/// Lantern symbol.
pub const ACS_LANTERN: ChType = acs(b'i');
/// Solid square block.
pub const ACS_BLOCK: ChType = acs(b'0');
/// Less-than-or-equal.
pub const ACS_LEQUAL: ChType = acs(b'y');
/// Greater-than-or-equal.
pub const ACS_GEQUAL: ChType = acs(b'z');
/// Greek pi.
pub const ACS_PI: ChType = acs(b'{');
/// Not-equal.
pub const ACS_NEQUAL: ChType = acs(b'|');
/// UK pound sign.
pub const ACS_STERLING: ChType = acs(b'}');

/// VT100 code to Unicode glyph.
static ACS_UNICODE: &[(u8, char)] = &[
    (b'l', '┌'),
    (b'm', '└'),
    (b'k', '┐'),
    (b'j', '┘'),
    (b't', '├'),
    (b'u', '┤'),
    (b'v', '┴'),
    (b'w', '┬'),
    (b'q', '─'),
    (b'x', '│'),
    (b'n', '┼'),
    (b'o', '⎺'),
    (b'p', '⎻'),
    (b'r', '⎼'),
    (b's', '⎽'),
    (b'`', '◆'),
    (b'a', '▒'),
    (b'f', '°'),
    (b'g', '±'),
    (b'~', '·'),
    (b',', '←'),
    (b'+', '→'),
    (b'.', '↓'),
    (b'-', '↑'),
    (b'h', '░'),
    (b'i', '␋'),
    (b'0', '█'),
    (b'y', '≤'),
    (b'z', '≥'),
    (b'{', 'π'),
    (b'|', '≠'),
    (b'}', '£'),
];

/// The Unicode glyph an `ACS_*` value stands for, if it is one.
pub fn acs_unicode(ch: ChType) -> Option<char> {
    if ch & A_ALTCHARSET == 0 {
        return None;
    }
    let code = (ch & A_CHARTEXT) as u8;
    ACS_UNICODE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, glyph)| *glyph)
}

/// The terminal-specific value the native `acs_map` holds for a VT100 code.
///
/// Only meaningful after initialization; before that the table is all zero.
pub fn acs_lookup(code: u8) -> ChType {
    let map = unsafe { &*std::ptr::addr_of!(sys::acs_map) };
    map[usize::from(code & 0x7f)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acs_values_carry_altcharset() {
        assert_eq!(ACS_ULCORNER, A_ALTCHARSET | 'l' as ChType);
        assert_eq!(ACS_HLINE & A_CHARTEXT, 'q' as ChType);
        assert_eq!(ACS_STERLING & A_CHARTEXT, '}' as ChType);
    }

    #[test]
    fn test_acs_unicode() {
        assert_eq!(acs_unicode(ACS_VLINE), Some('│'));
        assert_eq!(acs_unicode(ACS_CKBOARD), Some('▒'));
        assert_eq!(acs_unicode('q' as ChType), None);
    }
}
