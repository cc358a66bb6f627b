//! Video attributes.
//!
//! The bit layout is the one used by the native `chtype`: the character in
//! the low 8 bits, the color pair in the next 8, and attribute flags above.

use crate::types::{AttrT, ChType, PairT};

/// Attribute shift - characters occupy bits 0-7.
pub const NCURSES_ATTR_SHIFT: u32 = 8;

/// Helper function for attribute bit positioning.
#[inline]
pub const fn ncurses_bits(mask: u32, shift: u32) -> ChType {
    (mask as ChType) << (shift + NCURSES_ATTR_SHIFT)
}

// ============================================================================
// Standard attributes
// ============================================================================

/// Normal display (no attributes).
pub const A_NORMAL: AttrT = 0;

/// Mask for extracting the character portion of a chtype.
pub const A_CHARTEXT: AttrT = (1 << NCURSES_ATTR_SHIFT) - 1;

/// Mask for extracting the color pair portion of a chtype.
pub const A_COLOR: AttrT = ncurses_bits((1 << 8) - 1, 0);

/// Mask for extracting all attributes (everything except the character).
pub const A_ATTRIBUTES: AttrT = !A_CHARTEXT;

/// Standout mode (typically reverse video).
pub const A_STANDOUT: AttrT = ncurses_bits(1, 8);

/// Underline mode.
pub const A_UNDERLINE: AttrT = ncurses_bits(1, 9);

/// Reverse video mode.
pub const A_REVERSE: AttrT = ncurses_bits(1, 10);

/// Blinking text.
pub const A_BLINK: AttrT = ncurses_bits(1, 11);

/// Half-bright or dim text.
pub const A_DIM: AttrT = ncurses_bits(1, 12);

/// Bold or extra-bright text.
pub const A_BOLD: AttrT = ncurses_bits(1, 13);

/// Alternate character set (line drawing characters).
pub const A_ALTCHARSET: AttrT = ncurses_bits(1, 14);

/// Invisible text.
pub const A_INVIS: AttrT = ncurses_bits(1, 15);

/// Protected text.
pub const A_PROTECT: AttrT = ncurses_bits(1, 16);

/// Horizontal highlight.
pub const A_HORIZONTAL: AttrT = ncurses_bits(1, 17);

/// Left highlight.
pub const A_LEFT: AttrT = ncurses_bits(1, 18);

/// Low highlight.
pub const A_LOW: AttrT = ncurses_bits(1, 19);

/// Right highlight.
pub const A_RIGHT: AttrT = ncurses_bits(1, 20);

/// Top highlight.
pub const A_TOP: AttrT = ncurses_bits(1, 21);

/// Vertical highlight.
pub const A_VERTICAL: AttrT = ncurses_bits(1, 22);

/// Italic text (ncurses extension).
pub const A_ITALIC: AttrT = ncurses_bits(1, 23);

// ============================================================================
// Color pair helpers
// ============================================================================

/// Create a color attribute from a color pair number.
///
/// Same result as the native `COLOR_PAIR` macro, usable in `const` context.
///
/// ```rust
/// use ncurses::attr::{color_pair, A_BOLD};
///
/// let attr = color_pair(1) | A_BOLD;
/// ```
#[inline]
pub const fn color_pair(n: PairT) -> AttrT {
    ncurses_bits(n as u32, 0) & A_COLOR
}

/// Extract the color pair number from an attribute value.
#[inline]
pub const fn pair_number(attr: AttrT) -> PairT {
    ((attr & A_COLOR) >> NCURSES_ATTR_SHIFT) as PairT
}

// ============================================================================
// Attribute type for idiomatic Rust usage
// ============================================================================

bitflags::bitflags! {
    /// Video attributes as a bitflags type.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attribute: AttrT {
        /// Standout mode.
        const STANDOUT = A_STANDOUT;
        /// Underline mode.
        const UNDERLINE = A_UNDERLINE;
        /// Reverse video.
        const REVERSE = A_REVERSE;
        /// Blinking text.
        const BLINK = A_BLINK;
        /// Dim or half-bright.
        const DIM = A_DIM;
        /// Bold or extra-bright.
        const BOLD = A_BOLD;
        /// Alternate character set.
        const ALTCHARSET = A_ALTCHARSET;
        /// Invisible text.
        const INVIS = A_INVIS;
        /// Protected text.
        const PROTECT = A_PROTECT;
        /// Horizontal highlight.
        const HORIZONTAL = A_HORIZONTAL;
        /// Left highlight.
        const LEFT = A_LEFT;
        /// Low highlight.
        const LOW = A_LOW;
        /// Right highlight.
        const RIGHT = A_RIGHT;
        /// Top highlight.
        const TOP = A_TOP;
        /// Vertical highlight.
        const VERTICAL = A_VERTICAL;
        /// Italic text.
        const ITALIC = A_ITALIC;
    }
}

impl Attribute {
    /// Combine with a color pair into a raw attribute value.
    pub fn with_color_pair(self, pair: PairT) -> AttrT {
        self.bits() | color_pair(pair)
    }
}

impl From<AttrT> for Attribute {
    fn from(attr: AttrT) -> Self {
        Attribute::from_bits_truncate(attr & !A_COLOR & !A_CHARTEXT)
    }
}

impl From<Attribute> for AttrT {
    fn from(attr: Attribute) -> Self {
        attr.bits()
    }
}

// ============================================================================
// Attribute names
// ============================================================================

/// Attribute names, in bit order.
pub static ATTRIBUTE_NAMES: &[(AttrT, &str)] = &[
    (A_NORMAL, "normal"),
    (A_STANDOUT, "standout"),
    (A_UNDERLINE, "underline"),
    (A_REVERSE, "reverse"),
    (A_BLINK, "blink"),
    (A_DIM, "dim"),
    (A_BOLD, "bold"),
    (A_ALTCHARSET, "altcharset"),
    (A_INVIS, "invis"),
    (A_PROTECT, "protect"),
    (A_HORIZONTAL, "horizontal"),
    (A_LEFT, "left"),
    (A_LOW, "low"),
    (A_RIGHT, "right"),
    (A_TOP, "top"),
    (A_VERTICAL, "vertical"),
    (A_ITALIC, "italic"),
];

/// Name of a single attribute flag, e.g. `"bold"` for `A_BOLD`.
pub fn attr_name(attr: AttrT) -> Option<&'static str> {
    ATTRIBUTE_NAMES
        .iter()
        .find(|(a, _)| *a == attr)
        .map(|(_, name)| *name)
}

/// Attribute flag for a name, the inverse of [`attr_name`].
pub fn attr_from_name(name: &str) -> Option<AttrT> {
    ATTRIBUTE_NAMES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(a, _)| *a)
}

// ============================================================================
// Character extraction helpers
// ============================================================================

/// Extract the character portion from a chtype.
#[inline]
pub const fn chtype_char(ch: ChType) -> u8 {
    (ch & A_CHARTEXT) as u8
}

/// Extract the attribute portion from a chtype (excluding character).
#[inline]
pub const fn chtype_attr(ch: ChType) -> AttrT {
    ch & A_ATTRIBUTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_bits_match_native_layout() {
        assert_eq!(A_CHARTEXT, 0xFF);
        assert_eq!(A_COLOR, 0xFF00);
        assert_eq!(A_STANDOUT, 1 << 16);
        assert_eq!(A_UNDERLINE, 1 << 17);
        assert_eq!(A_REVERSE, 1 << 18);
        assert_eq!(A_BLINK, 1 << 19);
        assert_eq!(A_DIM, 1 << 20);
        assert_eq!(A_BOLD, 1 << 21);
        assert_eq!(A_ALTCHARSET, 1 << 22);
        assert_eq!(A_INVIS, 1 << 23);
        assert_eq!(A_PROTECT, 1 << 24);
        assert_eq!(A_ITALIC, 1 << 31);
    }

    #[test]
    fn test_color_pair_matches_native() {
        for n in [0, 1, 7, 64, 255] {
            assert_eq!(color_pair(n) as i32, unsafe { crate::sys::COLOR_PAIR(n as i32) });
            let attrs = color_pair(n) | A_BOLD | A_UNDERLINE;
            assert_eq!(pair_number(attrs) as i32, unsafe {
                crate::sys::PAIR_NUMBER(attrs as i32)
            });
        }
        assert_eq!(pair_number(color_pair(1) | A_BOLD), 1);
    }

    #[test]
    fn test_chtype_helpers() {
        let ch = b'A' as ChType | A_BOLD | color_pair(1);
        assert_eq!(chtype_char(ch), b'A');
        assert_eq!(chtype_attr(ch), A_BOLD | color_pair(1));
    }

    #[test]
    fn test_attribute_bitflags() {
        let attr = Attribute::from(A_BOLD | A_UNDERLINE | color_pair(3) | b'x' as ChType);
        assert_eq!(attr, Attribute::BOLD | Attribute::UNDERLINE);
        assert_eq!(Attribute::BOLD.with_color_pair(2), A_BOLD | color_pair(2));
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(attr_name(A_BOLD), Some("bold"));
        assert_eq!(attr_name(A_BOLD | A_DIM), None);
        assert_eq!(attr_from_name("Reverse"), Some(A_REVERSE));
        assert_eq!(attr_from_name("sparkle"), None);
    }
}
