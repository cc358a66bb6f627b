//! Core type definitions for the ncurses bindings.
//!
//! These mirror the native scalar types so values pass through the FFI
//! boundary unchanged.

use crate::sys;

/// Character type with embedded attributes.
///
/// In ncurses, `chtype` is a 32-bit value where:
/// - Bits 0-7: The character (or character index)
/// - Bits 8-31: Attributes and color pair
pub type ChType = sys::chtype;

/// Attribute type. Same width as `ChType`.
pub type AttrT = sys::attr_t;

/// Mouse event mask type.
pub type MmaskT = sys::mmask_t;

/// Color value type (`short` in the native API).
pub type ColorT = i16;

/// Color pair index type (`short` in the native API).
pub type PairT = i16;

/// Window coordinate type.
pub type Coord = i32;

/// OK return value (success).
pub const OK: i32 = 0;

/// ERR return value (failure).
pub const ERR: i32 = -1;

/// Timeout values for input operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delay {
    /// No delay - non-blocking input.
    NoDelay,
    /// Block indefinitely until input is available.
    #[default]
    Blocking,
    /// Wait for specified milliseconds.
    Timeout(i32),
}

impl Delay {
    /// Convert from the raw delay value accepted by `wtimeout`.
    #[must_use]
    pub fn from_raw(value: i32) -> Self {
        if value == 0 {
            Delay::NoDelay
        } else if value < 0 {
            Delay::Blocking
        } else {
            Delay::Timeout(value)
        }
    }

    /// Convert to the raw delay value accepted by `wtimeout`.
    #[must_use]
    pub fn to_raw(self) -> i32 {
        match self {
            Delay::NoDelay => 0,
            Delay::Blocking => -1,
            Delay::Timeout(ms) => ms,
        }
    }
}

/// Cursor visibility states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CursorVisibility {
    /// Cursor is invisible (hidden).
    Invisible = 0,
    /// Normal cursor visibility (default).
    #[default]
    Normal = 1,
    /// Very visible cursor (e.g., block cursor).
    VeryVisible = 2,
}

impl CursorVisibility {
    /// Create from raw i32 value.
    ///
    /// Returns `None` if the value is not a valid cursor visibility.
    #[must_use]
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Invisible),
            1 => Some(Self::Normal),
            2 => Some(Self::VeryVisible),
            _ => None,
        }
    }

    /// Convert to raw i32 value.
    #[must_use]
    pub fn to_raw(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for CursorVisibility {
    type Error = crate::error::Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or_else(|| {
            crate::error::Error::InvalidArgument(format!(
                "cursor visibility must be 0, 1, or 2, got {}",
                value
            ))
        })
    }
}

/// Which direction a window synchronizes with its ancestors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyncMode {
    /// Turn off automatic synchronization (`syncok(FALSE)`).
    None,
    /// Update ancestor cursors to match this window (`wcursyncup`).
    Cursor,
    /// Touch this window where any ancestor was changed (`wsyncdown`).
    Down,
    /// Touch ancestors where this window was changed (`wsyncup`).
    Up,
}

/// Border characters for drawing window borders.
///
/// This struct provides a more ergonomic way to specify border characters
/// compared to passing 8 separate parameters.
///
/// # Example
///
/// ```rust
/// use ncurses::types::BorderChars;
///
/// // Use default box-drawing characters
/// let border = BorderChars::default();
///
/// // Create a simple border with same chars for sides
/// let border = BorderChars::simple('|' as u32, '-' as u32);
///
/// // Customize specific characters
/// let border = BorderChars::default()
///     .with_corners('+' as u32, '+' as u32, '+' as u32, '+' as u32);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BorderChars {
    /// Left side character.
    pub left: ChType,
    /// Right side character.
    pub right: ChType,
    /// Top side character.
    pub top: ChType,
    /// Bottom side character.
    pub bottom: ChType,
    /// Top-left corner character.
    pub top_left: ChType,
    /// Top-right corner character.
    pub top_right: ChType,
    /// Bottom-left corner character.
    pub bottom_left: ChType,
    /// Bottom-right corner character.
    pub bottom_right: ChType,
}

impl Default for BorderChars {
    /// Creates border with all characters set to 0, which means
    /// the window will use default ACS line-drawing characters.
    fn default() -> Self {
        Self {
            left: 0,
            right: 0,
            top: 0,
            bottom: 0,
            top_left: 0,
            top_right: 0,
            bottom_left: 0,
            bottom_right: 0,
        }
    }
}

impl BorderChars {
    /// Border with one character for the vertical sides and one for the
    /// horizontal sides. Corners use the default.
    #[must_use]
    pub const fn simple(vertical: ChType, horizontal: ChType) -> Self {
        Self {
            left: vertical,
            right: vertical,
            top: horizontal,
            bottom: horizontal,
            top_left: 0,
            top_right: 0,
            bottom_left: 0,
            bottom_right: 0,
        }
    }

    /// Set corner characters.
    #[must_use]
    pub const fn with_corners(
        mut self,
        top_left: ChType,
        top_right: ChType,
        bottom_left: ChType,
        bottom_right: ChType,
    ) -> Self {
        self.top_left = top_left;
        self.top_right = top_right;
        self.bottom_left = bottom_left;
        self.bottom_right = bottom_right;
        self
    }
}

/// A rectangular screen area: upper-left corner and size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top row.
    pub y: Coord,
    /// Left column.
    pub x: Coord,
    /// Number of rows.
    pub height: Coord,
    /// Number of columns.
    pub width: Coord,
}

impl Rect {
    /// Rectangle at (`y`, `x`) of `height` x `width`.
    #[must_use]
    pub const fn new(y: Coord, x: Coord, height: Coord, width: Coord) -> Self {
        Self {
            y,
            x,
            height,
            width,
        }
    }

    /// Top row.
    #[must_use]
    pub const fn top(&self) -> Coord {
        self.y
    }

    /// Left column.
    #[must_use]
    pub const fn left(&self) -> Coord {
        self.x
    }

    /// Row just below the rectangle.
    #[must_use]
    pub const fn bottom(&self) -> Coord {
        self.y + self.height
    }

    /// Column just right of the rectangle.
    #[must_use]
    pub const fn right(&self) -> Coord {
        self.x + self.width
    }

    /// Bottom row (inclusive), as `prefresh` expects.
    #[must_use]
    pub const fn max_row(&self) -> Coord {
        self.bottom() - 1
    }

    /// Right column (inclusive), as `prefresh` expects.
    #[must_use]
    pub const fn max_col(&self) -> Coord {
        self.right() - 1
    }

    /// True when the rectangle has no rows or no columns.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.height <= 0 || self.width <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_round_trip_edges() {
        assert_eq!(Delay::from_raw(0), Delay::NoDelay);
        assert_eq!(Delay::from_raw(-5), Delay::Blocking);
        assert_eq!(Delay::from_raw(250), Delay::Timeout(250));
        assert_eq!(Delay::Blocking.to_raw(), -1);
    }

    #[test]
    fn test_cursor_visibility_rejects_out_of_range() {
        assert_eq!(CursorVisibility::try_from(2).unwrap(), CursorVisibility::VeryVisible);
        assert!(CursorVisibility::try_from(3).is_err());
    }

    #[test]
    fn test_border_builders() {
        let b = BorderChars::simple('|' as ChType, '-' as ChType).with_corners(1, 2, 3, 4);
        assert_eq!(b.left, '|' as ChType);
        assert_eq!(b.bottom, '-' as ChType);
        assert_eq!(b.bottom_right, 4);
        assert_eq!(BorderChars::default().top_left, 0);
    }

    #[test]
    fn test_rect_bounds() {
        let r = Rect::new(2, 3, 5, 10);
        assert_eq!((r.top(), r.left()), (2, 3));
        assert_eq!((r.max_row(), r.max_col()), (6, 12));
        assert_eq!((r.bottom(), r.right()), (7, 13));
        assert!(Rect::new(0, 0, 0, 4).is_empty());
    }
}
