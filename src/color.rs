//! Color support.
//!
//! Colors are combined into numbered pairs (foreground/background) which are
//! applied to text through [`color_pair`](crate::attr::color_pair) or
//! [`Window::color_on`](crate::Window::color_on). The pair table is global to
//! the active screen.

use crate::error::{Error, IntoResult, Result};
use crate::sys;
use crate::types::{ColorT, PairT};

// ============================================================================
// Standard Colors
// ============================================================================

/// Black color.
pub const COLOR_BLACK: ColorT = 0;
/// Red color.
pub const COLOR_RED: ColorT = 1;
/// Green color.
pub const COLOR_GREEN: ColorT = 2;
/// Yellow color.
pub const COLOR_YELLOW: ColorT = 3;
/// Blue color.
pub const COLOR_BLUE: ColorT = 4;
/// Magenta color.
pub const COLOR_MAGENTA: ColorT = 5;
/// Cyan color.
pub const COLOR_CYAN: ColorT = 6;
/// White color.
pub const COLOR_WHITE: ColorT = 7;

/// The terminal's default color, valid after [`use_default_colors`].
pub const COLOR_DEFAULT: ColorT = -1;

/// Maximum RGB component for [`init_color`].
pub const RGB_MAX: i16 = 1000;

/// Standard color enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum Color {
    /// Black (color 0).
    Black = COLOR_BLACK,
    /// Red (color 1).
    Red = COLOR_RED,
    /// Green (color 2).
    Green = COLOR_GREEN,
    /// Yellow (color 3).
    Yellow = COLOR_YELLOW,
    /// Blue (color 4).
    Blue = COLOR_BLUE,
    /// Magenta (color 5).
    Magenta = COLOR_MAGENTA,
    /// Cyan (color 6).
    Cyan = COLOR_CYAN,
    /// White (color 7).
    White = COLOR_WHITE,
}

impl Color {
    /// Convert from a color index.
    pub fn from_index(index: ColorT) -> Option<Self> {
        match index {
            COLOR_BLACK => Some(Color::Black),
            COLOR_RED => Some(Color::Red),
            COLOR_GREEN => Some(Color::Green),
            COLOR_YELLOW => Some(Color::Yellow),
            COLOR_BLUE => Some(Color::Blue),
            COLOR_MAGENTA => Some(Color::Magenta),
            COLOR_CYAN => Some(Color::Cyan),
            COLOR_WHITE => Some(Color::White),
            _ => None,
        }
    }

    /// Convert to color index.
    pub const fn to_index(self) -> ColorT {
        self as ColorT
    }
}

impl From<Color> for ColorT {
    fn from(color: Color) -> Self {
        color as ColorT
    }
}

impl TryFrom<ColorT> for Color {
    type Error = Error;

    fn try_from(value: ColorT) -> Result<Self> {
        Color::from_index(value)
            .ok_or_else(|| Error::InvalidArgument(format!("not a standard color: {}", value)))
    }
}

// ============================================================================
// Color table
// ============================================================================

/// Whether the terminal supports color.
pub fn has_colors() -> bool {
    unsafe { sys::has_colors() }
}

/// Whether the terminal can redefine colors with [`init_color`].
pub fn can_change_color() -> bool {
    unsafe { sys::can_change_color() }
}

/// Enable color and initialize the pair table.
///
/// Fails with [`Error::NoColors`] on a terminal without color support.
pub fn start_color() -> Result<()> {
    if !has_colors() {
        return Err(Error::NoColors);
    }
    unsafe { sys::start_color() }.into_result("start_color")
}

/// Allow [`COLOR_DEFAULT`] as a pair foreground or background.
pub fn use_default_colors() -> Result<()> {
    unsafe { sys::use_default_colors() }.into_result("use_default_colors")
}

/// Number of colors the terminal supports (0 before [`start_color`]).
pub fn colors() -> i32 {
    unsafe { sys::COLORS }
}

/// Number of color pairs available (0 before [`start_color`]).
pub fn color_pairs() -> i32 {
    unsafe { sys::COLOR_PAIRS }
}

fn check_pair(pair: PairT) -> Result<()> {
    if pair <= 0 || i32::from(pair) >= color_pairs() {
        return Err(Error::InvalidArgument(format!(
            "color pair {} out of range 1..{}",
            pair,
            color_pairs()
        )));
    }
    Ok(())
}

/// Define color pair `pair` as `fg` on `bg`.
///
/// Pair 0 is reserved for the terminal default and is rejected, as is any
/// pair at or beyond [`color_pairs`].
pub fn init_pair(pair: PairT, fg: ColorT, bg: ColorT) -> Result<()> {
    check_pair(pair)?;
    log::trace!("init_pair({}, {}, {})", pair, fg, bg);
    unsafe { sys::init_pair(pair, fg, bg) }.into_result("init_pair")
}

/// Foreground and background of a color pair.
pub fn pair_content(pair: PairT) -> Result<(ColorT, ColorT)> {
    let (mut fg, mut bg) = (0, 0);
    unsafe { sys::pair_content(pair, &mut fg, &mut bg) }.into_result("pair_content")?;
    Ok((fg, bg))
}

/// Redefine a color with RGB components in `0..=1000`.
pub fn init_color(color: ColorT, r: i16, g: i16, b: i16) -> Result<()> {
    if [r, g, b].iter().any(|c| !(0..=RGB_MAX).contains(c)) {
        return Err(Error::InvalidArgument("RGB values must be 0-1000".into()));
    }
    unsafe { sys::init_color(color, r, g, b) }.into_result("init_color")
}

/// RGB components of a color.
pub fn color_content(color: ColorT) -> Result<(i16, i16, i16)> {
    let (mut r, mut g, mut b) = (0, 0, 0);
    unsafe { sys::color_content(color, &mut r, &mut g, &mut b) }.into_result("color_content")?;
    Ok((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_enum() {
        assert_eq!(Color::from_index(COLOR_RED), Some(Color::Red));
        assert_eq!(Color::White.to_index(), 7);
        assert!(Color::try_from(8).is_err());
        assert_eq!(ColorT::from(Color::Cyan), COLOR_CYAN);
    }

    #[test]
    fn test_init_color_rejects_out_of_range_rgb() {
        assert!(matches!(
            init_color(1, 0, 1001, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            init_color(1, -1, 0, 0),
            Err(Error::InvalidArgument(_))
        ));
    }
}
