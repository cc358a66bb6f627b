//! Soft function key labels.
//!
//! The labels occupy the bottom line (or two) of the screen. [`slk_init`]
//! must run before the library is initialized with
//! [`screen::init`](crate::screen::init) or
//! [`Screen::new_term`](crate::Screen::new_term); it reserves the lines the
//! labels use.

use std::ffi::{CStr, CString};

use crate::error::{Error, IntoResult, Result};
use crate::sys;
use crate::types::{AttrT, PairT};

/// Largest label number any format supports.
pub const SLK_MAX_LABELS: i32 = 12;

/// Soft label layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlkFormat {
    /// 3-2-3 arrangement of 8 labels.
    Format323,
    /// 4-4 arrangement of 8 labels.
    Format44,
    /// 4-4-4 arrangement of 12 labels.
    FormatPc444,
    /// 4-4-4 arrangement of 12 labels with an index line above.
    FormatPc444Index,
}

impl SlkFormat {
    /// Convert from the integer format used by ncurses.
    pub fn from_int(fmt: i32) -> Option<Self> {
        match fmt {
            0 => Some(SlkFormat::Format323),
            1 => Some(SlkFormat::Format44),
            2 => Some(SlkFormat::FormatPc444),
            3 => Some(SlkFormat::FormatPc444Index),
            _ => None,
        }
    }

    /// The integer format used by ncurses.
    pub const fn to_int(self) -> i32 {
        match self {
            SlkFormat::Format323 => 0,
            SlkFormat::Format44 => 1,
            SlkFormat::FormatPc444 => 2,
            SlkFormat::FormatPc444Index => 3,
        }
    }

    /// Number of labels in this layout.
    pub fn num_labels(&self) -> i32 {
        match self {
            SlkFormat::Format323 | SlkFormat::Format44 => 8,
            SlkFormat::FormatPc444 | SlkFormat::FormatPc444Index => 12,
        }
    }
}

/// Label justification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlkJustify {
    /// Left-justify the label.
    #[default]
    Left,
    /// Center the label.
    Center,
    /// Right-justify the label.
    Right,
}

impl SlkJustify {
    /// Convert from integer justification value.
    pub fn from_int(j: i32) -> Option<Self> {
        match j {
            0 => Some(SlkJustify::Left),
            1 => Some(SlkJustify::Center),
            2 => Some(SlkJustify::Right),
            _ => None,
        }
    }

    /// The integer justification used by ncurses.
    pub const fn to_int(self) -> i32 {
        match self {
            SlkJustify::Left => 0,
            SlkJustify::Center => 1,
            SlkJustify::Right => 2,
        }
    }
}

fn check_label(labnum: i32) -> Result<()> {
    if !(1..=SLK_MAX_LABELS).contains(&labnum) {
        return Err(Error::InvalidArgument(format!(
            "soft label number must be 1-{}, got {}",
            SLK_MAX_LABELS, labnum
        )));
    }
    Ok(())
}

/// Reserve screen lines for soft labels in the given layout.
pub fn slk_init(format: SlkFormat) -> Result<()> {
    log::trace!("slk_init({:?})", format);
    unsafe { sys::slk_init(format.to_int()) }.into_result("slk_init")
}

/// Set label `labnum` (starting at 1).
pub fn slk_set(labnum: i32, label: &str, justify: SlkJustify) -> Result<()> {
    check_label(labnum)?;
    let label = CString::new(label)?;
    unsafe { sys::slk_set(labnum, label.as_ptr(), justify.to_int()) }.into_result("slk_set")
}

/// Current text of label `labnum`, as the library stores it.
pub fn slk_label(labnum: i32) -> Result<String> {
    check_label(labnum)?;
    let ptr = unsafe { sys::slk_label(labnum) }.into_result("slk_label")?;
    Ok(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Write the labels to the terminal now.
pub fn slk_refresh() -> Result<()> {
    unsafe { sys::slk_refresh() }.into_result("slk_refresh")
}

/// Stage the labels for the next [`update`](crate::update).
pub fn slk_nout_refresh() -> Result<()> {
    unsafe { sys::slk_noutrefresh() }.into_result("slk_noutrefresh")
}

/// Hide the labels.
pub fn slk_clear() -> Result<()> {
    unsafe { sys::slk_clear() }.into_result("slk_clear")
}

/// Show the labels again after [`slk_clear`].
pub fn slk_restore() -> Result<()> {
    unsafe { sys::slk_restore() }.into_result("slk_restore")
}

/// Force every label to be redrawn on the next refresh.
pub fn slk_touch() -> Result<()> {
    unsafe { sys::slk_touch() }.into_result("slk_touch")
}

/// Color pair for the labels.
pub fn slk_color(pair: PairT) -> Result<()> {
    unsafe { sys::slk_color(pair) }.into_result("slk_color")
}

/// Replace the label attributes.
pub fn slk_attr_set(attrs: AttrT) -> Result<()> {
    unsafe { sys::slk_attrset(attrs) }.into_result("slk_attrset")
}

/// Turn on label attributes.
pub fn slk_attr_on(attrs: AttrT) -> Result<()> {
    unsafe { sys::slk_attron(attrs) }.into_result("slk_attron")
}

/// Turn off label attributes.
pub fn slk_attr_off(attrs: AttrT) -> Result<()> {
    unsafe { sys::slk_attroff(attrs) }.into_result("slk_attroff")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_values() {
        assert_eq!(SlkFormat::Format323.to_int(), 0);
        assert_eq!(SlkFormat::FormatPc444Index.to_int(), 3);
        assert_eq!(SlkFormat::from_int(2), Some(SlkFormat::FormatPc444));
        assert_eq!(SlkFormat::from_int(4), None);
        assert_eq!(SlkFormat::Format44.num_labels(), 8);
        assert_eq!(SlkFormat::FormatPc444.num_labels(), 12);
    }

    #[test]
    fn test_justify_values() {
        assert_eq!(SlkJustify::default(), SlkJustify::Left);
        assert_eq!(SlkJustify::Right.to_int(), 2);
        assert_eq!(SlkJustify::from_int(1), Some(SlkJustify::Center));
    }

    #[test]
    fn test_label_number_checked() {
        assert!(matches!(
            slk_set(0, "Help", SlkJustify::Left),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(slk_label(13), Err(Error::InvalidArgument(_))));
    }
}
