//! Pads: windows larger than the screen.
//!
//! A pad is never refreshed as a whole. [`Pad::refresh`] copies a rectangle
//! of the pad onto a rectangle of the physical screen.

use std::fmt;
use std::ops::Deref;

use crate::error::{Error, IntoResult, Result};
use crate::handle::Release;
use crate::screen;
use crate::sys;
use crate::types::{ChType, Coord, Rect};
use crate::window::Window;

/// An off-screen window.
///
/// Dereferences to [`Window`] for drawing. Use the pad's own refresh methods;
/// the window ones fail on a pad.
pub struct Pad {
    win: Window,
}

impl Pad {
    /// Create a pad of `nlines` x `ncols`.
    pub fn new(nlines: Coord, ncols: Coord) -> Result<Self> {
        if nlines <= 0 || ncols <= 0 {
            return Err(Error::InvalidArgument(format!(
                "pad size must be positive, got {}x{}",
                nlines, ncols
            )));
        }
        let ptr = unsafe { sys::newpad(nlines, ncols) }.into_result("newpad")?;
        log::trace!("newpad({}, {}) -> {:p}", nlines, ncols, ptr);
        Ok(Self {
            win: Window::from_raw(ptr, true),
        })
    }

    /// Create a sub-pad at (`begin_y`, `begin_x`) within this pad.
    pub fn sub(&self, nlines: Coord, ncols: Coord, begin_y: Coord, begin_x: Coord) -> Result<Pad> {
        let parent = self.win.as_ptr()?;
        let ptr = unsafe { sys::subpad(parent, nlines, ncols, begin_y, begin_x) }
            .into_result("subpad")?;
        Ok(Pad {
            win: Window::from_raw(ptr, true),
        })
    }

    /// The pad as a plain window.
    pub fn window(&self) -> &Window {
        &self.win
    }

    /// Copy the area starting at (`pad_y`, `pad_x`) to `dest` on screen now.
    pub fn refresh(&self, pad_y: Coord, pad_x: Coord, dest: Rect) -> Result<()> {
        let pad = self.checked(pad_y, pad_x, dest)?;
        unsafe {
            sys::prefresh(
                pad,
                pad_y,
                pad_x,
                dest.top(),
                dest.left(),
                dest.max_row(),
                dest.max_col(),
            )
        }
        .into_result("prefresh")
    }

    /// Stage the area for the next [`update`](crate::update).
    pub fn nout_refresh(&self, pad_y: Coord, pad_x: Coord, dest: Rect) -> Result<()> {
        let pad = self.checked(pad_y, pad_x, dest)?;
        unsafe {
            sys::pnoutrefresh(
                pad,
                pad_y,
                pad_x,
                dest.top(),
                dest.left(),
                dest.max_row(),
                dest.max_col(),
            )
        }
        .into_result("pnoutrefresh")
    }

    /// Add a character and refresh the pad at the last refreshed position.
    pub fn echo_char(&self, ch: ChType) -> Result<()> {
        let pad = self.win.as_ptr()?;
        unsafe { sys::pechochar(pad, ch) }.into_result("pechochar")
    }

    /// Delete the pad.
    pub fn delete(&self) -> Result<()> {
        self.win.delete()
    }

    /// The source area must lie inside the pad and `dest` on the screen.
    fn checked(&self, pad_y: Coord, pad_x: Coord, dest: Rect) -> Result<*mut sys::WINDOW> {
        let pad = self.win.as_ptr()?;
        let (rows, cols) = self.win.max_yx()?;
        let src = Rect::new(pad_y, pad_x, dest.height, dest.width);
        check_refresh_area(src, rows, cols, "pad")?;
        check_refresh_area(dest, screen::lines(), screen::cols(), "screen")?;
        Ok(pad)
    }
}

fn check_refresh_area(area: Rect, rows: Coord, cols: Coord, what: &str) -> Result<()> {
    if area.is_empty() {
        return Err(Error::InvalidArgument(format!("empty {} rectangle", what)));
    }
    if area.top() < 0 || area.left() < 0 || area.bottom() > rows || area.right() > cols {
        return Err(Error::InvalidArgument(format!(
            "{:?} outside {} bounds {}x{}",
            area, what, rows, cols
        )));
    }
    Ok(())
}

impl Deref for Pad {
    type Target = Window;

    fn deref(&self) -> &Window {
        &self.win
    }
}

impl Release for Pad {
    fn release(&self) -> Result<()> {
        self.delete()
    }
}

impl fmt::Debug for Pad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pad").field(&self.win).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_area_bounds() {
        assert!(check_refresh_area(Rect::new(0, 0, 24, 80), 24, 80, "screen").is_ok());
        assert!(check_refresh_area(Rect::new(1, 0, 24, 80), 24, 80, "screen").is_err());
        assert!(check_refresh_area(Rect::new(0, -1, 5, 5), 24, 80, "screen").is_err());
        assert!(check_refresh_area(Rect::new(0, 0, 0, 5), 24, 80, "pad").is_err());
    }

    #[test]
    fn test_new_pad_rejects_degenerate_size() {
        assert!(matches!(Pad::new(0, 10), Err(Error::InvalidArgument(_))));
    }
}
