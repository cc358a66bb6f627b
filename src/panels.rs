//! Panels: a stack of overlapping windows.
//!
//! The library keeps one stack per screen. A new panel goes on top;
//! [`update_panels`] stages every visible panel bottom to top so that
//! [`update`](crate::update) draws the overlap correctly.
//!
//! Once a window belongs to a panel, move and hide it through the panel, not
//! the window.
//!
//! ```rust,no_run
//! use ncurses::panels::{update_panels, Panel};
//! use ncurses::{update, Window};
//!
//! # fn main() -> ncurses::Result<()> {
//! let back = Window::new(10, 30, 2, 2)?;
//! let front = Window::new(10, 30, 5, 10)?;
//! let p1 = Panel::new(&back)?;
//! let p2 = Panel::new(&front)?;
//! p1.top()?;
//! update_panels();
//! update()?;
//! p2.delete()?;
//! p1.delete()?;
//! # Ok(())
//! # }
//! ```

use std::fmt;

use crate::error::{Error, IntoResult, Result};
use crate::handle::{RawHandle, Release};
use crate::sys;
use crate::types::Coord;
use crate::window::Window;

/// A window's place in the panel stack.
pub struct Panel {
    handle: RawHandle<sys::PANEL>,
    /// Views returned by stack queries belong to the panel that created them.
    owned: bool,
}

impl Panel {
    /// Put `window` on top of the stack.
    ///
    /// The panel refers to the window without owning it; delete the panel
    /// before the window.
    pub fn new(window: &Window) -> Result<Self> {
        let win = window.as_ptr()?;
        let ptr = unsafe { sys::new_panel(win) }.into_result("new_panel")?;
        log::trace!("new_panel({:p}) -> {:p}", win, ptr);
        Ok(Self::from_raw(ptr, true))
    }

    fn from_raw(ptr: *mut sys::PANEL, owned: bool) -> Self {
        Self {
            handle: RawHandle::new(ptr, "Panel"),
            owned,
        }
    }

    fn view(ptr: *mut sys::PANEL) -> Option<Panel> {
        (!ptr.is_null()).then(|| Panel::from_raw(ptr, false))
    }

    /// The panel directly above this one.
    pub fn above(&self) -> Result<Option<Panel>> {
        let pan = self.handle.get()?;
        Ok(Panel::view(unsafe { sys::panel_above(pan) }))
    }

    /// The panel directly below this one.
    pub fn below(&self) -> Result<Option<Panel>> {
        let pan = self.handle.get()?;
        Ok(Panel::view(unsafe { sys::panel_below(pan) }))
    }

    /// Move to the top of the stack, showing the panel if hidden.
    pub fn top(&self) -> Result<()> {
        let pan = self.handle.get()?;
        unsafe { sys::top_panel(pan) }.into_result("top_panel")
    }

    /// Move to the bottom of the stack, showing the panel if hidden.
    pub fn bottom(&self) -> Result<()> {
        let pan = self.handle.get()?;
        unsafe { sys::bottom_panel(pan) }.into_result("bottom_panel")
    }

    /// Whether the panel is hidden.
    pub fn hidden(&self) -> Result<bool> {
        let pan = self.handle.get()?;
        match unsafe { sys::panel_hidden(pan) } {
            crate::types::ERR => Err(Error::Failed {
                call: "panel_hidden",
            }),
            n => Ok(n != 0),
        }
    }

    /// Remove from the visible stack, keeping its position for [`show`](Self::show).
    pub fn hide(&self) -> Result<()> {
        let pan = self.handle.get()?;
        unsafe { sys::hide_panel(pan) }.into_result("hide_panel")
    }

    /// Make the panel visible on top of the stack.
    pub fn show(&self) -> Result<()> {
        let pan = self.handle.get()?;
        unsafe { sys::show_panel(pan) }.into_result("show_panel")
    }

    /// Move the panel's window so its upper-left corner is at (`y`, `x`).
    pub fn move_to(&self, y: Coord, x: Coord) -> Result<()> {
        let pan = self.handle.get()?;
        unsafe { sys::move_panel(pan, y, x) }.into_result("move_panel")
    }

    /// Show `window` in this panel instead, keeping the stack position.
    pub fn replace(&self, window: &Window) -> Result<()> {
        let pan = self.handle.get()?;
        let win = window.as_ptr()?;
        unsafe { sys::replace_panel(pan, win) }.into_result("replace_panel")
    }

    /// The panel's window, as a non-owning view.
    pub fn window(&self) -> Result<Window> {
        let pan = self.handle.get()?;
        let win = unsafe { sys::panel_window(pan) }.into_result("panel_window")?;
        Ok(Window::from_raw(win, false))
    }

    /// Whether two wrappers refer to the same panel.
    pub fn same_as(&self, other: &Panel) -> bool {
        !self.handle.is_released() && self.handle.as_ptr() == other.handle.as_ptr()
    }

    /// Remove the panel from the stack and free it. The window is untouched.
    pub fn delete(&self) -> Result<()> {
        if !self.owned {
            return Err(Error::InvalidArgument(
                "cannot delete a panel through a stack view".into(),
            ));
        }
        let pan = self.handle.take()?;
        if let Err(err) = unsafe { sys::del_panel(pan) }.into_result("del_panel") {
            self.handle.restore(pan);
            return Err(err);
        }
        log::trace!("del_panel({:p})", pan);
        Ok(())
    }
}

impl Release for Panel {
    fn release(&self) -> Result<()> {
        self.delete()
    }
}

impl fmt::Debug for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("handle", &self.handle)
            .field("owned", &self.owned)
            .finish()
    }
}

// ============================================================================
// Stack functions
// ============================================================================

/// Put `window` on top of the stack.
pub fn new_panel(window: &Window) -> Result<Panel> {
    Panel::new(window)
}

/// Stage all visible panels for the next [`update`](crate::update).
pub fn update_panels() {
    unsafe { sys::update_panels() }
}

/// Move `panel` to the top of the stack.
pub fn top_panel(panel: &Panel) -> Result<()> {
    panel.top()
}

/// Move `panel` to the bottom of the stack.
pub fn bottom_panel(panel: &Panel) -> Result<()> {
    panel.bottom()
}

/// The topmost panel, if any.
pub fn ceiling_panel() -> Option<Panel> {
    Panel::view(unsafe { sys::panel_below(std::ptr::null()) })
}

/// The bottom panel, if any.
pub fn ground_panel() -> Option<Panel> {
    Panel::view(unsafe { sys::panel_above(std::ptr::null()) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_panel_reports_released() {
        let panel = Panel::from_raw(std::ptr::null_mut(), true);
        assert_eq!(panel.top(), Err(Error::Released("Panel")));
        assert_eq!(panel.delete(), Err(Error::Released("Panel")));
    }

    #[test]
    fn test_stack_view_cannot_delete() {
        let mut dummy = 0u8;
        let view = Panel::view((&mut dummy as *mut u8).cast());
        assert!(matches!(
            view.map(|v| v.delete()),
            Some(Err(Error::InvalidArgument(_)))
        ));
        assert!(Panel::view(std::ptr::null_mut()).is_none());
    }
}
