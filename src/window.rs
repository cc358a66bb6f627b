//! Windows.
//!
//! [`Window`] wraps a native `WINDOW*`. Every method checks that the handle
//! is still live, makes the native call, and turns the `ERR` sentinel into an
//! [`Error`]. Windows are never freed implicitly: call [`Window::delete`] or
//! guard the window with [`Scoped`](crate::Scoped).

use std::ffi::CString;
use std::fmt;

use libc::{c_char, c_int};

use crate::attr::color_pair;
use crate::error::{Error, IntoResult, Result};
use crate::handle::{RawHandle, Release};
use crate::key::Key;
use crate::sys;
use crate::trace::{traceattr, tracechtype};
use crate::types::{AttrT, BorderChars, ChType, Coord, Delay, PairT, Rect, SyncMode, ERR};

/// A curses window.
///
/// Sub-windows and derived windows share the parent's character storage;
/// [`Window::duplicate`] makes an independent copy.
pub struct Window {
    handle: RawHandle<sys::WINDOW>,
    /// Views such as `stdscr` or a panel's window belong to someone else.
    owned: bool,
}

fn to_c_int(what: &str, n: usize) -> Result<c_int> {
    c_int::try_from(n).map_err(|_| Error::InvalidArgument(format!("{} too large: {}", what, n)))
}

fn check_size(nlines: Coord, ncols: Coord) -> Result<()> {
    if nlines <= 0 || ncols <= 0 {
        return Err(Error::InvalidArgument(format!(
            "window size must be positive, got {}x{}",
            nlines, ncols
        )));
    }
    Ok(())
}

impl Window {
    /// Create a new window of `nlines` x `ncols` with its upper-left corner
    /// at (`begin_y`, `begin_x`).
    pub fn new(nlines: Coord, ncols: Coord, begin_y: Coord, begin_x: Coord) -> Result<Self> {
        check_size(nlines, ncols)?;
        let ptr = unsafe { sys::newwin(nlines, ncols, begin_y, begin_x) }.into_result("newwin")?;
        log::trace!(
            "newwin({}, {}, {}, {}) -> {:p}",
            nlines,
            ncols,
            begin_y,
            begin_x,
            ptr
        );
        Ok(Self::from_raw(ptr, true))
    }

    pub(crate) fn from_raw(ptr: *mut sys::WINDOW, owned: bool) -> Self {
        Self {
            handle: RawHandle::new(ptr, "Window"),
            owned,
        }
    }

    /// The live native pointer.
    pub(crate) fn as_ptr(&self) -> Result<*mut sys::WINDOW> {
        self.handle.get()
    }

    fn call<F>(&self, name: &'static str, f: F) -> Result<()>
    where
        F: FnOnce(*mut sys::WINDOW) -> c_int,
    {
        let win = self.handle.get()?;
        f(win).into_result(name)
    }

    fn query<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(*mut sys::WINDOW) -> T,
    {
        Ok(f(self.handle.get()?))
    }

    /// Whether [`delete`](Self::delete) has already been called.
    pub fn is_deleted(&self) -> bool {
        self.handle.is_released()
    }

    /// Whether two wrappers refer to the same native window.
    pub fn same_as(&self, other: &Window) -> bool {
        !self.handle.is_released() && self.handle.as_ptr() == other.handle.as_ptr()
    }

    /// Delete the window and release its memory.
    ///
    /// Sub-windows must be deleted before their parent. Deleting a window the
    /// wrapper does not own (such as `stdscr`) is refused.
    pub fn delete(&self) -> Result<()> {
        if !self.owned {
            return Err(Error::InvalidArgument(
                "cannot delete a window owned by the library".into(),
            ));
        }
        let win = self.handle.take()?;
        if let Err(err) = unsafe { sys::delwin(win) }.into_result("delwin") {
            self.handle.restore(win);
            return Err(err);
        }
        log::trace!("delwin({:p})", win);
        Ok(())
    }

    // ========================================================================
    // Sub-windows
    // ========================================================================

    /// Create a sub-window at absolute screen coordinates.
    ///
    /// The sub-window shares memory with this window.
    pub fn sub(&self, nlines: Coord, ncols: Coord, begin_y: Coord, begin_x: Coord) -> Result<Window> {
        check_size(nlines, ncols)?;
        let win = self.handle.get()?;
        let ptr =
            unsafe { sys::subwin(win, nlines, ncols, begin_y, begin_x) }.into_result("subwin")?;
        Ok(Window::from_raw(ptr, true))
    }

    /// Create a sub-window at coordinates relative to this window.
    ///
    /// The derived window shares memory with this window.
    pub fn derived(
        &self,
        nlines: Coord,
        ncols: Coord,
        begin_y: Coord,
        begin_x: Coord,
    ) -> Result<Window> {
        check_size(nlines, ncols)?;
        let win = self.handle.get()?;
        let ptr =
            unsafe { sys::derwin(win, nlines, ncols, begin_y, begin_x) }.into_result("derwin")?;
        Ok(Window::from_raw(ptr, true))
    }

    /// Create an independent copy of this window.
    pub fn duplicate(&self) -> Result<Window> {
        let win = self.handle.get()?;
        let ptr = unsafe { sys::dupwin(win) }.into_result("dupwin")?;
        Ok(Window::from_raw(ptr, true))
    }

    /// The parent of a sub-window, as a non-owning view.
    pub fn parent(&self) -> Result<Option<Window>> {
        let parent = self.query(|w| unsafe { sys::wgetparent(w) })?;
        Ok((!parent.is_null()).then(|| Window::from_raw(parent, false)))
    }

    // ========================================================================
    // Geometry and cursor
    // ========================================================================

    /// Cursor position as (row, column).
    pub fn cursor_yx(&self) -> Result<(Coord, Coord)> {
        self.query(|w| unsafe { (sys::getcury(w), sys::getcurx(w)) })
    }

    /// Window size as (rows, columns).
    pub fn max_yx(&self) -> Result<(Coord, Coord)> {
        self.query(|w| unsafe { (sys::getmaxy(w), sys::getmaxx(w)) })
    }

    /// Screen position of the upper-left corner as (row, column).
    pub fn yx(&self) -> Result<(Coord, Coord)> {
        self.query(|w| unsafe { (sys::getbegy(w), sys::getbegx(w)) })
    }

    /// Position relative to the parent window, or (-1, -1) for a top-level
    /// window.
    pub fn par_yx(&self) -> Result<(Coord, Coord)> {
        self.query(|w| unsafe { (sys::getpary(w), sys::getparx(w)) })
    }

    /// Move the cursor.
    pub fn move_to(&self, y: Coord, x: Coord) -> Result<()> {
        self.call("wmove", |w| unsafe { sys::wmove(w, y, x) })
    }

    /// Move the window so its upper-left corner is at (`y`, `x`).
    ///
    /// Fails if any part of the window would leave the screen.
    pub fn move_window(&self, y: Coord, x: Coord) -> Result<()> {
        self.call("mvwin", |w| unsafe { sys::mvwin(w, y, x) })
    }

    /// Resize the window, keeping its upper-left corner fixed.
    pub fn resize(&self, nlines: Coord, ncols: Coord) -> Result<()> {
        check_size(nlines, ncols)?;
        self.call("wresize", |w| unsafe { sys::wresize(w, nlines, ncols) })
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Write a character (with attributes) at the cursor.
    pub fn add_char(&self, ch: ChType) -> Result<()> {
        self.call("waddch", |w| unsafe { sys::waddch(w, ch) })
    }

    /// Move the cursor then write a character.
    pub fn move_add_char(&self, y: Coord, x: Coord, ch: ChType) -> Result<()> {
        self.call("mvwaddch", |w| unsafe { sys::mvwaddch(w, y, x, ch) })
    }

    /// Write a string at the cursor.
    pub fn print(&self, s: &str) -> Result<()> {
        let cs = CString::new(s)?;
        self.call("waddnstr", |w| unsafe { sys::waddnstr(w, cs.as_ptr(), -1) })
    }

    /// Write at most `n` bytes of a string at the cursor.
    pub fn print_n(&self, s: &str, n: usize) -> Result<()> {
        let cs = CString::new(s)?;
        let n = to_c_int("length", n)?;
        self.call("waddnstr", |w| unsafe { sys::waddnstr(w, cs.as_ptr(), n) })
    }

    /// Move the cursor then write a string.
    pub fn move_print(&self, y: Coord, x: Coord, s: &str) -> Result<()> {
        let cs = CString::new(s)?;
        self.call("mvwaddnstr", |w| unsafe {
            sys::mvwaddnstr(w, y, x, cs.as_ptr(), -1)
        })
    }

    /// Insert a character before the cursor, shifting the rest of the line.
    pub fn insert_char(&self, ch: ChType) -> Result<()> {
        self.call("winsch", |w| unsafe { sys::winsch(w, ch) })
    }

    /// Delete the character under the cursor.
    pub fn del_char(&self) -> Result<()> {
        self.call("wdelch", |w| unsafe { sys::wdelch(w) })
    }

    /// Move the cursor then delete the character there.
    pub fn move_del_char(&self, y: Coord, x: Coord) -> Result<()> {
        self.call("mvwdelch", |w| unsafe { sys::mvwdelch(w, y, x) })
    }

    /// Insert a blank line above the cursor.
    pub fn insert_line(&self) -> Result<()> {
        self.call("winsertln", |w| unsafe { sys::winsertln(w) })
    }

    /// Delete the cursor line, moving the lines below it up.
    pub fn delete_line(&self) -> Result<()> {
        self.call("wdeleteln", |w| unsafe { sys::wdeleteln(w) })
    }

    // ========================================================================
    // Attributes and background
    // ========================================================================

    /// Turn on attributes for subsequent output.
    pub fn attr_on(&self, attr: AttrT) -> Result<()> {
        self.call("wattron", |w| unsafe { sys::wattron(w, attr as c_int) })
    }

    /// Turn off attributes for subsequent output.
    pub fn attr_off(&self, attr: AttrT) -> Result<()> {
        self.call("wattroff", |w| unsafe { sys::wattroff(w, attr as c_int) })
    }

    /// Replace the current attributes.
    pub fn attr_set(&self, attr: AttrT) -> Result<()> {
        self.call("wattrset", |w| unsafe { sys::wattrset(w, attr as c_int) })
    }

    /// Current attributes and color pair.
    pub fn attr_get(&self) -> Result<(AttrT, PairT)> {
        let mut attrs: AttrT = 0;
        let mut pair: PairT = 0;
        self.call("wattr_get", |w| unsafe {
            sys::wattr_get(w, &mut attrs, &mut pair, std::ptr::null_mut())
        })?;
        Ok((attrs, pair))
    }

    /// Turn on a color pair.
    pub fn color_on(&self, pair: PairT) -> Result<()> {
        self.attr_on(color_pair(pair))
    }

    /// Turn off a color pair.
    pub fn color_off(&self, pair: PairT) -> Result<()> {
        self.attr_off(color_pair(pair))
    }

    /// Set the color pair without touching other attributes.
    pub fn set_color(&self, pair: PairT) -> Result<()> {
        self.call("wcolor_set", |w| unsafe {
            sys::wcolor_set(w, pair, std::ptr::null_mut())
        })
    }

    /// Turn on standout mode.
    pub fn standout(&self) -> Result<()> {
        self.call("wstandout", |w| unsafe { sys::wstandout(w) })
    }

    /// Turn off all attributes.
    pub fn standend(&self) -> Result<()> {
        self.call("wstandend", |w| unsafe { sys::wstandend(w) })
    }

    /// Set the background and apply it to every cell of the window.
    pub fn set_background(&self, ch: ChType) -> Result<()> {
        log::trace!("wbkgd({})", tracechtype(ch));
        self.call("wbkgd", |w| unsafe { sys::wbkgd(w, ch) })
    }

    /// Set the background for subsequent output only.
    pub fn set_background_char(&self, ch: ChType) -> Result<()> {
        self.query(|w| unsafe { sys::wbkgdset(w, ch) })
    }

    /// Current background character and attributes.
    pub fn background(&self) -> Result<ChType> {
        self.query(|w| unsafe { sys::getbkgd(w) })
    }

    // ========================================================================
    // Borders and lines
    // ========================================================================

    /// Draw a border. Zero entries use the default line-drawing characters.
    pub fn border(&self, chars: BorderChars) -> Result<()> {
        self.call("wborder", |w| unsafe {
            sys::wborder(
                w,
                chars.left,
                chars.right,
                chars.top,
                chars.bottom,
                chars.top_left,
                chars.top_right,
                chars.bottom_left,
                chars.bottom_right,
            )
        })
    }

    /// Draw a box with the given vertical and horizontal characters.
    pub fn box_(&self, vertical: ChType, horizontal: ChType) -> Result<()> {
        self.call("box", |w| unsafe { sys::box_(w, vertical, horizontal) })
    }

    /// Draw a horizontal line of `n` characters from the cursor.
    pub fn hline(&self, ch: ChType, n: Coord) -> Result<()> {
        self.call("whline", |w| unsafe { sys::whline(w, ch, n) })
    }

    /// Draw a vertical line of `n` characters from the cursor.
    pub fn vline(&self, ch: ChType, n: Coord) -> Result<()> {
        self.call("wvline", |w| unsafe { sys::wvline(w, ch, n) })
    }

    /// Move the cursor then draw a horizontal line.
    pub fn move_hline(&self, y: Coord, x: Coord, ch: ChType, n: Coord) -> Result<()> {
        self.call("mvwhline", |w| unsafe { sys::mvwhline(w, y, x, ch, n) })
    }

    /// Move the cursor then draw a vertical line.
    pub fn move_vline(&self, y: Coord, x: Coord, ch: ChType, n: Coord) -> Result<()> {
        self.call("mvwvline", |w| unsafe { sys::mvwvline(w, y, x, ch, n) })
    }

    // ========================================================================
    // Clearing
    // ========================================================================

    /// Blank the window and repaint it from scratch on the next refresh.
    pub fn clear(&self) -> Result<()> {
        self.call("wclear", |w| unsafe { sys::wclear(w) })
    }

    /// Blank the window.
    pub fn erase(&self) -> Result<()> {
        self.call("werase", |w| unsafe { sys::werase(w) })
    }

    /// Clear from the cursor to the end of the line.
    pub fn clear_to_eol(&self) -> Result<()> {
        self.call("wclrtoeol", |w| unsafe { sys::wclrtoeol(w) })
    }

    /// Clear from the cursor to the end of the window.
    pub fn clear_to_bottom(&self) -> Result<()> {
        self.call("wclrtobot", |w| unsafe { sys::wclrtobot(w) })
    }

    /// Force a full repaint on the next refresh.
    pub fn clear_ok(&self, on: bool) -> Result<()> {
        self.call("clearok", |w| unsafe { sys::clearok(w, on) })
    }

    /// Whether the next refresh repaints the whole window.
    pub fn is_cleared(&self) -> Result<bool> {
        self.query(|w| unsafe { sys::is_cleared(w) })
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Read a key.
    ///
    /// Returns `Ok(None)` when no input arrived, which happens in no-delay or
    /// timeout mode (see [`timeout`](Self::timeout)).
    pub fn get_char(&self) -> Result<Option<i32>> {
        let ch = self.query(|w| unsafe { sys::wgetch(w) })?;
        Ok((ch != ERR).then_some(ch))
    }

    /// Move the cursor then read a key.
    pub fn move_get_char(&self, y: Coord, x: Coord) -> Result<Option<i32>> {
        let ch = self.query(|w| unsafe { sys::mvwgetch(w, y, x) })?;
        Ok((ch != ERR).then_some(ch))
    }

    /// Read a key and decode it.
    pub fn get_key(&self) -> Result<Option<Key>> {
        Ok(self.get_char()?.map(Key::from_code))
    }

    /// Read a line of at most `max` characters.
    ///
    /// Input beyond `max` is discarded by the library; the returned string is
    /// never longer than `max` bytes.
    pub fn get_string(&self, max: usize) -> Result<String> {
        if max == 0 {
            return Err(Error::InvalidArgument("maximum length must be positive".into()));
        }
        let n = to_c_int("length", max)?;
        let mut buf: Vec<c_char> = vec![0; max + 1];
        self.call("wgetnstr", |w| unsafe { sys::wgetnstr(w, buf.as_mut_ptr(), n) })?;
        let bytes: Vec<u8> = buf
            .iter()
            .take(max)
            .take_while(|&&c| c != 0)
            .map(|&c| c as u8)
            .collect();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// The character and attributes under the cursor.
    pub fn in_char(&self) -> Result<ChType> {
        self.query(|w| unsafe { sys::winch(w) })
    }

    /// The character and attributes at (`y`, `x`); moves the cursor there.
    pub fn move_in_char(&self, y: Coord, x: Coord) -> Result<ChType> {
        self.query(|w| unsafe { sys::mvwinch(w, y, x) })
    }

    /// Up to `max` characters from the cursor to the end of the line, without
    /// attributes.
    pub fn in_string(&self, max: usize) -> Result<String> {
        let n = to_c_int("length", max)?;
        let mut buf: Vec<c_char> = vec![0; max + 1];
        let len = self.query(|w| unsafe { sys::winnstr(w, buf.as_mut_ptr(), n) })?;
        if len == ERR {
            return Err(Error::Failed { call: "winnstr" });
        }
        let bytes: Vec<u8> = buf.iter().take_while(|&&c| c != 0).map(|&c| c as u8).collect();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    // ========================================================================
    // Copying between windows
    // ========================================================================

    /// Copy a rectangle of this window into `dst`.
    ///
    /// `src_y`/`src_x` is the upper-left corner in this window, `dst_rect`
    /// the area in `dst`. With `overlay` set, blanks are not copied.
    pub fn copy_to(
        &self,
        dst: &Window,
        src_y: Coord,
        src_x: Coord,
        dst_rect: Rect,
        overlay: bool,
    ) -> Result<()> {
        if dst_rect.is_empty() {
            return Err(Error::InvalidArgument("empty destination rectangle".into()));
        }
        let dst = dst.as_ptr()?;
        self.call("copywin", |w| unsafe {
            sys::copywin(
                w,
                dst,
                src_y,
                src_x,
                dst_rect.top(),
                dst_rect.left(),
                dst_rect.max_row(),
                dst_rect.max_col(),
                c_int::from(overlay),
            )
        })
    }

    /// Copy the overlapping area onto `dst`, skipping blanks.
    pub fn overlay(&self, dst: &Window) -> Result<()> {
        let dst = dst.as_ptr()?;
        self.call("overlay", |w| unsafe { sys::overlay(w, dst) })
    }

    /// Copy the overlapping area onto `dst`, blanks included.
    pub fn overwrite(&self, dst: &Window) -> Result<()> {
        let dst = dst.as_ptr()?;
        self.call("overwrite", |w| unsafe { sys::overwrite(w, dst) })
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    /// Scroll up `n` lines (down if negative).
    pub fn scroll(&self, n: Coord) -> Result<()> {
        self.call("wscrl", |w| unsafe { sys::wscrl(w, n) })
    }

    /// Allow output past the bottom line to scroll the window.
    pub fn scroll_ok(&self, on: bool) -> Result<()> {
        self.call("scrollok", |w| unsafe { sys::scrollok(w, on) })
    }

    /// Restrict scrolling to lines `top..=bottom`.
    pub fn set_scroll_region(&self, top: Coord, bottom: Coord) -> Result<()> {
        self.call("wsetscrreg", |w| unsafe { sys::wsetscrreg(w, top, bottom) })
    }

    // ========================================================================
    // Input options
    // ========================================================================

    /// Decode function and arrow keys into `KEY_*` codes.
    pub fn keypad(&self, on: bool) -> Result<()> {
        self.call("keypad", |w| unsafe { sys::keypad(w, on) })
    }

    /// Whether keypad decoding is on.
    pub fn is_keypad(&self) -> Result<bool> {
        self.query(|w| unsafe { sys::is_keypad(w) })
    }

    /// Make [`get_char`](Self::get_char) return immediately when no input is
    /// pending.
    pub fn no_delay(&self, on: bool) -> Result<()> {
        self.call("nodelay", |w| unsafe { sys::nodelay(w, on) })
    }

    /// Set blocking, non-blocking or timed reads.
    pub fn timeout(&self, delay: Delay) -> Result<()> {
        self.query(|w| unsafe { sys::wtimeout(w, delay.to_raw()) })
    }

    /// Pass 8-bit input through unchanged.
    pub fn meta(&self, on: bool) -> Result<()> {
        self.call("meta", |w| unsafe { sys::meta(w, on) })
    }

    /// Flush pending output when an interrupt key is pressed.
    pub fn intr_flush(&self, on: bool) -> Result<()> {
        self.call("intrflush", |w| unsafe { sys::intrflush(w, on) })
    }

    // ========================================================================
    // Output options
    // ========================================================================

    /// Leave the hardware cursor wherever the update leaves it.
    pub fn leave_ok(&self, on: bool) -> Result<()> {
        self.call("leaveok", |w| unsafe { sys::leaveok(w, on) })
    }

    /// Allow hardware insert/delete line.
    pub fn idl_ok(&self, on: bool) -> Result<()> {
        self.call("idlok", |w| unsafe { sys::idlok(w, on) })
    }

    /// Refresh after every change.
    pub fn immed_ok(&self, on: bool) -> Result<()> {
        self.query(|w| unsafe { sys::immedok(w, on) })
    }

    // ========================================================================
    // Refresh
    // ========================================================================

    /// Copy the window to the terminal now.
    pub fn refresh(&self) -> Result<()> {
        self.call("wrefresh", |w| unsafe { sys::wrefresh(w) })
    }

    /// Stage the window for the next [`update`](crate::update) without
    /// writing to the terminal.
    ///
    /// Staging several windows and then calling `update` once produces the
    /// same screen as refreshing each one, with a single write.
    pub fn nout_refresh(&self) -> Result<()> {
        self.call("wnoutrefresh", |w| unsafe { sys::wnoutrefresh(w) })
    }

    /// Repaint the whole window on the next refresh.
    pub fn redraw(&self) -> Result<()> {
        self.call("redrawwin", |w| unsafe { sys::redrawwin(w) })
    }

    /// Mark the whole window as changed.
    pub fn touch(&self) -> Result<()> {
        self.call("touchwin", |w| unsafe { sys::touchwin(w) })
    }

    /// Mark the whole window as unchanged.
    pub fn untouch(&self) -> Result<()> {
        self.call("untouchwin", |w| unsafe { sys::untouchwin(w) })
    }

    /// Mark `count` lines from `start` as changed.
    pub fn touch_line(&self, start: Coord, count: Coord) -> Result<()> {
        self.call("touchline", |w| unsafe { sys::touchline(w, start, count) })
    }

    /// Whether anything changed since the last refresh.
    pub fn touched(&self) -> Result<bool> {
        self.query(|w| unsafe { sys::is_wintouched(w) })
    }

    /// Whether `line` changed since the last refresh.
    pub fn line_touched(&self, line: Coord) -> Result<bool> {
        self.query(|w| unsafe { sys::is_linetouched(w, line) })
    }

    /// Synchronize with ancestor windows.
    pub fn sync(&self, mode: SyncMode) -> Result<()> {
        match mode {
            SyncMode::None => self.call("syncok", |w| unsafe { sys::syncok(w, false) }),
            SyncMode::Cursor => self.query(|w| unsafe { sys::wcursyncup(w) }),
            SyncMode::Down => self.query(|w| unsafe { sys::wsyncdown(w) }),
            SyncMode::Up => self.query(|w| unsafe { sys::wsyncup(w) }),
        }
    }

    // ========================================================================
    // Mouse
    // ========================================================================

    /// Whether screen position (`y`, `x`) falls inside this window.
    #[cfg(feature = "mouse")]
    pub fn enclose(&self, y: Coord, x: Coord) -> Result<bool> {
        self.query(|w| unsafe { sys::wenclose(w, y, x) })
    }

    /// Convert between screen and window-relative coordinates.
    ///
    /// Returns `None` when the point lies outside the window.
    #[cfg(feature = "mouse")]
    pub fn mouse_trafo(&self, y: Coord, x: Coord, to_screen: bool) -> Result<Option<(Coord, Coord)>> {
        let (mut y, mut x) = (y, x);
        let inside = self.query(|w| unsafe { sys::wmouse_trafo(w, &mut y, &mut x, to_screen) })?;
        Ok(inside.then_some((y, x)))
    }
}

impl Release for Window {
    fn release(&self) -> Result<()> {
        self.delete()
    }
}

impl fmt::Write for Window {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s).map_err(|_| fmt::Error)
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Window");
        d.field("handle", &self.handle).field("owned", &self.owned);
        if let (Ok(beg), Ok(max), Ok(cur), Ok((attrs, pair))) =
            (self.yx(), self.max_yx(), self.cursor_yx(), self.attr_get())
        {
            d.field("begin", &beg)
                .field("size", &max)
                .field("cursor", &cur)
                .field("attrs", &traceattr(attrs))
                .field("pair", &pair);
        }
        d.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_size_rejects_degenerate() {
        assert!(check_size(1, 1).is_ok());
        assert!(matches!(check_size(0, 20), Err(Error::InvalidArgument(_))));
        assert!(matches!(check_size(5, -1), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_new_window_rejects_zero_height_before_native_call() {
        assert!(matches!(
            Window::new(0, 10, 0, 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_released_window_reports_released() {
        let win = Window::from_raw(std::ptr::null_mut(), true);
        assert!(win.is_deleted());
        assert_eq!(win.refresh(), Err(Error::Released("Window")));
        assert_eq!(win.delete(), Err(Error::Released("Window")));
        assert_eq!(win.print("x"), Err(Error::Released("Window")));
    }

    #[test]
    fn test_borrowed_window_cannot_be_deleted() {
        let mut dummy = 0u8;
        let win = Window::from_raw((&mut dummy as *mut u8).cast(), false);
        assert!(matches!(win.delete(), Err(Error::InvalidArgument(_))));
        assert!(!win.is_deleted());
    }

    #[test]
    fn test_get_string_rejects_zero_length() {
        let win = Window::from_raw(std::ptr::null_mut(), true);
        assert!(matches!(win.get_string(0), Err(Error::InvalidArgument(_))));
    }
}
