//! Library initialization, terminal modes, and additional terminals.
//!
//! Most programs call [`init`] once, draw through the returned standard
//! screen, and call [`end`] before exiting. Programs driving more than one
//! terminal create a [`Screen`] per terminal with [`Screen::new_term`] and
//! switch between them with [`Screen::set`].
//!
//! # Example
//!
//! ```rust,no_run
//! use ncurses::{screen, Result};
//!
//! fn main() -> Result<()> {
//!     let stdscr = screen::init()?;
//!     screen::cbreak(true)?;
//!     screen::echo(false)?;
//!
//!     stdscr.print("Hello, ncurses!")?;
//!     stdscr.refresh()?;
//!     stdscr.get_char()?;
//!
//!     screen::end()
//! }
//! ```

use std::cell::Cell;
use std::ffi::{CStr, CString};
use std::fmt;
use std::os::fd::{AsRawFd, RawFd};

use crate::error::{Error, IntoResult, Result};
use crate::handle::{RawHandle, Release};
use crate::sys;
use crate::trace::tracechar;
use crate::types::{CursorVisibility, ERR};
use crate::window::Window;

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the library on the controlling terminal and return the
/// standard screen.
///
/// The returned window belongs to the library and cannot be deleted.
pub fn init() -> Result<Window> {
    let ptr = unsafe { sys::initscr() };
    if ptr.is_null() {
        return Err(Error::Init("initscr failed".into()));
    }
    log::trace!("initscr() -> {:p}", ptr);
    Ok(Window::from_raw(ptr, false))
}

/// Restore the terminal to its original mode.
///
/// Drawing again later resumes curses mode.
pub fn end() -> Result<()> {
    log::trace!("endwin()");
    unsafe { sys::endwin() }.into_result("endwin")
}

/// Whether [`end`] has been called without a refresh since.
pub fn is_end() -> bool {
    unsafe { sys::isendwin() }
}

/// The standard screen of the active terminal.
pub fn stdscr() -> Result<Window> {
    let ptr = unsafe { sys::stdscr };
    if ptr.is_null() {
        return Err(Error::NullHandle { call: "stdscr" });
    }
    Ok(Window::from_raw(ptr, false))
}

/// Write every window staged with `nout_refresh` to the terminal at once.
pub fn update() -> Result<()> {
    unsafe { sys::doupdate() }.into_result("doupdate")
}

/// Number of columns on the screen.
pub fn cols() -> i32 {
    unsafe { sys::COLS }
}

/// Number of lines on the screen.
pub fn lines() -> i32 {
    unsafe { sys::LINES }
}

// ============================================================================
// Terminal modes
// ============================================================================

/// Deliver keys immediately instead of line by line.
pub fn cbreak(on: bool) -> Result<()> {
    if on {
        unsafe { sys::cbreak() }.into_result("cbreak")
    } else {
        unsafe { sys::nocbreak() }.into_result("nocbreak")
    }
}

/// Like [`cbreak`], and also pass interrupt and flow-control keys through.
pub fn raw(on: bool) -> Result<()> {
    if on {
        unsafe { sys::raw() }.into_result("raw")
    } else {
        unsafe { sys::noraw() }.into_result("noraw")
    }
}

/// Echo typed characters.
pub fn echo(on: bool) -> Result<()> {
    if on {
        unsafe { sys::echo() }.into_result("echo")
    } else {
        unsafe { sys::noecho() }.into_result("noecho")
    }
}

/// Translate return into newline on input and newline into return-linefeed
/// on output.
pub fn nl(on: bool) -> Result<()> {
    if on {
        unsafe { sys::nl() }.into_result("nl")
    } else {
        unsafe { sys::nonl() }.into_result("nonl")
    }
}

/// cbreak mode where reads time out after `tenths` tenths of a second.
pub fn halfdelay(tenths: i32) -> Result<()> {
    if !(1..=255).contains(&tenths) {
        return Err(Error::InvalidArgument(format!(
            "halfdelay must be 1-255 tenths, got {}",
            tenths
        )));
    }
    unsafe { sys::halfdelay(tenths) }.into_result("halfdelay")
}

/// Set cursor visibility, returning the previous setting.
pub fn cursor(visibility: CursorVisibility) -> Result<CursorVisibility> {
    let old = unsafe { sys::curs_set(visibility.to_raw()) };
    if old == ERR {
        return Err(Error::Failed { call: "curs_set" });
    }
    CursorVisibility::try_from(old)
}

/// Save the current terminal modes as the program mode.
pub fn def_prog_mode() -> Result<()> {
    unsafe { sys::def_prog_mode() }.into_result("def_prog_mode")
}

/// Restore the modes saved by [`def_prog_mode`].
pub fn reset_prog_mode() -> Result<()> {
    unsafe { sys::reset_prog_mode() }.into_result("reset_prog_mode")
}

/// Save the current terminal modes as the shell mode.
pub fn def_shell_mode() -> Result<()> {
    unsafe { sys::def_shell_mode() }.into_result("def_shell_mode")
}

/// Restore the modes saved by [`def_shell_mode`].
pub fn reset_shell_mode() -> Result<()> {
    unsafe { sys::reset_shell_mode() }.into_result("reset_shell_mode")
}

/// Milliseconds to wait after an escape for the rest of a key sequence.
pub fn set_escdelay(ms: i32) -> Result<()> {
    if ms < 0 {
        return Err(Error::InvalidArgument(format!("negative escape delay: {}", ms)));
    }
    unsafe { sys::set_escdelay(ms) }.into_result("set_escdelay")
}

/// Current escape delay in milliseconds.
pub fn escdelay() -> i32 {
    unsafe { sys::ESCDELAY }
}

/// Columns a tab expands to.
pub fn set_tabsize(cols: i32) -> Result<()> {
    if cols <= 0 {
        return Err(Error::InvalidArgument(format!("tab size must be positive, got {}", cols)));
    }
    unsafe { sys::set_tabsize(cols) }.into_result("set_tabsize")
}

/// Current tab size.
pub fn tabsize() -> i32 {
    unsafe { sys::TABSIZE }
}

// ============================================================================
// Terminal queries and misc
// ============================================================================

/// Ring the bell.
pub fn beep() -> Result<()> {
    unsafe { sys::beep() }.into_result("beep")
}

/// Flash the screen, or ring the bell if the terminal cannot.
pub fn flash() -> Result<()> {
    unsafe { sys::flash() }.into_result("flash")
}

/// Output speed of the terminal.
pub fn baud_rate() -> i32 {
    unsafe { sys::baudrate() }
}

/// Version string of the native library, e.g. `"ncurses 6.4.20221231"`.
pub fn curses_version() -> String {
    let ptr = unsafe { sys::curses_version() };
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

/// Whether the terminal can send the given `KEY_*` code.
pub fn has_key(code: i32) -> bool {
    unsafe { sys::has_key(code) != 0 }
}

/// Whether resizing to `lines` x `cols` would change anything.
pub fn is_term_resized(lines: i32, cols: i32) -> bool {
    unsafe { sys::is_term_resized(lines, cols) }
}

/// Resize the library's idea of the screen, typically after `KEY_RESIZE`.
pub fn resize_term(lines: i32, cols: i32) -> Result<()> {
    log::trace!("resizeterm({}, {})", lines, cols);
    unsafe { sys::resizeterm(lines, cols) }.into_result("resizeterm")
}

/// Sleep for `ms` milliseconds.
pub fn napms(ms: i32) -> Result<()> {
    unsafe { sys::napms(ms) }.into_result("napms")
}

/// Discard typed-ahead input.
pub fn flush_input() -> Result<()> {
    unsafe { sys::flushinp() }.into_result("flushinp")
}

/// Push a key back to be returned by the next read.
pub fn ungetch(code: i32) -> Result<()> {
    log::trace!("ungetch({})", tracechar(code));
    unsafe { sys::ungetch(code) }.into_result("ungetch")
}

// ============================================================================
// Additional terminals
// ============================================================================

/// A terminal created with [`Screen::new_term`].
///
/// The screen owns duplicates of the file descriptors it was given and closes
/// them on [`delete`](Self::delete). Screens must be ended in the reverse
/// order of their creation.
pub struct Screen {
    handle: RawHandle<sys::SCREEN>,
    output: Cell<*mut libc::FILE>,
    input: Cell<*mut libc::FILE>,
    ended: Cell<bool>,
    owned: bool,
}

unsafe fn open_stream(fd: RawFd, mode: &CStr) -> Result<*mut libc::FILE> {
    let dup = libc::dup(fd);
    if dup < 0 {
        return Err(Error::Init(format!(
            "dup({}): {}",
            fd,
            std::io::Error::last_os_error()
        )));
    }
    let stream = libc::fdopen(dup, mode.as_ptr());
    if stream.is_null() {
        let err = std::io::Error::last_os_error();
        libc::close(dup);
        return Err(Error::Init(format!("fdopen({}): {}", dup, err)));
    }
    Ok(stream)
}

unsafe fn close_stream(stream: *mut libc::FILE) {
    if !stream.is_null() {
        libc::fclose(stream);
    }
}

impl Screen {
    /// Create a terminal of type `term` writing to `output` and reading from
    /// `input`. An empty `term` uses `$TERM`.
    ///
    /// The new screen becomes the active one.
    pub fn new_term<O, I>(term: &str, output: &O, input: &I) -> Result<Self>
    where
        O: AsRawFd,
        I: AsRawFd,
    {
        let term_c = if term.is_empty() {
            None
        } else {
            Some(CString::new(term)?)
        };
        let term_ptr = term_c.as_ref().map_or(std::ptr::null(), |t| t.as_ptr());

        let out = unsafe { open_stream(output.as_raw_fd(), c"w")? };
        let inp = match unsafe { open_stream(input.as_raw_fd(), c"r") } {
            Ok(inp) => inp,
            Err(err) => {
                unsafe { close_stream(out) };
                return Err(err);
            }
        };

        let ptr = unsafe { sys::newterm(term_ptr, out, inp) };
        if ptr.is_null() {
            unsafe {
                close_stream(out);
                close_stream(inp);
            }
            log::debug!("newterm({:?}) failed", term);
            return Err(Error::Init(format!("newterm failed for terminal {:?}", term)));
        }
        log::trace!("newterm({:?}) -> {:p}", term, ptr);

        Ok(Self {
            handle: RawHandle::new(ptr, "Screen"),
            output: Cell::new(out),
            input: Cell::new(inp),
            ended: Cell::new(false),
            owned: true,
        })
    }

    /// Make this the active terminal, returning a view of the previous one.
    pub fn set(&self) -> Result<Option<Screen>> {
        let ptr = self.handle.get()?;
        let old = unsafe { sys::set_term(ptr) };
        log::trace!("set_term({:p}) -> {:p}", ptr, old);
        self.ended.set(false);
        Ok((!old.is_null()).then(|| Screen {
            handle: RawHandle::new(old, "Screen"),
            output: Cell::new(std::ptr::null_mut()),
            input: Cell::new(std::ptr::null_mut()),
            ended: Cell::new(false),
            owned: false,
        }))
    }

    /// Activate this terminal and restore its original mode.
    pub fn end(&self) -> Result<()> {
        let ptr = self.handle.get()?;
        unsafe { sys::set_term(ptr) };
        log::trace!("endwin() on screen {:p}", ptr);
        unsafe { sys::endwin() }.into_result("endwin")?;
        self.ended.set(true);
        Ok(())
    }

    /// Free the screen and close its streams. Call [`end`](Self::end) first.
    pub fn delete(&self) -> Result<()> {
        if !self.owned {
            return Err(Error::InvalidArgument(
                "cannot delete a screen this wrapper did not create".into(),
            ));
        }
        let ptr = self.handle.take()?;
        unsafe {
            sys::delscreen(ptr);
            close_stream(self.output.replace(std::ptr::null_mut()));
            close_stream(self.input.replace(std::ptr::null_mut()));
        }
        log::trace!("delscreen({:p})", ptr);
        Ok(())
    }

    /// Whether this wrapper refers to the same terminal as `other`.
    pub fn same_as(&self, other: &Screen) -> bool {
        !self.handle.is_released() && self.handle.as_ptr() == other.handle.as_ptr()
    }
}

impl Release for Screen {
    /// End (if still running) then delete. The screen is deleted even when
    /// ending it fails; the first error is returned.
    fn release(&self) -> Result<()> {
        let ended = if self.ended.get() { Ok(()) } else { self.end() };
        self.delete()?;
        ended
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("handle", &self.handle)
            .field("ended", &self.ended.get())
            .field("owned", &self.owned)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halfdelay_range_checked() {
        assert!(matches!(halfdelay(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(halfdelay(256), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_config_setters_reject_bad_values() {
        assert!(matches!(set_escdelay(-1), Err(Error::InvalidArgument(_))));
        assert!(matches!(set_tabsize(0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_curses_version_names_library() {
        assert!(curses_version().contains("ncurses"));
    }

    #[test]
    fn test_new_term_rejects_nul_in_terminal_name() {
        let out = tempfile::tempfile().unwrap();
        let inp = tempfile::tempfile().unwrap();
        assert!(matches!(
            Screen::new_term("xt\0erm", &out, &inp),
            Err(Error::InvalidArgument(_))
        ));
    }
}
