//! # ncurses-bind
//!
//! Typed bindings to the system ncurses library and its panel, menu and form
//! companions.
//!
//! Native handles become wrapper types ([`Window`], [`Pad`], [`Screen`],
//! [`panels::Panel`], [`menu::Menu`], [`form::Form`], ...), `ERR` and `E_*`
//! status codes become [`Error`] values, and macro-based C calls become
//! plain methods. Rendering, terminfo handling and input decoding stay in the
//! native library.
//!
//! ## Features
//!
//! - **mouse**: Mouse event handling
//! - **slk**: Soft function key labels
//! - **panels**: Panels library for window stacking (links `panelw`)
//! - **menu**: Menu library for selection interfaces (links `menuw`)
//! - **form**: Form library for data entry (links `formw`)
//!
//! ## Handle lifetimes
//!
//! Nothing is freed on drop. Every `new` has a matching `delete` or `free`,
//! and using a wrapper after it was released returns [`Error::Released`].
//! Wrap a handle in [`Scoped`] to release it when a block exits.
//!
//! The library is not thread-safe; the wrappers are neither `Send` nor `Sync`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ncurses::*;
//!
//! fn main() -> Result<()> {
//!     let stdscr = init()?;
//!     cbreak(true)?;
//!     echo(false)?;
//!
//!     if has_colors() {
//!         start_color()?;
//!         init_pair(1, COLOR_RED, COLOR_BLACK)?;
//!     }
//!
//!     let win = Scoped::new(Window::new(5, 20, 2, 2)?);
//!     win.box_(0, 0)?;
//!     win.color_on(1)?;
//!     win.move_print(1, 1, "Hello, ncurses!")?;
//!     win.color_off(1)?;
//!
//!     stdscr.nout_refresh()?;
//!     win.nout_refresh()?;
//!     update()?;
//!
//!     win.get_char()?;
//!     win.finish()?;
//!     end()
//! }
//! ```

#![allow(clippy::needless_doctest_main)]
#![warn(missing_docs)]

pub mod acs;
pub mod attr;
pub mod color;
pub mod error;
pub mod handle;
pub mod key;
pub mod pad;
pub mod screen;
pub mod sys;
pub mod trace;
pub mod types;
pub mod window;

#[cfg(feature = "mouse")]
pub mod mouse;

#[cfg(feature = "slk")]
pub mod slk;

#[cfg(feature = "panels")]
pub mod panels;

#[cfg(feature = "menu")]
pub mod menu;

#[cfg(feature = "form")]
pub mod form;

// Re-export commonly used items at crate root
pub use acs::*;
pub use attr::*;
pub use color::*;
pub use error::{Error, Result};
pub use handle::{Release, Scoped};
pub use key::*;
pub use pad::Pad;
pub use screen::*;
pub use types::*;
pub use window::Window;

#[cfg(feature = "mouse")]
pub use mouse::*;

#[cfg(feature = "slk")]
pub use slk::*;

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
