//! Raw declarations for the system curses libraries.
//!
//! Everything in here is a direct `extern "C"` mirror of the native headers.
//! The safe wrappers in the rest of the crate are the only callers.

#![allow(non_camel_case_types, non_upper_case_globals, missing_docs)]

pub mod curses;

#[cfg(feature = "panels")]
pub mod panel;

#[cfg(feature = "menu")]
pub mod menu;

#[cfg(feature = "form")]
pub mod form;

pub use curses::*;
#[cfg(feature = "panels")]
pub use panel::*;

#[cfg(feature = "menu")]
pub use menu::*;

#[cfg(feature = "form")]
pub use form::*;
