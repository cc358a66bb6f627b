//! Error types for the ncurses bindings.
//!
//! Curses and panel calls report failure with the `ERR` sentinel, while the
//! menu and form libraries return one of the `E_*` status codes below. Both are
//! folded into [`Error`] so every wrapper can return a plain [`Result`].

use std::borrow::Cow;

use libc::c_int;

use crate::types::ERR;

/// Result type alias for ncurses operations.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Menu/form status codes
// ============================================================================

/// The routine succeeded.
pub const E_OK: i32 = 0;
/// System error occurred (see `errno`).
pub const E_SYSTEM_ERROR: i32 = -1;
/// Routine detected an incorrect or out-of-range argument.
pub const E_BAD_ARGUMENT: i32 = -2;
/// The menu or form is already posted.
pub const E_POSTED: i32 = -3;
/// The field or item is already connected to another form or menu.
pub const E_CONNECTED: i32 = -4;
/// Routine was called from an initialization or termination hook.
pub const E_BAD_STATE: i32 = -5;
/// Window is too small to hold the menu or form.
pub const E_NO_ROOM: i32 = -6;
/// The menu or form has not been posted.
pub const E_NOT_POSTED: i32 = -7;
/// The driver was passed a request it does not recognize.
pub const E_UNKNOWN_COMMAND: i32 = -8;
/// Character failed to match.
pub const E_NO_MATCH: i32 = -9;
/// The designated item cannot be selected.
pub const E_NOT_SELECTABLE: i32 = -10;
/// No items or fields are connected.
pub const E_NOT_CONNECTED: i32 = -11;
/// The driver could not process the request.
pub const E_REQUEST_DENIED: i32 = -12;
/// Contents of a field are not valid.
pub const E_INVALID_FIELD: i32 = -13;
/// The field is the current field.
pub const E_CURRENT: i32 = -14;

/// Status code to message table.
static STATUS_MESSAGES: &[(i32, &str)] = &[
    (E_SYSTEM_ERROR, "System error occurred"),
    (E_BAD_ARGUMENT, "Incorrect or out-of-range argument"),
    (E_POSTED, "Form has already been posted"),
    (E_CONNECTED, "Field is already connected to a form"),
    (E_BAD_STATE, "Bad state"),
    (E_NO_ROOM, "No room"),
    (E_NOT_POSTED, "Form has not been posted"),
    (E_UNKNOWN_COMMAND, "Unknown command"),
    (E_NO_MATCH, "No match"),
    (E_NOT_SELECTABLE, "Not selectable"),
    (E_NOT_CONNECTED, "Field is not connected to a form"),
    (E_REQUEST_DENIED, "Request denied"),
    (E_INVALID_FIELD, "Invalid field"),
    (E_CURRENT, "Current"),
];

/// Look up the human-readable message for a status code.
///
/// Codes outside the table produce a generic message carrying the raw value.
pub fn status_message(code: i32) -> Cow<'static, str> {
    STATUS_MESSAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, msg)| Cow::Borrowed(*msg))
        .unwrap_or_else(|| Cow::Owned(format!("operation failed (status {})", code)))
}

fn describe(code: &i32) -> Cow<'static, str> {
    status_message(*code)
}

/// Error types that can occur in ncurses operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The terminal could not be initialized.
    #[error("terminal initialization failed: {0}")]
    Init(String),

    /// A curses routine returned `ERR`.
    #[error("{call} failed")]
    Failed {
        /// Name of the native routine.
        call: &'static str,
    },

    /// A menu or form routine returned a status other than `E_OK`.
    #[error("{call}: {}", describe(.code))]
    Status {
        /// Name of the native routine.
        call: &'static str,
        /// The raw `E_*` status code.
        code: i32,
    },

    /// A routine that returns a handle returned null.
    #[error("{call} returned no handle")]
    NullHandle {
        /// Name of the native routine.
        call: &'static str,
    },

    /// An argument was rejected before reaching the native library.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A handle was used after it was deleted or freed.
    #[error("{0} used after it was released")]
    Released(&'static str),

    /// Color support was requested on a terminal without colors.
    #[error("terminal does not support color")]
    NoColors,
}

impl Error {
    /// The raw menu/form status code, if this error carries one.
    pub fn status(&self) -> Option<i32> {
        match self {
            Error::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<std::ffi::NulError> for Error {
    fn from(err: std::ffi::NulError) -> Self {
        Error::InvalidArgument(format!("string contains NUL at byte {}", err.nul_position()))
    }
}

/// Trait for converting native return values to Result.
pub trait IntoResult {
    /// The success type.
    type Output;

    /// Convert to a Result, naming the native routine in the error.
    fn into_result(self, call: &'static str) -> Result<Self::Output>;
}

impl IntoResult for c_int {
    type Output = ();

    fn into_result(self, call: &'static str) -> Result<Self::Output> {
        if self == ERR {
            log::debug!("{} returned ERR", call);
            Err(Error::Failed { call })
        } else {
            Ok(())
        }
    }
}

impl<T> IntoResult for *mut T {
    type Output = *mut T;

    fn into_result(self, call: &'static str) -> Result<Self::Output> {
        if self.is_null() {
            log::debug!("{} returned NULL", call);
            Err(Error::NullHandle { call })
        } else {
            Ok(self)
        }
    }
}

/// Check an `E_*` status returned by a menu or form routine.
#[cfg_attr(not(any(feature = "menu", feature = "form")), allow(dead_code))]
pub(crate) fn check_status(call: &'static str, code: c_int) -> Result<()> {
    if code == E_OK {
        Ok(())
    } else {
        log::debug!("{} returned status {} ({})", call, code, status_message(code));
        Err(Error::Status { call, code })
    }
}

/// Check a handle returned by a constructor that reports failure via `errno`.
#[cfg(any(feature = "menu", feature = "form"))]
pub(crate) fn check_errno<T>(call: &'static str, ptr: *mut T) -> Result<*mut T> {
    if ptr.is_null() {
        let code = std::io::Error::last_os_error()
            .raw_os_error()
            .unwrap_or(E_SYSTEM_ERROR);
        // errno holds an E_* code only when the library set it
        let code = if (E_CURRENT..=E_SYSTEM_ERROR).contains(&code) {
            code
        } else {
            E_SYSTEM_ERROR
        };
        check_status(call, code)?;
        Err(Error::NullHandle { call })
    } else {
        Ok(ptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_messages() {
        assert_eq!(status_message(E_NO_ROOM), "No room");
        assert_eq!(status_message(E_POSTED), "Form has already been posted");
        assert_eq!(status_message(E_UNKNOWN_COMMAND), "Unknown command");
        assert_eq!(status_message(E_CURRENT), "Current");
    }

    #[test]
    fn test_unknown_status_falls_back() {
        assert_eq!(status_message(-99), "operation failed (status -99)");
        assert_eq!(status_message(7), "operation failed (status 7)");
    }

    #[test]
    fn test_status_display() {
        let err = Error::Status {
            call: "post_menu",
            code: E_NOT_CONNECTED,
        };
        assert_eq!(err.to_string(), "post_menu: Field is not connected to a form");
        assert_eq!(err.status(), Some(E_NOT_CONNECTED));
    }

    #[test]
    fn test_err_sentinel() {
        assert!(ERR.into_result("wmove").is_err());
        assert!(0i32.into_result("wmove").is_ok());
        assert_eq!(
            ERR.into_result("wmove").unwrap_err(),
            Error::Failed { call: "wmove" }
        );
    }

    #[test]
    fn test_null_pointer() {
        let p: *mut u8 = std::ptr::null_mut();
        assert_eq!(
            p.into_result("newwin").unwrap_err(),
            Error::NullHandle { call: "newwin" }
        );
    }

    #[test]
    fn test_check_status() {
        assert!(check_status("menu_driver", E_OK).is_ok());
        let err = check_status("menu_driver", E_REQUEST_DENIED).unwrap_err();
        assert_eq!(err.to_string(), "menu_driver: Request denied");
    }

    #[test]
    fn test_nul_error_conversion() {
        let err: Error = std::ffi::CString::new("a\0b").unwrap_err().into();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
