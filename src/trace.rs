//! Printable renderings of attributes, keys and cells.
//!
//! These back the `Debug` impls of the wrappers and the crate's `log` output.
//!
//! ```rust
//! use ncurses::attr::{A_BOLD, A_UNDERLINE};
//! use ncurses::trace::traceattr;
//!
//! assert_eq!(traceattr(A_BOLD | A_UNDERLINE), "A_UNDERLINE|A_BOLD");
//! ```

use crate::attr::{self, ATTRIBUTE_NAMES};
use crate::types::{AttrT, ChType};

#[cfg(feature = "mouse")]
use crate::mouse::MouseEvent;

/// Attributes as `A_*` names joined by `|`, with any color pair appended.
pub fn traceattr(attrs: AttrT) -> String {
    let mut parts: Vec<String> = ATTRIBUTE_NAMES
        .iter()
        .filter(|(bit, _)| *bit != attr::A_NORMAL && attrs & bit == *bit)
        .map(|(_, name)| format!("A_{}", name.to_ascii_uppercase()))
        .collect();

    let pair = attr::pair_number(attrs);
    if pair != 0 {
        parts.push(format!("COLOR_PAIR({})", pair));
    }

    if parts.is_empty() {
        "A_NORMAL".to_string()
    } else {
        parts.join("|")
    }
}

/// A key code as a quoted character, caret notation, or hex.
pub fn tracechar(ch: i32) -> String {
    if (32..127).contains(&ch) {
        format!("'{}'", ch as u8 as char)
    } else if (0..32).contains(&ch) {
        format!("^{}", (ch + 64) as u8 as char)
    } else if ch == 127 {
        "^?".to_string()
    } else if ch < 0 {
        format!("ERR({})", ch)
    } else {
        format!("\\x{:02X}", ch)
    }
}

/// A cell: its character plus any attributes.
pub fn tracechtype(ch: ChType) -> String {
    let text = attr::chtype_char(ch);
    let attrs = attr::chtype_attr(ch);
    let shown = if text.is_ascii_graphic() || text == b' ' {
        format!("'{}'", text as char)
    } else {
        format!("\\x{:02X}", text)
    };

    if attrs == 0 {
        shown
    } else {
        format!("{} | {}", shown, traceattr(attrs))
    }
}

/// A mouse event with its position and button state.
#[cfg(feature = "mouse")]
pub fn tracemouse(event: &MouseEvent) -> String {
    format!(
        "id {} at ({}, {}, {}) state {:#010x}",
        event.id, event.y, event.x, event.z, event.bstate
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::{color_pair, A_BOLD, A_REVERSE};

    #[test]
    fn test_traceattr() {
        assert_eq!(traceattr(0), "A_NORMAL");
        assert_eq!(traceattr(A_BOLD), "A_BOLD");
        assert_eq!(
            traceattr(A_REVERSE | color_pair(3)),
            "A_REVERSE|COLOR_PAIR(3)"
        );
    }

    #[test]
    fn test_tracechar() {
        assert_eq!(tracechar('a' as i32), "'a'");
        assert_eq!(tracechar(1), "^A");
        assert_eq!(tracechar(127), "^?");
        assert_eq!(tracechar(-1), "ERR(-1)");
        assert_eq!(tracechar(0x102), "\\x102");
    }

    #[test]
    fn test_tracechtype() {
        assert_eq!(tracechtype('H' as ChType), "'H'");
        assert_eq!(tracechtype('H' as ChType | A_BOLD), "'H' | A_BOLD");
    }
}
