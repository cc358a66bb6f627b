//! Key codes.
//!
//! Codes returned by [`Window::get_char`](crate::Window::get_char) for
//! special keys. Values equal the `KEY_*` macros of the native header.

use std::ffi::CStr;

use crate::sys;

/// Tab key.
pub const KEY_TAB: i32 = 9;

/// Return key, as distinct from the keypad [`KEY_ENTER`].
pub const KEY_RETURN: i32 = 10;

/// Indicates that a wchar_t contains a key code (not a character).
pub const KEY_CODE_YES: i32 = 0o400;

/// Minimum curses key value.
pub const KEY_MIN: i32 = 0o401;

/// Break key (unreliable).
pub const KEY_BREAK: i32 = 0o401;

/// Down arrow key.
pub const KEY_DOWN: i32 = 0o402;

/// Up arrow key.
pub const KEY_UP: i32 = 0o403;

/// Left arrow key.
pub const KEY_LEFT: i32 = 0o404;

/// Right arrow key.
pub const KEY_RIGHT: i32 = 0o405;

/// Home key.
pub const KEY_HOME: i32 = 0o406;

/// Backspace key.
pub const KEY_BACKSPACE: i32 = 0o407;

/// Function key F0.
pub const KEY_F0: i32 = 0o410;

/// Function key F(n), the `KEY_F(n)` macro.
#[inline]
pub const fn key_f(n: i32) -> i32 {
    KEY_F0 + n
}

/// Delete line key.
pub const KEY_DL: i32 = 0o510;

/// Insert line key.
pub const KEY_IL: i32 = 0o511;

/// Delete character key.
pub const KEY_DC: i32 = 0o512;

/// Insert character key (enter insert mode).
pub const KEY_IC: i32 = 0o513;

/// Exit insert char mode key.
pub const KEY_EIC: i32 = 0o514;

/// Clear screen key.
pub const KEY_CLEAR: i32 = 0o515;

/// Clear to end of screen key.
pub const KEY_EOS: i32 = 0o516;

/// Clear to end of line key.
pub const KEY_EOL: i32 = 0o517;

/// Scroll forward key.
pub const KEY_SF: i32 = 0o520;

/// Scroll reverse key.
pub const KEY_SR: i32 = 0o521;

/// Next page key (Page Down).
pub const KEY_NPAGE: i32 = 0o522;

/// Previous page key (Page Up).
pub const KEY_PPAGE: i32 = 0o523;

/// Set tab key.
pub const KEY_STAB: i32 = 0o524;

/// Clear tab key.
pub const KEY_CTAB: i32 = 0o525;

/// Clear all tabs key.
pub const KEY_CATAB: i32 = 0o526;

/// Enter/send key.
pub const KEY_ENTER: i32 = 0o527;

/// Soft (partial) reset (unreliable).
pub const KEY_SRESET: i32 = 0o530;

/// Reset or hard reset (unreliable).
pub const KEY_RESET: i32 = 0o531;

/// Print key.
pub const KEY_PRINT: i32 = 0o532;

/// Lower-left key (home down).
pub const KEY_LL: i32 = 0o533;

/// Upper left of keypad.
pub const KEY_A1: i32 = 0o534;

/// Upper right of keypad.
pub const KEY_A3: i32 = 0o535;

/// Center of keypad.
pub const KEY_B2: i32 = 0o536;

/// Lower left of keypad.
pub const KEY_C1: i32 = 0o537;

/// Lower right of keypad.
pub const KEY_C3: i32 = 0o540;

/// Back tab key.
pub const KEY_BTAB: i32 = 0o541;

/// Beginning key.
pub const KEY_BEG: i32 = 0o542;

/// Cancel key.
pub const KEY_CANCEL: i32 = 0o543;

/// Close key.
pub const KEY_CLOSE: i32 = 0o544;

/// Command key.
pub const KEY_COMMAND: i32 = 0o545;

/// Copy key.
pub const KEY_COPY: i32 = 0o546;

/// Create key.
pub const KEY_CREATE: i32 = 0o547;

/// End key.
pub const KEY_END: i32 = 0o550;

/// Exit key.
pub const KEY_EXIT: i32 = 0o551;

/// Find key.
pub const KEY_FIND: i32 = 0o552;

/// Help key.
pub const KEY_HELP: i32 = 0o553;

/// Mark key.
pub const KEY_MARK: i32 = 0o554;

/// Message key.
pub const KEY_MESSAGE: i32 = 0o555;

/// Move key.
pub const KEY_MOVE: i32 = 0o556;

/// Next key.
pub const KEY_NEXT: i32 = 0o557;

/// Open key.
pub const KEY_OPEN: i32 = 0o560;

/// Options key.
pub const KEY_OPTIONS: i32 = 0o561;

/// Previous key.
pub const KEY_PREVIOUS: i32 = 0o562;

/// Redo key.
pub const KEY_REDO: i32 = 0o563;

/// Reference key.
pub const KEY_REFERENCE: i32 = 0o564;

/// Refresh key.
pub const KEY_REFRESH: i32 = 0o565;

/// Replace key.
pub const KEY_REPLACE: i32 = 0o566;

/// Restart key.
pub const KEY_RESTART: i32 = 0o567;

/// Resume key.
pub const KEY_RESUME: i32 = 0o570;

/// Save key.
pub const KEY_SAVE: i32 = 0o571;

/// Shifted beginning key.
pub const KEY_SBEG: i32 = 0o572;

/// Shifted cancel key.
pub const KEY_SCANCEL: i32 = 0o573;

/// Shifted command key.
pub const KEY_SCOMMAND: i32 = 0o574;

/// Shifted copy key.
pub const KEY_SCOPY: i32 = 0o575;

/// Shifted create key.
pub const KEY_SCREATE: i32 = 0o576;

/// Shifted delete character key.
pub const KEY_SDC: i32 = 0o577;

/// Shifted delete line key.
pub const KEY_SDL: i32 = 0o600;

/// Select key.
pub const KEY_SELECT: i32 = 0o601;

/// Shifted end key.
pub const KEY_SEND: i32 = 0o602;

/// Shifted clear-to-end-of-line key.
pub const KEY_SEOL: i32 = 0o603;

/// Shifted exit key.
pub const KEY_SEXIT: i32 = 0o604;

/// Shifted find key.
pub const KEY_SFIND: i32 = 0o605;

/// Shifted help key.
pub const KEY_SHELP: i32 = 0o606;

/// Shifted home key.
pub const KEY_SHOME: i32 = 0o607;

/// Shifted insert character key.
pub const KEY_SIC: i32 = 0o610;

/// Shifted left arrow key.
pub const KEY_SLEFT: i32 = 0o611;

/// Shifted message key.
pub const KEY_SMESSAGE: i32 = 0o612;

/// Shifted move key.
pub const KEY_SMOVE: i32 = 0o613;

/// Shifted next key.
pub const KEY_SNEXT: i32 = 0o614;

/// Shifted options key.
pub const KEY_SOPTIONS: i32 = 0o615;

/// Shifted previous key.
pub const KEY_SPREVIOUS: i32 = 0o616;

/// Shifted print key.
pub const KEY_SPRINT: i32 = 0o617;

/// Shifted redo key.
pub const KEY_SREDO: i32 = 0o620;

/// Shifted replace key.
pub const KEY_SREPLACE: i32 = 0o621;

/// Shifted right arrow key.
pub const KEY_SRIGHT: i32 = 0o622;

/// Shifted resume key.
pub const KEY_SRSUME: i32 = 0o623;

/// Shifted save key.
pub const KEY_SSAVE: i32 = 0o624;

/// Shifted suspend key.
pub const KEY_SSUSPEND: i32 = 0o625;

/// Shifted undo key.
pub const KEY_SUNDO: i32 = 0o626;

/// Suspend key.
pub const KEY_SUSPEND: i32 = 0o627;

/// Undo key.
pub const KEY_UNDO: i32 = 0o630;

/// Mouse event (ncurses extension).
pub const KEY_MOUSE: i32 = 0o631;

/// Terminal resize event (ncurses extension).
pub const KEY_RESIZE: i32 = 0o632;

/// Event from an external source (ncurses extension).
pub const KEY_EVENT: i32 = 0o633;

/// Maximum key value.
pub const KEY_MAX: i32 = 0o777;

/// Key enumeration for type-safe key handling.
/// Page down, alias of [`KEY_NPAGE`].
pub const KEY_PAGEDOWN: i32 = KEY_NPAGE;

/// Page up, alias of [`KEY_PPAGE`].
pub const KEY_PAGEUP: i32 = KEY_PPAGE;

/// Function key F1.
pub const KEY_F1: i32 = key_f(1);
/// Function key F2.
pub const KEY_F2: i32 = key_f(2);
/// Function key F3.
pub const KEY_F3: i32 = key_f(3);
/// Function key F4.
pub const KEY_F4: i32 = key_f(4);
/// Function key F5.
pub const KEY_F5: i32 = key_f(5);
/// Function key F6.
pub const KEY_F6: i32 = key_f(6);
/// Function key F7.
pub const KEY_F7: i32 = key_f(7);
/// Function key F8.
pub const KEY_F8: i32 = key_f(8);
/// Function key F9.
pub const KEY_F9: i32 = key_f(9);
/// Function key F10.
pub const KEY_F10: i32 = key_f(10);
/// Function key F11.
pub const KEY_F11: i32 = key_f(11);
/// Function key F12.
pub const KEY_F12: i32 = key_f(12);

/// Decoded key, for matching on input without raw codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A regular character.
    Char(char),
    /// Down arrow.
    Down,
    /// Up arrow.
    Up,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Backspace.
    Backspace,
    /// Delete character.
    Delete,
    /// Insert character.
    Insert,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Enter/Return.
    Enter,
    /// Tab.
    Tab,
    /// Back-tab (Shift+Tab).
    BackTab,
    /// Escape.
    Escape,
    /// Function key (0-63).
    F(u8),
    /// Mouse event, read it with [`get_mouse`](crate::mouse::get_mouse).
    Mouse,
    /// Terminal resize.
    Resize,
    /// Any other code.
    Unknown(i32),
}

impl Key {
    /// Convert from a raw key code.
    pub fn from_code(code: i32) -> Self {
        match code {
            KEY_TAB => Key::Tab,
            KEY_RETURN | 13 => Key::Enter,
            27 => Key::Escape,
            127 => Key::Backspace,
            32..=126 | 128..=255 => Key::Char(code as u8 as char),
            KEY_DOWN => Key::Down,
            KEY_UP => Key::Up,
            KEY_LEFT => Key::Left,
            KEY_RIGHT => Key::Right,
            KEY_HOME => Key::Home,
            KEY_END => Key::End,
            KEY_BACKSPACE => Key::Backspace,
            KEY_DC => Key::Delete,
            KEY_IC => Key::Insert,
            KEY_PPAGE => Key::PageUp,
            KEY_NPAGE => Key::PageDown,
            KEY_ENTER => Key::Enter,
            KEY_BTAB => Key::BackTab,
            KEY_MOUSE => Key::Mouse,
            KEY_RESIZE => Key::Resize,
            k if (KEY_F0..KEY_F0 + 64).contains(&k) => Key::F((k - KEY_F0) as u8),
            _ => Key::Unknown(code),
        }
    }

    /// Convert to a raw key code.
    pub fn to_code(self) -> i32 {
        match self {
            Key::Char(c) => c as i32,
            Key::Down => KEY_DOWN,
            Key::Up => KEY_UP,
            Key::Left => KEY_LEFT,
            Key::Right => KEY_RIGHT,
            Key::Home => KEY_HOME,
            Key::End => KEY_END,
            Key::Backspace => KEY_BACKSPACE,
            Key::Delete => KEY_DC,
            Key::Insert => KEY_IC,
            Key::PageUp => KEY_PPAGE,
            Key::PageDown => KEY_NPAGE,
            Key::Enter => KEY_ENTER,
            Key::Tab => KEY_TAB,
            Key::BackTab => KEY_BTAB,
            Key::Escape => 27,
            Key::F(n) => key_f(n as i32),
            Key::Mouse => KEY_MOUSE,
            Key::Resize => KEY_RESIZE,
            Key::Unknown(code) => code,
        }
    }
}

impl From<i32> for Key {
    fn from(code: i32) -> Self {
        Key::from_code(code)
    }
}

impl From<Key> for i32 {
    fn from(key: Key) -> Self {
        key.to_code()
    }
}

// ============================================================================
// Key names
// ============================================================================

/// Friendly names for common keys.
static KEY_NAMES: &[(i32, &str)] = &[
    (KEY_TAB, "tab"),
    (KEY_RETURN, "enter"),
    (KEY_ENTER, "enter"),
    (KEY_DOWN, "down"),
    (KEY_UP, "up"),
    (KEY_LEFT, "left"),
    (KEY_RIGHT, "right"),
    (KEY_HOME, "home"),
    (KEY_BACKSPACE, "backspace"),
    (KEY_F1, "F1"),
    (KEY_F2, "F2"),
    (KEY_F3, "F3"),
    (KEY_F4, "F4"),
    (KEY_F5, "F5"),
    (KEY_F6, "F6"),
    (KEY_F7, "F7"),
    (KEY_F8, "F8"),
    (KEY_F9, "F9"),
    (KEY_F10, "F10"),
    (KEY_F11, "F11"),
    (KEY_F12, "F12"),
    (KEY_MOUSE, "mouse"),
    (KEY_PAGEUP, "page up"),
    (KEY_PAGEDOWN, "page down"),
];

/// A short human-readable name for a key code.
///
/// Common keys get a friendly name (`"down"`, `"page up"`, `"F5"`); any
/// other code is rendered as the character it encodes.
pub fn key_string(code: i32) -> String {
    KEY_NAMES
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| {
            u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default()
        })
}

/// The native name of a key code, e.g. `"KEY_LEFT"` or `"^C"`.
pub fn keyname(code: i32) -> Option<String> {
    let name = unsafe { sys::keyname(code) };
    if name.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned())
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&key_string(self.to_code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes_match_native_names() {
        let named = [
            (KEY_DOWN, "KEY_DOWN"),
            (KEY_UP, "KEY_UP"),
            (KEY_HOME, "KEY_HOME"),
            (KEY_BACKSPACE, "KEY_BACKSPACE"),
            (KEY_F0, "KEY_F(0)"),
            (KEY_F12, "KEY_F(12)"),
            (KEY_DC, "KEY_DC"),
            (KEY_NPAGE, "KEY_NPAGE"),
            (KEY_PPAGE, "KEY_PPAGE"),
            (KEY_ENTER, "KEY_ENTER"),
            (KEY_BTAB, "KEY_BTAB"),
            (KEY_END, "KEY_END"),
            (KEY_MOUSE, "KEY_MOUSE"),
            (KEY_RESIZE, "KEY_RESIZE"),
        ];
        for (code, name) in named {
            assert_eq!(keyname(code).as_deref(), Some(name), "code {:#o}", code);
        }
        assert_eq!(KEY_MAX, 0o777);
    }

    #[test]
    fn test_key_enum() {
        assert_eq!(Key::from_code(KEY_UP), Key::Up);
        assert_eq!(Key::from_code(KEY_F5), Key::F(5));
        assert_eq!(Key::from_code(65), Key::Char('A'));
        assert_eq!(Key::from_code(KEY_RETURN), Key::Enter);
        assert_eq!(Key::F(1).to_code(), KEY_F1);
        assert_eq!(Key::Tab.to_code(), KEY_TAB);
    }

    #[test]
    fn test_key_string() {
        assert_eq!(key_string(KEY_PAGEUP), "page up");
        assert_eq!(key_string(KEY_F12), "F12");
        assert_eq!(key_string(KEY_RETURN), "enter");
        assert_eq!(key_string('q' as i32), "q");
        assert_eq!(Key::Down.to_string(), "down");
    }
}
