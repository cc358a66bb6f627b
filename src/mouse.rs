//! Mouse support.
//!
//! Select events with [`mouse_mask`]; when one occurs
//! [`Window::get_char`](crate::Window::get_char) returns
//! [`KEY_MOUSE`](crate::key::KEY_MOUSE) and [`get_mouse`] pops the event.
//! Masks follow the version 2 mouse layout of ncurses 6: five bits per
//! button, modifiers above button 5.

use crate::error::{IntoResult, Result};
use crate::sys;
use crate::trace::tracemouse;
use crate::types::MmaskT;

/// Shift `bits` into the slot for `button` (1-6).
#[inline]
pub const fn button_mask(button: u32, bits: MmaskT) -> MmaskT {
    bits << ((button - 1) * 5)
}

const RELEASED: MmaskT = 0o1;
const PRESSED: MmaskT = 0o2;
const CLICKED: MmaskT = 0o4;
const DOUBLE_CLICKED: MmaskT = 0o10;
const TRIPLE_CLICKED: MmaskT = 0o20;

// ============================================================================
// Mouse button masks
// ============================================================================

/// Mouse button 1 released.
pub const BUTTON1_RELEASED: MmaskT = button_mask(1, RELEASED);
/// Mouse button 1 pressed.
pub const BUTTON1_PRESSED: MmaskT = button_mask(1, PRESSED);
/// Mouse button 1 clicked.
pub const BUTTON1_CLICKED: MmaskT = button_mask(1, CLICKED);
/// Mouse button 1 double-clicked.
pub const BUTTON1_DOUBLE_CLICKED: MmaskT = button_mask(1, DOUBLE_CLICKED);
/// Mouse button 1 triple-clicked.
pub const BUTTON1_TRIPLE_CLICKED: MmaskT = button_mask(1, TRIPLE_CLICKED);

/// Mouse button 2 released.
pub const BUTTON2_RELEASED: MmaskT = button_mask(2, RELEASED);
/// Mouse button 2 pressed.
pub const BUTTON2_PRESSED: MmaskT = button_mask(2, PRESSED);
/// Mouse button 2 clicked.
pub const BUTTON2_CLICKED: MmaskT = button_mask(2, CLICKED);
/// Mouse button 2 double-clicked.
pub const BUTTON2_DOUBLE_CLICKED: MmaskT = button_mask(2, DOUBLE_CLICKED);
/// Mouse button 2 triple-clicked.
pub const BUTTON2_TRIPLE_CLICKED: MmaskT = button_mask(2, TRIPLE_CLICKED);

/// Mouse button 3 released.
pub const BUTTON3_RELEASED: MmaskT = button_mask(3, RELEASED);
/// Mouse button 3 pressed.
pub const BUTTON3_PRESSED: MmaskT = button_mask(3, PRESSED);
/// Mouse button 3 clicked.
pub const BUTTON3_CLICKED: MmaskT = button_mask(3, CLICKED);
/// Mouse button 3 double-clicked.
pub const BUTTON3_DOUBLE_CLICKED: MmaskT = button_mask(3, DOUBLE_CLICKED);
/// Mouse button 3 triple-clicked.
pub const BUTTON3_TRIPLE_CLICKED: MmaskT = button_mask(3, TRIPLE_CLICKED);

/// Mouse button 4 released.
pub const BUTTON4_RELEASED: MmaskT = button_mask(4, RELEASED);
/// Mouse button 4 pressed (scroll up on most terminals).
pub const BUTTON4_PRESSED: MmaskT = button_mask(4, PRESSED);
/// Mouse button 4 clicked.
pub const BUTTON4_CLICKED: MmaskT = button_mask(4, CLICKED);
/// Mouse button 4 double-clicked.
pub const BUTTON4_DOUBLE_CLICKED: MmaskT = button_mask(4, DOUBLE_CLICKED);
/// Mouse button 4 triple-clicked.
pub const BUTTON4_TRIPLE_CLICKED: MmaskT = button_mask(4, TRIPLE_CLICKED);

/// Mouse button 5 released.
pub const BUTTON5_RELEASED: MmaskT = button_mask(5, RELEASED);
/// Mouse button 5 pressed (scroll down on most terminals).
pub const BUTTON5_PRESSED: MmaskT = button_mask(5, PRESSED);
/// Mouse button 5 clicked.
pub const BUTTON5_CLICKED: MmaskT = button_mask(5, CLICKED);
/// Mouse button 5 double-clicked.
pub const BUTTON5_DOUBLE_CLICKED: MmaskT = button_mask(5, DOUBLE_CLICKED);
/// Mouse button 5 triple-clicked.
pub const BUTTON5_TRIPLE_CLICKED: MmaskT = button_mask(5, TRIPLE_CLICKED);

/// Ctrl was held during the event.
pub const BUTTON_CTRL: MmaskT = button_mask(6, 0o1);
/// Shift was held during the event.
pub const BUTTON_SHIFT: MmaskT = button_mask(6, 0o2);
/// Alt was held during the event.
pub const BUTTON_ALT: MmaskT = button_mask(6, 0o4);
/// Report mouse movement.
pub const REPORT_MOUSE_POSITION: MmaskT = button_mask(6, 0o10);

/// Every button event and modifier (movement excluded).
pub const ALL_MOUSE_EVENTS: MmaskT = REPORT_MOUSE_POSITION - 1;

/// Mask names accepted by [`mask_from_names`].
static MASK_NAMES: &[(&str, MmaskT)] = &[
    ("button1-pressed", BUTTON1_PRESSED),
    ("button1-released", BUTTON1_RELEASED),
    ("button1-clicked", BUTTON1_CLICKED),
    ("button1-double-clicked", BUTTON1_DOUBLE_CLICKED),
    ("button1-triple-clicked", BUTTON1_TRIPLE_CLICKED),
    ("button2-pressed", BUTTON2_PRESSED),
    ("button2-released", BUTTON2_RELEASED),
    ("button2-clicked", BUTTON2_CLICKED),
    ("button2-double-clicked", BUTTON2_DOUBLE_CLICKED),
    ("button2-triple-clicked", BUTTON2_TRIPLE_CLICKED),
    ("button3-pressed", BUTTON3_PRESSED),
    ("button3-released", BUTTON3_RELEASED),
    ("button3-clicked", BUTTON3_CLICKED),
    ("button3-double-clicked", BUTTON3_DOUBLE_CLICKED),
    ("button3-triple-clicked", BUTTON3_TRIPLE_CLICKED),
    ("button4-pressed", BUTTON4_PRESSED),
    ("button4-released", BUTTON4_RELEASED),
    ("button4-clicked", BUTTON4_CLICKED),
    ("button4-double-clicked", BUTTON4_DOUBLE_CLICKED),
    ("button4-triple-clicked", BUTTON4_TRIPLE_CLICKED),
    ("button5-pressed", BUTTON5_PRESSED),
    ("button5-released", BUTTON5_RELEASED),
    ("button5-clicked", BUTTON5_CLICKED),
    ("button5-double-clicked", BUTTON5_DOUBLE_CLICKED),
    ("button5-triple-clicked", BUTTON5_TRIPLE_CLICKED),
    ("shift", BUTTON_SHIFT),
    ("ctrl", BUTTON_CTRL),
    ("alt", BUTTON_ALT),
    ("all", ALL_MOUSE_EVENTS),
    ("position", REPORT_MOUSE_POSITION),
];

/// OR together the masks for a list of names such as `"button1-clicked"`.
///
/// Returns `None` if any name is unknown.
pub fn mask_from_names<'a, I>(names: I) -> Option<MmaskT>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().try_fold(0, |acc, name| {
        MASK_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, m)| acc | m)
    })
}

// ============================================================================
// Mouse event structure
// ============================================================================

/// A mouse event popped from the native queue.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseEvent {
    /// Device id, to tell multiple mice apart.
    pub id: i16,
    /// Screen column.
    pub x: i32,
    /// Screen row.
    pub y: i32,
    /// Unused by ncurses, kept for the native layout.
    pub z: i32,
    /// Button state mask.
    pub bstate: MmaskT,
}

impl MouseEvent {
    /// Check if any of the bits in `mask` are set.
    pub fn has_button(&self, mask: MmaskT) -> bool {
        (self.bstate & mask) != 0
    }

    /// Button `n` (1-5) was pressed.
    pub fn pressed(&self, button: u32) -> bool {
        (1..=5).contains(&button) && self.has_button(button_mask(button, PRESSED))
    }

    /// Button `n` (1-5) was released.
    pub fn released(&self, button: u32) -> bool {
        (1..=5).contains(&button) && self.has_button(button_mask(button, RELEASED))
    }

    /// Button `n` (1-5) was clicked once, twice or three times.
    pub fn clicked(&self, button: u32) -> bool {
        (1..=5).contains(&button)
            && self.has_button(button_mask(
                button,
                CLICKED | DOUBLE_CLICKED | TRIPLE_CLICKED,
            ))
    }
}

impl From<sys::MEVENT> for MouseEvent {
    fn from(ev: sys::MEVENT) -> Self {
        Self {
            id: ev.id,
            x: ev.x,
            y: ev.y,
            z: ev.z,
            bstate: ev.bstate,
        }
    }
}

impl From<MouseEvent> for sys::MEVENT {
    fn from(ev: MouseEvent) -> Self {
        Self {
            id: ev.id,
            x: ev.x,
            y: ev.y,
            z: ev.z,
            bstate: ev.bstate,
        }
    }
}

// ============================================================================
// Native mouse calls
// ============================================================================

/// Select which mouse events are reported.
///
/// Returns `(applied, previous)`: the subset of `mask` the terminal can
/// report, and the mask in effect before the call. An applied mask of 0
/// means mouse reporting is unavailable.
pub fn mouse_mask(mask: MmaskT) -> (MmaskT, MmaskT) {
    let mut old: MmaskT = 0;
    let applied = unsafe { sys::mousemask(mask, &mut old) };
    log::trace!("mousemask({:#x}) -> {:#x}, was {:#x}", mask, applied, old);
    (applied, old)
}

/// Pop the pending mouse event after `get_char` returned `KEY_MOUSE`.
pub fn get_mouse() -> Result<MouseEvent> {
    let mut ev = sys::MEVENT::default();
    unsafe { sys::getmouse(&mut ev) }.into_result("getmouse")?;
    let event = MouseEvent::from(ev);
    log::trace!("getmouse() -> {}", tracemouse(&event));
    Ok(event)
}

/// Push an event back onto the queue; the next read returns `KEY_MOUSE`.
pub fn unget_mouse(event: MouseEvent) -> Result<()> {
    let mut ev = sys::MEVENT::from(event);
    unsafe { sys::ungetmouse(&mut ev) }.into_result("ungetmouse")
}

/// Set the press/release interval for click resolution, in milliseconds.
///
/// Returns the previous interval. Pass -1 to query without changing it.
pub fn mouse_interval(ms: i32) -> i32 {
    unsafe { sys::mouseinterval(ms) }
}

/// Whether a mouse driver was successfully initialized.
pub fn has_mouse() -> bool {
    unsafe { sys::has_mouse() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_match_native_layout() {
        assert_eq!(BUTTON1_RELEASED, 0x1);
        assert_eq!(BUTTON1_PRESSED, 0x2);
        assert_eq!(BUTTON2_PRESSED, 0x40);
        assert_eq!(BUTTON3_CLICKED, 0x1000);
        assert_eq!(BUTTON4_PRESSED, 0x10000);
        assert_eq!(BUTTON5_PRESSED, 0x200000);
        assert_eq!(BUTTON_CTRL, 0x0200_0000);
        assert_eq!(BUTTON_SHIFT, 0x0400_0000);
        assert_eq!(BUTTON_ALT, 0x0800_0000);
        assert_eq!(REPORT_MOUSE_POSITION, 0x1000_0000);
        assert_eq!(ALL_MOUSE_EVENTS, 0x0FFF_FFFF);
    }

    #[test]
    fn test_event_queries() {
        let ev = MouseEvent {
            bstate: BUTTON1_DOUBLE_CLICKED | BUTTON3_PRESSED,
            ..Default::default()
        };
        assert!(ev.clicked(1));
        assert!(ev.pressed(3));
        assert!(!ev.released(3));
        assert!(!ev.clicked(7));
    }

    #[test]
    fn test_mask_from_names() {
        assert_eq!(
            mask_from_names(["button1-clicked", "ctrl"]),
            Some(BUTTON1_CLICKED | BUTTON_CTRL)
        );
        assert_eq!(mask_from_names(["button9-clicked"]), None);
        assert_eq!(mask_from_names(Vec::<&str>::new()), Some(0));
    }
}
