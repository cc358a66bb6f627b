//! libpanelw.

use super::curses::WINDOW;
use libc::c_int;

#[repr(C)]
pub struct PANEL {
    _opaque: [u8; 0],
}

#[cfg_attr(target_os = "macos", link(name = "panel"))]
#[cfg_attr(not(target_os = "macos"), link(name = "panelw"))]
unsafe extern "C" {
    pub fn new_panel(win: *mut WINDOW) -> *mut PANEL;
    pub fn del_panel(pan: *mut PANEL) -> c_int;
    pub fn update_panels();
    pub fn panel_above(pan: *const PANEL) -> *mut PANEL;
    pub fn panel_below(pan: *const PANEL) -> *mut PANEL;
    pub fn top_panel(pan: *mut PANEL) -> c_int;
    pub fn bottom_panel(pan: *mut PANEL) -> c_int;
    pub fn hide_panel(pan: *mut PANEL) -> c_int;
    pub fn show_panel(pan: *mut PANEL) -> c_int;
    pub fn panel_hidden(pan: *const PANEL) -> c_int;
    pub fn move_panel(pan: *mut PANEL, starty: c_int, startx: c_int) -> c_int;
    pub fn replace_panel(pan: *mut PANEL, win: *mut WINDOW) -> c_int;
    pub fn panel_window(pan: *const PANEL) -> *mut WINDOW;
}
