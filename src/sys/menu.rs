//! libmenuw.

use super::curses::{chtype, WINDOW};
use libc::{c_char, c_int};

#[repr(C)]
pub struct ITEM {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct MENU {
    _opaque: [u8; 0],
}

pub type Menu_Options = c_int;
pub type Item_Options = c_int;

#[cfg_attr(target_os = "macos", link(name = "menu"))]
#[cfg_attr(not(target_os = "macos"), link(name = "menuw"))]
unsafe extern "C" {
    // items
    pub fn new_item(name: *const c_char, description: *const c_char) -> *mut ITEM;
    pub fn free_item(item: *mut ITEM) -> c_int;
    pub fn item_name(item: *const ITEM) -> *const c_char;
    pub fn item_description(item: *const ITEM) -> *const c_char;
    pub fn item_index(item: *const ITEM) -> c_int;
    pub fn item_value(item: *const ITEM) -> bool;
    pub fn set_item_value(item: *mut ITEM, value: bool) -> c_int;
    pub fn item_visible(item: *const ITEM) -> bool;
    pub fn item_opts(item: *const ITEM) -> Item_Options;
    pub fn set_item_opts(item: *mut ITEM, opts: Item_Options) -> c_int;
    pub fn item_opts_on(item: *mut ITEM, opts: Item_Options) -> c_int;
    pub fn item_opts_off(item: *mut ITEM, opts: Item_Options) -> c_int;

    // menus
    pub fn new_menu(items: *mut *mut ITEM) -> *mut MENU;
    pub fn free_menu(menu: *mut MENU) -> c_int;
    pub fn post_menu(menu: *mut MENU) -> c_int;
    pub fn unpost_menu(menu: *mut MENU) -> c_int;
    pub fn menu_driver(menu: *mut MENU, c: c_int) -> c_int;
    pub fn item_count(menu: *const MENU) -> c_int;
    pub fn menu_items(menu: *const MENU) -> *mut *mut ITEM;
    pub fn set_menu_items(menu: *mut MENU, items: *mut *mut ITEM) -> c_int;
    pub fn current_item(menu: *const MENU) -> *mut ITEM;
    pub fn set_current_item(menu: *mut MENU, item: *mut ITEM) -> c_int;
    pub fn top_row(menu: *const MENU) -> c_int;
    pub fn set_top_row(menu: *mut MENU, row: c_int) -> c_int;
    pub fn menu_format(menu: *const MENU, rows: *mut c_int, cols: *mut c_int);
    pub fn set_menu_format(menu: *mut MENU, rows: c_int, cols: c_int) -> c_int;
    pub fn menu_mark(menu: *const MENU) -> *const c_char;
    pub fn set_menu_mark(menu: *mut MENU, mark: *const c_char) -> c_int;
    pub fn menu_fore(menu: *const MENU) -> chtype;
    pub fn set_menu_fore(menu: *mut MENU, attr: chtype) -> c_int;
    pub fn menu_back(menu: *const MENU) -> chtype;
    pub fn set_menu_back(menu: *mut MENU, attr: chtype) -> c_int;
    pub fn menu_grey(menu: *const MENU) -> chtype;
    pub fn set_menu_grey(menu: *mut MENU, attr: chtype) -> c_int;
    pub fn menu_pad(menu: *const MENU) -> c_int;
    pub fn set_menu_pad(menu: *mut MENU, pad: c_int) -> c_int;
    pub fn menu_pattern(menu: *const MENU) -> *mut c_char;
    pub fn set_menu_pattern(menu: *mut MENU, pattern: *const c_char) -> c_int;
    pub fn menu_opts(menu: *const MENU) -> Menu_Options;
    pub fn set_menu_opts(menu: *mut MENU, opts: Menu_Options) -> c_int;
    pub fn menu_opts_on(menu: *mut MENU, opts: Menu_Options) -> c_int;
    pub fn menu_opts_off(menu: *mut MENU, opts: Menu_Options) -> c_int;
    pub fn menu_spacing(
        menu: *const MENU,
        spc_description: *mut c_int,
        spc_rows: *mut c_int,
        spc_columns: *mut c_int,
    ) -> c_int;
    pub fn set_menu_spacing(
        menu: *mut MENU,
        spc_description: c_int,
        spc_rows: c_int,
        spc_columns: c_int,
    ) -> c_int;
    pub fn scale_menu(menu: *const MENU, rows: *mut c_int, cols: *mut c_int) -> c_int;
    pub fn set_menu_win(menu: *mut MENU, win: *mut WINDOW) -> c_int;
    pub fn menu_win(menu: *const MENU) -> *mut WINDOW;
    pub fn set_menu_sub(menu: *mut MENU, sub: *mut WINDOW) -> c_int;
    pub fn menu_sub(menu: *const MENU) -> *mut WINDOW;
    pub fn pos_menu_cursor(menu: *const MENU) -> c_int;
    pub fn menu_request_name(request: c_int) -> *const c_char;
    pub fn menu_request_by_name(name: *const c_char) -> c_int;
}
