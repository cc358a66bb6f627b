//! Menus.
//!
//! A [`Menu`] is built from [`MenuItem`]s. The menu refers to its items but
//! does not own them: free the menu first, then the items, which may also be
//! reused in another menu after the first one is freed.
//!
//! ```rust,no_run
//! use ncurses::menu::{driver_action, Menu, MenuItem};
//! use ncurses::screen;
//!
//! # fn main() -> ncurses::Result<()> {
//! let stdscr = screen::init()?;
//! stdscr.keypad(true)?;
//! let items = [MenuItem::new("Start", "")?, MenuItem::new("Quit", "")?];
//! let menu = Menu::new(&items)?;
//! menu.post()?;
//! stdscr.refresh()?;
//! while let Some(key) = stdscr.get_char()? {
//!     match driver_action(key) {
//!         Some(req) => menu.driver(req)?,
//!         None => break,
//!     }
//! }
//! menu.unpost()?;
//! menu.free()?;
//! for item in &items {
//!     item.free()?;
//! }
//! screen::end()
//! # }
//! ```

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::fmt;

use libc::c_int;

use crate::error::{
    check_errno, check_status, Error, IntoResult, Result, E_NOT_CONNECTED, E_NOT_POSTED,
};
use crate::handle::{RawHandle, Release};
use crate::key;
use crate::sys;
use crate::trace::traceattr;
use crate::types::{AttrT, ERR};
use crate::window::Window;

// ============================================================================
// Menu option flags
// ============================================================================

bitflags::bitflags! {
    /// Menu option flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MenuOpts: u32 {
        /// Only one item can be selected.
        const O_ONEVALUE = 0x01;
        /// Show descriptions.
        const O_SHOWDESC = 0x02;
        /// Lay items out row by row.
        const O_ROWMAJOR = 0x04;
        /// Ignore case in pattern match.
        const O_IGNORECASE = 0x08;
        /// Move the cursor to the matched part of the name.
        const O_SHOWMATCH = 0x10;
        /// Stop at the ends instead of wrapping.
        const O_NONCYCLIC = 0x20;
        /// Mouse menu support.
        const O_MOUSE_MENU = 0x40;
    }
}

bitflags::bitflags! {
    /// Item option flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemOpts: u32 {
        /// Item can be selected.
        const O_SELECTABLE = 0x01;
    }
}

// ============================================================================
// Menu request codes
// ============================================================================

/// Menu request: move left.
pub const REQ_LEFT_ITEM: i32 = key::KEY_MAX + 1;
/// Menu request: move right.
pub const REQ_RIGHT_ITEM: i32 = key::KEY_MAX + 2;
/// Menu request: move up.
pub const REQ_UP_ITEM: i32 = key::KEY_MAX + 3;
/// Menu request: move down.
pub const REQ_DOWN_ITEM: i32 = key::KEY_MAX + 4;
/// Menu request: scroll up a line.
pub const REQ_SCR_ULINE: i32 = key::KEY_MAX + 5;
/// Menu request: scroll down a line.
pub const REQ_SCR_DLINE: i32 = key::KEY_MAX + 6;
/// Menu request: scroll down a page.
pub const REQ_SCR_DPAGE: i32 = key::KEY_MAX + 7;
/// Menu request: scroll up a page.
pub const REQ_SCR_UPAGE: i32 = key::KEY_MAX + 8;
/// Menu request: go to first item.
pub const REQ_FIRST_ITEM: i32 = key::KEY_MAX + 9;
/// Menu request: go to last item.
pub const REQ_LAST_ITEM: i32 = key::KEY_MAX + 10;
/// Menu request: move to next item.
pub const REQ_NEXT_ITEM: i32 = key::KEY_MAX + 11;
/// Menu request: move to previous item.
pub const REQ_PREV_ITEM: i32 = key::KEY_MAX + 12;
/// Menu request: toggle item selection.
pub const REQ_TOGGLE_ITEM: i32 = key::KEY_MAX + 13;
/// Menu request: clear pattern.
pub const REQ_CLEAR_PATTERN: i32 = key::KEY_MAX + 14;
/// Menu request: delete the last pattern character.
pub const REQ_BACK_PATTERN: i32 = key::KEY_MAX + 15;
/// Menu request: next match.
pub const REQ_NEXT_MATCH: i32 = key::KEY_MAX + 16;
/// Menu request: previous match.
pub const REQ_PREV_MATCH: i32 = key::KEY_MAX + 17;

/// Smallest menu request code.
pub const MIN_MENU_COMMAND: i32 = REQ_LEFT_ITEM;
/// Largest menu request code.
pub const MAX_MENU_COMMAND: i32 = REQ_PREV_MATCH;

/// Keys with a default menu request.
static DRIVER_ACTIONS: &[(i32, i32)] = &[
    (key::KEY_DOWN, REQ_DOWN_ITEM),
    (key::KEY_HOME, REQ_FIRST_ITEM),
    (key::KEY_END, REQ_LAST_ITEM),
    (key::KEY_LEFT, REQ_LEFT_ITEM),
    (key::KEY_NPAGE, REQ_SCR_DPAGE),
    (key::KEY_PPAGE, REQ_SCR_UPAGE),
    (key::KEY_RIGHT, REQ_RIGHT_ITEM),
    (key::KEY_UP, REQ_UP_ITEM),
];

/// The menu request a navigation key maps to, if any.
pub fn driver_action(key: i32) -> Option<i32> {
    DRIVER_ACTIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, req)| *req)
}

/// Name of a request code, e.g. `"DOWN_ITEM"`.
pub fn request_name(request: i32) -> Option<String> {
    let ptr = unsafe { sys::menu_request_name(request) };
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Request code for a name, the inverse of [`request_name`].
pub fn request_by_name(name: &str) -> Option<i32> {
    let name = CString::new(name).ok()?;
    let req = unsafe { sys::menu_request_by_name(name.as_ptr()) };
    (MIN_MENU_COMMAND..=MAX_MENU_COMMAND)
        .contains(&req)
        .then_some(req)
}

fn string_at(ptr: *const libc::c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }
}

// ============================================================================
// Menu Item
// ============================================================================

/// A menu entry.
///
/// Items created with [`MenuItem::new`] must be freed with
/// [`MenuItem::free`] once no menu refers to them. Items obtained from a
/// menu ([`Menu::current`], [`Menu::items`]) are views and cannot be freed.
pub struct MenuItem {
    handle: RawHandle<sys::ITEM>,
    /// Name and description handed to `new_item`, which keeps pointing at
    /// them. Reclaimed only once `free_item` succeeds. `None` for views.
    text: Option<(*mut libc::c_char, *mut libc::c_char)>,
}

impl MenuItem {
    /// Create an item with a name and a description.
    pub fn new(name: &str, description: &str) -> Result<Self> {
        let name = CString::new(name)?.into_raw();
        let description = CString::new(description)?.into_raw();
        let ptr = match check_errno("new_item", unsafe { sys::new_item(name, description) }) {
            Ok(ptr) => ptr,
            Err(err) => {
                drop(unsafe { (CString::from_raw(name), CString::from_raw(description)) });
                return Err(err);
            }
        };
        log::trace!("new_item({:?}) -> {:p}", unsafe { CStr::from_ptr(name) }, ptr);
        Ok(Self {
            handle: RawHandle::new(ptr, "MenuItem"),
            text: Some((name, description)),
        })
    }

    fn view(ptr: *mut sys::ITEM) -> Self {
        Self {
            handle: RawHandle::new(ptr, "MenuItem"),
            text: None,
        }
    }

    /// The item's name.
    pub fn name(&self) -> Result<String> {
        let item = self.handle.get()?;
        Ok(string_at(unsafe { sys::item_name(item) }))
    }

    /// The item's description.
    pub fn description(&self) -> Result<String> {
        let item = self.handle.get()?;
        Ok(string_at(unsafe { sys::item_description(item) }))
    }

    /// Position in the menu the item belongs to.
    pub fn index(&self) -> Result<i32> {
        let item = self.handle.get()?;
        match unsafe { sys::item_index(item) } {
            ERR => Err(Error::Status {
                call: "item_index",
                code: E_NOT_CONNECTED,
            }),
            index => Ok(index),
        }
    }

    /// Whether the item is selected in a multi-value menu.
    pub fn value(&self) -> Result<bool> {
        let item = self.handle.get()?;
        Ok(unsafe { sys::item_value(item) })
    }

    /// Select or deselect the item. Only allowed when the menu is not
    /// [`O_ONEVALUE`](MenuOpts::O_ONEVALUE).
    pub fn set_value(&self, value: bool) -> Result<()> {
        let item = self.handle.get()?;
        check_status("set_item_value", unsafe { sys::set_item_value(item, value) })
    }

    /// Allow or prevent selecting the item. Unselectable items are drawn with
    /// the menu's grey attribute.
    pub fn selectable(&self, on: bool) -> Result<()> {
        if on {
            self.options_on(ItemOpts::O_SELECTABLE)
        } else {
            self.options_off(ItemOpts::O_SELECTABLE)
        }
    }

    /// Whether the item can be selected.
    pub fn is_selectable(&self) -> Result<bool> {
        Ok(self.options()?.contains(ItemOpts::O_SELECTABLE))
    }

    /// Whether the item is currently displayed by its posted menu.
    pub fn visible(&self) -> Result<bool> {
        let item = self.handle.get()?;
        Ok(unsafe { sys::item_visible(item) })
    }

    /// Current item options.
    pub fn options(&self) -> Result<ItemOpts> {
        let item = self.handle.get()?;
        Ok(ItemOpts::from_bits_retain(unsafe { sys::item_opts(item) } as u32))
    }

    /// Replace all item options.
    pub fn set_options(&self, opts: ItemOpts) -> Result<()> {
        let item = self.handle.get()?;
        check_status("set_item_opts", unsafe {
            sys::set_item_opts(item, opts.bits() as c_int)
        })
    }

    /// Turn on the given options, leaving the rest alone.
    pub fn options_on(&self, opts: ItemOpts) -> Result<()> {
        let item = self.handle.get()?;
        check_status("item_opts_on", unsafe {
            sys::item_opts_on(item, opts.bits() as c_int)
        })
    }

    /// Turn off the given options, leaving the rest alone.
    pub fn options_off(&self, opts: ItemOpts) -> Result<()> {
        let item = self.handle.get()?;
        check_status("item_opts_off", unsafe {
            sys::item_opts_off(item, opts.bits() as c_int)
        })
    }

    /// Whether two wrappers refer to the same native item.
    pub fn same_as(&self, other: &MenuItem) -> bool {
        !self.handle.is_released() && self.handle.as_ptr() == other.handle.as_ptr()
    }

    /// Free the item. Fails while a menu still refers to it.
    pub fn free(&self) -> Result<()> {
        let Some((name, description)) = self.text else {
            return Err(Error::InvalidArgument(
                "cannot free an item through a menu view".into(),
            ));
        };
        let item = self.handle.take()?;
        if let Err(err) = check_status("free_item", unsafe { sys::free_item(item) }) {
            self.handle.restore(item);
            return Err(err);
        }
        // The handle is gone, so this runs at most once per item.
        drop(unsafe { (CString::from_raw(name), CString::from_raw(description)) });
        log::trace!("free_item({:p})", item);
        Ok(())
    }
}

impl Release for MenuItem {
    fn release(&self) -> Result<()> {
        self.free()
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("MenuItem");
        d.field("handle", &self.handle);
        if let Ok(name) = self.name() {
            d.field("name", &name);
        }
        d.finish()
    }
}

// ============================================================================
// Menu
// ============================================================================

/// A menu of items.
pub struct Menu {
    handle: RawHandle<sys::MENU>,
    /// Null-terminated array the native menu points into.
    items: RefCell<Box<[*mut sys::ITEM]>>,
}

fn item_array(items: &[MenuItem]) -> Result<Box<[*mut sys::ITEM]>> {
    if items.is_empty() {
        return Err(Error::InvalidArgument("a menu needs at least one item".into()));
    }
    let mut array = Vec::with_capacity(items.len() + 1);
    for item in items {
        array.push(item.handle.get()?);
    }
    array.push(std::ptr::null_mut());
    Ok(array.into_boxed_slice())
}

impl Menu {
    /// Create a menu from `items`.
    pub fn new(items: &[MenuItem]) -> Result<Self> {
        let mut array = item_array(items)?;
        let ptr = check_errno("new_menu", unsafe { sys::new_menu(array.as_mut_ptr()) })?;
        log::trace!("new_menu({} items) -> {:p}", items.len(), ptr);
        Ok(Self {
            handle: RawHandle::new(ptr, "Menu"),
            items: RefCell::new(array),
        })
    }

    fn ptr(&self) -> Result<*mut sys::MENU> {
        self.handle.get()
    }

    /// Display the menu in its window.
    pub fn post(&self) -> Result<()> {
        let menu = self.ptr()?;
        check_status("post_menu", unsafe { sys::post_menu(menu) })?;
        log::trace!("post_menu({:p})", menu);
        Ok(())
    }

    /// Erase the menu from its window.
    pub fn unpost(&self) -> Result<()> {
        let menu = self.ptr()?;
        check_status("unpost_menu", unsafe { sys::unpost_menu(menu) })?;
        log::trace!("unpost_menu({:p})", menu);
        Ok(())
    }

    /// Apply a request (`REQ_*`) or a printable character for pattern
    /// matching.
    pub fn driver(&self, request: i32) -> Result<()> {
        let menu = self.ptr()?;
        check_status("menu_driver", unsafe { sys::menu_driver(menu, request) })
    }

    /// Free the menu. Its items stay valid. Fails while posted.
    pub fn free(&self) -> Result<()> {
        let menu = self.handle.take()?;
        if let Err(err) = check_status("free_menu", unsafe { sys::free_menu(menu) }) {
            self.handle.restore(menu);
            return Err(err);
        }
        self.items.replace(Box::new([]));
        log::trace!("free_menu({:p})", menu);
        Ok(())
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Number of items.
    pub fn count(&self) -> Result<i32> {
        let menu = self.ptr()?;
        Ok(unsafe { sys::item_count(menu) })
    }

    /// Views of the menu's items, in order.
    pub fn items(&self) -> Result<Vec<MenuItem>> {
        self.ptr()?;
        Ok(self
            .items
            .borrow()
            .iter()
            .take_while(|p| !p.is_null())
            .map(|&p| MenuItem::view(p))
            .collect())
    }

    /// Replace the menu's items. Fails while posted.
    pub fn set_items(&self, items: &[MenuItem]) -> Result<()> {
        let menu = self.ptr()?;
        let mut array = item_array(items)?;
        check_status("set_menu_items", unsafe {
            sys::set_menu_items(menu, array.as_mut_ptr())
        })?;
        self.items.replace(array);
        Ok(())
    }

    /// View of the current item.
    pub fn current(&self) -> Result<Option<MenuItem>> {
        let menu = self.ptr()?;
        let item = unsafe { sys::current_item(menu) };
        Ok((!item.is_null()).then(|| MenuItem::view(item)))
    }

    /// Make `item` the current item.
    pub fn set_current(&self, item: &MenuItem) -> Result<()> {
        let menu = self.ptr()?;
        let item = item.handle.get()?;
        check_status("set_current_item", unsafe { sys::set_current_item(menu, item) })
    }

    /// Item row shown at the top of the menu window.
    pub fn top_row(&self) -> Result<i32> {
        let menu = self.ptr()?;
        Ok(unsafe { sys::top_row(menu) })
    }

    /// Scroll so that `row` is shown at the top.
    pub fn set_top_row(&self, row: i32) -> Result<()> {
        let menu = self.ptr()?;
        check_status("set_top_row", unsafe { sys::set_top_row(menu, row) })
    }

    // ========================================================================
    // Layout and appearance
    // ========================================================================

    /// Maximum rows and columns of items shown at once.
    pub fn format(&self) -> Result<(i32, i32)> {
        let menu = self.ptr()?;
        let (mut rows, mut cols) = (0, 0);
        unsafe { sys::menu_format(menu, &mut rows, &mut cols) };
        Ok((rows, cols))
    }

    /// Set the maximum rows and columns of items shown at once.
    pub fn set_format(&self, rows: i32, cols: i32) -> Result<()> {
        let menu = self.ptr()?;
        check_status("set_menu_format", unsafe {
            sys::set_menu_format(menu, rows, cols)
        })
    }

    /// String drawn before the current item.
    pub fn mark(&self) -> Result<String> {
        let menu = self.ptr()?;
        Ok(string_at(unsafe { sys::menu_mark(menu) }))
    }

    /// Set the string drawn before the current item.
    pub fn set_mark(&self, mark: &str) -> Result<()> {
        let menu = self.ptr()?;
        let mark = CString::new(mark)?;
        check_status("set_menu_mark", unsafe {
            sys::set_menu_mark(menu, mark.as_ptr())
        })
    }

    /// Attributes of selected items.
    pub fn foreground(&self) -> Result<AttrT> {
        let menu = self.ptr()?;
        Ok(unsafe { sys::menu_fore(menu) })
    }

    /// Set the attributes of selected items.
    pub fn set_foreground(&self, attrs: AttrT) -> Result<()> {
        let menu = self.ptr()?;
        check_status("set_menu_fore", unsafe { sys::set_menu_fore(menu, attrs) })
    }

    /// Attributes of selectable, unselected items.
    pub fn background(&self) -> Result<AttrT> {
        let menu = self.ptr()?;
        Ok(unsafe { sys::menu_back(menu) })
    }

    /// Set the attributes of selectable, unselected items.
    pub fn set_background(&self, attrs: AttrT) -> Result<()> {
        let menu = self.ptr()?;
        check_status("set_menu_back", unsafe { sys::set_menu_back(menu, attrs) })
    }

    /// Attributes of unselectable items.
    pub fn grey(&self) -> Result<AttrT> {
        let menu = self.ptr()?;
        Ok(unsafe { sys::menu_grey(menu) })
    }

    /// Set the attributes of unselectable items.
    pub fn set_grey(&self, attrs: AttrT) -> Result<()> {
        let menu = self.ptr()?;
        check_status("set_menu_grey", unsafe { sys::set_menu_grey(menu, attrs) })
    }

    /// Character separating an item's name from its description.
    pub fn pad(&self) -> Result<char> {
        let menu = self.ptr()?;
        let pad = unsafe { sys::menu_pad(menu) };
        Ok(u8::try_from(pad).map_or(' ', char::from))
    }

    /// Set the character separating names from descriptions.
    pub fn set_pad(&self, pad: char) -> Result<()> {
        if !pad.is_ascii() {
            return Err(Error::InvalidArgument(format!("pad must be ASCII, got {:?}", pad)));
        }
        let menu = self.ptr()?;
        check_status("set_menu_pad", unsafe { sys::set_menu_pad(menu, pad as c_int) })
    }

    /// Text typed so far for pattern matching.
    pub fn pattern(&self) -> Result<String> {
        let menu = self.ptr()?;
        Ok(string_at(unsafe { sys::menu_pattern(menu) }))
    }

    /// Set the match pattern and move to the first matching item.
    pub fn set_pattern(&self, pattern: &str) -> Result<()> {
        let menu = self.ptr()?;
        let pattern = CString::new(pattern)?;
        check_status("set_menu_pattern", unsafe {
            sys::set_menu_pattern(menu, pattern.as_ptr())
        })
    }

    /// Spacing as (description, rows, columns).
    pub fn spacing(&self) -> Result<(i32, i32, i32)> {
        let menu = self.ptr()?;
        let (mut desc, mut rows, mut cols) = (0, 0, 0);
        check_status("menu_spacing", unsafe {
            sys::menu_spacing(menu, &mut desc, &mut rows, &mut cols)
        })?;
        Ok((desc, rows, cols))
    }

    /// Set spacing between name and description, between rows, and between
    /// columns. Zero selects the default.
    pub fn set_spacing(&self, description: i32, rows: i32, cols: i32) -> Result<()> {
        let menu = self.ptr()?;
        check_status("set_menu_spacing", unsafe {
            sys::set_menu_spacing(menu, description, rows, cols)
        })
    }

    /// Minimum window size, as (rows, columns), to hold the menu.
    pub fn scale(&self) -> Result<(i32, i32)> {
        let menu = self.ptr()?;
        let (mut rows, mut cols) = (0, 0);
        check_status("scale_menu", unsafe { sys::scale_menu(menu, &mut rows, &mut cols) })?;
        Ok((rows, cols))
    }

    // ========================================================================
    // Options
    // ========================================================================

    /// Current menu options.
    pub fn options(&self) -> Result<MenuOpts> {
        let menu = self.ptr()?;
        Ok(MenuOpts::from_bits_retain(unsafe { sys::menu_opts(menu) } as u32))
    }

    /// Replace all menu options.
    pub fn set_options(&self, opts: MenuOpts) -> Result<()> {
        let menu = self.ptr()?;
        check_status("set_menu_opts", unsafe {
            sys::set_menu_opts(menu, opts.bits() as c_int)
        })
    }

    /// Turn the given options on or off, leaving the rest alone.
    pub fn option(&self, opts: MenuOpts, on: bool) -> Result<()> {
        let menu = self.ptr()?;
        if on {
            check_status("menu_opts_on", unsafe {
                sys::menu_opts_on(menu, opts.bits() as c_int)
            })
        } else {
            check_status("menu_opts_off", unsafe {
                sys::menu_opts_off(menu, opts.bits() as c_int)
            })
        }
    }

    // ========================================================================
    // Windows
    // ========================================================================

    /// Draw the menu frame in `window`. The window must outlive the menu.
    pub fn set_window(&self, window: &Window) -> Result<()> {
        let menu = self.ptr()?;
        let win = window.as_ptr()?;
        check_status("set_menu_win", unsafe { sys::set_menu_win(menu, win) })
    }

    /// View of the menu's window. Falls back to the standard screen
    /// when none was set.
    pub fn window(&self) -> Result<Window> {
        let menu = self.ptr()?;
        let win = unsafe { sys::menu_win(menu) }.into_result("menu_win")?;
        Ok(Window::from_raw(win, false))
    }

    /// Draw the items in `window`, usually a derived window of the frame.
    pub fn set_sub_window(&self, window: &Window) -> Result<()> {
        let menu = self.ptr()?;
        let win = window.as_ptr()?;
        check_status("set_menu_sub", unsafe { sys::set_menu_sub(menu, win) })
    }

    /// View of the menu's item window. Falls back to the standard screen
    /// when none was set.
    pub fn sub_window(&self) -> Result<Window> {
        let menu = self.ptr()?;
        let win = unsafe { sys::menu_sub(menu) }.into_result("menu_sub")?;
        Ok(Window::from_raw(win, false))
    }

    /// Put the cursor back on the current item.
    pub fn position_cursor(&self) -> Result<()> {
        let menu = self.ptr()?;
        check_status("pos_menu_cursor", unsafe { sys::pos_menu_cursor(menu) })
    }
}

impl Release for Menu {
    /// Unpost (if posted) then free.
    fn release(&self) -> Result<()> {
        match self.unpost() {
            Ok(()) => {}
            Err(err) if err.status() == Some(E_NOT_POSTED) => {}
            Err(err) => return Err(err),
        }
        self.free()
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Menu");
        d.field("handle", &self.handle);
        if let (Ok(count), Ok(fore)) = (self.count(), self.foreground()) {
            d.field("count", &count).field("fore", &traceattr(fore));
        }
        d.finish()
    }
}

// ============================================================================
// C-style functions
// ============================================================================

/// Create a menu item (C-style alias).
#[inline]
pub fn new_item(name: &str, description: &str) -> Result<MenuItem> {
    MenuItem::new(name, description)
}

/// Free a menu item (C-style alias).
#[inline]
pub fn free_item(item: &MenuItem) -> Result<()> {
    item.free()
}

/// Create a menu (C-style alias).
#[inline]
pub fn new_menu(items: &[MenuItem]) -> Result<Menu> {
    Menu::new(items)
}

/// Free a menu (C-style alias).
#[inline]
pub fn free_menu(menu: &Menu) -> Result<()> {
    menu.free()
}

/// Post a menu (C-style alias).
#[inline]
pub fn post_menu(menu: &Menu) -> Result<()> {
    menu.post()
}

/// Unpost a menu (C-style alias).
#[inline]
pub fn unpost_menu(menu: &Menu) -> Result<()> {
    menu.unpost()
}

/// Apply a request to a menu (C-style alias).
#[inline]
pub fn menu_driver(menu: &Menu, request: i32) -> Result<()> {
    menu.driver(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_codes_follow_key_max() {
        assert_eq!(REQ_LEFT_ITEM, 0o777 + 1);
        assert_eq!(REQ_DOWN_ITEM, 515);
        assert_eq!(REQ_TOGGLE_ITEM, 524);
        assert_eq!(REQ_PREV_MATCH, 528);
    }

    #[test]
    fn test_option_bits() {
        assert_eq!(MenuOpts::O_ONEVALUE.bits(), 1);
        assert_eq!(MenuOpts::O_SHOWDESC.bits(), 2);
        assert_eq!(MenuOpts::O_NONCYCLIC.bits(), 0x20);
        assert_eq!(ItemOpts::O_SELECTABLE.bits(), 1);
    }

    #[test]
    fn test_driver_action_map() {
        assert_eq!(driver_action(key::KEY_DOWN), Some(REQ_DOWN_ITEM));
        assert_eq!(driver_action(key::KEY_NPAGE), Some(REQ_SCR_DPAGE));
        assert_eq!(driver_action(key::KEY_HOME), Some(REQ_FIRST_ITEM));
        assert_eq!(driver_action('q' as i32), None);
    }

    #[test]
    fn test_request_names() {
        assert_eq!(request_name(REQ_DOWN_ITEM).as_deref(), Some("DOWN_ITEM"));
        assert_eq!(request_by_name("toggle_item"), Some(REQ_TOGGLE_ITEM));
        assert_eq!(request_by_name("NO_SUCH_REQUEST"), None);
    }

    #[test]
    fn test_empty_menu_rejected() {
        assert!(matches!(Menu::new(&[]), Err(Error::InvalidArgument(_))));
    }
}
