//! Forms.
//!
//! A [`Form`] collects [`Field`]s and routes editing requests to the current
//! one. As with menus, the form refers to its fields without owning them: free
//! the form first, then the fields.
//!
//! ```rust,no_run
//! use ncurses::form::{Field, FieldOpts, Form, REQ_NEXT_FIELD, REQ_VALIDATION};
//! use ncurses::{attr, screen};
//!
//! # fn main() -> ncurses::Result<()> {
//! let stdscr = screen::init()?;
//! let fields = [Field::new(1, 10, 4, 18, 0, 0)?, Field::new(1, 10, 6, 18, 0, 0)?];
//! fields[0].set_background(attr::A_UNDERLINE)?;
//! fields[0].options_off(FieldOpts::O_AUTOSKIP)?;
//!
//! let form = Form::new(&fields)?;
//! form.post()?;
//! stdscr.refresh()?;
//! for ch in "hello".chars() {
//!     form.driver(ch as i32)?;
//! }
//! form.driver(REQ_NEXT_FIELD)?;
//! form.driver(REQ_VALIDATION)?;
//! let typed = fields[0].buffer(0)?;
//!
//! form.unpost()?;
//! form.free()?;
//! for field in &fields {
//!     field.free()?;
//! }
//! screen::end()?;
//! println!("{}", typed.trim_end());
//! # Ok(())
//! # }
//! ```

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::fmt;
use std::rc::Rc;

use libc::c_int;

use crate::error::{check_errno, check_status, Error, IntoResult, Result, E_NOT_POSTED};
use crate::handle::{RawHandle, Release};
use crate::key;
use crate::sys;
use crate::trace::traceattr;
use crate::types::{AttrT, Coord, ERR};
use crate::window::Window;

// ============================================================================
// Field option flags
// ============================================================================

bitflags::bitflags! {
    /// Field option flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FieldOpts: u32 {
        /// Field is displayed.
        const O_VISIBLE = 0x0001;
        /// Field can be visited.
        const O_ACTIVE = 0x0002;
        /// Field contents are displayed as entered.
        const O_PUBLIC = 0x0004;
        /// Field can be edited.
        const O_EDIT = 0x0008;
        /// Multi-line fields wrap words to the next line.
        const O_WRAP = 0x0010;
        /// Typing in the first position clears the field.
        const O_BLANK = 0x0020;
        /// Move to the next field when this one fills.
        const O_AUTOSKIP = 0x0040;
        /// Blank fields skip validation.
        const O_NULLOK = 0x0080;
        /// Validate only after the field was modified.
        const O_PASSOK = 0x0100;
        /// Field does not grow beyond its size.
        const O_STATIC = 0x0200;
        /// Justify dynamic fields like static ones.
        const O_DYNAMIC_JUSTIFY = 0x0400;
        /// Keep leading blanks when setting the buffer.
        const O_NO_LEFT_STRIP = 0x0800;
        /// Stay at the edge after filling a field.
        const O_EDGE_INSERT_STAY = 0x1000;
        /// Limit input to the visible size.
        const O_INPUT_LIMIT = 0x2000;
    }
}

bitflags::bitflags! {
    /// Form option flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FormOpts: u32 {
        /// `REQ_NEW_LINE` at the end of a field moves to the next field.
        const O_NL_OVERLOAD = 0x0001;
        /// `REQ_DEL_PREV` at the start of a field moves to the previous one.
        const O_BS_OVERLOAD = 0x0002;
    }
}

/// Field justification, for single-line static fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Justification {
    /// No justification.
    #[default]
    None,
    /// Left justified.
    Left,
    /// Centered.
    Center,
    /// Right justified.
    Right,
}

impl Justification {
    /// Convert from the native value.
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(Justification::None),
            1 => Some(Justification::Left),
            2 => Some(Justification::Center),
            3 => Some(Justification::Right),
            _ => None,
        }
    }

    /// The native value.
    pub const fn to_raw(self) -> i32 {
        match self {
            Justification::None => 0,
            Justification::Left => 1,
            Justification::Center => 2,
            Justification::Right => 3,
        }
    }
}

// ============================================================================
// Form request codes
// ============================================================================

/// Form request: move to next page.
pub const REQ_NEXT_PAGE: i32 = key::KEY_MAX + 1;
/// Form request: move to previous page.
pub const REQ_PREV_PAGE: i32 = key::KEY_MAX + 2;
/// Form request: move to first page.
pub const REQ_FIRST_PAGE: i32 = key::KEY_MAX + 3;
/// Form request: move to last page.
pub const REQ_LAST_PAGE: i32 = key::KEY_MAX + 4;
/// Form request: move to next field.
pub const REQ_NEXT_FIELD: i32 = key::KEY_MAX + 5;
/// Form request: move to previous field.
pub const REQ_PREV_FIELD: i32 = key::KEY_MAX + 6;
/// Form request: move to first field.
pub const REQ_FIRST_FIELD: i32 = key::KEY_MAX + 7;
/// Form request: move to last field.
pub const REQ_LAST_FIELD: i32 = key::KEY_MAX + 8;
/// Form request: move to sorted next field.
pub const REQ_SNEXT_FIELD: i32 = key::KEY_MAX + 9;
/// Form request: move to sorted previous field.
pub const REQ_SPREV_FIELD: i32 = key::KEY_MAX + 10;
/// Form request: move to sorted first field.
pub const REQ_SFIRST_FIELD: i32 = key::KEY_MAX + 11;
/// Form request: move to sorted last field.
pub const REQ_SLAST_FIELD: i32 = key::KEY_MAX + 12;
/// Form request: move to the field on the left.
pub const REQ_LEFT_FIELD: i32 = key::KEY_MAX + 13;
/// Form request: move to the field on the right.
pub const REQ_RIGHT_FIELD: i32 = key::KEY_MAX + 14;
/// Form request: move to the field above.
pub const REQ_UP_FIELD: i32 = key::KEY_MAX + 15;
/// Form request: move to the field below.
pub const REQ_DOWN_FIELD: i32 = key::KEY_MAX + 16;
/// Form request: move to next character.
pub const REQ_NEXT_CHAR: i32 = key::KEY_MAX + 17;
/// Form request: move to previous character.
pub const REQ_PREV_CHAR: i32 = key::KEY_MAX + 18;
/// Form request: move to next line.
pub const REQ_NEXT_LINE: i32 = key::KEY_MAX + 19;
/// Form request: move to previous line.
pub const REQ_PREV_LINE: i32 = key::KEY_MAX + 20;
/// Form request: move to next word.
pub const REQ_NEXT_WORD: i32 = key::KEY_MAX + 21;
/// Form request: move to previous word.
pub const REQ_PREV_WORD: i32 = key::KEY_MAX + 22;
/// Form request: move to beginning of field.
pub const REQ_BEG_FIELD: i32 = key::KEY_MAX + 23;
/// Form request: move to end of field.
pub const REQ_END_FIELD: i32 = key::KEY_MAX + 24;
/// Form request: move to beginning of line.
pub const REQ_BEG_LINE: i32 = key::KEY_MAX + 25;
/// Form request: move to end of line.
pub const REQ_END_LINE: i32 = key::KEY_MAX + 26;
/// Form request: move left in field.
pub const REQ_LEFT_CHAR: i32 = key::KEY_MAX + 27;
/// Form request: move right in field.
pub const REQ_RIGHT_CHAR: i32 = key::KEY_MAX + 28;
/// Form request: move up in field.
pub const REQ_UP_CHAR: i32 = key::KEY_MAX + 29;
/// Form request: move down in field.
pub const REQ_DOWN_CHAR: i32 = key::KEY_MAX + 30;
/// Form request: insert a new line.
pub const REQ_NEW_LINE: i32 = key::KEY_MAX + 31;
/// Form request: insert a character.
pub const REQ_INS_CHAR: i32 = key::KEY_MAX + 32;
/// Form request: insert a line.
pub const REQ_INS_LINE: i32 = key::KEY_MAX + 33;
/// Form request: delete a character.
pub const REQ_DEL_CHAR: i32 = key::KEY_MAX + 34;
/// Form request: delete previous character.
pub const REQ_DEL_PREV: i32 = key::KEY_MAX + 35;
/// Form request: delete a line.
pub const REQ_DEL_LINE: i32 = key::KEY_MAX + 36;
/// Form request: delete a word.
pub const REQ_DEL_WORD: i32 = key::KEY_MAX + 37;
/// Form request: clear to end of line.
pub const REQ_CLR_EOL: i32 = key::KEY_MAX + 38;
/// Form request: clear to end of field.
pub const REQ_CLR_EOF: i32 = key::KEY_MAX + 39;
/// Form request: clear field.
pub const REQ_CLR_FIELD: i32 = key::KEY_MAX + 40;
/// Form request: overlay mode.
pub const REQ_OVL_MODE: i32 = key::KEY_MAX + 41;
/// Form request: insert mode.
pub const REQ_INS_MODE: i32 = key::KEY_MAX + 42;
/// Form request: scroll field forward a line.
pub const REQ_SCR_FLINE: i32 = key::KEY_MAX + 43;
/// Form request: scroll field backward a line.
pub const REQ_SCR_BLINE: i32 = key::KEY_MAX + 44;
/// Form request: scroll field forward a page.
pub const REQ_SCR_FPAGE: i32 = key::KEY_MAX + 45;
/// Form request: scroll field backward a page.
pub const REQ_SCR_BPAGE: i32 = key::KEY_MAX + 46;
/// Form request: scroll field forward half a page.
pub const REQ_SCR_FHPAGE: i32 = key::KEY_MAX + 47;
/// Form request: scroll field backward half a page.
pub const REQ_SCR_BHPAGE: i32 = key::KEY_MAX + 48;
/// Form request: scroll field forward a character.
pub const REQ_SCR_FCHAR: i32 = key::KEY_MAX + 49;
/// Form request: scroll field backward a character.
pub const REQ_SCR_BCHAR: i32 = key::KEY_MAX + 50;
/// Form request: horizontal scroll forward a line.
pub const REQ_SCR_HFLINE: i32 = key::KEY_MAX + 51;
/// Form request: horizontal scroll backward a line.
pub const REQ_SCR_HBLINE: i32 = key::KEY_MAX + 52;
/// Form request: horizontal scroll forward half a line.
pub const REQ_SCR_HFHALF: i32 = key::KEY_MAX + 53;
/// Form request: horizontal scroll backward half a line.
pub const REQ_SCR_HBHALF: i32 = key::KEY_MAX + 54;
/// Form request: validate the current field.
pub const REQ_VALIDATION: i32 = key::KEY_MAX + 55;
/// Form request: next choice of an enumerated field.
pub const REQ_NEXT_CHOICE: i32 = key::KEY_MAX + 56;
/// Form request: previous choice of an enumerated field.
pub const REQ_PREV_CHOICE: i32 = key::KEY_MAX + 57;

/// Smallest form request code.
pub const MIN_FORM_COMMAND: i32 = REQ_NEXT_PAGE;
/// Largest form request code.
pub const MAX_FORM_COMMAND: i32 = REQ_PREV_CHOICE;

/// Name of a request code, e.g. `"NEXT_FIELD"`.
pub fn request_name(request: i32) -> Option<String> {
    let ptr = unsafe { sys::form_request_name(request) };
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

/// Request code for a name, the inverse of [`request_name`].
pub fn request_by_name(name: &str) -> Option<i32> {
    let name = CString::new(name).ok()?;
    let req = unsafe { sys::form_request_by_name(name.as_ptr()) };
    (MIN_FORM_COMMAND..=MAX_FORM_COMMAND)
        .contains(&req)
        .then_some(req)
}

// ============================================================================
// Field
// ============================================================================

/// Geometry of a field as reported by the library.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldInfo {
    /// Visible rows.
    pub rows: Coord,
    /// Visible columns.
    pub cols: Coord,
    /// Row of the upper-left corner in the form.
    pub top: Coord,
    /// Column of the upper-left corner in the form.
    pub left: Coord,
    /// Rows kept off screen.
    pub offscreen: Coord,
    /// Additional buffers.
    pub nbuffers: Coord,
}

/// A data-entry field.
///
/// Fields created with [`Field::new`], [`Field::duplicate`] or
/// [`Field::link`] must be freed with [`Field::free`] once no form refers to
/// them. Fields obtained from a form are views and cannot be freed.
///
/// A linked field shares its origin's buffers but not the storage the
/// library converts them in, so its buffers are read and written through
/// the origin. The origin cannot be freed while linked fields refer to it.
pub struct Field {
    handle: Rc<RawHandle<sys::FIELD>>,
    owned: bool,
    origin: RefCell<Option<Rc<RawHandle<sys::FIELD>>>>,
}

impl Field {
    /// Create a field of `height` x `width` at (`top`, `left`) in the form,
    /// with `offscreen` extra rows and `nbuffers` additional buffers.
    pub fn new(
        height: Coord,
        width: Coord,
        top: Coord,
        left: Coord,
        offscreen: Coord,
        nbuffers: Coord,
    ) -> Result<Self> {
        if height <= 0 || width <= 0 {
            return Err(Error::InvalidArgument(format!(
                "field size must be positive, got {}x{}",
                height, width
            )));
        }
        if top < 0 || left < 0 || offscreen < 0 || nbuffers < 0 {
            return Err(Error::InvalidArgument(
                "field position, offscreen rows and buffer count must not be negative".into(),
            ));
        }
        let ptr = check_errno("new_field", unsafe {
            sys::new_field(height, width, top, left, offscreen, nbuffers)
        })?;
        log::trace!(
            "new_field({}, {}, {}, {}) -> {:p}",
            height,
            width,
            top,
            left,
            ptr
        );
        Ok(Self::from_raw(ptr, true))
    }

    fn from_raw(ptr: *mut sys::FIELD, owned: bool) -> Self {
        Self {
            handle: Rc::new(RawHandle::new(ptr, "Field")),
            owned,
            origin: RefCell::new(None),
        }
    }

    fn ptr(&self) -> Result<*mut sys::FIELD> {
        self.handle.get()
    }

    /// The field whose buffers the library can convert: the origin for a
    /// linked field, otherwise the field itself.
    fn buffer_owner(&self) -> Result<*mut sys::FIELD> {
        let field = self.ptr()?;
        match self.origin.borrow().as_ref() {
            Some(origin) => origin.get(),
            None => Ok(field),
        }
    }

    /// An independent copy of the field at (`top`, `left`).
    pub fn duplicate(&self, top: Coord, left: Coord) -> Result<Field> {
        let field = self.ptr()?;
        let ptr = check_errno("dup_field", unsafe { sys::dup_field(field, top, left) })?;
        Ok(Field::from_raw(ptr, true))
    }

    /// A field at (`top`, `left`) sharing this field's buffers.
    pub fn link(&self, top: Coord, left: Coord) -> Result<Field> {
        let field = self.ptr()?;
        let ptr = check_errno("link_field", unsafe { sys::link_field(field, top, left) })?;
        log::trace!("link_field({:p}) -> {:p}", field, ptr);
        Ok(Field {
            origin: RefCell::new(Some(
                self.origin
                    .borrow()
                    .clone()
                    .unwrap_or_else(|| Rc::clone(&self.handle)),
            )),
            ..Field::from_raw(ptr, true)
        })
    }

    /// Size, position and buffer count.
    pub fn info(&self) -> Result<FieldInfo> {
        let field = self.ptr()?;
        let mut info = FieldInfo::default();
        check_status("field_info", unsafe {
            sys::field_info(
                field,
                &mut info.rows,
                &mut info.cols,
                &mut info.top,
                &mut info.left,
                &mut info.offscreen,
                &mut info.nbuffers,
            )
        })?;
        Ok(info)
    }

    /// Move the field. Fails while its form is posted.
    pub fn move_to(&self, top: Coord, left: Coord) -> Result<()> {
        let field = self.ptr()?;
        check_status("move_field", unsafe { sys::move_field(field, top, left) })
    }

    /// Contents of buffer `n`; buffer 0 holds what was typed.
    ///
    /// While the field is being edited, send [`REQ_VALIDATION`] first to sync
    /// buffer 0 with the screen.
    pub fn buffer(&self, n: i32) -> Result<String> {
        let field = self.buffer_owner()?;
        let ptr = unsafe { sys::field_buffer(field, n) };
        if ptr.is_null() {
            return Err(Error::InvalidArgument(format!("no field buffer {}", n)));
        }
        Ok(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }

    /// Replace the contents of buffer `n`.
    pub fn set_buffer(&self, n: i32, value: &str) -> Result<()> {
        let field = self.buffer_owner()?;
        let value = CString::new(value)?;
        check_status("set_field_buffer", unsafe {
            sys::set_field_buffer(field, n, value.as_ptr())
        })
    }

    /// Whether buffer 0 changed since the status was last cleared.
    pub fn status(&self) -> Result<bool> {
        let field = self.ptr()?;
        Ok(unsafe { sys::field_status(field) })
    }

    /// Set or clear the changed flag.
    pub fn set_status(&self, changed: bool) -> Result<()> {
        let field = self.ptr()?;
        check_status("set_field_status", unsafe {
            sys::set_field_status(field, changed)
        })
    }

    /// Current field options.
    pub fn options(&self) -> Result<FieldOpts> {
        let field = self.ptr()?;
        Ok(FieldOpts::from_bits_retain(unsafe { sys::field_opts(field) } as u32))
    }

    /// Replace all field options.
    pub fn set_options(&self, opts: FieldOpts) -> Result<()> {
        let field = self.ptr()?;
        check_status("set_field_opts", unsafe {
            sys::set_field_opts(field, opts.bits() as c_int)
        })
    }

    /// Turn on the given options, leaving the rest alone.
    pub fn options_on(&self, opts: FieldOpts) -> Result<()> {
        let field = self.ptr()?;
        check_status("field_opts_on", unsafe {
            sys::field_opts_on(field, opts.bits() as c_int)
        })
    }

    /// Turn off the given options, leaving the rest alone.
    pub fn options_off(&self, opts: FieldOpts) -> Result<()> {
        let field = self.ptr()?;
        check_status("field_opts_off", unsafe {
            sys::field_opts_off(field, opts.bits() as c_int)
        })
    }

    /// Current justification.
    pub fn justification(&self) -> Result<Justification> {
        let field = self.ptr()?;
        let raw = unsafe { sys::field_just(field) };
        Justification::from_raw(raw).ok_or(Error::Status {
            call: "field_just",
            code: raw,
        })
    }

    /// Set the justification.
    pub fn set_justification(&self, just: Justification) -> Result<()> {
        let field = self.ptr()?;
        check_status("set_field_just", unsafe {
            sys::set_field_just(field, just.to_raw())
        })
    }

    /// Attributes of the field's text.
    pub fn foreground(&self) -> Result<AttrT> {
        let field = self.ptr()?;
        Ok(unsafe { sys::field_fore(field) })
    }

    /// Set the attributes of the field's text.
    pub fn set_foreground(&self, attrs: AttrT) -> Result<()> {
        let field = self.ptr()?;
        check_status("set_field_fore", unsafe { sys::set_field_fore(field, attrs) })
    }

    /// Attributes of the field's unused area.
    pub fn background(&self) -> Result<AttrT> {
        let field = self.ptr()?;
        Ok(unsafe { sys::field_back(field) })
    }

    /// Set the attributes of the field's unused area.
    pub fn set_background(&self, attrs: AttrT) -> Result<()> {
        let field = self.ptr()?;
        check_status("set_field_back", unsafe { sys::set_field_back(field, attrs) })
    }

    /// Character filling the unused area.
    pub fn pad(&self) -> Result<char> {
        let field = self.ptr()?;
        let pad = unsafe { sys::field_pad(field) };
        Ok(u8::try_from(pad).map_or(' ', char::from))
    }

    /// Set the character filling the unused area.
    pub fn set_pad(&self, pad: char) -> Result<()> {
        if !pad.is_ascii() {
            return Err(Error::InvalidArgument(format!("pad must be ASCII, got {:?}", pad)));
        }
        let field = self.ptr()?;
        check_status("set_field_pad", unsafe { sys::set_field_pad(field, pad as c_int) })
    }

    /// Limit a dynamic field to `max` characters (0 removes the limit).
    pub fn set_max(&self, max: i32) -> Result<()> {
        let field = self.ptr()?;
        check_status("set_max_field", unsafe { sys::set_max_field(field, max) })
    }

    /// Position in the form the field belongs to.
    pub fn index(&self) -> Result<i32> {
        let field = self.ptr()?;
        match unsafe { sys::field_index(field) } {
            ERR => Err(Error::Status {
                call: "field_index",
                code: crate::error::E_NOT_CONNECTED,
            }),
            index => Ok(index),
        }
    }

    /// Whether two wrappers refer to the same native field.
    pub fn same_as(&self, other: &Field) -> bool {
        !self.handle.is_released() && self.handle.as_ptr() == other.handle.as_ptr()
    }

    /// Free the field. Fails while a form still refers to it.
    pub fn free(&self) -> Result<()> {
        if !self.owned {
            return Err(Error::InvalidArgument(
                "cannot free a field through a form view".into(),
            ));
        }
        if Rc::strong_count(&self.handle) > 1 {
            return Err(Error::InvalidArgument(
                "cannot free a field while linked fields refer to it".into(),
            ));
        }
        let field = self.handle.take()?;
        if let Err(err) = check_status("free_field", unsafe { sys::free_field(field) }) {
            self.handle.restore(field);
            return Err(err);
        }
        self.origin.take();
        log::trace!("free_field({:p})", field);
        Ok(())
    }
}

impl Release for Field {
    fn release(&self) -> Result<()> {
        self.free()
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Field");
        d.field("handle", &self.handle).field("owned", &self.owned);
        if let Some(origin) = self.origin.borrow().as_ref() {
            d.field("origin", origin);
        }
        if let (Ok(info), Ok(back)) = (self.info(), self.background()) {
            d.field("info", &info).field("back", &traceattr(back));
        }
        d.finish()
    }
}

// ============================================================================
// Form
// ============================================================================

/// A form of fields.
pub struct Form {
    handle: RawHandle<sys::FORM>,
    /// Null-terminated array the native form points into.
    fields: RefCell<Box<[*mut sys::FIELD]>>,
    /// Link origins of the fields, by position, so views keep reading
    /// linked buffers safely.
    origins: RefCell<Vec<Option<Rc<RawHandle<sys::FIELD>>>>>,
}

fn field_array(fields: &[Field]) -> Result<Box<[*mut sys::FIELD]>> {
    if fields.is_empty() {
        return Err(Error::InvalidArgument("a form needs at least one field".into()));
    }
    let mut array = Vec::with_capacity(fields.len() + 1);
    for field in fields {
        array.push(field.ptr()?);
    }
    array.push(std::ptr::null_mut());
    Ok(array.into_boxed_slice())
}

fn field_origins(fields: &[Field]) -> Vec<Option<Rc<RawHandle<sys::FIELD>>>> {
    fields.iter().map(|field| field.origin.borrow().clone()).collect()
}

impl Form {
    /// Create a form from `fields`.
    pub fn new(fields: &[Field]) -> Result<Self> {
        let mut array = field_array(fields)?;
        let ptr = check_errno("new_form", unsafe { sys::new_form(array.as_mut_ptr()) })?;
        log::trace!("new_form({} fields) -> {:p}", fields.len(), ptr);
        Ok(Self {
            handle: RawHandle::new(ptr, "Form"),
            fields: RefCell::new(array),
            origins: RefCell::new(field_origins(fields)),
        })
    }

    fn ptr(&self) -> Result<*mut sys::FORM> {
        self.handle.get()
    }

    fn view(&self, ptr: *mut sys::FIELD) -> Field {
        let origin = self
            .fields
            .borrow()
            .iter()
            .position(|&p| p == ptr)
            .and_then(|i| self.origins.borrow().get(i).cloned().flatten());
        Field {
            origin: RefCell::new(origin),
            ..Field::from_raw(ptr, false)
        }
    }

    /// Display the form in its window.
    pub fn post(&self) -> Result<()> {
        let form = self.ptr()?;
        check_status("post_form", unsafe { sys::post_form(form) })?;
        log::trace!("post_form({:p})", form);
        Ok(())
    }

    /// Erase the form from its window.
    pub fn unpost(&self) -> Result<()> {
        let form = self.ptr()?;
        check_status("unpost_form", unsafe { sys::unpost_form(form) })?;
        log::trace!("unpost_form({:p})", form);
        Ok(())
    }

    /// Apply a request (`REQ_*`) or a printable character to the current
    /// field.
    pub fn driver(&self, request: i32) -> Result<()> {
        let form = self.ptr()?;
        check_status("form_driver", unsafe { sys::form_driver(form, request) })
    }

    /// Free the form. Its fields stay valid. Fails while posted.
    pub fn free(&self) -> Result<()> {
        let form = self.handle.take()?;
        if let Err(err) = check_status("free_form", unsafe { sys::free_form(form) }) {
            self.handle.restore(form);
            return Err(err);
        }
        self.fields.replace(Box::new([]));
        self.origins.replace(Vec::new());
        log::trace!("free_form({:p})", form);
        Ok(())
    }

    // ========================================================================
    // Fields and pages
    // ========================================================================

    /// Number of fields.
    pub fn field_count(&self) -> Result<i32> {
        let form = self.ptr()?;
        Ok(unsafe { sys::field_count(form) })
    }

    /// Views of the form's fields, in order.
    pub fn fields(&self) -> Result<Vec<Field>> {
        self.ptr()?;
        let fields = self.fields.borrow();
        Ok(fields
            .iter()
            .take_while(|p| !p.is_null())
            .map(|&p| self.view(p))
            .collect())
    }

    /// Replace the form's fields. Fails while posted.
    pub fn set_fields(&self, fields: &[Field]) -> Result<()> {
        let form = self.ptr()?;
        let mut array = field_array(fields)?;
        check_status("set_form_fields", unsafe {
            sys::set_form_fields(form, array.as_mut_ptr())
        })?;
        self.fields.replace(array);
        self.origins.replace(field_origins(fields));
        Ok(())
    }

    /// View of the current field.
    pub fn current(&self) -> Result<Option<Field>> {
        let form = self.ptr()?;
        let field = unsafe { sys::current_field(form) };
        Ok((!field.is_null()).then(|| self.view(field)))
    }

    /// Make `field` the current field.
    pub fn set_current(&self, field: &Field) -> Result<()> {
        let form = self.ptr()?;
        let field = field.ptr()?;
        check_status("set_current_field", unsafe {
            sys::set_current_field(form, field)
        })
    }

    /// Current page.
    pub fn page(&self) -> Result<i32> {
        let form = self.ptr()?;
        Ok(unsafe { sys::form_page(form) })
    }

    /// Show page `n`.
    pub fn set_page(&self, n: i32) -> Result<()> {
        let form = self.ptr()?;
        check_status("set_form_page", unsafe { sys::set_form_page(form, n) })
    }

    // ========================================================================
    // Options
    // ========================================================================

    /// Current form options.
    pub fn options(&self) -> Result<FormOpts> {
        let form = self.ptr()?;
        Ok(FormOpts::from_bits_retain(unsafe { sys::form_opts(form) } as u32))
    }

    /// Replace all form options.
    pub fn set_options(&self, opts: FormOpts) -> Result<()> {
        let form = self.ptr()?;
        check_status("set_form_opts", unsafe {
            sys::set_form_opts(form, opts.bits() as c_int)
        })
    }

    /// Turn the given options on or off, leaving the rest alone.
    pub fn option(&self, opts: FormOpts, on: bool) -> Result<()> {
        let form = self.ptr()?;
        if on {
            check_status("form_opts_on", unsafe {
                sys::form_opts_on(form, opts.bits() as c_int)
            })
        } else {
            check_status("form_opts_off", unsafe {
                sys::form_opts_off(form, opts.bits() as c_int)
            })
        }
    }

    // ========================================================================
    // Windows
    // ========================================================================

    /// Draw the form frame in `window`. The window must outlive the form.
    pub fn set_window(&self, window: &Window) -> Result<()> {
        let form = self.ptr()?;
        let win = window.as_ptr()?;
        check_status("set_form_win", unsafe { sys::set_form_win(form, win) })
    }

    /// View of the form's window. Falls back to the standard screen
    /// when none was set.
    pub fn window(&self) -> Result<Window> {
        let form = self.ptr()?;
        let win = unsafe { sys::form_win(form) }.into_result("form_win")?;
        Ok(Window::from_raw(win, false))
    }

    /// Draw the fields in `window`, usually a derived window of the frame.
    pub fn set_sub_window(&self, window: &Window) -> Result<()> {
        let form = self.ptr()?;
        let win = window.as_ptr()?;
        check_status("set_form_sub", unsafe { sys::set_form_sub(form, win) })
    }

    /// View of the form's field window. Falls back to the standard screen
    /// when none was set.
    pub fn sub_window(&self) -> Result<Window> {
        let form = self.ptr()?;
        let win = unsafe { sys::form_sub(form) }.into_result("form_sub")?;
        Ok(Window::from_raw(win, false))
    }

    /// Minimum window size, as (rows, columns), to hold the form.
    pub fn scale(&self) -> Result<(i32, i32)> {
        let form = self.ptr()?;
        let (mut rows, mut cols) = (0, 0);
        check_status("scale_form", unsafe { sys::scale_form(form, &mut rows, &mut cols) })?;
        Ok((rows, cols))
    }

    /// Put the cursor back where editing continues.
    pub fn position_cursor(&self) -> Result<()> {
        let form = self.ptr()?;
        check_status("pos_form_cursor", unsafe { sys::pos_form_cursor(form) })
    }
}

impl Release for Form {
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

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Form");
        d.field("handle", &self.handle);
        if let (Ok(count), Ok(page)) = (self.field_count(), self.page()) {
            d.field("fields", &count).field("page", &page);
        }
        d.finish()
    }
}

// ============================================================================
// C-style functions
// ============================================================================

/// Create a field (C-style alias).
#[inline]
pub fn new_field(
    height: Coord,
    width: Coord,
    top: Coord,
    left: Coord,
    offscreen: Coord,
    nbuffers: Coord,
) -> Result<Field> {
    Field::new(height, width, top, left, offscreen, nbuffers)
}

/// Free a field (C-style alias).
#[inline]
pub fn free_field(field: &Field) -> Result<()> {
    field.free()
}

/// Create a form (C-style alias).
#[inline]
pub fn new_form(fields: &[Field]) -> Result<Form> {
    Form::new(fields)
}

/// Free a form (C-style alias).
#[inline]
pub fn free_form(form: &Form) -> Result<()> {
    form.free()
}

/// Post a form (C-style alias).
#[inline]
pub fn post_form(form: &Form) -> Result<()> {
    form.post()
}

/// Unpost a form (C-style alias).
#[inline]
pub fn unpost_form(form: &Form) -> Result<()> {
    form.unpost()
}

/// Apply a request to a form (C-style alias).
#[inline]
pub fn form_driver(form: &Form, request: i32) -> Result<()> {
    form.driver(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_codes_follow_key_max() {
        assert_eq!(REQ_NEXT_PAGE, 512);
        assert_eq!(REQ_NEXT_FIELD, 516);
        assert_eq!(REQ_VALIDATION, 566);
        assert_eq!(MAX_FORM_COMMAND, 568);
    }

    #[test]
    fn test_option_bits() {
        assert_eq!(FieldOpts::O_AUTOSKIP.bits(), 0x40);
        assert_eq!(FieldOpts::O_PASSOK.bits(), 0x100);
        assert_eq!(FieldOpts::O_STATIC.bits(), 0x200);
        assert_eq!(FormOpts::O_BS_OVERLOAD.bits(), 2);
    }

    #[test]
    fn test_justification_values() {
        assert_eq!(Justification::Center.to_raw(), 2);
        assert_eq!(Justification::from_raw(3), Some(Justification::Right));
        assert_eq!(Justification::from_raw(4), None);
    }

    #[test]
    fn test_request_names() {
        assert_eq!(request_name(REQ_NEXT_FIELD).as_deref(), Some("NEXT_FIELD"));
        assert_eq!(request_by_name("VALIDATION"), Some(REQ_VALIDATION));
        assert_eq!(request_by_name("bogus"), None);
    }

    #[test]
    fn test_field_arguments_checked() {
        assert!(matches!(
            Field::new(0, 10, 0, 0, 0, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Field::new(1, 10, -1, 0, 0, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(Form::new(&[]), Err(Error::InvalidArgument(_))));
    }
}
