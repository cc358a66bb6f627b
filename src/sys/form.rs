//! libformw.

use super::curses::{chtype, WINDOW};
use libc::{c_char, c_int};

#[repr(C)]
pub struct FIELD {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct FORM {
    _opaque: [u8; 0],
}

pub type Field_Options = c_int;
pub type Form_Options = c_int;

#[cfg_attr(target_os = "macos", link(name = "form"))]
#[cfg_attr(not(target_os = "macos"), link(name = "formw"))]
unsafe extern "C" {
    // fields
    pub fn new_field(
        height: c_int,
        width: c_int,
        toprow: c_int,
        leftcol: c_int,
        offscreen: c_int,
        nbuffers: c_int,
    ) -> *mut FIELD;
    pub fn dup_field(field: *mut FIELD, toprow: c_int, leftcol: c_int) -> *mut FIELD;
    pub fn link_field(field: *mut FIELD, toprow: c_int, leftcol: c_int) -> *mut FIELD;
    pub fn free_field(field: *mut FIELD) -> c_int;
    pub fn field_info(
        field: *const FIELD,
        rows: *mut c_int,
        cols: *mut c_int,
        frow: *mut c_int,
        fcol: *mut c_int,
        nrow: *mut c_int,
        nbuf: *mut c_int,
    ) -> c_int;
    pub fn move_field(field: *mut FIELD, frow: c_int, fcol: c_int) -> c_int;
    pub fn field_buffer(field: *const FIELD, buffer: c_int) -> *mut c_char;
    pub fn set_field_buffer(field: *mut FIELD, buf: c_int, value: *const c_char) -> c_int;
    pub fn field_status(field: *const FIELD) -> bool;
    pub fn set_field_status(field: *mut FIELD, status: bool) -> c_int;
    pub fn field_opts(field: *const FIELD) -> Field_Options;
    pub fn set_field_opts(field: *mut FIELD, opts: Field_Options) -> c_int;
    pub fn field_opts_on(field: *mut FIELD, opts: Field_Options) -> c_int;
    pub fn field_opts_off(field: *mut FIELD, opts: Field_Options) -> c_int;
    pub fn field_just(field: *const FIELD) -> c_int;
    pub fn set_field_just(field: *mut FIELD, justification: c_int) -> c_int;
    pub fn field_fore(field: *const FIELD) -> chtype;
    pub fn set_field_fore(field: *mut FIELD, attr: chtype) -> c_int;
    pub fn field_back(field: *const FIELD) -> chtype;
    pub fn set_field_back(field: *mut FIELD, attr: chtype) -> c_int;
    pub fn field_pad(field: *const FIELD) -> c_int;
    pub fn set_field_pad(field: *mut FIELD, pad: c_int) -> c_int;
    pub fn set_max_field(field: *mut FIELD, max: c_int) -> c_int;
    pub fn field_index(field: *const FIELD) -> c_int;

    // forms
    pub fn new_form(fields: *mut *mut FIELD) -> *mut FORM;
    pub fn free_form(form: *mut FORM) -> c_int;
    pub fn post_form(form: *mut FORM) -> c_int;
    pub fn unpost_form(form: *mut FORM) -> c_int;
    pub fn form_driver(form: *mut FORM, c: c_int) -> c_int;
    pub fn field_count(form: *const FORM) -> c_int;
    pub fn form_fields(form: *const FORM) -> *mut *mut FIELD;
    pub fn set_form_fields(form: *mut FORM, fields: *mut *mut FIELD) -> c_int;
    pub fn current_field(form: *const FORM) -> *mut FIELD;
    pub fn set_current_field(form: *mut FORM, field: *mut FIELD) -> c_int;
    pub fn form_page(form: *const FORM) -> c_int;
    pub fn set_form_page(form: *mut FORM, n: c_int) -> c_int;
    pub fn form_opts(form: *const FORM) -> Form_Options;
    pub fn set_form_opts(form: *mut FORM, opts: Form_Options) -> c_int;
    pub fn form_opts_on(form: *mut FORM, opts: Form_Options) -> c_int;
    pub fn form_opts_off(form: *mut FORM, opts: Form_Options) -> c_int;
    pub fn set_form_win(form: *mut FORM, win: *mut WINDOW) -> c_int;
    pub fn form_win(form: *const FORM) -> *mut WINDOW;
    pub fn set_form_sub(form: *mut FORM, sub: *mut WINDOW) -> c_int;
    pub fn form_sub(form: *const FORM) -> *mut WINDOW;
    pub fn scale_form(form: *const FORM, rows: *mut c_int, cols: *mut c_int) -> c_int;
    pub fn pos_form_cursor(form: *mut FORM) -> c_int;
    pub fn form_request_name(request: c_int) -> *const c_char;
    pub fn form_request_by_name(name: *const c_char) -> c_int;
}
