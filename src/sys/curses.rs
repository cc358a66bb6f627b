//! libncursesw.

use libc::{c_char, c_int, c_short, c_void, FILE};

pub type chtype = u32;
pub type attr_t = chtype;
pub type mmask_t = u32;

#[repr(C)]
pub struct WINDOW {
    _opaque: [u8; 0],
}

#[repr(C)]
pub struct SCREEN {
    _opaque: [u8; 0],
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct MEVENT {
    pub id: c_short,
    pub x: c_int,
    pub y: c_int,
    pub z: c_int,
    pub bstate: mmask_t,
}

#[cfg_attr(target_os = "macos", link(name = "ncurses"))]
#[cfg_attr(not(target_os = "macos"), link(name = "ncursesw"))]
unsafe extern "C" {
    pub static mut stdscr: *mut WINDOW;
    pub static mut curscr: *mut WINDOW;
    pub static mut COLS: c_int;
    pub static mut LINES: c_int;
    pub static mut COLORS: c_int;
    pub static mut COLOR_PAIRS: c_int;
    pub static mut ESCDELAY: c_int;
    pub static mut TABSIZE: c_int;
    pub static mut acs_map: [chtype; 128];

    // initialization and terminal modes
    pub fn initscr() -> *mut WINDOW;
    pub fn endwin() -> c_int;
    pub fn isendwin() -> bool;
    pub fn newterm(term: *const c_char, outf: *mut FILE, inf: *mut FILE) -> *mut SCREEN;
    pub fn set_term(new: *mut SCREEN) -> *mut SCREEN;
    pub fn delscreen(sp: *mut SCREEN);
    pub fn doupdate() -> c_int;
    pub fn cbreak() -> c_int;
    pub fn nocbreak() -> c_int;
    pub fn raw() -> c_int;
    pub fn noraw() -> c_int;
    pub fn echo() -> c_int;
    pub fn noecho() -> c_int;
    pub fn nl() -> c_int;
    pub fn nonl() -> c_int;
    pub fn halfdelay(tenths: c_int) -> c_int;
    pub fn curs_set(visibility: c_int) -> c_int;
    pub fn beep() -> c_int;
    pub fn flash() -> c_int;
    pub fn baudrate() -> c_int;
    pub fn curses_version() -> *const c_char;
    pub fn napms(ms: c_int) -> c_int;
    pub fn flushinp() -> c_int;
    pub fn ungetch(ch: c_int) -> c_int;
    pub fn has_key(ch: c_int) -> c_int;
    pub fn keyname(ch: c_int) -> *const c_char;
    pub fn is_term_resized(lines: c_int, cols: c_int) -> bool;
    pub fn resizeterm(lines: c_int, cols: c_int) -> c_int;
    pub fn def_prog_mode() -> c_int;
    pub fn reset_prog_mode() -> c_int;
    pub fn def_shell_mode() -> c_int;
    pub fn reset_shell_mode() -> c_int;
    pub fn set_escdelay(ms: c_int) -> c_int;
    pub fn set_tabsize(cols: c_int) -> c_int;
    pub fn meta(win: *mut WINDOW, on: bool) -> c_int;
    pub fn intrflush(win: *mut WINDOW, on: bool) -> c_int;

    // color
    pub fn has_colors() -> bool;
    pub fn can_change_color() -> bool;
    pub fn start_color() -> c_int;
    pub fn use_default_colors() -> c_int;
    pub fn init_pair(pair: c_short, f: c_short, b: c_short) -> c_int;
    pub fn pair_content(pair: c_short, f: *mut c_short, b: *mut c_short) -> c_int;
    pub fn init_color(color: c_short, r: c_short, g: c_short, b: c_short) -> c_int;
    pub fn color_content(color: c_short, r: *mut c_short, g: *mut c_short, b: *mut c_short)
        -> c_int;
    pub fn COLOR_PAIR(n: c_int) -> c_int;
    pub fn PAIR_NUMBER(attrs: c_int) -> c_int;

    // window lifecycle and geometry
    pub fn newwin(nlines: c_int, ncols: c_int, begin_y: c_int, begin_x: c_int) -> *mut WINDOW;
    pub fn delwin(win: *mut WINDOW) -> c_int;
    pub fn mvwin(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub fn wresize(win: *mut WINDOW, lines: c_int, cols: c_int) -> c_int;
    pub fn subwin(
        orig: *mut WINDOW,
        nlines: c_int,
        ncols: c_int,
        begin_y: c_int,
        begin_x: c_int,
    ) -> *mut WINDOW;
    pub fn derwin(
        orig: *mut WINDOW,
        nlines: c_int,
        ncols: c_int,
        begin_y: c_int,
        begin_x: c_int,
    ) -> *mut WINDOW;
    pub fn dupwin(win: *mut WINDOW) -> *mut WINDOW;
    pub fn wgetparent(win: *const WINDOW) -> *mut WINDOW;
    pub fn getmaxy(win: *const WINDOW) -> c_int;
    pub fn getmaxx(win: *const WINDOW) -> c_int;
    pub fn getcury(win: *const WINDOW) -> c_int;
    pub fn getcurx(win: *const WINDOW) -> c_int;
    pub fn getbegy(win: *const WINDOW) -> c_int;
    pub fn getbegx(win: *const WINDOW) -> c_int;
    pub fn getpary(win: *const WINDOW) -> c_int;
    pub fn getparx(win: *const WINDOW) -> c_int;
    pub fn wmove(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;

    // output
    pub fn waddch(win: *mut WINDOW, ch: chtype) -> c_int;
    pub fn mvwaddch(win: *mut WINDOW, y: c_int, x: c_int, ch: chtype) -> c_int;
    pub fn waddnstr(win: *mut WINDOW, s: *const c_char, n: c_int) -> c_int;
    pub fn mvwaddnstr(win: *mut WINDOW, y: c_int, x: c_int, s: *const c_char, n: c_int) -> c_int;
    pub fn winsch(win: *mut WINDOW, ch: chtype) -> c_int;
    pub fn winsertln(win: *mut WINDOW) -> c_int;
    pub fn wdeleteln(win: *mut WINDOW) -> c_int;
    pub fn wdelch(win: *mut WINDOW) -> c_int;
    pub fn mvwdelch(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;

    // attributes and background
    pub fn wattron(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub fn wattroff(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub fn wattrset(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub fn wattr_get(
        win: *mut WINDOW,
        attrs: *mut attr_t,
        pair: *mut c_short,
        opts: *mut c_void,
    ) -> c_int;
    pub fn wcolor_set(win: *mut WINDOW, pair: c_short, opts: *mut c_void) -> c_int;
    pub fn wstandout(win: *mut WINDOW) -> c_int;
    pub fn wstandend(win: *mut WINDOW) -> c_int;
    pub fn wbkgd(win: *mut WINDOW, ch: chtype) -> c_int;
    pub fn wbkgdset(win: *mut WINDOW, ch: chtype);
    pub fn getbkgd(win: *mut WINDOW) -> chtype;

    // borders and lines
    pub fn wborder(
        win: *mut WINDOW,
        ls: chtype,
        rs: chtype,
        ts: chtype,
        bs: chtype,
        tl: chtype,
        tr: chtype,
        bl: chtype,
        br: chtype,
    ) -> c_int;
    #[link_name = "box"]
    pub fn box_(win: *mut WINDOW, verch: chtype, horch: chtype) -> c_int;
    pub fn whline(win: *mut WINDOW, ch: chtype, n: c_int) -> c_int;
    pub fn wvline(win: *mut WINDOW, ch: chtype, n: c_int) -> c_int;
    pub fn mvwhline(win: *mut WINDOW, y: c_int, x: c_int, ch: chtype, n: c_int) -> c_int;
    pub fn mvwvline(win: *mut WINDOW, y: c_int, x: c_int, ch: chtype, n: c_int) -> c_int;

    // clearing
    pub fn wclear(win: *mut WINDOW) -> c_int;
    pub fn werase(win: *mut WINDOW) -> c_int;
    pub fn wclrtoeol(win: *mut WINDOW) -> c_int;
    pub fn wclrtobot(win: *mut WINDOW) -> c_int;
    pub fn clearok(win: *mut WINDOW, on: bool) -> c_int;
    pub fn is_cleared(win: *const WINDOW) -> bool;

    // input
    pub fn wgetch(win: *mut WINDOW) -> c_int;
    pub fn mvwgetch(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub fn wgetnstr(win: *mut WINDOW, s: *mut c_char, n: c_int) -> c_int;
    pub fn winch(win: *mut WINDOW) -> chtype;
    pub fn mvwinch(win: *mut WINDOW, y: c_int, x: c_int) -> chtype;
    pub fn winnstr(win: *mut WINDOW, s: *mut c_char, n: c_int) -> c_int;

    // copying
    pub fn copywin(
        src: *const WINDOW,
        dst: *mut WINDOW,
        sminrow: c_int,
        smincol: c_int,
        dminrow: c_int,
        dmincol: c_int,
        dmaxrow: c_int,
        dmaxcol: c_int,
        overlay: c_int,
    ) -> c_int;
    pub fn overlay(src: *const WINDOW, dst: *mut WINDOW) -> c_int;
    pub fn overwrite(src: *const WINDOW, dst: *mut WINDOW) -> c_int;

    // options
    pub fn wscrl(win: *mut WINDOW, n: c_int) -> c_int;
    pub fn scrollok(win: *mut WINDOW, on: bool) -> c_int;
    pub fn wsetscrreg(win: *mut WINDOW, top: c_int, bot: c_int) -> c_int;
    pub fn keypad(win: *mut WINDOW, on: bool) -> c_int;
    pub fn is_keypad(win: *const WINDOW) -> bool;
    pub fn nodelay(win: *mut WINDOW, on: bool) -> c_int;
    pub fn wtimeout(win: *mut WINDOW, delay: c_int);
    pub fn leaveok(win: *mut WINDOW, on: bool) -> c_int;
    pub fn idlok(win: *mut WINDOW, on: bool) -> c_int;
    pub fn immedok(win: *mut WINDOW, on: bool);
    pub fn syncok(win: *mut WINDOW, on: bool) -> c_int;

    // refresh and touch
    pub fn wrefresh(win: *mut WINDOW) -> c_int;
    pub fn wnoutrefresh(win: *mut WINDOW) -> c_int;
    pub fn redrawwin(win: *mut WINDOW) -> c_int;
    pub fn touchwin(win: *mut WINDOW) -> c_int;
    pub fn untouchwin(win: *mut WINDOW) -> c_int;
    pub fn touchline(win: *mut WINDOW, start: c_int, count: c_int) -> c_int;
    pub fn is_wintouched(win: *mut WINDOW) -> bool;
    pub fn is_linetouched(win: *mut WINDOW, line: c_int) -> bool;
    pub fn wsyncup(win: *mut WINDOW);
    pub fn wsyncdown(win: *mut WINDOW);
    pub fn wcursyncup(win: *mut WINDOW);

    // pads
    pub fn newpad(nlines: c_int, ncols: c_int) -> *mut WINDOW;
    pub fn subpad(
        orig: *mut WINDOW,
        nlines: c_int,
        ncols: c_int,
        begin_y: c_int,
        begin_x: c_int,
    ) -> *mut WINDOW;
    pub fn prefresh(
        pad: *mut WINDOW,
        pminrow: c_int,
        pmincol: c_int,
        sminrow: c_int,
        smincol: c_int,
        smaxrow: c_int,
        smaxcol: c_int,
    ) -> c_int;
    pub fn pnoutrefresh(
        pad: *mut WINDOW,
        pminrow: c_int,
        pmincol: c_int,
        sminrow: c_int,
        smincol: c_int,
        smaxrow: c_int,
        smaxcol: c_int,
    ) -> c_int;
    pub fn pechochar(pad: *mut WINDOW, ch: chtype) -> c_int;
    pub fn is_pad(win: *const WINDOW) -> bool;

    // mouse
    pub fn mousemask(newmask: mmask_t, oldmask: *mut mmask_t) -> mmask_t;
    pub fn getmouse(event: *mut MEVENT) -> c_int;
    pub fn ungetmouse(event: *mut MEVENT) -> c_int;
    pub fn mouseinterval(erval: c_int) -> c_int;
    pub fn has_mouse() -> bool;
    pub fn wenclose(win: *const WINDOW, y: c_int, x: c_int) -> bool;
    pub fn wmouse_trafo(win: *const WINDOW, y: *mut c_int, x: *mut c_int, to_screen: bool)
        -> bool;

    // soft label keys
    pub fn slk_init(fmt: c_int) -> c_int;
    pub fn slk_set(labnum: c_int, label: *const c_char, justify: c_int) -> c_int;
    pub fn slk_label(labnum: c_int) -> *mut c_char;
    pub fn slk_refresh() -> c_int;
    pub fn slk_noutrefresh() -> c_int;
    pub fn slk_clear() -> c_int;
    pub fn slk_restore() -> c_int;
    pub fn slk_touch() -> c_int;
    pub fn slk_color(pair: c_short) -> c_int;
    pub fn slk_attrset(attrs: chtype) -> c_int;
    pub fn slk_attron(attrs: chtype) -> c_int;
    pub fn slk_attroff(attrs: chtype) -> c_int;
}
