//! Integration tests for ncurses-bind
//!
//! Each test drives a real terminal created with `newterm` on temporary
//! files, so no tty is needed. The native library keeps global state, so
//! tests take a process-wide lock before touching it. Tests are skipped when
//! no usable terminfo entry is installed.

use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::sync::{Mutex, MutexGuard};

use ncurses::*;

static NATIVE: Mutex<()> = Mutex::new(());

const TERMINALS: [&str; 3] = ["xterm", "xterm-256color", "vt100"];

fn lock() -> MutexGuard<'static, ()> {
    NATIVE.lock().unwrap_or_else(|e| e.into_inner())
}

fn input_file(keys: &str) -> File {
    let mut input = tempfile::tempfile().unwrap();
    input.write_all(keys.as_bytes()).unwrap();
    input.seek(SeekFrom::Start(0)).unwrap();
    input
}

fn open_screen(output: &File, input: &File) -> Option<Screen> {
    TERMINALS
        .iter()
        .find_map(|term| Screen::new_term(term, output, input).ok())
}

/// A terminal writing to a temp file and reading scripted keys.
struct Term {
    screen: Screen,
    _output: File,
    _input: File,
    _guard: MutexGuard<'static, ()>,
}

impl Term {
    fn with_input(keys: &str) -> Option<Term> {
        let guard = lock();
        let output = tempfile::tempfile().unwrap();
        let input = input_file(keys);
        match open_screen(&output, &input) {
            Some(screen) => Some(Term {
                screen,
                _output: output,
                _input: input,
                _guard: guard,
            }),
            None => {
                eprintln!("skipping: no terminfo entry for {:?}", TERMINALS);
                None
            }
        }
    }

    fn new() -> Option<Term> {
        Term::with_input("")
    }
}

impl Drop for Term {
    fn drop(&mut self) {
        let _ = self.screen.release();
    }
}

/// Test writing text and reading back the first cell
#[test]
fn test_hello_round_trip() {
    let Some(_term) = Term::new() else { return };

    let win = Window::new(5, 20, 2, 2).unwrap();
    win.move_print(0, 0, "Hello").unwrap();
    win.refresh().unwrap();

    let cell = win.move_in_char(0, 0).unwrap();
    assert_eq!(chtype_char(cell), b'H');
    assert_eq!(chtype_attr(cell), A_NORMAL);
    assert_eq!(win.move_in_char(0, 4).map(chtype_char).unwrap(), b'o');
    win.delete().unwrap();
}

/// Test window geometry queries
#[test]
fn test_window_geometry() {
    let Some(_term) = Term::new() else { return };

    let win = Window::new(5, 20, 2, 2).unwrap();
    assert_eq!(win.max_yx().unwrap(), (5, 20));
    assert_eq!(win.yx().unwrap(), (2, 2));
    assert_eq!(win.par_yx().unwrap(), (-1, -1));

    win.move_to(3, 7).unwrap();
    assert_eq!(win.cursor_yx().unwrap(), (3, 7));
    assert!(win.move_to(5, 0).is_err());

    win.delete().unwrap();
}

/// Test delete then reuse of a window
#[test]
fn test_window_delete_invalidates() {
    let Some(_term) = Term::new() else { return };

    let win = Window::new(3, 10, 0, 0).unwrap();
    win.delete().unwrap();
    assert!(win.is_deleted());
    assert_eq!(win.print("x"), Err(Error::Released("Window")));
    assert_eq!(win.delete(), Err(Error::Released("Window")));
}

/// Test that stdscr is a view that cannot be deleted
#[test]
fn test_stdscr_is_borrowed() {
    let Some(_term) = Term::new() else { return };

    let stdscr = stdscr().unwrap();
    assert!(matches!(stdscr.delete(), Err(Error::InvalidArgument(_))));
    assert_eq!(stdscr.max_yx().unwrap(), (lines(), cols()));
}

/// Test derived windows share storage and duplicates do not
#[test]
fn test_derived_and_duplicate() {
    let Some(_term) = Term::new() else { return };

    let parent = Window::new(5, 20, 2, 2).unwrap();
    let child = parent.derived(2, 5, 1, 1).unwrap();
    assert_eq!(child.yx().unwrap(), (3, 3));
    assert_eq!(child.par_yx().unwrap(), (1, 1));
    assert!(child.parent().unwrap().unwrap().same_as(&parent));

    child.move_add_char(0, 0, 'Z' as ChType).unwrap();
    assert_eq!(chtype_char(parent.move_in_char(1, 1).unwrap()), b'Z');

    let copy = parent.duplicate().unwrap();
    copy.move_add_char(1, 1, 'Q' as ChType).unwrap();
    assert_eq!(chtype_char(parent.move_in_char(1, 1).unwrap()), b'Z');

    copy.delete().unwrap();
    child.delete().unwrap();
    parent.delete().unwrap();
}

/// Test attributes set on a window are stored with the cells
#[test]
fn test_attributes() {
    let Some(_term) = Term::new() else { return };

    let win = Window::new(3, 10, 0, 0).unwrap();
    win.attr_on(A_BOLD).unwrap();
    assert_eq!(win.attr_get().unwrap().0 & A_BOLD, A_BOLD);
    win.print("B").unwrap();
    win.attr_off(A_BOLD).unwrap();
    win.print("n").unwrap();

    assert_eq!(chtype_attr(win.move_in_char(0, 0).unwrap()), A_BOLD);
    assert_eq!(chtype_attr(win.move_in_char(0, 1).unwrap()), A_NORMAL);
    assert!(win.in_string(2).unwrap().starts_with('n'));
    win.delete().unwrap();
}

/// Test clearing helpers
#[test]
fn test_clear_to_eol() {
    let Some(_term) = Term::new() else { return };

    let win = Window::new(3, 10, 0, 0).unwrap();
    win.move_print(0, 0, "abcdef").unwrap();
    win.move_to(0, 3).unwrap();
    win.clear_to_eol().unwrap();
    assert_eq!(win.move_in_char(0, 2).map(chtype_char).unwrap(), b'c');
    assert_eq!(win.move_in_char(0, 3).map(chtype_char).unwrap(), b' ');
    win.erase().unwrap();
    assert_eq!(win.move_in_char(0, 0).map(chtype_char).unwrap(), b' ');
    win.delete().unwrap();
}

/// Test borders and lines draw without error
#[test]
fn test_borders() {
    let Some(_term) = Term::new() else { return };

    let win = Window::new(5, 20, 0, 0).unwrap();
    win.box_(0, 0).unwrap();
    win.border(BorderChars::default()).unwrap();
    let plus = '+' as ChType;
    let frame = BorderChars::simple('|' as ChType, '-' as ChType).with_corners(plus, plus, plus, plus);
    win.border(frame).unwrap();
    assert_eq!(chtype_char(win.move_in_char(0, 0).unwrap()), b'+');
    assert_eq!(chtype_char(win.move_in_char(0, 1).unwrap()), b'-');
    assert_eq!(chtype_char(win.move_in_char(1, 0).unwrap()), b'|');
    win.move_hline(2, 1, ACS_HLINE, 18).unwrap();
    win.move_vline(1, 10, ACS_VLINE, 3).unwrap();
    let corner = win.move_in_char(0, 0).unwrap();
    assert_ne!(chtype_char(corner), b' ');
    win.delete().unwrap();
}

/// Test bounded string input is clamped to the requested length
#[test]
fn test_get_string_clamps() {
    let Some(_term) = Term::with_input("abcdefghij\n") else { return };

    let win = Window::new(5, 20, 2, 2).unwrap();
    let s = win.get_string(5).unwrap();
    assert!(!s.is_empty());
    assert!(s.len() <= 5, "got {:?}", s);
    assert!("abcdefghij".starts_with(&s));
    win.delete().unwrap();
}

/// Test reading scripted keys and the no-input sentinel
#[test]
fn test_get_char() {
    let Some(_term) = Term::with_input("q") else { return };

    let win = Window::new(3, 10, 0, 0).unwrap();
    win.timeout(Delay::NoDelay).unwrap();
    assert_eq!(win.get_char().unwrap(), Some('q' as i32));
    assert_eq!(win.get_char().unwrap(), None);

    ungetch('x' as i32).unwrap();
    assert_eq!(win.get_key().unwrap(), Some(Key::Char('x')));
    win.delete().unwrap();
}

/// Test staged refreshes flushed by a single update
#[test]
fn test_nout_refresh_then_update() {
    let Some(_term) = Term::new() else { return };

    let left = Window::new(5, 10, 0, 0).unwrap();
    let right = Window::new(5, 10, 0, 20).unwrap();
    left.print("left").unwrap();
    right.print("right").unwrap();
    assert!(left.touched().unwrap());

    left.nout_refresh().unwrap();
    right.nout_refresh().unwrap();
    assert!(!left.touched().unwrap());
    update().unwrap();

    right.delete().unwrap();
    left.delete().unwrap();
}

/// Test window sync modes
#[test]
fn test_sync_modes() {
    let Some(_term) = Term::new() else { return };

    let parent = Window::new(5, 20, 0, 0).unwrap();
    let child = parent.sub(2, 5, 1, 1).unwrap();
    for mode in [SyncMode::Up, SyncMode::Down, SyncMode::Cursor, SyncMode::None] {
        child.sync(mode).unwrap();
    }
    child.delete().unwrap();
    parent.delete().unwrap();
}

/// Test scoped release on block exit
#[test]
fn test_scoped_window() {
    let Some(_term) = Term::new() else { return };

    {
        let win = Scoped::new(Window::new(3, 10, 0, 0).unwrap());
        win.print("scoped").unwrap();
    }
    let win = Scoped::new(Window::new(3, 10, 0, 0).unwrap());
    assert!(win.finish().is_ok());
}

/// Test pad refresh rectangles are validated
#[test]
fn test_pad_refresh_bounds() {
    let Some(_term) = Term::new() else { return };

    let pad = Pad::new(50, 100).unwrap();
    pad.move_print(40, 90, "pad").unwrap();
    pad.refresh(40, 90, Rect::new(0, 0, 5, 10)).unwrap();
    pad.nout_refresh(0, 0, Rect::new(0, 0, 5, 10)).unwrap();
    update().unwrap();

    assert!(matches!(
        pad.refresh(45, 0, Rect::new(0, 0, 10, 10)),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        pad.refresh(0, 0, Rect::new(lines() - 1, 0, 5, 10)),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        pad.refresh(0, 0, Rect::new(0, 0, 0, 10)),
        Err(Error::InvalidArgument(_))
    ));

    pad.echo_char('e' as ChType).unwrap();
    let sub = pad.sub(5, 5, 0, 0).unwrap();
    sub.move_print(0, 0, "sub").unwrap();
    sub.delete().unwrap();
    pad.delete().unwrap();
}

/// Test color pair range checks
#[test]
fn test_init_pair_rejects_pair_zero() {
    let Some(_term) = Term::new() else { return };

    if has_colors() {
        start_color().unwrap();
        init_pair(1, COLOR_RED, COLOR_BLACK).unwrap();
        assert_eq!(pair_content(1).unwrap(), (COLOR_RED, COLOR_BLACK));
    }
    assert!(matches!(
        init_pair(0, COLOR_RED, COLOR_BLACK),
        Err(Error::InvalidArgument(_))
    ));
    let past_end = PairT::try_from(color_pairs()).unwrap_or(PairT::MAX);
    assert!(matches!(
        init_pair(past_end, COLOR_RED, COLOR_BLACK),
        Err(Error::InvalidArgument(_))
    ));
}

/// Test two screens ended in reverse order of creation
#[test]
fn test_two_screens_lifo() {
    let _guard = lock();
    let (out1, out2) = (tempfile::tempfile().unwrap(), tempfile::tempfile().unwrap());
    let (in1, in2) = (input_file(""), input_file(""));

    let Some(first) = open_screen(&out1, &in1) else { return };
    let second = open_screen(&out2, &in2).unwrap();

    let previous = second.set().unwrap();
    assert!(previous.is_some_and(|p| p.same_as(&second)));
    let stdscr2 = stdscr().unwrap();
    stdscr2.print("second").unwrap();
    stdscr2.refresh().unwrap();

    let previous = first.set().unwrap();
    assert!(previous.is_some_and(|p| p.same_as(&second)));
    let stdscr1 = stdscr().unwrap();
    assert!(!stdscr1.same_as(&stdscr2));
    stdscr1.print("first").unwrap();
    stdscr1.refresh().unwrap();

    // endwin reports ERR when it cannot restore tty modes on a plain file.
    let _ = second.end();
    let _ = first.end();
    second.delete().unwrap();
    first.delete().unwrap();
    assert_eq!(first.set().unwrap_err(), Error::Released("Screen"));
}

/// Test an unknown terminal type is reported as an init failure
#[test]
fn test_new_term_unknown_terminal() {
    let _guard = lock();
    let out = tempfile::tempfile().unwrap();
    let input = input_file("");
    assert!(matches!(
        Screen::new_term("no-such-terminal-type", &out, &input),
        Err(Error::Init(_))
    ));
}

/// Test key names from the native library
#[test]
fn test_keyname() {
    let _guard = lock();
    assert_eq!(keyname(KEY_DOWN).as_deref(), Some("KEY_DOWN"));
    assert_eq!(keyname('a' as i32).as_deref(), Some("a"));
    assert_eq!(key_string(KEY_DOWN), "down");
}

#[cfg(feature = "panels")]
mod panel_tests {
    use super::Term;
    use ncurses::panels::*;
    use ncurses::{update, Error, Window};

    /// Test stack order through top, hide and show
    #[test]
    fn test_panel_stack() {
        let Some(_term) = Term::new() else { return };

        let w1 = Window::new(5, 10, 0, 0).unwrap();
        let w2 = Window::new(5, 10, 2, 2).unwrap();
        let p1 = Panel::new(&w1).unwrap();
        let p2 = Panel::new(&w2).unwrap();

        assert!(ceiling_panel().unwrap().same_as(&p2));
        assert!(ground_panel().unwrap().same_as(&p1));
        assert!(p1.above().unwrap().unwrap().same_as(&p2));

        top_panel(&p1).unwrap();
        assert!(ceiling_panel().unwrap().same_as(&p1));

        p1.hide().unwrap();
        assert!(p1.hidden().unwrap());
        assert!(ceiling_panel().unwrap().same_as(&p2));
        p1.show().unwrap();
        assert!(!p1.hidden().unwrap());

        p2.move_to(3, 3).unwrap();
        assert_eq!(w2.yx().unwrap(), (3, 3));
        assert!(p2.window().unwrap().same_as(&w2));

        update_panels();
        update().unwrap();

        let view = ceiling_panel().unwrap();
        assert!(matches!(view.delete(), Err(Error::InvalidArgument(_))));

        p2.delete().unwrap();
        p1.delete().unwrap();
        w2.delete().unwrap();
        w1.delete().unwrap();
    }

    /// Test replacing a panel's window
    #[test]
    fn test_panel_replace() {
        let Some(_term) = Term::new() else { return };

        let w1 = Window::new(5, 10, 0, 0).unwrap();
        let w2 = Window::new(3, 6, 1, 1).unwrap();
        let panel = Panel::new(&w1).unwrap();
        panel.replace(&w2).unwrap();
        assert!(panel.window().unwrap().same_as(&w2));

        panel.delete().unwrap();
        assert_eq!(panel.top(), Err(Error::Released("Panel")));
        w2.delete().unwrap();
        w1.delete().unwrap();
    }
}

#[cfg(feature = "menu")]
mod menu_tests {
    use super::Term;
    use ncurses::error::{E_CONNECTED, E_NOT_POSTED, E_POSTED, E_REQUEST_DENIED};
    use ncurses::menu::*;
    use ncurses::{stdscr, Error, Release, Window, KEY_DOWN};

    fn fruit() -> Vec<MenuItem> {
        vec![
            MenuItem::new("Apple", "A fruit").unwrap(),
            MenuItem::new("Banana", "Yellow fruit").unwrap(),
            MenuItem::new("Cherry", "Red fruit").unwrap(),
        ]
    }

    /// Test items stay valid after their menu is freed
    #[test]
    fn test_items_reusable_after_free() {
        let Some(_term) = Term::new() else { return };

        let items = fruit();
        let menu = Menu::new(&items).unwrap();
        assert_eq!(menu.count().unwrap(), 3);
        menu.post().unwrap();
        assert_eq!(
            items[0].free().unwrap_err().status(),
            Some(E_CONNECTED)
        );
        menu.unpost().unwrap();
        menu.free().unwrap();
        assert_eq!(menu.count(), Err(Error::Released("Menu")));

        let again = Menu::new(&items).unwrap();
        assert_eq!(items[2].name().unwrap(), "Cherry");
        assert_eq!(items[2].index().unwrap(), 2);
        again.release().unwrap();

        for item in &items {
            item.free().unwrap();
        }
    }

    /// Test item text outlives the wrappers that created it
    #[test]
    fn test_item_text_outlives_wrapper() {
        let Some(_term) = Term::new() else { return };

        let menu = {
            let items = vec![
                MenuItem::new("Apple-original-name", "first").unwrap(),
                MenuItem::new("Banana", "second").unwrap(),
            ];
            Menu::new(&items).unwrap()
        };
        let junk: Vec<String> = (0..64).map(|i| format!("junk-{:032}", i)).collect();
        assert_eq!(junk.len(), 64);

        let views = menu.items().unwrap();
        assert_eq!(views[0].name().unwrap(), "Apple-original-name");
        assert_eq!(views[0].description().unwrap(), "first");
        assert_eq!(views[1].name().unwrap(), "Banana");
        menu.post().unwrap();
        assert_eq!(menu.current().unwrap().unwrap().name().unwrap(), "Apple-original-name");
        menu.release().unwrap();
    }

    /// Test navigation through the driver
    #[test]
    fn test_menu_navigation() {
        let Some(_term) = Term::new() else { return };

        let items = fruit();
        let menu = Menu::new(&items).unwrap();
        menu.post().unwrap();

        assert!(menu.current().unwrap().unwrap().same_as(&items[0]));
        menu.driver(driver_action(KEY_DOWN).unwrap()).unwrap();
        assert!(menu.current().unwrap().unwrap().same_as(&items[1]));
        menu.driver(REQ_LAST_ITEM).unwrap();
        assert!(menu.current().unwrap().unwrap().same_as(&items[2]));
        menu.driver(REQ_FIRST_ITEM).unwrap();
        assert_eq!(menu.current().unwrap().unwrap().name().unwrap(), "Apple");

        let err = menu.driver(REQ_TOGGLE_ITEM).unwrap_err();
        assert_eq!(err.status(), Some(E_REQUEST_DENIED));
        assert!(menu.driver(0x7fff).is_err());

        menu.set_current(&items[1]).unwrap();
        assert_eq!(menu.current().unwrap().unwrap().index().unwrap(), 1);

        menu.release().unwrap();
        for item in &items {
            item.free().unwrap();
        }
    }

    /// Test multi-value selection and selectable items
    #[test]
    fn test_menu_item_values() {
        let Some(_term) = Term::new() else { return };

        let items = fruit();
        let menu = Menu::new(&items).unwrap();
        menu.option(MenuOpts::O_ONEVALUE, false).unwrap();
        assert!(!menu.options().unwrap().contains(MenuOpts::O_ONEVALUE));

        items[1].set_value(true).unwrap();
        assert!(items[1].value().unwrap());
        assert!(!items[0].value().unwrap());

        items[2].selectable(false).unwrap();
        assert!(!items[2].is_selectable().unwrap());
        items[2].selectable(true).unwrap();
        assert!(items[2].is_selectable().unwrap());
        assert_eq!(items[0].description().unwrap(), "A fruit");

        menu.free().unwrap();
        for item in &items {
            item.free().unwrap();
        }
    }

    /// Test menu appearance settings
    #[test]
    fn test_menu_settings() {
        let Some(_term) = Term::new() else { return };

        let items = fruit();
        let menu = Menu::new(&items).unwrap();

        menu.set_mark("> ").unwrap();
        assert_eq!(menu.mark().unwrap(), "> ");
        menu.set_format(2, 1).unwrap();
        assert_eq!(menu.format().unwrap(), (2, 1));
        menu.set_spacing(2, 1, 1).unwrap();
        assert_eq!(menu.spacing().unwrap(), (2, 1, 1));
        menu.set_pad('.').unwrap();
        assert_eq!(menu.pad().unwrap(), '.');
        menu.set_foreground(ncurses::A_BOLD).unwrap();
        assert_eq!(menu.foreground().unwrap(), ncurses::A_BOLD);
        let (rows, cols) = menu.scale().unwrap();
        assert!(rows >= 2 && cols > 0);
        let stdscr = stdscr().unwrap();
        assert!(menu.window().unwrap().same_as(&stdscr));
        assert!(menu.sub_window().unwrap().same_as(&stdscr));
        let frame = Window::new(rows + 2, cols + 4, 1, 1).unwrap();
        let inner = frame.derived(rows, cols, 1, 2).unwrap();
        menu.set_window(&frame).unwrap();
        menu.set_sub_window(&inner).unwrap();
        assert!(menu.window().unwrap().same_as(&frame));
        assert!(menu.sub_window().unwrap().same_as(&inner));

        menu.post().unwrap();
        menu.set_pattern("Ban").unwrap();
        assert_eq!(menu.pattern().unwrap(), "Ban");
        assert!(menu.current().unwrap().unwrap().same_as(&items[1]));
        assert_eq!(menu.set_items(&items).unwrap_err().status(), Some(E_POSTED));
        menu.unpost().unwrap();
        assert_eq!(menu.unpost().unwrap_err().status(), Some(E_NOT_POSTED));

        menu.set_items(&items[..2]).unwrap();
        assert_eq!(menu.count().unwrap(), 2);
        assert_eq!(menu.items().unwrap().len(), 2);

        menu.free().unwrap();
        for item in &items {
            item.free().unwrap();
        }
        inner.delete().unwrap();
        frame.delete().unwrap();
    }
}

#[cfg(feature = "form")]
mod form_tests {
    use super::Term;
    use ncurses::error::{E_CONNECTED, E_POSTED};
    use ncurses::form::*;
    use ncurses::{stdscr, Error, Release, Window};

    fn two_fields() -> Vec<Field> {
        vec![
            Field::new(1, 10, 0, 0, 0, 0).unwrap(),
            Field::new(1, 10, 2, 0, 0, 0).unwrap(),
        ]
    }

    /// Test typing into a field and reading the buffer
    #[test]
    fn test_form_editing() {
        let Some(_term) = Term::new() else { return };

        let fields = two_fields();
        fields[0].options_off(FieldOpts::O_AUTOSKIP).unwrap();
        let form = Form::new(&fields).unwrap();
        form.post().unwrap();

        for ch in "hi".chars() {
            form.driver(ch as i32).unwrap();
        }
        form.driver(REQ_VALIDATION).unwrap();
        assert!(fields[0].buffer(0).unwrap().starts_with("hi"));
        assert!(fields[0].status().unwrap());

        form.driver(REQ_NEXT_FIELD).unwrap();
        assert!(form.current().unwrap().unwrap().same_as(&fields[1]));
        assert_eq!(fields[1].index().unwrap(), 1);

        assert_eq!(fields[0].free().unwrap_err().status(), Some(E_CONNECTED));
        assert_eq!(form.free().unwrap_err().status(), Some(E_POSTED));
        form.release().unwrap();

        for field in &fields {
            field.free().unwrap();
        }
    }

    /// Test fields stay valid after their form is freed
    #[test]
    fn test_fields_reusable_after_free() {
        let Some(_term) = Term::new() else { return };

        let fields = two_fields();
        let form = Form::new(&fields).unwrap();
        assert_eq!(form.field_count().unwrap(), 2);
        form.post().unwrap();
        form.unpost().unwrap();
        form.free().unwrap();
        assert_eq!(form.page(), Err(Error::Released("Form")));

        let again = Form::new(&fields).unwrap();
        assert_eq!(again.fields().unwrap().len(), 2);
        let stdscr = stdscr().unwrap();
        assert!(again.window().unwrap().same_as(&stdscr));
        assert!(again.sub_window().unwrap().same_as(&stdscr));
        let frame = Window::new(6, 14, 0, 0).unwrap();
        again.set_window(&frame).unwrap();
        assert!(again.window().unwrap().same_as(&frame));
        again.free().unwrap();
        frame.delete().unwrap();

        for field in &fields {
            field.free().unwrap();
        }
    }

    /// Test toggling single options leaves the others alone
    #[test]
    fn test_field_options() {
        let Some(_term) = Term::new() else { return };

        let field = Field::new(1, 10, 0, 0, 0, 0).unwrap();
        let before = field.options().unwrap();
        assert!(before.contains(FieldOpts::O_EDIT | FieldOpts::O_ACTIVE));

        field.options_off(FieldOpts::O_EDIT).unwrap();
        let after = field.options().unwrap();
        assert!(!after.contains(FieldOpts::O_EDIT));
        assert_eq!(after | FieldOpts::O_EDIT, before);

        field.options_on(FieldOpts::O_EDIT).unwrap();
        assert_eq!(field.options().unwrap(), before);
        field.free().unwrap();
    }

    /// Test field attributes, buffers and geometry
    #[test]
    fn test_field_properties() {
        let Some(_term) = Term::new() else { return };

        let field = Field::new(1, 10, 3, 4, 0, 1).unwrap();
        let info = field.info().unwrap();
        assert_eq!((info.rows, info.cols, info.top, info.left), (1, 10, 3, 4));
        assert_eq!(info.nbuffers, 1);

        field.set_buffer(1, "extra").unwrap();
        assert!(field.buffer(1).unwrap().starts_with("extra"));
        assert!(matches!(field.buffer(5), Err(Error::InvalidArgument(_))));

        field.set_justification(Justification::Right).unwrap();
        assert_eq!(field.justification().unwrap(), Justification::Right);
        field.set_background(ncurses::A_UNDERLINE).unwrap();
        assert_eq!(field.background().unwrap(), ncurses::A_UNDERLINE);
        field.set_pad('_').unwrap();
        assert_eq!(field.pad().unwrap(), '_');

        field.move_to(5, 6).unwrap();
        assert_eq!(field.info().unwrap().top, 5);

        let copy = field.duplicate(7, 0).unwrap();
        assert_eq!(copy.info().unwrap().top, 7);
        let linked = field.link(8, 0).unwrap();
        assert!(linked.buffer(1).unwrap().starts_with("extra"));

        linked.free().unwrap();
        copy.free().unwrap();
        field.free().unwrap();
    }

    /// Test linked fields share buffers with the field they came from
    #[test]
    fn test_linked_field_buffers() {
        let Some(_term) = Term::new() else { return };

        let field = Field::new(1, 10, 0, 0, 0, 1).unwrap();
        field.set_buffer(0, "shared").unwrap();
        let linked = field.link(2, 0).unwrap();
        let chained = linked.link(4, 0).unwrap();
        assert!(linked.buffer(0).unwrap().starts_with("shared"));
        assert!(chained.buffer(0).unwrap().starts_with("shared"));

        linked.set_buffer(0, "changed").unwrap();
        assert!(field.buffer(0).unwrap().starts_with("changed"));
        linked.set_buffer(1, "second").unwrap();
        assert!(chained.buffer(1).unwrap().starts_with("second"));

        let copy = linked.duplicate(6, 0).unwrap();
        assert!(copy.buffer(0).unwrap().starts_with("changed"));

        let fields = [linked, copy];
        let form = Form::new(&fields).unwrap();
        let views = form.fields().unwrap();
        assert!(views[0].buffer(0).unwrap().starts_with("changed"));
        let current = form.current().unwrap().unwrap();
        assert!(current.buffer(1).unwrap().starts_with("second"));
        drop((views, current));

        assert!(matches!(field.free(), Err(Error::InvalidArgument(_))));
        form.free().unwrap();
        chained.free().unwrap();
        for f in &fields {
            f.free().unwrap();
        }
        field.free().unwrap();
    }
}

#[cfg(feature = "slk")]
mod slk_tests {
    use super::{input_file, lock, open_screen};
    use ncurses::*;

    /// Test soft labels set up before the terminal starts
    #[test]
    fn test_soft_labels() {
        let _guard = lock();
        assert!(slk_init(SlkFormat::Format323).is_ok());

        let out = tempfile::tempfile().unwrap();
        let input = input_file("");
        let Some(screen) = open_screen(&out, &input) else { return };

        slk_set(1, "Help", SlkJustify::Center).unwrap();
        assert!(slk_label(1).unwrap().contains("Help"));
        slk_attr_on(A_BOLD).unwrap();
        slk_nout_refresh().unwrap();
        update().unwrap();
        slk_clear().unwrap();
        slk_restore().unwrap();

        let _ = screen.release();
    }
}
