//! A two-field login form. Arrows or TAB move between fields, Enter submits.

use ncurses::form::{
    Field, FieldOpts, Form, REQ_DEL_PREV, REQ_NEXT_FIELD, REQ_PREV_FIELD, REQ_VALIDATION,
};
use ncurses::*;

fn main() -> Result<()> {
    let stdscr = init()?;
    cbreak(true)?;
    echo(false)?;
    stdscr.keypad(true)?;

    let fields = [Field::new(1, 20, 4, 18, 0, 0)?, Field::new(1, 20, 6, 18, 0, 0)?];
    for field in &fields {
        field.set_background(A_UNDERLINE)?;
        field.options_off(FieldOpts::O_AUTOSKIP)?;
    }
    fields[1].options_off(FieldOpts::O_PUBLIC)?;

    let form = Form::new(&fields)?;
    form.post()?;
    stdscr.move_print(4, 8, "User:")?;
    stdscr.move_print(6, 8, "Password:")?;
    stdscr.move_print(lines() - 1, 0, "TAB/arrows move, Enter submits")?;
    form.position_cursor()?;
    stdscr.refresh()?;

    while let Some(key) = stdscr.get_char()? {
        let request = match Key::from_code(key) {
            Key::Enter => break,
            Key::Tab | Key::Down => REQ_NEXT_FIELD,
            Key::BackTab | Key::Up => REQ_PREV_FIELD,
            Key::Backspace => REQ_DEL_PREV,
            _ => key,
        };
        // Characters the field refuses are dropped.
        let _ = form.driver(request);
        stdscr.refresh()?;
    }

    form.driver(REQ_VALIDATION)?;
    let user = fields[0].buffer(0)?;
    let secret_len = fields[1].buffer(0)?.trim_end().len();

    form.unpost()?;
    form.free()?;
    for field in &fields {
        field.free()?;
    }
    end()?;

    println!("user {:?}, password of {} characters", user.trim_end(), secret_len);
    Ok(())
}
