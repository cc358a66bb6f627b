//! "Hello World" on the real terminal: colors, attributes and one key press.

use ncurses::*;

fn main() -> Result<()> {
    let stdscr = init()?;
    stdscr.keypad(true)?;
    cbreak(true)?;
    echo(false)?;

    if has_colors() {
        start_color()?;
        init_pair(1, COLOR_GREEN, COLOR_BLACK)?;
        init_pair(2, COLOR_YELLOW, COLOR_BLACK)?;
    }

    let title = "Welcome to ncurses-bind!";
    let y = lines() / 2 - 2;
    let x = (cols() - title.len() as i32) / 2;
    stdscr.move_print(y, x, title)?;

    if has_colors() {
        stdscr.color_on(1)?;
    }
    stdscr.attr_on(A_BOLD)?;
    stdscr.move_print(y + 2, x - 2, &format!("running on {}", curses_version()))?;
    stdscr.attr_off(A_BOLD)?;
    if has_colors() {
        stdscr.color_off(1)?;
        stdscr.color_on(2)?;
    }
    stdscr.move_print(y + 5, x, "Press any key to exit...")?;
    if has_colors() {
        stdscr.color_off(2)?;
    }
    stdscr.refresh()?;

    let key = stdscr.get_key()?;
    end()?;

    if let Some(key) = key {
        println!("you pressed {}", key);
    }
    Ok(())
}
