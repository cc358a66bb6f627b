//! Overlapping windows managed as a panel stack.
//!
//! Keys: 1-3 raise a panel, TAB cycles, b sends the active panel to the
//! bottom, h hides it, s shows every panel, q quits.

use ncurses::panels::{update_panels, Panel};
use ncurses::*;

const COLORS: [(ColorT, ColorT); 3] = [
    (COLOR_WHITE, COLOR_RED),
    (COLOR_WHITE, COLOR_GREEN),
    (COLOR_WHITE, COLOR_BLUE),
];

fn draw(win: &Window, num: usize) -> Result<()> {
    if has_colors() {
        win.set_background(color_pair(num as PairT) | ' ' as ChType)?;
    }
    win.erase()?;
    win.box_(0, 0)?;
    win.attr_on(A_BOLD)?;
    win.move_print(0, 2, &format!(" Panel {} ", num))?;
    win.attr_off(A_BOLD)?;
    win.move_print(2, 2, "1-3 select, TAB cycle")?;
    win.move_print(3, 2, "b bottom, h hide, s show")?;
    Ok(())
}

fn status(stdscr: &Window, active: usize) -> Result<()> {
    stdscr.move_to(lines() - 1, 0)?;
    stdscr.clear_to_eol()?;
    stdscr.attr_on(A_REVERSE)?;
    stdscr.print(&format!(" Active: panel {} | q quits ", active))?;
    stdscr.attr_off(A_REVERSE)?;
    stdscr.nout_refresh()
}

fn main() -> Result<()> {
    let stdscr = init()?;
    stdscr.keypad(true)?;
    cbreak(true)?;
    echo(false)?;
    cursor(CursorVisibility::Invisible)?;

    if has_colors() {
        start_color()?;
        for (pair, (fg, bg)) in COLORS.iter().enumerate() {
            init_pair(pair as PairT + 1, *fg, *bg)?;
        }
    }

    let mut windows = Vec::new();
    for i in 0..3 {
        let win = Window::new(10, 30, 2 + i * 3, 5 + i * 10)?;
        draw(&win, i as usize + 1)?;
        windows.push(win);
    }
    let panels = windows
        .iter()
        .map(Panel::new)
        .collect::<Result<Vec<_>>>()?;

    let mut active = 3;
    loop {
        status(&stdscr, active)?;
        update_panels();
        update()?;

        let Some(key) = stdscr.get_key()? else { continue };
        match key {
            Key::Char('q') | Key::Char('Q') => break,
            Key::Char(c @ '1'..='3') => {
                active = c as usize - '0' as usize;
                panels[active - 1].top()?;
            }
            Key::Tab => {
                active = active % 3 + 1;
                panels[active - 1].top()?;
            }
            Key::Char('b') => panels[active - 1].bottom()?,
            Key::Char('h') => panels[active - 1].hide()?,
            Key::Char('s') => {
                for panel in &panels {
                    if panel.hidden()? {
                        panel.show()?;
                    }
                }
            }
            _ => {}
        }
    }

    for panel in &panels {
        panel.delete()?;
    }
    for win in &windows {
        win.delete()?;
    }
    end()
}
