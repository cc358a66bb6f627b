//! A framed menu driven by the arrow keys. Enter picks an item, q quits.

use ncurses::menu::{driver_action, Menu, MenuItem, MenuOpts};
use ncurses::*;

const CHOICES: [(&str, &str); 5] = [
    ("Apple", "crisp"),
    ("Banana", "soft"),
    ("Cherry", "small"),
    ("Durian", "pungent"),
    ("Exit", ""),
];

fn main() -> Result<()> {
    let stdscr = init()?;
    cbreak(true)?;
    echo(false)?;
    stdscr.keypad(true)?;

    let items = CHOICES
        .iter()
        .map(|(name, desc)| MenuItem::new(name, desc))
        .collect::<Result<Vec<_>>>()?;
    let menu = Menu::new(&items)?;
    menu.set_mark(" * ")?;
    menu.option(MenuOpts::O_SHOWDESC, true)?;

    let (rows, cols) = menu.scale()?;
    let frame = Window::new(rows + 4, cols + 4, 2, 4)?;
    frame.keypad(true)?;
    let inner = frame.derived(rows, cols, 3, 2)?;
    menu.set_window(&frame)?;
    menu.set_sub_window(&inner)?;

    frame.box_(0, 0)?;
    frame.move_print(1, 2, "Pick a fruit")?;
    stdscr.move_print(lines() - 1, 0, "arrows move, Enter picks, q quits")?;
    stdscr.refresh()?;
    menu.post()?;
    frame.refresh()?;

    let mut picked = None;
    while let Some(key) = frame.get_char()? {
        match Key::from_code(key) {
            Key::Char('q') => break,
            Key::Enter => {
                let name = match menu.current()? {
                    Some(item) => item.name()?,
                    None => continue,
                };
                if name == "Exit" {
                    break;
                }
                stdscr.move_to(lines() - 2, 0)?;
                stdscr.clear_to_eol()?;
                stdscr.print(&format!("picked {}", name))?;
                stdscr.refresh()?;
                picked = Some(name);
            }
            _ => {
                if let Some(req) = driver_action(key) {
                    // Requests that run off either end are refused; ignore them.
                    let _ = menu.driver(req);
                }
            }
        }
        frame.refresh()?;
    }

    menu.unpost()?;
    menu.free()?;
    for item in &items {
        item.free()?;
    }
    inner.delete()?;
    frame.delete()?;
    end()?;

    if let Some(name) = picked {
        println!("last pick: {}", name);
    }
    Ok(())
}
