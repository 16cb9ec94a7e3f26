//! Interactive line-editor demo using crossterm.
//!
//! Reads keystrokes in raw mode, dispatches them to a buffer, and prints
//! the two-line rendering after every action.
//! Run with: cargo run --example repl

use crossterm::event::{
    self, Event, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyModifiers,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use editbuf::{Buffer, BufferError, KeyCode, KeyEvent, Modifiers, feed};
use std::io::{self, Write};

fn convert_crossterm_event(event: CKeyEvent) -> Option<KeyEvent> {
    let mut mods = Modifiers::empty();
    if event.modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Modifiers::SHIFT;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Modifiers::CTRL;
    }
    if event.modifiers.contains(KeyModifiers::ALT) {
        mods |= Modifiers::ALT;
    }

    let code = match event.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        CKeyCode::Home => KeyCode::Home,
        CKeyCode::End => KeyCode::End,
        CKeyCode::Delete => KeyCode::Delete,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        _ => return None,
    };

    Some(KeyEvent { code, mods })
}

fn to_io(err: BufferError) -> io::Error {
    io::Error::other(err)
}

fn show(out: &mut impl Write, buf: &Buffer) -> io::Result<()> {
    let r = buf.render().map_err(to_io)?;
    // Raw mode: carriage returns are on us
    write!(out, "{}\r\n{}\r\n", r.content, r.caret)?;
    out.flush()
}

fn run() -> io::Result<()> {
    let mut buf = Buffer::new();
    let mut out = io::stdout();

    write!(
        out,
        "type to edit; arrows/Home/End/Delete or C-b C-f C-a C-e C-d to navigate;\r\n\
         Backspace deletes behind the cursor; Enter accepts, Esc quits\r\n"
    )?;
    show(&mut out, &buf)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.code == CKeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            break;
        }

        match key.code {
            CKeyCode::Esc => break,
            CKeyCode::Enter => {
                let line: String = buf.chars().collect();
                write!(out, "accepted: {line}\r\n")?;
                break;
            }
            CKeyCode::Backspace => {
                // No backward delete in the operation set; compose it
                if buf.move_backward().map_err(to_io)? {
                    buf.delete_forward().map_err(to_io)?;
                }
            }
            _ => {
                if let Some(ev) = convert_crossterm_event(key) {
                    feed(&mut buf, ev).map_err(to_io)?;
                }
            }
        }

        show(&mut out, &buf)?;
    }

    Ok(())
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    enable_raw_mode()?;
    let result = run();
    disable_raw_mode()?;
    result
}
