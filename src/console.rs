/// Terminal I/O seam.
///
/// Menus and the game loop only talk to a `Console`: clear, print at a
/// position, refresh, read a key, sleep.  `TerminalConsole` backs it with
/// crossterm; tests drive the loops with a scripted implementation.

use std::io::{self, Write};
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{Event, KeyCode, KeyEvent, KeyEventKind},
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::entities::Key;

pub trait Console {
    fn clear(&mut self) -> io::Result<()>;
    fn print_at(&mut self, col: u16, row: u16, text: &str) -> io::Result<()>;
    /// Print in reverse video, used for the selected menu row.
    fn print_highlighted(&mut self, col: u16, row: u16, text: &str) -> io::Result<()>;
    /// Push everything queued since the last refresh to the screen.
    fn refresh(&mut self) -> io::Result<()>;
    /// Non-blocking: `None` when no key is pending.
    fn poll_key(&mut self) -> io::Result<Option<Key>>;
    /// Block until a key arrives.
    fn wait_key(&mut self) -> io::Result<Key>;
    fn sleep_ms(&mut self, ms: u64);
}

/// Translate a raw key code into a logical key.
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Key::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Key::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Key::Confirm,
        KeyCode::Char('q') | KeyCode::Char('Q') => Key::Quit,
        _ => Key::Other,
    }
}

/// Only presses count; repeats and releases from enhanced keyboards are dropped.
fn key_press(event: Event) -> Option<Key> {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => Some(map_key(code)),
        _ => None,
    }
}

fn disconnected() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "input thread stopped")
}

// ── crossterm backend ─────────────────────────────────────────────────────────

pub struct TerminalConsole<W: Write> {
    out: W,
    rx: mpsc::Receiver<Event>,
}

impl<W: Write> TerminalConsole<W> {
    /// `rx` carries events read by a dedicated input thread, so polling here
    /// never blocks on terminal I/O.
    pub fn new(out: W, rx: mpsc::Receiver<Event>) -> Self {
        Self { out, rx }
    }
}

impl<W: Write> Console for TerminalConsole<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn print_at(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn print_highlighted(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(col, row))?;
        self.out.queue(SetAttribute(Attribute::Reverse))?;
        self.out.queue(Print(text))?;
        self.out.queue(SetAttribute(Attribute::NoReverse))?;
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        // Skip over resizes, mouse and release events until a press or nothing.
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    if let Some(key) = key_press(event) {
                        return Ok(Some(key));
                    }
                }
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => return Err(disconnected()),
            }
        }
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        loop {
            let event = self.rx.recv().map_err(|_| disconnected())?;
            if let Some(key) = key_press(event) {
                return Ok(key);
            }
        }
    }

    fn sleep_ms(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}
