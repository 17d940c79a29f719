#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;

use lane_runner::console::Console;
use lane_runner::entities::Key;

/// Console fake: keys come from a script, everything printed is recorded.
///
/// Each script entry is one poll: `Some(key)` is a pending key, `None` means
/// nothing was pressed.  Running out of script is an error so a loop that
/// never exits fails the test instead of hanging.
#[derive(Default)]
pub struct ScriptedConsole {
    keys: VecDeque<Option<Key>>,
    /// Text currently on screen, cleared by `clear`.
    pub screen: Vec<(u16, u16, String)>,
    /// Every string ever printed.
    pub history: Vec<String>,
    pub highlighted: Vec<String>,
    pub sleeps: Vec<u64>,
    pub refreshes: usize,
}

impl ScriptedConsole {
    pub fn new(script: &[Option<Key>]) -> Self {
        Self {
            keys: script.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn keys(keys: &[Key]) -> Self {
        let script: Vec<Option<Key>> = keys.iter().map(|k| Some(*k)).collect();
        Self::new(&script)
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.history.iter().any(|line| line.contains(needle))
    }

    pub fn row(&self, row: u16) -> Option<&str> {
        self.screen
            .iter()
            .rev()
            .find(|(_, r, _)| *r == row)
            .map(|(_, _, text)| text.as_str())
    }

    fn exhausted() -> io::Error {
        io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted")
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.screen.clear();
        Ok(())
    }

    fn print_at(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        self.screen.push((col, row, text.to_string()));
        self.history.push(text.to_string());
        Ok(())
    }

    fn print_highlighted(&mut self, col: u16, row: u16, text: &str) -> io::Result<()> {
        self.highlighted.push(text.to_string());
        self.print_at(col, row, text)
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.refreshes += 1;
        Ok(())
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        self.keys.pop_front().ok_or_else(Self::exhausted)
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        loop {
            match self.keys.pop_front() {
                Some(Some(key)) => return Ok(key),
                Some(None) => {}
                None => return Err(Self::exhausted()),
            }
        }
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.sleeps.push(ms);
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}
