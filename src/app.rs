use std::io;

use log::info;
use rand::Rng;

use crate::compute::{difficulty_name, init_game};
use crate::console::Console;
use crate::entities::{GameState, Outcome, Settings};
use crate::game;
use crate::menu::{run_main_menu, run_options_menu, MainMenuItem};

/// Top-level controller: owns the settings, the current session and whether
/// that session can be continued.
pub struct App<R: Rng> {
    pub settings: Settings,
    pub state: GameState,
    pub resumable: bool,
    rng: R,
}

impl<R: Rng> App<R> {
    pub fn new(rng: R) -> Self {
        Self {
            settings: Settings::default(),
            state: GameState::default(),
            resumable: false,
            rng,
        }
    }

    /// Loop between the menus and the game until Exit is chosen.
    pub fn run<C: Console>(&mut self, con: &mut C) -> io::Result<()> {
        loop {
            match run_main_menu(con, self.resumable)? {
                MainMenuItem::NewGame => self.new_game(con)?,
                MainMenuItem::Continue => {
                    if self.resumable {
                        self.resume(con)?;
                    }
                }
                MainMenuItem::Options => run_options_menu(con, &mut self.settings)?,
                MainMenuItem::Exit => return Ok(()),
            }
        }
    }

    fn new_game<C: Console>(&mut self, con: &mut C) -> io::Result<()> {
        info!(
            "new session on {}",
            difficulty_name(self.settings.difficulty)
        );
        self.state = init_game(self.settings.difficulty, &mut self.rng);
        self.resumable = true;
        self.resume(con)
    }

    fn resume<C: Console>(&mut self, con: &mut C) -> io::Result<()> {
        let outcome = game::play(con, &mut self.state, self.settings.speed, &mut self.rng)?;
        self.resumable = outcome == Outcome::Suspended;
        Ok(())
    }
}
