/// Main menu and options menu.
///
/// Each menu is a highlighted index plus a pure `handle_key` step; the
/// `run_*` functions wrap that step in a polling loop against a `Console`.

use std::io;

use crate::compute::{easier, faster, harder, slower};
use crate::config::MENU_POLL_MS;
use crate::console::Console;
use crate::display;
use crate::entities::{Key, Settings};

// ── Main menu ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainMenuItem {
    NewGame,
    Continue,
    Options,
    Exit,
}

impl MainMenuItem {
    pub const ALL: [MainMenuItem; 4] = [
        MainMenuItem::NewGame,
        MainMenuItem::Continue,
        MainMenuItem::Options,
        MainMenuItem::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MainMenuItem::NewGame => "Start New Game",
            MainMenuItem::Continue => "Continue Game",
            MainMenuItem::Options => "Options",
            MainMenuItem::Exit => "Exit",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            MainMenuItem::NewGame => 0,
            MainMenuItem::Continue => 1,
            MainMenuItem::Options => 2,
            MainMenuItem::Exit => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainMenuEvent {
    /// Highlight moved, or the key meant nothing here.
    Idle,
    Selected(MainMenuItem),
    /// Continue was confirmed but there is no session to resume.
    NothingToContinue,
}

#[derive(Clone, Debug, Default)]
pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MainMenuItem {
        MainMenuItem::ALL[self.selected]
    }

    pub fn handle_key(&mut self, key: Key, resumable: bool) -> MainMenuEvent {
        match key {
            Key::Up => {
                self.selected = self.selected.saturating_sub(1);
                MainMenuEvent::Idle
            }
            Key::Down => {
                self.selected = (self.selected + 1).min(MainMenuItem::ALL.len() - 1);
                MainMenuEvent::Idle
            }
            Key::Confirm => match self.selected() {
                MainMenuItem::Continue if !resumable => MainMenuEvent::NothingToContinue,
                item => MainMenuEvent::Selected(item),
            },
            _ => MainMenuEvent::Idle,
        }
    }
}

/// Show the main menu until the player makes an actionable choice.
pub fn run_main_menu<C: Console>(con: &mut C, resumable: bool) -> io::Result<MainMenuItem> {
    let mut menu = MainMenu::new();

    loop {
        display::render_main_menu(con, menu.selected().index(), resumable)?;

        if let Some(key) = con.poll_key()? {
            match menu.handle_key(key, resumable) {
                MainMenuEvent::Selected(item) => return Ok(item),
                MainMenuEvent::NothingToContinue => {
                    display::render_continue_notice(con)?;
                    con.wait_key()?;
                }
                MainMenuEvent::Idle => {}
            }
        }

        con.sleep_ms(MENU_POLL_MS);
    }
}

// ── Options menu ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionsRow {
    Difficulty,
    Speed,
    Back,
}

impl OptionsRow {
    pub const ALL: [OptionsRow; 3] = [OptionsRow::Difficulty, OptionsRow::Speed, OptionsRow::Back];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionsEvent {
    Stay,
    Back,
}

#[derive(Clone, Debug, Default)]
pub struct OptionsMenu {
    selected: usize,
}

impl OptionsMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> OptionsRow {
        OptionsRow::ALL[self.selected]
    }

    /// Left/Right change the highlighted setting in place, clamped at both ends.
    pub fn handle_key(&mut self, key: Key, settings: &mut Settings) -> OptionsEvent {
        match (key, self.selected()) {
            (Key::Up, _) => self.selected = self.selected.saturating_sub(1),
            (Key::Down, _) => {
                self.selected = (self.selected + 1).min(OptionsRow::ALL.len() - 1)
            }
            (Key::Left, OptionsRow::Difficulty) => {
                settings.difficulty = easier(settings.difficulty)
            }
            (Key::Right, OptionsRow::Difficulty) => {
                settings.difficulty = harder(settings.difficulty)
            }
            (Key::Left, OptionsRow::Speed) => settings.speed = slower(settings.speed),
            (Key::Right, OptionsRow::Speed) => settings.speed = faster(settings.speed),
            (Key::Confirm, OptionsRow::Back) => return OptionsEvent::Back,
            _ => {}
        }
        OptionsEvent::Stay
    }
}

/// Show the options screen until Back is confirmed.
pub fn run_options_menu<C: Console>(con: &mut C, settings: &mut Settings) -> io::Result<()> {
    let mut menu = OptionsMenu::new();

    loop {
        display::render_options_menu(con, menu.selected, settings)?;

        if let Some(key) = con.poll_key()? {
            if menu.handle_key(key, settings) == OptionsEvent::Back {
                return Ok(());
            }
        }

        con.sleep_ms(MENU_POLL_MS);
    }
}
