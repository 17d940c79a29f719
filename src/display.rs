/// Rendering layer: all screen output lives here.
///
/// Each function receives the console and an immutable view of whatever it
/// draws.  No game logic is performed; this module only translates state
/// into positioned text.

use std::io;

use crate::compute::{difficulty_name, speed_name};
use crate::config::{
    CONTROLS_ROW, LANES, MENU_BASE_ROW, OPTIONS_BASE_ROW, STATUS_ROW, TRACK_TOP_ROW, TRACK_WIDTH,
};
use crate::console::Console;
use crate::entities::{GameState, Settings, Speed};
use crate::menu::{MainMenuItem, OptionsRow};

const OBSTACLE: char = 'X';
const SHIP_BODY: [char; 5] = ['=', '=', '|', '=', '='];
const SHIP_NOSE: char = '>';
const TOP_WING: [char; 2] = ['/', '\\'];
const BOTTOM_WING: [char; 2] = ['\\', '/'];

const TITLE_ART: [&str; 8] = [
    r" $$$$$$\  $$$$$$$\   $$$$$$\   $$$$$$\  $$$$$$$$\       $$\      $$\  $$$$$$\  $$$$$$$\   $$$$$$\  ",
    r"$$  __$$\ $$  __$$\ $$  __$$\ $$  __$$\ $$  _____|      $$ | $\  $$ |$$  __$$\ $$  __$$\ $$  __$$\ ",
    r"$$ /  \__|$$ |  $$ |$$ /  $$ |$$ /  \__|$$ |            $$ |$$$\ $$ |$$ /  $$ |$$ |  $$ |$$ /  \__|",
    r"\$$$$$$\  $$$$$$$  |$$$$$$$$ |$$ |      $$$$$\          $$ $$ $$\$$ |$$$$$$$$ |$$$$$$$  |\$$$$$$\  ",
    r" \____$$\ $$  ____/ $$  __$$ |$$ |      $$  __|         $$$$  _$$$$ |$$  __$$ |$$  __$$<  \____$$\ ",
    r"$$\   $$ |$$ |      $$ |  $$ |$$ |  $$\ $$ |            $$$  / \$$$ |$$ |  $$ |$$ |  $$ |$$\   $$ |",
    r"\$$$$$$  |$$ |      $$ |  $$ |\$$$$$$  |$$$$$$$$\       $$  /   \$$ |$$ |  $$ |$$ |  $$ |\$$$$$$  |",
    r" \______/ \__|      \__|  \__| \______/ \________|      \__/     \__|\__|  \__|\__|  \__| \______/ ",
];

// ── Menus ─────────────────────────────────────────────────────────────────────

fn draw_title_art<C: Console>(con: &mut C) -> io::Result<()> {
    for (row, line) in TITLE_ART.iter().enumerate() {
        con.print_at(0, row as u16, line)?;
    }
    Ok(())
}

fn draw_row<C: Console>(con: &mut C, row: u16, text: &str, selected: bool) -> io::Result<()> {
    if selected {
        con.print_highlighted(0, row, text)
    } else {
        con.print_at(0, row, text)
    }
}

pub fn main_menu_label(item: MainMenuItem, resumable: bool) -> String {
    match item {
        MainMenuItem::Continue if !resumable => format!("{} (no saved game)", item.label()),
        _ => item.label().to_string(),
    }
}

pub fn render_main_menu<C: Console>(
    con: &mut C,
    selected: usize,
    resumable: bool,
) -> io::Result<()> {
    con.clear()?;
    draw_title_art(con)?;
    con.print_at(
        0,
        MENU_BASE_ROW - 2,
        "Use UP/DOWN arrows or W/S to move, ENTER to select.",
    )?;

    for (i, item) in MainMenuItem::ALL.iter().enumerate() {
        let label = main_menu_label(*item, resumable);
        draw_row(con, MENU_BASE_ROW + i as u16, &label, i == selected)?;
    }

    con.refresh()
}

/// Drawn on top of the main menu when Continue is picked with nothing to resume.
pub fn render_continue_notice<C: Console>(con: &mut C) -> io::Result<()> {
    let row = MENU_BASE_ROW + MainMenuItem::ALL.len() as u16 + 2;
    con.print_at(0, row, "No saved game to continue. Press any key...")?;
    con.refresh()
}

pub fn options_label(row: OptionsRow, settings: &Settings) -> String {
    match row {
        OptionsRow::Difficulty => format!("Difficulty: {}", difficulty_name(settings.difficulty)),
        OptionsRow::Speed => format!("Speed: {}", speed_name(settings.speed)),
        OptionsRow::Back => "Back".to_string(),
    }
}

pub fn render_options_menu<C: Console>(
    con: &mut C,
    selected: usize,
    settings: &Settings,
) -> io::Result<()> {
    con.clear()?;
    con.print_at(0, 0, "OPTIONS")?;
    con.print_at(
        0,
        1,
        "Use UP/DOWN to select, LEFT/RIGHT to change, ENTER to go back.",
    )?;

    for (i, row) in OptionsRow::ALL.iter().enumerate() {
        let label = options_label(*row, settings);
        draw_row(con, OPTIONS_BASE_ROW + i as u16, &label, i == selected)?;
    }

    con.refresh()
}

// ── Track ─────────────────────────────────────────────────────────────────────

pub fn status_line(state: &GameState, speed: Speed) -> String {
    format!(
        "Score: {}   |   Difficulty: {}   |   Speed: {}",
        state.score,
        difficulty_name(state.difficulty),
        speed_name(speed)
    )
}

fn border() -> String {
    format!("+{}+", "-".repeat(TRACK_WIDTH as usize))
}

fn put(cells: &mut [char], col: i32, glyph: char) {
    if let Some(cell) = usize::try_from(col).ok().and_then(|c| cells.get_mut(c)) {
        *cell = glyph;
    }
}

/// One framed text row per lane, top lane first.
///
/// The ship is three rows tall: body and nose in its own lane, a wing pair
/// in the lane above and the lane below.  Only the body row is solid.
pub fn track_rows(state: &GameState) -> Vec<String> {
    let width = TRACK_WIDTH as usize;
    let p = &state.player;

    (0..LANES)
        .map(|lane| {
            let mut cells = vec![' '; width];

            for o in state.active_obstacles().filter(|o| o.lane == lane) {
                put(&mut cells, o.x, OBSTACLE);
            }

            if lane == p.lane && p.x >= 0 && p.x + 4 < TRACK_WIDTH {
                for (i, glyph) in SHIP_BODY.iter().enumerate() {
                    put(&mut cells, p.x + i as i32, *glyph);
                }
                put(&mut cells, p.x + 5, SHIP_NOSE);
            }

            let wing = if lane == p.lane - 1 {
                Some(TOP_WING)
            } else if lane == p.lane + 1 {
                Some(BOTTOM_WING)
            } else {
                None
            };
            if let Some([left, right]) = wing {
                put(&mut cells, p.x + 2, left);
                put(&mut cells, p.x + 3, right);
            }

            format!("|{}|", cells.into_iter().collect::<String>())
        })
        .collect()
}

/// Render one complete frame of play.
pub fn render_game<C: Console>(con: &mut C, state: &GameState, speed: Speed) -> io::Result<()> {
    con.clear()?;
    con.print_at(
        0,
        CONTROLS_ROW,
        "Controls: W/S (lanes), A/D (left/right), Q (back to menu)",
    )?;
    con.print_at(0, STATUS_ROW, &status_line(state, speed))?;

    let border = border();
    con.print_at(0, TRACK_TOP_ROW, &border)?;
    for (i, row) in track_rows(state).iter().enumerate() {
        con.print_at(0, TRACK_TOP_ROW + 1 + i as u16, row)?;
    }
    con.print_at(0, TRACK_TOP_ROW + 1 + LANES as u16, &border)?;

    con.refresh()
}

// ── Game over ─────────────────────────────────────────────────────────────────

pub fn render_game_over<C: Console>(con: &mut C, score: u32) -> io::Result<()> {
    con.clear()?;
    con.print_at(0, 0, "GAME OVER!")?;
    con.print_at(0, 1, &format!("Final Score: {}", score))?;
    con.print_at(0, 3, "Press any key to return to menu...")?;
    con.refresh()
}
