/// The game loop.
///
/// One frame is: read at most one key, check for a crash, draw, sleep for
/// the speed's frame delay, then scroll the obstacles.  The sleep is the
/// only pacing; there is no delta time and no frame skipping.

use std::io;

use log::{debug, info};
use rand::Rng;

use crate::compute::{advance_obstacles, apply_key, collides, frame_delay_for};
use crate::console::Console;
use crate::display;
use crate::entities::{GameState, Key, Outcome, Speed};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameResult {
    Running,
    Crashed,
    Quit,
}

/// Run a single frame, mutating `state` in place.
///
/// On `Crashed` nothing is drawn and the obstacles have not moved; on `Quit`
/// the state is exactly as it was when the frame began.
pub fn frame<C: Console>(
    con: &mut C,
    state: &mut GameState,
    speed: Speed,
    rng: &mut impl Rng,
) -> io::Result<FrameResult> {
    match con.poll_key()? {
        Some(Key::Quit) => return Ok(FrameResult::Quit),
        Some(key) => *state = apply_key(state, key),
        None => {}
    }

    if collides(state) {
        return Ok(FrameResult::Crashed);
    }

    display::render_game(con, state, speed)?;
    con.sleep_ms(frame_delay_for(speed));

    *state = advance_obstacles(state, rng);
    Ok(FrameResult::Running)
}

/// Play `state` until the ship crashes or the player quits to the menu.
pub fn play<C: Console>(
    con: &mut C,
    state: &mut GameState,
    speed: Speed,
    rng: &mut impl Rng,
) -> io::Result<Outcome> {
    loop {
        match frame(con, state, speed, rng)? {
            FrameResult::Running => {}
            FrameResult::Quit => {
                debug!("session suspended at score {}", state.score);
                return Ok(Outcome::Suspended);
            }
            FrameResult::Crashed => {
                info!("game over, final score {}", state.score);
                display::render_game_over(con, state.score)?;
                con.wait_key()?;
                return Ok(Outcome::Crashed);
            }
        }
    }
}
