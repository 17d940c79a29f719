mod common;

use lane_runner::config::{MAX_OBSTACLES, TRACK_WIDTH};
use lane_runner::entities::*;
use lane_runner::game::*;

use common::{seeded_rng, ScriptedConsole};

/// Easy session: player in lane 7 at x 5, nothing in its lane.
fn make_state() -> GameState {
    let mut obstacles = vec![Obstacle::default(); MAX_OBSTACLES];
    obstacles[0] = Obstacle { lane: 0, x: 50, active: true };
    obstacles[1] = Obstacle { lane: 3, x: 100, active: true };
    obstacles[2] = Obstacle { lane: 12, x: 0, active: true };
    GameState {
        player: Player { lane: 7, x: 5 },
        obstacles,
        obstacle_count: 3,
        score: 0,
        difficulty: Difficulty::Easy,
    }
}

// ── frame ─────────────────────────────────────────────────────────────────────

#[test]
fn idle_frame_scrolls_and_recycles() {
    let mut state = make_state();
    let mut con = ScriptedConsole::new(&[None]);
    let result = frame(&mut con, &mut state, Speed::Slow, &mut seeded_rng()).unwrap();

    assert_eq!(result, FrameResult::Running);
    assert_eq!(state.player, Player { lane: 7, x: 5 });
    assert_eq!(state.obstacles[0].x, 49);
    assert_eq!(state.obstacles[1].x, 99);
    assert_eq!(state.obstacles[2].x, TRACK_WIDTH - 1);
    assert_eq!(state.score, 1);
    assert_eq!(con.sleeps, vec![120]);
}

#[test]
fn idle_frame_without_recycle_keeps_score() {
    let mut state = make_state();
    state.obstacles[2].x = 30;
    let mut con = ScriptedConsole::new(&[None]);
    frame(&mut con, &mut state, Speed::Slow, &mut seeded_rng()).unwrap();

    assert_eq!(state.score, 0);
    assert_eq!(state.obstacles[2], Obstacle { lane: 12, x: 29, active: true });
}

#[test]
fn frame_applies_one_key() {
    let mut state = make_state();
    let mut con = ScriptedConsole::new(&[Some(Key::Down), Some(Key::Down)]);
    frame(&mut con, &mut state, Speed::Fast, &mut seeded_rng()).unwrap();

    assert_eq!(state.player.lane, 8);
    // The second key waits for the next frame
    assert_eq!(con.remaining(), 1);
    assert_eq!(con.sleeps, vec![70]);
}

#[test]
fn frame_draws_before_moving_obstacles() {
    let mut state = make_state();
    let mut con = ScriptedConsole::new(&[None]);
    frame(&mut con, &mut state, Speed::Ultra, &mut seeded_rng()).unwrap();

    // Row 3 is lane 0; the obstacle was drawn at its pre-advance column 50
    let lane0 = con.row(3).unwrap();
    assert_eq!(lane0.chars().nth(51), Some('X'));
    assert_eq!(con.row(1), Some("Score: 0   |   Difficulty: Easy   |   Speed: Ultra"));
}

#[test]
fn quit_leaves_state_untouched() {
    let mut state = make_state();
    let before = state.clone();
    let mut con = ScriptedConsole::new(&[Some(Key::Quit)]);
    let result = frame(&mut con, &mut state, Speed::Slow, &mut seeded_rng()).unwrap();

    assert_eq!(result, FrameResult::Quit);
    assert_eq!(state, before);
    assert!(con.sleeps.is_empty());
}

#[test]
fn moving_into_an_obstacle_crashes() {
    let mut state = make_state();
    state.obstacles[0] = Obstacle { lane: 8, x: 9, active: true };
    let mut con = ScriptedConsole::new(&[Some(Key::Down)]);
    let result = frame(&mut con, &mut state, Speed::Slow, &mut seeded_rng()).unwrap();

    assert_eq!(result, FrameResult::Crashed);
    assert_eq!(state.obstacles[0].x, 9);
    assert!(con.sleeps.is_empty());
}

// ── play ──────────────────────────────────────────────────────────────────────

#[test]
fn play_suspends_on_quit() {
    let mut state = make_state();
    let mut con = ScriptedConsole::new(&[None, None, Some(Key::Quit)]);
    let outcome = play(&mut con, &mut state, Speed::Slow, &mut seeded_rng()).unwrap();

    assert_eq!(outcome, Outcome::Suspended);
    assert_eq!(con.sleeps, vec![120, 120]);
    assert_eq!(state.obstacles[0].x, 48);
}

#[test]
fn obstacle_scrolling_into_ship_ends_the_game() {
    let mut state = make_state();
    // Two columns right of the body span 5..=10
    state.obstacles[0] = Obstacle { lane: 7, x: 12, active: true };
    let mut con = ScriptedConsole::new(&[None, None, None, Some(Key::Other)]);
    let outcome = play(&mut con, &mut state, Speed::Slow, &mut seeded_rng()).unwrap();

    assert_eq!(outcome, Outcome::Crashed);
    assert_eq!(con.sleeps.len(), 2);
    assert!(con.printed("GAME OVER!"));
    assert!(con.printed("Final Score: 1"));
    assert_eq!(con.remaining(), 0);
}

#[test]
fn game_over_waits_for_a_key() {
    let mut state = make_state();
    state.obstacles[0] = Obstacle { lane: 7, x: 5, active: true };
    // Idle polls are skipped by the blocking read; with no key it never returns
    let mut con = ScriptedConsole::new(&[None, None, None]);
    assert!(play(&mut con, &mut state, Speed::Slow, &mut seeded_rng()).is_err());
    assert!(con.printed("GAME OVER!"));
}
