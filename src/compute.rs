/// Pure game-logic functions.
///
/// Every state transition takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use log::trace;
use rand::Rng;

use crate::config::{
    LANES, MAX_OBSTACLES, PLAYER_MAX_X, SHIP_WIDTH, START_LANE, START_X, TRACK_WIDTH,
};
use crate::entities::{Difficulty, GameState, Key, Obstacle, Player, Speed};

// ── Difficulty / speed tables ────────────────────────────────────────────────

pub fn obstacle_count_for(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 3,
        Difficulty::Medium => 8,
        Difficulty::Hard => 15,
    }
}

/// Milliseconds slept after every frame. Obstacles always move one column
/// per frame, so this is what makes a speed setting fast or slow.
pub fn frame_delay_for(speed: Speed) -> u64 {
    match speed {
        Speed::Slow => 120,
        Speed::Fast => 70,
        Speed::Ultra => 40,
    }
}

pub fn difficulty_name(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
    }
}

pub fn speed_name(speed: Speed) -> &'static str {
    match speed {
        Speed::Slow => "Slow",
        Speed::Fast => "Fast",
        Speed::Ultra => "Ultra",
    }
}

// Settings steps clamp at both ends, no wraparound.

pub fn harder(difficulty: Difficulty) -> Difficulty {
    match difficulty {
        Difficulty::Easy => Difficulty::Medium,
        Difficulty::Medium | Difficulty::Hard => Difficulty::Hard,
    }
}

pub fn easier(difficulty: Difficulty) -> Difficulty {
    match difficulty {
        Difficulty::Hard => Difficulty::Medium,
        Difficulty::Medium | Difficulty::Easy => Difficulty::Easy,
    }
}

pub fn faster(speed: Speed) -> Speed {
    match speed {
        Speed::Slow => Speed::Fast,
        Speed::Fast | Speed::Ultra => Speed::Ultra,
    }
}

pub fn slower(speed: Speed) -> Speed {
    match speed {
        Speed::Ultra => Speed::Fast,
        Speed::Fast | Speed::Slow => Speed::Slow,
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session for `difficulty`.
///
/// The track is cut into one equal segment per active obstacle and each
/// obstacle starts at a random column inside its own segment, so the field
/// opens spread out instead of clustered.
pub fn init_game(difficulty: Difficulty, rng: &mut impl Rng) -> GameState {
    let count = obstacle_count_for(difficulty);
    let segment = TRACK_WIDTH / count as i32;
    let span = if segment > 0 { segment } else { TRACK_WIDTH };

    let mut obstacles = vec![Obstacle::default(); MAX_OBSTACLES];
    for (i, obstacle) in obstacles.iter_mut().take(count).enumerate() {
        let base = segment * i as i32;
        *obstacle = Obstacle {
            lane: rng.gen_range(0..LANES),
            x: (base + rng.gen_range(0..span)).min(TRACK_WIDTH - 1),
            active: true,
        };
    }

    GameState {
        player: Player {
            lane: START_LANE,
            x: START_X,
        },
        obstacles,
        obstacle_count: count,
        score: 0,
        difficulty,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    with_player(state, Player {
        x: (state.player.x - 1).max(0),
        ..state.player
    })
}

pub fn move_player_right(state: &GameState) -> GameState {
    with_player(state, Player {
        x: (state.player.x + 1).min(PLAYER_MAX_X),
        ..state.player
    })
}

pub fn move_player_up(state: &GameState) -> GameState {
    with_player(state, Player {
        lane: (state.player.lane - 1).max(0),
        ..state.player
    })
}

pub fn move_player_down(state: &GameState) -> GameState {
    with_player(state, Player {
        lane: (state.player.lane + 1).min(LANES - 1),
        ..state.player
    })
}

/// Apply one movement key. Keys that do not move the ship (including Quit,
/// which the game loop handles itself) leave the state untouched.
pub fn apply_key(state: &GameState, key: Key) -> GameState {
    match key {
        Key::Left => move_player_left(state),
        Key::Right => move_player_right(state),
        Key::Up => move_player_up(state),
        Key::Down => move_player_down(state),
        Key::Confirm | Key::Quit | Key::Other => state.clone(),
    }
}

fn with_player(state: &GameState, player: Player) -> GameState {
    GameState {
        player,
        ..state.clone()
    }
}

// ── Collision ────────────────────────────────────────────────────────────────

/// True when an active obstacle in the player's lane sits on the ship's body.
/// The wings drawn in the neighbouring lanes never collide.
pub fn collides(state: &GameState) -> bool {
    let p = &state.player;
    let body = p.x..p.x + SHIP_WIDTH;
    state
        .active_obstacles()
        .any(|o| o.lane == p.lane && body.contains(&o.x))
}

// ── Per-frame obstacle advance (nearly pure, RNG is injected) ──────────────

/// Scroll every active obstacle one column to the left.  An obstacle that
/// falls off the left edge respawns at the right edge in a random lane and
/// scores one point; this is the only way the score grows.
pub fn advance_obstacles(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut score = state.score;
    let obstacles = state
        .obstacles
        .iter()
        .enumerate()
        .map(|(i, o)| {
            if i >= state.obstacle_count || !o.active {
                return *o;
            }
            let x = o.x - 1;
            if x >= 0 {
                return Obstacle { x, ..*o };
            }
            let lane = rng.gen_range(0..LANES);
            score += 1;
            trace!("obstacle {} recycled into lane {}", i, lane);
            Obstacle {
                lane,
                x: TRACK_WIDTH - 1,
                active: true,
            }
        })
        .collect();

    GameState {
        obstacles,
        score,
        ..state.clone()
    }
}

impl GameState {
    pub fn active_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles
            .iter()
            .take(self.obstacle_count)
            .filter(|o| o.active)
    }
}
