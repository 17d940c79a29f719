/// All game entity types: pure data, no logic.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Speed {
    #[default]
    Slow,
    Fast,
    Ultra,
}

/// Player-chosen settings. Live for the whole process, never written to disk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub speed: Speed,
}

/// Logical keys. Raw terminal key codes are translated by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Quit,
    Other,
}

/// How a run of the game loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The ship hit an obstacle; the session is used up.
    Crashed,
    /// The player went back to the menu; the session can be continued.
    Suspended,
}

// ── Track entities ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Obstacle {
    pub lane: i32,
    pub x: i32,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Player {
    pub lane: i32,
    /// Column of the ship's leading (left) edge.
    pub x: i32,
}

// ── Session state ─────────────────────────────────────────────────────────────

/// One game session. Kept by the controller across a quit-to-menu so it can
/// be resumed, and rebuilt from scratch on a new game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub player: Player,
    /// Fixed-size pool; only the first `obstacle_count` entries are active.
    pub obstacles: Vec<Obstacle>,
    pub obstacle_count: usize,
    pub score: u32,
    /// Difficulty the session was built with.
    pub difficulty: Difficulty,
}
