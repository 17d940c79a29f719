/// Number of columns an obstacle can occupy.
pub const TRACK_WIDTH: i32 = 150;
/// Number of lanes (rows) on the track.
pub const LANES: i32 = 15;
/// Capacity of the obstacle pool; the active count is set by difficulty.
pub const MAX_OBSTACLES: usize = 30;

pub const START_LANE: i32 = LANES / 2;
pub const START_X: i32 = 5;

/// Cells covered by the ship in its own lane: a 5-cell body plus the arrow.
/// Collisions are checked against `[x, x + SHIP_WIDTH - 1]`.
pub const SHIP_WIDTH: i32 = 6;
/// Rightmost column the ship's leading edge may reach.
pub const PLAYER_MAX_X: i32 = TRACK_WIDTH - SHIP_WIDTH;

/// Sleep between polls while a menu is waiting for input.
pub const MENU_POLL_MS: u64 = 60;

// ── Screen layout ─────────────────────────────────────────────────────────────

pub const CONTROLS_ROW: u16 = 0;
pub const STATUS_ROW: u16 = 1;
pub const TRACK_TOP_ROW: u16 = 2;
pub const MENU_BASE_ROW: u16 = 10;
pub const OPTIONS_BASE_ROW: u16 = 3;
