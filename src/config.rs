// Shared game UI/constants.
pub const BOARD_W: usize = 10;
pub const BOARD_H: usize = 20;
pub const CELL_W: usize = 2; // render each block as two characters wide
pub const PLAY_W: usize = BOARD_W * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_H + 2; // inner height plus ceiling/floor
// Minimal pane width to fit the info/controls width + cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 2;

// Gravity starts at one step per second and speeds up per level, floored.
pub const BASE_GRAVITY_MS: u64 = 1000;
pub const GRAVITY_STEP_MS: u64 = 100;
pub const MIN_GRAVITY_MS: u64 = 100;
// One level gained per minute of play.
pub const LEVEL_UP_MS: u64 = 60_000;
