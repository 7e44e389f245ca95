pub const BOARD_WIDTH: usize = 20;
pub const BOARD_HEIGHT: usize = 20;

// How many identical marks in a line win the game
pub const WIN_LENGTH: usize = 5;

// Terminal footprint of one board cell. The board is anchored at the
// top-left of the screen, so pointer-to-cell translation is plain division.
pub const CELL_WIDTH: u16 = 2;
pub const CELL_HEIGHT: u16 = 1;

// Event poll interval for the main loop (~60 ticks per second)
pub const TICK_MILLIS: u64 = 16;

// Frames to keep showing the final board before the winner banner appears
pub const WIN_BANNER_DELAY: u32 = 180;
