//! Hard-coded game configuration.
//!
//! Positions are in board pixels; one cell is `CELL_SIZE` pixels on a side.

use std::time::Duration;

use crate::Coords;

/// Edge length of one grid cell, in board pixels
pub const CELL_SIZE: i32 = 25;

/// Board extent in pixels
pub const BOARD_WIDTH_PX: i32 = 1000;
pub const BOARD_HEIGHT_PX: i32 = 700;

/// Board extent in cells
pub const BOARD_COLS: i32 = BOARD_WIDTH_PX / CELL_SIZE;
pub const BOARD_ROWS: i32 = BOARD_HEIGHT_PX / CELL_SIZE;

/// Time between two game updates
pub const TICK_INTERVAL: Duration = Duration::from_millis(170);

/// Where a fresh snake's single segment starts
pub const SNAKE_START: Coords = (0, 2 * CELL_SIZE);

/// Where the target sits at the start of every round
pub const TARGET_START: Coords = (5 * CELL_SIZE, 5 * CELL_SIZE);

/// Position of a freshly grown segment until the next step pulls it in
pub const OFF_BOARD: Coords = (-1, -1);

/// Segments `0..SELF_COLLISION_EXEMPT` never count as hitting the head
pub const SELF_COLLISION_EXEMPT: usize = 3;

/// Terminal columns used to draw a single cell
pub const CELL_COLUMNS: u16 = 2;

pub const SNAKE_BODY_GLYPH: [char; 2] = ['█', '█'];
pub const TARGET_GLYPH: [char; 2] = ['(', ')'];
pub const EMPTY_GLYPH: [char; 2] = [' ', ' '];

pub const GAME_OVER_HINT: &str = "Press ENTER to play again. Press ESCAPE to exit";

/// Log output goes to this file inside the system temp directory
pub const LOG_FILE_NAME: &str = "snake.log";
