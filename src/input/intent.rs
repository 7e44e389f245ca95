use crate::constants::{CELL_HEIGHT, CELL_WIDTH};

/// A raw terminal event translated into a game-meaningful action. The
/// coordinates in `CellActivated` are board cells, not screen positions,
/// and may lie outside the board; the board rejects those itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Intent {
    CellActivated(usize, usize),
    AnyKey,
    Restart,
    Quit,
}

/// Map a pointer position to the board cell under it. The board is drawn
/// from the terminal origin with a fixed cell footprint, so this is the
/// inverse of the renderer's layout.
pub fn screen_to_cell(column: u16, row: u16) -> (usize, usize) {
    (
        (column / CELL_WIDTH) as usize,
        (row / CELL_HEIGHT) as usize,
    )
}
