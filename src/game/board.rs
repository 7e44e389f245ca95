use crate::constants::WIN_LENGTH;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Cross,
    Circle,
}

/// The non-empty half of [`Cell`]: whoever's turn it is.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    Cross,
    Circle,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Cross => Player::Circle,
            Player::Circle => Player::Cross,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::Cross => Cell::Cross,
            Player::Circle => Cell::Circle,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Cross => "Cross",
            Player::Circle => "Circle",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("board size {width}x{height} is too small, need at least {min}x{min}", min = WIN_LENGTH)]
    InvalidSize { width: usize, height: usize },
}

/// Row-major grid of cells. Dimensions are fixed at construction and every
/// placed mark is write-once.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

// The four scan directions: right, down, down-right, down-left.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

impl Board {
    /// Create an empty board. Either dimension below `WIN_LENGTH` is
    /// rejected: a five-long run could never fit.
    pub fn new(width: usize, height: usize) -> Result<Board, BoardError> {
        if width < WIN_LENGTH || height < WIN_LENGTH {
            return Err(BoardError::InvalidSize { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// A fresh all-empty board with the same dimensions. Infallible since
    /// `self` already passed the size check.
    pub fn cleared(&self) -> Board {
        Board {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Empty; self.width * self.height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    /// Place the player's mark at `(x, y)`. Returns false without touching
    /// the board when the coordinates are off the grid or the cell is
    /// already taken.
    pub fn place(&mut self, x: usize, y: usize, player: Player) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        if self.get(x, y) != Cell::Empty {
            return false;
        }
        self.cells[y * self.width + x] = player.to_cell();
        true
    }

    /// Whether any player has `WIN_LENGTH` identical marks in a row,
    /// column, or diagonal. Longer runs count too.
    pub fn has_five_in_a_row(&self) -> bool {
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.get(x, y);
                if cell == Cell::Empty {
                    continue;
                }
                for (dx, dy) in DIRECTIONS {
                    if self.run_from(x, y, dx, dy, cell) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Check for `WIN_LENGTH` cells equal to `cell` starting at `(x, y)`
    /// and stepping by `(dx, dy)`. Rejects runs that would leave the grid.
    fn run_from(&self, x: usize, y: usize, dx: i32, dy: i32, cell: Cell) -> bool {
        let span = (WIN_LENGTH - 1) as i32;
        let end_x = x as i32 + dx * span;
        let end_y = y as i32 + dy * span;
        if end_x < 0 || end_x >= self.width as i32 || end_y < 0 || end_y >= self.height as i32 {
            return false;
        }
        (0..WIN_LENGTH as i32).all(|step| {
            let cx = (x as i32 + dx * step) as usize;
            let cy = (y as i32 + dy * step) as usize;
            self.get(cx, cy) == cell
        })
    }

    /// Rows in row-major order, for the renderer.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}
