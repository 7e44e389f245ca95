use crate::game::board::{Board, Player};
use crate::input::Intent;

/// Which screen the game is on. `Won` carries the winner so the end screen
/// never has to reverse-engineer it from the turn order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Home,
    Playing,
    Won(Player),
}

/// What the main loop should do after an intent was handled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Signal {
    Continue,
    Quit,
}

/// Circle opens the game, matching the original rules.
const FIRST_PLAYER: Player = Player::Circle;

pub struct Game {
    board: Board,
    active_player: Player,
    phase: Phase,
    win_timer: u32,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            active_player: FIRST_PLAYER,
            phase: Phase::Home,
            win_timer: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn win_timer(&self) -> u32 {
        self.win_timer
    }

    /// Dispatch one translated input intent. At most one intent arrives per
    /// tick; `Quit` is only reported back, never acted on here.
    pub fn handle(&mut self, intent: Intent) -> Signal {
        match intent {
            Intent::CellActivated(x, y) => self.on_cell_activated(x, y),
            Intent::AnyKey => self.on_any_key_at_home(),
            Intent::Restart => self.on_restart_requested(),
            Intent::Quit => return Signal::Quit,
        }
        Signal::Continue
    }

    /// A board cell was clicked. Ignored outside `Playing`; an occupied or
    /// out-of-range cell leaves everything unchanged. On a winning placement
    /// the mover stays recorded as `active_player`.
    pub fn on_cell_activated(&mut self, x: usize, y: usize) {
        if self.phase != Phase::Playing {
            return;
        }
        if !self.board.place(x, y, self.active_player) {
            return;
        }
        if self.board.has_five_in_a_row() {
            self.phase = Phase::Won(self.active_player);
        } else {
            self.active_player = self.active_player.other();
        }
    }

    /// Leave the home screen and start a fresh game. No-op elsewhere.
    pub fn on_any_key_at_home(&mut self) {
        if self.phase == Phase::Home {
            self.start_fresh();
        }
    }

    /// Start over from any phase, straight into `Playing`. The whole state
    /// is replaced in one assignment so no field can survive a reset stale.
    pub fn on_restart_requested(&mut self) {
        self.start_fresh();
    }

    fn start_fresh(&mut self) {
        *self = Self {
            board: self.board.cleared(),
            active_player: FIRST_PLAYER,
            phase: Phase::Playing,
            win_timer: 0,
        };
    }

    /// Called once per rendering tick. Only counts frames on the end screen,
    /// where the renderer uses it to delay the restart banner.
    pub fn advance_frame(&mut self) {
        if let Phase::Won(_) = self.phase {
            self.win_timer += 1;
        }
    }
}
