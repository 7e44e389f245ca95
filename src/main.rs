use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io::stdout, time::Duration};

mod constants;
mod game;
mod input;
mod ui;

use constants::{BOARD_HEIGHT, BOARD_WIDTH, TICK_MILLIS};
use game::{Board, Game, Signal};
use input::translate_event;
use ui::{ui, Theme};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A board this small cannot express a win; bail before touching the
    // terminal.
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT)?;
    let mut game = Game::new(board);
    let theme = Theme::default();

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Game loop: one draw and at most one intent per tick
    loop {
        terminal.draw(|f| ui(f, &game, &theme))?;

        if event::poll(Duration::from_millis(TICK_MILLIS))? {
            let event = event::read()?;
            if let Some(intent) = translate_event(&event) {
                if game.handle(intent) == Signal::Quit {
                    break;
                }
            }
        }

        game.advance_frame();
    }

    // Cleanup
    execute!(terminal.backend_mut(), DisableMouseCapture)?;
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
