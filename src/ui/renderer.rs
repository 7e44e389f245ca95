use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::constants::{CELL_HEIGHT, CELL_WIDTH, WIN_BANNER_DELAY};
use crate::game::{Cell, Game, Phase};
use crate::ui::theme::Theme;

pub fn ui(f: &mut Frame, game: &Game, theme: &Theme) {
    match game.phase() {
        Phase::Home => {
            render_home(f, theme);
        }
        Phase::Playing => {
            render_board(f, game, theme);
            render_status(f, game, theme);
        }
        Phase::Won(winner) => {
            render_board(f, game, theme);
            render_status(f, game, theme);
            // Let the winning board sink in before covering it
            if game.win_timer() > WIN_BANNER_DELAY {
                render_winner_banner(f, winner, theme);
            }
        }
    }
}

fn render_home(f: &mut Frame, theme: &Theme) {
    let popup_area = centered_rect(60, 30, f.size());
    f.render_widget(Clear, popup_area);

    let home_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "FIVE IN A ROW",
            Style::default().fg(theme.text),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press any key to start")]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Click a cell to place your mark")]),
        Line::from(vec![Span::raw("R restarts, Q quits")]),
    ];

    let home_widget = Paragraph::new(home_text)
        .block(Block::default().borders(Borders::ALL).title("piskvorky"))
        .alignment(Alignment::Center);

    f.render_widget(home_widget, popup_area);
}

/// The grid is anchored at the terminal origin with a fixed footprint per
/// cell; `input::screen_to_cell` relies on exactly this layout.
fn render_board(f: &mut Frame, game: &Game, theme: &Theme) {
    let board = game.board();
    let mut board_lines = Vec::with_capacity(board.height());

    for row in board.rows() {
        let mut line_spans = Vec::with_capacity(board.width());
        for &cell in row {
            let span = match cell {
                Cell::Empty => Span::styled("· ", Style::default().fg(theme.grid)),
                Cell::Cross => Span::styled("╳ ", Style::default().fg(theme.cross)),
                Cell::Circle => Span::styled("◯ ", Style::default().fg(theme.circle)),
            };
            line_spans.push(span);
        }
        board_lines.push(Line::from(line_spans));
    }

    let area = f.size();
    let board_area = Rect::new(
        0,
        0,
        (board.width() as u16 * CELL_WIDTH).min(area.width),
        (board.height() as u16 * CELL_HEIGHT).min(area.height),
    );

    f.render_widget(Paragraph::new(board_lines), board_area);
}

fn render_status(f: &mut Frame, game: &Game, theme: &Theme) {
    let area = f.size();
    let board_bottom = game.board().height() as u16 * CELL_HEIGHT;
    if board_bottom >= area.height {
        return;
    }
    let status_area = Rect::new(0, board_bottom, area.width, 1);

    let player = game.active_player();
    let status = Line::from(vec![
        Span::styled(player.name(), Style::default().fg(theme.player_color(player))),
        Span::raw(" to move   [click] place   [R] restart   [Q] quit"),
    ]);

    f.render_widget(Paragraph::new(status), status_area);
}

fn render_winner_banner(f: &mut Frame, winner: crate::game::Player, theme: &Theme) {
    let popup_area = centered_rect(50, 30, f.size());
    f.render_widget(Clear, popup_area);

    let banner_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            format!("{} WINS", winner.name().to_uppercase()),
            Style::default().fg(theme.player_color(winner)),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press R to restart")]),
        Line::from(vec![Span::raw("Press Q to quit")]),
    ];

    let banner_widget = Paragraph::new(banner_text)
        .block(Block::default().borders(Borders::ALL).title("Game over"))
        .alignment(Alignment::Center);

    f.render_widget(banner_widget, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
