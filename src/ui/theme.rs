use ratatui::style::Color;

use crate::game::Player;

/// Colors for the renderer, passed in explicitly instead of living as
/// module-level globals.
pub struct Theme {
    pub cross: Color,
    pub circle: Color,
    pub grid: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // The original palette: blue crosses, red circles.
        Self {
            cross: Color::Blue,
            circle: Color::Red,
            grid: Color::DarkGray,
            text: Color::White,
        }
    }
}

impl Theme {
    pub fn player_color(&self, player: Player) -> Color {
        match player {
            Player::Cross => self.cross,
            Player::Circle => self.circle,
        }
    }
}
