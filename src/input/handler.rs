use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::input::intent::{screen_to_cell, Intent};

/// Translate one crossterm event into at most one intent. Key releases,
/// repeats, mouse movement and everything else produce none.
pub fn translate_event(event: &Event) -> Option<Intent> {
    match event {
        Event::Key(KeyEvent { code, kind, .. }) if *kind == KeyEventKind::Press => {
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
                KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
                _ => Some(Intent::AnyKey),
            }
        }
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            let (x, y) = screen_to_cell(*column, *row);
            Some(Intent::CellActivated(x, y))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key_press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn quit_and_restart_keys() {
        assert_eq!(translate_event(&key_press(KeyCode::Char('q'))), Some(Intent::Quit));
        assert_eq!(translate_event(&key_press(KeyCode::Char('Q'))), Some(Intent::Quit));
        assert_eq!(translate_event(&key_press(KeyCode::Char('r'))), Some(Intent::Restart));
        assert_eq!(translate_event(&key_press(KeyCode::Char('R'))), Some(Intent::Restart));
    }

    #[test]
    fn other_keys_are_any_key() {
        assert_eq!(translate_event(&key_press(KeyCode::Char('x'))), Some(Intent::AnyKey));
        assert_eq!(translate_event(&key_press(KeyCode::Enter)), Some(Intent::AnyKey));
    }

    #[test]
    fn left_click_becomes_cell_activation() {
        use crate::constants::{CELL_HEIGHT, CELL_WIDTH};
        assert_eq!(translate_event(&click(0, 0)), Some(Intent::CellActivated(0, 0)));
        assert_eq!(
            translate_event(&click(CELL_WIDTH * 3, CELL_HEIGHT * 2)),
            Some(Intent::CellActivated(3, 2))
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(translate_event(&Event::Key(event)), None);
    }

    #[test]
    fn mouse_movement_is_ignored() {
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 5,
            row: 5,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate_event(&event), None);
    }
}
