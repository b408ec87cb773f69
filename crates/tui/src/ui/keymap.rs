use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means, before the app decides whether the filter drawer
/// or the browse view consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    Cancel,
    NextField,
    Submit,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && let KeyCode::Char('c') = key.code
    {
        return AppAction::Quit;
    }

    match key.code {
        KeyCode::Char('q') => AppAction::Quit,
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Tab => AppAction::NextField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Left => AppAction::Left,
        KeyCode::Right => AppAction::Right,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_quits_regardless_of_mode() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), AppAction::Quit);
        // A bare 'c' is ordinary input (clear-filters in browse mode).
        assert_eq!(map_key(press(KeyCode::Char('c'))), AppAction::Input('c'));
    }

    #[test]
    fn navigation_keys_map_to_directions() {
        assert_eq!(map_key(press(KeyCode::Left)), AppAction::Left);
        assert_eq!(map_key(press(KeyCode::Right)), AppAction::Right);
        assert_eq!(map_key(press(KeyCode::Tab)), AppAction::NextField);
        assert_eq!(map_key(press(KeyCode::F(5))), AppAction::None);
    }
}
