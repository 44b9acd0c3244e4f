use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyCommand {
    Quit,
    Retry,
    ScrollLeft,
    ScrollRight,
}

pub(crate) fn command_from_key(key: KeyEvent) -> Option<KeyCommand> {
    match key.code {
        KeyCode::Esc => Some(KeyCommand::Quit),
        KeyCode::Left => Some(KeyCommand::ScrollLeft),
        KeyCode::Right => Some(KeyCommand::ScrollRight),
        KeyCode::Char(_) => command_char(key).and_then(command_from_char),
        _ => None,
    }
}

pub(crate) fn command_from_char(ch: char) -> Option<KeyCommand> {
    match ch {
        'q' => Some(KeyCommand::Quit),
        'r' => Some(KeyCommand::Retry),
        'h' => Some(KeyCommand::ScrollLeft),
        'l' => Some(KeyCommand::ScrollRight),
        _ => None,
    }
}

fn command_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch.to_ascii_lowercase())
    } else {
        None
    }
}
