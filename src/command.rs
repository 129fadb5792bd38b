use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Resume,
    Quit,
}

impl Command {
    pub fn from_key_event(ev: &KeyEvent) -> Option<Command> {
        if is_ctrl_c(ev) {
            return Some(Command::Quit);
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
            KeyCode::Enter => Some(Command::Resume),
            KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(Command::from_key_event(&key(KeyCode::Up)), Some(Command::Turn(Up)));
        assert_eq!(Command::from_key_event(&key(KeyCode::Char('a'))), Some(Command::Turn(Left)));
        assert_eq!(Command::from_key_event(&key(KeyCode::Down)), Some(Command::Turn(Down)));
        assert_eq!(Command::from_key_event(&key(KeyCode::Char('d'))), Some(Command::Turn(Right)));
    }

    #[test]
    fn enter_resumes_and_escape_quits() {
        assert_eq!(Command::from_key_event(&key(KeyCode::Enter)), Some(Command::Resume));
        assert_eq!(Command::from_key_event(&key(KeyCode::Esc)), Some(Command::Quit));
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(Command::from_key_event(&ev), Some(Command::Quit));
        assert_eq!(Command::from_key_event(&key(KeyCode::Char('c'))), None);
    }
}
