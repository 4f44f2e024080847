use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shared::game_state::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Reset,
    Quit,
}

/// which keys move the player's paddle. reset and quit are the same in every layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum KeyBindings {
    /// k moves up, j moves down
    #[default]
    Vim,
    /// the arrow keys move the paddle
    Arrows,
}

impl KeyBindings {
    pub fn action(self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if is_ctrl_c(key) {
            return Some(Action::Quit);
        }
        match (self, key.code) {
            (_, KeyCode::Char('q')) => Some(Action::Quit),
            (_, KeyCode::Char('r')) => Some(Action::Reset),
            (KeyBindings::Vim, KeyCode::Char('k')) | (KeyBindings::Arrows, KeyCode::Up) => {
                Some(Action::Move(Direction::Up))
            }
            (KeyBindings::Vim, KeyCode::Char('j')) | (KeyBindings::Arrows, KeyCode::Down) => {
                Some(Action::Move(Direction::Down))
            }
            _ => None,
        }
    }

    /// the instructions printed in the top-left corner during a game.
    pub fn help(self) -> [&'static str; 3] {
        let movement = match self {
            KeyBindings::Vim => "MOVEMENT: UP: k, DOWN: j",
            KeyBindings::Arrows => "MOVEMENT: UP: \u{2191}, DOWN: \u{2193}",
        };
        ["EXIT: q", "RESET: r", movement]
    }
}

pub fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c')
}
