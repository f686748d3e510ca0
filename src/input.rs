use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

/// A key press, decoded into what it means to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Turn(Direction),
    Pause,
    Quit,
}

impl Input {
    pub fn from_key(ev: &KeyEvent) -> Option<Input> {
        if is_ctrl_c(ev) {
            return Some(Input::Quit);
        }

        let input = match ev.code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Input::Turn(Up),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Input::Turn(Left),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Input::Turn(Down),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Input::Turn(Right),
            KeyCode::Char('q') | KeyCode::Char('Q') => Input::Quit,
            KeyCode::Esc => Input::Pause,
            _ => return None,
        };
        Some(input)
    }
}

/// Input gathered between two ticks. Only the last turn survives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickInput {
    pub turn: Option<Direction>,
    pub toggle_pause: bool,
    pub quit: bool,
}

impl TickInput {
    pub fn push(&mut self, input: Input) {
        match input {
            Input::Turn(direction) => self.turn = Some(direction),
            Input::Pause => self.toggle_pause = !self.toggle_pause,
            Input::Quit => self.quit = true,
        }
    }

    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a KeyEvent>) -> Self {
        let mut tick_input = TickInput::default();
        for input in keys.into_iter().filter_map(Input::from_key) {
            tick_input.push(input);
        }
        tick_input
    }

    /// Hands out the buffered turn, leaving nothing for the next tick.
    pub fn take_turn(&mut self) -> Option<Direction> {
        self.turn.take()
    }
}

/// What the player asked for on the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterRun {
    PlayAgain,
    ChangeSpeed,
    Quit,
}

impl AfterRun {
    pub fn from_key(ev: &KeyEvent) -> AfterRun {
        if is_ctrl_c(ev) {
            return AfterRun::Quit;
        }
        match ev.code {
            KeyCode::Char('s') | KeyCode::Char('S') => AfterRun::ChangeSpeed,
            _ => AfterRun::PlayAgain,
        }
    }
}

pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    fn ctrl_c() -> KeyEvent {
        KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }
    }

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(Input::from_key(&key(KeyCode::Up)), Some(Input::Turn(Up)));
        assert_eq!(Input::from_key(&key(KeyCode::Left)), Some(Input::Turn(Left)));
        assert_eq!(Input::from_key(&key(KeyCode::Char('s'))), Some(Input::Turn(Down)));
        assert_eq!(Input::from_key(&key(KeyCode::Char('D'))), Some(Input::Turn(Right)));
    }

    #[test]
    fn control_keys() {
        assert_eq!(Input::from_key(&ctrl_c()), Some(Input::Quit));
        assert_eq!(Input::from_key(&key(KeyCode::Char('q'))), Some(Input::Quit));
        assert_eq!(Input::from_key(&key(KeyCode::Esc)), Some(Input::Pause));
        assert_eq!(Input::from_key(&key(KeyCode::Char('c'))), None);
        assert_eq!(Input::from_key(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn last_turn_between_ticks_wins() {
        let keys = [key(KeyCode::Up), key(KeyCode::Char('x')), key(KeyCode::Left)];
        let mut tick_input = TickInput::from_keys(&keys);

        assert_eq!(tick_input.take_turn(), Some(Left));
        assert_eq!(tick_input.take_turn(), None);
        assert!(!tick_input.quit);
    }

    #[test]
    fn pause_presses_cancel_out() {
        let once = TickInput::from_keys(&[key(KeyCode::Esc)]);
        let twice = TickInput::from_keys(&[key(KeyCode::Esc), key(KeyCode::Esc)]);

        assert!(once.toggle_pause);
        assert!(!twice.toggle_pause);
    }

    #[test]
    fn quit_is_sticky() {
        let tick_input = TickInput::from_keys(&[ctrl_c(), key(KeyCode::Down)]);

        assert!(tick_input.quit);
        assert_eq!(tick_input.turn, Some(Down));
    }

    #[test]
    fn game_over_choices() {
        assert_eq!(AfterRun::from_key(&key(KeyCode::Char('s'))), AfterRun::ChangeSpeed);
        assert_eq!(AfterRun::from_key(&key(KeyCode::Char(' '))), AfterRun::PlayAgain);
        assert_eq!(AfterRun::from_key(&ctrl_c()), AfterRun::Quit);
    }
}
