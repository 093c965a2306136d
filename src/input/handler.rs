use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Turn;

/// The three logical gestures of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Button A turns left, button B turns right
    Turn(Turn),
    /// Logo touch
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Gesture(Gesture),
    Quit,
    None,
}

/// Maps key presses onto the device's buttons
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Button A
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Gesture(Gesture::Turn(Turn::Left))
            }

            // Button B
            KeyCode::Right
            | KeyCode::Char('d')
            | KeyCode::Char('D')
            | KeyCode::Char('b')
            | KeyCode::Char('B') => KeyAction::Gesture(Gesture::Turn(Turn::Right)),

            // Logo
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') => {
                KeyAction::Gesture(Gesture::Restart)
            }

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_turn_left_keys() {
        let left = KeyAction::Gesture(Gesture::Turn(Turn::Left));
        assert_eq!(press(KeyCode::Left), left);
        assert_eq!(press(KeyCode::Char('a')), left);
        assert_eq!(press(KeyCode::Char('A')), left);
    }

    #[test]
    fn test_turn_right_keys() {
        let right = KeyAction::Gesture(Gesture::Turn(Turn::Right));
        assert_eq!(press(KeyCode::Right), right);
        assert_eq!(press(KeyCode::Char('d')), right);
        assert_eq!(press(KeyCode::Char('b')), right);
    }

    #[test]
    fn test_vertical_arrows_do_nothing() {
        // Steering is relative; there is no absolute up or down
        assert_eq!(press(KeyCode::Up), KeyAction::None);
        assert_eq!(press(KeyCode::Down), KeyAction::None);
    }

    #[test]
    fn test_restart_keys() {
        assert_eq!(press(KeyCode::Char('r')), KeyAction::Gesture(Gesture::Restart));
        assert_eq!(press(KeyCode::Char(' ')), KeyAction::Gesture(Gesture::Restart));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Esc), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
