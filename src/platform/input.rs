//! Keyboard input mapping
//!
//! Keys are identified by physical code (`KeyboardEvent.code`), not by the
//! character they produce.

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Starts the game from the title screen
    Space,
    ArrowLeft,
    ArrowRight,
    /// Toggles the idle/demo autopilot
    Idle,
}

impl Key {
    /// Map a `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(Key::Space),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "KeyI" => Some(Key::Idle),
            _ => None,
        }
    }
}

/// A key press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Key::from_code("Space"), Some(Key::Space));
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_code("ArrowRight"), Some(Key::ArrowRight));
        assert_eq!(Key::from_code("KeyI"), Some(Key::Idle));
        // Character values are not codes
        assert_eq!(Key::from_code(" "), None);
        assert_eq!(Key::from_code("KeyA"), None);
    }
}
