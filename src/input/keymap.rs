//! Keyboard layout of the fractal workbench.
//!
//! ```text
//!   arrows  nudge the projection      Q / E   rotate ccw / cw
//!   A / D   shrink / grow along x     C       recall last clone
//!   S / W   shrink / grow along y     - / +   fractal level
//!   Z / X   shrink / grow both axes   SPACE   confirm / place clone
//!   L       by-level fractal          P       spray paint fractal
//!   Ctrl-R  start over
//! ```

use super::{Axis, Command, Direction, Rotation, ScaleDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Up,
    Right,
    Down,
    A,
    D,
    S,
    W,
    Z,
    X,
    Q,
    E,
    C,
    Minus,
    Plus,
    Space,
    L,
    P,
    CtrlR,
}

impl Key {
    /// Look up a key by the name typed at the prompt (case-insensitive)
    pub fn from_name(name: &str) -> Option<Key> {
        let key = match name.to_ascii_lowercase().as_str() {
            "left" => Key::Left,
            "up" => Key::Up,
            "right" => Key::Right,
            "down" => Key::Down,
            "a" => Key::A,
            "d" => Key::D,
            "s" => Key::S,
            "w" => Key::W,
            "z" => Key::Z,
            "x" => Key::X,
            "q" => Key::Q,
            "e" => Key::E,
            "c" => Key::C,
            "-" | "minus" => Key::Minus,
            "+" | "=" | "plus" => Key::Plus,
            "space" => Key::Space,
            "l" => Key::L,
            "p" => Key::P,
            "ctrl-r" | "^r" => Key::CtrlR,
            _ => return None,
        };
        Some(key)
    }

    /// Map a DOM `keyCode` onto a key. Ctrl-R has no single code.
    pub fn from_key_code(code: u32) -> Option<Key> {
        let key = match code {
            37 => Key::Left,
            38 => Key::Up,
            39 => Key::Right,
            40 => Key::Down,
            65 => Key::A,
            68 => Key::D,
            83 => Key::S,
            87 => Key::W,
            90 => Key::Z,
            88 => Key::X,
            81 => Key::Q,
            69 => Key::E,
            67 => Key::C,
            189 => Key::Minus,
            187 => Key::Plus,
            32 => Key::Space,
            76 => Key::L,
            80 => Key::P,
            _ => return None,
        };
        Some(key)
    }

    /// The command bound to this key
    pub fn command(self) -> Command {
        match self {
            Key::Left => Command::Nudge(Direction::Left),
            Key::Up => Command::Nudge(Direction::Up),
            Key::Right => Command::Nudge(Direction::Right),
            Key::Down => Command::Nudge(Direction::Down),
            Key::A => Command::ScaleAxis(Axis::X, ScaleDirection::Shrink),
            Key::D => Command::ScaleAxis(Axis::X, ScaleDirection::Grow),
            Key::S => Command::ScaleAxis(Axis::Y, ScaleDirection::Shrink),
            Key::W => Command::ScaleAxis(Axis::Y, ScaleDirection::Grow),
            Key::Z => Command::ScaleAxis(Axis::Both, ScaleDirection::Shrink),
            Key::X => Command::ScaleAxis(Axis::Both, ScaleDirection::Grow),
            Key::Q => Command::Rotate(Rotation::CounterClockwise),
            Key::E => Command::Rotate(Rotation::Clockwise),
            Key::C => Command::RecallLastTransform,
            Key::Minus => Command::DecrementLevel,
            Key::Plus => Command::IncrementLevel,
            Key::Space => Command::ConfirmOrCommit,
            Key::L => Command::RenderByLevel,
            Key::P => Command::RenderSpray,
            Key::CtrlR => Command::FullReset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(37, Command::Nudge(Direction::Left) ; "left arrow")]
    #[test_case(87, Command::ScaleAxis(Axis::Y, ScaleDirection::Grow) ; "w key")]
    #[test_case(81, Command::Rotate(Rotation::CounterClockwise) ; "q key")]
    #[test_case(67, Command::RecallLastTransform ; "c key")]
    #[test_case(189, Command::DecrementLevel ; "minus key")]
    #[test_case(32, Command::ConfirmOrCommit ; "space key")]
    #[test_case(80, Command::RenderSpray ; "p key")]
    fn test_key_codes(code: u32, expected: Command) {
        assert_eq!(Key::from_key_code(code).map(Key::command), Some(expected));
    }

    #[test]
    fn test_names_are_case_insensitive() {
        assert_eq!(Key::from_name("SPACE"), Some(Key::Space));
        assert_eq!(Key::from_name("Left"), Some(Key::Left));
        assert_eq!(Key::from_name("ctrl-r"), Some(Key::CtrlR));
        assert_eq!(Key::from_name("f1"), None);
    }

    #[test]
    fn test_unbound_code() {
        assert_eq!(Key::from_key_code(112), None);
    }
}
