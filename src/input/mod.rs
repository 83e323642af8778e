//! Input Commands
//!
//! The closed set of commands the core understands, the keyboard layout
//! that produces them, and a line parser for typed input.

mod command;
mod keymap;
mod parse;

pub use command::{Axis, Command, Direction, Rotation, ScaleDirection};
pub use keymap::Key;
pub use parse::parse_command;
