//! Line parser for typed commands.
//!
//! Accepts either a single key name (`left`, `w`, `space`, `+`, ...) or a
//! spelled-out command:
//!
//! ```text
//! click <x> <y>            clip-space coordinates
//! pixel <px> <py>          canvas pixel coordinates
//! nudge left|right|up|down
//! scale x|y|both grow|shrink
//! rotate cw|ccw
//! recall | level up|down | confirm | by-level | spray | reset
//! ```

use crate::error::{IfsError, Result};
use crate::geometry::Point2D;

use super::{Axis, Command, Direction, Key, Rotation, ScaleDirection};

fn number(command: &str, token: Option<&str>) -> Result<f64> {
    let token =
        token.ok_or_else(|| IfsError::invalid_argument(command, "missing coordinate"))?;
    let value: f64 = token.parse().map_err(|_| {
        IfsError::invalid_argument(command, format!("'{}' is not a number", token))
    })?;
    if !value.is_finite() {
        return Err(IfsError::invalid_argument(command, "coordinates must be finite"));
    }
    Ok(value)
}

fn expect_end<'a>(command: &str, mut rest: impl Iterator<Item = &'a str>) -> Result<()> {
    match rest.next() {
        None => Ok(()),
        Some(extra) => Err(IfsError::invalid_argument(
            command,
            format!("unexpected '{}'", extra),
        )),
    }
}

/// Parse one input line. `canvas` is the canvas size in pixels, used by
/// `pixel`.
pub fn parse_command(line: &str, canvas: (f64, f64)) -> Result<Command> {
    let mut tokens = line.split_whitespace();
    let head = tokens
        .next()
        .ok_or_else(|| IfsError::UnknownCommand {
            input: line.to_string(),
        })?
        .to_ascii_lowercase();

    let command = match head.as_str() {
        "click" => {
            let x = number("click", tokens.next())?;
            let y = number("click", tokens.next())?;
            Command::ClickAt(Point2D::new(x, y))
        }
        "pixel" => {
            let px = number("pixel", tokens.next())?;
            let py = number("pixel", tokens.next())?;
            Command::ClickAt(Point2D::from_canvas(px, py, canvas.0, canvas.1))
        }
        "nudge" => {
            let direction = match tokens.next().map(str::to_ascii_lowercase).as_deref() {
                Some("left") => Direction::Left,
                Some("right") => Direction::Right,
                Some("up") => Direction::Up,
                Some("down") => Direction::Down,
                _ => {
                    return Err(IfsError::invalid_argument(
                        "nudge",
                        "expected left, right, up or down",
                    ))
                }
            };
            Command::Nudge(direction)
        }
        "scale" => {
            let axis = match tokens.next().map(str::to_ascii_lowercase).as_deref() {
                Some("x") => Axis::X,
                Some("y") => Axis::Y,
                Some("both") | Some("xy") => Axis::Both,
                _ => {
                    return Err(IfsError::invalid_argument(
                        "scale",
                        "expected x, y or both",
                    ))
                }
            };
            let direction = match tokens.next().map(str::to_ascii_lowercase).as_deref() {
                Some("grow") => ScaleDirection::Grow,
                Some("shrink") => ScaleDirection::Shrink,
                _ => {
                    return Err(IfsError::invalid_argument(
                        "scale",
                        "expected grow or shrink",
                    ))
                }
            };
            Command::ScaleAxis(axis, direction)
        }
        "rotate" => {
            let rotation = match tokens.next().map(str::to_ascii_lowercase).as_deref() {
                Some("cw") => Rotation::Clockwise,
                Some("ccw") => Rotation::CounterClockwise,
                _ => return Err(IfsError::invalid_argument("rotate", "expected cw or ccw")),
            };
            Command::Rotate(rotation)
        }
        "level" => match tokens.next().map(str::to_ascii_lowercase).as_deref() {
            Some("up") => Command::IncrementLevel,
            Some("down") => Command::DecrementLevel,
            _ => return Err(IfsError::invalid_argument("level", "expected up or down")),
        },
        "recall" => Command::RecallLastTransform,
        "confirm" | "commit" => Command::ConfirmOrCommit,
        "by-level" | "bylevel" => Command::RenderByLevel,
        "spray" => Command::RenderSpray,
        "reset" => Command::FullReset,
        other => match Key::from_name(other) {
            Some(key) => key.command(),
            None => {
                return Err(IfsError::UnknownCommand {
                    input: line.trim().to_string(),
                })
            }
        },
    };

    expect_end(&head, tokens)?;
    Ok(command)
}
