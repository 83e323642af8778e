//! Input commands delivered to a session.

use serde::{Deserialize, Serialize};

use crate::geometry::{AffineTransform, Point2D};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleDirection {
    Grow,
    Shrink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// A discrete user action.
///
/// Commands are validated against the active stage by the session; an
/// inappropriate command is ignored rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Add a seed vertex at a clip-space position (Draw stage)
    ClickAt(Point2D),
    /// Move the live projection (Clone stage)
    Nudge(Direction),
    /// Stretch or squash the live projection (Clone stage)
    ScaleAxis(Axis, ScaleDirection),
    /// Turn the live projection (Clone stage)
    Rotate(Rotation),
    /// Set the live projection to the last committed clone (Clone stage)
    RecallLastTransform,
    DecrementLevel,
    IncrementLevel,
    /// Enter the Clone stage, or commit a clone while in it
    ConfirmOrCommit,
    RenderByLevel,
    RenderSpray,
    /// Start over with an empty seed polygon
    FullReset,
}

impl Command {
    /// The elementary transform an editing command applies, given the edit
    /// step size. `None` for non-editing commands.
    ///
    /// A step `s` nudges by `s`, scales by `1 ± 2s` and rotates by `200s`
    /// degrees.
    pub fn edit_transform(&self, step: f64) -> Option<AffineTransform> {
        match *self {
            Command::Nudge(direction) => {
                let (dx, dy) = match direction {
                    Direction::Left => (-step, 0.0),
                    Direction::Right => (step, 0.0),
                    Direction::Up => (0.0, step),
                    Direction::Down => (0.0, -step),
                };
                Some(AffineTransform::translate(dx, dy))
            }
            Command::ScaleAxis(axis, direction) => {
                let factor = match direction {
                    ScaleDirection::Grow => 1.0 + 2.0 * step,
                    ScaleDirection::Shrink => 1.0 - 2.0 * step,
                };
                let (sx, sy) = match axis {
                    Axis::X => (factor, 1.0),
                    Axis::Y => (1.0, factor),
                    Axis::Both => (factor, factor),
                };
                Some(AffineTransform::scale(sx, sy))
            }
            Command::Rotate(rotation) => {
                let degrees = 200.0 * step;
                Some(AffineTransform::rotate(match rotation {
                    Rotation::CounterClockwise => degrees,
                    Rotation::Clockwise => -degrees,
                }))
            }
            _ => None,
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::ClickAt(_) => "click",
            Command::Nudge(_) => "nudge",
            Command::ScaleAxis(..) => "scale",
            Command::Rotate(_) => "rotate",
            Command::RecallLastTransform => "recall",
            Command::DecrementLevel => "level-down",
            Command::IncrementLevel => "level-up",
            Command::ConfirmOrCommit => "confirm",
            Command::RenderByLevel => "by-level",
            Command::RenderSpray => "spray",
            Command::FullReset => "reset",
        }
    }
}
