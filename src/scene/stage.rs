//! Workflow stages.

use serde::{Deserialize, Serialize};

/// The four stages of the fractal workflow; exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Clicking out the seed polygon
    Draw,
    /// Placing transformed clones of the seed
    Clone,
    /// Depth-first by-level fractal
    ByLevel,
    /// Chaos-game point cloud
    Spray,
}

impl Stage {
    /// Whether the fractal renderers may be invoked from this stage
    pub fn allows_rendering(&self) -> bool {
        !matches!(self, Stage::Draw)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Draw => write!(f, "Draw"),
            Stage::Clone => write!(f, "Clone"),
            Stage::ByLevel => write!(f, "By-Level"),
            Stage::Spray => write!(f, "Spray Paint"),
        }
    }
}

/// Destination of an appended shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTarget {
    /// One stage's scene
    Stage(Stage),
    /// Every scene that currently exists
    All,
}

impl From<Stage> for SceneTarget {
    fn from(stage: Stage) -> Self {
        SceneTarget::Stage(stage)
    }
}
