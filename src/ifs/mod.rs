//! Iterated Function System
//!
//! The IFS code collected during the Clone stage and the two generators
//! that turn it into a fractal:
//! - by-level: depth-first substitution of the seed polygon by its clones
//! - chaos game: a random walk over the transforms that settles onto the
//!   attractor

mod by_level;
mod chaos;
mod codes;
mod collector;
mod inherit;

pub use by_level::{generate_by_level, ByLevelGenerator};
pub use chaos::{ChaosGame, BURN_IN_ITERATIONS};
pub use codes::{format_ifs_codes, IfsCode};
pub use collector::{TransformCollector, MAX_TRANSFORMS};
pub use inherit::{derive_child_color, random_color_offset, COLOR_MIX_FACTOR, COLOR_RULES};
