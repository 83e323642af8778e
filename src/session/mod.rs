//! Session State
//!
//! The single context object that owns everything the workbench mutates:
//! active stage, seed polygon, committed clones, live projection, level and
//! the per-stage scenes. All changes go through [`Session::handle`].

mod config;
mod seed;
mod state;

pub use config::{
    SessionConfig, DEFAULT_CANVAS_SIZE, DEFAULT_LEVEL, DEFAULT_SPRAY_POINTS, DEFAULT_STEP,
};
pub use seed::{SeedPolygon, MAX_SEED_VERTICES};
pub use state::{initial_live_projection, Outcome, Session};
