//! IFS Studio - Interactive Iterated Function System Fractals
//!
//! A user clicks out a seed polygon, places up to ten transformed clones of
//! it (the IFS code), then renders the fractal either level by level or by
//! spraying points with the chaos game.
//!
//! # Architecture
//!
//! The workflow runs through four stages:
//! - Draw: build the seed polygon (up to 10 vertices)
//! - Clone: position a live projection and commit clones (up to 10)
//! - By-Level: depth-first recursive substitution with inherited colors
//! - Spray: chaos-game point cloud
//!
//! A [`Session`](session::Session) owns all mutable state and is driven by
//! [`Command`](input::Command)s; renderers consume the resulting
//! [`Frame`](render::Frame).

pub mod cli;
pub mod error;
pub mod geometry;
pub mod ifs;
pub mod input;
pub mod render;
pub mod scene;
pub mod session;

pub use error::{IfsError, Result};
