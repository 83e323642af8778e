//! Scene Model
//!
//! Every stage of the workflow owns a scene: an ordered list of shape
//! batches kept in the flat layout a GPU vertex buffer wants (one vertex
//! array, one color array, and per-shape primitive/count/flag lists).

mod shape;
mod stage;
mod store;

pub use shape::{BatchView, PrimitiveKind, ShapeBatch};
pub use stage::{SceneTarget, Stage};
pub use store::{DrawCall, Scene, SceneStore};
