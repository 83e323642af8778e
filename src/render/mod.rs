//! Rendering Interface
//!
//! The core never rasterizes anything itself. It hands a [`Frame`] (the
//! active scene's flat vertex/color arrays, its draw list and the live
//! projection) to whatever implements [`Renderer`]. A character-grid
//! renderer is included for terminal previews.

mod ascii;
mod frame;
mod shade;

pub use ascii::AsciiRenderer;
pub use frame::{Frame, Renderer};
pub use shade::position_shade;
