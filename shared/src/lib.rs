//! Geometry and ASCII rendering for the rotating heart.
//!
//! Everything in this crate is pure: no I/O, no clocks, no shared state.

pub mod ansi;
pub mod config;
pub mod heart;
pub mod point;
pub mod render;

pub use config::RenderConfig;
pub use heart::PointSet;
pub use point::Point3D;
pub use render::render_frame;
