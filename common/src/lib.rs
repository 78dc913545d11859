//! Common utilities for the atom viewer
//!
//! This crate provides the shared window/GPU bootstrap and the cameras used
//! by the periodic-table and atom views.

pub mod camera;
pub mod graphics;

pub use camera::*;
pub use graphics::*;

/// View constants shared between camera and input handling
pub mod constants {
    /// Closest the atom camera may approach the origin
    pub const ZOOM_MIN: f32 = 10.0;

    /// Farthest the atom camera may retreat
    pub const ZOOM_MAX: f32 = 120.0;

    /// Vertical orbit limit, keeping the camera off the poles
    pub const PITCH_LIMIT_DEG: f32 = 89.0;
}
