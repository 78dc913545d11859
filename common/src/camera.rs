//! Cameras for the table and atom views

use glam::{Mat4, Vec3};

use crate::constants::{PITCH_LIMIT_DEG, ZOOM_MAX, ZOOM_MIN};

/// Perspective camera orbiting the origin.
///
/// Angles are kept in degrees to match the keyboard rotation steps; pitch is
/// clamped short of the poles and distance to the view's zoom range.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Distance from the origin, clamped to [ZOOM_MIN, ZOOM_MAX]
    pub distance: f32,
    /// Horizontal angle, degrees
    pub yaw: f32,
    /// Vertical angle, degrees, clamped to ±PITCH_LIMIT_DEG
    pub pitch: f32,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl OrbitCamera {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            distance: 35.0,
            yaw: 30.0,
            pitch: 20.0,
            fov: 60.0f32.to_radians(),
            aspect_ratio,
            near: 1.0,
            far: 200.0,
        }
    }

    /// Eye position from the orbital parameters.
    pub fn eye(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            self.distance * pitch.cos() * yaw.sin(),
            self.distance * pitch.sin(),
            self.distance * pitch.cos() * yaw.cos(),
        )
    }

    /// Rotate around the origin by whole-degree steps.
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Move toward (positive delta) or away from the origin.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

/// Fixed orthographic projection for the table view's 0..100 space.
///
/// The table never pans or zooms; like the original layout it stretches with
/// the window's aspect ratio.
pub fn table_projection() -> Mat4 {
    Mat4::orthographic_rh(0.0, 100.0, 0.0, 100.0, -1.0, 1.0)
}

/// Camera uniform data for shaders.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn from_orbit(camera: &OrbitCamera) -> Self {
        let eye = camera.eye();
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            view: camera.view_matrix().to_cols_array_2d(),
            position: [eye.x, eye.y, eye.z, 1.0],
        }
    }

    pub fn from_table() -> Self {
        Self {
            view_proj: table_projection().to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_clamps_to_camera_range() {
        let mut camera = OrbitCamera::new(1.6);
        for _ in 0..200 {
            camera.zoom(1.0);
        }
        assert_eq!(camera.distance, ZOOM_MIN);
        for _ in 0..200 {
            camera.zoom(-1.0);
        }
        assert_eq!(camera.distance, ZOOM_MAX);
    }

    #[test]
    fn pitch_clamps_short_of_the_poles() {
        let mut camera = OrbitCamera::new(1.6);
        for _ in 0..100 {
            camera.orbit(0.0, 3.0);
        }
        assert_eq!(camera.pitch, PITCH_LIMIT_DEG);
        for _ in 0..100 {
            camera.orbit(0.0, -3.0);
        }
        assert_eq!(camera.pitch, -PITCH_LIMIT_DEG);
    }

    #[test]
    fn eye_sits_at_the_orbit_distance() {
        let mut camera = OrbitCamera::new(1.6);
        camera.orbit(123.0, -17.0);
        assert!((camera.eye().length() - camera.distance).abs() < 1e-3);
    }
}
