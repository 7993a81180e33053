//! A first-person camera, as driven by mouse look in an interactive renderer.

use std::f32::consts::FRAC_PI_2;

use eng_linalg::{vec3, Mat4f, Quatf, Vec3f};

/// A camera described by its position, its pitch (rotation around X) and its yaw (rotation
/// around Y).
///
/// Pitch is clamped to ±π/2 so the camera can never flip over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3f,
    pitch: f32,
    yaw: f32,
}

impl Default for Camera {
    /// A camera 5 units in front of the origin, looking at it.
    fn default() -> Self {
        Self::new(vec3(0.0, 0.0, 5.0), 0.0, 0.0)
    }
}

impl Camera {
    pub fn new(position: Vec3f, pitch: f32, yaw: f32) -> Self {
        Self {
            position,
            pitch: pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
            yaw,
        }
    }

    pub fn position(&self) -> Vec3f {
        self.position
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Turns the camera by the given offsets (in radians).
    pub fn look(&mut self, yaw_offset: f32, pitch_offset: f32) {
        self.yaw += yaw_offset;
        self.pitch = (self.pitch + pitch_offset).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Moves the camera by `offset`, given in world space.
    pub fn translate(&mut self, offset: Vec3f) {
        self.position += offset;
    }

    /// Returns the orientation of the camera in world space.
    pub fn orientation(&self) -> Quatf {
        Quatf::from_rotation_y(-self.yaw) * Quatf::from_rotation_x(-self.pitch)
    }

    /// Computes the view matrix, which moves the world so that the camera sits at the origin
    /// looking down -Z.
    pub fn view(&self) -> Mat4f {
        let p = self.position;
        Mat4f::view(p.x, p.y, p.z, self.orientation())
    }
}
