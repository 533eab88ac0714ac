use crate::aabb::AABB;
use glam::Vec3;

/// Position, yaw and velocity of the driven body.
///
/// A heading of zero faces -Z; positive headings turn towards +X.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct KinematicState {
    /// center of the body's AABB.
    pub position: Vec3,
    /// yaw in radians.
    pub heading: f32,
    pub velocity: Vec3,
}

impl KinematicState {
    pub fn new(position: Vec3) -> Self {
        KinematicState {
            position,
            heading: 0.0,
            velocity: Vec3::ZERO,
        }
    }

    /// Unit vector the body drives along when moving forward.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        let (sin, cos) = self.heading.sin_cos();
        Vec3::new(sin, 0.0, -cos)
    }

    /// World-space AABB of a body with `dimensions` at the current position.
    pub fn aabb(&self, dimensions: Vec3) -> AABB {
        AABB::from_center_dims(self.position, dimensions)
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.heading.is_finite() && self.velocity.is_finite()
    }
}

impl Default for KinematicState {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}
