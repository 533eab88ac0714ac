use glam::{Mat4, Quat, Vec3};

/// Chase offset in body space: above and behind the car.
pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 5.0, 10.0);
/// Point above the body the camera aims at.
pub const LOOK_AT_OFFSET: Vec3 = Vec3::new(0.0, 2.0, 0.0);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    /// Right-handed view matrix with +Y up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }
}

/// Third-person camera that trails the body. Holds no per-frame state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraRig {
    pub offset: Vec3,
    pub look_at_offset: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        CameraRig {
            offset: CAMERA_OFFSET,
            look_at_offset: LOOK_AT_OFFSET,
        }
    }
}

impl CameraRig {
    /// Pose for a body at `position` facing `heading`; the offset turns with
    /// the body so the camera stays behind it.
    pub fn compute_pose(&self, position: Vec3, heading: f32) -> CameraPose {
        CameraPose {
            position: position + Quat::from_rotation_y(-heading) * self.offset,
            look_at: position + self.look_at_offset,
        }
    }
}
