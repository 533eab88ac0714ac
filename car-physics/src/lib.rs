mod aabb;
mod body;
mod camera;
mod collision;
mod error;
mod input;
mod simulation;

pub use aabb::AABB;
pub use body::KinematicState;
pub use camera::{CAMERA_OFFSET, CameraPose, CameraRig, LOOK_AT_OFFSET};
pub use collision::{CollisionOracle, ObstacleSet};
pub use error::{ParamsError, StepError};
pub use input::{Command, InputState};
pub use simulation::{
    ACCELERATION, BODY_DIMENSIONS, FRICTION, MotionIntegrator, MotionParams, TURN_RATE,
};
