use car_physics::{
    CameraPose, CameraRig, InputState, KinematicState, MotionIntegrator, MotionParams, ObstacleSet,
    ParamsError,
};
use glam::Vec3;

pub const CAR_START: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const OBSTACLE_CENTERS: [Vec3; 2] = [Vec3::new(0.0, 1.0, -10.0), Vec3::new(10.0, 1.0, 0.0)];
pub const OBSTACLE_DIMS: Vec3 = Vec3::splat(2.0);
/// Longest step the car integrates at once; a slower frame is treated as this long.
pub const MAX_FRAME_DELTA: f32 = 1.0 / 15.0;

/// The toy-car scene: one car, two static boxes and a chase camera.
pub struct Scene {
    integrator: MotionIntegrator,
    obstacles: ObstacleSet,
    camera: CameraRig,
    car: KinematicState,
}

impl Scene {
    pub fn new() -> Result<Self, ParamsError> {
        let integrator = MotionIntegrator::new(MotionParams {
            max_delta: Some(MAX_FRAME_DELTA),
            ..Default::default()
        })?;
        let obstacles = ObstacleSet::from_boxes(OBSTACLE_CENTERS, OBSTACLE_DIMS);
        Ok(Self {
            integrator,
            obstacles,
            camera: CameraRig::default(),
            car: KinematicState::new(CAR_START),
        })
    }

    pub fn car(&self) -> &KinematicState {
        &self.car
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// Runs one frame and returns the camera pose for the car's new position.
    pub fn advance(&mut self, input: &InputState, delta: f32) -> CameraPose {
        let snapshot = input.snapshot();
        let integrator = &self.integrator;
        self.car = integrator.integrate(&snapshot, delta, &self.car, &self.obstacles);
        let pose = self.camera.compute_pose(self.car.position, self.car.heading);
        log::trace!(
            "car at {} heading {:.3}, camera at {}",
            self.car.position,
            self.car.heading,
            pose.position
        );
        pose
    }
}
