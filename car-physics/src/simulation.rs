use crate::aabb::AABB;
use crate::body::KinematicState;
use crate::collision::CollisionOracle;
use crate::error::{ParamsError, StepError};
use crate::input::InputState;
use glam::Vec3;
use std::f32::consts::TAU;

/// Forward/backward acceleration in units/s².
pub const ACCELERATION: f32 = 30.0;
/// Yaw rate while a turn command is held, in rad/s.
pub const TURN_RATE: f32 = 2.0;
/// Per-second velocity damping coefficient.
pub const FRICTION: f32 = 3.0;
/// Width, height and length of the body's collision box.
pub const BODY_DIMENSIONS: Vec3 = Vec3::new(2.0, 1.0, 4.0);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MotionParams {
    pub acceleration: f32,
    pub turn_rate: f32,
    pub friction: f32,
    pub body_dimensions: Vec3,
    /// Upper bound on a single step's delta. `None` integrates whatever
    /// delta the caller passes, which can tunnel through thin obstacles
    /// after a long stall.
    pub max_delta: Option<f32>,
}

impl Default for MotionParams {
    fn default() -> Self {
        MotionParams {
            acceleration: ACCELERATION,
            turn_rate: TURN_RATE,
            friction: FRICTION,
            body_dimensions: BODY_DIMENSIONS,
            max_delta: None,
        }
    }
}

impl MotionParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [
            ("acceleration", self.acceleration),
            ("turn_rate", self.turn_rate),
            ("friction", self.friction),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParamsError::InvalidConstant { name, value });
            }
        }
        let dims = self.body_dimensions;
        if !dims.is_finite() || !dims.cmpgt(Vec3::ZERO).all() {
            return Err(ParamsError::InvalidDimensions(dims));
        }
        if let Some(max_delta) = self.max_delta {
            if !max_delta.is_finite() || max_delta <= 0.0 {
                return Err(ParamsError::InvalidMaxDelta(max_delta));
            }
            if self.friction * max_delta >= 1.0 {
                return Err(ParamsError::UnstableFriction {
                    friction: self.friction,
                    max_delta,
                });
            }
        }
        Ok(())
    }
}

/// Advances a [`KinematicState`] by one frame of held input.
#[derive(Debug, Clone)]
pub struct MotionIntegrator {
    params: MotionParams,
    /// Body box centered on the origin.
    body_box: AABB,
}

impl MotionIntegrator {
    pub fn new(params: MotionParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            body_box: AABB::from_center_dims(Vec3::ZERO, params.body_dimensions),
            params,
        })
    }

    pub fn params(&self) -> &MotionParams {
        &self.params
    }

    /// World-space box of the body if it were centered on `position`.
    #[inline]
    pub fn body_aabb_at(&self, position: Vec3) -> AABB {
        self.body_box.translate(position)
    }

    /// Like [`MotionIntegrator::try_integrate`], but a rejected step logs a
    /// warning and leaves the state where it was.
    pub fn integrate<O: CollisionOracle + ?Sized>(
        &self,
        input: &InputState,
        delta: f32,
        previous: &KinematicState,
        obstacles: &O,
    ) -> KinematicState {
        self.try_integrate(input, delta, previous, obstacles)
            .unwrap_or_else(|err| {
                log::warn!("Rejected motion step: {err}");
                *previous
            })
    }

    /// Integrates one frame: accelerate along the current heading, turn,
    /// apply friction, then move unless the body would overlap an obstacle.
    ///
    /// A blocked move first tries the X component of the displacement on its
    /// own, then the Z component, and otherwise keeps the old position. The
    /// new heading and velocity are kept in every case.
    ///
    /// A step whose result overflows to a non-finite value is refused rather
    /// than returned, so the caller's state stays usable.
    pub fn try_integrate<O: CollisionOracle + ?Sized>(
        &self,
        input: &InputState,
        delta: f32,
        previous: &KinematicState,
        obstacles: &O,
    ) -> Result<KinematicState, StepError> {
        if !delta.is_finite() {
            return Err(StepError::NonFiniteDelta(delta));
        }
        if delta < 0.0 {
            return Err(StepError::NegativeDelta(delta));
        }
        if !previous.is_finite() {
            return Err(StepError::NonFiniteState(*previous));
        }
        if delta == 0.0 {
            return Ok(*previous);
        }

        let delta = match self.params.max_delta {
            Some(max_delta) if delta > max_delta => {
                log::debug!("Clamping delta {delta}s to {max_delta}s");
                max_delta
            }
            _ => delta,
        };

        let thrust = previous.forward() * self.params.acceleration * delta;
        let mut move_vector = Vec3::ZERO;
        if input.forward {
            move_vector += thrust;
        }
        if input.backward {
            move_vector -= thrust;
        }

        let mut heading = previous.heading;
        if input.turn_left {
            heading += self.params.turn_rate * delta;
        }
        if input.turn_right {
            heading -= self.params.turn_rate * delta;
        }

        let velocity = (previous.velocity + move_vector) * (1.0 - self.params.friction * delta);
        let candidate = previous.position + velocity * delta;
        let position =
            self.resolve_position(previous.position, candidate, velocity, delta, obstacles);

        let next = KinematicState {
            position,
            heading: wrap_heading(heading),
            velocity,
        };
        if !next.is_finite() {
            return Err(StepError::NonFiniteResult(next));
        }
        Ok(next)
    }

    fn resolve_position<O: CollisionOracle + ?Sized>(
        &self,
        origin: Vec3,
        candidate: Vec3,
        velocity: Vec3,
        delta: f32,
        obstacles: &O,
    ) -> Vec3 {
        if !obstacles.intersects(&self.body_aabb_at(candidate)) {
            return candidate;
        }

        // X is always tried before Z, whatever side the obstacle is on.
        let slide_x = origin + velocity.with_z(0.0) * delta;
        if !obstacles.intersects(&self.body_aabb_at(slide_x)) {
            log::debug!("Blocked at {candidate}, sliding along x to {slide_x}");
            return slide_x;
        }
        let slide_z = origin + velocity.with_x(0.0) * delta;
        if !obstacles.intersects(&self.body_aabb_at(slide_z)) {
            log::debug!("Blocked at {candidate}, sliding along z to {slide_z}");
            return slide_z;
        }

        log::debug!("Blocked at {candidate} on both axes, holding {origin}");
        origin
    }
}

impl Default for MotionIntegrator {
    fn default() -> Self {
        let params = MotionParams::default();
        Self {
            body_box: AABB::from_center_dims(Vec3::ZERO, params.body_dimensions),
            params,
        }
    }
}

/// Folds large headings back into `[0, TAU)` so precision holds over long runs.
#[inline]
fn wrap_heading(heading: f32) -> f32 {
    if heading.abs() > TAU {
        heading.rem_euclid(TAU)
    } else {
        heading
    }
}
