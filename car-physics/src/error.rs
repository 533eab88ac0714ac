use thiserror::Error;

/// Rejected tuning constants for [`crate::MotionIntegrator`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidConstant { name: &'static str, value: f32 },
    #[error("body dimensions must be finite and positive, got {0}")]
    InvalidDimensions(glam::Vec3),
    #[error("max delta must be finite and positive, got {0}")]
    InvalidMaxDelta(f32),
    #[error("friction {friction} over a {max_delta}s step would reverse velocity")]
    UnstableFriction { friction: f32, max_delta: f32 },
}

/// Why a single integration step was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError {
    #[error("delta must be finite, got {0}")]
    NonFiniteDelta(f32),
    #[error("delta must not be negative, got {0}")]
    NegativeDelta(f32),
    #[error("previous state is not finite: {0:?}")]
    NonFiniteState(crate::KinematicState),
    #[error("step overflowed to a non-finite state: {0:?}")]
    NonFiniteResult(crate::KinematicState),
}
