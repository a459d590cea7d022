use crate::constants::*;
use crate::error::EngineError;
use crate::gesture::{self, GestureFeatures};

/// Generic first-order scalar relaxation toward a target.
#[derive(Clone, Copy, Debug)]
pub struct Smoother {
    pub current: f32,
    pub target: f32,
    rate: f32,
}

impl Smoother {
    pub fn new(initial: f32, rate: f32) -> Self {
        Self {
            current: initial,
            target: initial,
            rate,
        }
    }

    /// One relaxation step: `current += (target - current) * rate`.
    #[inline]
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * self.rate;
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Relaxation rate per tick, in (0, 1].
    pub fn set_rate(&mut self, rate: f32) -> Result<(), EngineError> {
        if !rate.is_finite() || rate <= 0.0 || rate > 1.0 {
            return Err(EngineError::InvalidArgument(format!(
                "smoothing rate {rate} outside (0, 1]"
            )));
        }
        self.rate = rate;
        Ok(())
    }
}

/// The three smoothed control signals the rendering layer reads each
/// frame: spread, scale, and rotation.
///
/// Targets are written from gesture features (or the rest policy) and the
/// `current` side relaxes toward them one [`step`](ControlSignals::step)
/// per rendered frame, so tracking dropouts never snap the visuals.
pub struct ControlSignals {
    pub spread: Smoother,
    pub scale: Smoother,
    pub rotation: Smoother,
    sensitivity: f32,
}

impl Default for ControlSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlSignals {
    pub fn new() -> Self {
        Self {
            spread: Smoother::new(REST_SPREAD, SPREAD_RATE),
            scale: Smoother::new(REST_SCALE, SCALE_RATE),
            rotation: Smoother::new(REST_ROTATION, ROTATION_RATE),
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) -> Result<(), EngineError> {
        if !sensitivity.is_finite() || sensitivity <= 0.0 {
            return Err(EngineError::InvalidArgument(format!(
                "sensitivity {sensitivity} must be positive and finite"
            )));
        }
        self.sensitivity = sensitivity;
        Ok(())
    }

    /// Feed one tracker observation. `None` means no hand was detected
    /// this frame and applies the rest policy immediately, so a tracking
    /// dropout never leaves the targets stuck at stale values.
    pub fn apply(&mut self, features: Option<GestureFeatures>) {
        match features {
            Some(f) => {
                self.spread.target = gesture::spread_target(f.openness, self.sensitivity);
                self.scale.target = gesture::scale_target(f.distance, self.sensitivity);
                self.rotation.target = gesture::rotation_target(f.rotation, self.sensitivity);
            }
            None => self.rest(),
        }
    }

    /// Reset all targets to the no-hand rest state.
    pub fn rest(&mut self) {
        self.spread.target = REST_SPREAD;
        self.scale.target = REST_SCALE;
        self.rotation.target = REST_ROTATION;
    }

    /// Relax all three signals one frame.
    pub fn step(&mut self) {
        self.spread.step();
        self.scale.step();
        self.rotation.step();
    }
}
