//! Geometric feature extraction from hand-landmark frames.
//!
//! Pure, stateless per-frame functions over one tracked-hand sample of 21
//! normalized 2D points, plus the sensitivity-adjusted response curves
//! that turn raw features into control-signal targets. The tracker that
//! produces frames is an external collaborator; everything here tolerates
//! its noise by clamping and by rejecting malformed frames outright.

use glam::Vec2;

use crate::constants::*;
use crate::error::EngineError;

/// Number of landmarks in a tracked-hand frame (standard hand topology).
pub const LANDMARK_COUNT: usize = 21;

// Canonical landmark indices into a frame.
pub const WRIST: usize = 0;
pub const THUMB_BASE: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_BASE: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_BASE: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_BASE: usize = 13;
pub const RING_TIP: usize = 16;
pub const PINKY_BASE: usize = 17;
pub const PINKY_TIP: usize = 20;

/// (tip, base) landmark pairs for the five fingers.
pub const FINGER_PAIRS: [(usize, usize); 5] = [
    (THUMB_TIP, THUMB_BASE),
    (INDEX_TIP, INDEX_BASE),
    (MIDDLE_TIP, MIDDLE_BASE),
    (RING_TIP, RING_BASE),
    (PINKY_TIP, PINKY_BASE),
];

/// One tracked-hand sample: 21 points in normalized [0,1] x [0,1] image
/// space, y growing downward.
pub type LandmarkFrame = [Vec2; LANDMARK_COUNT];

/// The three scalar features extracted from a frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureFeatures {
    /// 0 = closed fist .. 1 = fully open hand.
    pub openness: f32,
    /// 0 = far from camera .. 1 = near, from apparent palm size.
    pub distance: f32,
    /// Radians relative to image-space "up", naturally in (-pi, pi].
    pub rotation: f32,
}

/// Build a frame from a tracker's point list, rejecting wrong-sized or
/// out-of-range input.
pub fn frame_from_slice(points: &[Vec2]) -> Result<LandmarkFrame, EngineError> {
    if points.len() != LANDMARK_COUNT {
        return Err(EngineError::InvalidInput(format!(
            "expected {LANDMARK_COUNT} landmarks, got {}",
            points.len()
        )));
    }
    let mut frame = [Vec2::ZERO; LANDMARK_COUNT];
    frame.copy_from_slice(points);
    validate(&frame)?;
    Ok(frame)
}

/// Check every landmark is finite and inside normalized image space.
pub fn validate(frame: &LandmarkFrame) -> Result<(), EngineError> {
    for (i, p) in frame.iter().enumerate() {
        let in_range =
            p.x.is_finite() && p.y.is_finite() && (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y);
        if !in_range {
            return Err(EngineError::InvalidInput(format!(
                "landmark {i} outside normalized image space: ({}, {})",
                p.x, p.y
            )));
        }
    }
    Ok(())
}

/// Mean per-finger extension ratio in [0, 1].
///
/// A finger reads fully extended when its tip sits twice as far from the
/// wrist as its base knuckle; the ratio saturates at 1 beyond that.
pub fn openness(frame: &LandmarkFrame) -> f32 {
    let wrist = frame[WRIST];
    let mut sum = 0.0;
    for (tip, base) in FINGER_PAIRS {
        let tip_dist = frame[tip].distance(wrist);
        let base_dist = frame[base].distance(wrist).max(1e-6);
        sum += (tip_dist / (2.0 * base_dist)).min(1.0);
    }
    sum / FINGER_PAIRS.len() as f32
}

/// Apparent hand-to-camera proximity in [0, 1], from palm size.
///
/// Palm size is the mean of palm width (index base to pinky base) and
/// palm height (wrist to middle base), passed through a fixed linear
/// calibration of the expected size range.
pub fn palm_distance(frame: &LandmarkFrame) -> f32 {
    let width = frame[INDEX_BASE].distance(frame[PINKY_BASE]);
    let height = frame[WRIST].distance(frame[MIDDLE_BASE]);
    let palm_size = (width + height) * 0.5;
    ((palm_size - PALM_SIZE_MIN) / PALM_SIZE_RANGE).clamp(0.0, 1.0)
}

/// Hand roll in radians relative to image-space "up" (wrist below the
/// middle-finger base). Positive when the hand leans toward +x.
pub fn rotation(frame: &LandmarkFrame) -> f32 {
    let v = frame[MIDDLE_BASE] - frame[WRIST];
    // image-space y grows downward, so "up" is -y
    v.x.atan2(-v.y)
}

/// Extract all three features from a frame, validating it first. The
/// caller treats a failure as "no hand" rather than propagating it into
/// the tick loop.
pub fn extract(frame: &LandmarkFrame) -> Result<GestureFeatures, EngineError> {
    validate(frame)?;
    Ok(GestureFeatures {
        openness: openness(frame),
        distance: palm_distance(frame),
        rotation: rotation(frame),
    })
}

// ---------------- Sensitivity response curves ----------------
// Power-law response keeps small gestures responsive while compressing
// near saturation, and makes sensitivity a single intuitive multiplier.

/// Spread target in [0.2, 4.0] from an openness feature.
#[inline]
pub fn spread_target(openness: f32, sensitivity: f32) -> f32 {
    SPREAD_TARGET_MIN + openness.clamp(0.0, 1.0).powf(1.0 / sensitivity) * SPREAD_TARGET_SPAN
}

/// Scale target in [0.3, 2.3] from a distance feature. Distance uses a
/// gentler exponent than spread.
#[inline]
pub fn scale_target(distance: f32, sensitivity: f32) -> f32 {
    SCALE_TARGET_MIN + distance.clamp(0.0, 1.0).powf(1.0 / (0.5 * sensitivity)) * SCALE_TARGET_SPAN
}

/// Rotation target in radians; unbounded, scaled linearly by sensitivity.
#[inline]
pub fn rotation_target(angle: f32, sensitivity: f32) -> f32 {
    angle * sensitivity * ROTATION_GAIN
}
