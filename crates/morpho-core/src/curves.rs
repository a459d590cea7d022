//! Parametric curve families and position-buffer generation.
//!
//! Each family maps a base parameter t = (i/count)*2pi to a 3D point.
//! Several families additionally sweep an independent random azimuth t2,
//! and every emitted point carries small per-axis multiplicative jitter so
//! the cloud reads as volumetric rather than a line of beads. The Lorenz
//! family is not closed-form: particles sample a single Euler-integrated
//! trajectory from a shared initial condition.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::constants::*;
use crate::error::EngineError;

/// Flat xyz position sequence: particle i lives at offsets 3i..3i+3.
pub type PositionBuffer = Vec<f32>;

/// The ten curve families. Declaration order is the cyclic "next curve"
/// order used by the transition engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    Lissajous,
    Heart,
    Butterfly,
    Archimedean,
    Catenary,
    Lemniscate,
    Rose,
    TorusKnot,
    Lorenz,
    Galaxy,
}

impl CurveId {
    /// All families in selection order.
    pub const ALL: [CurveId; 10] = [
        CurveId::Lissajous,
        CurveId::Heart,
        CurveId::Butterfly,
        CurveId::Archimedean,
        CurveId::Catenary,
        CurveId::Lemniscate,
        CurveId::Rose,
        CurveId::TorusKnot,
        CurveId::Lorenz,
        CurveId::Galaxy,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a family by selection index.
    pub fn from_index(index: usize) -> Result<Self, EngineError> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            EngineError::InvalidArgument(format!(
                "curve index {index} out of range 0..{}",
                Self::ALL.len()
            ))
        })
    }

    /// Cyclic successor, wrapping from the last family back to the first.
    #[inline]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Display identity.
    pub fn label(self) -> &'static str {
        match self {
            CurveId::Lissajous => "Lissajous",
            CurveId::Heart => "Heart",
            CurveId::Butterfly => "Butterfly",
            CurveId::Archimedean => "Archimedean Spiral",
            CurveId::Catenary => "Catenary",
            CurveId::Lemniscate => "Lemniscate",
            CurveId::Rose => "Rose",
            CurveId::TorusKnot => "Torus Knot",
            CurveId::Lorenz => "Lorenz Attractor",
            CurveId::Galaxy => "Galaxy",
        }
    }
}

/// Generate a position buffer of `count` particles for one curve family.
///
/// Total for any count; `count = 0` yields an empty buffer. Output is
/// deterministic up to the declared noise terms, and every value is
/// finite. All axes are scaled by [`CURVE_SCALE`].
pub fn generate(id: CurveId, count: usize, rng: &mut impl Rng) -> PositionBuffer {
    let mut out = vec![0.0f32; count * 3];
    match id {
        CurveId::Lorenz => {
            // One shared trajectory; particle i is the state after
            // floor(MAX_STEPS * i / count) Euler steps.
            let trajectory = lorenz_trajectory();
            for i in 0..count {
                let step = LORENZ_MAX_STEPS * i / count;
                let s = trajectory[step];
                let p = Vec3::new(s.x, s.y, s.z + LORENZ_Z_OFFSET) * LORENZ_SCALE;
                emit(&mut out, i, p, rng);
            }
        }
        CurveId::Galaxy => {
            for i in 0..count {
                let p = galaxy_point(rng);
                emit(&mut out, i, p, rng);
            }
        }
        _ => {
            for i in 0..count {
                let t = i as f32 / count as f32 * TAU;
                let t2 = rng.gen::<f32>() * TAU;
                emit(&mut out, i, closed_form(id, t, t2), rng);
            }
        }
    }
    out
}

/// Scale a point into world units with per-axis jitter and store it.
#[inline]
fn emit(out: &mut [f32], i: usize, p: Vec3, rng: &mut impl Rng) {
    let base = i * 3;
    out[base] = p.x * jitter(rng) * CURVE_SCALE;
    out[base + 1] = p.y * jitter(rng) * CURVE_SCALE;
    out[base + 2] = p.z * jitter(rng) * CURVE_SCALE;
}

#[inline]
fn jitter(rng: &mut impl Rng) -> f32 {
    1.0 + (rng.gen::<f32>() * 2.0 - 1.0) * AXIS_NOISE
}

fn closed_form(id: CurveId, t: f32, t2: f32) -> Vec3 {
    match id {
        CurveId::Lissajous => lissajous(t),
        CurveId::Heart => heart(t, t2),
        CurveId::Butterfly => butterfly(t),
        CurveId::Archimedean => archimedean(t),
        CurveId::Catenary => catenary(t, t2),
        CurveId::Lemniscate => lemniscate(t, t2),
        CurveId::Rose => rose(t),
        CurveId::TorusKnot => torus_knot(t),
        // Sampled rather than parametric; handled by dedicated paths in `generate`.
        CurveId::Lorenz | CurveId::Galaxy => Vec3::ZERO,
    }
}

/// Frequency ratios 3:4:5 with a quarter-turn phase lead on x; z runs at
/// half amplitude.
fn lissajous(t: f32) -> Vec3 {
    Vec3::new(
        (3.0 * t + FRAC_PI_2).sin(),
        (4.0 * t).sin(),
        (5.0 * t).sin() * 0.5,
    )
}

/// Classic heart polynomial in the xy plane, thickened along z by the
/// random azimuth so the shape is volumetric rather than flat.
fn heart(t: f32, t2: f32) -> Vec3 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Vec3::new(x * 0.08, y * 0.08, t2.sin() * t.sin() * 0.3)
}

/// Transcendental butterfly curve, traced at six times the base parameter
/// with a z wobble at half that angular rate.
fn butterfly(t: f32) -> Vec3 {
    let theta = 6.0 * t;
    let r = theta.cos().exp() - 2.0 * (4.0 * theta).cos() - (theta / 12.0).sin().powi(5);
    Vec3::new(
        theta.sin() * r * 0.3,
        theta.cos() * r * 0.3,
        (theta * 0.5).sin() * 0.3,
    )
}

/// Corkscrew spiral: radius grows linearly with angle, z rises with it.
fn archimedean(t: f32) -> Vec3 {
    let theta = 4.0 * t;
    let r = 0.1 + 0.05 * theta;
    Vec3::new(r * theta.cos(), r * theta.sin(), theta * 0.1)
}

/// Hyperbolic-cosine profile swept into a surface of revolution; t2 is
/// the azimuth, so the profile parameter and sweep angle are independent.
fn catenary(t: f32, t2: f32) -> Vec3 {
    let u = t - PI; // center the profile on the waist
    let r = (0.5 * u).cosh() * 0.3;
    Vec3::new(r * t2.cos(), u * 0.3, r * t2.sin())
}

/// Bernoulli's figure-eight with a z perturbation sharing its denominator.
fn lemniscate(t: f32, t2: f32) -> Vec3 {
    let denom = 1.0 + t.sin() * t.sin();
    Vec3::new(
        t.cos() / denom,
        t.sin() * t.cos() / denom,
        t2.sin() / denom * 0.3,
    )
}

/// Five-petaled rose with a gentle z ripple at half the petal rate.
fn rose(t: f32) -> Vec3 {
    let r = (5.0 * t).cos();
    Vec3::new(r * t.cos(), r * t.sin(), (2.5 * t).sin() * 0.3)
}

/// (p, q) = (3, 7) torus knot.
fn torus_knot(t: f32) -> Vec3 {
    let r = 0.5 + 0.3 * (7.0 * t).cos();
    Vec3::new(r * (3.0 * t).cos(), r * (3.0 * t).sin(), (7.0 * t).sin() * 0.3)
}

/// Integrate the Lorenz system once from the shared initial condition,
/// recording every intermediate state (MAX_STEPS + 1 entries).
fn lorenz_trajectory() -> Vec<Vec3> {
    let mut states = Vec::with_capacity(LORENZ_MAX_STEPS + 1);
    let mut p = Vec3::new(0.1, 0.0, 0.0);
    states.push(p);
    for _ in 0..LORENZ_MAX_STEPS {
        let d = Vec3::new(
            LORENZ_SIGMA * (p.y - p.x),
            p.x * (LORENZ_RHO - p.z) - p.y,
            p.x * p.y - LORENZ_BETA * p.z,
        );
        p += d * LORENZ_STEP;
        states.push(p);
    }
    states
}

/// One spiral-galaxy particle: uniform arm choice, sqrt-biased radial
/// distance (denser toward the core), arm wind-up plus angular jitter,
/// and a thin vertical scatter scaled by (1 - distance).
fn galaxy_point(rng: &mut impl Rng) -> Vec3 {
    let arm = rng.gen_range(0..GALAXY_ARMS);
    let dist = rng.gen::<f32>().sqrt();
    let angle = arm as f32 * (TAU / GALAXY_ARMS as f32)
        + dist * GALAXY_TWIST
        + (rng.gen::<f32>() * 2.0 - 1.0) * GALAXY_ANGLE_JITTER;
    let z = (rng.gen::<f32>() * 2.0 - 1.0) * GALAXY_THICKNESS * (1.0 - dist);
    Vec3::new(angle.cos() * dist, angle.sin() * dist, z)
}
