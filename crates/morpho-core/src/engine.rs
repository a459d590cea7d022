use rand::prelude::*;
use std::time::Duration;

use crate::constants::*;
use crate::curves::{self, CurveId, PositionBuffer};
use crate::error::EngineError;

/// Per-particle scalars fixed at buffer-allocation time.
///
/// Stored as two parallel arrays indexed by particle id rather than
/// per-particle structs, so the hot relaxation loop iterates flat memory.
/// `seeds` is a free random value the rendering layer can use for
/// per-particle displacement; `delays` staggers convergence rates. Both
/// persist across curve switches and are only regenerated when the
/// particle count changes.
pub struct ParticleAux {
    pub seeds: Vec<f32>,
    pub delays: Vec<f32>,
}

impl ParticleAux {
    fn new(count: usize, rng: &mut StdRng) -> Self {
        let seeds = (0..count).map(|_| rng.gen::<f32>()).collect();
        let delays = (0..count).map(|_| rng.gen::<f32>()).collect();
        Self { seeds, delays }
    }
}

/// Morphing engine: owns the ten precomputed curve buffers and relaxes a
/// live position buffer toward the selected target every frame.
///
/// There is no global transition phase. Convergence is a first-order
/// exponential filter per axis with a per-particle rate, so settling is a
/// staggered wave and "settled" is a threshold judgment
/// ([`MorphEngine::is_transitioning`]), never exact equality.
///
/// Typical usage:
/// - Construct with `MorphEngine::new(count, seed)`
/// - Call `tick(dt)` once per rendered frame
/// - Use `select_curve` / `select_next_curve` / `set_auto_switch` to
///   steer which buffer the cloud converges toward
pub struct MorphEngine {
    buffers: Vec<PositionBuffer>,
    current: PositionBuffer,
    aux: ParticleAux,
    count: usize,
    current_curve: CurveId,
    target_curve: CurveId,
    since_switch: Duration,
    auto_switch: bool,
    switch_interval: Duration,
    rng: StdRng,
}

impl MorphEngine {
    /// Build the full precomputed buffer set and start settled on the
    /// first curve family.
    pub fn new(count: usize, seed: u64) -> Result<Self, EngineError> {
        Self::validate_count(count)?;
        let mut rng = StdRng::seed_from_u64(seed);
        // Separate stream for aux data so regeneration of curve buffers
        // never disturbs per-particle delays mid-flight.
        let mut aux_rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
        let buffers = Self::build_buffers(count, &mut rng);
        let aux = ParticleAux::new(count, &mut aux_rng);
        let current = buffers[CurveId::ALL[0].index()].clone();
        Ok(Self {
            buffers,
            current,
            aux,
            count,
            current_curve: CurveId::ALL[0],
            target_curve: CurveId::ALL[0],
            since_switch: Duration::ZERO,
            auto_switch: true,
            switch_interval: Duration::from_millis(DEFAULT_SWITCH_INTERVAL_MS),
            rng,
        })
    }

    fn build_buffers(count: usize, rng: &mut StdRng) -> Vec<PositionBuffer> {
        log::debug!(
            "generating {} curve buffers, {} particles each",
            CurveId::ALL.len(),
            count
        );
        CurveId::ALL
            .iter()
            .map(|&id| curves::generate(id, count, rng))
            .collect()
    }

    fn validate_count(count: usize) -> Result<(), EngineError> {
        if count > MAX_PARTICLE_COUNT {
            return Err(EngineError::InvalidArgument(format!(
                "particle count {count} exceeds cap {MAX_PARTICLE_COUNT}"
            )));
        }
        Ok(())
    }

    /// Retarget the cloud. Live positions are untouched; they keep
    /// converging toward the new target on subsequent ticks. Resets the
    /// auto-switch clock and returns the selection's display identity.
    pub fn select_curve(&mut self, id: CurveId) -> CurveId {
        self.current_curve = self.target_curve;
        self.target_curve = id;
        self.since_switch = Duration::ZERO;
        log::debug!("curve -> {}", id.label());
        id
    }

    /// Index-based selection for UI wiring. An out-of-range index is
    /// rejected with no state change.
    pub fn select_curve_index(&mut self, index: usize) -> Result<CurveId, EngineError> {
        let id = CurveId::from_index(index)?;
        Ok(self.select_curve(id))
    }

    /// Advance to the cyclic successor of the current target.
    pub fn select_next_curve(&mut self) -> CurveId {
        self.select_curve(self.target_curve.next())
    }

    /// Advance one frame: run the auto-switch timer, then relax every
    /// particle toward the target buffer at its own staggered rate.
    pub fn tick(&mut self, dt: Duration) {
        self.since_switch += dt;
        if self.auto_switch && self.since_switch >= self.switch_interval {
            self.select_next_curve();
        }
        let target = &self.buffers[self.target_curve.index()];
        relax_toward(&mut self.current, target, &self.aux.delays);
    }

    pub fn set_auto_switch(&mut self, enabled: bool) {
        self.auto_switch = enabled;
    }

    pub fn set_switch_interval(&mut self, interval: Duration) -> Result<(), EngineError> {
        if interval.is_zero() {
            return Err(EngineError::InvalidArgument(
                "switch interval must be non-zero".into(),
            ));
        }
        self.switch_interval = interval;
        Ok(())
    }

    /// Rebuild every precomputed buffer and both aux arrays for a new
    /// particle count. The live buffer is reinitialized to the selected
    /// curve with current = target, so no transition is in flight
    /// afterwards. The whole set is replaced before this returns; a tick
    /// can never observe a partially regenerated set.
    pub fn set_particle_count(&mut self, count: usize) -> Result<(), EngineError> {
        Self::validate_count(count)?;
        self.buffers = Self::build_buffers(count, &mut self.rng);
        self.aux = ParticleAux::new(count, &mut self.rng);
        self.count = count;
        self.current = self.buffers[self.target_curve.index()].clone();
        self.current_curve = self.target_curve;
        self.since_switch = Duration::ZERO;
        Ok(())
    }

    /// Live positions, mutated in place every tick. This is the buffer
    /// the rendering layer draws.
    pub fn positions(&self) -> &[f32] {
        &self.current
    }

    /// Read-only view of the precomputed buffer the cloud converges toward.
    pub fn target_positions(&self) -> &[f32] {
        &self.buffers[self.target_curve.index()]
    }

    /// Per-particle aux scalars for shader-level displacement.
    pub fn aux(&self) -> &ParticleAux {
        &self.aux
    }

    pub fn particle_count(&self) -> usize {
        self.count
    }

    pub fn current_curve(&self) -> CurveId {
        self.current_curve
    }

    pub fn target_curve(&self) -> CurveId {
        self.target_curve
    }

    pub fn auto_switch(&self) -> bool {
        self.auto_switch
    }

    pub fn switch_interval(&self) -> Duration {
        self.switch_interval
    }

    /// Derived predicate: any axis of any particle still farther than
    /// `epsilon` from its target.
    pub fn is_transitioning(&self, epsilon: f32) -> bool {
        let target = &self.buffers[self.target_curve.index()];
        self.current
            .iter()
            .zip(target.iter())
            .any(|(c, t)| (c - t).abs() > epsilon)
    }

    /// Fraction of particles with all three axes within `epsilon` of the
    /// target, for observability. An empty cloud counts as fully settled.
    pub fn transition_progress(&self, epsilon: f32) -> f32 {
        if self.count == 0 {
            return 1.0;
        }
        let target = &self.buffers[self.target_curve.index()];
        let settled = self
            .current
            .chunks_exact(3)
            .zip(target.chunks_exact(3))
            .filter(|(c, t)| {
                (c[0] - t[0]).abs() <= epsilon
                    && (c[1] - t[1]).abs() <= epsilon
                    && (c[2] - t[2]).abs() <= epsilon
            })
            .count();
        settled as f32 / self.count as f32
    }
}

/// One relaxation frame: per particle, per axis,
/// `current += (target - current) * (0.03 + delay * 0.02)`.
///
/// The rate is fixed for a particle's lifetime, which staggers settling
/// into a wave instead of a synchronized snap. Exposed as a free function
/// so the rate law is testable with hand-picked delays.
pub fn relax_toward(current: &mut [f32], target: &[f32], delays: &[f32]) {
    for (i, delay) in delays.iter().enumerate() {
        let rate = CONVERGE_RATE_BASE + delay * CONVERGE_RATE_SPAN;
        let base = i * 3;
        for axis in 0..3 {
            let c = &mut current[base + axis];
            *c += (target[base + axis] - *c) * rate;
        }
    }
}
