// Engine tuning constants shared by the core and the native driver.

// Curve generation
pub const CURVE_SCALE: f32 = 150.0; // world units per normalized curve unit
pub const AXIS_NOISE: f32 = 0.05; // per-axis multiplicative jitter, +/-5%
pub const DEFAULT_PARTICLE_COUNT: usize = 15_000;
pub const MAX_PARTICLE_COUNT: usize = 2_000_000; // sanity cap for set_particle_count

// Lorenz integration (classic chaotic parameters)
pub const LORENZ_SIGMA: f32 = 10.0;
pub const LORENZ_RHO: f32 = 28.0;
pub const LORENZ_BETA: f32 = 8.0 / 3.0;
pub const LORENZ_STEP: f32 = 0.005; // explicit Euler step size
pub const LORENZ_MAX_STEPS: usize = 5000;
pub const LORENZ_SCALE: f32 = 0.03;
pub const LORENZ_Z_OFFSET: f32 = -25.0; // recenters the attractor's z range

// Galaxy distribution
pub const GALAXY_ARMS: usize = 4;
pub const GALAXY_TWIST: f32 = 4.0; // radians of arm wind-up per unit radius
pub const GALAXY_ANGLE_JITTER: f32 = 0.2;
pub const GALAXY_THICKNESS: f32 = 0.2;

// Per-particle staggered convergence: rate = BASE + delay * SPAN
pub const CONVERGE_RATE_BASE: f32 = 0.03;
pub const CONVERGE_RATE_SPAN: f32 = 0.02;
pub const SETTLED_EPSILON: f32 = 0.5; // world units; convergence is asymptotic

// Auto-switch timer
pub const DEFAULT_SWITCH_INTERVAL_MS: u64 = 8000;

// Control-signal smoothing rates (per tick)
pub const SPREAD_RATE: f32 = 0.08;
pub const SCALE_RATE: f32 = 0.08;
pub const ROTATION_RATE: f32 = 0.05;

// Gesture response mapping
pub const DEFAULT_SENSITIVITY: f32 = 5.0;
pub const SPREAD_TARGET_MIN: f32 = 0.2;
pub const SPREAD_TARGET_SPAN: f32 = 3.8;
pub const SCALE_TARGET_MIN: f32 = 0.3;
pub const SCALE_TARGET_SPAN: f32 = 2.0;
pub const ROTATION_GAIN: f32 = 0.3;

// Palm-size calibration: expected apparent size range mapped to [0, 1]
pub const PALM_SIZE_MIN: f32 = 0.08;
pub const PALM_SIZE_RANGE: f32 = 0.35;

// Rest-state targets applied when no hand is tracked
pub const REST_SPREAD: f32 = 1.0;
pub const REST_SCALE: f32 = 1.0;
pub const REST_ROTATION: f32 = 0.0;
