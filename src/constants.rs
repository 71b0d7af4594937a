// wave-runup/src/constants.rs

/// Gravitational acceleration (m/s²) used by every published equation set.
pub const GRAVITY: f64 = 9.81;

/// Iribarren number separating dissipative from intermediate/reflective
/// beaches in Stockdon et al. (2006). Values strictly below are dissipative.
pub const DISSIPATIVE_IRIBARREN: f64 = 0.3;

/// tan(beta) at which Nielsen (2009) switches to the steep-beach runup scale.
pub const NIELSEN_STEEP_SLOPE: f64 = 0.1;

/// Relative change in wavenumber at which Newton-Raphson stops.
pub const DISPERSION_TOLERANCE: f64 = 1e-12;
pub const DISPERSION_MAX_ITERATIONS: usize = 50;

/// Shallow/intermediate and intermediate/deep limits as fractions of L0.
pub const SHALLOW_WATER_RATIO: f64 = 1.0 / 50.0;
pub const DEEP_WATER_RATIO: f64 = 1.0 / 2.0;

/// Arrays at least this long are evaluated with rayon.
pub const PARALLEL_MIN_LEN: usize = 4096;

/// Diagonal jitter added to the GP training covariance.
pub const GP_JITTER: f64 = 1e-10;
pub const GP_FORMAT_VERSION: u32 = 1;
pub const GP_FEATURES: [&str; 3] = ["Hs", "Tp", "beta"];

/// Environment variable overriding the default artifact location.
pub const GP_MODEL_ENV: &str = "WAVE_RUNUP_GP_MODEL";
pub const GP_MODEL_DEFAULT_PATH: &str = "data/beuzen2019/gp_runup_model.json";
