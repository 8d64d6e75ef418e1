//! Compiled defaults. Single source of truth for every tunable constant.

// Per-position pipeline.
pub const DEFAULT_MAJOR_BASE_SCORE: f64 = 5.0;
pub const DEFAULT_BASE_SCORE: f64 = 1.0;
pub const DEFAULT_BORROW_RATIO: f64 = 0.7;
pub const DEFAULT_MINOR_BOOST_LIMIT: f64 = 10.0;
pub const DEFAULT_DOUBLE_CONVERGENCE_BONUS: f64 = 2.0;
pub const DEFAULT_PARALLEL: bool = true;

// Spatial aggregation.
pub const DEFAULT_SELF_WEIGHT: f64 = 1.0;
pub const DEFAULT_OPPOSITE_WEIGHT: f64 = 0.4;
pub const DEFAULT_TRINE_WEIGHT: f64 = 0.2;
pub const DEFAULT_SPATIAL_CEILING: f64 = 40.0;

// Focus amplification.
pub const DEFAULT_FOCUS_AMPLIFICATION: f64 = 1.5;

// Overlap layer weights.
pub const DEFAULT_NATAL_WEIGHT: f64 = 1.0;
pub const DEFAULT_DECADAL_WEIGHT: f64 = 1.5;
pub const DEFAULT_ANNUAL_WEIGHT: f64 = 2.0;
pub const DEFAULT_MINOR_LIMIT_WEIGHT: f64 = 1.0;

// Boundary validation.
pub const DEFAULT_MIN_AGE: u32 = 1;
pub const DEFAULT_MAX_AGE: u32 = 120;
