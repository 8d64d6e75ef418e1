//! Shared constants for the palace scoring engine.

/// Number of positions on a chart.
pub const POSITION_COUNT: usize = 12;

/// Length of the stem cycle.
pub const STEM_COUNT: usize = 10;

/// Length of the branch cycle.
pub const BRANCH_COUNT: usize = 12;

/// Number of modifier types a transformation layer can assign.
pub const MODIFIER_COUNT: usize = 4;

/// Reference year for the annual stem/branch cycle (甲子).
pub const REFERENCE_EPOCH_YEAR: i64 = 1984;

/// Length of one decadal span in years.
pub const DECADE_SPAN: u32 = 10;

/// Number of decadal spans laid out around the ring.
pub const DECADE_COUNT: u32 = 12;
