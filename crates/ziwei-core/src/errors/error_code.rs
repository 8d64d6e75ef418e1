//! ErrorCode trait for boundary conversion.

/// Every error enum implements this to expose a stable, machine-readable
/// code to whatever layer sits on top of the engine.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "CHART_INCOMPLETE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn tagged_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CHART_INVALID: &str = "CHART_INVALID";
pub const CHART_INCOMPLETE: &str = "CHART_INCOMPLETE";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_AGE: &str = "INVALID_AGE";
