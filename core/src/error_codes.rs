//! Stable error codes surfaced in error messages and by `code()` accessors.

pub const DIFF_LIMITS_EXCEEDED: &str = "WDIFF_DIFF_001";
pub const CONFIG_INVALID: &str = "WDIFF_CONFIG_001";
