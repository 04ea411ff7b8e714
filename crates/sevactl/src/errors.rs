//! Exit codes for sevactl

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the tracking code is empty
pub const EXIT_USAGE: i32 = 64;

/// Exit code when no source knows the tracking code
pub const EXIT_NOT_FOUND: i32 = 66;

/// Exit code when the live lookup failed and no fallback matched
pub const EXIT_LOOKUP_FAILED: i32 = 69;
