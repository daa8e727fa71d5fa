//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

/// Success - operation completed without errors
pub const SUCCESS: u8 = 0;

/// General error - unspecified failure
pub const ERROR: u8 = 1;

/// Validation error - values or platform version rejected
pub const VALIDATION_ERROR: u8 = 2;

/// Render error - the selected API variant cannot carry the configuration
pub const RENDER_ERROR: u8 = 3;

/// Chart error - invalid chart structure or Chart.yaml
pub const CHART_ERROR: u8 = 4;

/// IO error - file not found, permission denied, etc.
pub const IO_ERROR: u8 = 5;
