//! Chartlet Core - Core types for the Chartlet ingress renderer
//!
//! This crate provides the foundational types used throughout Chartlet:
//! - `Values`: Configuration values with deep merge support
//! - `PlatformVersion`: Target Kubernetes version used for API selection
//! - `LoadedChart`: Chart metadata and default values loaded from disk
//! - `ReleaseInfo`: Release name and namespace

pub mod chart;
pub mod error;
pub mod release;
pub mod values;
pub mod version;

pub use chart::{ChartInfo, ChartMetadata, LoadedChart};
pub use error::CoreError;
pub use release::ReleaseInfo;
pub use values::{Values, parse_set_values, resolve};
pub use version::{PlatformVersion, VersionParseError};
