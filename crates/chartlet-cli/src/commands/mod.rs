//! CLI commands

pub mod lint;
pub mod show;
pub mod template;

use chartlet_core::PlatformVersion;
use clap::Args;
use std::path::PathBuf;

/// Options shared by commands that resolve values and render
#[derive(Args, Debug, Clone)]
pub struct RenderOptions {
    /// Values file(s) to merge, in order
    #[arg(short = 'f', long = "values")]
    pub values: Vec<PathBuf>,

    /// Set values on command line (key=value)
    #[arg(long = "set")]
    pub set: Vec<String>,

    /// Target Kubernetes version
    #[arg(
        long,
        env = "CHARTLET_KUBE_VERSION",
        default_value_t = PlatformVersion::default().to_string()
    )]
    pub kube_version: String,

    /// Backend service name (default: release fullname)
    #[arg(long)]
    pub service_name: Option<String>,

    /// Backend service port (default: service.port from values)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub service_port: Option<u16>,

    /// Fail instead of dropping fields the target version cannot carry
    #[arg(long)]
    pub strict: bool,
}
