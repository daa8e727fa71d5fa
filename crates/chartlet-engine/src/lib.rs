//! Chartlet Engine - version-aware Ingress rendering
//!
//! This crate turns resolved chart values into a Kubernetes Ingress manifest:
//! - API group/version selection from the target platform version
//! - `pathType` and `ingressClassName` gated on field availability
//! - Standard chart naming and labels
//! - Diagnostics with codes and help text

pub mod engine;
pub mod error;
pub mod ingress;
pub mod manifest;
pub mod naming;
pub mod variant;

pub use engine::{BackendService, IngressRenderer, RendererBuilder};
pub use error::{EngineError, Result};
pub use manifest::ManifestDocument;
pub use variant::ApiVariant;
