// assetgen - typed Dart accessors generated from Flutter asset trees

pub mod config;
pub mod dartgen;
pub mod error;
pub mod tooling;
pub mod types;

// Re-export commonly used items for convenience
pub use config::AssetgenConfig;
pub use dartgen::{GeneratedArtifact, NamingConfig, NamingStyle, generate, generate_dart_string};
pub use error::{AssetgenError, Result};
pub use types::{AssetNode, Capability, CapabilityFlags, MediaKind, TargetVersion};
