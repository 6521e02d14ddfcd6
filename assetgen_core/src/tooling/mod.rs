//! Scanning and file output around the Dart generator.
//!
//! ## Quick Start (in build.rs)
//!
//! ```rust,ignore
//! fn main() {
//!     assetgen_core::tooling::generate().expect("Asset generation failed");
//!     println!("cargo:rerun-if-changed=assets/");
//!     println!("cargo:rerun-if-changed=assetgen.toml");
//! }
//! ```

mod build_config;
mod generator;
mod scanner;

pub use build_config::*;
pub use generator::*;
pub use scanner::*;

use crate::error::AssetgenError;

/// Generates the asset file using configuration from assetgen.toml.
///
/// # Errors
///
/// Returns `AssetgenError` if:
/// - Configuration file cannot be found or parsed
/// - The assets directory cannot be scanned
/// - Class names cannot be made unique
/// - The output file cannot be written
pub fn generate() -> Result<GenerationReport, AssetgenError> {
    let config = BuildConfig::from_toml()?;
    AssetGenerator::new(config).generate()
}

/// Generates the asset file with a custom configuration.
pub fn generate_with_config(config: BuildConfig) -> Result<GenerationReport, AssetgenError> {
    AssetGenerator::new(config).generate()
}
