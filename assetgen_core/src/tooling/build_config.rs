//! Resolved generation settings, usable from build.rs or the CLI.

use crate::config::{AssetgenConfig, CapabilityOverrides};
use crate::dartgen::{NamingConfig, NamingStyle};
use crate::error::AssetgenError;
use crate::types::{Capability, TargetVersion};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for one generation run, with paths already resolved
/// against the config file's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Project root; the directory holding `assets_dir`.
    pub scan_path: PathBuf,

    /// Slash-separated assets directory relative to `scan_path`.
    pub assets_dir: String,

    /// Dart file to write.
    pub output_path: PathBuf,

    pub naming: NamingConfig,

    /// Explicit capability switches layered over the scanned kinds.
    pub capabilities: CapabilityOverrides,

    pub target_version: TargetVersion,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            assets_dir: "assets".to_string(),
            output_path: PathBuf::from("lib/generated/assets.dart"),
            naming: NamingConfig::default(),
            capabilities: CapabilityOverrides::default(),
            target_version: TargetVersion::default(),
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from assetgen.toml.
    ///
    /// Searches upward from `CARGO_MANIFEST_DIR` when set, otherwise follows
    /// [`AssetgenConfig::locate`].
    ///
    /// # Errors
    ///
    /// Returns `AssetgenError::ConfigNotFound` if no assetgen.toml is found,
    /// or a parse error if it cannot be read.
    pub fn from_toml() -> Result<Self, AssetgenError> {
        let config_path = match env::var("CARGO_MANIFEST_DIR") {
            Ok(dir) => AssetgenConfig::find_config_file(Path::new(&dir))?,
            Err(_) => AssetgenConfig::locate(None)?,
        };
        Self::from_toml_path(config_path)
    }

    /// Loads configuration from a specific file. Relative paths inside it
    /// resolve against the file's directory.
    pub fn from_toml_path(path: impl AsRef<Path>) -> Result<Self, AssetgenError> {
        let path = path.as_ref();
        let config = AssetgenConfig::from_path(path)?;
        let base_dir = path.parent().unwrap_or(Path::new("."));
        Ok(Self::from_config(&config, base_dir))
    }

    pub fn from_config(config: &AssetgenConfig, base_dir: &Path) -> Self {
        let resolved = Self {
            scan_path: base_dir.join(&config.general.scan_path),
            assets_dir: config.general.assets_dir.trim().trim_matches('/').to_string(),
            output_path: base_dir.join(&config.general.output_path),
            naming: config.naming_config(),
            capabilities: config.capabilities,
            target_version: config.general.target_version,
        };
        debug!(
            "Resolved scan path {:?}, output {:?}",
            resolved.scan_path, resolved.output_path
        );
        resolved
    }

    /// Directory actually walked by the scanner.
    pub fn assets_path(&self) -> PathBuf {
        self.scan_path.join(&self.assets_dir)
    }

    pub fn builder() -> BuildConfigBuilder {
        BuildConfigBuilder::new()
    }
}

/// Builder for creating BuildConfig programmatically.
#[derive(Debug, Clone, Default)]
pub struct BuildConfigBuilder {
    config: BuildConfig,
}

impl BuildConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: BuildConfig::default(),
        }
    }

    pub fn scan_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.scan_path = path.into();
        self
    }

    pub fn assets_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.assets_dir = dir.into().trim_matches('/').to_string();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Name of the root class (`Assets` by default).
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.config.naming.root_type_name = name.into();
        self
    }

    pub fn naming_style(mut self, style: NamingStyle) -> Self {
        self.config.naming.naming_style = style;
        self
    }

    /// Prefixes generated class names with `package`.
    pub fn package_prefix(mut self, package: impl Into<String>) -> Self {
        self.config.naming = self.config.naming.with_package(package);
        self
    }

    pub fn target_version(mut self, version: TargetVersion) -> Self {
        self.config.target_version = version;
        self
    }

    /// Forces a capability on or off regardless of the scanned kinds.
    pub fn capability(mut self, capability: Capability, enabled: bool) -> Self {
        let overrides = &mut self.config.capabilities;
        let slot = match capability {
            Capability::VectorGraphics => &mut overrides.vector_graphics,
            Capability::Animation => &mut overrides.animation,
            Capability::Rive => &mut overrides.rive,
        };
        *slot = Some(enabled);
        self
    }

    pub fn build(self) -> BuildConfig {
        self.config
    }
}
