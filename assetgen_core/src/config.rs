use crate::dartgen::{DEFAULT_ROOT_CLASS_NAME, NamingConfig, NamingStyle};
use crate::error::{AssetgenError, Result};
use crate::types::{Capability, CapabilityFlags, TargetVersion};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, trace, warn};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = "assetgen.toml";

/// Environment variable holding an explicit config path.
pub const CONFIG_PATH_ENV: &str = "ASSETGEN_CONFIG";

/// Project-level settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Dart package name, used when class names are prefixed with it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,

    /// Directory holding the assets directory, relative to the config file.
    #[serde(default = "default_scan_path")]
    pub scan_path: String,

    /// Assets directory below `scan_path`. Asset paths in the generated code
    /// start with it.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// Generated Dart file, relative to the config file.
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Flutter version the generated code must compile against.
    #[serde(default)]
    pub target_version: TargetVersion,
}

fn default_scan_path() -> String {
    ".".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_output_path() -> String {
    "lib/generated/assets.dart".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            package_name: None,
            scan_path: default_scan_path(),
            assets_dir: default_assets_dir(),
            output_path: default_output_path(),
            target_version: TargetVersion::default(),
        }
    }
}

/// `[naming]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamingSection {
    #[serde(default = "default_class_name")]
    pub class_name: String,

    #[serde(default)]
    pub style: NamingStyle,

    #[serde(default)]
    pub leading_with_package_name: bool,
}

fn default_class_name() -> String {
    DEFAULT_ROOT_CLASS_NAME.to_string()
}

impl Default for NamingSection {
    fn default() -> Self {
        Self {
            class_name: default_class_name(),
            style: NamingStyle::default(),
            leading_with_package_name: false,
        }
    }
}

/// Explicit capability switches. Unset entries follow what the scan finds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CapabilityOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_graphics: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rive: Option<bool>,
}

impl CapabilityOverrides {
    pub fn get(&self, capability: Capability) -> Option<bool> {
        match capability {
            Capability::VectorGraphics => self.vector_graphics,
            Capability::Animation => self.animation,
            Capability::Rive => self.rive,
        }
    }

    /// `observed` with every explicit override applied on top.
    pub fn apply(&self, observed: CapabilityFlags) -> CapabilityFlags {
        use strum::IntoEnumIterator;

        let mut flags = observed;
        for capability in Capability::iter() {
            if let Some(enabled) = self.get(capability) {
                if enabled != observed.is_enabled(capability) {
                    debug!(%capability, enabled, "Capability overridden by configuration");
                }
                flags.set(capability, enabled);
            }
        }
        flags
    }
}

/// Root of `assetgen.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AssetgenConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub naming: NamingSection,
    #[serde(default)]
    pub capabilities: CapabilityOverrides,
}

impl AssetgenConfig {
    /// Loads the configuration found by [`AssetgenConfig::locate`].
    pub fn new() -> Result<AssetgenConfig> {
        info!("Loading assetgen configuration");
        let config_path = Self::locate(None)?;
        Self::from_path(&config_path)
    }

    /// Resolves which file to load: `explicit`, then `$ASSETGEN_CONFIG`,
    /// then a search upward from the current directory.
    pub fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            debug!("Using configuration passed explicitly: {:?}", path);
            return Ok(path.to_path_buf());
        }
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            debug!("Using configuration from ${}: {}", CONFIG_PATH_ENV, path);
            return Ok(PathBuf::from(path));
        }
        Self::find_config_file(&env::current_dir()?)
    }

    /// Searches for `assetgen.toml` in `start` and then each ancestor.
    pub fn find_config_file(start: &Path) -> Result<PathBuf> {
        debug!("Starting config file search from: {:?}", start);

        for path in start.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            if config_path.is_file() {
                info!("Found configuration file at: {:?}", config_path);
                return Ok(config_path);
            }
        }

        error!("Configuration file '{}' not found in any parent directory.", CONFIG_FILE_NAME);
        Err(AssetgenError::ConfigNotFound {
            search_start: start.to_path_buf(),
        })
    }

    pub fn from_path(path: &Path) -> Result<AssetgenConfig> {
        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file {:?}: {}", path, e);
            AssetgenError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());
        Self::from_toml_str(&contents)
    }

    /// Parses, substitutes environment variables and validates.
    pub fn from_toml_str(contents: &str) -> Result<AssetgenConfig> {
        let mut config: AssetgenConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            AssetgenError::from(e)
        })?;
        debug!("Successfully parsed TOML configuration");

        config.substitute_all()?;
        config.validate()?;

        debug!(
            "Naming style: {:?}, target version: {}, overrides: {:?}",
            config.naming.style, config.general.target_version, config.capabilities
        );
        Ok(config)
    }

    /// Serialized form, as written by `assetgen init`.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn naming_config(&self) -> NamingConfig {
        NamingConfig {
            root_type_name: self.naming.class_name.clone(),
            naming_style: self.naming.style,
            prefix_with_package: self.naming.leading_with_package_name,
            package_name: self.general.package_name.clone(),
        }
    }

    fn substitute_all(&mut self) -> Result<()> {
        debug!("Substituting environment variables in configuration");
        let general = &mut self.general;
        if let Some(package) = general.package_name.as_mut() {
            *package = substitute_env_vars(package)?;
        }
        general.scan_path = substitute_env_vars(&general.scan_path)?;
        general.assets_dir = substitute_env_vars(&general.assets_dir)?;
        general.output_path = substitute_env_vars(&general.output_path)?;
        self.naming.class_name = substitute_env_vars(&self.naming.class_name)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let raw = self.general.assets_dir.trim();
        let assets_dir = raw.trim_matches('/');
        if assets_dir.is_empty() {
            return Err(AssetgenError::config("general.assets_dir must not be empty"));
        }
        if Path::new(raw).is_absolute() || assets_dir.split('/').any(|s| s == "..") {
            return Err(AssetgenError::config(format!(
                "general.assets_dir `{}` must be a relative path inside scan_path",
                self.general.assets_dir
            )));
        }
        if self.general.output_path.trim().is_empty() {
            return Err(AssetgenError::config("general.output_path must not be empty"));
        }
        if self.naming.leading_with_package_name && self.general.package_name.is_none() {
            warn!("naming.leading_with_package_name is set but general.package_name is missing");
        }
        Ok(())
    }
}

/// Replaces `${VAR}` and `${VAR:-default}` with values from the environment.
pub fn substitute_env_vars(value: &str) -> Result<String> {
    if !value.contains("${") {
        return Ok(value.to_string());
    }
    trace!("Substituting environment variables in: {}", value);

    let re = Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")
        .map_err(|e| AssetgenError::config(e.to_string()))?;

    let mut result = String::with_capacity(value.len());
    let mut last = 0;
    for cap in re.captures_iter(value) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let var_name = &cap[1];
        let default_value = cap.get(2).map(|m| m.as_str());

        let replacement = match env::var(var_name) {
            Ok(val) => {
                debug!("Resolved environment variable: {}", var_name);
                val
            }
            Err(_) => match default_value {
                Some(default) => {
                    warn!(
                        "Environment variable {} not set, using default: {}",
                        var_name, default
                    );
                    default.to_string()
                }
                None => {
                    error!(
                        "Environment variable {} not set and no default provided",
                        var_name
                    );
                    return Err(AssetgenError::EnvVarNotSet(var_name.to_string()));
                }
            },
        };

        result.push_str(&value[last..full_match.start()]);
        result.push_str(&replacement);
        last = full_match.end();
    }
    result.push_str(&value[last..]);

    Ok(result)
}
