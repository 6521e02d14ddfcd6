//! Init command - writes a starter assetgen.toml.

use crate::cli::{Cli, InitArgs};
use assetgen_core::{
    config::CONFIG_FILE_NAME,
    error::{AssetgenError, Result},
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runs the init command.
pub fn run(cli: &Cli, args: InitArgs) -> Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if config_path.exists() && !args.force {
        return Err(AssetgenError::config(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    let project_dir = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let package_name = args
        .package_name
        .or_else(|| pubspec_package_name(project_dir));

    fs::write(&config_path, starter_config(package_name.as_deref()))?;
    info!("Created {}", config_path.display());
    info!("Next steps:");
    info!("  1. Edit {} to configure your project", config_path.display());
    info!("  2. Run 'assetgen generate' to write the Dart file");

    Ok(())
}

/// The `name:` entry of `pubspec.yaml` in `dir`, if any.
fn pubspec_package_name(dir: &Path) -> Option<String> {
    let pubspec = fs::read_to_string(dir.join("pubspec.yaml")).ok()?;
    let name = pubspec
        .lines()
        .find_map(|line| line.strip_prefix("name:"))
        .map(|value| value.trim().trim_matches(['"', '\'']).to_string())
        .filter(|value| !value.is_empty());
    debug!("Package name from pubspec.yaml: {:?}", name);
    name
}

fn starter_config(package_name: Option<&str>) -> String {
    let package_line = match package_name {
        Some(name) => format!("package_name = {}", toml::Value::String(name.to_string())),
        None => "# package_name = \"my_app\"".to_string(),
    };

    format!(
        r#"# assetgen configuration

[general]
{package_line}
# Directory containing the assets directory, relative to this file
scan_path = "."
assets_dir = "assets"
output_path = "lib/generated/assets.dart"
# Flutter version the generated code must compile against
target_version = "3.16.0"

[naming]
class_name = "Assets"
# robust | camel_case | snake_case
style = "robust"
leading_with_package_name = false

# Imports are derived from the scanned files; set a key to force it.
[capabilities]
# vector_graphics = true
# animation = true
# rive = true
"#
    )
}
