//! Generate command - scans the assets directory and writes the Dart file.

use super::load_build_config;
use crate::cli::{Cli, GenerateArgs};
use assetgen_core::{
    TargetVersion,
    error::Result,
    tooling::{AssetGenerator, BuildConfig},
};
use std::io::Write;
use tracing::{debug, info};

/// Runs generation with default settings.
pub fn run_default(cli: &Cli) -> Result<()> {
    run(cli, GenerateArgs::default())
}

/// Runs the generate command.
pub fn run(cli: &Cli, args: GenerateArgs) -> Result<()> {
    let mut config = load_build_config(cli)?;
    apply_overrides(&mut config, &args)?;

    let generator = AssetGenerator::new(config);

    if args.dry_run {
        let rendered = generator.render()?;
        let source = rendered.source();
        debug!("Dry run, {} bytes not written", source.len());
        std::io::stdout().lock().write_all(source.as_bytes())?;
        return Ok(());
    }

    let report = generator.generate()?;
    info!(
        "{} classes, {} assets -> {:?}{}",
        report.class_count,
        report.asset_count,
        report.path,
        if report.changed { "" } else { " (unchanged)" }
    );
    Ok(())
}

fn apply_overrides(config: &mut BuildConfig, args: &GenerateArgs) -> Result<()> {
    if let Some(version) = &args.target_version {
        config.target_version = version.parse::<TargetVersion>()?;
        debug!("Target version overridden: {}", config.target_version);
    }
    if let Some(style) = args.style {
        config.naming.naming_style = style.into();
    }
    if let Some(class_name) = &args.class_name {
        config.naming.root_type_name = class_name.clone();
    }
    Ok(())
}
