//! Info command - displays configuration and scanned asset statistics.

use super::load_build_config;
use crate::cli::{Cli, InfoArgs, InfoFormat};
use assetgen_core::{
    Capability,
    error::Result,
    tooling::{AssetGenerator, TreeStats},
};
use serde_json::json;
use tracing::warn;

/// Runs the info command.
pub fn run(cli: &Cli, args: InfoArgs) -> Result<()> {
    let generator = AssetGenerator::new(load_build_config(cli)?);
    let config = generator.config();

    let scanned = match generator.scan() {
        Ok(tree) => Some(tree),
        Err(e) => {
            warn!("Could not scan assets: {}", e);
            None
        }
    };
    let stats = scanned.as_ref().map(TreeStats::of);
    let flags = scanned.as_ref().map(|tree| generator.capabilities_for(tree));

    match args.format {
        InfoFormat::Pretty => {
            println!("\n=== Configuration ===\n");
            println!("Assets:         {}", config.assets_path().display());
            println!("Output Path:    {}", config.output_path.display());
            println!("Class Name:     {}", config.naming.root_class_name());
            println!("Naming Style:   {:?}", config.naming.naming_style);
            println!("Target Version: {}", config.target_version);
            if let Some(package) = &config.naming.package_name {
                println!(
                    "Package:        {}{}",
                    package,
                    if config.naming.prefix_with_package {
                        " (prefixed)"
                    } else {
                        ""
                    }
                );
            }

            if let (Some(stats), Some(flags)) = (&stats, &flags) {
                println!("\n=== Assets ===\n");
                println!("Directories: {}", stats.directories);
                println!("Files:       {}", stats.files);
                for (kind, count) in &stats.kinds {
                    println!("  {:<15} {}", kind.to_string(), count);
                }
                println!("\nCapabilities:");
                for capability in [
                    Capability::VectorGraphics,
                    Capability::Animation,
                    Capability::Rive,
                ] {
                    println!(
                        "  {:<15} {}",
                        capability.to_string(),
                        if flags.is_enabled(capability) {
                            "enabled"
                        } else {
                            "disabled"
                        }
                    );
                }
            }
        }
        InfoFormat::Json => {
            let value = json!({
                "assets_path": config.assets_path(),
                "output_path": config.output_path,
                "class_name": config.naming.root_class_name(),
                "naming": config.naming,
                "target_version": config.target_version,
                "assets": stats,
                "capabilities": flags,
            });
            println!("{value:#}");
        }
    }

    Ok(())
}
