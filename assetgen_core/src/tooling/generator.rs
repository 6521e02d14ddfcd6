//! Scan, generate and write in one step.

use super::BuildConfig;
use super::scanner::{TreeStats, scan_assets};
use crate::dartgen::{self, GeneratedArtifact};
use crate::error::AssetgenError;
use crate::types::{AssetNode, CapabilityFlags};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Report of the generation process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// The path where the file was written.
    pub path: PathBuf,
    /// Size of the generated source.
    pub bytes_written: usize,
    /// False when the existing file already had identical content and was
    /// left untouched.
    pub changed: bool,
    /// Root and directory classes, helper classes excluded.
    pub class_count: usize,
    /// File assets exposed as members.
    pub asset_count: usize,
    /// Flags the imports were computed from.
    pub capabilities: CapabilityFlags,
}

/// Output of [`AssetGenerator::render`] before anything touches the disk.
#[derive(Debug, Clone)]
pub struct RenderedAssets {
    pub tree: AssetNode,
    pub capabilities: CapabilityFlags,
    pub artifact: GeneratedArtifact,
}

impl RenderedAssets {
    pub fn source(&self) -> String {
        self.artifact.render()
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats::of(&self.tree)
    }
}

/// Generator for the Dart asset file.
pub struct AssetGenerator {
    config: BuildConfig,
}

impl AssetGenerator {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn scan(&self) -> Result<AssetNode, AssetgenError> {
        scan_assets(&self.config.scan_path, &self.config.assets_dir)
    }

    /// Kinds present in `tree`, overridden by the configuration.
    pub fn capabilities_for(&self, tree: &AssetNode) -> CapabilityFlags {
        self.config
            .capabilities
            .apply(CapabilityFlags::observed_in(tree))
    }

    /// Scans and generates without writing.
    pub fn render(&self) -> Result<RenderedAssets, AssetgenError> {
        let tree = self.scan()?;
        let capabilities = self.capabilities_for(&tree);
        debug!("Capabilities: {:?}", capabilities);

        let artifact = dartgen::generate(
            &tree,
            &self.config.naming,
            capabilities,
            self.config.target_version,
        )?;
        Ok(RenderedAssets {
            tree,
            capabilities,
            artifact,
        })
    }

    /// Scans, generates and writes the output file, creating parent
    /// directories as needed.
    pub fn generate(&self) -> Result<GenerationReport, AssetgenError> {
        info!("Starting asset generation");
        let rendered = self.render()?;
        let content = rendered.source();
        let path = self.config.output_path.clone();

        let changed = match fs::read_to_string(&path) {
            Ok(existing) => existing != content,
            Err(_) => true,
        };
        if changed {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &content)?;
            info!("Assets written to {:?}", path);
        } else {
            info!("{:?} is up to date", path);
        }

        Ok(GenerationReport {
            path,
            bytes_written: content.len(),
            changed,
            class_count: rendered.artifact.asset_classes().count(),
            asset_count: rendered.stats().files,
            capabilities: rendered.capabilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Capability, TargetVersion};
    use std::path::Path;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for file in ["assets/image/test.png", "assets/svg/test.svg", "assets/readme.txt"] {
            let path = temp_dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"").unwrap();
        }
        temp_dir
    }

    fn generator(root: &Path) -> AssetGenerator {
        AssetGenerator::new(
            BuildConfig::builder()
                .scan_path(root)
                .output_path(root.join("lib/generated/assets.dart"))
                .target_version(TargetVersion::new(3, 16, 0))
                .build(),
        )
    }

    #[test]
    fn test_generate_writes_file() {
        let temp_dir = project();
        let report = generator(temp_dir.path()).generate().unwrap();

        assert!(report.changed);
        assert_eq!(report.class_count, 3);
        assert_eq!(report.asset_count, 3);
        assert!(report.capabilities.vector_graphics);
        assert!(!report.capabilities.animation);

        let written = fs::read_to_string(&report.path).unwrap();
        assert_eq!(written.len(), report.bytes_written);
        assert!(written.contains("static const $AssetsImageGen image = $AssetsImageGen();"));
        assert!(written.contains("import 'package:flutter_svg/flutter_svg.dart';"));
    }

    #[test]
    fn test_second_run_is_unchanged() {
        let temp_dir = project();
        let generator = generator(temp_dir.path());
        assert!(generator.generate().unwrap().changed);
        assert!(!generator.generate().unwrap().changed);
    }

    #[test]
    fn test_override_disables_capability() {
        let temp_dir = project();
        let config = BuildConfig::builder()
            .scan_path(temp_dir.path())
            .capability(Capability::VectorGraphics, false)
            .build();
        let rendered = AssetGenerator::new(config).render().unwrap();

        assert!(!rendered.capabilities.vector_graphics);
        let source = rendered.source();
        assert!(!source.contains("flutter_svg"));
        assert!(source.contains("SvgGenImage('assets/svg/test.svg')"));
    }
}
