//! Dart code generation for an asset tree.
//!
//! [`generate`] is pure: names are assigned per call, nothing is cached, and
//! the same inputs always produce byte-identical output.

pub mod artifact;
pub mod config;
pub mod imports;
pub mod naming;
pub mod resolver;
pub mod sanitize;
pub mod synth;
pub mod syntax;
pub mod wrappers;

pub use artifact::GeneratedArtifact;
pub use config::{DEFAULT_ROOT_CLASS_NAME, NamingConfig, NamingStyle};
pub use synth::{ClassDefinition, ClassKind};
pub use syntax::SyntaxProfile;

use crate::error::Result;
use crate::types::{AssetNode, CapabilityFlags, TargetVersion};
use tracing::{info, warn};

/// Generates the Dart source for `root`.
///
/// `flags` alone decide which capability imports are emitted. A tree holding
/// a kind whose capability flag is off still gets that kind's wrapper; the
/// missing import is logged but not corrected. Use
/// [`CapabilityFlags::observed_in`] to derive flags that match the tree.
pub fn generate(
    root: &AssetNode,
    config: &NamingConfig,
    flags: CapabilityFlags,
    version: TargetVersion,
) -> Result<GeneratedArtifact> {
    info!(
        root = %root.path,
        style = ?config.naming_style,
        %version,
        "Generating Dart asset classes"
    );

    let profile = SyntaxProfile::for_version(version);
    let synthesis = synth::synthesize(root, config, &profile)?;

    for capability in &synthesis.capabilities_used {
        if !flags.is_enabled(*capability) {
            warn!(
                %capability,
                import = capability.import(),
                "Tree contains assets for a disabled capability; generated code will reference a type whose import is missing"
            );
        }
    }

    let imports = imports::collect_imports(&flags);
    let artifact = GeneratedArtifact::new(imports, synthesis.classes);

    info!(
        classes = artifact.classes().len(),
        members = artifact.member_count(),
        imports = artifact.imports().len(),
        "Generation complete"
    );
    Ok(artifact)
}

/// [`generate`] followed by [`GeneratedArtifact::render`].
pub fn generate_dart_string(
    root: &AssetNode,
    config: &NamingConfig,
    flags: CapabilityFlags,
    version: TargetVersion,
) -> Result<String> {
    generate(root, config, flags, version).map(|artifact| artifact.render())
}
