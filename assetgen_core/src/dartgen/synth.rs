//! Renders the asset tree into Dart class definitions.

use super::config::NamingConfig;
use super::naming::{ClassNames, MemberNamer, assign_class_names, merged_directory};
use super::resolver::{ValueStrategy, WrapperClass, resolve};
use super::syntax::SyntaxProfile;
use super::wrappers::render_wrapper;
use crate::error::{AssetgenError, Result};
use crate::types::{AssetNode, Capability};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    /// The configured top-level class holding `static const` members.
    Root,
    /// One per directory node below the merged directory.
    Directory,
    /// Helper class such as `AssetGenImage`.
    Wrapper,
}

/// One rendered Dart class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    pub name: String,
    pub kind: ClassKind,
    /// Number of asset members (constructors excluded).
    pub member_count: usize,
    pub source: String,
}

/// Classes in emission order plus what they ended up needing.
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub classes: Vec<ClassDefinition>,
    /// Capabilities whose wrapper classes are referenced by some member.
    pub capabilities_used: BTreeSet<Capability>,
}

/// Renders the root class, then one class per directory in pre-order, then
/// the wrapper classes referenced by any member.
pub fn synthesize(
    root: &AssetNode,
    config: &NamingConfig,
    profile: &SyntaxProfile,
) -> Result<Synthesis> {
    let root_name = config.root_class_name();
    let top = merged_directory(root);

    let mut reserved: Vec<&str> = vec![root_name.as_str()];
    reserved.extend(WrapperClass::iter().map(|wrapper| wrapper.class_name()));
    let class_names = assign_class_names(top, config, &reserved)?;

    let mut synth = Synthesizer {
        config,
        profile,
        class_names: &class_names,
        classes: Vec::with_capacity(class_names.len() + 1),
        wrappers: BTreeSet::new(),
        capabilities_used: BTreeSet::new(),
    };

    synth.render_class(top, &root_name, ClassKind::Root)?;
    synth.visit(top)?;

    for wrapper in std::mem::take(&mut synth.wrappers) {
        synth.classes.push(ClassDefinition {
            name: wrapper.class_name().to_string(),
            kind: ClassKind::Wrapper,
            member_count: 0,
            source: render_wrapper(wrapper, profile),
        });
    }

    debug!(
        classes = synth.classes.len(),
        capabilities = ?synth.capabilities_used,
        "Synthesized class definitions"
    );
    Ok(Synthesis {
        classes: synth.classes,
        capabilities_used: synth.capabilities_used,
    })
}

struct Synthesizer<'a> {
    config: &'a NamingConfig,
    profile: &'a SyntaxProfile,
    class_names: &'a ClassNames,
    classes: Vec<ClassDefinition>,
    wrappers: BTreeSet<WrapperClass>,
    capabilities_used: BTreeSet<Capability>,
}

impl Synthesizer<'_> {
    fn visit(&mut self, node: &AssetNode) -> Result<()> {
        for child in node.children.iter().filter(|c| c.is_directory()) {
            let name = self.class_name_of(child)?.to_string();
            self.render_class(child, &name, ClassKind::Directory)?;
            self.visit(child)?;
        }
        Ok(())
    }

    fn class_name_of(&self, node: &AssetNode) -> Result<&str> {
        self.class_names
            .get(&node.path)
            .ok_or_else(|| AssetgenError::naming_conflict(node.name.clone(), node.path.clone()))
    }

    fn render_class(&mut self, node: &AssetNode, name: &str, kind: ClassKind) -> Result<()> {
        let is_root = kind == ClassKind::Root;
        let mut namer = MemberNamer::new(self.config.naming_style.member_case(), name);
        let mut members = Vec::with_capacity(node.children.len());

        for (index, child) in node.children.iter().enumerate() {
            let member = namer.member_name(child, index + 1)?;
            trace!(class = %name, %member, path = %child.path, "Member");

            let line = if child.is_directory() {
                let child_class = self.class_name_of(child)?;
                if is_root {
                    format!("  static const {child_class} {member} = {child_class}();")
                } else {
                    format!("  {child_class} get {member} => const {child_class}();")
                }
            } else {
                let resolution = resolve(child.kind);
                if let ValueStrategy::Wrapper(wrapper) = resolution.strategy {
                    self.wrappers.insert(wrapper);
                }
                if let Some(capability) = resolution.capability {
                    self.capabilities_used.insert(capability);
                }

                let strategy = resolution.strategy;
                let ty = strategy.dart_type();
                let value = strategy.expression(&dart_string(&child.path));
                let doc = format!("  /// File path: {}", doc_safe(&child.path));
                if is_root {
                    format!("{doc}\n  static const {ty} {member} = {value};")
                } else if strategy.is_const_constructor() {
                    format!("{doc}\n  {ty} get {member} => const {value};")
                } else {
                    format!("{doc}\n  {ty} get {member} => {value};")
                }
            };
            members.push(line);
        }

        let constructor = if is_root {
            format!("  const {name}._();")
        } else {
            format!("  const {name}();")
        };

        let mut source = format!(
            "{} {} {{\n{}\n",
            self.profile.class_modifier.keyword(),
            name,
            constructor
        );
        if !members.is_empty() {
            source.push('\n');
            source.push_str(&members.join("\n"));
            source.push('\n');
        }
        source.push_str("}\n");

        self.classes.push(ClassDefinition {
            name: name.to_string(),
            kind,
            member_count: members.len(),
            source,
        });
        Ok(())
    }
}

/// Single-quoted Dart string literal. `$` is escaped to stop interpolation.
pub fn dart_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Keeps a path on a single comment line.
fn doc_safe(path: &str) -> String {
    path.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
