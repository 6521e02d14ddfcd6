use super::synth::{ClassDefinition, ClassKind};
use std::fmt;

/// Banner at the top of every generated file.
pub const HEADER: &str = "\
/// GENERATED CODE - DO NOT MODIFY BY HAND
/// *****************************************************
///  assetgen
/// *****************************************************

// coverage:ignore-file
// ignore_for_file: type=lint
// ignore_for_file: directives_ordering,unnecessary_import,implicit_dynamic_list_literal,deprecated_member_use";

/// The complete output of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    imports: Vec<String>,
    classes: Vec<ClassDefinition>,
}

impl GeneratedArtifact {
    pub fn new(imports: Vec<String>, classes: Vec<ClassDefinition>) -> Self {
        Self { imports, classes }
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    pub fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.iter().find(|class| class.name == name)
    }

    /// Root plus directory classes, wrappers excluded.
    pub fn asset_classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes
            .iter()
            .filter(|class| class.kind != ClassKind::Wrapper)
    }

    /// Total number of asset members across all classes.
    pub fn member_count(&self) -> usize {
        self.asset_classes().map(|class| class.member_count).sum()
    }

    /// Header, sorted imports, then each class separated by a blank line.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            HEADER.len() + self.classes.iter().map(|c| c.source.len() + 1).sum::<usize>() + 256,
        );
        out.push_str(HEADER);
        out.push_str("\n\n");
        for import in &self.imports {
            out.push_str(import);
            out.push('\n');
        }
        for class in &self.classes {
            out.push('\n');
            out.push_str(&class.source);
        }
        out
    }
}

impl fmt::Display for GeneratedArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn class(name: &str, kind: ClassKind, members: usize) -> ClassDefinition {
        ClassDefinition {
            name: name.to_string(),
            kind,
            member_count: members,
            source: format!("class {name} {{\n}}\n"),
        }
    }

    #[test]
    fn test_render_layout() {
        let artifact = GeneratedArtifact::new(
            vec!["import 'package:flutter/widgets.dart';".to_string()],
            vec![class("Assets", ClassKind::Root, 0), class("B", ClassKind::Directory, 0)],
        );
        let rendered = artifact.render();
        assert!(rendered.starts_with(HEADER));
        assert!(rendered.ends_with(
            "import 'package:flutter/widgets.dart';\n\nclass Assets {\n}\n\nclass B {\n}\n"
        ));
        assert_eq!(rendered, artifact.to_string());
    }

    #[test]
    fn test_member_count_skips_wrappers() {
        let artifact = GeneratedArtifact::new(
            Vec::new(),
            vec![
                class("Assets", ClassKind::Root, 2),
                class("$AssetsImageGen", ClassKind::Directory, 3),
                class("AssetGenImage", ClassKind::Wrapper, 0),
            ],
        );
        assert_eq!(artifact.member_count(), 5);
        assert_eq!(artifact.asset_classes().count(), 2);
        assert!(artifact.class("AssetGenImage").is_some());
        assert!(artifact.class("Missing").is_none());
    }
}
