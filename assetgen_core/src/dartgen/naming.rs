//! Collision-free naming for generated classes and their members.
//!
//! Names are handed out by a [`NameRegistry`] that lives for a single
//! generation call. Candidates are tried from least to most qualified; when
//! every candidate is taken, a numeric tiebreaker is appended to the most
//! qualified one, in the order nodes are visited (pre-order).

use super::config::NamingConfig;
use super::sanitize::{IdentCase, placeholder, sanitize, sanitize_or_placeholder};
use crate::error::{AssetgenError, Result};
use crate::types::AssetNode;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Upper bound for the numeric tiebreaker. Reaching it means the input is
/// adversarial rather than merely unlucky.
pub const DEFAULT_TIEBREAK_LIMIT: usize = 10_000;

/// Suffix of every generated directory class.
const CLASS_SUFFIX: &str = "Gen";

/// Set of names already handed out within one scope.
#[derive(Debug, Clone)]
pub struct NameRegistry {
    taken: HashSet<String>,
    tiebreak_limit: usize,
}

impl Default for NameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_TIEBREAK_LIMIT)
    }

    /// Registry whose numeric tiebreaker stops at `tiebreak_limit`.
    pub fn with_limit(tiebreak_limit: usize) -> Self {
        Self {
            taken: HashSet::new(),
            tiebreak_limit,
        }
    }

    /// Marks `name` as taken. Returns `false` if it already was.
    pub fn reserve(&mut self, name: impl Into<String>) -> bool {
        self.taken.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    /// Claims the first free candidate. When all are taken, appends `2`, `3`,
    /// ... to the last candidate until one is free.
    ///
    /// `path` only feeds the error message.
    pub fn claim<I>(&mut self, candidates: I, path: &str) -> Result<String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut last = None;
        for candidate in candidates {
            if self.reserve(candidate.clone()) {
                return Ok(candidate);
            }
            trace!(%candidate, %path, "Name taken, qualifying further");
            last = Some(candidate);
        }

        let Some(base) = last else {
            return Err(AssetgenError::naming_conflict("", path));
        };

        for tiebreak in 2..=self.tiebreak_limit {
            let candidate = format!("{base}{tiebreak}");
            if self.reserve(candidate.clone()) {
                debug!(%base, %candidate, %path, "Resolved name collision with tiebreaker");
                return Ok(candidate);
            }
        }

        Err(AssetgenError::naming_conflict(base, path))
    }
}

/// Class names assigned to directory nodes, keyed by node path.
#[derive(Debug, Clone, Default)]
pub struct ClassNames {
    by_path: HashMap<String, String>,
}

impl ClassNames {
    pub fn get(&self, path: &str) -> Option<&str> {
        self.by_path.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_path.values().map(String::as_str)
    }
}

/// The directory whose children are promoted into the root class.
///
/// A scan root (empty path) holding nothing but one directory is the
/// conventional `assets/` layout, so that directory is merged. Any other node
/// passed as root is itself the merged directory.
pub fn merged_directory(root: &AssetNode) -> &AssetNode {
    match root.children.as_slice() {
        [only] if root.path.is_empty() && only.is_directory() => only,
        _ => root,
    }
}

/// Assigns one class name per directory below `top` (which itself gets none).
///
/// `reserved` names (root class, helper classes) are treated as taken.
pub fn assign_class_names(
    top: &AssetNode,
    config: &NamingConfig,
    reserved: &[&str],
) -> Result<ClassNames> {
    assign_class_names_with_limit(top, config, reserved, DEFAULT_TIEBREAK_LIMIT)
}

/// [`assign_class_names`] with an explicit tiebreak limit.
pub fn assign_class_names_with_limit(
    top: &AssetNode,
    config: &NamingConfig,
    reserved: &[&str],
    tiebreak_limit: usize,
) -> Result<ClassNames> {
    let mut registry = NameRegistry::with_limit(tiebreak_limit);
    for name in reserved {
        registry.reserve(*name);
    }

    let mut namer = ClassNamer {
        prefix: class_prefix(config),
        fully_qualified: config.naming_style.qualifies_fully(),
        registry,
        names: ClassNames::default(),
    };
    let mut tokens = Vec::new();
    namer.visit(top, &mut tokens)?;

    debug!(count = namer.names.len(), "Assigned directory class names");
    Ok(namer.names)
}

/// `$` + optional package token + root class token.
fn class_prefix(config: &NamingConfig) -> String {
    let package = config
        .prefix_with_package
        .then(|| config.package_name.as_deref())
        .flatten()
        .and_then(|pkg| sanitize(pkg, IdentCase::UpperCamel))
        .unwrap_or_default();
    let root = sanitize_or_placeholder(&config.root_class_name(), IdentCase::UpperCamel, 0);

    // Sanitized tokens may already carry the escape marker.
    format!("${}{}", package, root).replace("$$", "$")
}

struct ClassNamer {
    prefix: String,
    fully_qualified: bool,
    registry: NameRegistry,
    names: ClassNames,
}

impl ClassNamer {
    fn visit(&mut self, node: &AssetNode, tokens: &mut Vec<String>) -> Result<()> {
        for (index, child) in node.children.iter().enumerate() {
            if !child.is_directory() {
                continue;
            }

            let token = sanitize_or_placeholder(&child.name, IdentCase::UpperCamel, index + 1);
            tokens.push(token.trim_start_matches('$').to_string());

            let candidates = self.candidates(tokens);
            let name = self.registry.claim(candidates, &child.path)?;
            trace!(path = %child.path, %name, "Directory class");
            self.names.by_path.insert(child.path.clone(), name);

            self.visit(child, tokens)?;
            tokens.pop();
        }
        Ok(())
    }

    /// Leaf-first candidates, each prepending one more ancestor token.
    fn candidates(&self, tokens: &[String]) -> Vec<String> {
        let depth = tokens.len();
        let start = if self.fully_qualified { depth } else { 1 };
        (start..=depth)
            .map(|take| {
                format!(
                    "{}{}{}",
                    self.prefix,
                    tokens[depth - take..].concat(),
                    CLASS_SUFFIX
                )
            })
            .collect()
    }
}

/// Member names for one class body.
pub struct MemberNamer {
    case: IdentCase,
    registry: NameRegistry,
}

impl MemberNamer {
    /// `class_name` is reserved: Dart forbids members named like their class.
    pub fn new(case: IdentCase, class_name: &str) -> Self {
        let mut registry = NameRegistry::new();
        registry.reserve(class_name);
        Self { case, registry }
    }

    /// Files try their stem first, then the full file name; directories use
    /// their name. `position` is the 1-based sibling index for placeholders.
    pub fn member_name(&mut self, node: &AssetNode, position: usize) -> Result<String> {
        let mut candidates: Vec<String> = Vec::with_capacity(2);
        for raw in [node.stem(), node.name.as_str()] {
            if let Some(name) = sanitize(raw, self.case)
                && !candidates.contains(&name)
            {
                candidates.push(name);
            }
        }
        if candidates.is_empty() {
            candidates.push(placeholder(self.case, position));
        }

        self.registry.claim(candidates, &node.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dartgen::config::NamingStyle;
    use crate::types::MediaKind;

    fn names_for(tree: &AssetNode, config: &NamingConfig) -> ClassNames {
        assign_class_names(merged_directory(tree), config, &[]).unwrap()
    }

    #[test]
    fn test_claim_prefers_earlier_candidates() {
        let mut registry = NameRegistry::new();
        let first = registry
            .claim(vec!["icons".to_string(), "iconsPng".to_string()], "a")
            .unwrap();
        let second = registry
            .claim(vec!["icons".to_string(), "iconsPng".to_string()], "b")
            .unwrap();
        let third = registry
            .claim(vec!["icons".to_string(), "iconsPng".to_string()], "c")
            .unwrap();
        assert_eq!(first, "icons");
        assert_eq!(second, "iconsPng");
        assert_eq!(third, "iconsPng2");
    }

    #[test]
    fn test_claim_exhausted_tiebreak_is_a_naming_conflict() {
        let mut registry = NameRegistry::with_limit(3);
        for path in ["a", "b", "c"] {
            registry.claim(vec!["x".to_string()], path).unwrap();
        }
        let err = registry.claim(vec!["x".to_string()], "d").unwrap_err();
        assert!(matches!(
            err,
            AssetgenError::NamingConflict { ref candidate, ref path } if candidate == "x" && path == "d"
        ));
    }

    #[test]
    fn test_merged_directory_detection() {
        let tree = AssetNode::from_files([("assets/a.png", MediaKind::Image)]);
        assert_eq!(merged_directory(&tree).path, "assets");

        let two_roots = AssetNode::from_files([
            ("assets/a.png", MediaKind::Image),
            ("images/b.png", MediaKind::Image),
        ]);
        assert_eq!(merged_directory(&two_roots).path, "");

        let direct = AssetNode::directory("assets", "assets")
            .with_child(AssetNode::directory("image", "assets/image"));
        assert_eq!(merged_directory(&direct).path, "assets");
    }

    #[test]
    fn test_robust_names_are_path_qualified() {
        let tree = AssetNode::from_files([
            ("assets/image/icons/a.png", MediaKind::Image),
            ("assets/svg/b.svg", MediaKind::VectorGraphic),
        ]);
        let names = names_for(&tree, &NamingConfig::default());
        assert_eq!(names.get("assets/image"), Some("$AssetsImageGen"));
        assert_eq!(names.get("assets/image/icons"), Some("$AssetsImageIconsGen"));
        assert_eq!(names.get("assets/svg"), Some("$AssetsSvgGen"));
        assert_eq!(names.get("assets"), None);
    }

    #[test]
    fn test_flat_style_qualifies_only_on_collision() {
        let tree = AssetNode::from_files([
            ("assets/image/icons/a.png", MediaKind::Image),
            ("assets/svg/icons/b.svg", MediaKind::VectorGraphic),
        ]);
        let config = NamingConfig::default().with_style(NamingStyle::CamelCase);
        let names = names_for(&tree, &config);
        assert_eq!(names.get("assets/image/icons"), Some("$AssetsIconsGen"));
        assert_eq!(names.get("assets/svg/icons"), Some("$AssetsSvgIconsGen"));
    }

    #[test]
    fn test_identical_sanitized_siblings_get_tiebreaker() {
        let tree = AssetNode::from_files([
            ("assets/my-dir/a.png", MediaKind::Image),
            ("assets/my_dir/b.png", MediaKind::Image),
            ("assets/my dir/c.png", MediaKind::Image),
        ]);
        let names = names_for(&tree, &NamingConfig::default());
        assert_eq!(names.get("assets/my-dir"), Some("$AssetsMyDirGen"));
        assert_eq!(names.get("assets/my_dir"), Some("$AssetsMyDirGen2"));
        assert_eq!(names.get("assets/my dir"), Some("$AssetsMyDirGen3"));
    }

    #[test]
    fn test_package_prefix() {
        let tree = AssetNode::from_files([("assets/image/a.png", MediaKind::Image)]);
        let config = NamingConfig::default().with_package("test_app");
        let names = names_for(&tree, &config);
        assert_eq!(names.get("assets/image"), Some("$TestAppAssetsImageGen"));
    }

    #[test]
    fn test_package_prefix_ignored_without_flag() {
        let tree = AssetNode::from_files([("assets/image/a.png", MediaKind::Image)]);
        let mut config = NamingConfig::default();
        config.package_name = Some("test_app".to_string());
        let names = names_for(&tree, &config);
        assert_eq!(names.get("assets/image"), Some("$AssetsImageGen"));
    }

    #[test]
    fn test_member_names_qualify_with_extension() {
        let mut namer = MemberNamer::new(IdentCase::LowerCamel, "Assets");
        let png = AssetNode::file("logo.png", "assets/logo.png", MediaKind::Image);
        let svg = AssetNode::file("logo.svg", "assets/logo.svg", MediaKind::VectorGraphic);
        let dir = AssetNode::directory("logo", "assets/logo");
        assert_eq!(namer.member_name(&png, 1).unwrap(), "logo");
        assert_eq!(namer.member_name(&svg, 2).unwrap(), "logoSvg");
        assert_eq!(namer.member_name(&dir, 3).unwrap(), "logo2");
    }

    #[test]
    fn test_member_placeholder_for_unusable_names() {
        let mut namer = MemberNamer::new(IdentCase::Snake, "Assets");
        let node = AssetNode::file("日本.png", "assets/日本.png", MediaKind::Image);
        assert_eq!(namer.member_name(&node, 4).unwrap(), "png");
        let node = AssetNode::file("日本", "assets/日本", MediaKind::Unrecognized);
        assert_eq!(namer.member_name(&node, 5).unwrap(), "asset5");
    }
}
