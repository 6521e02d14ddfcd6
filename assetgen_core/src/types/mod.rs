//! Tree model consumed by the Dart generator.
//!
//! An [`AssetNode`] owns its children outright; there are no parent links.
//! Anything that needs ancestry (class naming, for instance) carries the
//! path segments down the recursion instead.

mod capability;
mod version;

pub use capability::{Capability, CapabilityFlags};
pub use version::TargetVersion;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Classification of a node in the asset tree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MediaKind {
    Directory,
    /// Raster images Flutter can decode (`png`, `jpg`, `webp`, ...).
    Image,
    /// `svg` files rendered through flutter_svg.
    VectorGraphic,
    /// Lottie `json` animations.
    Animation,
    /// Rive `riv` state machines.
    Rive,
    /// Anything else. Exposed as a plain path string.
    Unrecognized,
}

impl MediaKind {
    /// Classifies a file by its extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
            _ => return MediaKind::Unrecognized,
        };

        match extension.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "wbmp" => MediaKind::Image,
            "svg" => MediaKind::VectorGraphic,
            "json" => MediaKind::Animation,
            "riv" => MediaKind::Rive,
            _ => MediaKind::Unrecognized,
        }
    }
}

/// One file or directory of the scanned asset tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetNode {
    /// Raw path segment, e.g. `test.png`.
    pub name: String,
    /// Slash-delimited path from the tree root, e.g. `assets/image/test.png`.
    pub path: String,
    pub kind: MediaKind,
    #[serde(default)]
    pub children: Vec<AssetNode>,
}

impl AssetNode {
    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: MediaKind::Directory,
            children: Vec::new(),
        }
    }

    pub fn file(name: impl Into<String>, path: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
            children: Vec::new(),
        }
    }

    /// Builder-style variant of [`AssetNode::push`].
    pub fn with_child(mut self, child: AssetNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: AssetNode) {
        self.children.push(child);
    }

    pub fn is_directory(&self) -> bool {
        self.kind == MediaKind::Directory
    }

    /// File name without its last extension. Dot-files keep their full name.
    pub fn stem(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() && !self.is_directory() => stem,
            _ => &self.name,
        }
    }

    pub fn extension(&self) -> Option<&str> {
        if self.is_directory() {
            return None;
        }
        match self.name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => Some(ext),
            _ => None,
        }
    }

    /// Non-empty segments of [`AssetNode::path`].
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|s| !s.is_empty())
    }

    /// Pre-order, depth-first traversal including `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Builds a tree from `(relative path, kind)` pairs, creating the
    /// intermediate directories on the way. Children keep insertion order.
    pub fn from_files<'a, I>(files: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, MediaKind)>,
    {
        let mut root = AssetNode::directory("", "");
        for (path, kind) in files {
            let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
            let Some((file_name, dirs)) = segments.split_last() else {
                continue;
            };

            let mut current = &mut root;
            let mut prefix = String::new();
            for dir in dirs {
                if !prefix.is_empty() {
                    prefix.push('/');
                }
                prefix.push_str(dir);

                let index = match current
                    .children
                    .iter()
                    .position(|c| c.is_directory() && c.name == *dir)
                {
                    Some(index) => index,
                    None => {
                        current.push(AssetNode::directory(*dir, prefix.clone()));
                        current.children.len() - 1
                    }
                };
                current = &mut current.children[index];
            }

            current.push(AssetNode::file(*file_name, segments.join("/"), kind));
        }
        root
    }
}

/// Iterator returned by [`AssetNode::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a AssetNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a AssetNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(MediaKind::from_file_name("logo.PNG"), MediaKind::Image);
        assert_eq!(MediaKind::from_file_name("photo.jpeg"), MediaKind::Image);
        assert_eq!(MediaKind::from_file_name("icon.svg"), MediaKind::VectorGraphic);
        assert_eq!(MediaKind::from_file_name("intro.json"), MediaKind::Animation);
        assert_eq!(MediaKind::from_file_name("bird.riv"), MediaKind::Rive);
        assert_eq!(MediaKind::from_file_name("notes.txt"), MediaKind::Unrecognized);
        assert_eq!(MediaKind::from_file_name("Makefile"), MediaKind::Unrecognized);
        assert_eq!(MediaKind::from_file_name(".png"), MediaKind::Unrecognized);
    }

    #[test]
    fn test_stem_and_extension() {
        let file = AssetNode::file("archive.tar.gz", "a/archive.tar.gz", MediaKind::Unrecognized);
        assert_eq!(file.stem(), "archive.tar");
        assert_eq!(file.extension(), Some("gz"));

        let dotfile = AssetNode::file(".keep", "a/.keep", MediaKind::Unrecognized);
        assert_eq!(dotfile.stem(), ".keep");
        assert_eq!(dotfile.extension(), None);

        let dir = AssetNode::directory("v1.2", "v1.2");
        assert_eq!(dir.stem(), "v1.2");
        assert_eq!(dir.extension(), None);
    }

    #[test]
    fn test_from_files_builds_nested_directories() {
        let tree = AssetNode::from_files([
            ("assets/image/a.png", MediaKind::Image),
            ("assets/image/b.png", MediaKind::Image),
            ("assets/svg/c.svg", MediaKind::VectorGraphic),
        ]);

        assert_eq!(tree.children.len(), 1);
        let assets = &tree.children[0];
        assert_eq!(assets.path, "assets");
        assert_eq!(assets.children.len(), 2);
        assert_eq!(assets.children[0].path, "assets/image");
        assert_eq!(assets.children[0].children[1].path, "assets/image/b.png");
        assert_eq!(assets.children[1].children[0].kind, MediaKind::VectorGraphic);
    }

    #[test]
    fn test_walk_is_preorder() {
        let tree = AssetNode::from_files([
            ("a/x/1.png", MediaKind::Image),
            ("a/y.png", MediaKind::Image),
            ("b.png", MediaKind::Image),
        ]);
        let paths: Vec<&str> = tree.walk().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, vec!["", "a", "a/x", "a/x/1.png", "a/y.png", "b.png"]);
    }

    #[test]
    fn test_segments_skip_empty_parts() {
        let node = AssetNode::directory("c", "/a//b/c");
        assert_eq!(node.segments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
