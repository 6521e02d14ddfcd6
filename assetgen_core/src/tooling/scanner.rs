//! Filesystem scanner producing the [`AssetNode`] tree.

use crate::error::{AssetgenError, Result};
use crate::types::{AssetNode, MediaKind};
use serde::Serialize;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Scans `scan_root/assets_dir` and returns a tree rooted at the scan root
/// (empty path) whose only child is the assets directory.
///
/// Entries are sorted by file name and hidden entries (leading `.`) are
/// skipped, so the same directory always yields the same tree.
pub fn scan_assets(scan_root: &Path, assets_dir: &str) -> Result<AssetNode> {
    let assets_dir = assets_dir.trim_matches('/');
    let assets_path = scan_root.join(assets_dir);
    if !assets_path.is_dir() {
        return Err(AssetgenError::scan(
            &assets_path,
            "assets directory does not exist",
        ));
    }
    debug!("Scanning assets in {:?}", assets_path);

    let name = assets_dir.rsplit('/').next().unwrap_or(assets_dir);
    let mut assets = AssetNode::directory(name, assets_dir);

    let walker = WalkDir::new(&assets_path)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry));

    for entry in walker {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(&assets_path)
            .map_err(|e| AssetgenError::scan(entry.path(), e.to_string()))?;

        let segments: Vec<String> = relative
            .components()
            .map(|c| {
                let segment = c.as_os_str().to_string_lossy();
                if matches!(segment, std::borrow::Cow::Owned(_)) {
                    warn!("Non UTF-8 path segment in {:?}, using lossy name", entry.path());
                }
                segment.into_owned()
            })
            .collect();
        let Some((leaf, parents)) = segments.split_last() else {
            continue;
        };

        let mut current = &mut assets;
        for parent in parents {
            current = current
                .children
                .iter_mut()
                .find(|c| c.is_directory() && c.name == *parent)
                .ok_or_else(|| AssetgenError::scan(entry.path(), "parent directory not scanned"))?;
        }

        let path = format!("{}/{}", current.path, leaf);
        let node = if entry.file_type().is_dir() {
            AssetNode::directory(leaf.as_str(), path)
        } else {
            AssetNode::file(leaf.as_str(), path, MediaKind::from_file_name(leaf))
        };
        trace!(path = %node.path, kind = %node.kind, "Scanned");
        current.push(node);
    }

    let mut root = AssetNode::directory("", "");
    root.push(assets);

    debug!(stats = ?TreeStats::of(&root), "Scan complete");
    Ok(root)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Node counts of a scanned tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    /// Directories below the scan root.
    pub directories: usize,
    pub files: usize,
    /// File count per kind, in declaration order, omitting zero entries.
    pub kinds: Vec<(MediaKind, usize)>,
}

impl TreeStats {
    pub fn of(tree: &AssetNode) -> Self {
        let mut directories = 0;
        let mut files = 0;
        let mut counts = vec![0usize; MediaKind::iter().count()];

        for node in tree.walk().filter(|node| !node.path.is_empty()) {
            if node.is_directory() {
                directories += 1;
                continue;
            }
            files += 1;
            if let Some(index) = MediaKind::iter().position(|kind| kind == node.kind) {
                counts[index] += 1;
            }
        }

        let kinds = MediaKind::iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .collect();
        Self {
            directories,
            files,
            kinds,
        }
    }
}
