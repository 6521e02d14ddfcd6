use crate::types::{Capability, CapabilityFlags};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;

/// Imported by every generated file.
pub const CORE_IMPORTS: &[&str] = &[
    "import 'package:flutter/services.dart';",
    "import 'package:flutter/widgets.dart';",
];

/// Core imports plus one import per enabled capability, deduplicated and
/// sorted lexicographically.
///
/// Only `flags` decide; the tree is not consulted.
pub fn collect_imports(flags: &CapabilityFlags) -> Vec<String> {
    let imports: BTreeSet<&str> = CORE_IMPORTS
        .iter()
        .copied()
        .chain(
            Capability::iter()
                .filter(|capability| flags.is_enabled(*capability))
                .map(Capability::import),
        )
        .collect();

    imports.into_iter().map(String::from).collect()
}
