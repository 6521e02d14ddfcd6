use super::{AssetNode, MediaKind};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Optional rendering package the generated code may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Capability {
    VectorGraphics,
    Animation,
    Rive,
}

impl Capability {
    /// The Dart import statement that brings the capability's types into scope.
    pub const fn import(self) -> &'static str {
        match self {
            Capability::VectorGraphics => "import 'package:flutter_svg/flutter_svg.dart';",
            Capability::Animation => "import 'package:lottie/lottie.dart';",
            Capability::Rive => "import 'package:rive/rive.dart';",
        }
    }
}

/// Which capability imports the generated file must carry.
///
/// The generator trusts these flags verbatim; it never re-derives them from
/// the tree. Use [`CapabilityFlags::observed_in`] to compute consistent flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityFlags {
    #[serde(default)]
    pub vector_graphics: bool,
    #[serde(default)]
    pub animation: bool,
    #[serde(default)]
    pub rive: bool,
}

impl CapabilityFlags {
    pub const fn all() -> Self {
        Self {
            vector_graphics: true,
            animation: true,
            rive: true,
        }
    }

    pub fn is_enabled(&self, capability: Capability) -> bool {
        match capability {
            Capability::VectorGraphics => self.vector_graphics,
            Capability::Animation => self.animation,
            Capability::Rive => self.rive,
        }
    }

    pub fn set(&mut self, capability: Capability, enabled: bool) {
        match capability {
            Capability::VectorGraphics => self.vector_graphics = enabled,
            Capability::Animation => self.animation = enabled,
            Capability::Rive => self.rive = enabled,
        }
    }

    /// Flags matching the kinds actually present in `tree`.
    pub fn observed_in(tree: &AssetNode) -> Self {
        let mut flags = Self::default();
        for node in tree.walk() {
            match node.kind {
                MediaKind::VectorGraphic => flags.vector_graphics = true,
                MediaKind::Animation => flags.animation = true,
                MediaKind::Rive => flags.rive = true,
                MediaKind::Directory | MediaKind::Image | MediaKind::Unrecognized => {}
            }
        }
        flags
    }
}
