//! Maps a file's [`MediaKind`] to the expression emitted for its member.

use crate::types::{Capability, MediaKind};
use strum::{Display, EnumIter};

/// Helper class wrapping an asset path with kind-specific widget builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum WrapperClass {
    #[strum(to_string = "AssetGenImage")]
    Image,
    #[strum(to_string = "SvgGenImage")]
    Svg,
    #[strum(to_string = "LottieGenImage")]
    Lottie,
    #[strum(to_string = "RiveGenImage")]
    Rive,
}

impl WrapperClass {
    pub const fn class_name(self) -> &'static str {
        match self {
            WrapperClass::Image => "AssetGenImage",
            WrapperClass::Svg => "SvgGenImage",
            WrapperClass::Lottie => "LottieGenImage",
            WrapperClass::Rive => "RiveGenImage",
        }
    }
}

/// How a file member is typed and initialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStrategy {
    /// `String` holding the asset path.
    PlainPath,
    /// `Wrapper('path')`.
    Wrapper(WrapperClass),
}

impl ValueStrategy {
    pub fn dart_type(self) -> &'static str {
        match self {
            ValueStrategy::PlainPath => "String",
            ValueStrategy::Wrapper(wrapper) => wrapper.class_name(),
        }
    }

    /// The initialiser for `literal`, an already quoted Dart string.
    pub fn expression(self, literal: &str) -> String {
        match self {
            ValueStrategy::PlainPath => literal.to_string(),
            ValueStrategy::Wrapper(wrapper) => format!("{}({})", wrapper.class_name(), literal),
        }
    }

    pub fn is_const_constructor(self) -> bool {
        matches!(self, ValueStrategy::Wrapper(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub strategy: ValueStrategy,
    pub capability: Option<Capability>,
}

/// Static lookup, total over [`MediaKind`].
///
/// `Directory` never reaches this in practice; it resolves like an
/// unrecognized file so the table stays exhaustive.
pub const fn resolve(kind: MediaKind) -> Resolution {
    match kind {
        MediaKind::Image => Resolution {
            strategy: ValueStrategy::Wrapper(WrapperClass::Image),
            capability: None,
        },
        MediaKind::VectorGraphic => Resolution {
            strategy: ValueStrategy::Wrapper(WrapperClass::Svg),
            capability: Some(Capability::VectorGraphics),
        },
        MediaKind::Animation => Resolution {
            strategy: ValueStrategy::Wrapper(WrapperClass::Lottie),
            capability: Some(Capability::Animation),
        },
        MediaKind::Rive => Resolution {
            strategy: ValueStrategy::Wrapper(WrapperClass::Rive),
            capability: Some(Capability::Rive),
        },
        MediaKind::Directory | MediaKind::Unrecognized => Resolution {
            strategy: ValueStrategy::PlainPath,
            capability: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_unrecognized_degrades_to_plain_path() {
        let resolution = resolve(MediaKind::Unrecognized);
        assert_eq!(resolution.strategy, ValueStrategy::PlainPath);
        assert_eq!(resolution.capability, None);
        assert_eq!(resolution.strategy.expression("'a.txt'"), "'a.txt'");
        assert_eq!(resolution.strategy.dart_type(), "String");
    }

    #[test]
    fn test_wrapper_expressions() {
        let svg = resolve(MediaKind::VectorGraphic);
        assert_eq!(svg.capability, Some(Capability::VectorGraphics));
        assert_eq!(svg.strategy.expression("'a.svg'"), "SvgGenImage('a.svg')");

        let lottie = resolve(MediaKind::Animation);
        assert_eq!(lottie.capability, Some(Capability::Animation));
        assert_eq!(lottie.strategy.dart_type(), "LottieGenImage");

        let image = resolve(MediaKind::Image);
        assert_eq!(image.capability, None);
        assert_eq!(image.strategy.dart_type(), "AssetGenImage");
    }

    #[test]
    fn test_every_capability_has_a_kind() {
        let required: Vec<Capability> =
            MediaKind::iter().filter_map(|k| resolve(k).capability).collect();
        for capability in Capability::iter() {
            assert!(required.contains(&capability), "{capability} unreachable");
        }
    }

    #[test]
    fn test_display_matches_class_name() {
        for wrapper in WrapperClass::iter() {
            assert_eq!(wrapper.to_string(), wrapper.class_name());
        }
    }
}
