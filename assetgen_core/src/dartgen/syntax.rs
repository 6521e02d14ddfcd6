//! Version-gated syntax decisions.
//!
//! Each decision point is a [`VersionTable`]: the variant used for old
//! targets plus ascending `(since, variant)` steps. Selection takes the last
//! step whose threshold does not exceed the target.

use crate::types::TargetVersion;

/// Variant table for one decision point. `steps` must be ascending by version.
#[derive(Debug, Clone, Copy)]
pub struct VersionTable<T: 'static> {
    pub oldest: T,
    pub steps: &'static [(TargetVersion, T)],
}

impl<T: Copy + 'static> VersionTable<T> {
    pub fn select(&self, target: TargetVersion) -> T {
        self.steps
            .iter()
            .take_while(|(since, _)| *since <= target)
            .last()
            .map(|(_, variant)| *variant)
            .unwrap_or(self.oldest)
    }
}

/// Keyword in front of every generated `class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassModifier {
    Plain,
    /// Dart 3 class modifiers, available from Flutter 3.10.
    Final,
}

impl ClassModifier {
    pub fn keyword(self) -> &'static str {
        match self {
            ClassModifier::Plain => "class",
            ClassModifier::Final => "final class",
        }
    }
}

/// Tint parameter of `SvgGenImage.svg`. flutter_svg 2 (Flutter 3.7+)
/// replaced `color` with `colorFilter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgTint {
    Color,
    ColorFilter,
}

/// Whether wrapper classes carry the asset's `flavors` (Flutter 3.16+).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFlavors {
    Unsupported,
    Supported,
}

/// Default `filterQuality` of `AssetGenImage.image`, following the
/// framework default of `Image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterQualityDefault {
    Low,
    Medium,
}

impl FilterQualityDefault {
    pub fn dart(self) -> &'static str {
        match self {
            FilterQualityDefault::Low => "FilterQuality.low",
            FilterQualityDefault::Medium => "FilterQuality.medium",
        }
    }
}

pub const CLASS_MODIFIER: VersionTable<ClassModifier> = VersionTable {
    oldest: ClassModifier::Plain,
    steps: &[(TargetVersion::new(3, 10, 0), ClassModifier::Final)],
};

pub const SVG_TINT: VersionTable<SvgTint> = VersionTable {
    oldest: SvgTint::Color,
    steps: &[(TargetVersion::new(3, 7, 0), SvgTint::ColorFilter)],
};

pub const ASSET_FLAVORS: VersionTable<AssetFlavors> = VersionTable {
    oldest: AssetFlavors::Unsupported,
    steps: &[(TargetVersion::new(3, 16, 0), AssetFlavors::Supported)],
};

pub const FILTER_QUALITY: VersionTable<FilterQualityDefault> = VersionTable {
    oldest: FilterQualityDefault::Low,
    steps: &[(TargetVersion::new(3, 24, 0), FilterQualityDefault::Medium)],
};

/// Every decision resolved for one target version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxProfile {
    pub class_modifier: ClassModifier,
    pub svg_tint: SvgTint,
    pub flavors: AssetFlavors,
    pub filter_quality: FilterQualityDefault,
}

impl SyntaxProfile {
    pub fn for_version(target: TargetVersion) -> Self {
        Self {
            class_modifier: CLASS_MODIFIER.select(target),
            svg_tint: SVG_TINT.select(target),
            flavors: ASSET_FLAVORS.select(target),
            filter_quality: FILTER_QUALITY.select(target),
        }
    }
}
