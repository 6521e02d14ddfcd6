use super::sanitize::{IdentCase, is_valid_identifier, sanitize};
use super::wrappers::is_referenced_type;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Root class name used when the configured one is empty or unusable.
pub const DEFAULT_ROOT_CLASS_NAME: &str = "Assets";

/// How generated class and member names are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NamingStyle {
    /// Classes qualified by the full directory path (`$AssetsImageIconsGen`),
    /// camelCase members.
    #[default]
    Robust,
    /// Leaf-only class names, qualified only on collision; camelCase members.
    CamelCase,
    /// Leaf-only class names, qualified only on collision; snake_case members.
    SnakeCase,
}

impl NamingStyle {
    pub fn qualifies_fully(self) -> bool {
        matches!(self, NamingStyle::Robust)
    }

    pub fn member_case(self) -> IdentCase {
        match self {
            NamingStyle::Robust | NamingStyle::CamelCase => IdentCase::LowerCamel,
            NamingStyle::SnakeCase => IdentCase::Snake,
        }
    }
}

/// Naming options for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamingConfig {
    /// Name of the top-level generated class.
    #[serde(default = "default_root_type_name")]
    pub root_type_name: String,
    #[serde(default)]
    pub naming_style: NamingStyle,
    /// Prefix generated class names with the package name.
    #[serde(default)]
    pub prefix_with_package: bool,
    /// Package used by `prefix_with_package`.
    #[serde(default)]
    pub package_name: Option<String>,
}

fn default_root_type_name() -> String {
    DEFAULT_ROOT_CLASS_NAME.to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            root_type_name: default_root_type_name(),
            naming_style: NamingStyle::default(),
            prefix_with_package: false,
            package_name: None,
        }
    }
}

impl NamingConfig {
    pub fn new(root_type_name: impl Into<String>) -> Self {
        Self {
            root_type_name: root_type_name.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: NamingStyle) -> Self {
        self.naming_style = style;
        self
    }

    /// Sets the package name and turns on package prefixing.
    pub fn with_package(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self.prefix_with_package = true;
        self
    }

    /// The root class name actually emitted.
    ///
    /// Valid identifiers are kept verbatim and anything else is sanitized to
    /// UpperCamelCase. Unusable input, or a name that would shadow a helper
    /// class or a type the output refers to, falls back to
    /// [`DEFAULT_ROOT_CLASS_NAME`].
    pub fn root_class_name(&self) -> String {
        let raw = self.root_type_name.trim();
        let candidate = if is_valid_identifier(raw) {
            Some(raw.to_string())
        } else {
            sanitize(raw, IdentCase::UpperCamel)
                .filter(|name| is_valid_identifier(name))
                .inspect(|name| warn!(configured = %raw, using = %name, "Root class name sanitized"))
        };

        match candidate {
            Some(name) if !is_referenced_type(&name) => name,
            Some(name) => {
                warn!(
                    configured = %raw,
                    shadowed = %name,
                    using = DEFAULT_ROOT_CLASS_NAME,
                    "Root class name clashes with a referenced type, falling back to default"
                );
                DEFAULT_ROOT_CLASS_NAME.to_string()
            }
            None => {
                warn!(
                    configured = %raw,
                    using = DEFAULT_ROOT_CLASS_NAME,
                    "Root class name unusable, falling back to default"
                );
                DEFAULT_ROOT_CLASS_NAME.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_class_name_verbatim_when_valid() {
        assert_eq!(NamingConfig::new("R").root_class_name(), "R");
        assert_eq!(NamingConfig::new("AppAssets").root_class_name(), "AppAssets");
    }

    #[test]
    fn test_root_class_name_sanitized_when_invalid() {
        assert_eq!(NamingConfig::new("app assets").root_class_name(), "AppAssets");
        assert_eq!(NamingConfig::new("my-images").root_class_name(), "MyImages");
    }

    #[test]
    fn test_root_class_name_falls_back() {
        assert_eq!(NamingConfig::new("").root_class_name(), "Assets");
        assert_eq!(NamingConfig::new("   ").root_class_name(), "Assets");
        assert_eq!(NamingConfig::new("???").root_class_name(), "Assets");
    }

    #[test]
    fn test_root_class_name_never_shadows_referenced_types() {
        for name in ["AssetGenImage", "SvgGenImage", "String", "Image", "Key", "int"] {
            assert_eq!(NamingConfig::new(name).root_class_name(), "Assets", "{name}");
        }
        // Sanitized input is checked too.
        assert_eq!(NamingConfig::new("svg picture").root_class_name(), "Assets");
        assert!(!is_referenced_type(DEFAULT_ROOT_CLASS_NAME));
    }

    #[test]
    fn test_style_deserializes_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            style: NamingStyle,
        }
        let parsed: Wrapper = toml::from_str("style = \"camel_case\"").unwrap();
        assert_eq!(parsed.style, NamingStyle::CamelCase);
        let parsed: Wrapper = toml::from_str("style = \"snake_case\"").unwrap();
        assert_eq!(parsed.style, NamingStyle::SnakeCase);
    }

    #[test]
    fn test_member_case_follows_style() {
        assert_eq!(NamingStyle::Robust.member_case(), IdentCase::LowerCamel);
        assert_eq!(NamingStyle::SnakeCase.member_case(), IdentCase::Snake);
        assert!(NamingStyle::Robust.qualifies_fully());
        assert!(!NamingStyle::CamelCase.qualifies_fully());
    }
}
