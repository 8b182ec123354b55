//! Icon size table and fill palette.

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

use super::Colour;

/// Pixel dimensions required for an iOS app icon set, in output order.
pub const IOS_ICON_DIMENSIONS: [u32; 13] =
    [20, 29, 40, 58, 60, 76, 80, 87, 120, 152, 167, 180, 1024];

/// One required output size: a label used in the file name and a square
/// pixel dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIconSpec")]
pub struct IconSpec {
    label: String,
    dimension: u32,
}

/// Unvalidated form used while deserializing config files.
#[derive(Deserialize)]
struct RawIconSpec {
    label: String,
    dimension: u32,
}

impl TryFrom<RawIconSpec> for IconSpec {
    type Error = IconError;

    fn try_from(raw: RawIconSpec) -> Result<Self> {
        Self::new(raw.label, raw.dimension)
    }
}

impl IconSpec {
    /// Create a spec, rejecting an empty label or a zero dimension.
    pub fn new(label: impl Into<String>, dimension: u32) -> Result<Self> {
        let label = label.into();

        if label.trim().is_empty() {
            return Err(IconError::Config {
                message: format!("Icon size {} has an empty label", dimension),
                help: Some("Labels appear in file names, e.g. \"20\" -> AppIcon-20x20.png".to_string()),
            });
        }

        if dimension == 0 {
            return Err(IconError::Config {
                message: format!("Icon '{}' has a zero dimension", label),
                help: Some("Dimensions are positive pixel sizes".to_string()),
            });
        }

        Ok(Self { label, dimension })
    }

    /// Spec whose label is the decimal dimension.
    fn from_dimension(dimension: u32) -> Self {
        Self {
            label: dimension.to_string(),
            dimension,
        }
    }

    /// The full iOS table: 20 through 1024 pixels.
    pub fn ios_defaults() -> Vec<Self> {
        IOS_ICON_DIMENSIONS
            .iter()
            .map(|&d| Self::from_dimension(d))
            .collect()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Output file name, e.g. `AppIcon-20x20.png`.
    pub fn file_name(&self) -> String {
        format!("AppIcon-{0}x{0}.png", self.label)
    }
}

/// The three fill colours of the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconPalette {
    pub background: Colour,
    pub heart: Colour,
    pub drop: Colour,
}

impl Default for IconPalette {
    fn default() -> Self {
        Self {
            background: Colour::ICON_BLUE,
            heart: Colour::WHITE,
            drop: Colour::ICON_RED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ios_defaults_order() {
        let dims: Vec<u32> = IconSpec::ios_defaults()
            .iter()
            .map(IconSpec::dimension)
            .collect();
        assert_eq!(dims, IOS_ICON_DIMENSIONS.to_vec());
    }

    #[test]
    fn test_file_names() {
        let names: Vec<String> = IconSpec::ios_defaults()
            .iter()
            .map(IconSpec::file_name)
            .collect();

        insta::assert_snapshot!(names.join("\n"), @r"
        AppIcon-20x20.png
        AppIcon-29x29.png
        AppIcon-40x40.png
        AppIcon-58x58.png
        AppIcon-60x60.png
        AppIcon-76x76.png
        AppIcon-80x80.png
        AppIcon-87x87.png
        AppIcon-120x120.png
        AppIcon-152x152.png
        AppIcon-167x167.png
        AppIcon-180x180.png
        AppIcon-1024x1024.png
        ");
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            IconSpec::new("0", 0),
            Err(IconError::Config { .. })
        ));
    }

    #[test]
    fn test_new_rejects_empty_label() {
        assert!(IconSpec::new("  ", 20).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let spec: IconSpec = serde_yaml::from_str("{ label: mac, dimension: 512 }").unwrap();
        assert_eq!(spec.label(), "mac");
        assert_eq!(spec.dimension(), 512);
        assert_eq!(spec.file_name(), "AppIcon-macxmac.png");

        assert!(serde_yaml::from_str::<IconSpec>("{ label: bad, dimension: 0 }").is_err());
    }

    #[test]
    fn test_default_palette() {
        let palette = IconPalette::default();
        assert_eq!(palette.background, Colour::ICON_BLUE);
        assert_eq!(palette.heart, Colour::WHITE);
        assert_eq!(palette.drop, Colour::ICON_RED);
    }
}
