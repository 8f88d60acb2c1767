//! Layout description files.
//!
//! A layout description lists sections, their styling, and their item sizes,
//! together with the content width to pack into. It is loaded from TOML or
//! JSON. Per-section fields that are left out fall back to the `[defaults]`
//! table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChipflowError, Result};
use crate::geometry::{Insets, Size};
use crate::style::SectionStyle;

/// One section ready for packing: a resolved style plus item sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub style: SectionStyle,
    pub items: Vec<Size>,
}

impl SectionSpec {
    pub fn new(style: SectionStyle, items: Vec<Size>) -> Self {
        Self { style, items }
    }
}

/// A fully resolved layout description.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDescription {
    pub content_width: f32,
    pub sections: Vec<SectionSpec>,
}

/// On-disk shape of a layout description.
#[derive(Debug, Clone, Deserialize)]
struct RawDescription {
    #[serde(default = "default_content_width")]
    content_width: f32,
    #[serde(default)]
    defaults: SectionStyle,
    #[serde(default)]
    sections: Vec<SectionDef>,
}

/// A section entry; every style field is optional.
#[derive(Debug, Clone, Deserialize)]
struct SectionDef {
    header_height: Option<f32>,
    insets: Option<InsetsDef>,
    row_spacing: Option<f32>,
    column_spacing: Option<f32>,
    #[serde(default)]
    items: Vec<Size>,
}

/// Per-side inset overrides.
#[derive(Debug, Clone, Copy, Deserialize)]
struct InsetsDef {
    top: Option<f32>,
    left: Option<f32>,
    bottom: Option<f32>,
    right: Option<f32>,
}

fn default_content_width() -> f32 {
    320.0
}

impl InsetsDef {
    fn resolve(&self, base: Insets) -> Insets {
        Insets {
            top: self.top.unwrap_or(base.top),
            left: self.left.unwrap_or(base.left),
            bottom: self.bottom.unwrap_or(base.bottom),
            right: self.right.unwrap_or(base.right),
        }
    }
}

impl SectionDef {
    fn resolve(self, defaults: &SectionStyle) -> SectionSpec {
        let style = SectionStyle {
            header_height: self.header_height.unwrap_or(defaults.header_height),
            insets: self
                .insets
                .map_or(defaults.insets, |i| i.resolve(defaults.insets)),
            row_spacing: self.row_spacing.unwrap_or(defaults.row_spacing),
            column_spacing: self.column_spacing.unwrap_or(defaults.column_spacing),
        };
        SectionSpec::new(style, self.items)
    }
}

impl From<RawDescription> for LayoutDescription {
    fn from(raw: RawDescription) -> Self {
        let defaults = raw.defaults;
        Self {
            content_width: raw.content_width,
            sections: raw
                .sections
                .into_iter()
                .map(|s| s.resolve(&defaults))
                .collect(),
        }
    }
}

impl LayoutDescription {
    pub fn new(content_width: f32, sections: Vec<SectionSpec>) -> Self {
        Self {
            content_width,
            sections,
        }
    }

    /// Parse a description from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self> {
        let raw: RawDescription =
            toml::from_str(s).map_err(|e| ChipflowError::Config(format!("layout TOML: {e}")))?;
        Ok(raw.into())
    }

    /// Parse a description from a JSON string.
    pub fn from_json(s: &str) -> Result<Self> {
        let raw: RawDescription = serde_json::from_str(s)
            .map_err(|e| ChipflowError::Config(format!("layout JSON: {e}")))?;
        Ok(raw.into())
    }

    /// Load a description from a file, picking the format by extension.
    ///
    /// `.json` files are parsed as JSON; anything else is parsed as TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChipflowError::Config(format!("{}: {e}", path.display())))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let desc = if is_json {
            Self::from_json(&text)
        } else {
            Self::from_toml(&text)
        }
        .map_err(|e| ChipflowError::Config(format!("{}: {e}", path.display())))?;
        log::debug!(
            "Loaded layout {} ({} sections, {} items)",
            path.display(),
            desc.sections.len(),
            desc.item_count(),
        );
        Ok(desc)
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
content_width = 150.0

[defaults]
header_height = 20.0
row_spacing = 10.0
column_spacing = 10.0
insets = { top = 5.0, left = 5.0, bottom = 5.0, right = 5.0 }

[[sections]]
items = [ { width = 60.0, height = 40.0 }, [60.0, 40.0] ]

[[sections]]
header_height = 0.0
insets = { left = 12.0 }
items = [ [30.0, 16.0] ]
"#;

    #[test]
    fn parse_toml_with_defaults() {
        let desc = LayoutDescription::from_toml(SAMPLE).unwrap();
        assert_eq!(desc.content_width, 150.0);
        assert_eq!(desc.sections.len(), 2);
        assert_eq!(desc.item_count(), 3);

        let first = &desc.sections[0];
        assert_eq!(first.style.header_height, 20.0);
        assert_eq!(first.style.insets, Insets::uniform(5.0));
        assert_eq!(first.items[1], Size::new(60.0, 40.0));
    }

    #[test]
    fn section_overrides_merge_per_field() {
        let desc = LayoutDescription::from_toml(SAMPLE).unwrap();
        let second = &desc.sections[1].style;
        assert_eq!(second.header_height, 0.0);
        assert_eq!(second.insets, Insets::new(5.0, 12.0, 5.0, 5.0));
        assert_eq!(second.row_spacing, 10.0);
    }

    #[test]
    fn empty_toml_uses_default_width() {
        let desc = LayoutDescription::from_toml("").unwrap();
        assert_eq!(desc.content_width, 320.0);
        assert!(desc.sections.is_empty());
    }

    #[test]
    fn parse_json() {
        let json = r#"{
            "content_width": 200,
            "sections": [ { "header_height": 12, "items": [[10, 10], {"width": 20, "height": 10}] } ]
        }"#;
        let desc = LayoutDescription::from_json(json).unwrap();
        assert_eq!(desc.content_width, 200.0);
        assert_eq!(desc.sections[0].style.header_height, 12.0);
        assert_eq!(desc.sections[0].items[1], Size::new(20.0, 10.0));
    }

    #[test]
    fn bad_toml_is_config_error() {
        let err = LayoutDescription::from_toml("sections = 3").unwrap_err();
        assert!(matches!(err, ChipflowError::Config(_)));
        assert!(format!("{err}").contains("layout TOML"));
    }

    #[test]
    fn load_from_path_by_extension() {
        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        toml_file.write_all(SAMPLE.as_bytes()).unwrap();
        let desc = LayoutDescription::from_path(toml_file.path()).unwrap();
        assert_eq!(desc.sections.len(), 2);

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json_file
            .write_all(br#"{"content_width": 90, "sections": []}"#)
            .unwrap();
        let desc = LayoutDescription::from_path(json_file.path()).unwrap();
        assert_eq!(desc.content_width, 90.0);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = LayoutDescription::from_path(Path::new("/nonexistent/layout.toml")).unwrap_err();
        assert!(matches!(err, ChipflowError::Config(_)));
    }
}
