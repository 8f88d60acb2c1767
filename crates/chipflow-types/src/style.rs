//! Per-section styling: header height, insets, and row/column spacing.

use serde::{Deserialize, Serialize};

use crate::geometry::Insets;

/// Geometry parameters shared by every item of one section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionStyle {
    /// Height of the section header. The header always spans the full
    /// content width.
    pub header_height: f32,
    /// Margins around the item area.
    pub insets: Insets,
    /// Vertical gap between wrapped rows.
    pub row_spacing: f32,
    /// Horizontal gap after each item. Also counted in the wrap test.
    pub column_spacing: f32,
}

impl SectionStyle {
    pub fn with_header_height(mut self, header_height: f32) -> Self {
        self.header_height = header_height;
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_spacing(mut self, row_spacing: f32, column_spacing: f32) -> Self {
        self.row_spacing = row_spacing;
        self.column_spacing = column_spacing;
        self
    }
}
