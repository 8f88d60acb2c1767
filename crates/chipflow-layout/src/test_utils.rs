//! Shared builders for chipflow-layout tests.

use chipflow_types::{Insets, SectionSpec, SectionStyle, Size};

/// A section with uniform insets on all four sides.
pub fn section(
    header_height: f32,
    inset: f32,
    row_spacing: f32,
    column_spacing: f32,
    items: Vec<Size>,
) -> SectionSpec {
    SectionSpec::new(
        SectionStyle::default()
            .with_header_height(header_height)
            .with_insets(Insets::uniform(inset))
            .with_spacing(row_spacing, column_spacing),
        items,
    )
}

/// `n` chips of identical size.
pub fn chips(n: usize, width: f32, height: f32) -> Vec<Size> {
    vec![Size::new(width, height); n]
}
