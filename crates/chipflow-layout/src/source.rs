//! The geometry source a packer reads sections and items from.

use chipflow_types::{Insets, LayoutDescription, SectionSpec, Size};

/// Read-only access to section structure and item sizes.
///
/// Every method must be pure: the packer may call them more than once for
/// the same index (validation and packing each walk the whole source) and
/// expects the same answer each time.
pub trait SectionSource {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in `section`.
    fn item_count(&self, section: usize) -> usize;

    fn header_height_for(&self, section: usize) -> f32;

    fn size_for_item(&self, section: usize, item: usize) -> Size;

    fn insets_for(&self, section: usize) -> Insets;

    fn row_spacing_for(&self, section: usize) -> f32;

    fn column_spacing_for(&self, section: usize) -> f32;
}

impl SectionSource for [SectionSpec] {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self[section].items.len()
    }

    fn header_height_for(&self, section: usize) -> f32 {
        self[section].style.header_height
    }

    fn size_for_item(&self, section: usize, item: usize) -> Size {
        self[section].items[item]
    }

    fn insets_for(&self, section: usize) -> Insets {
        self[section].style.insets
    }

    fn row_spacing_for(&self, section: usize) -> f32 {
        self[section].style.row_spacing
    }

    fn column_spacing_for(&self, section: usize) -> f32 {
        self[section].style.column_spacing
    }
}

impl SectionSource for Vec<SectionSpec> {
    fn section_count(&self) -> usize {
        self.as_slice().section_count()
    }

    fn item_count(&self, section: usize) -> usize {
        self.as_slice().item_count(section)
    }

    fn header_height_for(&self, section: usize) -> f32 {
        self.as_slice().header_height_for(section)
    }

    fn size_for_item(&self, section: usize, item: usize) -> Size {
        self.as_slice().size_for_item(section, item)
    }

    fn insets_for(&self, section: usize) -> Insets {
        self.as_slice().insets_for(section)
    }

    fn row_spacing_for(&self, section: usize) -> f32 {
        self.as_slice().row_spacing_for(section)
    }

    fn column_spacing_for(&self, section: usize) -> f32 {
        self.as_slice().column_spacing_for(section)
    }
}

impl SectionSource for LayoutDescription {
    fn section_count(&self) -> usize {
        self.sections.section_count()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections.item_count(section)
    }

    fn header_height_for(&self, section: usize) -> f32 {
        self.sections.header_height_for(section)
    }

    fn size_for_item(&self, section: usize, item: usize) -> Size {
        self.sections.size_for_item(section, item)
    }

    fn insets_for(&self, section: usize) -> Insets {
        self.sections.insets_for(section)
    }

    fn row_spacing_for(&self, section: usize) -> f32 {
        self.sections.row_spacing_for(section)
    }

    fn column_spacing_for(&self, section: usize) -> f32 {
        self.sections.column_spacing_for(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chipflow_types::SectionStyle;

    fn sample() -> Vec<SectionSpec> {
        vec![
            SectionSpec::new(
                SectionStyle::default()
                    .with_header_height(20.0)
                    .with_insets(Insets::uniform(5.0))
                    .with_spacing(10.0, 8.0),
                vec![Size::new(60.0, 40.0), Size::new(30.0, 20.0)],
            ),
            SectionSpec::default(),
        ]
    }

    #[test]
    fn slice_source_reads_specs() {
        let specs = sample();
        let src: &[SectionSpec] = &specs;
        assert_eq!(src.section_count(), 2);
        assert_eq!(src.item_count(0), 2);
        assert_eq!(src.item_count(1), 0);
        assert_eq!(src.header_height_for(0), 20.0);
        assert_eq!(src.size_for_item(0, 1), Size::new(30.0, 20.0));
        assert_eq!(src.insets_for(0), Insets::uniform(5.0));
        assert_eq!(src.row_spacing_for(0), 10.0);
        assert_eq!(src.column_spacing_for(0), 8.0);
    }

    #[test]
    fn description_source_delegates_to_sections() {
        let desc = LayoutDescription::new(150.0, sample());
        assert_eq!(desc.section_count(), 2);
        assert_eq!(desc.size_for_item(0, 0), Size::new(60.0, 40.0));
        assert_eq!(desc.column_spacing_for(1), 0.0);
    }
}
