//! Input validation for packing.
//!
//! Negative or non-finite geometry is rejected, never clamped. A rejected
//! input reports the first offending value by section, item, and field.

use chipflow_types::{ChipflowError, Result};

use crate::source::SectionSource;

fn check(value: f32, what: impl FnOnce() -> String) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChipflowError::InvalidInput(format!(
            "{} must be a finite non-negative number, got {value}",
            what()
        )))
    }
}

/// Check the content width and every value the packer will read.
pub fn validate<S: SectionSource + ?Sized>(source: &S, content_width: f32) -> Result<()> {
    check(content_width, || "content width".to_string())?;

    for section in 0..source.section_count() {
        check(source.header_height_for(section), || {
            format!("section {section} header height")
        })?;
        for (side, value) in source.insets_for(section).sides() {
            check(value, || format!("section {section} {side} inset"))?;
        }
        check(source.row_spacing_for(section), || {
            format!("section {section} row spacing")
        })?;
        check(source.column_spacing_for(section), || {
            format!("section {section} column spacing")
        })?;

        for item in 0..source.item_count(section) {
            let size = source.size_for_item(section, item);
            check(size.width, || format!("section {section} item {item} width"))?;
            check(size.height, || format!("section {section} item {item} height"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{chips, section};
    use chipflow_types::{Insets, SectionSpec, Size};

    fn message(err: ChipflowError) -> String {
        match err {
            ChipflowError::InvalidInput(msg) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn valid_input_passes() {
        let specs = vec![section(20.0, 5.0, 10.0, 10.0, chips(3, 60.0, 40.0))];
        assert!(validate(specs.as_slice(), 150.0).is_ok());
    }

    #[test]
    fn zero_values_are_allowed() {
        let specs = vec![SectionSpec::new(Default::default(), vec![Size::ZERO])];
        assert!(validate(specs.as_slice(), 0.0).is_ok());
    }

    #[test]
    fn negative_width_rejected() {
        let specs: Vec<SectionSpec> = Vec::new();
        let msg = message(validate(specs.as_slice(), -1.0).unwrap_err());
        assert!(msg.contains("content width"));
    }

    #[test]
    fn nan_width_rejected() {
        let specs: Vec<SectionSpec> = Vec::new();
        assert!(validate(specs.as_slice(), f32::NAN).is_err());
        assert!(validate(specs.as_slice(), f32::INFINITY).is_err());
    }

    #[test]
    fn negative_inset_names_side() {
        let mut spec = section(20.0, 5.0, 10.0, 10.0, chips(1, 10.0, 10.0));
        spec.style.insets = Insets::new(0.0, 0.0, -2.0, 0.0);
        let msg = message(validate(vec![spec].as_slice(), 100.0).unwrap_err());
        assert!(msg.contains("section 0 bottom inset"), "{msg}");
    }

    #[test]
    fn negative_spacing_rejected() {
        let mut spec = section(20.0, 5.0, 10.0, 10.0, Vec::new());
        spec.style.column_spacing = -1.0;
        let msg = message(validate(vec![spec].as_slice(), 100.0).unwrap_err());
        assert!(msg.contains("column spacing"));
    }

    #[test]
    fn negative_item_height_names_item() {
        let specs = vec![
            section(0.0, 0.0, 0.0, 0.0, chips(1, 10.0, 10.0)),
            section(0.0, 0.0, 0.0, 0.0, vec![Size::new(10.0, 10.0), Size::new(5.0, -3.0)]),
        ];
        let msg = message(validate(specs.as_slice(), 100.0).unwrap_err());
        assert!(msg.contains("section 1 item 1 height"), "{msg}");
    }
}
