//! Greedy row-wrapping packer.
//!
//! One forward pass over sections and items with running x/y offsets. A row
//! closes as soon as the next item does not fit; there is no look-ahead, so
//! packing is O(sections + items) and deterministic.

use chipflow_types::{ChipflowError, Rect, Result, Size};

use crate::result::{LayoutResult, Placement};
use crate::source::SectionSource;
use crate::validate::validate;

/// Pack every section of `source` into `content_width`.
///
/// Layout rules, per section:
/// - The header spans the full width at the current y offset.
/// - Items start at the section's left/top inset and flow left to right.
///   Each item advances x by its width plus the column spacing.
/// - An item wraps to a new row when the row already holds an item and
///   `x + width + column_spacing > content_width`. The new row starts at
///   the left inset, one row height plus the row spacing lower. Row height
///   is the tallest item in the row.
/// - After the last row, y advances by that row's height plus the bottom
///   inset. A section without items contributes only its header.
///
/// The right inset is not part of the wrap test.
pub fn compute<S: SectionSource + ?Sized>(source: &S, content_width: f32) -> Result<LayoutResult> {
    validate(source, content_width)?;

    let section_count = source.section_count();
    let mut headers = Vec::with_capacity(section_count);
    let mut items = Vec::new();
    let mut section_starts = Vec::with_capacity(section_count + 1);
    let mut section_bottoms = Vec::with_capacity(section_count);
    let mut y = 0.0f32;

    for section in 0..section_count {
        let header_height = source.header_height_for(section);
        headers.push(Rect::new(0.0, y, content_width, header_height));
        y += header_height;

        section_starts.push(items.len());
        y = pack_items(source, section, content_width, y, &mut items);
        section_bottoms.push(y);
    }
    section_starts.push(items.len());

    Ok(LayoutResult::new(
        content_width,
        headers,
        items,
        section_starts,
        section_bottoms,
    ))
}

/// Lay out the items of one section starting at `top`; returns the y offset
/// where the next section begins.
fn pack_items<S: SectionSource + ?Sized>(
    source: &S,
    section: usize,
    content_width: f32,
    top: f32,
    out: &mut Vec<Rect>,
) -> f32 {
    let count = source.item_count(section);
    if count == 0 {
        return top;
    }

    let insets = source.insets_for(section);
    let row_spacing = source.row_spacing_for(section);
    let column_spacing = source.column_spacing_for(section);

    let mut x = insets.left;
    let mut y = top + insets.top;
    let mut row = Row::default();

    for item in 0..count {
        let Size { width, height } = source.size_for_item(section, item);
        if !row.is_empty() && x + width + column_spacing > content_width {
            x = insets.left;
            y += row.height + row_spacing;
            row = Row::default();
        }
        out.push(Rect::new(x, y, width, height));
        x += width + column_spacing;
        row.push(height);
    }

    y + row.height + insets.bottom
}

/// Running state of the row being filled.
#[derive(Debug, Default)]
struct Row {
    len: usize,
    height: f32,
}

impl Row {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, item_height: f32) {
        self.len += 1;
        self.height = self.height.max(item_height);
    }
}

/// Owns the most recent [`LayoutResult`] and answers queries against it.
///
/// Every successful [`pack`](Self::pack) replaces the stored result
/// wholesale. A failed pack leaves the previous result in place.
#[derive(Debug, Default)]
pub struct FlowPacker {
    result: Option<LayoutResult>,
}

impl FlowPacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute all placements from scratch.
    pub fn pack<S: SectionSource + ?Sized>(
        &mut self,
        source: &S,
        content_width: f32,
    ) -> Result<&LayoutResult> {
        let result = compute(source, content_width).inspect_err(|e| {
            log::warn!("Rejected layout input: {e}");
        })?;
        log::debug!(
            "Packed {} sections, {} items into {}x{}",
            result.section_count(),
            result.item_count(),
            result.content_width(),
            result.content_height(),
        );
        self.result = Some(result);
        self.computed()
    }

    /// The last computed result, if any.
    pub fn result(&self) -> Option<&LayoutResult> {
        self.result.as_ref()
    }

    /// Drop the stored result.
    pub fn clear(&mut self) {
        self.result = None;
    }

    fn computed(&self) -> Result<&LayoutResult> {
        self.result.as_ref().ok_or(ChipflowError::NotComputed)
    }

    pub fn content_size(&self) -> Result<Size> {
        self.computed().map(LayoutResult::content_size)
    }

    pub fn rect_for_item(&self, section: usize, item: usize) -> Result<Rect> {
        self.computed()?.rect_for_item(section, item)
    }

    pub fn rect_for_header(&self, section: usize) -> Result<Rect> {
        self.computed()?.rect_for_header(section)
    }

    /// Headers and items intersecting `query`. Empty before the first pack.
    pub fn rects_intersecting(&self, query: Rect) -> Vec<Placement> {
        self.result
            .as_ref()
            .map(|r| r.rects_intersecting(query))
            .unwrap_or_default()
    }
}
