//! Computed placements and the queries a host runs against them.

use chipflow_types::{ChipflowError, Rect, Result, Size};

/// What a placed rect belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Header { section: usize },
    Item { section: usize, item: usize },
}

impl Role {
    /// Section index this placement belongs to.
    pub fn section(&self) -> usize {
        match *self {
            Self::Header { section } | Self::Item { section, .. } => section,
        }
    }
}

/// A rect tagged with its role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub role: Role,
    pub rect: Rect,
}

/// Output of one packing pass.
///
/// Item rects live in one flat vector. `section_starts[s]` is the flat index
/// of item 0 of section `s`, and `section_starts[section_count]` is the total
/// item count.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    content_width: f32,
    content_height: f32,
    headers: Vec<Rect>,
    items: Vec<Rect>,
    section_starts: Vec<usize>,
    section_bottoms: Vec<f32>,
}

impl LayoutResult {
    pub(crate) fn new(
        content_width: f32,
        headers: Vec<Rect>,
        items: Vec<Rect>,
        section_starts: Vec<usize>,
        section_bottoms: Vec<f32>,
    ) -> Self {
        debug_assert_eq!(section_starts.len(), headers.len() + 1);
        debug_assert_eq!(section_bottoms.len(), headers.len());
        let content_height = section_bottoms.last().copied().unwrap_or(0.0);
        Self {
            content_width,
            content_height,
            headers,
            items,
            section_starts,
            section_bottoms,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Total height consumed by all sections.
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn content_size(&self) -> Size {
        Size::new(self.content_width, self.content_height)
    }

    /// Smallest rect covering the content area and every placement.
    ///
    /// Usually `(0, 0, content_width, content_height)`, but a left inset at or
    /// past the content width, or an oversized chip, pushes items beyond the
    /// content width, and the bounds grow to include them.
    pub fn content_bounds(&self) -> Rect {
        let area = Rect::new(0.0, 0.0, self.content_width, self.content_height);
        self.items.iter().fold(area, |bounds, rect| bounds.union(rect))
    }

    pub fn section_count(&self) -> usize {
        self.headers.len()
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Number of items in `section`.
    pub fn items_in_section(&self, section: usize) -> Result<usize> {
        if section >= self.section_count() {
            return Err(ChipflowError::header_out_of_range(section));
        }
        Ok(self.section_starts[section + 1] - self.section_starts[section])
    }

    pub fn rect_for_header(&self, section: usize) -> Result<Rect> {
        self.headers
            .get(section)
            .copied()
            .ok_or_else(|| ChipflowError::header_out_of_range(section))
    }

    pub fn rect_for_item(&self, section: usize, item: usize) -> Result<Rect> {
        let out_of_range = || ChipflowError::item_out_of_range(section, item);
        let start = *self.section_starts.get(section).ok_or_else(out_of_range)?;
        let end = *self.section_starts.get(section + 1).ok_or_else(out_of_range)?;
        let flat = start + item;
        if flat >= end {
            return Err(out_of_range());
        }
        Ok(self.items[flat])
    }

    /// Content height after `section` has been laid out.
    pub fn height_after_section(&self, section: usize) -> Result<f32> {
        self.section_bottoms
            .get(section)
            .copied()
            .ok_or_else(|| ChipflowError::header_out_of_range(section))
    }

    /// Vertical extent of a section as `(top, bottom)`: from the top of its
    /// header to the end of its bottom inset.
    pub fn section_span(&self, section: usize) -> Result<(f32, f32)> {
        let header = self.rect_for_header(section)?;
        Ok((header.y, self.section_bottoms[section]))
    }

    /// Item rects of one section, in item order.
    pub fn section_items(&self, section: usize) -> Result<&[Rect]> {
        if section >= self.section_count() {
            return Err(ChipflowError::header_out_of_range(section));
        }
        Ok(&self.items[self.section_starts[section]..self.section_starts[section + 1]])
    }

    /// Every placement in layout order: each header followed by its items.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        (0..self.section_count()).flat_map(move |section| {
            let header = Placement {
                role: Role::Header { section },
                rect: self.headers[section],
            };
            let start = self.section_starts[section];
            let end = self.section_starts[section + 1];
            std::iter::once(header).chain(self.items[start..end].iter().enumerate().map(
                move |(item, rect)| Placement {
                    role: Role::Item { section, item },
                    rect: *rect,
                },
            ))
        })
    }

    /// Every header and item whose rect intersects `query`.
    ///
    /// This is a linear scan over all placements. Item counts for chip
    /// layouts are small enough that a spatial index does not pay off.
    pub fn rects_intersecting(&self, query: Rect) -> Vec<Placement> {
        self.placements()
            .filter(|p| p.rect.intersects(&query))
            .collect()
    }
}
