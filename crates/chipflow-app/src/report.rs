//! JSON report of a packed layout.

use chipflow_layout::{LayoutResult, Placement, Role};
use chipflow_types::Rect;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    pub content_width: f32,
    pub content_height: f32,
    pub placements: Vec<PlacementEntry>,
}

#[derive(Debug, Serialize)]
pub struct PlacementEntry {
    pub kind: &'static str,
    pub section: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<usize>,
    pub rect: Rect,
}

impl From<Placement> for PlacementEntry {
    fn from(p: Placement) -> Self {
        let (kind, item) = match p.role {
            Role::Header { .. } => ("header", None),
            Role::Item { item, .. } => ("item", Some(item)),
        };
        Self {
            kind,
            section: p.role.section(),
            item,
            rect: p.rect,
        }
    }
}

impl Report {
    /// Report every placement, or only those hit by `query`.
    pub fn new(result: &LayoutResult, query: Option<Rect>) -> Self {
        let placements = match query {
            Some(region) => result.rects_intersecting(region),
            None => result.placements().collect(),
        };
        Self {
            content_width: result.content_width(),
            content_height: result.content_height(),
            placements: placements.into_iter().map(PlacementEntry::from).collect(),
        }
    }
}
