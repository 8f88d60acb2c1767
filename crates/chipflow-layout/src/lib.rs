//! chipflow-layout: flow packing for sectioned chip grids.
//!
//! Sections stack vertically. Each section has a full-width header followed
//! by items that flow left to right and wrap onto a new row when the next
//! item would overflow the content width. [`FlowPacker`] computes a rect for
//! every header and item in a single forward pass and keeps the result for
//! lookups and visible-region queries.
//!
//! Item geometry is read through the [`SectionSource`] trait, so any host
//! model can be packed without copying it into chipflow types first.

pub mod packer;
pub mod result;
pub mod source;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_utils;

pub use chipflow_types::{ChipflowError, Insets, Rect, Result, SectionSpec, SectionStyle, Size};
pub use packer::{FlowPacker, compute};
pub use result::{LayoutResult, Placement, Role};
pub use source::SectionSource;
