//! Foundation types for chipflow.
//!
//! This crate contains the platform-agnostic types shared by the chipflow
//! crates: geometry primitives, per-section styling, layout description
//! files, and the error type.

pub mod config;
pub mod error;
pub mod geometry;
pub mod style;

pub use config::{LayoutDescription, SectionSpec};
pub use error::{ChipflowError, Result};
pub use geometry::{Insets, Rect, Size};
pub use style::SectionStyle;
