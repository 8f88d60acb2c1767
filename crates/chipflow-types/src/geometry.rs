//! Geometry primitives: rectangles, sizes, and edge insets.

use serde::{Deserialize, Serialize};

/// A rectangle with position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside this rectangle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check whether two rectangles overlap.
    ///
    /// Edges are half-open, so rectangles that merely touch do not intersect.
    /// A zero-width or zero-height rectangle intersects any region whose
    /// closed bounds contain it, so empty headers still show up in queries.
    pub fn intersects(&self, other: &Rect) -> bool {
        spans_overlap(self.x, self.right(), other.x, other.right())
            && spans_overlap(self.y, self.bottom(), other.y, other.bottom())
    }

    /// Smallest rectangle that contains both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rect {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }
}

fn spans_overlap(a0: f32, a1: f32, b0: f32, b1: f32) -> bool {
    if a0 == a1 || b0 == b1 {
        a0 <= b1 && b0 <= a1
    } else {
        a0 < b1 && b0 < a1
    }
}

/// A width/height pair.
///
/// Deserializes from either `{ width = .., height = .. }` or `[w, h]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SizeRepr")]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Table { width: f32, height: f32 },
    Pair([f32; 2]),
}

impl From<SizeRepr> for Size {
    fn from(repr: SizeRepr) -> Self {
        match repr {
            SizeRepr::Table { width, height } => Size::new(width, height),
            SizeRepr::Pair([width, height]) => Size::new(width, height),
        }
    }
}

/// Margins on all four sides of a section's item area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    /// Zero insets on all sides.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Same inset on all sides.
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    /// Insets with individual side values, in top/left/bottom/right order.
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Total horizontal inset (left + right).
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Iterate over `(side name, value)` pairs.
    pub fn sides(&self) -> [(&'static str, f32); 4] {
        [
            ("top", self.top),
            ("left", self.left),
            ("bottom", self.bottom),
            ("right", self.right),
        ]
    }
}
