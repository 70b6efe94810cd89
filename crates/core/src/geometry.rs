//! Page geometry for text containers.
//!
//! Provides:
//! - `Rectangle`: an axis-aligned box in top-left origin page space
//! - `Positioned`: the capability trait for anything that owns such a box
//! - Reading order: a total order, top-to-bottom then left-to-right

use std::cmp::Ordering;
use std::fmt;

use ordered_float::OrderedFloat;

use crate::error::{LayoutError, Result};

/// Axis-aligned rectangle with its origin at the top-left of the page.
///
/// `top` grows downwards, so `bottom() >= top()` for any non-negative height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub(crate) top: f64,
    pub(crate) left: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Rectangle {
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Creates a rectangle, rejecting non-finite coordinates and negative extents.
    pub fn try_new(top: f64, left: f64, width: f64, height: f64) -> Result<Self> {
        for (field, value) in [("top", top), ("left", left), ("width", width), ("height", height)]
        {
            if !value.is_finite() {
                return Err(LayoutError::InvalidGeometry { field, value });
            }
        }
        if width < 0.0 {
            return Err(LayoutError::InvalidGeometry {
                field: "width",
                value: width,
            });
        }
        if height < 0.0 {
            return Err(LayoutError::InvalidGeometry {
                field: "height",
                value: height,
            });
        }
        Ok(Self::new(top, left, width, height))
    }

    /// Builds a rectangle from its four edges.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(top, left, right - left, bottom - top)
    }

    pub const fn top(&self) -> f64 {
        self.top
    }

    pub const fn left(&self) -> f64 {
        self.left
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Moves the top edge, keeping the bottom edge in place.
    pub fn set_top(&mut self, top: f64) {
        let delta = top - self.top;
        self.top = top;
        self.height -= delta;
    }

    /// Moves the left edge, keeping the right edge in place.
    pub fn set_left(&mut self, left: f64) {
        let delta = left - self.left;
        self.left = left;
        self.width -= delta;
    }

    pub fn set_right(&mut self, right: f64) {
        self.width = right - self.left;
    }

    pub fn set_bottom(&mut self, bottom: f64) {
        self.height = bottom - self.top;
    }

    /// Returns true if `other` lies entirely inside this rectangle (edges inclusive).
    pub fn contains(&self, other: &Rectangle) -> bool {
        other.left >= self.left
            && other.right() <= self.right()
            && other.top >= self.top
            && other.bottom() <= self.bottom()
    }

    /// Length of the shared vertical span, 0 if disjoint.
    pub fn vertical_overlap(&self, other: &Rectangle) -> f64 {
        (self.bottom().min(other.bottom()) - self.top.max(other.top)).max(0.0)
    }

    pub fn vertically_overlaps(&self, other: &Rectangle) -> bool {
        self.vertical_overlap(other) > 0.0
    }

    /// Length of the shared horizontal span, 0 if disjoint.
    pub fn horizontal_overlap(&self, other: &Rectangle) -> f64 {
        (self.right().min(other.right()) - self.left.max(other.left)).max(0.0)
    }

    pub fn horizontally_overlaps(&self, other: &Rectangle) -> bool {
        self.horizontal_overlap(other) > 0.0
    }

    /// Vertical overlap relative to the shorter of the two heights.
    ///
    /// Returns 0 when either rectangle has no height.
    pub fn vertical_overlap_ratio(&self, other: &Rectangle) -> f64 {
        let delta = self.height.min(other.height);
        if delta <= 0.0 {
            return 0.0;
        }

        let (top, bottom) = (self.top, self.bottom());
        let (other_top, other_bottom) = (other.top, other.bottom());

        if other_top <= top && top <= other_bottom && other_bottom <= bottom {
            (other_bottom - top) / delta
        } else if top <= other_top && other_top <= bottom && bottom <= other_bottom {
            (bottom - other_top) / delta
        } else if top <= other_top && other_top <= other_bottom && other_bottom <= bottom {
            (other_bottom - other_top) / delta
        } else if other_top <= top && top <= bottom && bottom <= other_bottom {
            (bottom - top) / delta
        } else {
            0.0
        }
    }

    /// Intersection over union of the two areas.
    pub fn overlap_ratio(&self, other: &Rectangle) -> f64 {
        let intersection = self.horizontal_overlap(other) * self.vertical_overlap(other);
        let union = self.area() + other.area() - intersection;
        if union <= 0.0 {
            return 0.0;
        }
        intersection / union
    }

    /// Grows this rectangle to the union of itself and `other`.
    pub fn merge(&mut self, other: &Rectangle) -> &mut Self {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        *self = Self::from_edges(left, top, right, bottom);
        self
    }

    /// Corners clockwise from the top-left, as `(x, y)` pairs.
    pub fn points(&self) -> [(f64, f64); 4] {
        [
            (self.left, self.top),
            (self.right(), self.top),
            (self.right(), self.bottom()),
            (self.left, self.bottom()),
        ]
    }

    /// Union of all rectangles, or the zero rectangle for an empty input.
    pub fn bounding_box_of<'a, I>(rectangles: I) -> Rectangle
    where
        I: IntoIterator<Item = &'a Rectangle>,
    {
        let mut iter = rectangles.into_iter();
        let Some(first) = iter.next() else {
            return Rectangle::default();
        };
        let mut bbox = *first;
        for r in iter {
            bbox.merge(r);
        }
        bbox
    }

    /// Total reading order: top, then left, then bottom, then right.
    ///
    /// NaN coordinates sort after every number, so the order stays total.
    /// Tops are compared exactly: two boxes on one visual row whose tops
    /// differ by rounding jitter are ordered by `top`, not by `left`. Snap
    /// tops to a common baseline first when that matters.
    pub fn reading_order(&self, other: &Rectangle) -> Ordering {
        reading_key(self).cmp(&reading_key(other))
    }
}

type ReadingKey = (
    OrderedFloat<f64>,
    OrderedFloat<f64>,
    OrderedFloat<f64>,
    OrderedFloat<f64>,
);

fn reading_key(r: &Rectangle) -> ReadingKey {
    (
        OrderedFloat(r.top),
        OrderedFloat(r.left),
        OrderedFloat(r.bottom()),
        OrderedFloat(r.right()),
    )
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rectangle[")?;
        write_fields(self, f)?;
        f.write_str("]")
    }
}

/// Writes the bracket-free field list shared by every `Display` impl.
pub(crate) fn write_fields(r: &Rectangle, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
        f,
        "top={},left={},width={},height={}",
        r.top, r.left, r.width, r.height
    )
}

/// Capability for objects that occupy a rectangle on the page.
pub trait Positioned {
    fn bounds(&self) -> &Rectangle;
    fn bounds_mut(&mut self) -> &mut Rectangle;

    fn top(&self) -> f64 {
        self.bounds().top()
    }

    fn left(&self) -> f64 {
        self.bounds().left()
    }

    fn width(&self) -> f64 {
        self.bounds().width()
    }

    fn height(&self) -> f64 {
        self.bounds().height()
    }

    fn right(&self) -> f64 {
        self.bounds().right()
    }

    fn bottom(&self) -> f64 {
        self.bounds().bottom()
    }

    fn reading_order<P: Positioned + ?Sized>(&self, other: &P) -> Ordering {
        self.bounds().reading_order(other.bounds())
    }

    /// Grows this object's bounds to cover `other`.
    fn merge_bounds<P: Positioned + ?Sized>(&mut self, other: &P) {
        let other = *other.bounds();
        self.bounds_mut().merge(&other);
    }
}

impl Positioned for Rectangle {
    fn bounds(&self) -> &Rectangle {
        self
    }

    fn bounds_mut(&mut self) -> &mut Rectangle {
        self
    }
}
