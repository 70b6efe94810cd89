//! RectangularTextContainer: a page region owning ordered text elements.
//!
//! The container is structurally complete (bounds plus element ownership) but
//! has no text join policy of its own. Concrete kinds in [`crate::elements`]
//! wrap it and implement [`HasText`].

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

use crate::error::{LayoutError, Result};
use crate::geometry::{Positioned, Rectangle, write_fields};
use crate::text::HasText;

/// Rectangular region that exclusively owns an ordered sequence of elements.
///
/// Element order is the caller's reading order. [`merge`](Self::merge) keeps
/// it by splicing the other container's elements before or after this one's,
/// depending on which container comes first on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularTextContainer<T: Positioned + HasText> {
    pub(crate) bounds: Rectangle,
    pub(crate) elements: Vec<T>,
}

impl<T: Positioned + HasText> Default for RectangularTextContainer<T> {
    fn default() -> Self {
        Self::from_bounds(Rectangle::default())
    }
}

impl<T: Positioned + HasText> RectangularTextContainer<T> {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self::from_bounds(Rectangle::new(top, left, width, height))
    }

    pub fn from_bounds(bounds: Rectangle) -> Self {
        Self::with_elements(bounds, Vec::new())
    }

    /// Creates a container with pre-populated elements. Bounds are taken as given.
    pub fn with_elements(bounds: Rectangle, elements: Vec<T>) -> Self {
        Self { bounds, elements }
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut Vec<T> {
        &mut self.elements
    }

    pub fn set_elements(&mut self, elements: Vec<T>) {
        self.elements = elements;
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// Appends an element without touching the bounds.
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Appends an element and grows the bounds to cover it.
    pub fn add(&mut self, element: T) {
        self.bounds.merge(element.bounds());
        self.elements.push(element);
    }

    /// Removes the element at `index`. Bounds are not shrunk.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.elements.len() {
            return Err(LayoutError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            });
        }
        Ok(self.elements.remove(index))
    }

    /// Merges `other` into this container, moving its elements.
    ///
    /// If this container sorts before `other` in reading order, `other`'s
    /// elements are appended; otherwise they are inserted at the front, in
    /// their original relative order. The bounds become the union of both.
    pub fn merge(&mut self, other: Self) -> &mut Self {
        let Self { bounds, elements } = other;
        self.splice_from(&bounds, elements);
        self
    }

    /// Same as [`merge`](Self::merge) but clones the elements, leaving `other` intact.
    pub fn merge_cloned(&mut self, other: &Self) -> &mut Self
    where
        T: Clone,
    {
        self.splice_from(&other.bounds, other.elements.iter().cloned());
        self
    }

    fn splice_from<I>(&mut self, other_bounds: &Rectangle, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.elements.len();
        let direction = match self.bounds.reading_order(other_bounds) {
            Ordering::Less => {
                self.elements.extend(elements);
                "append"
            }
            Ordering::Equal | Ordering::Greater => {
                self.elements.splice(0..0, elements);
                "prepend"
            }
        };
        self.bounds.merge(other_bounds);
        trace!(
            direction,
            moved = self.elements.len() - before,
            total = self.elements.len(),
            "merged text container"
        );
    }
}

impl<T: Positioned + HasText> Positioned for RectangularTextContainer<T> {
    fn bounds(&self) -> &Rectangle {
        &self.bounds
    }

    fn bounds_mut(&mut self) -> &mut Rectangle {
        &mut self.bounds
    }
}

/// Writes `Rectangle[top=..,left=..,width=..,height=..,text=..]`.
///
/// `None` renders as `text=null`; any text is quoted verbatim.
pub(crate) fn fmt_with_text(
    bounds: &Rectangle,
    text: Option<&str>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.write_str("Rectangle[")?;
    write_fields(bounds, f)?;
    match text {
        Some(text) => write!(f, ",text=\"{text}\"]"),
        None => f.write_str(",text=null]"),
    }
}
