//! Line: a row of text chunks.

use std::fmt;

use itertools::Itertools;

use crate::container::{RectangularTextContainer, fmt_with_text};
use crate::geometry::{Positioned, Rectangle};
use crate::text::HasText;

use super::text_chunk::TextChunk;

/// A horizontal row of chunks, such as one row of a table.
///
/// Adding a chunk always grows the line's bounds, starting from the line's
/// initial rectangle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    pub(crate) container: RectangularTextContainer<TextChunk>,
}

impl Line {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            container: RectangularTextContainer::new(top, left, width, height),
        }
    }

    pub fn text_chunks(&self) -> &[TextChunk] {
        self.container.elements()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextChunk> {
        self.container.iter()
    }

    pub fn len(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    pub fn as_container(&self) -> &RectangularTextContainer<TextChunk> {
        &self.container
    }

    pub fn add_text_chunk(&mut self, chunk: TextChunk) {
        self.container.add(chunk);
    }

    /// Places `chunk` in column `index`.
    ///
    /// Missing columns before `index` are filled with empty chunks. If the
    /// column is already occupied, `chunk` is merged into the occupant.
    ///
    /// # Panics
    ///
    /// Panics if padding up to `index` would exceed `isize::MAX` bytes, as
    /// [`Vec::resize_with`] does. A large but representable `index` still
    /// allocates every padding chunk.
    pub fn add_text_chunk_at(&mut self, index: usize, chunk: TextChunk) {
        let bounds = *chunk.bounds();
        let elements = self.container.elements_mut();
        if index < elements.len() {
            elements[index].merge(chunk);
        } else {
            elements.resize_with(index, TextChunk::default);
            elements.push(chunk);
        }
        self.container.bounds.merge(&bounds);
    }

    /// Merges `other` into this line in reading order.
    pub fn merge(&mut self, other: Line) -> &mut Self {
        self.container.merge(other.container);
        self
    }

    /// Builds a new line from `line` with runs of `c` squeezed out of every chunk.
    ///
    /// The new line is bounded by the squeezed chunks.
    pub fn remove_repeated_characters(line: &Line, c: char, min_run_length: usize) -> Line {
        let parts: Vec<TextChunk> = line
            .iter()
            .flat_map(|chunk| chunk.squeeze(c, min_run_length))
            .collect();
        let bounds = Rectangle::bounding_box_of(parts.iter().map(|p| p.bounds()));
        Line {
            container: RectangularTextContainer::with_elements(bounds, parts),
        }
    }
}

impl_positioned_delegate!(Line, container);

impl HasText for Line {
    fn text(&self) -> String {
        self.container.iter().map(|c| c.text()).join(" ")
    }

    fn text_with_line_returns(&self, _use_line_returns: bool) -> String {
        self.text()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_text(self.bounds(), Some(&self.text()), f)
    }
}
