//! Cell: a table cell holding text chunks.

use std::fmt;

use ordered_float::OrderedFloat;

use crate::container::{RectangularTextContainer, fmt_with_text};
use crate::geometry::Positioned;
use crate::params::TextParams;
use crate::text::HasText;

use super::text_chunk::TextChunk;

const TRIMMED: [char; 4] = [' ', '\t', '\n', '\r'];

/// A table cell. Its text reads chunks top-to-bottom, left-to-right.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub(crate) container: RectangularTextContainer<TextChunk>,
    spanning: bool,
    placeholder: bool,
}

impl Cell {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            container: RectangularTextContainer::new(top, left, width, height),
            spanning: false,
            placeholder: false,
        }
    }

    /// Appends a chunk. The cell keeps its bounds, which come from table detection.
    pub fn add_text_chunk(&mut self, chunk: TextChunk) {
        self.container.push(chunk);
    }

    pub fn text_chunks(&self) -> &[TextChunk] {
        self.container.elements()
    }

    pub fn as_container(&self) -> &RectangularTextContainer<TextChunk> {
        &self.container
    }

    pub fn as_container_mut(&mut self) -> &mut RectangularTextContainer<TextChunk> {
        &mut self.container
    }

    /// Merges `other`'s chunks and bounds into this cell. Flags are kept from `self`.
    pub fn merge(&mut self, other: Cell) -> &mut Self {
        self.container.merge(other.container);
        self
    }

    pub fn is_spanning(&self) -> bool {
        self.spanning
    }

    pub fn set_spanning(&mut self, spanning: bool) {
        self.spanning = spanning;
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: bool) {
        self.placeholder = placeholder;
    }

    /// Joins chunk texts in reading order, trimming surrounding whitespace.
    ///
    /// With `use_line_returns`, `params.line_return` is inserted before every
    /// chunk that starts below the previous one.
    pub fn text_with_params(&self, use_line_returns: bool, params: &TextParams) -> String {
        if self.container.is_empty() {
            return String::new();
        }

        let mut chunks: Vec<&TextChunk> = self.container.iter().collect();
        chunks.sort_by_key(|c| (OrderedFloat(c.top()), OrderedFloat(c.left())));

        let mut out = String::new();
        let mut current_top = chunks[0].top();
        for chunk in chunks {
            if use_line_returns && chunk.top() > current_top {
                out.push(params.line_return);
            }
            out.push_str(&chunk.text());
            current_top = chunk.top();
        }
        out.trim_matches(TRIMMED).to_string()
    }
}

impl_positioned_delegate!(Cell, container);

impl HasText for Cell {
    fn text(&self) -> String {
        self.text_with_line_returns(true)
    }

    fn text_with_line_returns(&self, use_line_returns: bool) -> String {
        self.text_with_params(use_line_returns, &TextParams::default())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_text(self.bounds(), Some(&self.text()), f)
    }
}
