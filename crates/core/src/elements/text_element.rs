//! TextElement: the leaf of every container hierarchy.

use std::fmt;

use crate::container::fmt_with_text;
use crate::geometry::Rectangle;
use crate::text::HasText;

/// A positioned run of text as extracted from the page, usually one glyph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextElement {
    pub(crate) bounds: Rectangle,
    pub(crate) text: String,
    pub(crate) font_size: f64,
    pub(crate) width_of_space: f64,
    pub(crate) direction: f64,
}

impl TextElement {
    pub fn new(
        top: f64,
        left: f64,
        width: f64,
        height: f64,
        text: impl Into<String>,
        width_of_space: f64,
        direction: f64,
    ) -> Self {
        Self {
            bounds: Rectangle::new(top, left, width, height),
            text: text.into(),
            font_size: 0.0,
            width_of_space,
            direction,
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn width_of_space(&self) -> f64 {
        self.width_of_space
    }

    /// Text direction in degrees, 0 for left-to-right.
    pub fn direction(&self) -> f64 {
        self.direction
    }
}

impl_positioned_delegate!(TextElement, bounds);

impl HasText for TextElement {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn text_with_line_returns(&self, _use_line_returns: bool) -> String {
        self.text.clone()
    }
}

impl fmt::Display for TextElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_text(&self.bounds, Some(&self.text), f)
    }
}
