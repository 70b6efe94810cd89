//! TextChunk: a word-level container of text elements.

use std::fmt;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::container::{RectangularTextContainer, fmt_with_text};
use crate::geometry::{Positioned, Rectangle};
use crate::params::TextParams;
use crate::text::HasText;

use super::text_element::TextElement;

/// A run of text elements forming one word or phrase.
///
/// Text is the concatenation of the element texts in sequence order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextChunk {
    pub(crate) container: RectangularTextContainer<TextElement>,
}

/// Approximate box of a single character inside a text element.
#[derive(Debug, Clone, Copy)]
struct CharBox {
    ch: char,
    top: f64,
    left: f64,
    width: f64,
    height: f64,
}

impl TextChunk {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            container: RectangularTextContainer::new(top, left, width, height),
        }
    }

    /// Creates a chunk covering exactly one element.
    pub fn from_element(element: TextElement) -> Self {
        let bounds = *element.bounds();
        Self {
            container: RectangularTextContainer::with_elements(bounds, vec![element]),
        }
    }

    /// Creates a zero-sized chunk holding `text` at the given position.
    pub fn from_text(text: impl Into<String>, top: f64, left: f64) -> Self {
        Self::from_element(TextElement::new(top, left, 0.0, 0.0, text, 0.0, 0.0))
    }

    /// Appends an element and grows the chunk to cover it.
    pub fn add(&mut self, element: TextElement) {
        self.container.add(element);
    }

    pub fn elements(&self) -> &[TextElement] {
        self.container.elements()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextElement> {
        self.container.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    pub fn as_container(&self) -> &RectangularTextContainer<TextElement> {
        &self.container
    }

    pub fn as_container_mut(&mut self) -> &mut RectangularTextContainer<TextElement> {
        &mut self.container
    }

    pub fn into_container(self) -> RectangularTextContainer<TextElement> {
        self.container
    }

    /// Merges `other` into this chunk in reading order. See
    /// [`RectangularTextContainer::merge`].
    pub fn merge(&mut self, other: TextChunk) -> &mut Self {
        self.container.merge(other.container);
        self
    }

    /// Splits the chunk at every run of `c` at least `min_run_length` long.
    ///
    /// Character boxes are approximated by dividing each element's width
    /// evenly among its characters. Each segment between runs becomes a chunk
    /// with a single element. If no run qualifies the chunk is returned as is.
    pub fn squeeze(&self, c: char, min_run_length: usize) -> Vec<TextChunk> {
        let min_run_length = min_run_length.max(1);
        let chars = self.char_boxes();
        if chars.is_empty() {
            return vec![self.clone()];
        }

        let runs = find_runs(&chars, c, min_run_length);
        if runs.is_empty() {
            return vec![self.clone()];
        }

        let mut out = Vec::with_capacity(runs.len() + 1);
        let mut segment_start = 0;
        for (run_start, run_end) in runs {
            if segment_start < run_start {
                out.push(segment_chunk(&chars[segment_start..run_start]));
            }
            segment_start = run_end;
        }
        if segment_start < chars.len() {
            out.push(segment_chunk(&chars[segment_start..]));
        }

        debug!(
            squeeze_char = ?c,
            min_run_length,
            chunks = out.len(),
            "squeezed text chunk"
        );
        out
    }

    /// [`squeeze`](Self::squeeze) using the character and run length from `params`.
    ///
    /// `params` is not checked here. Run it through [`TextParams::validated`]
    /// first.
    pub fn squeeze_with(&self, params: &TextParams) -> Vec<TextChunk> {
        self.squeeze(params.squeeze_char, params.min_run_length)
    }

    /// Groups loose text elements into word chunks.
    ///
    /// Elements are clustered into lines by vertical centre, then each line
    /// is split into words wherever the horizontal gap between neighbours is
    /// wider than `word_gap_ratio` spaces. Word text joins the element texts
    /// with `word_separator`.
    ///
    /// `params` is not checked here. A NaN `word_gap_ratio` never splits a
    /// line into words, and NaN line thresholds put every element on its
    /// own line. Run it through [`TextParams::validated`] first.
    pub fn merge_words(elements: &[TextElement], params: &TextParams) -> Vec<TextChunk> {
        if elements.is_empty() {
            return Vec::new();
        }

        let avg_height = elements.iter().map(|e| e.height()).sum::<f64>() / elements.len() as f64;
        let line_threshold = params
            .min_line_threshold
            .max(avg_height * params.line_threshold_ratio);

        let mut sorted: Vec<&TextElement> = elements.iter().collect();
        sorted.sort_by_key(|e| (OrderedFloat(center_y(e)), OrderedFloat(e.left())));

        let mut lines: Vec<Vec<&TextElement>> = Vec::new();
        for element in sorted {
            match lines.last_mut() {
                Some(line) if (center_y(element) - center_y(line[0])).abs() <= line_threshold => {
                    line.push(element)
                }
                _ => lines.push(vec![element]),
            }
        }

        let mut out = Vec::new();
        for mut line in lines {
            line.sort_by_key(|e| OrderedFloat(e.left()));

            let mut word: Vec<&TextElement> = vec![line[0]];
            for (prev, cur) in line.iter().copied().tuple_windows() {
                let gap = cur.left() - prev.right();
                let mut space_width = prev.width_of_space().max(cur.width_of_space());
                if !space_width.is_finite() || space_width <= 0.0 {
                    space_width = 1.0;
                }
                if gap > space_width * params.word_gap_ratio {
                    out.push(word_chunk(&word, params.word_separator));
                    word.clear();
                }
                word.push(cur);
            }
            out.push(word_chunk(&word, params.word_separator));
        }

        debug!(
            elements = elements.len(),
            words = out.len(),
            line_threshold,
            "merged elements into words"
        );
        out
    }

    fn char_boxes(&self) -> Vec<CharBox> {
        let mut chars = Vec::new();
        for element in self.container.iter() {
            let count = element.text.chars().count();
            if count == 0 {
                continue;
            }
            let mut char_width = element.width() / count as f64;
            if !char_width.is_finite() || char_width <= 0.0 {
                char_width = element.width_of_space();
            }
            if !char_width.is_finite() || char_width <= 0.0 {
                char_width = 1.0;
            }
            for (i, ch) in element.text.chars().enumerate() {
                chars.push(CharBox {
                    ch,
                    top: element.top(),
                    left: element.left() + i as f64 * char_width,
                    width: char_width,
                    height: element.height(),
                });
            }
        }
        chars
    }
}

fn center_y(element: &TextElement) -> f64 {
    element.top() + element.height() * 0.5
}

/// Half-open index ranges of runs of `c` no shorter than `min_len`.
fn find_runs(chars: &[CharBox], c: char, min_len: usize) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].ch != c {
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i].ch == c {
            i += 1;
        }
        if i - start >= min_len {
            runs.push((start, i));
        }
    }
    runs
}

fn segment_chunk(chars: &[CharBox]) -> TextChunk {
    let first = chars[0];
    let last = chars[chars.len() - 1];
    let left = first.left;
    let right = last.left + last.width;
    let top = chars.iter().map(|c| c.top).fold(first.top, f64::min);
    let bottom = chars
        .iter()
        .map(|c| c.top + c.height)
        .fold(first.top + first.height, f64::max);

    let text: String = chars.iter().map(|c| c.ch).collect();
    TextChunk::from_element(TextElement::new(
        top,
        left,
        right - left,
        bottom - top,
        text,
        0.0,
        0.0,
    ))
}

fn word_chunk(word: &[&TextElement], separator: Option<char>) -> TextChunk {
    let bounds = Rectangle::bounding_box_of(word.iter().map(|e| e.bounds()));
    let text = match separator {
        Some(sep) => word.iter().map(|e| e.as_str()).join(&sep.to_string()),
        None => word.iter().map(|e| e.as_str()).collect(),
    };
    TextChunk::from_element(TextElement::new(
        bounds.top(),
        bounds.left(),
        bounds.width(),
        bounds.height(),
        text,
        0.0,
        0.0,
    ))
}

impl_positioned_delegate!(TextChunk, container);

impl HasText for TextChunk {
    fn text(&self) -> String {
        self.container.iter().map(|e| e.as_str()).collect()
    }

    fn text_with_line_returns(&self, _use_line_returns: bool) -> String {
        self.text()
    }
}

impl fmt::Display for TextChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_with_text(self.bounds(), Some(&self.text()), f)
    }
}
