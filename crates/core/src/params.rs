//! Text composition parameters.
//!
//! Contains TextParams struct for controlling how text elements are joined,
//! grouped into words and squeezed.

use crate::error::{LayoutError, Result};

/// Parameters for text composition.
#[derive(Debug, Clone, PartialEq)]
pub struct TextParams {
    /// Inserted by cells between chunks that start on a lower line.
    pub line_return: char,

    /// Character whose long runs split a chunk when squeezing.
    pub squeeze_char: char,

    /// Shortest run of `squeeze_char` that splits a chunk.
    pub min_run_length: usize,

    /// Two elements belong to the same line if their vertical centres are
    /// closer than this. Specified relative to the average element height.
    pub line_threshold_ratio: f64,

    /// Lower bound for the line threshold, in page units.
    pub min_line_threshold: f64,

    /// Elements further apart than this start a new word. Specified relative
    /// to the wider space width of the two neighbours.
    pub word_gap_ratio: f64,

    /// Placed between the element texts joined into one word. `None`
    /// concatenates them, which suits per-glyph elements.
    pub word_separator: Option<char>,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            line_return: '\r',
            squeeze_char: ' ',
            min_run_length: 2,
            line_threshold_ratio: 0.6,
            min_line_threshold: 1.0,
            word_gap_ratio: 1.5,
            word_separator: Some(' '),
        }
    }
}

impl TextParams {
    /// Checks that ratios are finite and positive and that runs are non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.min_run_length == 0 {
            return Err(LayoutError::InvalidParameter {
                name: "min_run_length",
                reason: "must be at least 1".to_string(),
            });
        }
        for (name, value) in [
            ("line_threshold_ratio", self.line_threshold_ratio),
            ("min_line_threshold", self.min_line_threshold),
            ("word_gap_ratio", self.word_gap_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidParameter {
                    name,
                    reason: format!("expected a finite positive number, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Consumes `self` and returns it once [`validate`](Self::validate) passes.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Returns a copy with a different squeeze character and run length.
    pub fn with_squeeze(mut self, c: char, min_run_length: usize) -> Self {
        self.squeeze_char = c;
        self.min_run_length = min_run_length;
        self
    }
}
