//! tessera - rectangular text containers for table extraction.
//!
//! A page region owns an ordered list of smaller text-bearing regions
//! (words in a cell, cells in a row). Merging two regions keeps their
//! elements in reading order. Text is composed by the concrete element
//! kinds and can be reduced to a safe character set with [`sanitize`].

pub mod container;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod params;
pub mod text;

pub use container::RectangularTextContainer;
pub use elements::{Cell, Line, TextChunk, TextElement};
pub use error::{LayoutError, Result};
pub use geometry::{Positioned, Rectangle};
pub use params::TextParams;
pub use text::{HasText, sanitize};
