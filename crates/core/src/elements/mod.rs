//! Concrete text-bearing element kinds.
//!
//! - TextElement: a positioned run of text extracted from the page (leaf)
//! - TextChunk: a word, built from text elements
//! - Cell: a table cell holding chunks, joined with line returns
//! - Line: a row of chunks

/// Implements `Positioned` by delegating to a field.
///
/// The field may be a `Rectangle` or anything else that is itself
/// `Positioned`, such as a `RectangularTextContainer`:
/// ```ignore
/// impl_positioned_delegate!(TextElement, bounds);
/// impl_positioned_delegate!(Cell, container);
/// ```
macro_rules! impl_positioned_delegate {
    ($type:ty, $field:ident) => {
        impl crate::geometry::Positioned for $type {
            fn bounds(&self) -> &crate::geometry::Rectangle {
                crate::geometry::Positioned::bounds(&self.$field)
            }
            fn bounds_mut(&mut self) -> &mut crate::geometry::Rectangle {
                crate::geometry::Positioned::bounds_mut(&mut self.$field)
            }
        }
    };
}

mod cell;
mod line;
mod text_chunk;
mod text_element;

pub use cell::Cell;
pub use line::Line;
pub use text_chunk::TextChunk;
pub use text_element::TextElement;
