//! Width-aware text layout.
//!
//! The functions here measure and wrap a single run of text against one font (or a
//! [FontStack](crate::FontStack) of fallbacks) and a width budget. They are pure: no
//! function here draws, allocates pages, or mutates the fonts it is given, so they can
//! be called from any number of threads at once.
//!
//! # Layout Functions
//!
//! - [`wrap`](crate::layout::wrap) - split text into lines no wider than a limit, keeping words intact where possible
//! - [`break_token`](crate::layout::break_token) - split a single over-long word, preferring punctuation boundaries
//! - [`wrap_paragraphs`](crate::layout::wrap_paragraphs) - [`wrap`](crate::layout::wrap), honouring hard line breaks
//! - [`TextBlock`](crate::layout::TextBlock) - position wrapped lines within a cell
//!
//! Every measurement goes through [`sanitize`](crate::layout::sanitize) first, so characters
//! the font cannot render are measured as the `?` placeholder that will be drawn in their
//! place.
//!
//! # Example
//!
//! ```
//! use pdf_wrap::layout::{wrap, measure_width};
//! use pdf_wrap::{Pt, StandardFont};
//!
//! let font = StandardFont::Helvetica;
//! let lines = wrap(&font, Pt(12.0), "The quick brown fox jumps over the lazy dog", Pt(100.0));
//! assert!(lines.len() > 1);
//! for line in lines.iter() {
//!     assert!(measure_width(&font, Pt(12.0), line) <= Pt(100.0));
//! }
//! ```

mod block;
mod measure;
mod sanitize;
mod wrap;

pub use block::*;
pub use measure::*;
pub use sanitize::*;
pub use wrap::*;
