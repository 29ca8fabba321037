mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// Measuring, sanitizing, and wrapping text to a width
pub mod layout;

mod metrics;
pub use metrics::*;

mod rect;
pub use rect::*;

/// Turning laid out text into PDF content streams
pub mod render;

mod standard;
pub use standard::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for placing rendered content in documents
pub use pdf_writer;
