//! Paginated, justified text layout and PDF export for generated legal documents.
//!
//! Plain text goes in; headings are picked out, paragraphs are wrapped and justified,
//! pages are broken at the bottom margin and every page gets a "Page i of N" footer.
//! The resulting [layout::Layout] can be written out as a PDF with a [Document].

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Line classification, wrapping, justification and pagination
pub mod layout;

mod page;
pub use page::*;

/// Standard paper sizes
pub mod pagesize;

pub(crate) mod refs;

/// Built-in document templates
pub mod templates;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
