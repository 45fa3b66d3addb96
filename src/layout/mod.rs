//! Paginated layout of plain-text documents.
//!
//! A document is a block of text split into lines. Lines are classified as headings
//! (see [`HeadingClassifier`](crate::layout::HeadingClassifier)), blank lines, or body
//! text; consecutive body lines form a paragraph that is re-flowed, wrapped to the
//! content width and justified. Whenever the cursor reaches the bottom margin a new page
//! is started. Once the whole document is laid out, each page is stamped with a
//! "Page i of N" footer.
//!
//! The result is a [`Layout`]: pages of [`DrawInstruction`](crate::DrawInstruction)s that
//! can be written out as a PDF with a [`Document`](crate::Document), or serialised and
//! drawn by anything else.
//!
//! # Example
//!
//! ```
//! use smartdoc_pdf::layout::{layout_document, LayoutConfig};
//! use smartdoc_pdf::Typeface;
//!
//! let text = "# AGREEMENT\n\nThe parties agree as follows.\n\nARTICLE 1. SCOPE\n\nEverything.";
//! let layout = layout_document(text, &LayoutConfig::default(), &Typeface::default());
//!
//! assert_eq!(layout.page_count(), 1);
//! let page = layout.pages().next().unwrap();
//! assert_eq!(page.contents[0].text, "AGREEMENT");
//! assert_eq!(page.footer.as_ref().unwrap().text, "Page 1 of 1");
//! ```

mod config;
mod flow;
mod footer;
mod heading;
mod paginator;
mod text;

pub use config::*;
pub use flow::*;
pub use footer::*;
pub use heading::*;
pub use paginator::*;
pub use text::*;

use crate::page::Page;
use crate::pagesize::PageSize;
use crate::units::Pt;
use id_arena::{Arena, Id};
use serde::{Serialize, Serializer};

/// A fully laid-out document: every page, in order, with footers stamped
#[derive(Debug)]
pub struct Layout {
    pub page_size: PageSize,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
}

impl Layout {
    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// The pages in document order
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().map(|id| &self.pages[*id])
    }

    /// Look up a page by its 1-based page number
    pub fn page(&self, number: usize) -> Option<&Page> {
        number
            .checked_sub(1)
            .and_then(|index| self.page_order.get(index))
            .map(|id| &self.pages[*id])
    }
}

impl Serialize for Layout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct LayoutView<'a> {
            page_width: Pt,
            page_height: Pt,
            page_count: usize,
            pages: Vec<&'a Page>,
        }

        LayoutView {
            page_width: self.page_size.0,
            page_height: self.page_size.1,
            page_count: self.page_count(),
            pages: self.pages().collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Typeface;

    #[test]
    fn empty_document_is_one_blank_page() {
        for text in ["", "   \n\t\n  "] {
            let layout = layout_document(text, &LayoutConfig::default(), &Typeface::default());
            assert_eq!(layout.page_count(), 1);
            let page = layout.page(1).expect("page 1");
            assert!(page.is_empty());
            assert_eq!(
                page.footer.as_ref().map(|f| f.text.as_str()),
                Some("Page 1 of 1")
            );
        }
    }

    #[test]
    fn pages_are_numbered_from_one() {
        let layout = layout_document("x", &LayoutConfig::default(), &Typeface::default());
        assert!(layout.page(0).is_none());
        assert_eq!(layout.page(1).map(|p| p.number), Some(1));
        assert!(layout.page(2).is_none());
    }

    #[test]
    fn serialises_pages_in_order() {
        let layout = layout_document(
            "# TITLE\n\nbody text",
            &LayoutConfig::default(),
            &Typeface::default(),
        );
        let json = serde_json::to_value(&layout).expect("layout serialises");
        assert_eq!(json["page_count"], 1);
        assert_eq!(json["pages"][0]["number"], 1);
        assert_eq!(json["pages"][0]["contents"][0]["text"], "TITLE");
        assert_eq!(json["pages"][0]["contents"][0]["alignment"], "center");
        assert_eq!(json["pages"][0]["contents"][0]["font_style"], "bold");
        assert_eq!(json["pages"][0]["footer"]["text"], "Page 1 of 1");
    }
}
