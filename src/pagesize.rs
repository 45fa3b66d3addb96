//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//!
//! # Example
//!
//! ```
//! use smartdoc_pdf::pagesize::{Paper, A4};
//!
//! let (width, height) = Paper::A4.size();
//! assert_eq!((width, height), A4);
//! assert!(width < height);
//! ```

use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Paper a document is laid out on, as named in a layout configuration
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paper {
    #[default]
    A4,
    A3,
    A5,
    Letter,
    Legal,
    /// Arbitrary dimensions, in points
    Custom { width: Pt, height: Pt },
}

impl Paper {
    /// Portrait dimensions of the paper. Custom sizes are returned as given.
    pub fn size(&self) -> PageSize {
        match *self {
            Paper::A4 => A4,
            Paper::A3 => A3,
            Paper::A5 => A5,
            Paper::Letter => LETTER,
            Paper::Legal => LEGAL,
            Paper::Custom { width, height } => (width, height),
        }
    }
}
