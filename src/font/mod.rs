//! Fonts used to measure and draw laid-out text.
//!
//! Layout only ever needs two faces, a regular one for body text and footers and a bold
//! one for headings. A [`Typeface`] pairs them up. Each face is either one of the standard
//! PDF fonts, which every reader provides and which are measured from built-in metrics, or
//! an embedded TrueType / OpenType font.

mod embedded;
mod standard;

pub use embedded::*;
pub use standard::*;

use crate::refs::{ObjectReferences, RefType};
use crate::{PDFError, Pt};
use pdf_writer::{Name, Pdf};
use serde::{Deserialize, Serialize};

/// The weight a run of text is drawn in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Regular,
    Bold,
}

impl FontStyle {
    /// Name of the font in each page's resource dictionary
    pub fn resource_name(&self) -> &'static str {
        match self {
            FontStyle::Regular => "F0",
            FontStyle::Bold => "F1",
        }
    }
}

/// Families of standard fonts that can be selected by name in a layout configuration
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Times,
    Helvetica,
}

impl FontFamily {
    /// The standard font used for a given style of this family
    pub fn standard_font(&self, style: FontStyle) -> StandardFont {
        match (self, style) {
            (FontFamily::Times, FontStyle::Regular) => StandardFont::TimesRoman,
            (FontFamily::Times, FontStyle::Bold) => StandardFont::TimesBold,
            (FontFamily::Helvetica, FontStyle::Regular) => StandardFont::Helvetica,
            (FontFamily::Helvetica, FontStyle::Bold) => StandardFont::HelveticaBold,
        }
    }
}

/// A font that text can be measured in and drawn with
#[derive(Debug)]
pub enum Font {
    Standard(StandardFont),
    Embedded(EmbeddedFont),
}

impl Font {
    /// Calculate the width of a given string of text given the font size
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.width_of_text(text, size),
            Font::Embedded(font) => font.width_of_text(text, size),
        }
    }

    /// The bytes a content stream shows for `text` in this font
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Font::Standard(font) => font.encode(text),
            Font::Embedded(font) => font.encode(text),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, style: FontStyle, writer: &mut Pdf) {
        match self {
            Font::Standard(font) => {
                let id = refs.get_or_gen(RefType::Font(style));
                writer
                    .type1_font(id)
                    .base_font(Name(font.base_font().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            Font::Embedded(font) => font.write(refs, style, writer),
        }
    }
}

/// A regular and a bold font that together typeset a document
#[derive(Debug)]
pub struct Typeface {
    pub regular: Font,
    pub bold: Font,
}

impl Default for Typeface {
    fn default() -> Self {
        Typeface::standard(FontFamily::default())
    }
}

impl Typeface {
    /// A typeface made of the standard PDF fonts of a family
    pub fn standard(family: FontFamily) -> Typeface {
        Typeface {
            regular: Font::Standard(family.standard_font(FontStyle::Regular)),
            bold: Font::Standard(family.standard_font(FontStyle::Bold)),
        }
    }

    /// A typeface from two font files, which will be embedded when writing a PDF
    pub fn embedded(regular: Vec<u8>, bold: Vec<u8>) -> Result<Typeface, PDFError> {
        Ok(Typeface {
            regular: Font::Embedded(EmbeddedFont::load(regular)?),
            bold: Font::Embedded(EmbeddedFont::load(bold)?),
        })
    }

    pub fn font(&self, style: FontStyle) -> &Font {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Bold => &self.bold,
        }
    }

    /// Calculate the width of `text` in the given style and size
    pub fn width_of_text(&self, text: &str, style: FontStyle, size: Pt) -> Pt {
        self.font(style).width_of_text(text, size)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn typeface_picks_font_by_style() {
        let typeface = Typeface::standard(FontFamily::Helvetica);
        assert!(matches!(
            typeface.font(FontStyle::Bold),
            Font::Standard(StandardFont::HelveticaBold)
        ));
        let regular = typeface.width_of_text("Page", FontStyle::Regular, Pt(10.0));
        let bold = typeface.width_of_text("Page", FontStyle::Bold, Pt(10.0));
        assert!(bold > regular);
    }

    #[test]
    fn garbage_font_bytes_fail_to_load() {
        let result = Typeface::embedded(vec![0, 1, 2, 3], vec![0, 1, 2, 3]);
        assert!(matches!(result, Err(PDFError::FaceParsingError(_))));
    }

    #[test]
    fn default_typeface_is_times() {
        assert!(matches!(
            Typeface::default().regular,
            Font::Standard(StandardFont::TimesRoman)
        ));
    }
}
