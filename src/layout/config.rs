use crate::font::FontFamily;
use crate::layout::heading::DEFAULT_TITLE;
use crate::pagesize::{PageSize, Paper};
use crate::{PDFError, Pt};
use serde::{Deserialize, Serialize};

/// Font sizes headings are drawn at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingSizes {
    pub h1: Pt,
    pub h2: Pt,
}

impl Default for HeadingSizes {
    fn default() -> Self {
        HeadingSizes {
            h1: Pt(16.0),
            h2: Pt(14.0),
        }
    }
}

/// Everything that shapes a layout. Fixed for the duration of a layout call.
///
/// Missing fields fall back to the defaults when deserialising, so a configuration
/// file only needs to name what it changes:
///
/// ```
/// use smartdoc_pdf::layout::LayoutConfig;
/// use smartdoc_pdf::Pt;
///
/// let config: LayoutConfig = serde_json::from_str(r#"{ "margin": 72 }"#).unwrap();
/// assert_eq!(config.margin, Pt(72.0));
/// assert_eq!(config.line_height, Pt(18.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub paper: Paper,
    /// Applied to all four sides of the page
    pub margin: Pt,
    /// Standard font family, used unless the caller supplies embedded fonts
    pub font_family: FontFamily,
    pub body_font_size: Pt,
    /// Vertical advance after each body line
    pub line_height: Pt,
    pub heading_sizes: HeadingSizes,
    pub footer_font_size: Pt,
    /// A line equal to this (ignoring case and surrounding whitespace) is the document title
    pub title_match: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            paper: Paper::A4,
            margin: Pt(56.0),
            font_family: FontFamily::Times,
            body_font_size: Pt(12.0),
            line_height: Pt(18.0),
            heading_sizes: HeadingSizes::default(),
            footer_font_size: Pt(10.0),
            title_match: DEFAULT_TITLE.to_string(),
        }
    }
}

impl LayoutConfig {
    /// Parse a (possibly partial) configuration from JSON
    pub fn from_json(json: &str) -> Result<LayoutConfig, PDFError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn page_size(&self) -> PageSize {
        self.paper.size()
    }

    pub fn page_width(&self) -> Pt {
        self.page_size().0
    }

    pub fn page_height(&self) -> Pt {
        self.page_size().1
    }

    /// Width available to text between the left and right margins
    pub fn max_width(&self) -> Pt {
        self.page_width() - self.margin * 2.0
    }

    /// Where the cursor starts on each page
    pub fn top(&self) -> Pt {
        self.margin
    }

    /// Once the cursor reaches this, the next draw goes on a new page
    pub fn page_bottom(&self) -> Pt {
        self.page_height() - self.margin
    }

    /// Check that the configuration describes a page text can be laid out on
    pub fn validate(&self) -> Result<(), PDFError> {
        let positive = [
            ("page width", self.page_width()),
            ("page height", self.page_height()),
            ("body font size", self.body_font_size),
            ("line height", self.line_height),
            ("h1 size", self.heading_sizes.h1),
            ("h2 size", self.heading_sizes.h2),
            ("footer font size", self.footer_font_size),
        ];
        for (name, value) in positive {
            if !(value.0.is_finite() && value.0 > 0.0) {
                return Err(PDFError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.margin.0.is_finite() && self.margin.0 >= 0.0) {
            return Err(PDFError::InvalidConfig(format!(
                "margin must not be negative, got {}",
                self.margin
            )));
        }
        if self.max_width() <= Pt(0.0) {
            return Err(PDFError::InvalidConfig(format!(
                "margin {} leaves no room for text on a page {} wide",
                self.margin,
                self.page_width()
            )));
        }
        if self.page_bottom() <= self.top() {
            return Err(PDFError::InvalidConfig(format!(
                "margin {} leaves no room for text on a page {} high",
                self.margin,
                self.page_height()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_a4_with_times() {
        let config = LayoutConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.max_width().0 - (595.2756 - 112.0)).abs() < 1e-3);
        assert!((config.page_bottom().0 - (841.8898 - 56.0)).abs() < 1e-3);
        assert_eq!(config.font_family, FontFamily::Times);
        assert_eq!(config.title_match, "FORMAT OF CONTRACT AGREEMENT");
    }

    #[test]
    fn partial_json_overrides_defaults() {
        let config = LayoutConfig::from_json(
            r#"{ "paper": "letter", "font_family": "helvetica", "heading_sizes": { "h1": 20 } }"#,
        )
        .expect("valid config");
        assert_eq!(config.paper, Paper::Letter);
        assert_eq!(config.font_family, FontFamily::Helvetica);
        assert_eq!(config.heading_sizes.h1, Pt(20.0));
        assert_eq!(config.heading_sizes.h2, Pt(14.0));
        assert_eq!(config.body_font_size, Pt(12.0));
    }

    #[test]
    fn rejects_margins_wider_than_the_page() {
        let config = LayoutConfig {
            margin: Pt(400.0),
            ..LayoutConfig::default()
        };
        assert!(matches!(config.validate(), Err(PDFError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_line_height() {
        let result = LayoutConfig::from_json(r#"{ "line_height": 0 }"#);
        assert!(matches!(result, Err(PDFError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        let result = LayoutConfig::from_json(r#"{ "margin": "wide" }"#);
        assert!(matches!(result, Err(PDFError::Json(_))));
    }
}
