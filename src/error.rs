use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// A layout configuration or template input could not be (de)serialised
    Json(#[from] serde_json::Error),

    #[error("invalid layout configuration: {0}")]
    /// The layout configuration describes an impossible page
    InvalidConfig(String),

    #[error("font `{0}` has no unicode cmap table")]
    /// An embedded font can't map characters to glyphs
    MissingCmap(String),

    #[error("page is missing from the layout")]
    /// A page id in the page order doesn't resolve to a page
    PageMissing,
}
