use thiserror::Error;

/// All errors that the crate can generate. Wrapping and measuring never fail; only
/// loading font metrics from disk or from raw bytes can.
#[derive(Error, Debug)]
pub enum WrapError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),
}
