use thiserror::Error;

/// Reasons a consumer could not be wired up. All of them leave the feature
/// disabled for the page without affecting anything else.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element matches `{0}`")]
    MissingTarget(String),
    #[error("`{0}` is not a valid selector")]
    InvalidSelector(String),
    #[error("`{0}` does not match an HTML element")]
    NotHtmlElement(String),
    #[error("failed to attach `{0}` listener")]
    Listen(&'static str),
}
