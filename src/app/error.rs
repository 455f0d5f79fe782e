use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid font size: {0}")]
    InvalidFontSize(u32),

    #[error("Font family name is empty")]
    EmptyFontFamily,
}

impl AppError {
    /// Text for error dialogs: the underlying cause, without the variant prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Io(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
