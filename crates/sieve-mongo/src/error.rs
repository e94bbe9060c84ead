use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The expression kind has no encoding in the MongoDB filter language.
    UnsupportedExpression(&'static str),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::UnsupportedExpression(kind) => {
                write!(f, "unsupported expression: {kind}")
            }
        }
    }
}

impl std::error::Error for TranslateError {}

impl TranslateError {
    pub fn status_code(&self) -> http::StatusCode {
        match self {
            TranslateError::UnsupportedExpression(_) => http::StatusCode::NOT_IMPLEMENTED,
        }
    }
}
