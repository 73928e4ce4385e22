use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid argument for '{field}': {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(String),
}

impl ModelError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// Name of the field that failed validation, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(*field),
            Self::Json(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
