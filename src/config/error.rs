//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors that can occur while loading question sets.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read question set file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse question set file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid question set: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_variant_displays_inner_error() {
        let err = ConfigError::Invalid(ValidationError::empty_field("questions"));
        assert_eq!(
            format!("{}", err),
            "Invalid question set: Field 'questions' cannot be empty"
        );
    }
}
