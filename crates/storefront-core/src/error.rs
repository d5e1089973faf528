use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Duplicate category id: {id}")]
    DuplicateId { id: String },

    #[error("Duplicate category slug: '{slug}' used by {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },

    #[error("Category {id} references unknown parent {parent_id}")]
    UnknownParent { id: String, parent_id: String },

    #[error("Cycle detected in category hierarchy at {id} (walked {hops} hops)")]
    CycleDetected { id: String, hops: usize },

    #[error("Category {id} is at level {level}, deeper than max depth {max_depth}")]
    DepthExceeded {
        id: String,
        level: u32,
        max_depth: usize,
    },

    #[error("Category {id} declares level {declared} but its parent chain puts it at {actual}")]
    LevelMismatch {
        id: String,
        declared: u32,
        actual: u32,
    },

    #[error("Category not found: {key}")]
    CategoryNotFound { key: String },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: {message}")]
    InvalidConfigValue { key: String, message: String },

    #[error("Failed to parse catalog {path}: {message}")]
    CatalogParse { path: PathBuf, message: String },

    #[error("File already exists: {path} (use --force to overwrite)")]
    FileExists { path: PathBuf },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

impl StorefrontError {
    /// Corrupt hierarchy configuration, as opposed to a runtime condition.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::DuplicateId { .. }
                | Self::DuplicateSlug { .. }
                | Self::UnknownParent { .. }
                | Self::CycleDetected { .. }
                | Self::DepthExceeded { .. }
                | Self::LevelMismatch { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CategoryNotFound { .. } => 2,
            e if e.is_structural() => 3,
            Self::ConfigParse { .. }
            | Self::ConfigKeyNotFound { .. }
            | Self::InvalidConfigValue { .. }
            | Self::CatalogParse { .. } => 4,
            Self::InvalidArgument { .. } => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_errors_exit_with_3() {
        let err = StorefrontError::CycleDetected {
            id: "a".to_string(),
            hops: 4,
        };
        assert!(err.is_structural());
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_not_found_is_not_structural() {
        let err = StorefrontError::CategoryNotFound {
            key: "missing".to_string(),
        };
        assert!(!err.is_structural());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_invalid_argument_exit_code() {
        let err = StorefrontError::InvalidArgument {
            message: "missing '='".to_string(),
        };
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_config_errors_exit_with_4() {
        let err = StorefrontError::ConfigKeyNotFound {
            key: "nope".to_string(),
        };
        assert_eq!(err.exit_code(), 4);
    }
}
