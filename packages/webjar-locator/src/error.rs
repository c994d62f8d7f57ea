//! Error types for asset lookup and webjar metadata.

use thiserror::Error;

/// Why an asset request could not be served.
///
/// The `Display` output is the diagnostic message returned to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// No metadata for the artifact in any namespace (or it was unreadable).
    #[error("artifact not found '{artifact}' (for path '{file_path}')")]
    UnknownArtifact { artifact: String, file_path: String },

    /// The artifact resolved, but holds no such file.
    #[error("resource '{file_path}' not found in '{artifact}'")]
    FileNotFound { artifact: String, file_path: String },

    /// No such file under the static prefix.
    #[error("resource '{file_path}' not found")]
    StaticFileNotFound { file_path: String },
}

impl AssetError {
    /// The requested file path, whatever the failure.
    pub fn file_path(&self) -> &str {
        match self {
            AssetError::UnknownArtifact { file_path, .. }
            | AssetError::FileNotFound { file_path, .. }
            | AssetError::StaticFileNotFound { file_path } => file_path,
        }
    }
}

/// Failure to read or trust a webjar's `pom.properties`.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} has no '{key}' property")]
    MissingProperty { path: String, key: &'static str },

    #[error("{path} describes artifact '{found}', expected '{expected}'")]
    IdentityMismatch {
        path: String,
        expected: String,
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_artifact_message() {
        let error = AssetError::UnknownArtifact {
            artifact: "unknown-artifact".to_string(),
            file_path: "anything".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "artifact not found 'unknown-artifact' (for path 'anything')"
        );
    }

    #[test]
    fn test_file_not_found_message() {
        let error = AssetError::FileNotFound {
            artifact: "known-artifact".to_string(),
            file_path: "missing-file".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "resource 'missing-file' not found in 'known-artifact'"
        );
        assert_eq!(error.file_path(), "missing-file");
    }

    #[test]
    fn test_identity_mismatch_message() {
        let error = MetadataError::IdentityMismatch {
            path: "META-INF/maven/org.webjars/jquery/pom.properties".to_string(),
            expected: "jquery".to_string(),
            found: "bootstrap".to_string(),
        };
        assert!(error.to_string().contains("'bootstrap', expected 'jquery'"));
    }
}
