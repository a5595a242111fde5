//! Error types for Casement.

use thiserror::Error;

/// The main error type for Casement operations.
///
/// Most window operations are best-effort and never fail; this type covers
/// the few paths that must abort, chiefly window construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CasementError {
    /// The host widget could not be created.
    ///
    /// Construction is aborted; no partially initialized window exists.
    #[error("failed to create window: {0}")]
    WindowCreation(String),

    /// The construction options were rejected.
    #[error("invalid window options: {0}")]
    InvalidOptions(String),

    /// An accelerator string could not be parsed.
    #[error("invalid accelerator: {0}")]
    InvalidAccelerator(String),
}

/// A specialized Result type for Casement operations.
pub type Result<T> = std::result::Result<T, CasementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CasementError::WindowCreation("no display".to_string());
        assert_eq!(err.to_string(), "failed to create window: no display");

        let err = CasementError::InvalidOptions("width must be positive".to_string());
        assert!(err.to_string().contains("width must be positive"));

        let err = CasementError::InvalidAccelerator("Ctrl+".to_string());
        assert!(err.to_string().starts_with("invalid accelerator"));
    }
}
