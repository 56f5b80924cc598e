//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so it can be traced in the
//! request logs and mapped to an HTTP status.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - ASSET_xxx: static asset errors (logo, intake form)
//! - API_xxx: request errors
//! - RENDER_xxx: document generation errors
//! - CFG_xxx: configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Asset Errors
    // ============================================
    /// Static asset missing (file absent or empty)
    AssetNotFound,
    /// Static asset present but undecodable
    AssetCorrupt,

    // ============================================
    // API Errors
    // ============================================
    /// Invalid request format
    ApiBadRequest,
    /// Required form field absent
    ApiMissingField,

    // ============================================
    // Render Errors
    // ============================================
    /// Document could not be assembled or serialized
    RenderFailed,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,

    // ============================================
    // Generic Errors
    // ============================================
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssetNotFound => "ASSET_NOT_FOUND",
            Self::AssetCorrupt => "ASSET_CORRUPT",

            Self::ApiBadRequest => "API_BAD_REQUEST",
            Self::ApiMissingField => "API_MISSING_FIELD",

            Self::RenderFailed => "RENDER_FAILED",

            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",

            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ApiBadRequest | Self::ApiMissingField => 400,
            _ => 500,
        }
    }

    /// Asset failures mean the deployment itself is broken
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::AssetNotFound | Self::AssetCorrupt)
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Static asset missing
    pub fn asset_not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::AssetNotFound, msg)
    }

    /// Required form field absent
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::ApiMissingField,
            format!("Missing required field: {}", field),
        )
    }

    /// Document generation failed
    pub fn render_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::RenderFailed, msg)
    }

    /// Invalid configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorCode::Unknown, "IO error", err)
    }
}

impl From<lopdf::Error> for AppError {
    fn from(err: lopdf::Error) -> Self {
        Self::with_source(ErrorCode::RenderFailed, "PDF serialization error", err)
    }
}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        Self::with_source(ErrorCode::AssetCorrupt, "Image is not a valid PNG", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::missing_field("cnpj");
        assert_eq!(err.code, ErrorCode::ApiMissingField);
        assert_eq!(err.code_str(), "API_MISSING_FIELD");
        assert_eq!(err.to_string(), "[API_MISSING_FIELD] Missing required field: cnpj");
    }

    #[test]
    fn test_fatal() {
        assert!(ErrorCode::AssetNotFound.is_fatal());
        assert!(ErrorCode::AssetCorrupt.is_fatal());
        assert!(!ErrorCode::ApiMissingField.is_fatal());
    }

    #[test]
    fn test_http_status() {
        assert_eq!(ErrorCode::ApiBadRequest.http_status(), 400);
        assert_eq!(ErrorCode::ApiMissingField.http_status(), 400);
        assert_eq!(ErrorCode::AssetCorrupt.http_status(), 500);
        assert_eq!(ErrorCode::RenderFailed.http_status(), 500);
    }

    #[test]
    fn test_image_error_is_corrupt_asset() {
        use std::error::Error;

        let decode = image::load_from_memory_with_format(b"nope", image::ImageFormat::Png);
        let err = AppError::from(decode.unwrap_err());
        assert_eq!(err.code, ErrorCode::AssetCorrupt);
        assert!(err.code.is_fatal());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AppError::from(io);
        assert!(err.source().is_some());
    }
}
