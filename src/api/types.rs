//! API Request/Response Types

use serde::{Deserialize, Serialize};

use crate::models::errors::{AppError, ErrorCode};
use crate::models::types::ProposalInput;

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    pub latency_ms: f64,
    pub timestamp: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, latency_ms: f64) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(error: ApiError, latency_ms: f64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            latency_ms,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// API Error
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ApiBadRequest.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Unknown.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&AppError> for ApiError {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.code_str().to_string(),
            message: err.message.clone(),
            details: std::error::Error::source(err).map(|s| s.to_string()),
        }
    }
}

// ============================================
// Proposal Generation
// ============================================

/// `POST /gerar-pdf` form body. Fields are optional here so a missing one
/// can be reported by name instead of as a generic decode failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfForm {
    pub cnpj: Option<String>,
    pub razao_social: Option<String>,
    pub nome_fantasia: Option<String>,
}

impl TryFrom<GeneratePdfForm> for ProposalInput {
    type Error = AppError;

    fn try_from(form: GeneratePdfForm) -> Result<Self, Self::Error> {
        Ok(ProposalInput::new(
            form.cnpj.ok_or_else(|| AppError::missing_field("cnpj"))?,
            form.razao_social
                .ok_or_else(|| AppError::missing_field("razaoSocial"))?,
            form.nome_fantasia
                .ok_or_else(|| AppError::missing_field("nomeFantasia"))?,
        ))
    }
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_form_converts() {
        let form = GeneratePdfForm {
            cnpj: Some("12.345/0001-99".into()),
            razao_social: Some("Acme Ltda".into()),
            nome_fantasia: Some(String::new()),
        };
        let input = ProposalInput::try_from(form).unwrap();
        assert_eq!(input.razao_social, "Acme Ltda");
        assert_eq!(input.nome_fantasia, "");
    }

    #[test]
    fn test_missing_field_is_named() {
        let form = GeneratePdfForm {
            cnpj: Some("1".into()),
            razao_social: None,
            nome_fantasia: Some("Acme".into()),
        };
        let err = ProposalInput::try_from(form).unwrap_err();
        assert_eq!(err.code, ErrorCode::ApiMissingField);
        assert!(err.message.contains("razaoSocial"));
    }

    #[test]
    fn test_error_envelope_serialization() {
        let err = AppError::missing_field("cnpj");
        let body = serde_json::to_value(ApiResponse::error(ApiError::from(&err), 1.5)).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "API_MISSING_FIELD");
        assert!(body.get("data").is_none());
    }
}
