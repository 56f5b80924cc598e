//! API Request Handlers

use axum::{
    extract::{rejection::FormRejection, Form, Json, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use super::types::*;
use crate::core::logo::Logo;
use crate::core::renderer::ProposalRenderer;
use crate::models::config::ServerConfig;
use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::ProposalInput;

type ErrorResponse = (StatusCode, Json<ApiResponse<()>>);

/// Shared application state
pub struct AppState {
    pub renderer: ProposalRenderer,
    pub index_html: String,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(renderer: ProposalRenderer, index_html: impl Into<String>) -> Self {
        Self {
            renderer,
            index_html: index_html.into(),
            start_time: Instant::now(),
        }
    }

    /// Read the logo and intake form named by `config`.
    ///
    /// Both are required; a missing or undecodable logo stops startup.
    pub fn load(config: &ServerConfig) -> AppResult<Self> {
        let logo_bytes = std::fs::read(&config.logo_path).map_err(|e| {
            AppError::with_source(
                ErrorCode::AssetNotFound,
                format!("Logo not found at {}", config.logo_path.display()),
                e,
            )
        })?;
        let logo = Logo::decode(&logo_bytes)?;
        info!(
            path = %config.logo_path.display(),
            width = logo.width(),
            height = logo.height(),
            "Logo loaded"
        );

        let index_html = std::fs::read_to_string(&config.index_path).map_err(|e| {
            AppError::with_source(
                ErrorCode::AssetNotFound,
                format!("Intake form not found at {}", config.index_path.display()),
                e,
            )
        })?;

        Ok(Self::new(ProposalRenderer::from_logo(logo), index_html))
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn error_response(err: &AppError, start: Instant) -> ErrorResponse {
    let status =
        StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ApiResponse::error(ApiError::from(err), elapsed_ms(start))),
    )
}

// ============================================
// Intake Form
// ============================================

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.index_html.clone())
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthData>> {
    let start = Instant::now();

    let data = HealthData {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    };

    Json(ApiResponse::success(data, elapsed_ms(start)))
}

// ============================================
// Proposal Generation
// ============================================

pub async fn generate_pdf(
    State(state): State<Arc<AppState>>,
    form: Result<Form<GeneratePdfForm>, FormRejection>,
) -> Result<Response, ErrorResponse> {
    let start = Instant::now();

    let Form(form) = form.map_err(|rejection| {
        warn!(error = %rejection, "Rejected proposal form");
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                ApiError::bad_request(rejection.body_text()),
                elapsed_ms(start),
            )),
        )
    })?;

    let input = ProposalInput::try_from(form).map_err(|e| {
        warn!(code = e.code_str(), "{}", e.message);
        error_response(&e, start)
    })?;

    let filename = input.filename();
    let now = Utc::now();

    // Rendering is CPU-bound
    let rendered = tokio::task::spawn_blocking(move || state.renderer.render(&input, now)).await;

    let bytes = match rendered {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(e)) => {
            error!(code = e.code_str(), error = %e, "Proposal rendering failed");
            return Err(error_response(&e, start));
        }
        Err(join_error) => {
            error!(error = %join_error, "Rendering task aborted");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(
                    ApiError::internal("Rendering task aborted"),
                    elapsed_ms(start),
                )),
            ));
        }
    };

    info!(
        filename = %filename,
        size_bytes = bytes.len(),
        latency_ms = elapsed_ms(start),
        "Proposal generated"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        bytes,
    )
        .into_response())
}
