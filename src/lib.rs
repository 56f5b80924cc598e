//! Proposta PagBank Library
//!
//! Renders the single-page "Proposta Comercial" PDF for a merchant:
//! - PagBank logo and title
//! - CNPJ, Razão Social and Nome Fantasia lines
//! - São Paulo generation timestamp
//! - Fixed card fee table with header band, zebra rows and grid
//!
//! The HTTP surface in [`api`] serves the intake form and returns the PDF
//! as a download.

pub mod api;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{render, Logo, PageCanvas, ProposalRenderer};
pub use models::{AppError, AppResult, ErrorCode, ProposalInput, ServerConfig};
