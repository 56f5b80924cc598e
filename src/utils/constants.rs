//! Constants Module - Single Source of Truth
//!
//! Page geometry, colors, fixed proposal text and the fee schedule.
//! Nothing here is derived from request data.

use chrono_tz::Tz;

use crate::models::types::{FeeTableRow, Rgb};

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "Proposta PagBank";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Written to the PDF `/Producer` entry
pub const PDF_PRODUCER: &str = concat!("proposta_pagbank ", env!("CARGO_PKG_VERSION"));

// ============================================
// SERVER CONFIGURATION
// ============================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_HOST: &str = "PROPOSTA_HOST";
pub const ENV_LOGO_PATH: &str = "PROPOSTA_LOGO_PATH";
pub const ENV_INDEX_PATH: &str = "PROPOSTA_INDEX_PATH";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_LOGO_PATH: &str = "public/logo-pagbank.png";
pub const DEFAULT_INDEX_PATH: &str = "views/index.html";

/// Attachment name prefix, followed by the CNPJ digits
pub const FILENAME_PREFIX: &str = "Proposta_PagBank_";

// ============================================
// PAGE GEOMETRY (points)
// ============================================

/// ISO A4 width
pub const PAGE_WIDTH: f32 = 595.28;
/// ISO A4 height
pub const PAGE_HEIGHT: f32 = 841.89;
/// Distance from the top edge to the first element
pub const PAGE_TOP_MARGIN: f32 = 10.0;

pub const LOGO_SCALE: f32 = 0.22;
pub const LOGO_GAP: f32 = 20.0;

pub const TITLE_SIZE: f32 = 22.0;
pub const TITLE_GAP: f32 = 30.0;

/// Left edge of the company data lines
pub const FIELD_X: f32 = 50.0;
pub const FIELD_SIZE: f32 = 11.0;
/// Cursor steps after CNPJ, Razão Social, Nome Fantasia and the timestamp
pub const FIELD_GAPS: [f32; 4] = [20.0, 16.0, 20.0, 30.0];

pub const COLUMN_WIDTHS: [f32; 3] = [240.0, 130.0, 130.0];
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_FONT_SIZE: f32 = 11.0;
pub const BODY_FONT_SIZE: f32 = 10.0;
/// Left padding of the label column
pub const FIRST_COLUMN_INSET: f32 = 6.0;
pub const GRID_THICKNESS: f32 = 0.5;

// ============================================
// COLORS
// ============================================

pub const TEXT_COLOR: Rgb = Rgb::gray(0.0);
pub const HEADER_BACKGROUND: Rgb = Rgb::new(0.0, 0.6, 0.5);
pub const HEADER_TEXT_COLOR: Rgb = Rgb::gray(1.0);
pub const ZEBRA_FILL: Rgb = Rgb::gray(0.96);
pub const GRID_COLOR: Rgb = Rgb::gray(0.8);

// ============================================
// PROPOSAL TEXT
// ============================================

pub const TITLE: &str = "Proposta Comercial";

pub const CNPJ_LABEL: &str = "CNPJ";
pub const RAZAO_SOCIAL_LABEL: &str = "Razão Social";
pub const NOME_FANTASIA_LABEL: &str = "Nome Fantasia";
pub const TIMESTAMP_LABEL: &str = "Data/Hora";
pub const TIMESTAMP_SUFFIX: &str = "(Horário SP)";

/// Zone every proposal timestamp is shown in
pub const PROPOSAL_TIME_ZONE: Tz = chrono_tz::America::Sao_Paulo;

/// `dd/MM/yyyy, HH:mm:ss`
pub const TIMESTAMP_PATTERN: &str = "%d/%m/%Y, %H:%M:%S";

// ============================================
// FEE SCHEDULE
// ============================================

pub const TABLE_HEADERS: [&str; 3] = ["Tipo", "Master/Visa", "Outras"];

pub const FEE_TABLE: [FeeTableRow; 19] = [
    FeeTableRow::new("DÉBITO", "0,49%", "0,49%"),
    FeeTableRow::new("CRÉDITO 2X", "1,32%", "1,57%"),
    FeeTableRow::new("CRÉDITO 3X", "1,61%", "1,89%"),
    FeeTableRow::new("CRÉDITO 4X", "2,03%", "2,35%"),
    FeeTableRow::new("CRÉDITO 5X", "2,40%", "2,60%"),
    FeeTableRow::new("CRÉDITO 6X", "2,96%", "3,22%"),
    FeeTableRow::new("CRÉDITO 7X", "3,30%", "3,41%"),
    FeeTableRow::new("CRÉDITO 8X", "3,80%", "3,92%"),
    FeeTableRow::new("CRÉDITO 9X", "4,02%", "4,23%"),
    FeeTableRow::new("CRÉDITO 10X", "4,40%", "4,63%"),
    FeeTableRow::new("CRÉDITO 11X", "4,73%", "4,91%"),
    FeeTableRow::new("CRÉDITO 12X", "5,01%", "5,23%"),
    FeeTableRow::new("CRÉDITO 13X", "5,40%", "5,61%"),
    FeeTableRow::new("CRÉDITO 14X", "5,74%", "5,94%"),
    FeeTableRow::new("CRÉDITO 15X", "6,01%", "6,23%"),
    FeeTableRow::new("CRÉDITO 16X", "6,33%", "6,55%"),
    FeeTableRow::new("CRÉDITO 17X", "6,88%", "7,01%"),
    FeeTableRow::new("CRÉDITO 18X", "7,55%", "7,89%"),
    FeeTableRow::new("PIX | QR CODE", "0,00% (isento)", "0,00% (isento)"),
];
