//! Proposal Renderer
//!
//! Lays out the fixed proposal page top to bottom:
//! 1. Logo, centered
//! 2. Title, centered
//! 3. CNPJ / Razão Social / Nome Fantasia
//! 4. São Paulo timestamp
//! 5. Fee table (header band, zebra rows, grid)
//!
//! Output depends only on the input strings, `now` and the logo.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::core::canvas::PageCanvas;
use crate::core::fonts::FontFace;
use crate::core::logo::Logo;
use crate::models::errors::AppResult;
use crate::models::types::{PageLayout, ProposalInput};
use crate::utils::constants::*;
use crate::utils::timestamp::proposal_timestamp;

/// Renders proposals against a logo decoded once up front
#[derive(Debug, Clone)]
pub struct ProposalRenderer {
    logo: Logo,
}

impl ProposalRenderer {
    /// Fails with an asset error when `logo_bytes` is empty or not a PNG
    pub fn new(logo_bytes: &[u8]) -> AppResult<Self> {
        Ok(Self {
            logo: Logo::decode(logo_bytes)?,
        })
    }

    pub fn from_logo(logo: Logo) -> Self {
        Self { logo }
    }

    pub fn logo(&self) -> &Logo {
        &self.logo
    }

    /// Draw the proposal without serializing it
    pub fn compose(&self, input: &ProposalInput, now: DateTime<Utc>) -> AppResult<PageCanvas<'_>> {
        let mut layout = PageLayout::a4();
        let mut canvas = PageCanvas::new(layout.width, layout.height);

        // Logo hangs from the cursor
        let (logo_width, logo_height) = self.logo.scaled(LOGO_SCALE);
        canvas.draw_image(
            &self.logo,
            (layout.width - logo_width) / 2.0,
            layout.cursor - logo_height,
            logo_width,
            logo_height,
        );
        layout.advance(logo_height + LOGO_GAP);

        let title_width = FontFace::Bold.width_of_text_at_size(TITLE, TITLE_SIZE);
        canvas.draw_text(
            TITLE,
            (layout.width - title_width) / 2.0,
            layout.cursor,
            FontFace::Bold,
            TITLE_SIZE,
            TEXT_COLOR,
        );
        layout.advance(TITLE_GAP);

        let stamp = proposal_timestamp(now)?;
        let lines = [
            (format!("{}: {}", CNPJ_LABEL, input.cnpj), FontFace::Regular),
            (format!("{}: {}", RAZAO_SOCIAL_LABEL, input.razao_social), FontFace::Bold),
            (format!("{}: {}", NOME_FANTASIA_LABEL, input.nome_fantasia), FontFace::Bold),
            (format!("{}: {} {}", TIMESTAMP_LABEL, stamp, TIMESTAMP_SUFFIX), FontFace::Regular),
        ];
        for ((text, font), gap) in lines.iter().zip(FIELD_GAPS) {
            canvas.draw_text(text, FIELD_X, layout.cursor, *font, FIELD_SIZE, TEXT_COLOR);
            layout.advance(gap);
        }

        draw_fee_table(&mut canvas, &layout);

        debug!(
            operations = canvas.operations().len(),
            table_top = layout.cursor,
            "Proposal composed"
        );

        Ok(canvas)
    }

    /// Render the proposal to PDF bytes
    pub fn render(&self, input: &ProposalInput, now: DateTime<Utc>) -> AppResult<Vec<u8>> {
        self.compose(input, now)?.finish()
    }
}

/// One-shot render: decode `logo_bytes`, draw, serialize
pub fn render(input: &ProposalInput, now: DateTime<Utc>, logo_bytes: &[u8]) -> AppResult<Vec<u8>> {
    ProposalRenderer::new(logo_bytes)?.render(input, now)
}

/// Only odd data rows get a background; the first row is never shaded
pub fn is_shaded_row(index: usize) -> bool {
    index % 2 == 1
}

/// Baseline that visually centers text in the row whose top edge is `row_top`
fn cell_text_y(row_top: f32, font: FontFace, size: f32) -> f32 {
    row_top - ROW_HEIGHT / 2.0 - font.height_at_size(size) / 4.0
}

/// Table top edge sits at the layout cursor
fn draw_fee_table(canvas: &mut PageCanvas<'_>, layout: &PageLayout) {
    let table_width = PageLayout::table_width();
    let start_x = layout.table_start_x();
    let top = layout.cursor;
    let mut y = top;

    canvas.draw_rectangle(start_x, y - ROW_HEIGHT, table_width, ROW_HEIGHT, HEADER_BACKGROUND);
    let mut col_x = start_x;
    for (header, width) in TABLE_HEADERS.iter().zip(COLUMN_WIDTHS) {
        let text_width = FontFace::Bold.width_of_text_at_size(header, HEADER_FONT_SIZE);
        canvas.draw_text(
            header,
            col_x + width / 2.0 - text_width / 2.0,
            cell_text_y(y, FontFace::Bold, HEADER_FONT_SIZE),
            FontFace::Bold,
            HEADER_FONT_SIZE,
            HEADER_TEXT_COLOR,
        );
        col_x += width;
    }
    y -= ROW_HEIGHT;

    for (index, row) in FEE_TABLE.iter().enumerate() {
        if is_shaded_row(index) {
            canvas.draw_rectangle(start_x, y - ROW_HEIGHT, table_width, ROW_HEIGHT, ZEBRA_FILL);
        }

        let mut col_x = start_x;
        for (column, (cell, width)) in row.cells().iter().zip(COLUMN_WIDTHS).enumerate() {
            let text_x = if column == 0 {
                col_x + FIRST_COLUMN_INSET
            } else {
                col_x + (width - FontFace::Regular.width_of_text_at_size(cell, BODY_FONT_SIZE)) / 2.0
            };
            canvas.draw_text(
                cell,
                text_x,
                cell_text_y(y, FontFace::Regular, BODY_FONT_SIZE),
                FontFace::Regular,
                BODY_FONT_SIZE,
                TEXT_COLOR,
            );
            col_x += width;
        }
        y -= ROW_HEIGHT;
    }

    // One line above the header, one below every row
    let mut line_y = top;
    for _ in 0..FEE_TABLE.len() + 2 {
        canvas.draw_line(
            (start_x, line_y),
            (start_x + table_width, line_y),
            GRID_THICKNESS,
            GRID_COLOR,
        );
        line_y -= ROW_HEIGHT;
    }

    let bottom = line_y + ROW_HEIGHT;
    let mut line_x = start_x;
    for i in 0..=COLUMN_WIDTHS.len() {
        canvas.draw_line((line_x, top), (line_x, bottom), GRID_THICKNESS, GRID_COLOR);
        if let Some(width) = COLUMN_WIDTHS.get(i) {
            line_x += width;
        }
    }
}
