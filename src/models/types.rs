//! Type definitions for proposal generation
//! Request payload, fee table rows, colors and page layout state

use crate::utils::constants::{
    COLUMN_WIDTHS, FILENAME_PREFIX, PAGE_HEIGHT, PAGE_TOP_MARGIN, PAGE_WIDTH,
};

/// Company data printed on a proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalInput {
    pub cnpj: String,
    pub razao_social: String,
    pub nome_fantasia: String,
}

impl ProposalInput {
    pub fn new(
        cnpj: impl Into<String>,
        razao_social: impl Into<String>,
        nome_fantasia: impl Into<String>,
    ) -> Self {
        Self {
            cnpj: cnpj.into(),
            razao_social: razao_social.into(),
            nome_fantasia: nome_fantasia.into(),
        }
    }

    /// CNPJ with punctuation removed
    pub fn cnpj_digits(&self) -> String {
        digits_only(&self.cnpj)
    }

    /// Attachment filename for this proposal
    pub fn filename(&self) -> String {
        proposal_filename(&self.cnpj)
    }
}

/// `Proposta_PagBank_<digits>.pdf`; every non-digit of `cnpj` is dropped
pub fn proposal_filename(cnpj: &str) -> String {
    format!("{}{}.pdf", FILENAME_PREFIX, digits_only(cnpj))
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// One line of the fee schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeTableRow {
    pub label: &'static str,
    pub master_visa_rate: &'static str,
    pub other_brands_rate: &'static str,
}

impl FeeTableRow {
    pub const fn new(
        label: &'static str,
        master_visa_rate: &'static str,
        other_brands_rate: &'static str,
    ) -> Self {
        Self {
            label,
            master_visa_rate,
            other_brands_rate,
        }
    }

    /// Cells in column order
    pub fn cells(&self) -> [&'static str; 3] {
        [self.label, self.master_visa_rate, self.other_brands_rate]
    }
}

/// Device RGB color, components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level)
    }
}

/// Page geometry plus the vertical drawing cursor.
///
/// PDF user space grows upwards, so the cursor starts near the top edge and
/// only ever moves down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub cursor: f32,
}

impl PageLayout {
    /// ISO A4 portrait with the cursor just below the top edge
    pub fn a4() -> Self {
        Self {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            cursor: PAGE_HEIGHT - PAGE_TOP_MARGIN,
        }
    }

    /// Move the cursor down by `amount` points
    pub fn advance(&mut self, amount: f32) {
        debug_assert!(amount >= 0.0, "cursor only moves down");
        self.cursor -= amount;
    }

    /// Combined width of all fee table columns
    pub fn table_width() -> f32 {
        COLUMN_WIDTHS.iter().sum()
    }

    /// Left edge that centers the fee table horizontally
    pub fn table_start_x(&self) -> f32 {
        (self.width - Self::table_width()) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_strips_non_digits() {
        assert_eq!(
            proposal_filename("12.345/0001-99"),
            "Proposta_PagBank_12345000199.pdf"
        );
        assert_eq!(proposal_filename(""), "Proposta_PagBank_.pdf");
        assert_eq!(proposal_filename("abc"), "Proposta_PagBank_.pdf");
    }

    #[test]
    fn test_input_filename() {
        let input = ProposalInput::new("11.222.333/0001-44", "Acme Ltda", "Acme");
        assert_eq!(input.cnpj_digits(), "11222333000144");
        assert_eq!(input.filename(), "Proposta_PagBank_11222333000144.pdf");
    }

    #[test]
    fn test_layout_cursor() {
        let mut layout = PageLayout::a4();
        assert!((layout.cursor - 831.89).abs() < 1e-3);
        layout.advance(30.0);
        assert!((layout.cursor - 801.89).abs() < 1e-3);
    }

    #[test]
    fn test_table_is_centered() {
        let layout = PageLayout::a4();
        assert_eq!(PageLayout::table_width(), 500.0);
        assert!((layout.table_start_x() - 47.64).abs() < 1e-3);
    }

    #[test]
    fn test_row_cells_order() {
        let row = FeeTableRow::new("PIX | QR CODE", "0,00% (isento)", "0,00% (isento)");
        assert_eq!(row.cells()[0], "PIX | QR CODE");
        assert_eq!(row.cells()[2], "0,00% (isento)");
    }
}
