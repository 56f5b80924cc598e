//! Rendering tests against the bundled logo

mod common;

use chrono::{TimeZone, Utc};
use lopdf::{Document, Object};
use proposta_pagbank::{render, ErrorCode, ProposalInput, ProposalRenderer};

fn sample_input() -> ProposalInput {
    ProposalInput::new("11.222.333/0001-44", "Padaria Pão Quente Ltda", "Pão Quente")
}

#[test]
fn test_page_is_a4() {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 15, 30, 45).unwrap();
    let pdf = render(&sample_input(), now, &common::logo_bytes()).unwrap();

    let doc = Document::load_mem(&pdf).unwrap();
    let page_id = *doc.get_pages().values().next().unwrap();
    let page = doc.get_dictionary(page_id).unwrap();
    let media_box: Vec<f32> = page
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| match v {
            Object::Integer(i) => *i as f32,
            Object::Real(r) => *r,
            other => panic!("unexpected MediaBox entry {:?}", other),
        })
        .collect();

    assert_eq!(media_box.len(), 4);
    assert!((media_box[2] - 595.28).abs() < 0.01);
    assert!((media_box[3] - 841.89).abs() < 0.01);
}

#[test]
fn test_header_lines_in_order() {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 15, 30, 45).unwrap();
    let pdf = render(&sample_input(), now, &common::logo_bytes()).unwrap();
    let text = common::shown_text(&pdf);

    assert_eq!(
        &text[..5],
        &[
            "Proposta Comercial",
            "CNPJ: 11.222.333/0001-44",
            "Razão Social: Padaria Pão Quente Ltda",
            "Nome Fantasia: Pão Quente",
            "Data/Hora: 15/01/2024, 12:30:45 (Horário SP)",
        ]
    );
}

#[test]
fn test_fee_table_cells() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 3, 0, 0).unwrap();
    let pdf = render(&sample_input(), now, &common::logo_bytes()).unwrap();
    let text = common::shown_text(&pdf);

    // Title, four data lines, three headers, 19 rows of three cells
    assert_eq!(text.len(), 5 + 3 + 19 * 3);
    assert_eq!(&text[5..8], &["Tipo", "Master/Visa", "Outras"]);
    assert_eq!(&text[8..11], &["DÉBITO", "0,49%", "0,49%"]);
    assert_eq!(&text[11..14], &["CRÉDITO 2X", "1,32%", "1,57%"]);
    assert_eq!(
        &text[text.len() - 3..],
        &["PIX | QR CODE", "0,00% (isento)", "0,00% (isento)"]
    );
}

#[test]
fn test_empty_fields_still_render() {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 15, 30, 45).unwrap();
    let pdf = render(&ProposalInput::new("", "", ""), now, &common::logo_bytes()).unwrap();
    let text = common::shown_text(&pdf);

    assert_eq!(text[1], "CNPJ: ");
    assert_eq!(text[2], "Razão Social: ");
    assert_eq!(text[3], "Nome Fantasia: ");
}

#[test]
fn test_renderer_reuse_is_deterministic() {
    let renderer = ProposalRenderer::new(&common::logo_bytes()).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 3, 9, 23, 59, 59).unwrap();

    let first = renderer.render(&sample_input(), now).unwrap();
    let second = renderer.render(&sample_input(), now).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_midnight_rollover_in_sao_paulo() {
    // 02:15 UTC is still the previous evening in São Paulo
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 2, 15, 0).unwrap();
    let pdf = render(&sample_input(), now, &common::logo_bytes()).unwrap();
    let text = common::shown_text(&pdf);

    assert_eq!(text[4], "Data/Hora: 29/02/2024, 23:15:00 (Horário SP)");
}

#[test]
fn test_bad_logo_fails_before_rendering() {
    let now = Utc::now();
    let err = render(&sample_input(), now, b"not a png").unwrap_err();
    assert_eq!(err.code, ErrorCode::AssetCorrupt);
    assert!(err.code.is_fatal());

    let err = render(&sample_input(), now, &[]).unwrap_err();
    assert_eq!(err.code, ErrorCode::AssetNotFound);
}
