//! Shared helpers for integration tests

#![allow(dead_code)]

use lopdf::content::Content;
use lopdf::{Document, Object};
use std::path::PathBuf;

pub fn asset_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

pub fn logo_bytes() -> Vec<u8> {
    std::fs::read(asset_path("public/logo-pagbank.png")).unwrap()
}

/// Strings shown with `Tj`, in drawing order. The fonts use WinAnsi, which
/// agrees with Latin-1 for every character printed on a proposal.
pub fn shown_text(pdf: &[u8]) -> Vec<String> {
    let doc = Document::load_mem(pdf).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1, "proposal must be a single page");

    let page_id = *pages.values().next().unwrap();
    let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(bytes.iter().map(|&b| b as char).collect()),
            _ => None,
        })
        .collect()
}
