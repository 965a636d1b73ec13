use std::io::Cursor;

use axum::http::StatusCode;
use lazy_static::lazy_static;
use regex::Regex;
use standard_error::{Interpolate, StandardError, Status};

use crate::prelude::Result;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

lazy_static! {
    static ref SPACE_RUNS: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref LINE_EDGES: Regex = Regex::new(r" ?\n ?").unwrap();
    static ref NEWLINE_RUNS: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Turns an uploaded document into plain text, dispatching on the declared
/// content type. Output always has collapsed whitespace; documents that
/// yield no text are rejected here so no model call is wasted on them.
pub fn extract_document(data: &[u8], content_type: &str) -> Result<String> {
    let raw = match content_type {
        MIME_PDF => extract_text_from_pdf(data)?,
        MIME_DOCX | MIME_DOC => extract_text_from_docx(data)?,
        other => {
            return Err(StandardError::new(&format!(
                "ERR-EXTRACT-001: unsupported file type {}",
                other
            ))
            .code(StatusCode::BAD_REQUEST));
        }
    };
    let text = normalize_whitespace(&raw);
    if text.is_empty() {
        return Err(
            StandardError::new("ERR-EXTRACT-003: no text found in document")
                .code(StatusCode::BAD_REQUEST),
        );
    }
    Ok(text)
}

/// PDF text arrives token by token with irregular spacing, so runs of
/// spaces collapse to one space and blank-line runs to one newline.
pub fn normalize_whitespace(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let collapsed = SPACE_RUNS.replace_all(&unified, " ");
    let collapsed = LINE_EDGES.replace_all(&collapsed, "\n");
    let collapsed = NEWLINE_RUNS.replace_all(&collapsed, "\n");
    collapsed.trim().to_string()
}

fn extract_text_from_pdf(data: &[u8]) -> Result<String> {
    use lopdf::Document;
    let cursor = Cursor::new(data);
    let doc = Document::load_from(cursor).map_err(|e| {
        StandardError::new("ERR-EXTRACT-002")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })?;

    let pages = doc.get_pages();
    let mut text = String::new();

    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push(' ');
            }
            Err(e) => {
                tracing::warn!("failed to extract text from page {}: {}", page_num, e);
            }
        }
    }
    Ok(text)
}

fn extract_text_from_docx(data: &[u8]) -> Result<String> {
    use docx_rs::read_docx;
    let docx = read_docx(data).map_err(|e| {
        StandardError::new("ERR-EXTRACT-002")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })?;
    let mut text = String::new();
    for paragraph in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(p) = paragraph {
            for child in p.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}
