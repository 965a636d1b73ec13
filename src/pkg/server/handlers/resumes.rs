use std::path::Path;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::{
    Json,
    extract::{Multipart, State},
};
use standard_error::{StandardError, Status};

use super::Payload;
use crate::pkg::internal::ai::extract::{self, extract_document};
use crate::pkg::internal::ai::generate::GenerateOps;
use crate::pkg::internal::ai::prompts;
use crate::pkg::internal::ai::repair::parse_model_json;
use crate::pkg::internal::records::analysis::{decode::decode_analysis, spec::AnalysisResult};
use crate::pkg::internal::records::resume::{decode::decode_resume, spec::ResumeRecord};
use crate::{pkg::server::state::AppState, prelude::Result};

const MAX_RESUME_BYTES: usize = 10 * 1024 * 1024;

/// Extracts structured resume data from an uploaded document. Best-effort:
/// fields the model misses come back defaulted rather than failing the
/// request.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Payload<ResumeRecord>>> {
    let (data, mime_type) = read_resume_field(multipart).await?;
    let content = extract_document(&data, &mime_type)?;
    tracing::debug!("extracted {} chars of resume text", content.len());
    let answer = state
        .ai_client
        .complete(&prompts::resume_extraction(&content))
        .await?;
    let record = decode_resume(&parse_model_json(&answer)?);
    Ok(Json(Payload { data: record }))
}

/// Scores an uploaded resume. Strict: a malformed score or bullet list
/// fails the request, no partial result goes out.
pub async fn analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Payload<AnalysisResult>>> {
    let (data, mime_type) = read_resume_field(multipart).await?;
    let content = extract_document(&data, &mime_type)?;
    let answer = state
        .ai_client
        .complete(&prompts::resume_analysis(&content))
        .await?;
    let result = decode_analysis(&parse_model_json(&answer)?)?;
    Ok(Json(Payload { data: result }))
}

async fn read_resume_field(mut multipart: Multipart) -> Result<(Bytes, String)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| StandardError::new(&format!("ERR-UPLOAD-001: {}", e)))?
    {
        if field.name().unwrap_or("") != "resume" {
            let _ = field
                .bytes()
                .await
                .map_err(|e| StandardError::new(&format!("ERR-UPLOAD-001: {}", e)))?;
            continue;
        }
        let file_name = field.file_name().unwrap_or("unknown").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| StandardError::new(&format!("ERR-UPLOAD-001: {}", e)))?;
        let file_extension = Path::new(&file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !["pdf", "doc", "docx"].contains(&file_extension.as_str()) {
            return Err(StandardError::new(
                "ERR-UPLOAD-002: Invalid file type. Only PDF, DOC, DOCX files are allowed",
            )
            .code(StatusCode::BAD_REQUEST));
        }
        if data.len() > MAX_RESUME_BYTES {
            return Err(
                StandardError::new("ERR-UPLOAD-003: File too large. Maximum size is 10MB")
                    .code(StatusCode::BAD_REQUEST),
            );
        }
        let mime_type = match file_extension.as_str() {
            "pdf" => extract::MIME_PDF,
            "doc" => extract::MIME_DOC,
            _ => extract::MIME_DOCX,
        };
        return Ok((data, mime_type.to_string()));
    }
    Err(StandardError::new("ERR-UPLOAD-001: resume file missing").code(StatusCode::BAD_REQUEST))
}
