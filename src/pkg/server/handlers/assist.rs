use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use super::Payload;
use crate::pkg::internal::ai::{generate::GenerateOps, prompts};
use crate::{pkg::server::state::AppState, prelude::Result};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryInput {
    pub job_title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: Option<u8>,
}

#[derive(Serialize)]
pub struct GeneratedSummary {
    pub summary: String,
}

pub async fn summary(
    State(state): State<AppState>,
    Json(input): Json<SummaryInput>,
) -> Result<Json<Payload<GeneratedSummary>>> {
    let prompt =
        prompts::professional_summary(&input.job_title, &input.skills, input.experience_years);
    let text = state.ai_client.complete(&prompt).await?;
    Ok(Json(Payload {
        data: GeneratedSummary {
            summary: flatten_paragraph(&text),
        },
    }))
}

// the summary field renders as one paragraph; models like to wrap
fn flatten_paragraph(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace('\n', " ")
        .replace("  ", " ")
        .trim()
        .to_string()
}
