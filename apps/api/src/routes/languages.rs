use axum::{extract::State, Json};
use serde::Serialize;

use crate::render::OutputFormat;
use crate::state::AppState;

#[derive(Serialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
}

/// GET /api/v1/languages
pub async fn handle_list_languages(State(state): State<AppState>) -> Json<Vec<LanguageInfo>> {
    let languages = state
        .store
        .available_languages()
        .into_values()
        .map(|lang| LanguageInfo {
            code: lang.code,
            name: lang.name,
        })
        .collect();
    Json(languages)
}

#[derive(Serialize)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub format: &'static str,
    pub ats: bool,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<Vec<TemplateInfo>> {
    let templates = state
        .registry
        .names()
        .into_iter()
        .filter_map(|name| state.registry.get(name))
        .map(|template| TemplateInfo {
            name: template.name(),
            format: match template.format() {
                OutputFormat::Pdf => "pdf",
                OutputFormat::Docx => "docx",
            },
            ats: template.is_ats(),
        })
        .collect();
    Json(templates)
}
