use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/resumes/:lang
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Json<Value>, AppError> {
    let resume = state.store.load(&lang.to_lowercase())?;
    Ok(Json(resume.as_value().clone()))
}

#[derive(Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
}

/// PUT /api/v1/resumes/:lang
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Json(content): Json<Value>,
) -> Result<Json<SaveResponse>, AppError> {
    if !content.is_object() {
        return Err(AppError::Validation(
            "resume document must be a JSON object".to_string(),
        ));
    }
    state.store.save(&lang.to_lowercase(), &content)?;
    Ok(Json(SaveResponse {
        success: true,
        message: "resume saved".to_string(),
    }))
}

#[derive(Deserialize)]
pub struct CreateResumeRequest {
    pub language: String,
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(req): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    let language = req.language.trim().to_lowercase();
    if language.is_empty() {
        return Err(AppError::Validation("language is required".to_string()));
    }
    state.store.create(&language)?;
    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            success: true,
            message: format!("resume file for '{language}' created"),
        }),
    ))
}
