use std::fs;

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::render;
use crate::state::{AppState, CachedFile};
use crate::store::ResumeStore;

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub language: Option<String>,
    pub template: String,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub filename: String,
    pub file_id: Uuid,
    pub download_url: String,
}

/// POST /api/v1/generate
///
/// Renders one document, writes it to the output directory and keeps the
/// bytes in the download cache so the UI can fetch them by id.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let template = state
        .registry
        .get(&req.template)
        .ok_or_else(|| AppError::Validation(format!("unknown template '{}'", req.template)))?;

    let language = state.store.resolve_language(req.language.as_deref())?;
    let resume = ResumeStore::load_path(&language.path)?;

    let document = render::render(&resume, template.as_ref(), &language.code)?;

    fs::create_dir_all(&state.config.output_dir)
        .context("cannot create output directory")
        .map_err(AppError::Internal)?;
    let path = state.config.output_dir.join(&document.file_name);
    fs::write(&path, &document.bytes)
        .with_context(|| format!("cannot write {}", path.display()))
        .map_err(AppError::Internal)?;

    let file_id = Uuid::new_v4();
    let now = Utc::now();
    {
        let mut files = state
            .files
            .write()
            .map_err(|_| anyhow::anyhow!("file cache lock poisoned"))?;
        files.retain(|_, f| !f.is_expired(now));
        files.insert(
            file_id,
            CachedFile {
                file_name: document.file_name.clone(),
                content_type: document.content_type,
                bytes: Bytes::from(document.bytes),
                created_at: now,
            },
        );
    }

    info!(
        "generated {} ({} / {})",
        document.file_name,
        language.code,
        template.name()
    );

    Ok(Json(GenerateResponse {
        success: true,
        filename: document.file_name,
        file_id,
        download_url: format!("/api/v1/download/{file_id}"),
    }))
}

/// GET /api/v1/download/:file_id
pub async fn handle_download(
    State(state): State<AppState>,
    Path(file_id): Path<Uuid>,
) -> Result<Response, AppError> {
    let cached = {
        let files = state
            .files
            .read()
            .map_err(|_| anyhow::anyhow!("file cache lock poisoned"))?;
        files.get(&file_id).cloned()
    };
    let Some(cached) = cached.filter(|f| !f.is_expired(Utc::now())) else {
        return Err(AppError::NotFound(format!(
            "file {file_id} not found or expired"
        )));
    };

    let headers = [
        (header::CONTENT_TYPE, cached.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", cached.file_name),
        ),
    ];
    Ok((headers, cached.bytes).into_response())
}
