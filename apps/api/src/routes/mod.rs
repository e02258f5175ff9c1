pub mod generate;
pub mod health;
pub mod languages;
pub mod resumes;
pub mod ui;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Web UI
        .route("/", get(ui::index_handler))
        .route("/edit", get(ui::edit_handler))
        .route("/generate", get(ui::generate_handler))
        // JSON API
        .route("/api/v1/languages", get(languages::handle_list_languages))
        .route("/api/v1/templates", get(languages::handle_list_templates))
        .route("/api/v1/resumes", post(resumes::handle_create_resume))
        .route("/api/v1/resumes/:lang", get(resumes::handle_get_resume))
        .route("/api/v1/resumes/:lang", put(resumes::handle_save_resume))
        .route("/api/v1/generate", post(generate::handle_generate))
        .route("/api/v1/download/:file_id", get(generate::handle_download))
        .with_state(state)
}
