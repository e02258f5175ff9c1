use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::Config;
use crate::store::ResumeStore;
use crate::templates::TemplateRegistry;

/// How long a generated document stays downloadable.
const FILE_TTL_SECS: i64 = 60 * 60;

/// A generated document held for download, keyed by UUID.
#[derive(Debug, Clone)]
pub struct CachedFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
    pub created_at: DateTime<Utc>,
}

impl CachedFile {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        (now - self.created_at).num_seconds() >= FILE_TTL_SECS
    }
}

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ResumeStore,
    pub registry: Arc<TemplateRegistry>,
    pub config: Config,
    /// In-memory download cache for generated documents.
    pub files: Arc<RwLock<HashMap<Uuid, CachedFile>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            store: ResumeStore::new(config.data_dir.clone()),
            registry: Arc::new(TemplateRegistry::new()),
            config,
            files: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn cached_files_expire_after_the_ttl() {
        let now = Utc::now();
        let file = CachedFile {
            file_name: "cv.pdf".to_string(),
            content_type: "application/pdf",
            bytes: Bytes::new(),
            created_at: now,
        };
        assert!(!file.is_expired(now));
        assert!(!file.is_expired(now + Duration::minutes(59)));
        assert!(file.is_expired(now + Duration::hours(2)));
    }
}
