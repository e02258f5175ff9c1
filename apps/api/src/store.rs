//! Discovery and persistence of the per-language résumé files.
//!
//! A résumé lives at `{data_dir}/curriculo_{lang}.json`. The filename carries
//! the language code; the document's `languageName` field carries the display
//! name shown in menus. Files that fail to parse are skipped during
//! discovery, never fatal.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use thiserror::Error;
use tracing::warn;

use crate::resume::Resume;

const FILE_PREFIX: &str = "curriculo_";
const FILE_SUFFIX: &str = ".json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no resume language files found in {}", .0.display())]
    NoLanguages(PathBuf),

    #[error("no resume file for language '{0}'")]
    UnknownLanguage(String),

    #[error("a resume file for language '{0}' already exists")]
    AlreadyExists(String),

    #[error(transparent)]
    Resume(#[from] crate::resume::ResumeError),
}

/// One discovered language file.
#[derive(Debug, Clone)]
pub struct LanguageFile {
    pub code: String,
    /// Display name in its own language (`languageName`), or the uppercased
    /// code when the document does not carry one.
    pub name: String,
    pub path: PathBuf,
}

/// File-backed résumé store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    data_dir: PathBuf,
}

impl ResumeStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        ResumeStore {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn file_path(&self, code: &str) -> PathBuf {
        self.data_dir
            .join(format!("{FILE_PREFIX}{code}{FILE_SUFFIX}"))
    }

    /// Scans the data directory for `curriculo_*.json` files.
    ///
    /// The map is ordered by language code so the "first available" default
    /// is deterministic.
    pub fn available_languages(&self) -> BTreeMap<String, LanguageFile> {
        let mut languages = BTreeMap::new();
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("cannot read data dir {}: {e}", self.data_dir.display());
                return languages;
            }
        };

        for entry in entries.flatten() {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(code) = name
                .strip_prefix(FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
            else {
                continue;
            };
            if code.is_empty() {
                continue;
            }

            let path = entry.path();
            let display_name = match read_language_name(&path) {
                Ok(name) => name.unwrap_or_else(|| code.to_uppercase()),
                Err(e) => {
                    warn!("skipping malformed resume file {}: {e}", path.display());
                    continue;
                }
            };

            languages.insert(
                code.to_string(),
                LanguageFile {
                    code: code.to_string(),
                    name: display_name,
                    path,
                },
            );
        }

        languages
    }

    /// Resolves the language to generate for: the requested code when we have
    /// a file for it, else `pt` when present, else the first discovered code.
    pub fn resolve_language(&self, requested: Option<&str>) -> Result<LanguageFile, StoreError> {
        let languages = self.available_languages();
        if let Some(code) = requested.map(str::to_lowercase) {
            if let Some(lang) = languages.get(&code) {
                return Ok(lang.clone());
            }
            warn!("language '{code}' not found, falling back to default");
        }
        if let Some(lang) = languages.get("pt") {
            return Ok(lang.clone());
        }
        languages
            .into_values()
            .next()
            .ok_or_else(|| StoreError::NoLanguages(self.data_dir.clone()))
    }

    /// Loads the résumé for a language code; unknown codes are an error here
    /// (the HTTP API wants a 404, not a silent fallback).
    pub fn load(&self, code: &str) -> Result<Resume, StoreError> {
        let path = self.file_path(code);
        if !path.exists() {
            return Err(StoreError::UnknownLanguage(code.to_string()));
        }
        Self::load_path(&path)
    }

    /// Loads a résumé from an explicit JSON file path.
    pub fn load_path(path: &Path) -> Result<Resume, StoreError> {
        let raw = fs::read_to_string(path)?;
        let doc: Value = serde_json::from_str(&raw)?;
        Ok(Resume::new(doc)?)
    }

    /// Saves a document for a language, pretty-printed.
    pub fn save(&self, code: &str, doc: &Value) -> Result<(), StoreError> {
        let pretty = serde_json::to_string_pretty(doc)?;
        fs::write(self.file_path(code), pretty)?;
        Ok(())
    }

    /// Creates a starter skeleton for a new language. Section titles are
    /// localized for pt/en/es; other codes start blank.
    pub fn create(&self, code: &str) -> Result<PathBuf, StoreError> {
        let code = code.to_lowercase();
        let path = self.file_path(&code);
        if path.exists() {
            return Err(StoreError::AlreadyExists(code));
        }
        self.save(&code, &starter_skeleton(&code))?;
        Ok(path)
    }
}

fn read_language_name(path: &Path) -> Result<Option<String>, StoreError> {
    let raw = fs::read_to_string(path)?;
    let doc: Value = serde_json::from_str(&raw)?;
    Ok(doc
        .get("languageName")
        .and_then(Value::as_str)
        .map(str::to_string))
}

/// The empty document a freshly created language starts from.
pub fn starter_skeleton(code: &str) -> Value {
    let (language_name, titles) = match code {
        "pt" => (
            "Português",
            [
                "Resumo Profissional",
                "Experiência Profissional",
                "Educação",
                "Habilidades",
                "Idiomas",
                "Certificações",
            ],
        ),
        "en" => (
            "English",
            [
                "Professional Summary",
                "Work Experience",
                "Education",
                "Skills",
                "Languages",
                "Certifications",
            ],
        ),
        "es" => (
            "Español",
            [
                "Resumen Profesional",
                "Experiencia Profesional",
                "Educación",
                "Habilidades",
                "Idiomas",
                "Certificaciones",
            ],
        ),
        _ => ("", [""; 6]),
    };

    json!({
        "languageName": language_name,
        "nome": "",
        "email": "",
        "telefone": "",
        "linkedin": "",
        "secoes": {
            "resumo": {"titulo": titles[0], "texto": ""},
            "experienciaProfissional": {"titulo": titles[1], "empregos": []},
            "educacao": {"titulo": titles[2], "formacao": []},
            "habilidades": {"titulo": titles[3], "categorias": []},
            "idiomas": {"titulo": titles[4], "lista": []},
            "certificacoes": {"titulo": titles[5], "lista": []}
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn store_with_languages() -> (TempDir, ResumeStore) {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "curriculo_pt.json",
            r#"{"languageName": "Português", "secoes": {}}"#,
        );
        write_file(
            &dir,
            "curriculo_en.json",
            r#"{"languageName": "English", "sections": {}}"#,
        );
        write_file(&dir, "curriculo_xx.json", "{not json");
        write_file(&dir, "notes.txt", "ignore me");
        let store = ResumeStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn discovery_skips_malformed_and_unrelated_files() {
        let (_dir, store) = store_with_languages();
        let langs = store.available_languages();
        assert_eq!(
            langs.keys().cloned().collect::<Vec<_>>(),
            vec!["en".to_string(), "pt".to_string()]
        );
        assert_eq!(langs["pt"].name, "Português");
    }

    #[test]
    fn language_name_falls_back_to_uppercased_code() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "curriculo_fr.json", r#"{"secoes": {}}"#);
        let store = ResumeStore::new(dir.path());
        assert_eq!(store.available_languages()["fr"].name, "FR");
    }

    #[test]
    fn resolve_prefers_requested_then_pt_then_first() {
        let (_dir, store) = store_with_languages();
        assert_eq!(store.resolve_language(Some("EN")).unwrap().code, "en");
        assert_eq!(store.resolve_language(Some("de")).unwrap().code, "pt");
        assert_eq!(store.resolve_language(None).unwrap().code, "pt");
    }

    #[test]
    fn resolve_without_pt_takes_first_code() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "curriculo_fr.json", r#"{}"#);
        write_file(&dir, "curriculo_en.json", r#"{}"#);
        let store = ResumeStore::new(dir.path());
        assert_eq!(store.resolve_language(None).unwrap().code, "en");
    }

    #[test]
    fn resolve_with_no_files_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = ResumeStore::new(dir.path());
        assert!(matches!(
            store.resolve_language(None),
            Err(StoreError::NoLanguages(_))
        ));
    }

    #[test]
    fn create_writes_localized_skeleton_once() {
        let dir = TempDir::new().unwrap();
        let store = ResumeStore::new(dir.path());
        let path = store.create("es").unwrap();
        assert!(path.exists());

        let resume = store.load("es").unwrap();
        assert_eq!(resume.language_name(), Some("Español"));
        assert!(resume.sections().is_ok());

        assert!(matches!(
            store.create("es"),
            Err(StoreError::AlreadyExists(_))
        ));
    }

    #[test]
    fn load_unknown_language_is_an_error() {
        let (_dir, store) = store_with_languages();
        assert!(matches!(
            store.load("de"),
            Err(StoreError::UnknownLanguage(_))
        ));
    }
}
