//! Typed views over a raw résumé document.
//!
//! The document stays a `serde_json::Value` end to end. Files in the wild mix
//! languages and optional fields, so a rigid struct would reject valid data.
//! These wrappers put the synonym-key lookup behind ordinary accessors.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::resume::fields;

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("resume document is not a JSON object")]
    NotAnObject,

    #[error("invalid resume file: no sections key found (expected one of secoes/sections/secciones/sektionen)")]
    MissingSections,
}

/// The section slots a template renders. Ordering is the renderer's job,
/// not encoded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Skills,
    Certifications,
    Education,
    InProgress,
}

impl SectionKind {
    /// The synonymous container keys for this section.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            SectionKind::Summary => &[
                "resumoProfissional",
                "professionalSummary",
                "resumenProfesional",
                "resumentProfessionnel",
            ],
            SectionKind::Experience => &[
                "experienciaProfissional",
                "workExperience",
                "experienciaLaboral",
                "experienceProfessionnelle",
            ],
            SectionKind::Skills => &[
                "habilidadesTecnicas",
                "technicalSkills",
                "competencesTechniques",
            ],
            SectionKind::Certifications => {
                &["certificacoes", "certifications", "certificaciones"]
            }
            SectionKind::Education => &["educacao", "education", "educacion"],
            SectionKind::InProgress => &["emAndamento", "inProgress", "enProgreso", "enCours"],
        }
    }
}

/// A résumé document plus accessors for its language-keyed fields.
#[derive(Debug, Clone)]
pub struct Resume {
    doc: Value,
}

impl Resume {
    pub fn new(doc: Value) -> Result<Self, ResumeError> {
        if !doc.is_object() {
            return Err(ResumeError::NotAnObject);
        }
        Ok(Resume { doc })
    }

    pub fn as_value(&self) -> &Value {
        &self.doc
    }

    fn root(&self) -> &Map<String, Value> {
        // Guaranteed by the constructor.
        self.doc.as_object().expect("resume root is an object")
    }

    pub fn language_name(&self) -> Option<&str> {
        self.root().get("languageName").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        fields::get_str_field(self.root(), "nome", Some("name"), &["nombre"])
    }

    pub fn email(&self) -> Option<&str> {
        self.root().get("email").and_then(Value::as_str)
    }

    pub fn phone(&self) -> Option<&str> {
        fields::get_str_field(self.root(), "telefone", Some("phone"), &[])
    }

    pub fn linkedin(&self) -> Option<&str> {
        self.root().get("linkedin").and_then(Value::as_str)
    }

    pub fn output_file_name(&self) -> Option<&str> {
        fields::get_str_field(self.root(), "nomeArquivoSaida", Some("outputFileName"), &[])
    }

    /// The sections container. Its absence is a hard error; without it there
    /// is nothing to render.
    pub fn sections(&self) -> Result<&Map<String, Value>, ResumeError> {
        fields::first_of(self.root(), &fields::SECTIONS_KEYS)
            .and_then(Value::as_object)
            .ok_or(ResumeError::MissingSections)
    }

    /// Looks up one section under any of its synonymous keys.
    pub fn section(&self, kind: SectionKind) -> Option<Section<'_>> {
        let sections = self.sections().ok()?;
        fields::first_of(sections, kind.keys())
            .and_then(Value::as_object)
            .map(|map| Section { map })
    }
}

/// One section of the document (summary, experience, ...).
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Section<'a> {
    pub fn title(&self) -> String {
        fields::section_title(self.map)
    }

    pub fn content(&self) -> String {
        fields::section_content(self.map)
    }

    /// Plain item list (certifications and the like).
    pub fn items(&self) -> Vec<String> {
        fields::section_list(self.map)
    }

    /// Education degrees.
    pub fn degrees(&self) -> Vec<String> {
        fields::values_as_strings(fields::first_of(
            self.map,
            &["formacao", "degrees", "formacion", "diplomes"],
        ))
    }

    /// In-progress courses.
    pub fn courses(&self) -> Vec<String> {
        fields::values_as_strings(fields::first_of(self.map, &["cursos", "courses", "cours"]))
    }

    pub fn jobs(&self) -> Vec<Job<'a>> {
        fields::section_jobs(self.map)
            .into_iter()
            .map(|map| Job { map })
            .collect()
    }

    pub fn skills(&self) -> Vec<SkillEntry<'a>> {
        fields::first_of(self.map, &["habilidades", "skills", "competencias", "competences"])
            .and_then(Value::as_array)
            .map(|skills| {
                skills
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|map| SkillEntry { map })
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// One job entry of the experience section.
#[derive(Debug, Clone, Copy)]
pub struct Job<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Job<'a> {
    pub fn position(&self) -> Option<&'a str> {
        fields::get_str_field(self.map, "cargo", Some("position"), &[])
    }

    pub fn period(&self) -> Option<&'a str> {
        fields::get_str_field(self.map, "periodo", Some("period"), &[])
    }

    /// Description items, normalized: a string splits on newlines, a list is
    /// taken item by item; blanks are dropped either way.
    pub fn description(&self) -> Vec<String> {
        let raw = fields::first_of(self.map, &["descricao", "description", "descripcion"]);
        let items: Vec<String> = match raw {
            Some(Value::String(s)) => s.lines().map(str::to_string).collect(),
            Some(other) => fields::values_as_strings(Some(other)),
            None => Vec::new(),
        };
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// One skill entry of the technical-skills section.
#[derive(Debug, Clone, Copy)]
pub struct SkillEntry<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> SkillEntry<'a> {
    pub fn name(&self) -> Option<&'a str> {
        fields::get_str_field(self.map, "nome", Some("name"), &["nombre"])
    }

    /// Parses the level, which shipped data stores either as a JSON number or
    /// a numeric string. `None` means the entry should be skipped.
    pub fn level(&self) -> Option<u8> {
        let raw = fields::get_field(self.map, "nivel", Some("level"), &[])?;
        let level = match raw {
            Value::Number(n) => n.as_i64()?,
            Value::String(s) => s.trim().parse::<i64>().ok()?,
            _ => return None,
        };
        // Five bar slots; out-of-range data clamps rather than overflowing the bar.
        Some(level.clamp(0, 5) as u8)
    }
}
