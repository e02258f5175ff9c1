//! Section walker: turns a résumé document into builder calls.
//!
//! The section order is fixed and shared by every template: title block,
//! professional summary, work experience, page break, technical skills,
//! certifications, education, in-progress courses, keyword section. Templates
//! only control the look of each piece, never the order.

pub mod builder;
pub mod keywords;

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::warn;

use crate::render::builder::{ContactBlock, DocBuilder};
use crate::render::keywords::extract_keywords;
use crate::resume::{Resume, ResumeError, SectionKind};
use crate::templates::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Docx,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Docx => "docx",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Resume(#[from] ResumeError),

    #[error("pdf generation failed: {0}")]
    Pdf(String),

    #[error("docx generation failed: {0}")]
    Docx(String),
}

/// A finished document ready to persist or serve.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Renders a résumé with the given template.
pub fn render(
    resume: &Resume,
    template: &dyn Template,
    lang_code: &str,
) -> Result<RenderedDocument, RenderError> {
    let mut builder = template.builder()?;
    walk(resume, builder.as_mut())?;
    let bytes = builder.finish()?;
    Ok(RenderedDocument {
        file_name: output_file_name(resume, template, lang_code),
        content_type: template.format().content_type(),
        bytes,
    })
}

/// Drives the builder through the fixed section order.
fn walk(resume: &Resume, b: &mut dyn DocBuilder) -> Result<(), RenderError> {
    // Fail before emitting anything when the document has no sections at all.
    resume.sections()?;

    b.title_block(&ContactBlock {
        name: resume.name().unwrap_or_default().to_string(),
        email: resume.email().unwrap_or_default().to_string(),
        phone: resume.phone().unwrap_or_default().to_string(),
        linkedin: resume.linkedin().unwrap_or_default().to_string(),
    });

    let mut keywords: Vec<String> = Vec::new();

    if let Some(summary) = resume.section(SectionKind::Summary) {
        let content = summary.content();
        keywords = extract_keywords(&content);
        b.section_title(&summary.title());
        b.paragraph(&content);
    }

    if let Some(experience) = resume.section(SectionKind::Experience) {
        b.section_title(&experience.title());
        for job in experience.jobs() {
            b.job(job.position(), job.period(), &job.description());
        }
    }

    // Skills always start on a fresh page.
    b.page_break();

    if let Some(skills) = resume.section(SectionKind::Skills) {
        b.section_title(&skills.title());
        for skill in skills.skills() {
            let Some(name) = skill.name() else { continue };
            // Every named skill counts as a keyword, even when its bar is
            // skipped for an unparseable level.
            keywords.push(name.to_string());
            match skill.level() {
                Some(level) => b.skill_bar(name, level),
                None => warn!("invalid skill level for '{name}', skipping"),
            }
        }
    }

    if let Some(certifications) = resume.section(SectionKind::Certifications) {
        b.section_title(&certifications.title());
        for cert in certifications.items() {
            b.certification(&cert);
        }
    }

    if let Some(education) = resume.section(SectionKind::Education) {
        b.section_title(&education.title());
        for degree in education.degrees() {
            b.paragraph(&degree);
        }
    }

    if let Some(in_progress) = resume.section(SectionKind::InProgress) {
        b.section_title(&in_progress.title());
        for course in in_progress.courses() {
            b.paragraph(&course);
        }
    }

    let keywords: Vec<String> = keywords.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
    b.keywords_section(&keywords);

    Ok(())
}

/// Decides the output file name.
///
/// An explicit `nomeArquivoSaida`/`outputFileName` wins; the ATS style always
/// rewrites it to `{base}_ATS.pdf`, the plain PDF styles only enforce the
/// `.pdf` extension, and DOCX trusts it as-is. Without an explicit name the
/// file is `{Name_with_underscores}_{lang}.{ext}`.
pub fn output_file_name(resume: &Resume, template: &dyn Template, lang_code: &str) -> String {
    let explicit = resume.output_file_name();
    let underscored = resume.name().map(|n| n.replace(' ', "_"));

    if template.is_ats() {
        return match (explicit, underscored) {
            (Some(name), _) => format!("{}_ATS.pdf", strip_extension(name)),
            (None, Some(name)) => format!("Curriculo_ATS_{name}_{lang_code}.pdf"),
            (None, None) => format!("Curriculo_ATS_{lang_code}.pdf"),
        };
    }

    match template.format() {
        OutputFormat::Pdf => match explicit {
            Some(name) if name.to_lowercase().ends_with(".pdf") => name.to_string(),
            Some(name) => format!("{}.pdf", strip_extension(name)),
            None => format!(
                "{}_{lang_code}.pdf",
                underscored.as_deref().unwrap_or("Curriculo")
            ),
        },
        OutputFormat::Docx => explicit.map(str::to_string).unwrap_or_else(|| {
            format!(
                "{}_{lang_code}.docx",
                underscored.as_deref().unwrap_or("Curriculo")
            )
        }),
    }
}

/// Drops the final extension, if any (`cv.v2.pdf` → `cv.v2`).
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateRegistry;
    use serde_json::json;

    /// Builder that records every call, for asserting the walk order.
    #[derive(Default)]
    struct RecordingBuilder {
        events: Vec<String>,
    }

    impl DocBuilder for RecordingBuilder {
        fn title_block(&mut self, contact: &ContactBlock) {
            self.events.push(format!("title:{}", contact.name));
        }
        fn section_title(&mut self, title: &str) {
            self.events.push(format!("section:{title}"));
        }
        fn paragraph(&mut self, text: &str) {
            self.events.push(format!("para:{text}"));
        }
        fn bullet(&mut self, text: &str) {
            self.events.push(format!("bullet:{text}"));
        }
        fn skill_bar(&mut self, name: &str, level: u8) {
            self.events.push(format!("skill:{name}:{level}"));
        }
        fn page_break(&mut self) {
            self.events.push("pagebreak".to_string());
        }
        fn keywords_section(&mut self, keywords: &[String]) {
            self.events.push(format!("keywords:{}", keywords.join(",")));
        }
        fn finish(self: Box<Self>) -> Result<Vec<u8>, RenderError> {
            Ok(Vec::new())
        }
    }

    fn full_fixture() -> Resume {
        Resume::new(json!({
            "nome": "João Silva",
            "email": "joao@example.com",
            "telefone": "+55 11 99999-0000",
            "linkedin": "linkedin.com/in/joao",
            "secoes": {
                "resumoProfissional": {"titulo": "Resumo", "conteudo": "Engenheiro backend."},
                "experienciaProfissional": {
                    "titulo": "Experiência",
                    "empregos": [{"cargo": "Dev Sênior", "periodo": "2021 - 2024",
                                   "descricao": ["Serviços em Rust"]}]
                },
                "habilidadesTecnicas": {
                    "titulo": "Habilidades",
                    "habilidades": [
                        {"nome": "Rust", "nivel": 5},
                        {"nome": "Mistério", "nivel": "alto"}
                    ]
                },
                "certificacoes": {"titulo": "Certificações", "lista": ["AWS SAA"]},
                "educacao": {"titulo": "Educação", "formacao": ["BSc Computação"]},
                "emAndamento": {"titulo": "Em Andamento", "cursos": ["Kubernetes"]}
            }
        }))
        .unwrap()
    }

    #[test]
    fn walk_emits_sections_in_fixed_order() {
        let mut b = RecordingBuilder::default();
        walk(&full_fixture(), &mut b).unwrap();

        let events = b.events;
        assert_eq!(events[0], "title:João Silva");
        assert_eq!(events[1], "section:Resumo");
        assert_eq!(events[2], "para:Engenheiro backend.");
        assert_eq!(events[3], "section:Experiência");
        assert_eq!(events[4], "bullet:\u{2022} Dev Sênior");
        assert_eq!(events[5], "para:2021 - 2024");
        assert_eq!(events[6], "bullet:- Serviços em Rust");
        assert_eq!(events[7], "pagebreak");
        assert_eq!(events[8], "section:Habilidades");
        // Invalid "alto" level is skipped, only Rust renders.
        assert_eq!(events[9], "skill:Rust:5");
        assert_eq!(events[10], "section:Certificações");
        assert_eq!(events[11], "para:AWS SAA");
        assert_eq!(events[12], "section:Educação");
        assert_eq!(events[13], "para:BSc Computação");
        assert_eq!(events[14], "section:Em Andamento");
        assert_eq!(events[15], "para:Kubernetes");
        assert!(events[16].starts_with("keywords:"));
    }

    #[test]
    fn keywords_merge_summary_terms_with_skill_names() {
        let mut b = RecordingBuilder::default();
        walk(&full_fixture(), &mut b).unwrap();
        let keywords = b.events.last().unwrap().clone();
        assert!(keywords.contains("backend"));
        assert!(keywords.contains("engenheiro"));
        assert!(keywords.contains("Rust"));
        // Invalid-level skills still contribute their name.
        assert!(keywords.contains("Mistério"));
    }

    #[test]
    fn unleveled_skills_still_contribute_keywords() {
        let resume = Resume::new(json!({
            "secoes": {
                "resumoProfissional": {"titulo": "Resumo", "conteudo": "Engenharia de plataforma."},
                "habilidadesTecnicas": {
                    "titulo": "Habilidades",
                    "habilidades": [{"nome": "Cobol", "nivel": "alto"}]
                }
            }
        }))
        .unwrap();
        let mut b = RecordingBuilder::default();
        walk(&resume, &mut b).unwrap();

        // No bar rendered, but the name reaches the keyword section.
        assert!(!b.events.iter().any(|e| e.starts_with("skill:")));
        let keywords = b.events.last().unwrap();
        assert!(keywords.contains("Cobol"));
    }

    #[test]
    fn walk_without_sections_container_fails() {
        let resume = Resume::new(json!({"nome": "X"})).unwrap();
        let mut b = RecordingBuilder::default();
        assert!(walk(&resume, &mut b).is_err());
        assert!(b.events.is_empty());
    }

    #[test]
    fn missing_sections_are_skipped_silently() {
        let resume = Resume::new(json!({
            "name": "Jane Doe",
            "sections": {
                "professionalSummary": {"title": "Summary", "content": "Engineer."}
            }
        }))
        .unwrap();
        let mut b = RecordingBuilder::default();
        walk(&resume, &mut b).unwrap();
        assert_eq!(
            b.events,
            vec![
                "title:Jane Doe",
                "section:Summary",
                "para:Engineer.",
                "pagebreak",
                "keywords:engineer",
            ]
        );
    }

    fn template(name: &str) -> std::sync::Arc<dyn Template> {
        TemplateRegistry::new().get(name).unwrap()
    }

    #[test]
    fn default_file_names_use_underscored_name_and_language() {
        let resume = full_fixture();
        assert_eq!(
            output_file_name(&resume, template("pdf").as_ref(), "pt"),
            "João_Silva_pt.pdf"
        );
        assert_eq!(
            output_file_name(&resume, template("docx").as_ref(), "pt"),
            "João_Silva_pt.docx"
        );
        assert_eq!(
            output_file_name(&resume, template("pdf_ats").as_ref(), "pt"),
            "Curriculo_ATS_João_Silva_pt.pdf"
        );
    }

    #[test]
    fn explicit_output_name_wins_with_pdf_extension_enforced() {
        let resume = Resume::new(json!({
            "outputFileName": "my-cv.doc",
            "sections": {}
        }))
        .unwrap();
        assert_eq!(
            output_file_name(&resume, template("pdf").as_ref(), "en"),
            "my-cv.pdf"
        );
        assert_eq!(
            output_file_name(&resume, template("pdf_ats").as_ref(), "en"),
            "my-cv_ATS.pdf"
        );
        // DOCX trusts the explicit name as-is.
        assert_eq!(
            output_file_name(&resume, template("docx").as_ref(), "en"),
            "my-cv.doc"
        );
    }

    #[test]
    fn nameless_resume_falls_back_to_generic_file_name() {
        let resume = Resume::new(json!({"sections": {}})).unwrap();
        assert_eq!(
            output_file_name(&resume, template("pdf").as_ref(), "fr"),
            "Curriculo_fr.pdf"
        );
        assert_eq!(
            output_file_name(&resume, template("pdf_ats").as_ref(), "fr"),
            "Curriculo_ATS_fr.pdf"
        );
    }
}
