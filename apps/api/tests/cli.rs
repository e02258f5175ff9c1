use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PROG: &str = "cvgen";

const SAMPLE_RESUME: &str = r#"{
    "languageName": "Português",
    "nome": "Maria Silva",
    "email": "maria@example.com",
    "telefone": "+55 11 99999-0000",
    "linkedin": "linkedin.com/in/maria",
    "secoes": {
        "resumoProfissional": {
            "titulo": "Resumo Profissional",
            "conteudo": "Engenheira de software com oito anos de experiência."
        },
        "experienciaProfissional": {
            "titulo": "Experiência Profissional",
            "empregos": [
                {
                    "cargo": "Desenvolvedora Backend",
                    "periodo": "2019 - Atual",
                    "descricao": ["APIs REST", "Observabilidade"]
                }
            ]
        },
        "habilidadesTecnicas": {
            "titulo": "Habilidades Técnicas",
            "habilidades": [
                {"nome": "Rust", "nivel": 4},
                {"nome": "SQL", "nivel": 5}
            ]
        }
    }
}"#;

fn cmd(data_dir: &TempDir, output_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(PROG).unwrap();
    cmd.env("CVGEN_DATA_DIR", data_dir.path())
        .env("CVGEN_OUTPUT_DIR", output_dir.path());
    cmd
}

fn seeded_dirs() -> (TempDir, TempDir) {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(data.path().join("curriculo_pt.json"), SAMPLE_RESUME).unwrap();
    (data, out)
}

#[test]
fn templates_lists_all_four() {
    let (data, out) = seeded_dirs();
    cmd(&data, &out)
        .arg("templates")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("docx")
                .and(predicate::str::contains("pdf"))
                .and(predicate::str::contains("pdf_ats"))
                .and(predicate::str::contains("pdf_moderno")),
        );
}

#[test]
fn languages_lists_discovered_files() {
    let (data, out) = seeded_dirs();
    cmd(&data, &out)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("Português (pt)"));
}

#[test]
fn languages_with_empty_data_dir_reports_none() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    cmd(&data, &out)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("No resume language files"));
}

#[test]
fn generate_writes_pdf_with_default_template() {
    let (data, out) = seeded_dirs();
    cmd(&data, &out)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("File saved as:"));

    let path = out.path().join("Maria_Silva_pt.pdf");
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn generate_docx_template_produces_zip() {
    let (data, out) = seeded_dirs();
    cmd(&data, &out)
        .args(["generate", "pt", "--template", "docx"])
        .assert()
        .success();

    let bytes = std::fs::read(out.path().join("Maria_Silva_pt.docx")).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn generate_ats_template_appends_suffix() {
    let (data, out) = seeded_dirs();
    cmd(&data, &out)
        .args(["generate", "--template", "pdf_ats"])
        .assert()
        .success();

    assert!(out.path().join("Curriculo_ATS_Maria_Silva_pt.pdf").exists());
}

#[test]
fn generate_unknown_template_falls_back_to_default() {
    let (data, out) = seeded_dirs();
    cmd(&data, &out)
        .args(["generate", "--template", "nope"])
        .assert()
        .success();

    assert!(out.path().join("Maria_Silva_pt.pdf").exists());
}

#[test]
fn generate_from_explicit_json_file() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let json = data.path().join("custom.json");
    std::fs::write(&json, SAMPLE_RESUME).unwrap();

    cmd(&data, &out)
        .args(["generate", "en", "--json-file"])
        .arg(&json)
        .assert()
        .success();

    assert!(out.path().join("Maria_Silva_en.pdf").exists());
}

#[test]
fn generate_with_no_data_fails() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    cmd(&data, &out)
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no resume language files"));
}
