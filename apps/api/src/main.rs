mod config;
mod errors;
mod render;
mod resume;
mod routes;
mod state;
mod store;
mod templates;

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::render::OutputFormat;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ResumeStore;
use crate::templates::TemplateRegistry;

#[derive(Parser)]
#[command(name = "cvgen")]
#[command(about = "Multilingual resume generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the resume languages found in the data directory
    Languages,
    /// List the available visual templates
    Templates,
    /// Generate a resume document
    Generate {
        /// Language code (ex: pt, en, es)
        language: Option<String>,
        /// Template name to use
        #[arg(short, long, default_value = "pdf")]
        template: String,
        /// Path to a custom resume JSON file
        #[arg(long)]
        json_file: Option<PathBuf>,
    },
    /// Start the web UI and HTTP API
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Languages => cmd_languages(&config),
        Commands::Templates => cmd_templates(),
        Commands::Generate {
            language,
            template,
            json_file,
        } => cmd_generate(&config, language, &template, json_file),
        Commands::Serve => serve(config).await,
    }
}

fn cmd_languages(config: &Config) -> Result<()> {
    let store = ResumeStore::new(config.data_dir.clone());
    let languages = store.available_languages();
    if languages.is_empty() {
        println!(
            "No resume language files found in {} (expected curriculo_XX.json).",
            config.data_dir.display()
        );
        return Ok(());
    }
    for lang in languages.values() {
        println!("{} ({})", lang.name, lang.code);
    }
    Ok(())
}

fn cmd_templates() -> Result<()> {
    let registry = TemplateRegistry::new();
    for template in registry.names().into_iter().filter_map(|n| registry.get(n)) {
        let format = match template.format() {
            OutputFormat::Pdf => "PDF",
            OutputFormat::Docx => "DOCX",
        };
        println!("{} ({format})", template.name());
    }
    Ok(())
}

fn cmd_generate(
    config: &Config,
    language: Option<String>,
    template_name: &str,
    json_file: Option<PathBuf>,
) -> Result<()> {
    let store = ResumeStore::new(config.data_dir.clone());

    let (resume, lang_code) = match json_file {
        Some(path) => {
            // An explicit file bypasses discovery; the language code is only
            // used for the default output file name.
            let code = match language {
                Some(lang) => lang.to_lowercase(),
                None => store
                    .resolve_language(None)
                    .map(|lang| lang.code)
                    .unwrap_or_else(|_| "pt".to_string()),
            };
            (ResumeStore::load_path(&path)?, code)
        }
        None => {
            let lang = store.resolve_language(language.as_deref())?;
            (ResumeStore::load_path(&lang.path)?, lang.code)
        }
    };

    let registry = TemplateRegistry::new();
    let template = registry.get_or_default(template_name);

    let document = render::render(&resume, template.as_ref(), &lang_code)?;

    fs::create_dir_all(&config.output_dir)?;
    let path = config.output_dir.join(&document.file_name);
    fs::write(&path, &document.bytes)?;
    println!("File saved as: {}", path.display());
    Ok(())
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting cvgen v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {}", config.data_dir.display());

    let port = config.port;
    let state = AppState::new(config);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
