use crate::chat::GeminiAssistant;
use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use crate::router::{respond, App};
use astra::Server;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod chat;
mod config;
mod db;
mod domain;
mod errors;
mod format;
mod handlers;
mod importer;
mod logging;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "sales_desk")]
#[command(version, about = "Customer sales history lookup and AI chat over sales data")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the web server (default)
    Serve,
    /// Load sale records from a JSON export of the sales sheet
    Import {
        /// JSON array of rows keyed by the sheet's column headers
        file: PathBuf,

        /// Delete existing records before importing
        #[arg(long)]
        replace: bool,
    },
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?cfg, "configuration loaded");

    let db = Database::new(cfg.db_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        tracing::error!(error = %e, "database initialization failed");
        return ExitCode::FAILURE;
    }

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cfg, db),
        Command::Import { file, replace } => match importer::import_file(&db, &file, replace) {
            Ok(summary) => {
                tracing::info!(
                    imported = summary.imported,
                    skipped = summary.skipped,
                    "records imported"
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!(error = %e, "import failed");
                ExitCode::FAILURE
            }
        },
    }
}

fn serve(cfg: AppConfig, db: Database) -> ExitCode {
    let app = App {
        db,
        chat_password: cfg.chat_password.clone(),
        assistant: Box::new(GeminiAssistant::new(
            cfg.gemini_api_key.clone(),
            cfg.gemini_model.clone(),
        )),
    };
    if cfg.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; chat replies will fail");
    }

    tracing::info!(addr = %cfg.addr, workers = cfg.workers, "starting server");
    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| respond(req, &app));

    match result {
        Ok(()) => {
            tracing::info!("server shut down cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "server ended with error");
            ExitCode::FAILURE
        }
    }
}
