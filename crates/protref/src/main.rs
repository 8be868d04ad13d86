//! protref CLI - Main entry point

use clap::Parser;
use protref::commands::{self, Context};
use protref::{Cli, ClientConfig, Commands, UniprotClient};
use protref_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // .env may carry UNIPROT_* settings; it must be loaded before clap reads env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries command output only
    let log_config = LogConfig::builder()
        .level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        })
        .output(LogOutput::Console)
        .log_file_prefix("protref")
        .build();

    // Environment variables take precedence over the flags
    let log_config = log_config.clone().overlay_env().unwrap_or(log_config);

    // The CLI still works without logging
    let _ = init_logging(&log_config);

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> protref::Result<()> {
    let config = ClientConfig::new(cli.service_root.clone()).with_timeout_secs(cli.timeout_secs);

    let ctx = Context {
        client: UniprotClient::new(&config)?,
        strict: cli.strict,
        format: cli.format,
    };

    match &cli.command {
        Commands::ToEnsembl { accession } => commands::lookup::to_ensembl(&ctx, accession).await,
        Commands::ToAccession { ensembl_id } => {
            commands::lookup::to_accession(&ctx, ensembl_id).await
        }
        Commands::Record { id, ensembl } => commands::record::show(&ctx, id, *ensembl).await,
        Commands::Field { accession, field } => {
            commands::record::field(&ctx, accession, field).await
        }
        Commands::Sequence { id, ensembl } => commands::record::sequence(&ctx, id, *ensembl).await,
        Commands::Features { id, types, ensembl } => {
            commands::table::features(&ctx, id, types, *ensembl).await
        }
        Commands::Xrefs {
            id,
            database,
            ensembl,
        } => commands::table::xrefs(&ctx, id, database.as_deref(), *ensembl).await,
    }
}
