//! protref
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Client for the UniProtKB REST service that maps identifiers between UniProt
//! accessions and Ensembl transcript/protein ids, and extracts sequences,
//! feature regions and cross-references from entries.
//!
//! # Overview
//!
//! - **Fetching**: [`UniprotClient::fetch_by_accession`] and
//!   [`UniprotClient::fetch_by_foreign_id`]
//! - **Resolution**: [`UniprotClient::accession_to_foreign_id`] and
//!   [`UniprotClient::foreign_id_to_accession`]
//! - **Extraction**: sequence, [`FeatureTable`], [`CrossReferenceTable`]
//!
//! Lenient operations return empty values for missing or malformed data and
//! log a warning; the `try_` variants return the error instead.
//!
//! # Example
//!
//! ```no_run
//! use protref::{ClientConfig, UniprotClient};
//!
//! #[tokio::main]
//! async fn main() -> protref::Result<()> {
//!     let client = UniprotClient::new(&ClientConfig::default())?;
//!     let transcript = client.accession_to_foreign_id("P04637").await?;
//!     let domains = client.features("P04637", &["Domain"]).await?;
//!     println!("{} has {} domains", transcript, domains.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod extract;
pub mod lenient;
pub mod model;
pub mod resolver;
pub mod tables;

// Re-export commonly used types
pub use api::{HttpFetcher, JsonFetcher, UniprotClient};
pub use config::{ClientConfig, DEFAULT_API_TIMEOUT_SECS, DEFAULT_SERVICE_ROOT};
pub use error::{Result, UniprotError};
pub use model::{CrossReference, Feature, Record, SearchResults};
pub use tables::{CrossReferenceTable, FeatureTable, Table};

use clap::{Parser, Subcommand, ValueEnum};

/// protref - UniProtKB identifier resolution and entry extraction
#[derive(Parser, Debug)]
#[command(name = "protref")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Fail on missing or malformed data instead of printing an empty result
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format for tables
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// UniProt REST service root
    #[arg(long, env = "UNIPROT_SERVICE_ROOT", default_value = DEFAULT_SERVICE_ROOT, global = true)]
    pub service_root: String,

    /// Request timeout in seconds
    #[arg(long, env = "UNIPROT_API_TIMEOUT_SECS", default_value_t = DEFAULT_API_TIMEOUT_SECS, global = true)]
    pub timeout_secs: u64,
}

/// How tables are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the Ensembl transcript linked from a UniProt accession
    ToEnsembl {
        /// UniProt accession (e.g. P04637)
        accession: String,
    },

    /// Print the UniProt accession for an Ensembl transcript or protein id
    ToAccession {
        /// Ensembl ENST or ENSP id
        ensembl_id: String,
    },

    /// Print the full entry as JSON
    Record {
        /// UniProt accession, or Ensembl id with --ensembl
        id: String,

        /// Query the search endpoint with an Ensembl id (prints the results envelope)
        #[arg(long)]
        ensembl: bool,
    },

    /// Print one top-level field of an entry as JSON
    Field {
        /// UniProt accession
        accession: String,

        /// Field name (e.g. features, comments)
        field: String,
    },

    /// Print the amino-acid sequence
    Sequence {
        /// UniProt accession, or Ensembl id with --ensembl
        id: String,

        #[arg(long)]
        ensembl: bool,
    },

    /// Print the feature table
    Features {
        /// UniProt accession, or Ensembl id with --ensembl
        id: String,

        /// Feature types to keep (repeat or comma separate); all when omitted
        #[arg(short = 't', long = "type", value_delimiter = ',')]
        types: Vec<String>,

        #[arg(long)]
        ensembl: bool,
    },

    /// Print the cross-reference table
    Xrefs {
        /// UniProt accession, or Ensembl id with --ensembl
        id: String,

        /// Only rows for this database (e.g. Ensembl, PDB)
        #[arg(short, long)]
        database: Option<String>,

        #[arg(long)]
        ensembl: bool,
    },
}
