/*
 * main.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Kindred CLI - Main entry point

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::read_document;
use config::KindredConfig;

#[derive(Parser)]
#[command(name = "kindred")]
#[command(version)]
#[command(about = "Tools for Kindred post documents", long_about = None)]
struct Cli {
    /// TOML file with [normalization], [validation] and [html] tables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonicalize a document and print it as JSON
    Normalize {
        /// Post document (JSON)
        input: PathBuf,
    },

    /// Check a document against publishing limits (exits 1 on findings)
    Validate {
        /// Post document (JSON)
        input: PathBuf,
    },

    /// Export a document as HTML
    Html {
        /// Post document (JSON)
        input: PathBuf,
    },

    /// Export a video's caption track as WebVTT
    Vtt {
        /// Post document (JSON)
        input: PathBuf,

        /// Block index of the video (defaults to the first video with a track)
        #[arg(long)]
        index: Option<usize>,
    },

    /// Print word, media and mention metrics
    Analyze {
        /// Post document (JSON)
        input: PathBuf,
    },

    /// Compare two versions of a document block by block
    Diff {
        /// Earlier version (JSON)
        old: PathBuf,

        /// Later version (JSON)
        new: PathBuf,
    },

    /// Print a feed preview
    Summary {
        /// Post document (JSON)
        input: PathBuf,

        /// Title to include in the preview
        #[arg(long)]
        title: Option<String>,
    },
}

fn print(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries command output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kindred=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = KindredConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Normalize { input } => {
            let document = read_document(&input)?;
            print(&commands::normalize::execute(&document, &config.normalization)?)?;
        }
        Commands::Validate { input } => {
            let document = read_document(&input)?;
            let output = commands::validate::execute(&document, &config.validation)?;
            print(&output.json)?;
            if !output.is_valid() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Html { input } => {
            let document = read_document(&input)?;
            print(&commands::export::html(&document, &config.html))?;
        }
        Commands::Vtt { input, index } => {
            let document = read_document(&input)?;
            print(&commands::export::vtt(&document, index)?)?;
        }
        Commands::Analyze { input } => {
            let document = read_document(&input)?;
            print(&commands::analysis::analyze_document(&document)?)?;
        }
        Commands::Diff { old, new } => {
            let old = read_document(&old)?;
            let new = read_document(&new)?;
            print(&commands::analysis::diff_documents(&old, &new)?)?;
        }
        Commands::Summary { input, title } => {
            let document = read_document(&input)?;
            print(&commands::analysis::summary(&document, title.as_deref())?)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
