//! lexical-html CLI - Main entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lexical-html")]
#[command(version)]
#[command(about = "Render serialized Lexical documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a serialized document to HTML
    Render {
        /// Input file holding the serialized document ('-' for stdin)
        input: String,

        /// Plain-text fallback used when the document cannot be parsed
        #[arg(long)]
        fallback: Option<String>,

        /// Write output to FILE (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Extract the plain text of a serialized document
    Text {
        /// Input file holding the serialized document ('-' for stdin)
        input: String,

        /// Write output to FILE (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexical_html=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            fallback,
            output,
        } => render(&input, fallback.as_deref(), output.as_deref()),
        Commands::Text { input, output } => text(&input, output.as_deref()),
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input))
    }
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, bytes)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            use std::io::Write;
            std::io::stdout()
                .write_all(bytes)
                .context("failed to write to stdout")
        }
    }
}

fn render(input: &str, fallback: Option<&str>, output: Option<&Path>) -> Result<()> {
    let serialized = read_input(input)?;

    // The library degrades silently; the CLI is where the failure is
    // worth mentioning.
    if let Err(err) = lexical_html::parse_document(&serialized) {
        tracing::warn!("document did not parse, rendering fallback text: {err}");
    }

    let mut buf = Vec::new();
    lexical_html::write_content(Some(&serialized), fallback, &mut buf)?;
    write_output(output, &buf)
}

fn text(input: &str, output: Option<&Path>) -> Result<()> {
    let serialized = read_input(input)?;
    let document = lexical_html::parse_document(&serialized)?;

    let mut buf = Vec::new();
    lexical_html::writers::plaintext::write_nodes(&document.children, &mut buf)?;
    write_output(output, &buf)
}
