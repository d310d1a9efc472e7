use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use quote_cli::cli::{
    handle_config, handle_document, handle_export, handle_init, handle_message, handle_summary,
    load_catalog, ExportFormat, MessageChannel,
};
use quote_cli::config::{QuotePaths, Settings};

#[derive(Parser)]
#[command(
    name = "quote",
    version,
    about = "Terminal-based price-quote builder for service agencies",
    long_about = "quote-cli builds mathematically consistent price quotes from a \
                  request file: selected services, payment method and transport \
                  fold into one computed snapshot that feeds the on-screen \
                  summary, the formatted document and the outbound message drafts."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the on-screen quote summary
    Summary {
        /// Request file (JSON or YAML)
        file: PathBuf,
    },

    /// Render the formatted quote document
    #[command(alias = "doc")]
    Document {
        /// Request file (JSON or YAML)
        file: PathBuf,
        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print an outbound message draft (chat or e-mail)
    #[command(alias = "msg")]
    Message {
        /// Request file (JSON or YAML)
        file: PathBuf,
        /// Message channel
        #[arg(short, long, value_enum)]
        channel: MessageChannel,
        /// Print the encoded outbound link instead of the draft body
        #[arg(long)]
        link: bool,
    },

    /// Serialize the computed quote snapshot
    Export {
        /// Request file (JSON or YAML)
        file: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Write the export to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a commented example request file
    Init {
        /// Path for the example request file
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths, settings and the category catalog
    let paths = QuotePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let catalog = load_catalog(&paths)?;

    match cli.command {
        Commands::Summary { file } => {
            handle_summary(&file, &settings, &catalog)?;
        }
        Commands::Document { file, output } => {
            handle_document(&file, output.as_deref(), &settings, &catalog)?;
        }
        Commands::Message {
            file,
            channel,
            link,
        } => {
            handle_message(&file, channel, link, &settings, &catalog)?;
        }
        Commands::Export {
            file,
            format,
            output,
        } => {
            handle_export(&file, format, output.as_deref(), &settings, &catalog)?;
        }
        Commands::Init { file } => {
            handle_init(&file)?;
        }
        Commands::Config => {
            handle_config(&paths, &settings)?;
        }
    }

    Ok(())
}
