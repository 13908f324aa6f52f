use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use chatlog_summary::{
    analyze_chat_log, summarize_folder, write_report, AnalyzerConfig, FileOrder, FolderConfig,
    OutputFormat,
};

#[derive(Parser)]
#[command(name = "chatlog-summary")]
#[command(author, version, about = "Message statistics and keyword summaries for chat logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every *.txt chat log in a folder
    Summarize {
        /// Folder containing the chat logs
        #[arg(short, long, default_value = "chat_logs")]
        folder: PathBuf,

        /// Summarize with filtered tokens in text order instead of TF-IDF
        #[arg(long = "no-tfidf", action = ArgAction::SetFalse)]
        use_tfidf: bool,

        /// Process files sorted by name instead of directory order
        #[arg(long)]
        sorted: bool,

        /// Skip unreadable files instead of aborting
        #[arg(long)]
        keep_going: bool,

        /// Emit one JSON object per file
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report a single chat log file
    Analyze {
        /// Chat log file
        #[arg(short, long)]
        input: PathBuf,

        /// Summarize with filtered tokens in text order instead of TF-IDF
        #[arg(long = "no-tfidf", action = ArgAction::SetFalse)]
        use_tfidf: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            folder,
            use_tfidf,
            sorted,
            keep_going,
            json,
            verbose,
        } => {
            setup_logging(verbose);
            let config = FolderConfig {
                analyzer: AnalyzerConfig { use_tfidf },
                order: if sorted {
                    FileOrder::Sorted
                } else {
                    FileOrder::Directory
                },
                keep_going,
                format: output_format(json),
            };
            run_summarize(folder, &config)
        }
        Commands::Analyze {
            input,
            use_tfidf,
            json,
            verbose,
        } => {
            setup_logging(verbose);
            let config = AnalyzerConfig { use_tfidf };
            run_analyze(input, &config, output_format(json))
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // stdout carries the report
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

fn run_summarize(folder: PathBuf, config: &FolderConfig) -> Result<()> {
    info!("Summarizing chat logs in {:?}", folder);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = summarize_folder(&folder, config, &mut out)
        .with_context(|| format!("Failed to summarize folder {:?}", folder))?;

    if result.skipped > 0 {
        info!("{} unreadable files were skipped", result.skipped);
    }
    Ok(())
}

fn run_analyze(input: PathBuf, config: &AnalyzerConfig, format: OutputFormat) -> Result<()> {
    info!("Analyzing chat log {:?}", input);
    let report = analyze_chat_log(&input, config).context("Failed to analyze chat log")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, format)?;
    out.flush()?;
    Ok(())
}
