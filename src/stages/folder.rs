use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::io::{list_chat_logs, parse_chat_log_file, write_report, FileOrder, OutputFormat};
use crate::keywords::{extract_keywords_tfidf, TfIdfVectorizer, DEFAULT_TOP_N};
use crate::models::{ChatLog, FileReport};

use super::{generate_summary, message_stats, AnalyzerConfig};

/// Configuration for a folder run
#[derive(Debug, Clone, Default)]
pub struct FolderConfig {
    pub analyzer: AnalyzerConfig,
    /// File processing order
    pub order: FileOrder,
    /// Skip unreadable files instead of aborting the run
    pub keep_going: bool,
    pub format: OutputFormat,
}

/// Result of a folder run
#[derive(Debug, Default)]
pub struct FolderResult {
    /// Files reported
    pub processed: usize,
    /// Files skipped because they could not be read
    pub skipped: usize,
}

/// Build the report of an already parsed chat log
pub fn build_report(filename: &str, log: ChatLog, config: &AnalyzerConfig) -> FileReport {
    let stats = message_stats(&log);
    // The headline keyword line is always TF-IDF ranked
    let top_keywords = extract_keywords_tfidf(
        &log.all_messages(),
        &TfIdfVectorizer::default(),
        DEFAULT_TOP_N,
    );
    let summary = generate_summary(&log.user, &log.ai, filename, config);

    FileReport {
        filename: filename.to_string(),
        log,
        stats,
        top_keywords,
        summary,
    }
}

/// Parse and analyze a single chat log file
pub fn analyze_chat_log(path: &Path, config: &AnalyzerConfig) -> Result<FileReport> {
    let log = parse_chat_log_file(path)?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(build_report(&filename, log, config))
}

/// Report every `*.txt` chat log in `dir`, in order, to `out`.
///
/// Each file's report is written as soon as it is built. An unreadable file
/// aborts the run unless `keep_going` is set.
pub fn summarize_folder<W: Write>(
    dir: &Path,
    config: &FolderConfig,
    out: &mut W,
) -> Result<FolderResult> {
    let files = list_chat_logs(dir, config.order)?;
    info!("Found {} chat logs in {:?}", files.len(), dir);

    let mut result = FolderResult::default();

    for path in &files {
        let report = match analyze_chat_log(path, &config.analyzer) {
            Ok(report) => report,
            Err(e) if config.keep_going => {
                warn!("Skipping {:?}: {}", path, e);
                result.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        write_report(out, &report, config.format)?;
        result.processed += 1;
    }

    out.flush()?;
    info!(
        "Reported {} chat logs, skipped {}",
        result.processed, result.skipped
    );

    Ok(result)
}
