use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ChatLogError, Result};
use crate::models::{ChatLog, Speaker};

/// Parse a chat log file into per-speaker utterances
pub fn parse_chat_log_file(path: &Path) -> Result<ChatLog> {
    let content = std::fs::read_to_string(path).map_err(|source| ChatLogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let log = parse_chat_log(&content);
    debug!(
        "Parsed {:?}: {} user, {} ai utterances",
        path,
        log.user.len(),
        log.ai.len()
    );
    Ok(log)
}

/// Parse chat log text line by line.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Lines are trimmed before
/// matching; lines without a `User:` or `AI:` prefix are dropped.
pub fn parse_chat_log(content: &str) -> ChatLog {
    let mut log = ChatLog::default();

    for line in content.split(['\n', '\r']) {
        if let Some((speaker, text)) = Speaker::classify(line.trim()) {
            log.push(speaker, text);
        }
    }

    log
}

/// Order in which folder entries are processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileOrder {
    /// Whatever order the OS lists the directory in
    #[default]
    Directory,
    /// Sorted by file name
    Sorted,
}

/// List `*.txt` files directly inside `dir` (no recursion)
pub fn list_chat_logs(dir: &Path, order: FileOrder) -> Result<Vec<PathBuf>> {
    let read_dir_err = |source| ChatLogError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_txt = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(".txt"));
        if is_txt {
            files.push(path);
        }
    }

    if order == FileOrder::Sorted {
        files.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
    }

    Ok(files)
}
