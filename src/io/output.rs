use std::io::Write;

use crate::error::Result;
use crate::models::{FileReport, MessageStats, Summary};

/// How reports are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// One JSON object per file, one per line
    Json,
}

/// Render the statistics block
pub fn format_stats(stats: &MessageStats) -> String {
    format!(
        "Total Messages: {}\nUser Messages: {}\nAI Messages: {}\n",
        stats.total, stats.user, stats.ai
    )
}

/// Render the summary block, starting with a blank line
pub fn format_summary(summary: &Summary) -> String {
    format!(
        "\nSummary for '{}'\n- The conversation had {} exchanges.\n- {}\n- Most common keywords: {}\n",
        summary.filename,
        summary.exchanges,
        summary.topic(),
        summary.keywords.join(", ")
    )
}

/// Render the full text report of one file
pub fn format_report(report: &FileReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{} Results\n", report.filename));

    output.push_str("User Messages:\n");
    for msg in &report.log.user {
        output.push_str(&format!("- {}\n", msg));
    }

    output.push_str("\nAI Messages:\n");
    for msg in &report.log.ai {
        output.push_str(&format!("- {}\n", msg));
    }

    output.push_str(&format_stats(&report.stats));
    output.push_str(&format!(
        "\nTop 5 Keywords: {}\n",
        report.top_keywords.join(", ")
    ));
    output.push_str(&format_summary(&report.summary));

    output
}

/// Write one report to `out` in the requested format
pub fn write_report<W: Write>(out: &mut W, report: &FileReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(format_report(report).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatLog;

    fn sample_report() -> FileReport {
        FileReport {
            filename: "chat.txt".to_string(),
            log: ChatLog {
                user: vec!["hello".to_string()],
                ai: vec!["hi there".to_string()],
            },
            stats: MessageStats { total: 2, user: 1, ai: 1 },
            top_keywords: vec!["hello".to_string()],
            summary: Summary {
                filename: "chat.txt".to_string(),
                exchanges: 2,
                keywords: vec!["hello".to_string()],
            },
        }
    }

    #[test]
    fn test_format_report_layout() {
        let expected = "\nchat.txt Results\n\
User Messages:\n\
- hello\n\
\n\
AI Messages:\n\
- hi there\n\
Total Messages: 2\n\
User Messages: 1\n\
AI Messages: 1\n\
\n\
Top 5 Keywords: hello\n\
\n\
Summary for 'chat.txt'\n\
- The conversation had 2 exchanges.\n\
- The conversation mainly revolved around 'hello'\n\
- Most common keywords: hello\n";

        assert_eq!(format_report(&sample_report()), expected);
    }

    #[test]
    fn test_summary_without_keywords() {
        let summary = Summary {
            filename: "empty.txt".to_string(),
            exchanges: 0,
            keywords: vec![],
        };
        let text = format_summary(&summary);

        assert!(text.contains("- The conversation covered general topics\n"));
        assert!(text.ends_with("- Most common keywords: \n"));
    }

    #[test]
    fn test_json_line() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample_report(), OutputFormat::Json).unwrap();

        let line = String::from_utf8(buf).unwrap();
        assert_eq!(line.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["filename"], "chat.txt");
        assert_eq!(value["user"][0], "hello");
        assert_eq!(value["stats"]["total"], 2);
        assert_eq!(value["summary"]["keywords"][0], "hello");
    }
}
