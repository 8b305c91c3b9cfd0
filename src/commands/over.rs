//! XOVER command and overview record parsing

/// Build XOVER command for an inclusive article range
pub fn xover(first: u64, last: u64) -> String {
    format!("XOVER {}-{}", first, last)
}

/// The overview fields the poster search needs
///
/// The article number is kept as the server sent it and is only ever echoed
/// back in an ARTICLE command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRecord {
    /// Article number within the newsgroup
    pub article_number: String,
    /// Article subject line
    pub subject: String,
    /// Raw From header, usually `Name <email>`
    pub from: String,
    /// Raw Date header
    pub date: String,
}

/// Parse one XOVER line into an [`OverviewRecord`]
///
/// Format: "article-number\tsubject\tfrom\tdate\tmessage-id\treferences\tbytes\tlines..."
/// Only the first four fields are required; lines with fewer are malformed
/// and yield `None`.
pub fn parse_overview_line(line: &str) -> Option<OverviewRecord> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut parts = line.split('\t');

    let article_number = parts.next()?;
    let subject = parts.next()?;
    let from = parts.next()?;
    let date = parts.next()?;

    Some(OverviewRecord {
        article_number: article_number.to_string(),
        subject: subject.to_string(),
        from: from.to_string(),
        date: date.to_string(),
    })
}
