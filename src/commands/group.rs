//! GROUP command and response parsing

use crate::error::{NntpError, Result};

/// Build GROUP command
pub fn group(newsgroup: &str) -> String {
    format!("GROUP {}", newsgroup)
}

/// Article range reported by a successful GROUP command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRange {
    /// Estimated number of articles in the group
    pub count: u64,
    /// Number of the first article
    pub first: u64,
    /// Number of the last article
    pub last: u64,
}

/// Parse a `211` GROUP status line
///
/// Response format: "211 count first last group-name". The first and last
/// article numbers are the third and fourth whitespace-separated fields.
/// Numbers that fail to parse become zero; a line with fewer than four
/// fields is a protocol violation.
pub fn parse_group_range(newsgroup: &str, line: &str) -> Result<GroupRange> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(NntpError::InvalidGroupResponse {
            group: newsgroup.to_string(),
            response: line.trim_end().to_string(),
        });
    }

    Ok(GroupRange {
        count: parts[1].parse().unwrap_or(0),
        first: parts[2].parse().unwrap_or(0),
        last: parts[3].parse().unwrap_or(0),
    })
}
