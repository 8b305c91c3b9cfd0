//! LIST ACTIVE command and parsing

/// Build LIST ACTIVE command (RFC 3977 §7.6.3)
///
/// Lists active newsgroups matching the wildmat pattern; an empty pattern
/// lists every group.
pub fn list_active(wildmat: &str) -> String {
    if wildmat.is_empty() {
        "LIST ACTIVE".to_string()
    } else {
        format!("LIST ACTIVE {}", wildmat)
    }
}

/// Extract the group name from one LIST ACTIVE line
///
/// Format: "group high low status", e.g. "comp.lang.rust 12345 1000 y".
/// Only the first whitespace-separated field is used; blank lines yield `None`.
pub fn parse_active_group_name(line: &str) -> Option<String> {
    line.split_whitespace().next().map(str::to_string)
}

/// Parse every line of a LIST ACTIVE block into group names
///
/// Server order is preserved and duplicates are kept.
pub fn parse_active_group_names<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| parse_active_group_name(line.as_ref()))
        .collect()
}
