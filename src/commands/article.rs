//! ARTICLE command

/// Build ARTICLE command
///
/// `id` is an article number in the currently selected group or a
/// message-id in angle brackets.
pub fn article(id: &str) -> String {
    format!("ARTICLE {}", id)
}
