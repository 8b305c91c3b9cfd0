//! Retrieved article text

use std::fmt;

/// One retrieved article, ready for display
///
/// The text starts with a synthetic `--- Article <group>:<id> ---` line,
/// followed by every line the server sent for the ARTICLE command, in
/// receipt order and with the original line endings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    /// Group the article was selected in
    pub group: String,
    /// Article number as listed in the overview
    pub article_id: String,
    text: String,
}

impl ArticleContent {
    /// Assemble article text from the raw lines received
    pub fn from_lines<S: AsRef<str>>(group: &str, article_id: &str, lines: &[S]) -> Self {
        let mut text = header_line(group, article_id);
        for line in lines {
            text.push_str(line.as_ref());
        }
        Self {
            group: group.to_string(),
            article_id: article_id.to_string(),
            text,
        }
    }

    /// The full text, header line included
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text after the synthetic header line
    pub fn body(&self) -> &str {
        let header_len = header_line(&self.group, &self.article_id).len();
        &self.text[header_len..]
    }

    /// Consume and return the full text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `--- Article <group>:<id> ---` with CRLF
fn header_line(group: &str, article_id: &str) -> String {
    format!("--- Article {}:{} ---\r\n", group, article_id)
}
