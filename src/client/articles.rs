//! Article retrieval

use super::NntpClient;
use crate::article::ArticleContent;
use crate::commands;
use crate::error::{NntpError, Result};
use tracing::debug;

impl NntpClient {
    /// Retrieve one article from the selected group (ARTICLE)
    ///
    /// The returned text holds the synthetic header, the status line, and
    /// every following line up to the dot terminator, verbatim. Unlike
    /// listing and overview reads, the article block must arrive complete:
    /// a truncated article would be indistinguishable from a whole one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::NoSuchArticle`] - Server refused the article (e.g. 423, 430)
    /// - [`NntpError::ConnectionClosed`] - Stream ended before the terminator
    /// - [`NntpError::InvalidResponse`] - Status line was not a response
    pub async fn fetch_article(&mut self, group: &str, article_id: &str) -> Result<ArticleContent> {
        debug!("Fetching article {}:{}", group, article_id);

        self.send_command(&commands::article(article_id)).await?;
        let status = self.read_status().await?;
        if !status.is_success() {
            return Err(NntpError::NoSuchArticle(format!(
                "{}:{} ({} {})",
                group, article_id, status.code, status.message
            )));
        }

        let mut lines = Vec::with_capacity(128);
        lines.push(status.raw);
        lines.extend(self.read_multiline_block_strict().await?);

        debug!("Article {}:{} has {} lines", group, article_id, lines.len());
        Ok(ArticleContent::from_lines(group, article_id, &lines))
    }
}
