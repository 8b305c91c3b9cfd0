//! Newsgroup listing

use super::NntpClient;
use crate::commands;
use crate::error::{NntpError, Result};
use tracing::debug;

impl NntpClient {
    /// List newsgroups matching a wildmat pattern (LIST ACTIVE)
    ///
    /// An empty pattern lists every group. Names are returned in server order
    /// without deduplication. A block cut short by the server is returned as
    /// far as it was received.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::Protocol`] - Server refused the listing (e.g. 480 auth required)
    /// - [`NntpError::ConnectionClosed`] - Server closed before the status line
    pub async fn list_groups(&mut self, pattern: &str) -> Result<Vec<String>> {
        debug!("Listing groups matching {:?}", pattern);

        self.send_command(&commands::list_active(pattern)).await?;
        let response = self.read_status().await?;
        if !response.is_success() {
            return Err(NntpError::Protocol {
                code: response.code,
                message: response.message,
            });
        }

        let lines = self.read_multiline_block().await;
        let groups = commands::parse_active_group_names(&lines);

        debug!("Server listed {} groups", groups.len());
        Ok(groups)
    }
}
