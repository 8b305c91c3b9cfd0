//! Group selection and overview scanning

use super::NntpClient;
use crate::commands::{self, GroupRange, OverviewRecord};
use crate::error::{NntpError, Result};
use crate::filter::PosterFilter;
use crate::response::{has_status, prefixes};
use tracing::{debug, trace, warn};

/// Outcome of scanning one selected group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupScan {
    /// Article range reported by GROUP
    pub range: GroupRange,
    /// Number of well-formed overview records examined
    pub examined: usize,
    /// Article numbers that passed the filter, in server order
    pub articles: Vec<String>,
}

impl NntpClient {
    /// Select a newsgroup (GROUP)
    ///
    /// Returns `Ok(None)` when the server does not answer with `211 `; the
    /// group is unusable and callers move on. Range numbers that fail to
    /// parse are read as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::InvalidGroupResponse`](crate::NntpError::InvalidGroupResponse) - `211` reply with fewer than four fields
    /// - [`NntpError::ConnectionClosed`](crate::NntpError::ConnectionClosed) - Server closed the connection
    pub async fn select_group(&mut self, newsgroup: &str) -> Result<Option<GroupRange>> {
        debug!("Selecting newsgroup: {}", newsgroup);

        self.send_command(&commands::group(newsgroup)).await?;
        let response = self.read_line().await?;
        trace!("Received: {}", response.trim_end());

        if !has_status(&response, prefixes::GROUP_SELECTED) {
            warn!(
                "Skipping group {}: server replied {}",
                newsgroup,
                response.trim_end()
            );
            return Ok(None);
        }

        let range = commands::parse_group_range(newsgroup, &response)?;
        self.current_group = Some(newsgroup.to_string());

        debug!(
            "Group {} selected: {} articles ({}-{})",
            newsgroup, range.count, range.first, range.last
        );
        Ok(Some(range))
    }

    /// Fetch overview records for an inclusive article range (XOVER)
    ///
    /// Malformed lines are skipped. A refused command or a block cut short
    /// by the server yields whatever records were received.
    pub async fn fetch_overview(&mut self, first: u64, last: u64) -> Result<Vec<OverviewRecord>> {
        self.send_command(&commands::xover(first, last)).await?;

        let response = match self.read_status().await {
            Ok(response) => response,
            Err(NntpError::InvalidResponse(line)) => {
                // A block may still follow; consume it to stay in step
                let skipped = self.read_multiline_block().await;
                warn!(
                    "No overview for {}-{}: unreadable status {:?}, discarded {} lines",
                    first,
                    last,
                    line,
                    skipped.len()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!("No overview for {}-{}: {}", first, last, e);
                return Ok(Vec::new());
            }
        };
        if !response.is_success() {
            warn!(
                "No overview for {}-{}: {} {}",
                first, last, response.code, response.message
            );
            return Ok(Vec::new());
        }

        let lines = self.read_multiline_block().await;
        let records: Vec<OverviewRecord> = lines
            .iter()
            .filter_map(|line| commands::parse_overview_line(line))
            .collect();

        if records.len() < lines.len() {
            trace!(
                "Skipped {} malformed overview lines",
                lines.len() - records.len()
            );
        }
        Ok(records)
    }

    /// Select a group and collect the article numbers matching `filter`
    ///
    /// Returns `Ok(None)` if the group could not be selected.
    ///
    /// # Errors
    ///
    /// Propagates the fatal errors of [`select_group`](Self::select_group).
    pub async fn scan_group(
        &mut self,
        newsgroup: &str,
        filter: &PosterFilter,
    ) -> Result<Option<GroupScan>> {
        let Some(range) = self.select_group(newsgroup).await? else {
            return Ok(None);
        };

        let records = self.fetch_overview(range.first, range.last).await?;
        let articles: Vec<String> = records
            .iter()
            .filter(|record| filter.matches(record))
            .map(|record| record.article_number.clone())
            .collect();

        debug!(
            "Group {}: {} of {} records matched",
            newsgroup,
            articles.len(),
            records.len()
        );
        Ok(Some(GroupScan {
            range,
            examined: records.len(),
            articles,
        }))
    }
}
