//! Search orchestration
//!
//! A run uses up to two independent sessions: a listing session that
//! resolves a wildmat into group names, and a fetch session that scans each
//! group and retrieves the matching articles. Each session owns its
//! connection and releases it before the next one opens.

use crate::article::ArticleContent;
use crate::client::NntpClient;
use crate::config::{GroupSelection, SearchConfig, ServerConfig};
use crate::error::{NntpError, Result};
use crate::filter::PosterFilter;
use tracing::{debug, warn};

/// Articles found by a search run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Matching articles in group order, then server order within a group
    pub articles: Vec<ArticleContent>,
    /// Groups that were selected and scanned
    pub groups_searched: usize,
    /// Groups the server would not select
    pub groups_skipped: usize,
    /// Matching articles the server no longer had when fetched
    pub articles_missing: usize,
}

impl SearchReport {
    /// Number of articles found
    pub fn count(&self) -> usize {
        self.articles.len()
    }

    /// Whether nothing matched
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// One connection with a known purpose, opened and authenticated
struct Session {
    client: NntpClient,
    purpose: &'static str,
}

impl Session {
    /// Connect, read the greeting, and authenticate when credentials are complete
    async fn open(server: &ServerConfig, purpose: &'static str) -> Result<Self> {
        debug!("Opening {} session to {}", purpose, server.address());

        let mut client = NntpClient::connect(server)
            .await
            .map_err(|e| e.context(format!("{} session", purpose)))?;

        if server.has_credentials() {
            if let Err(e) = client
                .authenticate(&server.username, &server.password)
                .await
            {
                return Err(e.context(format!("AUTHINFO ({} session)", purpose)));
            }
        } else {
            debug!("No complete credentials, skipping authentication");
        }

        Ok(Self { client, purpose })
    }

    /// Release the connection, sending QUIT only if the work succeeded
    async fn finish<T>(self, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => {
                debug!("Closing {} session", self.purpose);
                self.client.close().await;
                Ok(value)
            }
            Err(e) => {
                debug!("Dropping {} session after error", self.purpose);
                drop(self.client);
                Err(e)
            }
        }
    }
}

/// Run a complete search: resolve groups, scan them, fetch matching articles
///
/// # Errors
///
/// Returns an error if:
/// - [`NntpError::InvalidConfig`] - The poster filter is empty
/// - Connection, authentication, listing, or article retrieval fails; the
///   error is wrapped in [`NntpError::Context`] naming the failing step
pub async fn run(config: &SearchConfig) -> Result<SearchReport> {
    config.validate()?;

    let groups = resolve_groups(config).await?;
    debug!("Searching {} groups", groups.len());

    let filter = PosterFilter::new(&config.poster, config.match_mode, config.days);
    fetch_matching_articles(&config.server, &groups, &filter).await
}

/// Turn the configured group argument into concrete group names
///
/// A plain group name is used as-is; a wildmat or no group at all opens a
/// listing session.
pub async fn resolve_groups(config: &SearchConfig) -> Result<Vec<String>> {
    match config.group_selection() {
        GroupSelection::Single(group) => Ok(vec![group]),
        GroupSelection::Pattern(pattern) => list_groups(&config.server, &pattern).await,
    }
}

/// List groups matching `pattern` over a dedicated session
pub async fn list_groups(server: &ServerConfig, pattern: &str) -> Result<Vec<String>> {
    let mut session = Session::open(server, "listing").await?;
    let result = session
        .client
        .list_groups(pattern)
        .await
        .map_err(|e| e.context(format!("LIST ACTIVE {}", pattern).trim_end().to_string()));
    session.finish(result).await
}

/// Scan each group in order and fetch every matching article over one session
pub async fn fetch_matching_articles(
    server: &ServerConfig,
    groups: &[String],
    filter: &PosterFilter,
) -> Result<SearchReport> {
    let mut session = Session::open(server, "fetch").await?;
    let result = scan_and_fetch(&mut session.client, groups, filter).await;
    session.finish(result).await
}

async fn scan_and_fetch(
    client: &mut NntpClient,
    groups: &[String],
    filter: &PosterFilter,
) -> Result<SearchReport> {
    let mut report = SearchReport::default();

    for group in groups {
        let scan = client
            .scan_group(group, filter)
            .await
            .map_err(|e| e.context(format!("GROUP {}", group)))?;

        let Some(scan) = scan else {
            report.groups_skipped += 1;
            continue;
        };
        report.groups_searched += 1;

        for article_id in &scan.articles {
            match client.fetch_article(group, article_id).await {
                Ok(article) => report.articles.push(article),
                Err(NntpError::NoSuchArticle(detail)) => {
                    warn!("Article vanished before retrieval: {}", detail);
                    report.articles_missing += 1;
                }
                Err(e) => {
                    return Err(e.context(format!("ARTICLE {} in {}", article_id, group)));
                }
            }
        }
    }

    debug!(
        "Found {} articles in {} groups ({} skipped)",
        report.count(),
        report.groups_searched,
        report.groups_skipped
    );
    Ok(report)
}
