//! NNTP session engine
//!
//! One [`NntpClient`] owns one connection. Every operation sends a single
//! command and reads its reply before returning, so at most one command is
//! ever in flight.

mod articles;
mod auth;
mod connection;
mod group_ops;
mod io;
mod listing;
mod state;

pub use connection::NntpIo;
pub use group_ops::GroupScan;
pub use io::{DOT_TERMINATOR, is_terminator};

use state::ConnectionState;
use tokio::io::BufReader;
use tracing::debug;

/// Async NNTP client for a single session
///
/// # Example
///
/// ```no_run
/// use nntp_search::{NntpClient, ServerConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ServerConfig::tls("news.example.com", "user", "pass");
/// let mut client = NntpClient::connect(&config).await?;
/// client.authenticate(&config.username, &config.password).await?;
///
/// let groups = client.list_groups("alt.test*").await?;
/// println!("{} groups", groups.len());
/// client.close().await;
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct NntpClient {
    /// Buffered byte stream, plain TCP or TLS
    stream: BufReader<Box<dyn NntpIo>>,
    /// Connection state
    state: ConnectionState,
    /// Currently selected newsgroup
    current_group: Option<String>,
}

impl NntpClient {
    /// Get the currently selected newsgroup, if any
    pub fn current_group(&self) -> Option<&str> {
        self.current_group.as_deref()
    }

    /// Check if the client is currently authenticated
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, ConnectionState::Authenticated)
    }

    /// Check if QUIT has been sent on this connection
    pub fn is_closed(&self) -> bool {
        matches!(self.state, ConnectionState::Closed)
    }
}

impl Drop for NntpClient {
    fn drop(&mut self) {
        debug!("NntpClient dropped");
    }
}
