//! Server and search configuration

use crate::error::{NntpError, Result};
use crate::filter::MatchMode;

/// NNTP server configuration
///
/// Contains all the information needed to open a session: the endpoint,
/// whether to wrap it in TLS, and optional credentials.
///
/// # Example
///
/// ```
/// use nntp_search::ServerConfig;
///
/// let config = ServerConfig::plain("news.example.com", "", "");
/// assert_eq!(config.port, 119);
/// assert!(!config.has_credentials());
///
/// let config = ServerConfig::tls("news.example.com", "user", "pass");
/// assert_eq!(config.port, 563);
/// assert!(config.allow_insecure_tls);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerConfig {
    /// Server hostname (e.g., "news.example.com")
    pub host: String,

    /// Server port (typically 119 for plain, 563 for TLS)
    pub port: u16,

    /// Use TLS/SSL encryption
    #[cfg_attr(feature = "serde", serde(default))]
    pub tls: bool,

    /// Skip certificate validation on TLS connections
    ///
    /// **Security Warning:** When `true`, any certificate is accepted, which
    /// leaves the session open to man-in-the-middle attacks. This is the
    /// default for TLS connections because many news servers run with
    /// self-signed certificates; it trades authenticity for connectivity.
    /// Use [`ServerConfig::verified`] to validate against the Mozilla roots.
    #[cfg_attr(feature = "serde", serde(default = "default_insecure"))]
    pub allow_insecure_tls: bool,

    /// Username for authentication (empty = no authentication)
    #[cfg_attr(feature = "serde", serde(default))]
    pub username: String,

    /// Password for authentication (empty = no authentication)
    #[cfg_attr(feature = "serde", serde(default))]
    pub password: String,
}

#[cfg(feature = "serde")]
fn default_insecure() -> bool {
    true
}

impl ServerConfig {
    /// Create a new server configuration
    ///
    /// TLS connections skip certificate validation unless
    /// [`allow_insecure_tls`](Self::allow_insecure_tls) is cleared.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        tls: bool,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            tls,
            allow_insecure_tls: true,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create a configuration for a TLS connection on the standard secure port (563)
    pub fn tls(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(host, 563, true, username, password)
    }

    /// Create a configuration for a plain connection on the standard port (119)
    ///
    /// **Warning:** Plain connections transmit credentials in clear text.
    pub fn plain(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(host, 119, false, username, password)
    }

    /// Create a TLS configuration that validates the server certificate
    pub fn verified(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let mut config = Self::tls(host, username, password);
        config.allow_insecure_tls = false;
        config
    }

    /// `host:port` as dialed
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether AUTHINFO should be attempted
    ///
    /// Authentication is skipped entirely unless both the username and the
    /// password are non-empty.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Everything a search run needs, built once and passed by reference
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Server to search
    pub server: ServerConfig,

    /// Group name or wildmat pattern; `None` searches every group
    #[cfg_attr(feature = "serde", serde(default))]
    pub group: Option<String>,

    /// Poster filter in `Name <email>` form; either half may be omitted
    pub poster: String,

    /// Only articles newer than this many days (0 = no date filtering)
    #[cfg_attr(feature = "serde", serde(default))]
    pub days: u32,

    /// Exact or substring poster matching
    #[cfg_attr(feature = "serde", serde(default))]
    pub match_mode: MatchMode,
}

/// How the groups to search are obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSelection {
    /// A single group; no listing session is needed
    Single(String),
    /// Groups returned by `LIST ACTIVE` with this pattern (empty = all groups)
    Pattern(String),
}

impl SearchConfig {
    /// Create a search over every group using substring matching and no date limit
    pub fn new(server: ServerConfig, poster: impl Into<String>) -> Self {
        Self {
            server,
            group: None,
            poster: poster.into(),
            days: 0,
            match_mode: MatchMode::Substring,
        }
    }

    /// Restrict the search to a group name or wildmat pattern
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        self.group = if group.is_empty() { None } else { Some(group) };
        self
    }

    /// Only consider articles dated within the last `days` days
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Set the poster match policy
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Reject configurations that cannot produce a meaningful search
    ///
    /// # Errors
    ///
    /// Returns [`NntpError::InvalidConfig`] if the poster filter is blank
    /// or the host is empty. A poster of only whitespace counts as blank:
    /// it normalizes to an empty term, which would match every record.
    pub fn validate(&self) -> Result<()> {
        if self.poster.trim().is_empty() {
            return Err(NntpError::InvalidConfig(
                "poster filter must not be empty".to_string(),
            ));
        }
        if self.server.host.is_empty() {
            return Err(NntpError::InvalidConfig(
                "server host must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Decide whether the configured group needs a listing session
    pub fn group_selection(&self) -> GroupSelection {
        match self.group.as_deref() {
            None | Some("") => GroupSelection::Pattern(String::new()),
            Some(group) if is_wildmat(group) => GroupSelection::Pattern(group.to_string()),
            Some(group) => GroupSelection::Single(group.to_string()),
        }
    }
}

/// Whether a group argument contains wildmat metacharacters
fn is_wildmat(group: &str) -> bool {
    group.contains(['*', '?'])
}
