//! NNTP response types and status codes

/// A parsed NNTP status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NntpResponse {
    /// 3-digit NNTP response code
    pub code: u16,
    /// Status message from server
    pub message: String,
    /// The line exactly as received, terminator included
    pub raw: String,
}

impl NntpResponse {
    /// Check if response indicates success (2xx)
    pub fn is_success(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Check if response indicates continuation (3xx)
    pub fn is_continuation(&self) -> bool {
        self.code >= 300 && self.code < 400
    }

    /// Check if response indicates error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.code >= 400
    }
}

/// Whether a raw status line starts with the given status prefix
///
/// Status checks compare the leading characters of the line, e.g. `"381"`
/// or `"211 "`, so a line that is not a well-formed response simply fails
/// the check.
pub fn has_status(line: &str, prefix: &str) -> bool {
    line.starts_with(prefix)
}

/// NNTP response codes (RFC 3977, RFC 4643)
pub mod codes {
    /// Server ready, posting allowed
    pub const READY_POSTING_ALLOWED: u16 = 200;
    /// Server ready, no posting
    pub const READY_NO_POSTING: u16 = 201;
    /// Closing connection
    pub const CLOSING_CONNECTION: u16 = 205;
    /// Group selected
    pub const GROUP_SELECTED: u16 = 211;
    /// List of newsgroups follows
    pub const LIST_INFORMATION_FOLLOWS: u16 = 215;
    /// Article follows
    pub const ARTICLE_FOLLOWS: u16 = 220;
    /// Overview information follows
    pub const OVERVIEW_INFO_FOLLOWS: u16 = 224;
    /// Authentication accepted
    pub const AUTH_ACCEPTED: u16 = 281;
    /// Continue with authentication
    pub const AUTH_CONTINUE: u16 = 381;
    /// No such newsgroup
    pub const NO_SUCH_GROUP: u16 = 411;
    /// No article with that number
    pub const NO_SUCH_ARTICLE_NUMBER: u16 = 423;
    /// Authentication required
    pub const AUTH_REQUIRED: u16 = 480;
    /// Authentication rejected
    pub const AUTH_REJECTED: u16 = 481;
}

/// Status-line prefixes compared against raw lines
pub mod prefixes {
    /// GROUP accepted; the trailing space guards against longer codes
    pub const GROUP_SELECTED: &str = "211 ";
    /// AUTHINFO USER accepted, password required
    pub const AUTH_CONTINUE: &str = "381";
    /// AUTHINFO PASS accepted
    pub const AUTH_ACCEPTED: &str = "281";
}
