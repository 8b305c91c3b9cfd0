//! Connection state types for NNTP client

/// NNTP connection state tracking authentication progress
///
/// Tracks the authentication state of an NNTP connection according to RFC 4643.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ConnectionState {
    /// Connected and ready for commands (not authenticated)
    Ready,
    /// Authentication in progress (AUTHINFO USER sent, waiting for PASS)
    InProgress,
    /// Successfully authenticated
    Authenticated,
    /// QUIT sent, connection closed
    Closed,
}
