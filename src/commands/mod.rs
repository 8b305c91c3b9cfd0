//! NNTP command builders and response parsers
//!
//! Builders return the command line without its terminator; the client's
//! `send_command` appends CRLF when writing.

// Module declarations
pub mod article;
pub mod group;
pub mod list;
pub mod over;
pub mod response;

pub use article::*;
pub use group::*;
pub use list::*;
pub use over::*;
pub use response::*;

// Authentication and connection management commands

/// Build AUTHINFO USER command
pub fn authinfo_user(username: &str) -> String {
    format!("AUTHINFO USER {}", username)
}

/// Build AUTHINFO PASS command
pub fn authinfo_pass(password: &str) -> String {
    format!("AUTHINFO PASS {}", password)
}

/// Build QUIT command
pub fn quit() -> &'static str {
    "QUIT"
}
