//! NNTP authentication support (AUTHINFO USER/PASS)

use super::NntpClient;
use super::state::ConnectionState;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::{has_status, prefixes};
use tracing::{debug, trace};

impl NntpClient {
    /// Authenticate with username and password (AUTHINFO USER/PASS)
    ///
    /// Sends AUTHINFO USER and requires a `381` reply, then sends
    /// AUTHINFO PASS and requires `281`. Deciding whether to authenticate at
    /// all is left to the caller.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use nntp_search::{NntpClient, ServerConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ServerConfig::tls("news.example.com", "user", "pass");
    /// let mut client = NntpClient::connect(&config).await?;
    /// client.authenticate(&config.username, &config.password).await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::Protocol`] - Already authenticated
    /// - [`NntpError::AuthRejectedUser`] - AUTHINFO USER was not answered with 381
    /// - [`NntpError::AuthFailed`] - AUTHINFO PASS was not answered with 281
    /// - [`NntpError::ConnectionClosed`] - Server closed the connection
    pub async fn authenticate(&mut self, username: &str, password: &str) -> Result<()> {
        debug!("Authenticating as {}", username);

        if matches!(self.state, ConnectionState::Authenticated) {
            return Err(NntpError::Protocol {
                code: 502,
                message: "Already authenticated".to_string(),
            });
        }

        self.send_command(&commands::authinfo_user(username)).await?;
        self.state = ConnectionState::InProgress;

        let response = self.read_line().await?;
        trace!("Received: {}", response.trim_end());
        if !has_status(&response, prefixes::AUTH_CONTINUE) {
            self.state = ConnectionState::Ready;
            return Err(NntpError::AuthRejectedUser(response.trim_end().to_string()));
        }

        self.send_command(&commands::authinfo_pass(password)).await?;

        let response = self.read_line().await?;
        trace!("Received: {}", response.trim_end());
        if !has_status(&response, prefixes::AUTH_ACCEPTED) {
            self.state = ConnectionState::Ready;
            return Err(NntpError::AuthFailed(response.trim_end().to_string()));
        }

        self.state = ConnectionState::Authenticated;
        debug!("Authentication successful");
        Ok(())
    }
}
