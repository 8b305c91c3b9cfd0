//! Low-level I/O operations for NNTP protocol communication
//!
//! This module provides the line-level primitives every session operation
//! is built from:
//! - Command transmission (one CRLF-terminated line per write)
//! - Raw single-line reads, terminator included
//! - Dot-terminated multi-line blocks, tolerant or strict

use super::NntpClient;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::NntpResponse;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt};
use tracing::{trace, warn};

/// The line that ends every multi-line block
pub const DOT_TERMINATOR: &str = ".\r\n";

/// Whether a raw line is the multi-line block terminator
pub fn is_terminator(line: &str) -> bool {
    line == DOT_TERMINATOR
}

/// Initial capacity for a single line read
const LINE_CAPACITY: usize = 512;

impl NntpClient {
    /// Send a command line to the server
    ///
    /// The command and its CRLF terminator go out in a single write followed
    /// by a flush. No reply is read here.
    pub(crate) async fn send_command(&mut self, command: &str) -> Result<()> {
        if command.starts_with("AUTHINFO PASS") {
            trace!("Sending command: AUTHINFO PASS ****");
        } else {
            trace!("Sending command: {}", command);
        }

        let mut line = Vec::with_capacity(command.len() + 2);
        line.extend_from_slice(command.as_bytes());
        line.extend_from_slice(b"\r\n");

        let writer = self.stream.get_mut();
        writer.write_all(&line).await?;
        writer.flush().await?;
        Ok(())
    }

    /// Read one raw line, terminator included
    ///
    /// # Errors
    ///
    /// Returns [`NntpError::ConnectionClosed`] if the stream ends before a
    /// complete line arrives, or [`NntpError::Io`] on a read failure.
    pub(crate) async fn read_line(&mut self) -> Result<String> {
        let mut line_bytes = Vec::with_capacity(LINE_CAPACITY);
        self.stream.read_until(b'\n', &mut line_bytes).await?;

        if line_bytes.is_empty() || !line_bytes.ends_with(b"\n") {
            return Err(NntpError::ConnectionClosed);
        }

        // Convert to string with lossy UTF-8 conversion
        Ok(String::from_utf8_lossy(&line_bytes).into_owned())
    }

    /// Read one line and parse it as a status line
    pub(crate) async fn read_status(&mut self) -> Result<NntpResponse> {
        let line = self.read_line().await?;
        trace!("Received: {}", line.trim_end());
        commands::parse_status_line(&line)
    }

    /// Read a dot-terminated block, stopping quietly on read failure
    ///
    /// Lines are returned verbatim; the terminator is not included. If the
    /// stream fails or closes before the terminator, the lines read so far
    /// are returned.
    pub(crate) async fn read_multiline_block(&mut self) -> Vec<String> {
        let mut lines = Vec::with_capacity(64);
        loop {
            match self.read_line().await {
                Ok(line) if is_terminator(&line) => break,
                Ok(line) => lines.push(line),
                Err(e) => {
                    warn!(
                        "Multi-line block ended early after {} lines: {}",
                        lines.len(),
                        e
                    );
                    break;
                }
            }
        }
        lines
    }

    /// Read a dot-terminated block, failing if the terminator never arrives
    ///
    /// # Errors
    ///
    /// Propagates the first read failure; partial blocks are never returned.
    pub(crate) async fn read_multiline_block_strict(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::with_capacity(64);
        loop {
            let line = self.read_line().await?;
            if is_terminator(&line) {
                return Ok(lines);
            }
            lines.push(line);
        }
    }
}
