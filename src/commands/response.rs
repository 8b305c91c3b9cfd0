//! Status line parsing

use crate::error::{NntpError, Result};
use crate::response::NntpResponse;

/// Parse a status line into its 3-digit code and message
///
/// The raw line, terminator included, is kept on the response. A leading
/// byte-order mark is ignored.
///
/// # Errors
///
/// Returns [`NntpError::InvalidResponse`] unless the line starts with exactly
/// three digits followed by a space or the end of the line.
pub fn parse_status_line(raw: &str) -> Result<NntpResponse> {
    let line = raw
        .trim_start_matches('\u{FEFF}')
        .trim_end_matches(['\r', '\n']);
    let invalid = || NntpError::InvalidResponse(line.chars().take(100).collect());

    let digits = line.get(..3).ok_or_else(invalid)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let message = match &line[3..] {
        "" => "",
        rest => rest.strip_prefix(' ').ok_or_else(invalid)?,
    };
    let code = digits.parse::<u16>().map_err(|_| invalid())?;

    Ok(NntpResponse {
        code,
        message: message.to_string(),
        raw: raw.to_string(),
    })
}
