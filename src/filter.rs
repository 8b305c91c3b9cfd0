//! Poster and recency filtering of overview records
//!
//! A poster filter and every record's `From` field are reduced to the same
//! [`SearchTerm`] form before comparison, so case and surrounding whitespace
//! never decide a match. Records then pass a [`DateCutoff`] gate.

use crate::commands::OverviewRecord;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use std::fmt;

/// Normalized `(name, email)` pair derived from a `Name <email>` string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTerm {
    /// Lowercased display name, trimmed
    pub name: String,
    /// Lowercased address with angle brackets removed (may be empty)
    pub email: String,
}

impl SearchTerm {
    /// Normalize a raw poster string
    ///
    /// Lowercases and trims the input, splits it at the first `<` into a
    /// name and an address, trims the name and strips `>` from the address.
    ///
    /// ```
    /// use nntp_search::SearchTerm;
    ///
    /// let term = SearchTerm::parse("  John Doe <J@X.com> ");
    /// assert_eq!(term.name, "john doe");
    /// assert_eq!(term.email, "j@x.com");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        match lowered.split_once('<') {
            Some((name, email)) => Self {
                name: name.trim().to_string(),
                email: email.trim_matches('>').to_string(),
            },
            None => Self {
                name: lowered.trim().to_string(),
                email: String::new(),
            },
        }
    }

    /// Both halves equal
    pub fn matches_exact(&self, candidate: &SearchTerm) -> bool {
        self.name == candidate.name && self.email == candidate.email
    }

    /// Both halves contained in the candidate's halves
    ///
    /// An empty email is contained in every address, so a name-only term
    /// matches on name alone.
    pub fn matches_substring(&self, candidate: &SearchTerm) -> bool {
        candidate.name.contains(&self.name) && candidate.email.contains(&self.email)
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.email.is_empty() {
            write!(f, "{}", self.name)
        } else if self.name.is_empty() {
            write!(f, "<{}>", self.email)
        } else {
            write!(f, "{} <{}>", self.name, self.email)
        }
    }
}

/// Poster matching strictness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchMode {
    /// Normalized name and email must both be equal
    Exact,
    /// Normalized name and email must both be substrings of the record's
    #[default]
    Substring,
}

/// Records must be strictly newer than this instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateCutoff {
    cutoff: Option<DateTime<Utc>>,
}

impl DateCutoff {
    /// No date filtering
    pub fn none() -> Self {
        Self { cutoff: None }
    }

    /// `days` before `now`; zero days disables the gate
    ///
    /// A window reaching past the earliest representable instant admits
    /// every dated record.
    pub fn days_before(now: DateTime<Utc>, days: u32) -> Self {
        if days == 0 {
            return Self::none();
        }
        let cutoff = Duration::try_days(i64::from(days))
            .and_then(|window| now.checked_sub_signed(window))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self {
            cutoff: Some(cutoff),
        }
    }

    /// The cutoff instant, if any
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.cutoff
    }

    /// Whether a record dated `date` passes the gate
    pub fn admits(&self, date: &DateTime<FixedOffset>) -> bool {
        match self.cutoff {
            None => true,
            Some(cutoff) => date.with_timezone(&Utc) > cutoff,
        }
    }
}

/// Layout of an overview date once the weekday and zone comment are removed
const OVERVIEW_DATE_FORMAT: &str = "%d %b %Y %H:%M:%S %z";

/// Parse an overview `Date` field
///
/// Accepts `Weekday, D Mon YYYY HH:MM:SS ±ZZZZ` with an optional trailing
/// parenthesized zone name such as `(CEST)`. The weekday must be present but
/// is not checked against the date. Anything else (named zones, two-digit
/// years, missing seconds) returns `None`; such records are filtered out
/// rather than reported.
pub fn parse_overview_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();
    let without_comment = match trimmed.find(" (") {
        Some(idx) => &trimmed[..idx],
        None => trimmed,
    };

    let (weekday, rest) = without_comment.split_once(", ")?;
    if weekday.is_empty() || !weekday.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let fields: Vec<&str> = rest.split_whitespace().collect();
    let [_, _, year, _, zone] = fields.as_slice() else {
        return None;
    };
    // chrono reads any digit run as a year and accepts `+hh:mm` offsets
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if zone.len() != 5
        || !zone.starts_with(['+', '-'])
        || !zone.bytes().skip(1).all(|b| b.is_ascii_digit())
    {
        return None;
    }

    DateTime::parse_from_str(rest, OVERVIEW_DATE_FORMAT).ok()
}

/// Poster and date filter applied to each overview record
#[derive(Debug, Clone)]
pub struct PosterFilter {
    term: SearchTerm,
    mode: MatchMode,
    cutoff: DateCutoff,
}

impl PosterFilter {
    /// Build a filter whose date cutoff is computed once from the current time
    pub fn new(poster: &str, mode: MatchMode, days: u32) -> Self {
        Self::with_cutoff(poster, mode, DateCutoff::days_before(Utc::now(), days))
    }

    /// Build a filter with an explicit date cutoff
    pub fn with_cutoff(poster: &str, mode: MatchMode, cutoff: DateCutoff) -> Self {
        Self {
            term: SearchTerm::parse(poster),
            mode,
            cutoff,
        }
    }

    /// The normalized search term
    pub fn term(&self) -> &SearchTerm {
        &self.term
    }

    /// The match policy
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// The date gate
    pub fn cutoff(&self) -> DateCutoff {
        self.cutoff
    }

    /// Whether a raw `From` field satisfies the poster half of the filter
    pub fn matches_poster(&self, from: &str) -> bool {
        let candidate = SearchTerm::parse(from);
        match self.mode {
            MatchMode::Exact => self.term.matches_exact(&candidate),
            MatchMode::Substring => self.term.matches_substring(&candidate),
        }
    }

    /// Whether a record passes both the poster and the date gate
    pub fn matches(&self, record: &OverviewRecord) -> bool {
        if !self.matches_poster(&record.from) {
            return false;
        }
        match parse_overview_date(&record.date) {
            Some(date) => self.cutoff.admits(&date),
            None => false,
        }
    }
}
