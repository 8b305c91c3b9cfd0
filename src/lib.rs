#![doc = include_str!("../README.md")]

/// Retrieved article text
pub mod article;
mod client;
/// NNTP command builders and response parsers
pub mod commands;
mod config;
mod error;
/// Poster and recency filtering of overview records
pub mod filter;
mod response;
/// Search orchestration over listing and fetch sessions
pub mod search;

pub use article::ArticleContent;
pub use client::{DOT_TERMINATOR, GroupScan, NntpClient, NntpIo, is_terminator};
pub use commands::{GroupRange, OverviewRecord};
pub use config::{GroupSelection, SearchConfig, ServerConfig};
pub use error::{NntpError, Result};
pub use filter::{DateCutoff, MatchMode, PosterFilter, SearchTerm, parse_overview_date};
pub use response::{NntpResponse, codes, has_status, prefixes};
pub use search::{SearchReport, run};
