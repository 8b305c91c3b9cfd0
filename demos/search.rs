//! Search a news server for articles by one poster
//!
//! Run with: cargo run --example search
//!
//! Settings come from the environment:
//! - NNTP_HOST (default: news.i2pn2.org), NNTP_PORT (default: 119, or 563 with TLS)
//! - NNTP_TLS=1 to encrypt, NNTP_USER / NNTP_PASS for credentials
//! - NNTP_GROUP group name or wildmat (default: all groups)
//! - NNTP_POSTER (required), NNTP_DAYS (default: 0), NNTP_EXACT=1 for exact matching

use nntp_search::{MatchMode, SearchConfig, ServerConfig};
use tracing_subscriber::EnvFilter;

fn env_flag(name: &str) -> bool {
    matches!(
        std::env::var(name).as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let poster = std::env::var("NNTP_POSTER").unwrap_or_default();
    if poster.trim().is_empty() {
        eprintln!("NNTP_POSTER must name the poster to search for");
        std::process::exit(2);
    }

    let tls = env_flag("NNTP_TLS");
    let server = ServerConfig::new(
        std::env::var("NNTP_HOST").unwrap_or_else(|_| "news.i2pn2.org".to_string()),
        std::env::var("NNTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(if tls { 563 } else { 119 }),
        tls,
        std::env::var("NNTP_USER").unwrap_or_default(),
        std::env::var("NNTP_PASS").unwrap_or_default(),
    );

    let config = SearchConfig::new(server, poster.clone())
        .with_group(std::env::var("NNTP_GROUP").unwrap_or_default())
        .with_days(
            std::env::var("NNTP_DAYS")
                .ok()
                .and_then(|d| d.parse().ok())
                .unwrap_or(0),
        )
        .with_match_mode(if env_flag("NNTP_EXACT") {
            MatchMode::Exact
        } else {
            MatchMode::Substring
        });

    let report = nntp_search::run(&config).await?;

    println!("Found {} articles by {}:", report.count(), poster);
    for article in &report.articles {
        print!("{}", article);
        println!(".");
    }

    Ok(())
}
