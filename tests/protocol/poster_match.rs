//! Poster normalization, match policies, and the date gate

use chrono::{TimeZone, Utc};
use nntp_search::commands::parse_overview_line;
use nntp_search::{DateCutoff, MatchMode, PosterFilter, SearchTerm, parse_overview_date};

const JOHN_LINE: &str =
    "105\tHello\tJohn Doe <j@x.com>\tMon, 1 Jan 2024 10:00:00 +0000\t...\t...\t...\t...\r\n";

#[test]
fn test_exact_filter_selects_matching_record() {
    let record = parse_overview_line(JOHN_LINE).unwrap();
    let filter = PosterFilter::new("john doe <j@x.com>", MatchMode::Exact, 0);
    assert!(filter.matches(&record));
}

#[test]
fn test_name_substring_mismatch() {
    let record = parse_overview_line(JOHN_LINE).unwrap();
    let filter = PosterFilter::new("jane", MatchMode::Substring, 0);
    assert!(!filter.matches(&record));

    let filter = PosterFilter::new("jane", MatchMode::Exact, 0);
    assert!(!filter.matches(&record));
}

#[test]
fn test_substring_without_email_matches_on_name() {
    let filter = PosterFilter::new("doe", MatchMode::Substring, 0);
    assert!(filter.matches_poster("John Doe <j@x.com>"));
    assert!(filter.matches_poster("Jane Doe"));
    assert!(!filter.matches_poster("John Smith <doe@x.com>"));
}

#[test]
fn test_exact_is_case_and_whitespace_insensitive_only() {
    let filter = PosterFilter::new("  John Doe <J@X.com>  ", MatchMode::Exact, 0);
    assert_eq!(
        filter.term(),
        &SearchTerm {
            name: "john doe".to_string(),
            email: "j@x.com".to_string(),
        }
    );
    assert!(filter.matches_poster("john doe <j@x.com>"));
    assert!(!filter.matches_poster("john doe <j@x.co>"));
    assert!(!filter.matches_poster("john <j@x.com>"));
}

#[test]
fn test_normalization_idempotent() {
    let once = SearchTerm::parse("Some Body <SB@Example.ORG>");
    assert_eq!(SearchTerm::parse(&once.to_string()), once);
}

#[test]
fn test_zero_days_includes_any_parsable_date() {
    let filter = PosterFilter::new("john", MatchMode::Substring, 0);
    let old = parse_overview_line("1\tS\tJohn\tMon, 3 Jan 1994 00:00:00 -0500\r\n").unwrap();
    assert!(filter.matches(&old));
}

#[test]
fn test_cutoff_boundary() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
    let cutoff = DateCutoff::days_before(now, 2);
    let filter = PosterFilter::with_cutoff("john", MatchMode::Substring, cutoff);

    let at_cutoff = parse_overview_line("1\tS\tJohn\tFri, 8 Mar 2024 08:00:00 +0000\r\n").unwrap();
    let day_after = parse_overview_line("2\tS\tJohn\tSat, 9 Mar 2024 08:00:00 +0000\r\n").unwrap();
    assert!(!filter.matches(&at_cutoff));
    assert!(filter.matches(&day_after));
}

#[test]
fn test_zone_comment_is_stripped() {
    assert!(parse_overview_date("Wed, 3 Jul 2024 09:15:00 +0200 (CEST)").is_some());
}
