//! XOVER record parsing (RFC 2980 Section 2.8, RFC 3977 Section 8.3)

use nntp_search::commands::parse_overview_line;

#[test]
fn test_xover_standard_fields() {
    let line = "105\tHello\tJohn Doe <j@x.com>\tMon, 1 Jan 2024 10:00:00 +0000\t<m@x>\t<r@x>\t1234\t50\r\n";
    let record = parse_overview_line(line).unwrap();

    assert_eq!(record.article_number, "105");
    assert_eq!(record.subject, "Hello");
    assert_eq!(record.from, "John Doe <j@x.com>");
    assert_eq!(record.date, "Mon, 1 Jan 2024 10:00:00 +0000");
}

#[test]
fn test_xover_with_xref_and_extra_fields() {
    let line = "7\tS\tF\tD\t<m>\t\t10\t1\tXref: host alt.test:7\textra\r\n";
    let record = parse_overview_line(line).unwrap();
    assert_eq!(record.article_number, "7");
    assert_eq!(record.date, "D");
}

#[test]
fn test_xover_empty_subject() {
    let record = parse_overview_line("7\t\tF\tD\r\n").unwrap();
    assert_eq!(record.subject, "");
}

#[test]
fn test_xover_article_number_is_opaque() {
    // Not parsed as a number; echoed back verbatim
    let record = parse_overview_line("000105\tS\tF\tD\r\n").unwrap();
    assert_eq!(record.article_number, "000105");
}

#[test]
fn test_xover_malformed_lines() {
    assert!(parse_overview_line("105\tHello\tJohn Doe <j@x.com>\r\n").is_none());
    assert!(parse_overview_line("105\r\n").is_none());
    assert!(parse_overview_line("").is_none());
}
