//! GROUP reply parsing (RFC 3977 Section 6.1.1)

use nntp_search::commands::{group, parse_group_range, xover};
use nntp_search::{NntpError, has_status, prefixes};

#[test]
fn test_group_reply_drives_xover_range() {
    let reply = "211 5 100 104 alt.test\r\n";
    assert!(has_status(reply, prefixes::GROUP_SELECTED));

    let range = parse_group_range("alt.test", reply).unwrap();
    assert_eq!(xover(range.first, range.last), "XOVER 100-104");
}

#[test]
fn test_group_command() {
    assert_eq!(group("comp.lang.rust"), "GROUP comp.lang.rust");
}

#[test]
fn test_non_211_is_not_selected() {
    for reply in ["411 no such group\r\n", "480 auth required\r\n", "211\r\n", ""] {
        assert!(
            !has_status(reply, prefixes::GROUP_SELECTED),
            "{:?} should not count as selected",
            reply
        );
    }
}

#[test]
fn test_group_reply_extra_fields_ignored() {
    let range = parse_group_range("alt.test", "211 5 100 104 alt.test extra words\r\n").unwrap();
    assert_eq!((range.count, range.first, range.last), (5, 100, 104));
}

#[test]
fn test_group_reply_missing_fields() {
    assert!(matches!(
        parse_group_range("alt.test", "211 5 100\r\n"),
        Err(NntpError::InvalidGroupResponse { .. })
    ));
}

#[test]
fn test_negative_numbers_default_to_zero() {
    let range = parse_group_range("alt.test", "211 5 -1 104 alt.test\r\n").unwrap();
    assert_eq!(range.first, 0);
    assert_eq!(range.last, 104);
}
