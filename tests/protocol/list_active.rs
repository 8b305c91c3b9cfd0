//! LIST ACTIVE parsing (RFC 3977 Section 7.6.3)

use nntp_search::commands::{list_active, parse_active_group_names};

#[test]
fn test_list_active_line_yields_group_name() {
    let groups = parse_active_group_names(&["alt.test 000104 000100 y\r\n"]);
    assert_eq!(groups, vec!["alt.test"]);
}

#[test]
fn test_list_active_command_with_and_without_pattern() {
    assert_eq!(list_active(""), "LIST ACTIVE");
    assert_eq!(list_active("comp.lang.*"), "LIST ACTIVE comp.lang.*");
}

#[test]
fn test_list_active_alias_and_junk_status() {
    let groups = parse_active_group_names(&[
        "comp.lang.c++ 100 1 =comp.lang.cplusplus\r\n",
        "alt.binaries.spam 0 0 j\r\n",
    ]);
    assert_eq!(groups, vec!["comp.lang.c++", "alt.binaries.spam"]);
}

#[test]
fn test_list_active_name_only_line() {
    // Servers that send fewer fields still yield the name
    assert_eq!(parse_active_group_names(&["alt.bare\r\n"]), vec!["alt.bare"]);
}
