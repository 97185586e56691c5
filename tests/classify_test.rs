//! Field extraction and access-history classification rules.

use bola_scan::{
    extract_caller_identity, extract_resource_identifier, AccessHistory, Classification, LogRecord,
};

#[test]
fn identity_from_bearer_header() {
    assert_eq!(extract_caller_identity("Authorization: Bearer abc-123"), "abc-123");
    assert_eq!(extract_caller_identity("X-Foo: bar"), "");
    assert_eq!(extract_caller_identity("Authorization:Bearer tok_9"), "tok_9");
    assert_eq!(
        extract_caller_identity("Accept: */*\r\nAuthorization: Bearer   u-1.sig\r\n"),
        "u-1"
    );
}

#[test]
fn identity_marker_is_case_sensitive() {
    assert_eq!(extract_caller_identity("authorization: bearer abc"), "");
    assert_eq!(extract_caller_identity("Authorization: Basic abc"), "");
}

#[test]
fn identity_uses_first_marker_only() {
    let headers = "Authorization: Bearer first\nAuthorization: Bearer second";
    assert_eq!(extract_caller_identity(headers), "first");
    assert_eq!(extract_caller_identity("Authorization: Bearer ;Authorization: Bearer x"), "");
}

#[test]
fn resource_from_user_id() {
    assert_eq!(extract_resource_identifier("/api/resource?user_id=42"), "42");
    assert_eq!(extract_resource_identifier("/api/resource"), "");
    assert_eq!(extract_resource_identifier("/api?x=1&user_id=007&y=2"), "007");
    assert_eq!(extract_resource_identifier("/api?user_id=abc"), "");
    assert_eq!(extract_resource_identifier("/api?USER_ID=5"), "");
}

#[test]
fn first_resource_is_never_flagged() {
    let mut h = AccessHistory::new();
    assert_eq!(h.observe("a", "1"), Classification::FirstAccess);
    assert_eq!(h.observe("b", "1"), Classification::FirstAccess);
    assert!(!h.classify("c", "99"));
}

#[test]
fn every_later_distinct_resource_is_flagged() {
    let mut h = AccessHistory::new();
    assert!(!h.classify("a", "1"));
    for n in 2..20 {
        assert!(h.classify("a", &n.to_string()));
    }
    assert_eq!(h.resources_for("a").map(|s| s.len()), Some(19));
}

#[test]
fn repeats_are_never_flagged() {
    let mut h = AccessHistory::new();
    h.observe("a", "1");
    h.observe("a", "2");
    assert_eq!(h.observe("a", "1"), Classification::Repeat);
    assert_eq!(h.observe("a", "2"), Classification::Repeat);
    assert_eq!(h.pair_count(), 2);
}

#[test]
fn empty_fields_leave_history_untouched() {
    let mut h = AccessHistory::new();
    assert_eq!(h.observe("", "1"), Classification::Unclassifiable);
    assert_eq!(h.observe("a", ""), Classification::Unclassifiable);
    assert!(h.is_empty());
    assert!(h.resources_for("a").is_none());
}

#[test]
fn callers_are_tracked_independently() {
    let mut h = AccessHistory::new();
    assert!(!h.classify("a", "1"));
    assert!(!h.classify("b", "2"));
    assert!(h.classify("a", "2"));
    assert!(h.classify("b", "1"));
    assert_eq!(h.caller_count(), 2);
}

#[test]
fn record_defaults_missing_fields() {
    let r = LogRecord::parse(r#"{"req":{"url":"/x?user_id=3"}}"#, 1).unwrap();
    assert_eq!(r.request_target(), "/x?user_id=3");
    assert_eq!(r.header_block(), "");
    assert_eq!(r.rsp.rsp_body_len, 0);
    assert!(LogRecord::parse("[1,2]", 7).is_err());
}

#[test]
fn only_the_set_transition_matters() {
    let orders: [&[&str]; 4] = [&["2", "1", "3"], &["1", "2"], &["3", "1", "2", "1", "3"], &["5"]];
    for ids in orders {
        let mut h = AccessHistory::new();
        let flagged: Vec<&str> = ids.iter().copied().filter(|id| h.classify("c", id)).collect();
        let mut distinct: Vec<&str> = ids.to_vec();
        distinct.sort();
        distinct.dedup();

        assert_eq!(flagged.len(), distinct.len() - 1, "order {:?}", ids);
        assert!(!flagged.contains(&ids[0]), "order {:?}", ids);
    }

    let mut h = AccessHistory::new();
    let flagged: Vec<&str> = ["2", "1", "3"].into_iter().filter(|id| h.classify("c", id)).collect();
    assert_eq!(flagged, vec!["1", "3"]);
}

#[test]
fn record_nulls_become_defaults() {
    let r = LogRecord::parse(r#"{"req":{"url":null,"headers":"Authorization: Bearer a"},"rsp":null}"#, 1).unwrap();
    assert_eq!(r.request_target(), "");
    assert_eq!(r.header_block(), "Authorization: Bearer a");
    assert_eq!(r.rsp.status_class, "");
}
