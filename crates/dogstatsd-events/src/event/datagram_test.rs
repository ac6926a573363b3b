use super::encode_event_datagram;
use crate::event::{AlertType, Event, Priority};

#[test]
fn full_example_matches_wire_contract() {
    let mut event = Event::new("Build failed", "line1\nline2");
    event.set_priority(Priority::Low);
    event.set_alert_type(AlertType::Error);

    assert_eq!(
        encode_event_datagram(&event),
        "_e{12,11}:Build failed|line1\\nline2|p:low|t:error"
    );
}

#[test]
fn empty_text_still_emits_separator() {
    let event = Event::new("Hello", "");
    assert_eq!(encode_event_datagram(&event), "_e{5,0}:Hello|");
}

#[test]
fn header_lengths_count_unescaped_bytes() {
    let event = Event::new("up", "a\nb\nc");
    let line = encode_event_datagram(&event);
    assert!(line.starts_with("_e{2,5}:"));
}

#[test]
fn newlines_are_escaped_without_leaving_raw_ones() {
    let event = Event::new("t", "one\ntwo\n\nthree");
    let line = encode_event_datagram(&event);

    assert!(!line.contains('\n'));
    assert_eq!(line.matches("\\n").count(), 3);
    assert_eq!(line, "_e{1,14}:t|one\\ntwo\\n\\nthree");
}

#[test]
fn unset_optional_fields_contribute_zero_bytes() {
    let event = Event::new("ping", "pong");
    let line = encode_event_datagram(&event);

    assert_eq!(line, "_e{4,4}:ping|pong");
    assert!(!line.contains("|d:"));
    assert!(!line.contains("|h:"));
    assert!(!line.contains("|k:"));
    assert!(!line.contains("|p:"));
    assert!(!line.contains("|t:"));
}

#[test]
fn optional_fields_appear_in_fixed_order() {
    let mut event = Event::new("disk full", "90% used");
    event.set_date_happened(1_693_526_400);
    event.set_host("db-3");
    event.set_aggregation_key("disk");
    event.set_priority(Priority::Normal);
    event.set_alert_type(AlertType::Warning);

    assert_eq!(
        encode_event_datagram(&event),
        "_e{9,8}:disk full|90% used|d:1693526400|h:db-3|k:disk|p:normal|t:warning"
    );
}

#[test]
fn raw_tags_are_appended_verbatim() {
    let mut event = Event::new("t", "x");
    event.set_raw_tags("|#env:prod,service:api");
    assert_eq!(
        encode_event_datagram(&event),
        "_e{1,1}:t|x|#env:prod,service:api"
    );
}

#[test]
fn structured_tag_list_is_ignored_by_the_datagram() {
    let mut event = Event::new("t", "x");
    event.set_tag_list(vec!["env:prod".to_string()]);
    assert_eq!(encode_event_datagram(&event), "_e{1,1}:t|x");
}
