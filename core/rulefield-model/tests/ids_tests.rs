use rulefield_model::RecordId;
use std::collections::HashSet;

// ── RecordId ──────────────────────────────────────────────────────

#[test]
fn generated_ids_are_unique() {
    let ids: HashSet<RecordId> = (0..1000).map(|_| RecordId::generate()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn generated_id_is_uuid_v4() {
    let id = RecordId::generate();
    let uuid = id.as_uuid().expect("generated id should parse as a UUID");
    assert_eq!(uuid.get_version_num(), 4);
}

#[test]
fn generated_id_is_hyphenated_lowercase() {
    let id = RecordId::generate();
    let s = id.as_str();
    assert_eq!(s.len(), 36);
    assert_eq!(s.matches('-').count(), 4);
    assert_eq!(s, s.to_lowercase());
}

#[test]
fn default_generates_fresh_id() {
    assert_ne!(RecordId::default(), RecordId::default());
}

#[test]
fn host_ids_are_kept_verbatim() {
    let id = RecordId::new("a");
    assert_eq!(id.as_str(), "a");
    assert_eq!(id.to_string(), "a");
    assert!(id.as_uuid().is_none());
}

#[test]
fn from_str_and_string_agree() {
    assert_eq!(RecordId::from("row-1"), RecordId::from("row-1".to_string()));
}

#[test]
fn serializes_as_plain_string() {
    let id = RecordId::new("abc");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    let parsed: RecordId = serde_json::from_str("\"abc\"").unwrap();
    assert_eq!(parsed, id);
}
