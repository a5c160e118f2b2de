use pretty_assertions::assert_eq;
use rulefield_editor::{
    EditorConfig, EditorEvent, MemoryHost, Record, RecordField, RecordId, RecordList,
    RuleListEditor,
};
use serde_json::{Value, json};

fn host_with(value: Value) -> MemoryHost {
    MemoryHost::new().with_value(value)
}

/// Delivers every queued host notification to the editor.
fn pump(editor: &mut RuleListEditor, host: &mut MemoryHost) {
    for value in host.take_notifications() {
        editor.dispatch(host, EditorEvent::ValueChanged(value));
    }
}

fn two_rows() -> Value {
    json!([
        {"id": "a", "key": "includes", "value": "x"},
        {"id": "b", "key": "excludes", "value": "y"},
    ])
}

// ── Mount ────────────────────────────────────────────────────────

#[test]
fn mount_registers_listener_and_requests_resize_once() {
    let mut host = MemoryHost::new();
    let _editor = RuleListEditor::mount(&mut host);
    assert!(host.is_watching());
    assert_eq!(host.resize_requests(), 1);
}

#[test]
fn mount_without_value_starts_empty() {
    let mut host = MemoryHost::new();
    let editor = RuleListEditor::mount(&mut host);
    assert!(editor.items().is_empty());
    assert!(host.submissions().is_empty());
}

#[test]
fn mount_adopts_current_array_value() {
    let mut host = host_with(json!([{"id": "a", "key": "includes", "value": "x"}]));
    let editor = RuleListEditor::mount(&mut host);
    assert_eq!(
        editor.items(),
        &RecordList::from(vec![Record {
            id: RecordId::new("a"),
            key: "includes".into(),
            operator: String::new(),
            value: "x".into(),
        }])
    );
}

#[test]
fn mount_adopts_records_with_null_text_fields() {
    let mut host = host_with(json!([
        {"id": "a", "key": "includes", "operator": null, "value": "x"},
        {"id": "b", "key": "excludes", "value": "y"}
    ]));
    let editor = RuleListEditor::mount(&mut host);
    assert_eq!(editor.items().len(), 2);
    assert_eq!(editor.items().get(&RecordId::new("a")).unwrap().operator, "");
}

#[test]
fn mount_ignores_non_array_value() {
    let mut host = host_with(json!({"not": "a list"}));
    let editor = RuleListEditor::mount(&mut host);
    assert!(editor.items().is_empty());
}

#[test]
fn mount_reads_instance_parameters() {
    let params = json!({"operatorOptions": "AND,OR", "valueOnly": true});
    let mut host = MemoryHost::new().with_parameters(params.as_object().cloned().unwrap());
    let editor = RuleListEditor::mount(&mut host);
    assert_eq!(editor.config().operator_options, vec!["AND", "OR"]);
    assert!(editor.config().value_only);
}

// ── Host synchronization ─────────────────────────────────────────

#[test]
fn host_value_replaces_state_wholesale() {
    let mut host = host_with(two_rows());
    let mut editor = RuleListEditor::mount(&mut host);

    assert!(editor.on_value_changed(&json!([{"id": "z", "key": "", "value": "only"}])));
    assert_eq!(editor.items().len(), 1);
    assert_eq!(editor.items().records()[0].id.as_str(), "z");
}

#[test]
fn equal_host_value_still_replaces() {
    let mut host = host_with(two_rows());
    let mut editor = RuleListEditor::mount(&mut host);
    assert!(editor.on_value_changed(&two_rows()));
    assert_eq!(editor.items().len(), 2);
}

#[test]
fn non_array_host_value_keeps_last_known_good() {
    let mut host = host_with(two_rows());
    let mut editor = RuleListEditor::mount(&mut host);

    for value in [json!(null), json!("text"), json!(12), json!({"id": "a"})] {
        assert!(!editor.on_value_changed(&value));
        assert_eq!(editor.items().len(), 2);
    }
}

#[test]
fn malformed_array_keeps_last_known_good() {
    let mut host = host_with(two_rows());
    let mut editor = RuleListEditor::mount(&mut host);

    assert!(!editor.on_value_changed(&json!([{"key": "no id"}])));
    assert_eq!(editor.items().len(), 2);
}

#[test]
fn empty_array_clears_state() {
    let mut host = host_with(two_rows());
    let mut editor = RuleListEditor::mount(&mut host);
    assert!(editor.on_value_changed(&json!([])));
    assert!(editor.items().is_empty());
}

#[test]
fn latest_notification_wins() {
    let mut host = host_with(json!([]));
    let mut editor = RuleListEditor::mount(&mut host);

    host.replace_value(json!([{"id": "first", "key": "", "value": ""}]));
    host.replace_value(json!([{"id": "second", "key": "", "value": ""}]));
    pump(&mut editor, &mut host);

    assert_eq!(editor.items().records()[0].id.as_str(), "second");
}

// ── Append ───────────────────────────────────────────────────────

#[test]
fn append_scenario_round_trips_through_host() {
    let mut host = host_with(json!([{"id": "a", "key": "includes", "value": "x"}]));
    let mut editor = RuleListEditor::mount(&mut host);
    assert_eq!(editor.view().rows.len(), 1);

    let new_id = editor.append(&mut host);

    let submitted = host.submissions().last().cloned().unwrap();
    let arr = submitted.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0], json!({"id": "a", "key": "includes", "value": "x"}));
    assert_eq!(arr[1], json!({"id": new_id.as_str(), "key": "", "value": ""}));
    assert_ne!(new_id.as_str(), "a");

    pump(&mut editor, &mut host);
    assert_eq!(editor.items().len(), 2);
    assert_eq!(editor.items().records()[1].id, new_id);
}

#[test]
fn append_does_not_touch_local_state_before_echo() {
    let mut host = MemoryHost::new();
    let editor = RuleListEditor::mount(&mut host);
    editor.append(&mut host);
    editor.append(&mut host);
    assert!(editor.items().is_empty());
    // Both submissions were computed from the same snapshot.
    assert_eq!(host.submissions()[0].as_array().unwrap().len(), 1);
    assert_eq!(host.submissions()[1].as_array().unwrap().len(), 1);
}

// ── Edit ─────────────────────────────────────────────────────────

#[test]
fn edit_submits_list_with_one_field_changed() {
    let mut host = host_with(two_rows());
    let mut editor = RuleListEditor::mount(&mut host);

    assert!(editor.edit(&mut host, &RecordId::new("b"), RecordField::Value, "new"));
    assert_eq!(
        host.submissions().last().unwrap(),
        &json!([
            {"id": "a", "key": "includes", "value": "x"},
            {"id": "b", "key": "excludes", "value": "new"},
        ])
    );

    pump(&mut editor, &mut host);
    assert_eq!(editor.items().records()[1].value, "new");
}

#[test]
fn edit_operator_adds_operator_property() {
    let mut host = host_with(two_rows());
    let editor = RuleListEditor::mount(&mut host);

    editor.edit(&mut host, &RecordId::new("a"), RecordField::Operator, "AND");
    assert_eq!(
        host.submissions().last().unwrap()[0],
        json!({"id": "a", "key": "includes", "operator": "AND", "value": "x"})
    );
}

#[test]
fn edit_unknown_id_submits_nothing() {
    let mut host = host_with(two_rows());
    let editor = RuleListEditor::mount(&mut host);

    assert!(!editor.edit(&mut host, &RecordId::new("gone"), RecordField::Key, "k"));
    assert!(host.submissions().is_empty());
}

#[test]
fn stale_edit_after_concurrent_delete_is_noop() {
    let mut host = host_with(two_rows());
    let mut editor = RuleListEditor::mount(&mut host);

    // Another client removes "b" and the editor sees it first.
    host.replace_value(json!([{"id": "a", "key": "includes", "value": "x"}]));
    pump(&mut editor, &mut host);

    editor.dispatch(
        &mut host,
        EditorEvent::Edit {
            id: RecordId::new("b"),
            field: RecordField::Value,
            text: "late".into(),
        },
    );
    assert!(host.submissions().is_empty());
    assert_eq!(editor.items().len(), 1);
}

// ── Delete ───────────────────────────────────────────────────────

#[test]
fn delete_submits_list_without_record() {
    let mut host = host_with(two_rows());
    let mut editor = RuleListEditor::mount(&mut host);

    assert!(editor.delete(&mut host, &RecordId::new("a")));
    assert_eq!(
        host.submissions().last().unwrap(),
        &json!([{"id": "b", "key": "excludes", "value": "y"}])
    );

    pump(&mut editor, &mut host);
    assert_eq!(editor.items().len(), 1);
}

#[test]
fn delete_unknown_id_submits_nothing() {
    let mut host = host_with(two_rows());
    let editor = RuleListEditor::mount(&mut host);
    assert!(!editor.delete(&mut host, &RecordId::new("nope")));
    assert!(host.submissions().is_empty());
}

// ── Event dispatch ───────────────────────────────────────────────

#[test]
fn dispatch_sequence_builds_list() {
    let mut host = MemoryHost::new();
    let mut editor = RuleListEditor::mount(&mut host);

    editor.dispatch(&mut host, EditorEvent::Append);
    pump(&mut editor, &mut host);
    let id = editor.items().records()[0].id.clone();

    editor.dispatch(
        &mut host,
        EditorEvent::Edit {
            id: id.clone(),
            field: RecordField::Key,
            text: "includes".into(),
        },
    );
    pump(&mut editor, &mut host);

    editor.dispatch(&mut host, EditorEvent::Append);
    pump(&mut editor, &mut host);
    assert_eq!(editor.items().len(), 2);
    assert_eq!(editor.items().records()[0].key, "includes");

    editor.dispatch(&mut host, EditorEvent::Delete { id });
    pump(&mut editor, &mut host);
    assert_eq!(editor.items().len(), 1);
    assert!(editor.items().records()[0].is_blank());
}

#[test]
fn unmounted_editor_has_empty_list() {
    let editor = RuleListEditor::with_config(EditorConfig::default());
    assert!(editor.items().is_empty());
    assert_eq!(editor.config(), &EditorConfig::default());
}
