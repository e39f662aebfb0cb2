use super::*;

use serde_json::json;

fn imported() -> EditorState {
    let op = copilot::operation_from_wire(json!({
        "stage_name": "obt/main/level_main_01-07",
        "doc": { "title": "1-7" },
        "opers": [{ "name": "银灰" }, { "name": "能天使" }],
        "groups": [{ "name": "奶", "opers": [{ "name": "闪灵" }] }],
        "actions": [
            { "type": "部署", "name": "银灰", "direction": "左" },
            { "type": "Skill", "name": "银灰" },
            { "type": "Retreat", "name": "银灰" }
        ]
    }))
    .expect("document");
    let mut state = EditorState::default();
    state.load(&op);
    state
}

fn action_id(state: &EditorState, index: usize) -> TransientId {
    state.actions()[index].id.clone().expect("action id")
}

fn operator_id(state: &EditorState, name: &str) -> TransientId {
    state
        .operators()
        .iter()
        .find(|op| op.name == name)
        .and_then(|op| op.id.clone())
        .expect("operator id")
}

fn group_id(state: &EditorState, name: &str) -> TransientId {
    state
        .groups()
        .iter()
        .find(|g| g.name == name)
        .and_then(|g| g.id.clone())
        .expect("group id")
}

// =============================================================
// Defaults and loading
// =============================================================

#[test]
fn default_form_requires_v4() {
    let state = EditorState::default();
    assert_eq!(state.operation.minimum_required.as_deref(), Some("v4.0.0"));
    assert_eq!(state.operation.actions, Field::Present(Vec::new()));
    assert!(state.errors.is_empty());
}

#[test]
fn load_assigns_ids_and_normalizes_actions() {
    let state = imported();
    assert!(state.actions().iter().all(|a| a.id.is_some()));
    assert_eq!(state.actions()[0].action_type.as_deref(), Some("Deploy"));
    assert_eq!(state.actions()[0].direction.as_deref(), Some("Left"));
}

#[test]
fn load_clears_previous_errors() {
    let mut state = EditorState::default();
    state.set_global_error("boom");
    state.load(&Operation::default());
    assert!(state.errors.is_empty());
}

// =============================================================
// Validation and submission
// =============================================================

#[test]
fn submit_without_stage_records_field_error() {
    let mut state = EditorState::default();
    let err = state.submit().expect_err("stage missing");
    assert!(matches!(err, SubmitError::Invalid(1)));
    assert_eq!(state.field_error(STAGE_NAME_FIELD), Some(STAGE_NAME_REQUIRED));
    assert!(state.global_error().is_none());
}

#[test]
fn selecting_stage_clears_required_error() {
    let mut state = EditorState::default();
    assert!(!state.validate());
    state.set_stage_name(Some("obt/main/level_main_00-01".to_owned()));
    assert!(state.field_error(STAGE_NAME_FIELD).is_none());
    assert!(state.validate());
}

#[test]
fn blank_stage_name_is_treated_as_missing() {
    let mut state = EditorState::default();
    state.set_stage_name(Some("  ".to_owned()));
    assert!(state.operation.stage_name.is_absent());
    assert!(!state.validate());
}

#[test]
fn submit_exports_snake_case_without_ids() {
    let mut state = imported();
    let exported = state.submit().expect("valid form");
    assert_eq!(exported["stage_name"], json!("obt/main/level_main_01-07"));
    assert_eq!(exported["minimum_required"], json!("v4.0.0"));
    assert_eq!(exported["doc"]["details"], json!("1-7"));
    assert!(exported["actions"][0].get("_id").is_none());
    assert!(exported["opers"][0].get("_id").is_none());
}

#[test]
fn global_error_does_not_block_validation_and_is_dismissible() {
    let mut state = imported();
    state.set_global_error("server rejected the document");
    assert!(state.validate());
    assert_eq!(state.global_error(), Some("server rejected the document"));
    state.dismiss_global_error();
    assert!(state.global_error().is_none());
}

#[test]
fn submit_clears_stale_global_error() {
    let mut state = imported();
    state.set_global_error("old failure");
    state.submit().expect("valid form");
    assert!(state.global_error().is_none());
}

#[test]
fn title_and_details_create_doc_section() {
    let mut state = EditorState::default();
    state.set_title("标题".to_owned());
    state.set_details("描述".to_owned());
    let doc = state.operation.doc.into_option().expect("doc");
    assert_eq!(doc.title.as_deref(), Some("标题"));
    assert_eq!(doc.details.as_deref(), Some("描述"));
}

#[test]
fn doc_field_errors_are_reported_and_cleared_by_editing() {
    let mut state = imported();
    assert_eq!(state.title(), "1-7");
    assert_eq!(state.details(), "");

    state.set_error(DOC_TITLE_FIELD, "标题过长");
    state.set_error(DOC_DETAILS_FIELD, "描述过长");
    assert_eq!(state.field_error(DOC_TITLE_FIELD), Some("标题过长"));
    assert!(!state.validate());

    state.set_title("1-7 低配".to_owned());
    assert!(state.field_error(DOC_TITLE_FIELD).is_none());
    assert_eq!(state.field_error(DOC_DETAILS_FIELD), Some("描述过长"));
    state.set_details("银灰单核".to_owned());
    assert!(state.field_error(DOC_DETAILS_FIELD).is_none());
    assert!(state.validate());
    assert_eq!(state.details(), "银灰单核");
}

// =============================================================
// Actions
// =============================================================

#[test]
fn add_action_assigns_fresh_id() {
    let mut state = EditorState::default();
    let id = state.add_action(Action {
        action_type: Field::Present("SpeedUp".to_owned()),
        ..Action::default()
    });
    assert_eq!(state.actions()[0].id.as_ref(), Some(&id));
    assert_eq!(state.action_index(&id), Some(0));
}

#[test]
fn move_action_reorders_sequence() {
    let mut state = imported();
    let last = action_id(&state, 2);
    assert!(state.move_action(2, 0));
    assert_eq!(state.action_index(&last), Some(0));
    assert_eq!(state.actions()[1].action_type.as_deref(), Some("Deploy"));
}

#[test]
fn update_and_remove_action_by_id() {
    let mut state = imported();
    let id = action_id(&state, 1);
    assert!(state.update_action(&id, |a| a.kill = Field::Present(5)));
    assert_eq!(state.actions()[1].kill, Field::Present(5));
    assert!(state.remove_action(&id));
    assert_eq!(state.actions().len(), 2);
    assert!(!state.remove_action(&id));
    assert!(!state.update_action(&id, |a| a.kill = Field::Present(1)));
}

#[test]
fn add_action_to_document_without_action_list() {
    let mut state = EditorState::default();
    state.load(&copilot::operation_from_wire(json!({ "stage_name": "s" })).expect("document"));
    assert!(state.operation.actions.is_absent());
    assert!(state.actions().is_empty());
    assert!(!state.move_action(0, 1));

    let id = state.add_action(Action::default());
    assert_eq!(state.action_index(&id), Some(0));
    assert!(state.remove_action(&id));
    assert_eq!(state.operation.actions, Field::Present(Vec::new()));
}

// =============================================================
// Operators and groups
// =============================================================

#[test]
fn upsert_operator_inserts_then_updates_in_place() {
    let mut state = EditorState::default();
    assert!(state.upsert_operator(Operator::named("能天使")));
    let id = operator_id(&state, "能天使");

    let updated = Operator {
        skill: Field::Present(3),
        ..Operator::named("能天使")
    };
    assert!(!state.upsert_operator(updated));
    assert_eq!(state.operators().len(), 1);
    assert_eq!(state.operators()[0].skill, Field::Present(3));
    assert_eq!(state.operators()[0].id.as_ref(), Some(&id));
}

#[test]
fn remove_operators_removes_only_listed_ids() {
    let mut state = imported();
    let silver = operator_id(&state, "银灰");
    assert_eq!(state.remove_operators(&[silver.clone(), TransientId::from("missing")]), 1);
    assert_eq!(state.operators().len(), 1);
    assert!(!state.remove_operator(&silver));
}

#[test]
fn add_group_rejects_blank_and_duplicate_names() {
    let mut state = imported();
    assert!(state.add_group("  ").is_none());
    assert!(state.add_group("奶").is_none());
    assert!(state.add_group("狙击").is_some());
    assert_eq!(state.groups().len(), 2);
}

#[test]
fn operator_moves_into_and_out_of_group() {
    let mut state = imported();
    let angel = operator_id(&state, "能天使");
    let healers = group_id(&state, "奶");

    assert!(state.move_operator_to_group(&angel, &healers));
    assert!(!state.operation.has_direct_operator("能天使"));
    assert!(state.operation.has_grouped_operator("能天使"));

    assert!(state.move_operator_out_of_group(&healers, &angel));
    assert!(state.operation.has_direct_operator("能天使"));
    assert!(!state.operation.has_grouped_operator("能天使"));
}

#[test]
fn move_operator_to_unknown_group_keeps_operator() {
    let mut state = imported();
    let angel = operator_id(&state, "能天使");
    assert!(!state.move_operator_to_group(&angel, &TransientId::from("nope")));
    assert!(state.operation.has_direct_operator("能天使"));
}

#[test]
fn remove_group_drops_members() {
    let mut state = imported();
    let healers = group_id(&state, "奶");
    assert!(state.remove_group(&healers));
    assert!(!state.operation.has_grouped_operator("闪灵"));
    assert!(!state.remove_group(&healers));
}

#[test]
fn move_operator_and_group_reorder_lists() {
    let mut state = imported();
    assert!(state.move_operator(1, 0));
    assert_eq!(state.operators()[0].name, "能天使");
    state.add_group("狙击");
    assert!(state.move_group(1, 0));
    assert_eq!(state.groups()[0].name, "狙击");
}
