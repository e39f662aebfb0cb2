use super::*;

use serde_json::json;

// =============================================================
// snake_case
// =============================================================

#[test]
fn to_snake_case_splits_camel_case() {
    assert_eq!(to_snake_case("stageName"), "stage_name");
    assert_eq!(to_snake_case("minimumRequired"), "minimum_required");
    assert_eq!(to_snake_case("skillUsage"), "skill_usage");
}

#[test]
fn to_snake_case_keeps_snake_case_stable() {
    assert_eq!(to_snake_case("pre_delay"), "pre_delay");
    assert_eq!(to_snake_case("name"), "name");
    assert_eq!(to_snake_case(&to_snake_case("detailsColor")), "details_color");
}

#[test]
fn to_snake_case_handles_acronyms_and_digits() {
    assert_eq!(to_snake_case("HTTPServer"), "http_server");
    assert_eq!(to_snake_case("v4Value"), "v4_value");
    assert_eq!(to_snake_case("ID"), "id");
}

#[test]
fn to_snake_case_normalizes_separators() {
    assert_eq!(to_snake_case("title-color"), "title_color");
    assert_eq!(to_snake_case("_id"), "id");
    assert_eq!(to_snake_case("a__b_"), "a_b");
    assert_eq!(to_snake_case("干员 名"), "干员_名");
}

#[test]
fn snake_case_keys_recurses_into_objects_and_arrays() {
    let input = json!({
        "stageName": "x",
        "doc": { "titleColor": "dark" },
        "actions": [{ "preDelay": 1, "location": [1, 2] }]
    });
    let expected = json!({
        "stage_name": "x",
        "doc": { "title_color": "dark" },
        "actions": [{ "pre_delay": 1, "location": [1, 2] }]
    });
    assert_eq!(snake_case_keys(input), expected);
}

#[test]
fn snake_case_keys_leaves_string_values_alone() {
    let input = json!({ "type": "SpeedUp", "direction": "Left" });
    assert_eq!(snake_case_keys(input.clone()), input);
}

// =============================================================
// camelCase
// =============================================================

#[test]
fn to_camel_case_joins_segments() {
    assert_eq!(to_camel_case("stage_name"), "stageName");
    assert_eq!(to_camel_case("doc_color"), "docColor");
    assert_eq!(to_camel_case("name"), "name");
    assert_eq!(to_camel_case("rear_delay"), "rearDelay");
}

#[test]
fn camel_case_keys_renames_only_reversible_keys() {
    let input = json!({
        "stage_name": "x",
        "_id": "1",
        "level_01": true,
        "minimumRequired": "v4.0.0",
        "actions": [{ "pre_delay": 1, "rear_delay": 2 }]
    });
    let expected = json!({
        "stageName": "x",
        "_id": "1",
        "level_01": true,
        "minimumRequired": "v4.0.0",
        "actions": [{ "preDelay": 1, "rearDelay": 2 }]
    });
    assert_eq!(camel_case_keys(input), expected);
}

#[test]
fn camel_case_keys_prefers_snake_spelling_on_duplicates() {
    let input = json!({ "stageName": "camel", "stage_name": "snake" });
    assert_eq!(camel_case_keys(input), json!({ "stageName": "snake" }));

    let input = json!({ "stage_name": "snake", "stageName": "camel" });
    assert_eq!(camel_case_keys(input), json!({ "stageName": "snake" }));
}

#[test]
fn camel_then_snake_restores_wire_keys() {
    let wire = json!({
        "stage_name": "x",
        "doc": { "title_color": "dark" },
        "actions": [{ "post_delay": 1, "rear_delay": 2, "custom_field": [1, 2] }]
    });
    assert_eq!(snake_case_keys(camel_case_keys(wire.clone())), wire);
}
