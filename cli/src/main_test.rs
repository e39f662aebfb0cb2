use super::*;

const LEVELS: &str = r#"{
    "data": [
        {"levelId": "obt/main/level_main_01-07", "stageId": "main_01-07", "name": "暴君", "catOne": "主题曲", "catTwo": "黑暗时代·上", "catThree": "1-7", "width": 9, "height": 6},
        {"levelId": "obt/main/level_main_00-01", "stageId": "main_00-01", "name": "坍塌", "catOne": "主题曲", "catTwo": "序章", "catThree": "0-1", "width": 9, "height": 6}
    ]
}"#;

// =============================================================
// Documents
// =============================================================

#[test]
fn import_assigns_ids_and_normalizes_types() {
    let value = import_document(r#"{"stage_name": "s", "actions": [{"type": "部署", "direction": "左"}]}"#).unwrap();
    assert_eq!(value["stageName"], "s");
    assert_eq!(value["actions"][0]["type"], "Deploy");
    assert_eq!(value["actions"][0]["direction"], "Left");
    assert!(value["actions"][0]["_id"].is_string());
}

#[test]
fn export_strips_ids_and_backfills_details() {
    let value = export_document(r#"{"stage_name": "s", "doc": {"title": "T"}, "actions": [{"type": "Skill"}]}"#).unwrap();
    assert_eq!(value["stage_name"], "s");
    assert_eq!(value["minimum_required"], "v4.0.0");
    assert_eq!(value["doc"]["details"], "T");
    assert!(value["actions"][0].get("_id").is_none());
}

#[test]
fn patch_leaves_existing_details_alone() {
    let value = patch_document(r#"{"doc": {"title": "T", "details": "D"}}"#).unwrap();
    assert_eq!(value["doc"]["details"], "D");
}

#[test]
fn import_rejects_non_object_root() {
    let err = import_document("[1, 2]").unwrap_err();
    assert!(matches!(err, CliError::Document(DocumentError::NotAnObject("array"))));
}

#[test]
fn check_accepts_complete_document() {
    assert!(check_document(r#"{"stage_name": "s", "actions": []}"#).is_ok());
}

#[test]
fn check_reports_every_problem() {
    let Err(CliError::Invalid(problems)) = check_document(r#"{"stage_name": "  "}"#) else {
        panic!("expected validation failure");
    };
    assert_eq!(problems, vec!["missing stage_name", "missing actions list"]);
}

#[test]
fn check_reports_schema_violations() {
    let Err(CliError::Invalid(problems)) = check_document(r#"{"stage_name": "s", "actions": [{"kill": "many"}]}"#)
    else {
        panic!("expected validation failure");
    };
    assert_eq!(problems.len(), 1);
    assert!(problems[0].starts_with("invalid operation document"));
}

// =============================================================
// Stages
// =============================================================

#[test]
fn empty_query_lists_all_levels_sorted() {
    let value = search_levels(LEVELS, "", copilot::stage::DEFAULT_THRESHOLD).unwrap();
    let ids: Vec<&str> = value.as_array().unwrap().iter().map(|l| l["level_id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["obt/main/level_main_00-01", "obt/main/level_main_01-07"]);
}

#[test]
fn query_filters_levels() {
    let value = search_levels(LEVELS, "暴君", copilot::stage::DEFAULT_THRESHOLD).unwrap();
    let hits = value.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["label"], "1-7 暴君");
}

#[test]
fn bare_level_array_is_accepted() {
    let levels = parse_levels(r#"[{"levelId": "a", "name": "x"}]"#).unwrap();
    assert_eq!(levels.len(), 1);
    assert!(matches!(parse_levels(r#"{"levels": []}"#), Err(CliError::InvalidLevels)));
    assert!(matches!(parse_levels("42"), Err(CliError::InvalidLevels)));
}

// =============================================================
// Roster
// =============================================================

#[test]
fn roster_filters_by_profession() {
    let value = roster_listing(Some("caster")).unwrap();
    let names: Vec<&str> = value.as_array().unwrap().iter().map(|e| e["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"艾雅法拉"));
    assert!(!names.contains(&"预备干员-近战"));
    assert!(value.as_array().unwrap().iter().all(|e| e["profession"] == "caster"));
}

#[test]
fn roster_without_filter_lists_everything() {
    let value = roster_listing(None).unwrap();
    assert_eq!(value.as_array().unwrap().len(), OPERATORS.len());
}

#[test]
fn unknown_profession_is_an_error() {
    assert!(matches!(roster_listing(Some("bard")), Err(CliError::UnknownProfession(id)) if id == "bard"));
}

#[test]
fn cli_parses_global_compact_flag() {
    let cli = Cli::try_parse_from(["copilot-cli", "export", "op.json", "--compact"]).unwrap();
    assert!(cli.compact);
    assert!(matches!(cli.command, Command::Export(InputArgs { ref input }) if input == "op.json"));
}
