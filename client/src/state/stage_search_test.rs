use super::*;

fn levels() -> Vec<Level> {
    vec![
        Level {
            level_id: "obt/main/level_main_01-07".to_owned(),
            name: "暴君".to_owned(),
            cat_one: "主题曲".to_owned(),
            cat_two: "黑暗时代·上".to_owned(),
            cat_three: "1-7".to_owned(),
            ..Level::default()
        },
        Level {
            level_id: "obt/main/level_main_00-01".to_owned(),
            name: "坍塌".to_owned(),
            cat_one: "主题曲".to_owned(),
            cat_two: "序章".to_owned(),
            cat_three: "0-1".to_owned(),
            ..Level::default()
        },
    ]
}

#[test]
fn first_fetch_shows_skeleton() {
    let mut state = StageSearchState::default();
    assert!(!state.loading());
    state.begin_fetch();
    assert!(state.loading());
    state.finish_fetch(levels());
    assert!(!state.loading());
    assert!(!state.validating);
}

#[test]
fn refetch_with_data_present_is_not_loading() {
    let mut state = StageSearchState::default();
    state.finish_fetch(levels());
    state.begin_fetch();
    assert!(state.validating);
    assert!(!state.loading());
}

#[test]
fn failed_fetch_keeps_existing_levels() {
    let mut state = StageSearchState::default();
    state.finish_fetch(levels());
    state.begin_fetch();
    state.fail_fetch("503");
    assert_eq!(state.error.as_deref(), Some("503"));
    assert_eq!(state.index.levels().len(), 2);
    state.finish_fetch(levels());
    assert!(state.error.is_none());
}

#[test]
fn suggestions_follow_query_and_sort_by_id() {
    let mut state = StageSearchState::default();
    state.finish_fetch(levels());
    let ids: Vec<String> = state.suggestions().into_iter().map(|l| l.level_id).collect();
    assert_eq!(ids, vec!["obt/main/level_main_00-01", "obt/main/level_main_01-07"]);

    state.query = "暴君".to_owned();
    let ids: Vec<String> = state.suggestions().into_iter().map(|l| l.level_id).collect();
    assert_eq!(ids, vec!["obt/main/level_main_01-07"]);
}

#[test]
fn label_for_falls_back_to_raw_id() {
    let mut state = StageSearchState::default();
    state.finish_fetch(levels());
    assert_eq!(state.label_for("obt/main/level_main_00-01"), "0-1 坍塌");
    assert_eq!(state.label_for("custom/stage"), "custom/stage");
}
