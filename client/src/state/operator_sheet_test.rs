use super::*;

use copilot::Group;

fn caster() -> ProfFilter {
    ProfFilter::Profession(roster::find_profession("caster").expect("caster profession"))
}

fn names(entries: &[SheetEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

fn editor_with(direct: &[&str], grouped: &[&str]) -> EditorState {
    let mut editor = EditorState::default();
    for name in direct {
        editor.upsert_operator(Operator::named(*name));
    }
    if !grouped.is_empty() {
        let group_id = editor.add_group("组").expect("group");
        let group = editor
            .operation
            .groups
            .as_mut()
            .and_then(|groups| groups.iter_mut().find(|g| g.id.as_ref() == Some(&group_id)))
            .expect("group exists");
        group.opers = copilot::Field::Present(grouped.iter().map(|n| Operator::named(*n)).collect());
    }
    editor
}

fn editor_with_customs(count: usize) -> EditorState {
    let mut editor = EditorState::default();
    for i in 0..count {
        editor.upsert_operator(Operator::named(format!("自定义{i}")));
    }
    editor
}

// =============================================================
// Roster merge and filters
// =============================================================

#[test]
fn default_view_lists_whole_roster() {
    let sheet = OperatorSheetState::default();
    assert_eq!(sheet.prof(), ProfFilter::All);
    assert_eq!(sheet.sub_prof(), SubProfFilter::All);
    assert_eq!(sheet.filtered(&Operation::default()).len(), OPERATORS.len());
}

#[test]
fn custom_operators_are_listed_first_and_once() {
    let mut editor = editor_with(&["银灰", "自创干员"], &["自创干员", "小号"]);
    editor.upsert_operator(Operator::named("自创干员"));
    let entries = roster_with_custom(&editor.operation);
    assert_eq!(names(&entries[..2]), vec!["自创干员", "小号"]);
    assert!(entries[0].is_custom());
    assert_eq!(entries.len(), OPERATORS.len() + 2);
}

#[test]
fn others_filter_holds_custom_and_non_character_entries() {
    let editor = editor_with(&["自创干员"], &[]);
    let mut sheet = OperatorSheetState::default();
    sheet.select_prof(ProfFilter::Others);
    assert_eq!(
        names(&sheet.filtered(&editor.operation)),
        vec!["自创干员", "预备干员-近战", "预备干员-术师"]
    );
}

#[test]
fn profession_filter_uses_sub_profession_membership() {
    let mut sheet = OperatorSheetState::default();
    sheet.select_prof(caster());
    assert_eq!(
        names(&sheet.filtered(&Operation::default())),
        vec!["艾雅法拉", "阿米娅", "伊芙利特", "天火", "异客"]
    );

    sheet.select_sub_prof(SubProfFilter::SubProfession("corecaster"));
    assert_eq!(names(&sheet.filtered(&Operation::default())), vec!["艾雅法拉", "阿米娅"]);
}

#[test]
fn selected_filter_includes_direct_and_grouped() {
    let editor = editor_with(&["阿米娅"], &["天火"]);
    let mut sheet = OperatorSheetState::default();
    sheet.select_prof(caster());
    sheet.select_sub_prof(SubProfFilter::Selected);
    assert_eq!(names(&sheet.filtered(&editor.operation)), vec!["阿米娅", "天火"]);
}

#[test]
fn changing_profession_resets_sub_profession() {
    let mut sheet = OperatorSheetState::default();
    sheet.select_prof(caster());
    sheet.select_sub_prof(SubProfFilter::SubProfession("chain"));
    sheet.select_prof(ProfFilter::Others);
    assert_eq!(sheet.sub_prof(), SubProfFilter::All);
}

#[test]
fn sub_profession_options_follow_profession() {
    let mut sheet = OperatorSheetState::default();
    assert_eq!(sheet.sub_prof_options(), vec![SubProfFilter::All, SubProfFilter::Selected]);
    sheet.select_prof(caster());
    let options = sheet.sub_prof_options();
    assert_eq!(options.len(), 2 + 6);
    assert_eq!(options[2], SubProfFilter::SubProfession("corecaster"));
    assert_eq!(options[2].label(), "中坚术师");
}

#[test]
fn profession_options_wrap_roster_with_all_and_others() {
    let options = ProfFilter::options();
    assert_eq!(options.len(), PROFESSIONS.len() + 2);
    assert_eq!(options[0].id(), "all");
    assert_eq!(options[options.len() - 1].label(), "其它");
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_adds_then_removes_direct_operator() {
    let mut editor = EditorState::default();
    assert_eq!(toggle(&mut editor, "能天使"), ToggleOutcome::Added);
    assert!(editor.operation.has_direct_operator("能天使"));
    assert_eq!(toggle(&mut editor, "能天使"), ToggleOutcome::Removed);
    assert!(!editor.operation.has_direct_operator("能天使"));
}

#[test]
fn toggle_grouped_operator_is_blocked_without_mutation() {
    let mut editor = editor_with(&["银灰"], &["闪灵"]);
    let before = editor.operation.clone();
    assert_eq!(toggle(&mut editor, "闪灵"), ToggleOutcome::BlockedByGroup);
    assert_eq!(editor.operation, before);
}

// =============================================================
// Bulk selection
// =============================================================

#[test]
fn select_all_adds_exactly_unselected_filtered_entries() {
    let mut editor = editor_with(&["阿米娅", "银灰"], &["天火"]);
    let mut sheet = OperatorSheetState::default();
    sheet.select_prof(caster());
    let entries = sheet.filtered(&editor.operation);

    assert_eq!(select_all(&mut editor, &entries), 3);
    let direct: Vec<&str> = editor.operators().iter().map(|op| op.name.as_str()).collect();
    assert_eq!(direct, vec!["阿米娅", "银灰", "艾雅法拉", "伊芙利特", "异客"]);
    assert!(!editor.operation.has_direct_operator("天火"));
    assert!(!can_select_all(&editor.operation, &entries));
}

#[test]
fn cancel_all_removes_exactly_selected_filtered_entries() {
    let mut editor = editor_with(&["阿米娅", "艾雅法拉", "银灰"], &["天火"]);
    let mut sheet = OperatorSheetState::default();
    sheet.select_prof(caster());
    let entries = sheet.filtered(&editor.operation);

    assert!(can_cancel_all(&editor.operation, &entries));
    assert_eq!(cancel_all(&mut editor, &entries), 2);
    let direct: Vec<&str> = editor.operators().iter().map(|op| op.name.as_str()).collect();
    assert_eq!(direct, vec!["银灰"]);
    assert!(editor.operation.has_grouped_operator("天火"));
}

#[test]
fn bulk_buttons_disable_on_empty_selection() {
    let editor = EditorState::default();
    let mut sheet = OperatorSheetState::default();
    sheet.select_prof(caster());
    let entries = sheet.filtered(&editor.operation);
    assert!(can_select_all(&editor.operation, &entries));
    assert!(!can_cancel_all(&editor.operation, &entries));
}

#[test]
fn group_membership_counts_for_cancel_button_but_is_not_removed() {
    let mut editor = editor_with(&[], &["天火"]);
    let mut sheet = OperatorSheetState::default();
    sheet.select_prof(caster());
    let entries = sheet.filtered(&editor.operation);
    assert!(can_cancel_all(&editor.operation, &entries));
    assert_eq!(cancel_all(&mut editor, &entries), 0);
    assert!(editor.groups().iter().any(|g: &Group| g.contains("天火")));
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn first_page_shows_page_size_entries() {
    let editor = editor_with_customs(70);
    let sheet = OperatorSheetState::default();
    let total = sheet.filtered(&editor.operation).len();
    assert_eq!(total, 70 + OPERATORS.len());
    assert_eq!(sheet.visible(&editor.operation).len(), PAGE_SIZE);
    assert_eq!(sheet.remaining(total), total - PAGE_SIZE);
    assert!(!sheet.can_go_back_to_top());
}

#[test]
fn show_more_grows_by_page_size_capped_at_total() {
    let editor = editor_with_customs(70);
    let mut sheet = OperatorSheetState::default();
    let total = sheet.filtered(&editor.operation).len();

    assert!(sheet.show_more(total));
    assert_eq!(sheet.visible_count(total), total.min(2 * PAGE_SIZE));
    assert_eq!(sheet.visible(&editor.operation).len(), total.min(2 * PAGE_SIZE));
    assert!(sheet.can_go_back_to_top());

    assert!(!sheet.show_more(total));
    assert_eq!(sheet.page(), 1);
    assert_eq!(sheet.remaining(total), 0);
}

#[test]
fn show_more_is_noop_when_everything_is_visible() {
    let mut sheet = OperatorSheetState::default();
    assert!(!sheet.show_more(OPERATORS.len()));
    assert_eq!(sheet.page(), 0);
}

#[test]
fn changing_any_filter_resets_pagination() {
    let editor = editor_with_customs(70);
    let mut sheet = OperatorSheetState::default();
    let total = sheet.filtered(&editor.operation).len();

    sheet.show_more(total);
    sheet.select_prof(ProfFilter::Others);
    assert_eq!(sheet.page(), 0);

    sheet.show_more(total);
    sheet.select_sub_prof(SubProfFilter::Selected);
    assert_eq!(sheet.page(), 0);
}
