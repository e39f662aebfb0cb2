//! Operator picker grid: profession filters, pagination, and selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sheet lists the static roster plus any custom operator names already
//! used by the open document. Selection writes straight into the editor form:
//! toggling adds or removes a direct assignment, while operators that belong
//! to a group are locked and only produce a conflict toast.

#[cfg(test)]
#[path = "operator_sheet_test.rs"]
mod operator_sheet_test;

use copilot::roster::{self, NOT_CHARACTER_SUB_PROF, OPERATORS, PROFESSIONS, Profession};
use copilot::{Operation, Operator};

use crate::state::editor::EditorState;

/// Entries revealed per "show more" step.
pub const PAGE_SIZE: usize = 60;
/// Toast shown when toggling an operator that is assigned through a group.
pub const GROUPED_CONFLICT_MESSAGE: &str = "该干员已被编组";

/// Profession axis of the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfFilter {
    #[default]
    All,
    Profession(&'static Profession),
    /// Non-character entries and custom operators.
    Others,
}

impl ProfFilter {
    /// Options in display order: all, each profession, others.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(PROFESSIONS.iter().map(Self::Profession))
            .chain(std::iter::once(Self::Others))
            .collect()
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Profession(prof) => prof.id,
            Self::Others => "others",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "全部",
            Self::Profession(prof) => prof.name,
            Self::Others => "其它",
        }
    }

    fn matches(self, entry: &SheetEntry) -> bool {
        match self {
            Self::All => true,
            Self::Others => entry.sub_prof.is_empty() || entry.sub_prof == NOT_CHARACTER_SUB_PROF,
            Self::Profession(prof) => prof.sub.iter().any(|s| s.id == entry.sub_prof),
        }
    }
}

/// Sub-profession axis of the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubProfFilter {
    #[default]
    All,
    /// Operators assigned directly or through a group.
    Selected,
    SubProfession(&'static str),
}

impl SubProfFilter {
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Selected => "selected",
            Self::SubProfession(id) => id,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "全部",
            Self::Selected => "已选择",
            Self::SubProfession(id) => roster::profession_of(id)
                .and_then(|prof| prof.sub.iter().find(|s| s.id == id))
                .map_or(id, |s| s.name),
        }
    }
}

/// One cell of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetEntry {
    pub name: String,
    /// Empty for custom operators.
    pub sub_prof: String,
}

impl SheetEntry {
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.sub_prof.is_empty()
    }
}

/// Result of clicking an operator cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The operator is a group member; nothing changed.
    BlockedByGroup,
}

/// Filter and pagination state of the sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperatorSheetState {
    prof: ProfFilter,
    sub_prof: SubProfFilter,
    page: usize,
}

impl OperatorSheetState {
    #[must_use]
    pub fn prof(&self) -> ProfFilter {
        self.prof
    }

    #[must_use]
    pub fn sub_prof(&self) -> SubProfFilter {
        self.sub_prof
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Switch profession; resets the sub-profession and pagination.
    pub fn select_prof(&mut self, prof: ProfFilter) {
        self.prof = prof;
        self.sub_prof = SubProfFilter::All;
        self.reset_pagination();
    }

    pub fn select_sub_prof(&mut self, sub_prof: SubProfFilter) {
        self.sub_prof = sub_prof;
        self.reset_pagination();
    }

    /// Sub-profession options for the current profession.
    #[must_use]
    pub fn sub_prof_options(&self) -> Vec<SubProfFilter> {
        let subs: &[roster::SubProfession] = match self.prof {
            ProfFilter::Profession(prof) => prof.sub,
            ProfFilter::All | ProfFilter::Others => &[],
        };
        [SubProfFilter::All, SubProfFilter::Selected]
            .into_iter()
            .chain(subs.iter().map(|s| SubProfFilter::SubProfession(s.id)))
            .collect()
    }

    /// Entries passing both filter axes, in display order.
    #[must_use]
    pub fn filtered(&self, operation: &Operation) -> Vec<SheetEntry> {
        roster_with_custom(operation)
            .into_iter()
            .filter(|entry| self.prof.matches(entry))
            .filter(|entry| match self.sub_prof {
                SubProfFilter::All => true,
                SubProfFilter::Selected => is_selected(operation, &entry.name),
                SubProfFilter::SubProfession(id) => entry.sub_prof == id,
            })
            .collect()
    }

    /// Exclusive end of the revealed range before capping.
    #[must_use]
    pub fn last_index(&self) -> usize {
        (self.page + 1) * PAGE_SIZE
    }

    #[must_use]
    pub fn visible_count(&self, total: usize) -> usize {
        self.last_index().min(total)
    }

    /// The revealed prefix of the filtered entries.
    #[must_use]
    pub fn visible(&self, operation: &Operation) -> Vec<SheetEntry> {
        let mut entries = self.filtered(operation);
        entries.truncate(self.last_index());
        entries
    }

    /// Entries still hidden behind "show more".
    #[must_use]
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.last_index())
    }

    /// Reveal one more page if anything is hidden. Returns whether it did.
    pub fn show_more(&mut self, total: usize) -> bool {
        if self.last_index() >= total {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn reset_pagination(&mut self) {
        self.page = 0;
    }

    /// Whether more than the first page is revealed.
    #[must_use]
    pub fn can_go_back_to_top(&self) -> bool {
        self.last_index() > PAGE_SIZE
    }
}

/// Roster entries preceded by custom operator names used in the document.
#[must_use]
pub fn roster_with_custom(operation: &Operation) -> Vec<SheetEntry> {
    let mut entries: Vec<SheetEntry> = Vec::new();
    for name in operation.assigned_names() {
        if roster::find_operator(name).is_none() && !entries.iter().any(|e| e.name == name) {
            entries.push(SheetEntry {
                name: name.to_owned(),
                sub_prof: String::new(),
            });
        }
    }
    entries.extend(OPERATORS.iter().map(|info| SheetEntry {
        name: info.name.to_owned(),
        sub_prof: info.sub_prof.to_owned(),
    }));
    entries
}

/// Whether `name` is assigned directly or through a group.
#[must_use]
pub fn is_selected(operation: &Operation, name: &str) -> bool {
    operation.has_direct_operator(name) || operation.has_grouped_operator(name)
}

/// Click on an operator cell.
pub fn toggle(editor: &mut EditorState, name: &str) -> ToggleOutcome {
    let direct_id = editor
        .operators()
        .iter()
        .find(|op| op.name == name)
        .and_then(|op| op.id.clone());
    if let Some(id) = direct_id {
        editor.remove_operator(&id);
        return ToggleOutcome::Removed;
    }
    if editor.operation.has_grouped_operator(name) {
        log::warn!("operator {name} is assigned through a group");
        return ToggleOutcome::BlockedByGroup;
    }
    editor.upsert_operator(Operator::named(name));
    ToggleOutcome::Added
}

/// Assign every listed operator that is not selected yet. Returns how many
/// were added.
pub fn select_all(editor: &mut EditorState, entries: &[SheetEntry]) -> usize {
    let mut added = 0;
    for entry in entries {
        if !is_selected(&editor.operation, &entry.name) && editor.upsert_operator(Operator::named(&entry.name)) {
            added += 1;
        }
    }
    added
}

/// Unassign every listed operator that is directly assigned. Group members
/// are left alone. Returns how many were removed.
pub fn cancel_all(editor: &mut EditorState, entries: &[SheetEntry]) -> usize {
    let ids: Vec<_> = editor
        .operators()
        .iter()
        .filter(|op| entries.iter().any(|e| e.name == op.name))
        .filter_map(|op| op.id.clone())
        .collect();
    editor.remove_operators(&ids)
}

#[must_use]
pub fn can_select_all(operation: &Operation, entries: &[SheetEntry]) -> bool {
    entries.iter().any(|e| !is_selected(operation, &e.name))
}

#[must_use]
pub fn can_cancel_all(operation: &Operation, entries: &[SheetEntry]) -> bool {
    entries.iter().any(|e| is_selected(operation, &e.name))
}
