//! Operation editor form state.
//!
//! DESIGN
//! ======
//! The form owns one editable [`Operation`] (camelCase shape, transient ids on
//! every list item) plus field-scoped validation errors. Errors are keyed by
//! field path; the reserved [`GLOBAL_ERROR_KEY`] carries failures that do not
//! belong to a single field and renders as a dismissible banner.
//!
//! List mutations address items by [`TransientId`] rather than index so drag
//! handlers and buttons stay correct while the list is being reordered.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::collections::BTreeMap;

use copilot::{
    Action, DEFAULT_MINIMUM_REQUIRED, Doc, DocumentError, Field, Group, Operation, Operator, TransientId,
};

use crate::util::reorder::move_item;

/// Error key for submission failures not tied to a field.
pub const GLOBAL_ERROR_KEY: &str = "global";
/// Field path of the stage selector.
pub const STAGE_NAME_FIELD: &str = "stage_name";
/// Field paths of the document title and details.
pub const DOC_TITLE_FIELD: &str = "doc.title";
pub const DOC_DETAILS_FIELD: &str = "doc.details";
/// Message shown when no stage is selected.
pub const STAGE_NAME_REQUIRED: &str = "请输入关卡";

/// Why a submission was rejected.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// One or more fields failed validation; see [`EditorState::errors`].
    #[error("form has {0} invalid field(s)")]
    Invalid(usize),
    #[error(transparent)]
    Export(#[from] DocumentError),
}

/// Editor form values and validation errors.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub operation: Operation,
    /// Field path -> message. Includes [`GLOBAL_ERROR_KEY`] when set.
    pub errors: BTreeMap<String, String>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            operation: Operation {
                minimum_required: Field::Present(DEFAULT_MINIMUM_REQUIRED.to_owned()),
                actions: Field::Present(Vec::new()),
                ..Operation::default()
            },
            errors: BTreeMap::new(),
        }
    }
}

impl EditorState {
    /// Replace the form contents with an imported operation.
    pub fn load(&mut self, operation: &Operation) {
        self.operation = copilot::to_editable_operation(operation);
        self.errors.clear();
    }

    // =========================================================
    // Errors
    // =========================================================

    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn set_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_owned(), message.into());
    }

    pub fn clear_error(&mut self, field: &str) {
        self.errors.remove(field);
    }

    #[must_use]
    pub fn global_error(&self) -> Option<&str> {
        self.field_error(GLOBAL_ERROR_KEY)
    }

    pub fn set_global_error(&mut self, message: impl Into<String>) {
        self.set_error(GLOBAL_ERROR_KEY, message);
    }

    pub fn dismiss_global_error(&mut self) {
        self.clear_error(GLOBAL_ERROR_KEY);
    }

    // =========================================================
    // Metadata fields
    // =========================================================

    /// Set the selected stage; selecting one clears its required error.
    pub fn set_stage_name(&mut self, stage_name: Option<String>) {
        let stage_name = stage_name.filter(|s| !s.trim().is_empty());
        if stage_name.is_some() {
            self.clear_error(STAGE_NAME_FIELD);
        }
        self.operation.stage_name = stage_name.into();
    }

    /// Editing a field clears any error recorded against it.
    pub fn set_title(&mut self, title: String) {
        self.clear_error(DOC_TITLE_FIELD);
        self.doc_mut().title = Field::Present(title);
    }

    pub fn set_details(&mut self, details: String) {
        self.clear_error(DOC_DETAILS_FIELD);
        self.doc_mut().details = Field::Present(details);
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.operation.doc.as_ref().and_then(|d| d.title.as_deref()).unwrap_or_default()
    }

    #[must_use]
    pub fn details(&self) -> &str {
        self.operation.doc.as_ref().and_then(|d| d.details.as_deref()).unwrap_or_default()
    }

    fn doc_mut(&mut self) -> &mut Doc {
        self.operation.doc.get_or_insert_with(Doc::default)
    }

    // =========================================================
    // Validation and submission
    // =========================================================

    /// Run field validation, recording errors. Returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        let has_stage = self
            .operation
            .stage_name
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty());
        if has_stage {
            self.clear_error(STAGE_NAME_FIELD);
        } else {
            self.set_error(STAGE_NAME_FIELD, STAGE_NAME_REQUIRED);
        }
        !self.errors.keys().any(|key| key != GLOBAL_ERROR_KEY)
    }

    /// Validate and export the form as a patched MAA document.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Invalid`] when validation fails (field errors are
    /// recorded), [`SubmitError::Export`] when the document cannot be
    /// serialized (recorded as the global error).
    pub fn submit(&mut self) -> Result<serde_json::Value, SubmitError> {
        self.dismiss_global_error();
        if !self.validate() {
            return Err(SubmitError::Invalid(self.errors.len()));
        }
        copilot::export_operation_json(&self.operation).map_err(|err| {
            log::error!("operation export failed: {err}");
            self.set_global_error(err.to_string());
            SubmitError::Export(err)
        })
    }

    // =========================================================
    // Actions
    // =========================================================

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        self.operation.actions.as_deref().unwrap_or_default()
    }

    /// Append an action, assigning it a fresh transient id.
    pub fn add_action(&mut self, mut action: Action) -> TransientId {
        let id = TransientId::fresh();
        action.id = Some(id.clone());
        self.operation.actions.get_or_insert_with(Vec::new).push(action);
        id
    }

    #[must_use]
    pub fn action_index(&self, id: &TransientId) -> Option<usize> {
        self.actions().iter().position(|a| a.id.as_ref() == Some(id))
    }

    pub fn remove_action(&mut self, id: &TransientId) -> bool {
        let Some(index) = self.action_index(id) else {
            return false;
        };
        let Some(actions) = self.operation.actions.as_mut() else {
            return false;
        };
        actions.remove(index);
        true
    }

    /// Apply `f` to the action with `id`. Returns whether it was found.
    pub fn update_action(&mut self, id: &TransientId, f: impl FnOnce(&mut Action)) -> bool {
        let Some(action) = self.operation.actions.iter_mut().flatten().find(|a| a.id.as_ref() == Some(id)) else {
            return false;
        };
        f(action);
        true
    }

    /// Drag-and-drop reorder of the action sequence.
    pub fn move_action(&mut self, from: usize, to: usize) -> bool {
        self.operation.actions.as_mut().is_some_and(|actions| move_item(actions, from, to))
    }

    // =========================================================
    // Operators
    // =========================================================

    #[must_use]
    pub fn operators(&self) -> &[Operator] {
        self.operation.opers.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        self.operation.groups.as_deref().unwrap_or_default()
    }

    /// Insert a directly assigned operator, or update the existing one with
    /// the same name (keeping its transient id). Returns `true` on insert.
    pub fn upsert_operator(&mut self, mut operator: Operator) -> bool {
        let opers = self.operation.opers.get_or_insert_with(Vec::new);
        if let Some(existing) = opers.iter_mut().find(|op| op.name == operator.name) {
            operator.id = existing.id.clone().or_else(|| Some(TransientId::fresh()));
            *existing = operator;
            return false;
        }
        operator.id = Some(TransientId::fresh());
        opers.push(operator);
        true
    }

    pub fn remove_operator(&mut self, id: &TransientId) -> bool {
        self.remove_operators(std::slice::from_ref(id)) == 1
    }

    /// Remove every directly assigned operator whose id is in `ids`.
    /// Returns how many were removed.
    pub fn remove_operators(&mut self, ids: &[TransientId]) -> usize {
        let Some(opers) = self.operation.opers.as_mut() else {
            return 0;
        };
        let before = opers.len();
        opers.retain(|op| op.id.as_ref().is_none_or(|id| !ids.contains(id)));
        before - opers.len()
    }

    pub fn move_operator(&mut self, from: usize, to: usize) -> bool {
        self.operation.opers.as_mut().is_some_and(|opers| move_item(opers, from, to))
    }

    // =========================================================
    // Groups
    // =========================================================

    /// Add an empty group. Blank or duplicate names are rejected with `None`.
    pub fn add_group(&mut self, name: &str) -> Option<TransientId> {
        let name = name.trim();
        if name.is_empty() || self.groups().iter().any(|g| g.name == name) {
            return None;
        }
        let id = TransientId::fresh();
        let mut group = Group::named(name);
        group.id = Some(id.clone());
        self.operation.groups.get_or_insert_with(Vec::new).push(group);
        Some(id)
    }

    /// Remove a group; its members are discarded with it.
    pub fn remove_group(&mut self, id: &TransientId) -> bool {
        let Some(groups) = self.operation.groups.as_mut() else {
            return false;
        };
        let before = groups.len();
        groups.retain(|g| g.id.as_ref() != Some(id));
        before != groups.len()
    }

    pub fn move_group(&mut self, from: usize, to: usize) -> bool {
        self.operation.groups.as_mut().is_some_and(|groups| move_item(groups, from, to))
    }

    /// Drag a directly assigned operator into a group.
    pub fn move_operator_to_group(&mut self, operator_id: &TransientId, group_id: &TransientId) -> bool {
        let Some(group_index) = self.group_index(group_id) else {
            return false;
        };
        let Some(opers) = self.operation.opers.as_mut() else {
            return false;
        };
        let Some(oper_index) = opers.iter().position(|op| op.id.as_ref() == Some(operator_id)) else {
            return false;
        };
        let operator = opers.remove(oper_index);

        let Some(groups) = self.operation.groups.as_mut() else {
            return false;
        };
        let members = groups[group_index].opers.get_or_insert_with(Vec::new);
        if !members.iter().any(|m| m.name == operator.name) {
            members.push(operator);
        }
        true
    }

    /// Drag a group member back out to the direct operator list.
    pub fn move_operator_out_of_group(&mut self, group_id: &TransientId, operator_id: &TransientId) -> bool {
        let Some(group_index) = self.group_index(group_id) else {
            return false;
        };
        let Some(groups) = self.operation.groups.as_mut() else {
            return false;
        };
        let Some(members) = groups[group_index].opers.as_mut() else {
            return false;
        };
        let Some(member_index) = members.iter().position(|m| m.id.as_ref() == Some(operator_id)) else {
            return false;
        };
        let operator = members.remove(member_index);

        let opers = self.operation.opers.get_or_insert_with(Vec::new);
        if !opers.iter().any(|op| op.name == operator.name) {
            opers.push(operator);
        }
        true
    }

    fn group_index(&self, id: &TransientId) -> Option<usize> {
        self.groups().iter().position(|g| g.id.as_ref() == Some(id))
    }
}
