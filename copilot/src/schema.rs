//! Typed copilot document (MAA copilot schema v1).
//!
//! DESIGN
//! ======
//! Every document struct (de)serializes with camelCase keys, which is the
//! editable shape. Wire documents use snake_case; [`crate::operation_from_wire`]
//! renames their keys before they reach these types, so there are no serde
//! aliases here and a document that spells a key both ways still parses.
//! Keys this model does not know about are kept in `extra`, and optional
//! values are [`Field`]s, so a document survives an import/export cycle
//! untouched, explicit `null`s included.
//!
//! List items carry an optional `_id`. It is only populated while a document is
//! open in the editor; [`crate::to_maa_operation`] removes it again.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field::Field;

/// Session-local identity for an editable list item.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransientId(String);

impl TransientId {
    /// Generate a new identifier (UUID v4 string).
    #[must_use]
    pub fn fresh() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransientId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A full operation (copilot) document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Stage (level) identifier the operation is written for.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub stage_name: Field<String>,
    /// Minimum MAA version able to run this document, e.g. `v4.0.0`.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub minimum_required: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub doc: Field<Doc>,
    /// Operators assigned directly to the operation.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub opers: Field<Vec<Operator>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub groups: Field<Vec<Group>>,
    /// Ordered action sequence.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub actions: Field<Vec<Action>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Human-facing metadata of an operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doc {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub title: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub title_color: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub details: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub details_color: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An operator (character) assignment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TransientId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub skill: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub skill_usage: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub skill_times: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub requirements: Field<Requirements>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Operator {
    /// A bare operator with only a name, as created from the operator sheet.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Promotion and training requirements for an operator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub elite: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub level: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub skill_level: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub module: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub potentiality: Field<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named set of interchangeable operators.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TransientId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub opers: Field<Vec<Operator>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Group {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opers: Field::Present(Vec::new()),
            ..Self::default()
        }
    }

    /// Whether an operator with `name` is a member of this group.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.opers.as_deref().unwrap_or_default().iter().any(|op| op.name == name)
    }
}

/// One step of the action sequence.
///
/// A legacy `rear_delay` key is not folded into `post_delay`; it stays in
/// `extra` and is written back under its own name.
///
/// `action_type` and `direction` stay free text: documents written by hand may
/// use localized names, which the converter normalizes on import.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TransientId>,
    #[serde(rename = "type", default, skip_serializing_if = "Field::is_absent")]
    pub action_type: Field<String>,
    /// Wait until this many enemies have been killed.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub kill: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub cost_changes: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub costs: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub cooling: Field<i32>,
    /// Operator or group name the action applies to.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    /// Tile coordinates `[x, y]`.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub location: Field<(i32, i32)>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub direction: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub skill_usage: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub skill_times: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub pre_delay: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub post_delay: Field<u32>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub doc: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub doc_color: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Operation {
    /// Every operator name assigned directly or through a group.
    pub fn assigned_names(&self) -> impl Iterator<Item = &str> {
        let direct = self.opers.as_deref().unwrap_or_default().iter();
        let grouped = self
            .groups
            .as_deref()
            .unwrap_or_default()
            .iter()
            .flat_map(|group| group.opers.as_deref().unwrap_or_default().iter());
        direct.chain(grouped).map(|op| op.name.as_str())
    }

    /// Whether `name` is assigned directly (not through a group).
    #[must_use]
    pub fn has_direct_operator(&self, name: &str) -> bool {
        self.opers.as_deref().unwrap_or_default().iter().any(|op| op.name == name)
    }

    /// Whether `name` is a member of any group.
    #[must_use]
    pub fn has_grouped_operator(&self, name: &str) -> bool {
        self.groups.as_deref().unwrap_or_default().iter().any(|group| group.contains(name))
    }
}
