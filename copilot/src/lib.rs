//! Shared copilot document model and conversion pipeline.
//!
//! This crate owns the operation document representation used by both the
//! `client` editor and the `cli` tool. Documents travel in two shapes:
//! the editable shape (camelCase keys, transient `_id` on list items) and the
//! MAA wire shape (snake_case keys, no transient identity).
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is pure and synchronous. Browser concerns (fetching,
//! storage, rendering) stay in `client`; file IO stays in `cli`.


pub mod case;
pub mod converter;
pub mod field;
pub mod roster;
pub mod schema;
pub mod stage;
pub mod vocabulary;

pub use case::{camel_case_keys, snake_case_keys, to_camel_case, to_snake_case};
pub use converter::{
    export_operation_json, import_operation_json, operation_from_wire, patch_operation, to_editable_operation,
    to_maa_operation,
};
pub use field::Field;
pub use schema::{Action, Doc, Group, Operation, Operator, Requirements, TransientId};
pub use stage::{Level, StageIndex};
pub use vocabulary::{ActionType, Direction};

/// Minimum MAA version assumed when a document does not declare one.
pub const DEFAULT_MINIMUM_REQUIRED: &str = "v4.0.0";

/// Error returned by the text-level import/export entry points.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The input was not valid JSON or did not match the document schema.
    #[error("invalid operation document: {0}")]
    Json(#[from] serde_json::Error),
    /// The JSON root was valid but not an object.
    #[error("operation document root must be an object, got {0}")]
    NotAnObject(&'static str),
}

/// Name of a JSON value kind, used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
