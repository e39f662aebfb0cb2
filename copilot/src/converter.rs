//! Conversion between the MAA wire document and the editable document.
//!
//! ARCHITECTURE
//! ============
//! Import: wire JSON -> [`operation_from_wire`] (snake_case keys renamed to
//! camelCase) -> [`to_editable_operation`] (fresh transient ids, normalized
//! action vocabulary).
//! Export: [`to_maa_operation`] (default version, ids stripped, snake_case
//! keys) -> [`patch_operation`] -> wire JSON.
//!
//! Both directions work on clones; callers keep their input.

#[cfg(test)]
#[path = "converter_test.rs"]
mod converter_test;

use serde_json::Value;

use crate::case::{camel_case_keys, snake_case_keys};
use crate::field::Field;
use crate::schema::{Action, Operation, Operator, TransientId};
use crate::vocabulary::{ActionType, Direction};
use crate::{DEFAULT_MINIMUM_REQUIRED, DocumentError, json_kind};

/// Key a form library may leak into list items while they are being edited.
const LEAKED_FORM_ID_KEY: &str = "id";

/// Create an operation that can be used in the editor.
#[must_use]
pub fn to_editable_operation(operation: &Operation) -> Operation {
    let mut operation = operation.clone();

    for_each_operator(&mut operation, |oper| oper.id = Some(TransientId::fresh()));
    for group in operation.groups.iter_mut().flatten() {
        group.id = Some(TransientId::fresh());
    }
    for action in operation.actions.iter_mut().flatten() {
        action.id = Some(TransientId::fresh());
        normalize_action(action);
    }

    operation
}

/// Create an operation in MAA's standard (snake_case) format.
///
/// # Errors
///
/// Returns [`DocumentError::Json`] if the document cannot be represented as
/// JSON, which only happens for non-string map keys in `extra` fields.
pub fn to_maa_operation(operation: &Operation) -> Result<Value, DocumentError> {
    let mut operation = operation.clone();

    if operation.minimum_required.as_deref().is_none_or(str::is_empty) {
        operation.minimum_required = Field::Present(DEFAULT_MINIMUM_REQUIRED.to_owned());
    }

    for_each_operator(&mut operation, |oper| {
        oper.id = None;
        oper.extra.remove(LEAKED_FORM_ID_KEY);
    });
    for group in operation.groups.iter_mut().flatten() {
        group.id = None;
        group.extra.remove(LEAKED_FORM_ID_KEY);
    }
    for action in operation.actions.iter_mut().flatten() {
        action.id = None;
        action.extra.remove(LEAKED_FORM_ID_KEY);
    }

    let value = serde_json::to_value(&operation)?;
    Ok(snake_case_keys(value))
}

/// Patch an exported document so it satisfies the MAA schema: a falsy
/// `doc.details` is replaced by `doc.title`, whatever that holds. With no
/// title the `details` key is dropped.
pub fn patch_operation(operation: &mut Value) {
    let Some(doc) = operation.get_mut("doc").and_then(Value::as_object_mut) else {
        return;
    };
    if !is_falsy(doc.get("details")) {
        return;
    }
    match doc.get("title").cloned() {
        Some(title) => {
            doc.insert("details".to_owned(), title);
        }
        None => {
            doc.remove("details");
        }
    }
}

/// Build an [`Operation`] from a wire document, accepting snake_case and
/// camelCase keys alike.
///
/// # Errors
///
/// Returns [`DocumentError::NotAnObject`] when the root is not a JSON object
/// and [`DocumentError::Json`] when a known field has the wrong type.
pub fn operation_from_wire(value: Value) -> Result<Operation, DocumentError> {
    if !value.is_object() {
        return Err(DocumentError::NotAnObject(json_kind(&value)));
    }
    Ok(serde_json::from_value(camel_case_keys(value))?)
}

/// Parse wire JSON text into an editable operation.
///
/// # Errors
///
/// Returns [`DocumentError::NotAnObject`] when the root is not a JSON object
/// and [`DocumentError::Json`] for malformed or schema-violating input.
pub fn import_operation_json(text: &str) -> Result<Operation, DocumentError> {
    let value: Value = serde_json::from_str(text)?;
    let operation = operation_from_wire(value)?;
    Ok(to_editable_operation(&operation))
}

/// Export an editable operation as patched MAA wire JSON.
///
/// # Errors
///
/// See [`to_maa_operation`].
pub fn export_operation_json(operation: &Operation) -> Result<Value, DocumentError> {
    let mut value = to_maa_operation(operation)?;
    patch_operation(&mut value);
    Ok(value)
}

/// Normalize localized type and direction strings to canonical values.
/// Unrecognized values are kept as-is.
fn normalize_action(action: &mut Action) {
    let Some(raw) = action.action_type.as_deref() else {
        return;
    };
    let Some(action_type) = ActionType::find(raw) else {
        tracing::debug!(action_type = raw, "keeping unrecognized action type");
        return;
    };
    action.action_type = Field::Present(action_type.as_str().to_owned());

    if action_type.has_direction() {
        if let Some(direction) = action.direction.as_deref().and_then(Direction::find) {
            action.direction = Field::Present(direction.as_str().to_owned());
        }
    }
}

/// Visit direct operators and every group member.
fn for_each_operator(operation: &mut Operation, mut f: impl FnMut(&mut Operator)) {
    for oper in operation.opers.iter_mut().flatten() {
        f(oper);
    }
    for group in operation.groups.iter_mut().flatten() {
        for oper in group.opers.iter_mut().flatten() {
            f(oper);
        }
    }
}

/// JavaScript-style falsiness for the JSON values a `doc` field can hold.
fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}
