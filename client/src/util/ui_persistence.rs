//! Browser localStorage persistence for the editor draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! The editable operation is saved after each change so an accidental reload
//! does not lose work. Persistence is best-effort and browser-only; native
//! builds no-op so state logic stays testable.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use copilot::Operation;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key of the in-progress operation.
pub const DRAFT_STORAGE_KEY: &str = "copilot_editor_draft";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        decode_draft(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("failed to persist {key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}

/// The saved editor draft, if one exists and still parses.
pub fn load_draft() -> Option<Operation> {
    load_json(DRAFT_STORAGE_KEY)
}

pub fn save_draft(operation: &Operation) {
    save_json(DRAFT_STORAGE_KEY, operation);
}

pub fn clear_draft() {
    remove(DRAFT_STORAGE_KEY);
}

/// Parse a stored value, discarding drafts written by an incompatible build.
#[cfg(any(test, feature = "csr"))]
fn decode_draft<T: DeserializeOwned>(raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding unreadable draft: {err}");
            None
        }
    }
}
