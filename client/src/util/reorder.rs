//! List reordering for drag-and-drop interactions.

#[cfg(test)]
#[path = "reorder_test.rs"]
mod reorder_test;

/// Move the element at `from` so it ends up at index `to`, shifting the
/// elements in between. Out-of-range indices leave the list unchanged.
///
/// Returns whether the list changed.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() || from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Start an HTML5 drag carrying `payload` as plain text.
///
/// Firefox only begins a drag once the transfer has data.
pub fn begin_drag(ev: &leptos::ev::DragEvent, payload: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            let _ = transfer.set_data("text/plain", payload);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ev, payload);
    }
}
