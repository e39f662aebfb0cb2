//! Non-blocking notification queue.
//!
//! Toasts report transient user-action conflicts (e.g. toggling a grouped
//! operator). The queue is bounded; the oldest toast is evicted first.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum number of toasts shown at once.
pub const TOAST_CAP: usize = 5;

/// Visual intent of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intent {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
}

impl Intent {
    /// CSS modifier class.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "toast--primary",
            Self::Success => "toast--success",
            Self::Warning => "toast--warning",
            Self::Danger => "toast--danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub intent: Intent,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
    /// Highest id handed out by [`ToastState::take_unscheduled`].
    scheduled_through: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn show(&mut self, message: impl Into<String>, intent: Intent) -> u64 {
        self.next_id += 1;
        if self.toasts.len() >= TOAST_CAP {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast {
            id: self.next_id,
            message: message.into(),
            intent,
        });
        self.next_id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Ids of visible toasts that have not been returned by an earlier call.
    /// Each toast is returned at most once, so its dismiss timer is armed once.
    pub fn take_unscheduled(&mut self) -> Vec<u64> {
        let fresh: Vec<u64> = self
            .toasts
            .iter()
            .map(|t| t.id)
            .filter(|&id| id > self.scheduled_through)
            .collect();
        self.scheduled_through = self.next_id;
        fresh
    }
}
