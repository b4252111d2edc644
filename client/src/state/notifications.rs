//! Toast notification queue.
//!
//! DESIGN
//! ======
//! The queue is plain data so eviction and dismissal are testable without a
//! reactive runtime. Timers live in `util::notify`, which only ever
//! calls `dismiss` with an id it was handed by `push`.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use uuid::Uuid;

/// Most toasts shown at once; older ones are evicted first.
pub const MAX_VISIBLE: usize = 5;

/// Severity of a notification, which also drives its default lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// Auto-dismiss delay, or `None` for sticky notifications.
    pub fn default_timeout_ms(self) -> Option<u32> {
        match self {
            Self::Success | Self::Info => Some(5_000),
            Self::Warning => Some(8_000),
            Self::Error => None,
        }
    }

    /// CSS modifier for the toast element.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Warning => "toast--warning",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    pub auto_dismiss_ms: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
}

impl NotificationState {
    /// Queue a notification and return its id.
    pub fn push(&mut self, kind: NotificationKind, title: impl Into<String>, message: Option<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Notification {
            id,
            kind,
            title: title.into(),
            message,
            auto_dismiss_ms: kind.default_timeout_ms(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a notification. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Auto-dismiss delay recorded on a queued notification. `None` for
    /// sticky or already-removed entries.
    pub fn auto_dismiss_ms(&self, id: Uuid) -> Option<u32> {
        self.items.iter().find(|n| n.id == id).and_then(|n| n.auto_dismiss_ms)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
