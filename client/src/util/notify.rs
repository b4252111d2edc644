//! Context handle for raising toast notifications.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;
use uuid::Uuid;

use crate::state::notifications::{NotificationKind, NotificationState};

/// Copyable handle over the notification queue signal.
#[derive(Clone, Copy)]
pub struct Notifier {
    state: RwSignal<NotificationState>,
}

impl Notifier {
    pub fn new(state: RwSignal<NotificationState>) -> Self {
        Self { state }
    }

    /// Queue a notification and schedule its auto-dismiss, if it has one.
    /// Returns `None` when the queue signal has been disposed.
    pub fn notify(self, kind: NotificationKind, title: impl Into<String>, message: Option<String>) -> Option<Uuid> {
        let (id, delay_ms) = self.state.try_update(|s| {
            let id = s.push(kind, title, message);
            (id, s.auto_dismiss_ms(id))
        })?;
        if let Some(ms) = delay_ms {
            self.dismiss_after(id, ms);
        }
        Some(id)
    }

    /// Remove `id` once `ms` has elapsed. Browser-only; SSR toasts never
    /// outlive the render.
    fn dismiss_after(self, id: Uuid, ms: u32) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
                state.try_update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self, id, ms);
        }
    }

    pub fn success(self, title: impl Into<String>) {
        self.notify(NotificationKind::Success, title, None);
    }

    pub fn info(self, title: impl Into<String>) {
        self.notify(NotificationKind::Info, title, None);
    }

    pub fn warning(self, title: impl Into<String>) {
        self.notify(NotificationKind::Warning, title, None);
    }

    pub fn error(self, title: impl Into<String>, detail: impl Into<String>) {
        self.notify(NotificationKind::Error, title, Some(detail.into()));
    }

    pub fn dismiss(self, id: Uuid) {
        self.state.update(|s| {
            s.dismiss(id);
        });
    }
}

/// Notifier for the queue provided by `App`.
pub fn use_notifier() -> Notifier {
    Notifier::new(expect_context::<RwSignal<NotificationState>>())
}
