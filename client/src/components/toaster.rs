//! Toast stack rendering the notification queue.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationState};
use crate::util::notify::use_notifier;

#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|n| n.id
                children=move |n| view! { <Toast notification=n/> }
            />
        </div>
    }
}

#[component]
fn Toast(notification: Notification) -> impl IntoView {
    let notifier = use_notifier();
    let id = notification.id;
    let class = format!("toast {}", notification.kind.css_modifier());

    view! {
        <div class=class role="alert">
            <div class="toast__body">
                <strong class="toast__title">{notification.title}</strong>
                {notification.message.map(|m| view! { <p class="toast__message">{m}</p> })}
            </div>
            <button class="toast__dismiss" aria-label="Dismiss" on:click=move |_| notifier.dismiss(id)>
                "×"
            </button>
        </div>
    }
}
