//! Session restore and sign-out actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only writers of `RwSignal<SessionState>` outside the login
//! page. Guards never write; they react to what these helpers set.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::notify::Notifier;

/// Resolve the startup session from `/api/auth/me`.
///
/// Under SSR the session stays loading, so guarded routes render the loading
/// indicator until hydration performs the restore.
pub fn install_session_restore(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        match &user {
            Some(u) => log::info!("session restored for {}", u.id),
            None => log::info!("no active session"),
        }
        let applied = session.try_update(|s| s.settle_restore(user)).unwrap_or(false);
        if !applied {
            log::info!("session already resolved; restore result dropped");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Clear the session. The backend call is best-effort; the local session is
/// signed out whatever it returns, and any guard on screen redirects to login.
pub fn sign_out(session: RwSignal<SessionState>, notifier: Notifier) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::net::api::logout().await;
        session.set(SessionState::signed_out());
        notifier.info("Signed out");
    });
    #[cfg(not(feature = "hydrate"))]
    {
        session.set(SessionState::signed_out());
        let _ = notifier;
    }
}
