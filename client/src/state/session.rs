//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<SessionState>`. Route guards read it;
//! only session restore and the login/logout actions write it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};

/// Authentication state tracking the current user and restore progress.
///
/// `is_authenticated` is derived from `user`, so an authenticated session
/// always carries a user. While `loading` is set, `user` is not authoritative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Sessions start unresolved until the restore request settles.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Resolved session for `user`.
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    /// Resolved session with nobody signed in.
    pub fn signed_out() -> Self {
        Self { user: None, loading: false }
    }

    /// Settle a restore attempt. Any failure is indistinguishable from
    /// "no session".
    pub fn restored(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    /// Apply a finished restore only if nothing resolved the session first.
    /// A login that lands while `/me` is in flight wins over the stale
    /// restore result. Returns whether the restore was applied.
    pub fn settle_restore(&mut self, user: Option<User>) -> bool {
        if !self.loading {
            return false;
        }
        *self = Self::restored(user);
        true
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Role of the signed-in user, if any and if recognized.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }

    /// Display name of the signed-in user.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
