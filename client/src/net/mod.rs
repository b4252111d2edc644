//! Networking modules for the grievance backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the auth REST calls used by the session provider and auth
//! pages; `types` defines the shared wire schema.

pub mod api;
pub mod types;
