//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notifications`, `theme`) and each
//! piece is provided once from `App` as an `RwSignal`, so components depend
//! only on the slices they read.

pub mod notifications;
pub mod session;
pub mod theme;
