//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Split by concern so the landing page, the modal, and the home view each
//! depend on a small model: `auth` (reactive current user), `profile`
//! (persisted record), `session` (entry operations over the store),
//! `auth_flow` (modal state machine), and `submission` (modal payloads).

pub mod auth;
pub mod auth_flow;
pub mod profile;
pub mod session;
pub mod submission;
