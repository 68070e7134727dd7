//! mindcare-audit
//!
//! Structured audit events for user-facing actions, emitted via `tracing`.

pub mod events;
