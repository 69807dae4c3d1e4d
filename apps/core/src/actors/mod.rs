//! # Actor System
//!
//! Orchestration layer for the response engine: the remote generation
//! client, the local/remote response orchestrator, and the per-session turn
//! scheduler that owns the transcript and raises events to the presentation
//! collaborator.

pub mod messages;
pub mod orchestrator;
pub mod remote;
pub mod session;
pub mod traits;
