//! # MindfulAI Conversational Response Engine
//!
//! Core chat logic for the MindfulAI wellness companion. A user types free
//! text, the engine classifies intent/affect, selects a local reply or
//! generates one remotely, and signals a side-channel advisory for
//! crisis-indicating content.
//!
//! Presentation, mood tracking, static resources and identity management are
//! external collaborators: they drive [`SessionHandle`] and consume
//! [`EngineEvent`] notifications.
//!
//! ## Components
//! - `brain`: category classification, reply candidates, crisis detection
//! - `actors`: remote generation client, response orchestrator, turn scheduler
//! - `config`: validated, immutable engine configuration
//! - `models`: messages, generation results, engine replies
//! - `error`: engine-wide error type

pub mod actors;
pub mod brain;
pub mod config;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use actors::messages::{EngineEvent, SessionMessage, CRISIS_ADVISORY_TEXT};
pub use actors::orchestrator::ResponseEngine;
pub use actors::remote::GeminiClient;
pub use actors::session::{thinking_delay, SessionHandle};
pub use actors::traits::RemoteGenerator;
pub use brain::{detects_crisis_signal, Category, IntentClassifier, ResponseBank};
pub use config::{GenerationParams, RemoteConfig};
pub use error::EngineError;
pub use models::{EngineReply, GenerationResult, Message, Sender};
