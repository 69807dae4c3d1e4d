//! # Brain Module
//!
//! Fast, local analysis system for MindfulAI.
//! Resolves user input to a reply without any remote call.
//!
//! ## Components
//! - `classifier`: category classification using an ordered regex rule table
//! - `responses`: pre-authored reply candidates per category
//! - `crisis`: output-side crisis marker detection

pub mod classifier;
pub mod crisis;
pub mod responses;

pub use classifier::{Category, IntentClassifier};
pub use crisis::detects_crisis_signal;
pub use responses::ResponseBank;
