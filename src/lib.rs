//! Chat Relay - HTTP relay between a browser chat page and Google Gemini.
//!
//! Each caller-chosen session id maps to one ongoing conversation whose
//! history is kept in memory and replayed to the model on every message.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
