//! Campus Gemini - Gemini integration for answer generation.
//!
//! This crate provides an async client for the Gemini API and the answer
//! pipeline that grounds model responses in the loaded university documents.

mod assistant;
mod client;
mod error;
mod generator;
pub mod prompts;
mod types;

pub use assistant::Assistant;
pub use client::GeminiClient;
pub use error::{GeminiError, GeminiResult};
pub use generator::TextGenerator;
pub use types::*;
