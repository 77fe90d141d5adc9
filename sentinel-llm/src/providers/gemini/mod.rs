//! Gemini synthesis provider

mod client;
mod synthesis;
pub mod types;

pub use client::GeminiClient;
pub use synthesis::GeminiSynthesisProvider;
