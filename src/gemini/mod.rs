pub mod client;
pub mod types;

pub use client::{GeminiClient, GeminiError, TextGenerator};
pub use types::{GenerateRequest, GenerateResponse};
