//! Supplementary resources for medium-tier check-ins.
//!
//! The text-generation service answers in free-form prose. Lines are sorted
//! into books, activities and videos by prefix heuristics; nothing about the
//! reply format is guaranteed, so anything unrecognised is kept as plain text.

pub mod classify;
pub mod prompt;

pub use classify::{classify_line, classify_recommendations, Category, Recommendation};
pub use prompt::{build_summary, build_user_prompt, SYSTEM_PROMPT};
