//! Mental-wellness check-in.
//!
//! A short questionnaire is scored into a 0-10 wellness score and a triage
//! [`scoring::Tier`]. Medium-tier results are followed up with resources from
//! a text-generation service; completed check-ins and daily moods are kept in
//! a local [`journal`].

pub mod browser;
pub mod checkin;
pub mod config;
pub mod credentials;
pub mod gemini;
pub mod journal;
pub mod output;
pub mod recommend;
pub mod scoring;
pub mod survey;
