//! # Omni-Profile
//!
//! Deterministic "profile summary" synthesis for the onboarding flow.
//!
//! Given a member's name, the synthesizer picks one sentence from each of
//! four fixed template pools using a seeded hash of the name, substitutes
//! the name into the chosen templates, and joins the results into a short
//! two-paragraph summary. The same name always produces the same summary;
//! there is no randomness and no model call behind it.

pub mod seed;
pub mod synthesizer;
pub mod templates;

pub use seed::*;
pub use synthesizer::*;
pub use templates::*;
