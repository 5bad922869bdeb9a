//! # Omni-Voice
//!
//! Voice session data for the dashboard: per-utterance emotion samples and
//! the bucketed emotion timeline the session view renders.
//!
//! The actual speech and emotion inference run in the external voice
//! backend; this crate only models the exported samples and aggregates
//! them into fixed-width timeline buckets.

pub mod emotion;
pub mod session;
pub mod timeline;

pub use emotion::*;
pub use session::*;
pub use timeline::*;
