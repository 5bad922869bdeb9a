//! # Omni-API
//!
//! REST API server for the Omni dashboard and onboarding flow.
//!
//! ## Endpoints
//!
//! - `POST /api/profile-summary` - Synthesize an onboarding profile summary
//! - `GET /api/profile-summary?name=` - Same, for quick manual checks
//! - `GET /api/health` - Health check
//! - `GET /api/channels` - Channel catalog
//! - `GET /api/personas` - Agent persona catalog
//! - `GET /api/conversations` - Filtered/sorted inbox listing
//! - `GET /api/conversations/{id}` - One conversation
//! - `GET /api/voice-sessions` - Voice session index
//! - `GET /api/voice-sessions/{id}/timeline` - Bucketed emotion timeline
//!
//! The profile-summary endpoints are deliberately total: they answer 200
//! for any input, substituting a fallback name where needed, and hold each
//! response for a configured minimum latency to mimic the slower real
//! backend the dashboard talks to in production.

pub mod config;
pub mod demo;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use config::*;
pub use error::ApiError;
pub use server::*;
pub use state::*;
