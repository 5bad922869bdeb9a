//! # Omni-Conversations
//!
//! Conversation threads for the unified inbox: the thread model itself,
//! pure filtering/sorting queries over it, and an async in-memory store.

pub mod conversation;
pub mod query;
pub mod store;

pub use conversation::*;
pub use query::*;
pub use store::*;
