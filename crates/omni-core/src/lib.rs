//! # Omni-Core
//!
//! Core types and shared vocabulary for the Omni omnichannel
//! communication platform backend.

pub mod error;
pub mod persona;
pub mod types;

pub use error::{Error, Result};
pub use persona::*;
pub use types::*;
