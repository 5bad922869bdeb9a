//! Request handlers, grouped by resource.

pub mod conversations;
pub mod meta;
pub mod profile;
pub mod voice;
