//! API endpoint handlers for the webjars server.

pub mod assets;
pub mod system;
