//! Wire contract shared by every screen of the production-planning client.
//!
//! Mirrors the JSON shapes of the backend REST service. The client never
//! invents authoritative values; these types only carry what the server
//! sends plus the request DTOs it accepts.

pub mod common;
pub mod domain;
pub mod system;
