//! Adapters - Implementations of port interfaces and delivery mechanisms.
//!
//! - `store` - Plan store implementations (Firestore REST, in-memory)
//! - `render` - HTML card rendering for server-rendered plan fragments
//! - `http` - Axum endpoints exposing the plan catalog

pub mod http;
pub mod render;
pub mod store;
