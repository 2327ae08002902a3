//! Application handlers.

pub mod plan;
