//! Domain layer - plan records and their display transformation.

pub mod plan;
