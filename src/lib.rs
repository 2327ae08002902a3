//! Plan Catalog - DTH subscription plan catalog service.
//!
//! This crate fetches subscription plans from a hosted document store,
//! normalizes them into display form, and serves them as JSON and as
//! server-rendered HTML plan cards.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
