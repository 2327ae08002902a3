//! Plan store adapters.

mod firestore_rest;
mod in_memory;

pub use firestore_rest::{FirestoreConfig, FirestoreRestStore};
pub use in_memory::InMemoryPlanStore;
