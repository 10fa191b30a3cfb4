// src/motor/mod.rs
// Motorcycle records and the store they are read from

pub mod store;
pub mod types;

pub use store::{MemoryMotorStore, MotorRepository, SqliteMotorStore};
pub use types::{Attribute, CriterionKind, MotorRecord};
