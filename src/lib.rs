// src/lib.rs

pub mod api;
pub mod config;
pub mod core;
pub mod motor;
pub mod server;
pub mod state;

pub use state::AppState;
