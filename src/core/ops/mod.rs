//! Core operations - shared by the HTTP handlers and the CLI
//!
//! # Conventions
//!
//! - Operations take `&OpContext` as first parameter
//! - Operations return `CoreResult<T>`
//! - No axum or clap-specific types in signatures, apart from the
//!   `RankingMethod` value enum

pub mod listing;
pub mod ranking;
