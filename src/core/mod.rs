//! Core - motorcycle ranking logic, independent of transport
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     src/core/                        │
//! │  ┌─────────────┐  ┌─────────────┐                    │
//! │  │  OpContext  │  │  CoreError  │                    │
//! │  └─────────────┘  └─────────────┘                    │
//! │  ┌──────────────────────────────────────────────────┐│
//! │  │  ops/         ranking, listing                   ││
//! │  └──────────────────────────────────────────────────┘│
//! │  ┌──────────────────────────────────────────────────┐│
//! │  │  primitives/  normalize, weights, scoring, limits││
//! │  └──────────────────────────────────────────────────┘│
//! └──────────────────────────────────────────────────────┘
//!           │                         │
//!     ┌─────┴─────┐             ┌─────┴─────┐
//!     │  src/api  │             │ src/main  │
//!     │  (HTTP)   │             │  (CLI)    │
//!     └───────────┘             └───────────┘
//! ```

mod context;
mod error;
pub mod ops;
pub mod primitives;

pub use context::OpContext;
pub use error::{CoreError, CoreResult};
