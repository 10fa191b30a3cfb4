//! Core primitives - pure building blocks with no I/O
//!
//! Normalization, weights and the two scorers live here; `ops` wires them to
//! a record source.

pub mod limits;
pub mod normalize;
pub mod scoring;
pub mod weights;

pub use limits::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, LISTING_URL, round_to};
pub use normalize::{NormalizedRecord, normalize};
pub use scoring::{SawWeighting, ScoreResult, simple_additive_weighting, weighted_product};
pub use weights::{NormalizedWeights, WeightTable};
