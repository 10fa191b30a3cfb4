//! Weighted Product and Simple Additive Weighting scorers
//!
//! Both take an already-normalized batch and return one result per record,
//! highest score first.

use serde::Serialize;

use super::limits::{SCORE_DECIMALS, round_to};
use super::normalize::NormalizedRecord;
use super::weights::WeightTable;
use crate::motor::Attribute;

/// Score for one motorcycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub id: i64,
    pub score: f64,
}

/// Which weight the SAW `cc` term is multiplied by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SawWeighting {
    /// Every criterion uses its own normalized weight
    #[default]
    Standard,
    /// `cc` is weighted by `harga`'s normalized weight, matching older deployments
    LegacyCcUsesHarga,
}

impl SawWeighting {
    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy {
            SawWeighting::LegacyCcUsesHarga
        } else {
            SawWeighting::Standard
        }
    }
}

/// Stable sort, highest score first
fn rank_descending(results: &mut [ScoreResult]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Product of each normalized value raised to its raw weight.
///
/// Raw weights are exponents; they are not rescaled to sum to one.
pub fn weighted_product(batch: &[NormalizedRecord], weights: &WeightTable) -> Vec<ScoreResult> {
    let mut results: Vec<ScoreResult> = batch
        .iter()
        .map(|row| ScoreResult {
            id: row.id,
            score: Attribute::ALL
                .into_iter()
                .map(|attr| row.value(attr).powf(weights.raw(attr)))
                .product(),
        })
        .collect();

    rank_descending(&mut results);
    for result in &mut results {
        result.score = round_to(result.score, SCORE_DECIMALS);
    }
    results
}

/// Sum of each normalized value times its normalized weight
pub fn simple_additive_weighting(
    batch: &[NormalizedRecord],
    weights: &WeightTable,
    mode: SawWeighting,
) -> Vec<ScoreResult> {
    let normalized = weights.normalized();
    let weight_for = |attr: Attribute| match (mode, attr) {
        (SawWeighting::LegacyCcUsesHarga, Attribute::Cc) => normalized.get(Attribute::Harga),
        _ => normalized.get(attr),
    };

    let mut results: Vec<ScoreResult> = batch
        .iter()
        .map(|row| ScoreResult {
            id: row.id,
            score: round_to(
                Attribute::ALL
                    .into_iter()
                    .map(|attr| row.value(attr) * weight_for(attr))
                    .sum(),
                SCORE_DECIMALS,
            ),
        })
        .collect();

    rank_descending(&mut results);
    results
}
