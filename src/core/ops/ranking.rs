//! Ranking operations - fetch, normalize, score

use tracing::debug;

use crate::core::primitives::{
    ScoreResult, WeightTable, normalize, simple_additive_weighting, weighted_product,
};
use crate::core::{CoreResult, OpContext};

/// Scoring method selectable from the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RankingMethod {
    /// Weighted Product
    Wp,
    /// Simple Additive Weighting
    Saw,
}

/// Rank every stored motorcycle with Weighted Product
pub async fn rank_weighted_product(ctx: &OpContext, weights: &WeightTable) -> CoreResult<Vec<ScoreResult>> {
    let records = ctx.records.fetch_all().await?;
    let batch = normalize(&records)?;
    let results = weighted_product(&batch, weights);
    debug!("Weighted Product ranked {} records", results.len());
    Ok(results)
}

/// Rank every stored motorcycle with Simple Additive Weighting
pub async fn rank_simple_additive(ctx: &OpContext, weights: &WeightTable) -> CoreResult<Vec<ScoreResult>> {
    let records = ctx.records.fetch_all().await?;
    let batch = normalize(&records)?;
    let results = simple_additive_weighting(&batch, weights, ctx.saw_weighting);
    debug!(
        "SAW ranked {} records ({:?} weighting)",
        results.len(),
        ctx.saw_weighting
    );
    Ok(results)
}

pub async fn rank(ctx: &OpContext, method: RankingMethod, weights: &WeightTable) -> CoreResult<Vec<ScoreResult>> {
    match method {
        RankingMethod::Wp => rank_weighted_product(ctx, weights).await,
        RankingMethod::Saw => rank_simple_additive(ctx, weights).await,
    }
}
