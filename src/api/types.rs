// src/api/types.rs
// Wire shapes for the ranking and health endpoints

use serde::{Deserialize, Serialize};

use crate::core::primitives::ScoreResult;

/// Weighted Product entry: `{"ID": .., "score": ..}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WpEntry {
    #[serde(rename = "ID")]
    pub id: i64,
    pub score: f64,
}

impl From<ScoreResult> for WpEntry {
    fn from(r: ScoreResult) -> Self {
        Self { id: r.id, score: r.score }
    }
}

/// Simple Additive Weighting entry: `{"id": .., "Score": ..}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SawEntry {
    pub id: i64,
    #[serde(rename = "Score")]
    pub score: f64,
}

impl From<ScoreResult> for SawEntry {
    fn from(r: ScoreResult) -> Self {
        Self { id: r.id, score: r.score }
    }
}

/// Body returned by the POST ranking endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResponse<T> {
    #[serde(rename = "MotorSport")]
    pub motor_sport: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub records: i64,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_key_casing() {
        let result = ScoreResult { id: 2, score: 0.75131 };
        let wp = serde_json::to_value(WpEntry::from(result)).unwrap();
        let saw = serde_json::to_value(SawEntry::from(result)).unwrap();
        assert_eq!(wp, serde_json::json!({"ID": 2, "score": 0.75131}));
        assert_eq!(saw, serde_json::json!({"id": 2, "Score": 0.75131}));
    }

    #[test]
    fn test_ranking_response_envelope() {
        let body = RankingResponse {
            motor_sport: vec![SawEntry { id: 1, score: 0.5 }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["MotorSport"][0]["Score"], 0.5);
    }
}
