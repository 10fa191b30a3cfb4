//! Criterion weights
//!
//! Raw weights are the caller-facing numbers (exponents in Weighted Product).
//! Normalized weights divide each raw weight by the total and are used by
//! Simple Additive Weighting. A table is built per request and never mutated.

use serde::Serialize;
use std::collections::BTreeMap;

use super::limits::{WEIGHT_DECIMALS, round_to};
use crate::core::{CoreError, CoreResult};
use crate::motor::Attribute;

/// Validated raw weight per criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightTable {
    cc: f64,
    harga: f64,
    speed: f64,
    berat: f64,
    kapasitas_tangkibensin: f64,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            cc: 3.0,
            harga: 4.0,
            speed: 4.0,
            berat: 3.0,
            kapasitas_tangkibensin: 3.0,
        }
    }
}

impl WeightTable {
    /// Build a table from explicit values, rejecting negative, non-finite or all-zero weights
    pub fn try_new(cc: f64, harga: f64, speed: f64, berat: f64, kapasitas_tangkibensin: f64) -> CoreResult<Self> {
        let table = Self {
            cc,
            harga,
            speed,
            berat,
            kapasitas_tangkibensin,
        };

        for attr in Attribute::ALL {
            let w = table.raw(attr);
            if !w.is_finite() || w < 0.0 {
                return Err(CoreError::InvalidWeight(format!(
                    "'{attr}' must be a finite non-negative number, got {w}"
                )));
            }
        }
        let total = table.total();
        if total == 0.0 {
            return Err(CoreError::InvalidWeight("weights must not all be zero".into()));
        }
        if !total.is_finite() {
            return Err(CoreError::InvalidWeight(format!("weights total overflows: {total}")));
        }

        Ok(table)
    }

    /// Build a table from a caller-supplied mapping of attribute key to raw weight.
    ///
    /// Every attribute must be present and no other keys are accepted.
    pub fn from_raw(map: &BTreeMap<String, f64>) -> CoreResult<Self> {
        if let Some(unknown) = map.keys().find(|k| k.parse::<Attribute>().is_err()) {
            return Err(CoreError::UnknownKey(unknown.clone()));
        }

        let get = |attr: Attribute| map.get(attr.key()).copied().ok_or(CoreError::MissingKey(attr));
        Self::try_new(
            get(Attribute::Cc)?,
            get(Attribute::Harga)?,
            get(Attribute::Speed)?,
            get(Attribute::Berat)?,
            get(Attribute::KapasitasTangkiBensin)?,
        )
    }

    pub fn raw(&self, attr: Attribute) -> f64 {
        match attr {
            Attribute::Cc => self.cc,
            Attribute::Harga => self.harga,
            Attribute::Speed => self.speed,
            Attribute::Berat => self.berat,
            Attribute::KapasitasTangkiBensin => self.kapasitas_tangkibensin,
        }
    }

    fn total(&self) -> f64 {
        Attribute::ALL.into_iter().map(|a| self.raw(a)).sum()
    }

    /// Each raw weight over the total, rounded to two decimals
    pub fn normalized(&self) -> NormalizedWeights {
        let total = self.total();
        let mut weights = [0.0; 5];
        for attr in Attribute::ALL {
            weights[attr as usize] = round_to(self.raw(attr) / total, WEIGHT_DECIMALS);
        }
        NormalizedWeights(weights)
    }
}

/// Weights as proportions of the total
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedWeights([f64; 5]);

impl NormalizedWeights {
    pub fn get(&self, attr: Attribute) -> f64 {
        self.0[attr as usize]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}
