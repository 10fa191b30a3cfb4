//! Batch normalization of raw motorcycle attributes
//!
//! Benefit criteria are divided by the batch maximum, the cost criterion
//! (berat) is the batch minimum divided by the value. Every record must be
//! normalized against bounds taken from the same fetch.

use serde::Serialize;

use crate::core::{CoreError, CoreResult};
use crate::motor::{Attribute, CriterionKind, MotorRecord};

/// A record with every criterion rescaled; id is preserved
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub id: i64,
    pub cc: f64,
    pub harga: f64,
    pub speed: f64,
    pub berat: f64,
    pub kapasitas_tangkibensin: f64,
}

impl NormalizedRecord {
    pub fn value(&self, attr: Attribute) -> f64 {
        match attr {
            Attribute::Cc => self.cc,
            Attribute::Harga => self.harga,
            Attribute::Speed => self.speed,
            Attribute::Berat => self.berat,
            Attribute::KapasitasTangkiBensin => self.kapasitas_tangkibensin,
        }
    }
}

/// Per-column max and min over one batch
struct ColumnBounds {
    max: [f64; 5],
    min: [f64; 5],
}

impl ColumnBounds {
    fn scan(records: &[MotorRecord]) -> Self {
        let mut max = [f64::NEG_INFINITY; 5];
        let mut min = [f64::INFINITY; 5];
        for record in records {
            for attr in Attribute::ALL {
                let v = record.value(attr);
                let i = attr as usize;
                max[i] = max[i].max(v);
                min[i] = min[i].min(v);
            }
        }
        Self { max, min }
    }

    fn rescale(&self, record: &MotorRecord, attr: Attribute) -> f64 {
        let v = record.value(attr);
        let i = attr as usize;
        match attr.kind() {
            // an all-zero column carries no information
            CriterionKind::Benefit if self.max[i] == 0.0 => 0.0,
            CriterionKind::Benefit => v / self.max[i],
            CriterionKind::Cost if v == 0.0 => 0.0,
            CriterionKind::Cost => self.min[i] / v,
        }
    }
}

/// Normalize a whole fetch batch, preserving input order.
///
/// Fails with [`CoreError::EmptyBatch`] when there is nothing to normalize.
pub fn normalize(records: &[MotorRecord]) -> CoreResult<Vec<NormalizedRecord>> {
    if records.is_empty() {
        return Err(CoreError::EmptyBatch);
    }

    let bounds = ColumnBounds::scan(records);
    Ok(records
        .iter()
        .map(|r| NormalizedRecord {
            id: r.id,
            cc: bounds.rescale(r, Attribute::Cc),
            harga: bounds.rescale(r, Attribute::Harga),
            speed: bounds.rescale(r, Attribute::Speed),
            berat: bounds.rescale(r, Attribute::Berat),
            kapasitas_tangkibensin: bounds.rescale(r, Attribute::KapasitasTangkiBensin),
        })
        .collect())
}
