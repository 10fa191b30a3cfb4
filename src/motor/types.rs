// src/motor/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of the `pilihanmotor` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MotorRecord {
    pub id: i64,
    pub cc: i64,
    pub harga: i64,
    pub speed: i64,
    pub berat: i64,
    pub kapasitas_tangkibensin: i64,
}

impl MotorRecord {
    /// Raw value of one criterion as a float, ready for normalization
    pub fn value(&self, attr: Attribute) -> f64 {
        let raw = match attr {
            Attribute::Cc => self.cc,
            Attribute::Harga => self.harga,
            Attribute::Speed => self.speed,
            Attribute::Berat => self.berat,
            Attribute::KapasitasTangkiBensin => self.kapasitas_tangkibensin,
        };
        raw as f64
    }
}

/// Whether a criterion is maximized or minimized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKind {
    Benefit,
    Cost,
}

/// The five scored criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Cc,
    Harga,
    Speed,
    Berat,
    KapasitasTangkiBensin,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Cc,
        Attribute::Harga,
        Attribute::Speed,
        Attribute::Berat,
        Attribute::KapasitasTangkiBensin,
    ];

    /// Column name and JSON key
    pub fn key(self) -> &'static str {
        match self {
            Attribute::Cc => "cc",
            Attribute::Harga => "harga",
            Attribute::Speed => "speed",
            Attribute::Berat => "berat",
            Attribute::KapasitasTangkiBensin => "kapasitas_tangkibensin",
        }
    }

    /// Only weight is a cost; price counts as a benefit in this scheme
    pub fn kind(self) -> CriterionKind {
        match self {
            Attribute::Berat => CriterionKind::Cost,
            _ => CriterionKind::Benefit,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Attribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.key() == s)
            .ok_or_else(|| format!("unknown attribute: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_keys_round_trip() {
        for attr in Attribute::ALL {
            assert_eq!(attr.key().parse::<Attribute>(), Ok(attr));
        }
        assert!("torque".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_only_berat_is_cost() {
        let costs: Vec<_> = Attribute::ALL
            .into_iter()
            .filter(|a| a.kind() == CriterionKind::Cost)
            .collect();
        assert_eq!(costs, vec![Attribute::Berat]);
    }

    #[test]
    fn test_record_value_lookup() {
        let record = MotorRecord {
            id: 7,
            cc: 150,
            harga: 25000,
            speed: 140,
            berat: 110,
            kapasitas_tangkibensin: 5,
        };
        assert_eq!(record.value(Attribute::Harga), 25000.0);
        assert_eq!(record.value(Attribute::KapasitasTangkiBensin), 5.0);
    }

    #[test]
    fn test_record_json_uses_column_names() {
        let json = r#"{"id":1,"cc":100,"harga":20000,"speed":120,"berat":100,"kapasitas_tangkibensin":4}"#;
        let record: MotorRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.berat, 100);
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }
}
