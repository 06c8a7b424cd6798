use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Target weight of one sector in the allocation pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorWeight {
    pub name: String,
    /// Percent of the portfolio
    pub weight: f64,
}

/// Weight of a single position inside a sector drill-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionWeight {
    pub name: String,
    pub weight: f64,
}

/// Sector pie plus its per-sector drill-down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorAllocation {
    pub sectors: Vec<SectorWeight>,
    pub positions: HashMap<String, Vec<PositionWeight>>,
}

impl SectorAllocation {
    /// Positions of one sector, empty when the sector is unknown.
    pub fn stocks_in(&self, sector: &str) -> &[PositionWeight] {
        self.positions.get(sector).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_weight(&self) -> f64 {
        self.sectors.iter().map(|s| s.weight).sum()
    }

    /// The heaviest sector, if any.
    pub fn largest(&self) -> Option<&SectorWeight> {
        self.sectors.iter().max_by(|a, b| {
            a.weight
                .partial_cmp(&b.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}
