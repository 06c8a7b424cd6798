use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

/// Scores at or above this are healthy.
const GOOD_SCORE: u8 = 80;
/// Scores at or above this (and below `GOOD_SCORE`) need attention.
const FAIR_SCORE: u8 = 60;

/// Color band of a 0-100 health score bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Green
    Good,
    /// Yellow
    Fair,
    /// Red
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= GOOD_SCORE {
            ScoreBand::Good
        } else if score >= FAIR_SCORE {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

/// Risk label; a higher risk score means a safer portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        match ScoreBand::from_score(score) {
            ScoreBand::Good => RiskLevel::Low,
            ScoreBand::Fair => RiskLevel::Moderate,
            ScoreBand::Poor => RiskLevel::High,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebalanceStatus {
    Balanced,
    MinorAdjustments,
    RebalancingRecommended,
}

impl RebalanceStatus {
    pub fn from_score(score: u8) -> Self {
        match ScoreBand::from_score(score) {
            ScoreBand::Good => RebalanceStatus::Balanced,
            ScoreBand::Fair => RebalanceStatus::MinorAdjustments,
            ScoreBand::Poor => RebalanceStatus::RebalancingRecommended,
        }
    }
}

impl std::fmt::Display for RebalanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RebalanceStatus::Balanced => write!(f, "Balanced"),
            RebalanceStatus::MinorAdjustments => write!(f, "Minor Adjustments Needed"),
            RebalanceStatus::RebalancingRecommended => write!(f, "Rebalancing Recommended"),
        }
    }
}

/// Diversification, risk and rebalancing scores, each out of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioHealth {
    pub diversification: u8,
    pub risk: u8,
    pub rebalance: u8,
}

impl PortfolioHealth {
    pub fn new(diversification: u8, risk: u8, rebalance: u8) -> Result<Self, DashboardError> {
        for (name, score) in [
            ("diversification", diversification),
            ("risk", risk),
            ("rebalance", rebalance),
        ] {
            if score > 100 {
                return Err(DashboardError::ValidationError(format!(
                    "{name} score must be at most 100, got {score}"
                )));
            }
        }
        Ok(Self {
            diversification,
            risk,
            rebalance,
        })
    }

    pub fn diversification_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.diversification)
    }

    pub fn risk_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.risk)
    }

    pub fn rebalance_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.rebalance)
    }

    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk)
    }

    pub fn rebalance_status(&self) -> RebalanceStatus {
        RebalanceStatus::from_score(self.rebalance)
    }
}
