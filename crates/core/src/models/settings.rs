use serde::{Deserialize, Serialize};

use super::alert::NewsAlertKind;
use crate::errors::DashboardError;

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Default time window of performance charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartPeriod {
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    #[default]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

/// Default chart rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Area,
}

/// User-configurable display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The currency in which all values are displayed (e.g., "USD", "EUR").
    pub default_currency: String,

    pub theme: Theme,

    pub default_chart_period: ChartPeriod,

    pub default_chart_type: ChartType,

    /// Show large numbers as 28.46M instead of 28,456,789.
    pub compact_numbers: bool,

    pub notifications: NotificationPreferences,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_currency: "USD".to_string(),
            theme: Theme::default(),
            default_chart_period: ChartPeriod::default(),
            default_chart_type: ChartType::default(),
            compact_numbers: false,
            notifications: NotificationPreferences::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take defaults, unknown ones are ignored.
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.default_currency = settings.default_currency.to_uppercase();
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, DashboardError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            DashboardError::Serialization(format!("Failed to serialize settings: {e}"))
        })
    }

    /// Set the display currency. Must be a 3-letter alphabetic code.
    pub fn set_default_currency(&mut self, currency: &str) -> Result<(), DashboardError> {
        validate_currency(currency)?;
        self.default_currency = currency.to_uppercase();
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        validate_currency(&self.default_currency)
    }
}

/// Which alerts reach the user, and through which channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub price_alerts: bool,
    pub earnings_reports: bool,
    pub market_news: bool,
    /// Weekly portfolio summary digest.
    pub portfolio_summary: bool,
    pub email: bool,
    pub push: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            price_alerts: true,
            earnings_reports: true,
            market_news: true,
            portfolio_summary: false,
            email: true,
            push: true,
        }
    }
}

impl NotificationPreferences {
    /// Whether news alerts of this kind are switched on.
    pub fn allows_news(&self, kind: NewsAlertKind) -> bool {
        match kind {
            NewsAlertKind::Earnings => self.earnings_reports,
            NewsAlertKind::News | NewsAlertKind::AnalystRatings => self.market_news,
        }
    }

    /// At least one delivery channel is enabled.
    pub fn has_channel(&self) -> bool {
        self.email || self.push
    }
}

fn validate_currency(currency: &str) -> Result<(), DashboardError> {
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DashboardError::InvalidSettings(format!(
            "Currency code must be 3 letters, got '{currency}'"
        )));
    }
    Ok(())
}
