use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;
use crate::format::{format_short_date, NumberFormat};

use super::query::TableSchema;
use super::record::{record_fields, FieldValue, Record};

/// Tab of the alerts panel an alert belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertTab {
    Price,
    News,
    Events,
}

impl std::fmt::Display for AlertTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertTab::Price => write!(f, "price"),
            AlertTab::News => write!(f, "news"),
            AlertTab::Events => write!(f, "event"),
        }
    }
}

/// On/off switch shared by every alert kind.
pub trait Switchable {
    fn id(&self) -> u32;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

// ── Price alerts ────────────────────────────────────────────────────

/// Trigger side of a price alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCondition {
    Above,
    Below,
}

impl std::fmt::Display for AlertCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertCondition::Above => write!(f, "above"),
            AlertCondition::Below => write!(f, "below"),
        }
    }
}

/// A user-defined price threshold on a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAlert {
    pub id: u32,
    pub ticker: String,
    pub condition: AlertCondition,
    pub price: f64,
    pub active: bool,
}

impl PriceAlert {
    pub fn new(id: u32, ticker: impl Into<String>, condition: AlertCondition, price: f64) -> Self {
        Self {
            id,
            ticker: ticker.into().to_uppercase(),
            condition,
            price,
            active: true,
        }
    }

    /// Whether `market_price` satisfies the threshold. Inactive alerts never fire.
    pub fn is_met(&self, market_price: f64) -> bool {
        if !self.active {
            return false;
        }
        match self.condition {
            AlertCondition::Above => market_price > self.price,
            AlertCondition::Below => market_price < self.price,
        }
    }

    /// "Alert when price goes above $180.00"
    pub fn summary(&self, money: &NumberFormat) -> String {
        format!(
            "Alert when price goes {} {}",
            self.condition,
            money.format(self.price)
        )
    }
}

impl Switchable for PriceAlert {
    fn id(&self) -> u32 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

// ── News alerts ─────────────────────────────────────────────────────

/// What a news alert watches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsAlertKind {
    Earnings,
    News,
    AnalystRatings,
}

impl NewsAlertKind {
    pub fn description(self) -> &'static str {
        match self {
            NewsAlertKind::Earnings => "earnings reports",
            NewsAlertKind::News => "major news",
            NewsAlertKind::AnalystRatings => "analyst ratings",
        }
    }
}

/// Subscription to company news for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsAlert {
    pub id: u32,
    pub ticker: String,
    #[serde(rename = "type")]
    pub kind: NewsAlertKind,
    pub active: bool,
}

impl NewsAlert {
    pub fn new(id: u32, ticker: impl Into<String>, kind: NewsAlertKind) -> Self {
        Self {
            id,
            ticker: ticker.into().to_uppercase(),
            kind,
            active: true,
        }
    }

    /// "Alert on earnings reports"
    pub fn summary(&self) -> String {
        format!("Alert on {}", self.kind.description())
    }
}

impl Switchable for NewsAlert {
    fn id(&self) -> u32 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

// ── Event reminders ─────────────────────────────────────────────────

/// Reminder for a scheduled company event (earnings call, dividend, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAlert {
    pub id: u32,
    pub ticker: String,
    pub event: String,
    pub date: NaiveDate,
    pub active: bool,
}

impl EventAlert {
    pub fn new(
        id: u32,
        ticker: impl Into<String>,
        event: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            ticker: ticker.into().to_uppercase(),
            event: event.into(),
            date,
            active: true,
        }
    }

    /// "MSFT: Earnings Call"
    pub fn headline(&self) -> String {
        format!("{}: {}", self.ticker, self.event)
    }

    /// "Scheduled for Apr 25"
    pub fn schedule_line(&self) -> String {
        format!("Scheduled for {}", format_short_date(self.date))
    }
}

impl Switchable for EventAlert {
    fn id(&self) -> u32 {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

// ── Alert book ──────────────────────────────────────────────────────

/// Every configured alert, one list per panel tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertBook {
    pub price: Vec<PriceAlert>,
    pub news: Vec<NewsAlert>,
    pub events: Vec<EventAlert>,
}

impl AlertBook {
    pub fn new(price: Vec<PriceAlert>, news: Vec<NewsAlert>, events: Vec<EventAlert>) -> Self {
        Self {
            price,
            news,
            events,
        }
    }

    /// Flip the active switch of an alert on one tab. Returns the new state.
    pub fn toggle(&mut self, tab: AlertTab, id: u32) -> Result<bool, DashboardError> {
        let active = match tab {
            AlertTab::Price => toggle_in(&mut self.price, tab, id)?,
            AlertTab::News => toggle_in(&mut self.news, tab, id)?,
            AlertTab::Events => toggle_in(&mut self.events, tab, id)?,
        };
        tracing::debug!(tab = %tab, id, active, "alert toggled");
        Ok(active)
    }

    pub fn active_count(&self, tab: AlertTab) -> usize {
        match tab {
            AlertTab::Price => count_active(&self.price),
            AlertTab::News => count_active(&self.news),
            AlertTab::Events => count_active(&self.events),
        }
    }

    pub fn total_active(&self) -> usize {
        [AlertTab::Price, AlertTab::News, AlertTab::Events]
            .into_iter()
            .map(|tab| self.active_count(tab))
            .sum()
    }

    /// Active price alerts whose condition holds for the given ticker price.
    pub fn met_by<'a>(&'a self, ticker: &str, market_price: f64) -> Vec<&'a PriceAlert> {
        self.price
            .iter()
            .filter(|a| a.ticker.eq_ignore_ascii_case(ticker) && a.is_met(market_price))
            .collect()
    }

    /// Active event reminders on or after `today`, soonest first.
    pub fn upcoming_events(&self, today: NaiveDate) -> Vec<&EventAlert> {
        let mut events: Vec<&EventAlert> = self
            .events
            .iter()
            .filter(|e| e.active && e.date >= today)
            .collect();
        events.sort_by_key(|e| e.date);
        events
    }
}

fn toggle_in<A: Switchable>(
    alerts: &mut [A],
    tab: AlertTab,
    id: u32,
) -> Result<bool, DashboardError> {
    let alert = alerts
        .iter_mut()
        .find(|a| a.id() == id)
        .ok_or_else(|| DashboardError::NotFound(format!("{tab} alert {id}")))?;
    let active = !alert.is_active();
    alert.set_active(active);
    Ok(active)
}

fn count_active<A: Switchable>(alerts: &[A]) -> usize {
    alerts.iter().filter(|a| a.is_active()).count()
}

// ── Alert history ───────────────────────────────────────────────────

/// Outcome recorded for a past alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Triggered,
    Delivered,
}

impl AlertStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertStatus::Triggered => "triggered",
            AlertStatus::Delivered => "delivered",
        }
    }
}

record_fields! {
    /// Columns of the alert history table.
    AlertHistoryField in "alert_history" {
        Id => "id",
        Date => "date",
        Ticker => "ticker",
        Kind => "type",
        Message => "message",
        Status => "status",
    }
}

/// A past alert as shown in the history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertHistoryEntry {
    pub id: u32,
    pub date: NaiveDateTime,
    pub ticker: String,
    /// "price", "earnings", "news", "analyst"
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub status: AlertStatus,
}

impl Record for AlertHistoryEntry {
    type Field = AlertHistoryField;
    const DATASET: &'static str = "alert_history";

    fn field(&self, field: AlertHistoryField) -> FieldValue<'_> {
        match field {
            AlertHistoryField::Id => FieldValue::Number(f64::from(self.id)),
            AlertHistoryField::Date => FieldValue::Date(self.date),
            AlertHistoryField::Ticker => FieldValue::Text(&self.ticker),
            AlertHistoryField::Kind => FieldValue::Text(&self.kind),
            AlertHistoryField::Message => FieldValue::Text(&self.message),
            AlertHistoryField::Status => FieldValue::Text(self.status.as_str()),
        }
    }

    fn columns() -> &'static [AlertHistoryField] {
        AlertHistoryField::ALL
    }

    fn schema() -> TableSchema<AlertHistoryField> {
        use AlertHistoryField::*;
        TableSchema::new(vec![Ticker, Message], vec![Date, Ticker, Kind, Status])
            .with_category(Kind)
            .with_default_sort(Date)
    }
}
