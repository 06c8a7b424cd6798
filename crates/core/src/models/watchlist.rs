use serde::{Deserialize, Serialize};

use super::query::TableSchema;
use super::record::{record_fields, FieldValue, Record};

record_fields! {
    /// Columns of the watchlist table.
    WatchlistField in "watchlist" {
        Ticker => "ticker",
        Name => "name",
        Price => "price",
        Change => "change",
        ChangePercent => "changePercent",
        Volume => "volume",
        MarketCap => "marketCap",
        Pe => "pe",
        HasAlert => "hasAlert",
    }
}

/// A monitored (not held) security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub ticker: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    /// Shares traded today
    pub volume: u64,
    /// Market capitalization in billions
    pub market_cap: f64,
    pub pe: f64,
    pub has_alert: bool,
}

impl WatchlistEntry {
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}

impl Record for WatchlistEntry {
    type Field = WatchlistField;
    const DATASET: &'static str = "watchlist";

    fn field(&self, field: WatchlistField) -> FieldValue<'_> {
        match field {
            WatchlistField::Ticker => FieldValue::Text(&self.ticker),
            WatchlistField::Name => FieldValue::Text(&self.name),
            WatchlistField::Price => FieldValue::Number(self.price),
            WatchlistField::Change => FieldValue::Number(self.change),
            WatchlistField::ChangePercent => FieldValue::Number(self.change_percent),
            WatchlistField::Volume => FieldValue::Number(self.volume as f64),
            WatchlistField::MarketCap => FieldValue::Number(self.market_cap),
            WatchlistField::Pe => FieldValue::Number(self.pe),
            WatchlistField::HasAlert => FieldValue::Number(if self.has_alert { 1.0 } else { 0.0 }),
        }
    }

    fn columns() -> &'static [WatchlistField] {
        WatchlistField::ALL
    }

    // No default sort: the watchlist shows entries in the order they were added.
    fn schema() -> TableSchema<WatchlistField> {
        use WatchlistField::*;
        TableSchema::new(
            vec![Ticker, Name],
            vec![Ticker, Name, Price, Change, ChangePercent, Volume, MarketCap, Pe],
        )
    }
}
