use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::query::TableSchema;
use super::record::{record_fields, Contribution, FieldValue, Record};

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeKind {
    Buy,
    Sell,
}

impl TradeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeKind::Buy => "buy",
            TradeKind::Sell => "sell",
        }
    }
}

impl std::fmt::Display for TradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

record_fields! {
    /// Columns of the transactions table.
    TransactionField in "transactions" {
        Id => "id",
        Date => "date",
        Ticker => "ticker",
        Kind => "type",
        Shares => "shares",
        Price => "price",
        Total => "total",
    }
}

/// A single executed trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub date: NaiveDate,
    pub ticker: String,
    #[serde(rename = "type")]
    pub kind: TradeKind,
    pub shares: f64,
    pub price: f64,
    /// shares × price
    pub total: f64,
}

impl Transaction {
    pub fn new(
        id: u32,
        date: NaiveDate,
        ticker: impl Into<String>,
        kind: TradeKind,
        shares: f64,
        price: f64,
    ) -> Self {
        Self {
            id,
            date,
            ticker: ticker.into().to_uppercase(),
            kind,
            shares,
            price,
            total: shares * price,
        }
    }
}

impl Record for Transaction {
    type Field = TransactionField;
    const DATASET: &'static str = "transactions";

    fn field(&self, field: TransactionField) -> FieldValue<'_> {
        match field {
            TransactionField::Id => FieldValue::Number(f64::from(self.id)),
            TransactionField::Date => FieldValue::Date(self.date.and_time(NaiveTime::MIN)),
            TransactionField::Ticker => FieldValue::Text(&self.ticker),
            TransactionField::Kind => FieldValue::Text(self.kind.as_str()),
            TransactionField::Shares => FieldValue::Number(self.shares),
            TransactionField::Price => FieldValue::Number(self.price),
            TransactionField::Total => FieldValue::Number(self.total),
        }
    }

    fn columns() -> &'static [TransactionField] {
        TransactionField::ALL
    }

    fn schema() -> TableSchema<TransactionField> {
        use TransactionField::*;
        TableSchema::new(vec![Ticker], vec![Date, Ticker, Kind, Shares, Price, Total])
            .with_category(Kind)
            .with_default_sort(Date)
    }

    fn contribution(&self) -> Contribution {
        Contribution {
            value: self.total,
            gain: 0.0,
        }
    }
}
