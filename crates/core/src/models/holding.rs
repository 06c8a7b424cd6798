use serde::{Deserialize, Serialize};

use super::query::TableSchema;
use super::record::{record_fields, Contribution, FieldValue, Record};

/// Broad class of a held position. Each class has its own holdings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    /// Cryptocurrencies (BTC, ETH, etc.), fractional amounts
    Crypto,
    /// Individual equities (AAPL, MSFT, etc.)
    Stock,
    /// Exchange-traded funds (VOO, QQQ, etc.)
    Etf,
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetClass::Crypto => write!(f, "Crypto"),
            AssetClass::Stock => write!(f, "Stock"),
            AssetClass::Etf => write!(f, "ETF"),
        }
    }
}

// ── Crypto ──────────────────────────────────────────────────────────

record_fields! {
    /// Columns of the crypto holdings table.
    CryptoField in "crypto" {
        Symbol => "symbol",
        Name => "name",
        Amount => "amount",
        AvgPrice => "avgPrice",
        CurrentPrice => "currentPrice",
        Value => "value",
        Gain => "gain",
        GainPercent => "gainPercent",
        Category => "category",
        MarketCap => "marketCap",
        Volume24h => "volume24h",
    }
}

/// A cryptocurrency position. `gain` is the absolute gain of the whole position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoHolding {
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    pub avg_price: f64,
    pub current_price: f64,
    pub value: f64,
    pub gain: f64,
    pub gain_percent: f64,
    /// Market-cap bucket ("Large Cap", "Mid Cap", ...)
    pub category: String,
    /// Market capitalization in billions
    pub market_cap: f64,
    /// 24h trading volume in billions
    #[serde(rename = "volume24h")]
    pub volume_24h: f64,
}

impl Record for CryptoHolding {
    type Field = CryptoField;
    const DATASET: &'static str = "crypto";

    fn field(&self, field: CryptoField) -> FieldValue<'_> {
        match field {
            CryptoField::Symbol => FieldValue::Text(&self.symbol),
            CryptoField::Name => FieldValue::Text(&self.name),
            CryptoField::Amount => FieldValue::Number(self.amount),
            CryptoField::AvgPrice => FieldValue::Number(self.avg_price),
            CryptoField::CurrentPrice => FieldValue::Number(self.current_price),
            CryptoField::Value => FieldValue::Number(self.value),
            CryptoField::Gain => FieldValue::Number(self.gain),
            CryptoField::GainPercent => FieldValue::Number(self.gain_percent),
            CryptoField::Category => FieldValue::Text(&self.category),
            CryptoField::MarketCap => FieldValue::Number(self.market_cap),
            CryptoField::Volume24h => FieldValue::Number(self.volume_24h),
        }
    }

    fn columns() -> &'static [CryptoField] {
        CryptoField::ALL
    }

    fn schema() -> TableSchema<CryptoField> {
        use CryptoField::*;
        TableSchema::new(
            vec![Symbol, Name],
            vec![Symbol, Name, Amount, AvgPrice, CurrentPrice, Value, Gain, GainPercent],
        )
        .with_category(Category)
        .with_default_sort(Value)
    }

    fn contribution(&self) -> Contribution {
        Contribution {
            value: self.value,
            gain: self.gain,
        }
    }
}

// ── Stocks ──────────────────────────────────────────────────────────

record_fields! {
    /// Columns of the stock holdings table.
    StockField in "stocks" {
        Ticker => "ticker",
        Name => "name",
        Shares => "shares",
        AvgPrice => "avgPrice",
        CurrentPrice => "currentPrice",
        Value => "value",
        Gain => "gain",
        GainPercent => "gainPercent",
        Sector => "sector",
        LastUpdated => "lastUpdated",
        DividendYield => "dividendYield",
    }
}

/// An equity position. `gain` is per share; totals multiply it by `shares`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHolding {
    pub ticker: String,
    pub name: String,
    pub shares: f64,
    pub avg_price: f64,
    pub current_price: f64,
    pub value: f64,
    pub gain: f64,
    pub gain_percent: f64,
    pub sector: String,
    /// Display-only freshness label ("2 mins ago")
    pub last_updated: String,
    pub dividend_yield: f64,
}

impl Record for StockHolding {
    type Field = StockField;
    const DATASET: &'static str = "stocks";

    fn field(&self, field: StockField) -> FieldValue<'_> {
        match field {
            StockField::Ticker => FieldValue::Text(&self.ticker),
            StockField::Name => FieldValue::Text(&self.name),
            StockField::Shares => FieldValue::Number(self.shares),
            StockField::AvgPrice => FieldValue::Number(self.avg_price),
            StockField::CurrentPrice => FieldValue::Number(self.current_price),
            StockField::Value => FieldValue::Number(self.value),
            StockField::Gain => FieldValue::Number(self.gain),
            StockField::GainPercent => FieldValue::Number(self.gain_percent),
            StockField::Sector => FieldValue::Text(&self.sector),
            StockField::LastUpdated => FieldValue::Text(&self.last_updated),
            StockField::DividendYield => FieldValue::Number(self.dividend_yield),
        }
    }

    fn columns() -> &'static [StockField] {
        StockField::ALL
    }

    fn schema() -> TableSchema<StockField> {
        use StockField::*;
        TableSchema::new(
            vec![Ticker, Name],
            vec![Ticker, Name, Shares, AvgPrice, CurrentPrice, Value, Gain, GainPercent],
        )
        .with_category(Sector)
        .with_default_sort(Value)
    }

    fn contribution(&self) -> Contribution {
        Contribution {
            value: self.value,
            gain: self.gain * self.shares,
        }
    }
}

// ── ETFs ────────────────────────────────────────────────────────────

record_fields! {
    /// Columns of the ETF holdings table.
    EtfField in "etfs" {
        Ticker => "ticker",
        Name => "name",
        Shares => "shares",
        AvgPrice => "avgPrice",
        CurrentPrice => "currentPrice",
        Value => "value",
        Gain => "gain",
        GainPercent => "gainPercent",
        Category => "category",
        ExpenseRatio => "expenseRatio",
        DividendYield => "dividendYield",
    }
}

/// A fund position. `gain` is per share; totals multiply it by `shares`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtfHolding {
    pub ticker: String,
    pub name: String,
    pub shares: f64,
    pub avg_price: f64,
    pub current_price: f64,
    pub value: f64,
    pub gain: f64,
    pub gain_percent: f64,
    pub category: String,
    pub expense_ratio: f64,
    pub dividend_yield: f64,
}

impl Record for EtfHolding {
    type Field = EtfField;
    const DATASET: &'static str = "etfs";

    fn field(&self, field: EtfField) -> FieldValue<'_> {
        match field {
            EtfField::Ticker => FieldValue::Text(&self.ticker),
            EtfField::Name => FieldValue::Text(&self.name),
            EtfField::Shares => FieldValue::Number(self.shares),
            EtfField::AvgPrice => FieldValue::Number(self.avg_price),
            EtfField::CurrentPrice => FieldValue::Number(self.current_price),
            EtfField::Value => FieldValue::Number(self.value),
            EtfField::Gain => FieldValue::Number(self.gain),
            EtfField::GainPercent => FieldValue::Number(self.gain_percent),
            EtfField::Category => FieldValue::Text(&self.category),
            EtfField::ExpenseRatio => FieldValue::Number(self.expense_ratio),
            EtfField::DividendYield => FieldValue::Number(self.dividend_yield),
        }
    }

    fn columns() -> &'static [EtfField] {
        EtfField::ALL
    }

    fn schema() -> TableSchema<EtfField> {
        use EtfField::*;
        TableSchema::new(
            vec![Ticker, Name],
            vec![
                Ticker,
                Name,
                Shares,
                AvgPrice,
                CurrentPrice,
                Value,
                Gain,
                GainPercent,
                ExpenseRatio,
                DividendYield,
            ],
        )
        .with_category(Category)
        .with_default_sort(Value)
    }

    fn contribution(&self) -> Contribution {
        Contribution {
            value: self.value,
            gain: self.gain * self.shares,
        }
    }
}
