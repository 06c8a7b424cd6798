//! The dashboard's built-in demo portfolio.
//!
//! Every widget renders one of these datasets until a real portfolio source
//! is plugged in; the engine treats them as opaque immutable inputs.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

use crate::errors::DashboardError;
use crate::models::alert::{
    AlertCondition, AlertHistoryEntry, AlertStatus, EventAlert, NewsAlert, NewsAlertKind,
    PriceAlert,
};
use crate::models::budget::BudgetCategory;
use crate::models::goal::{Goal, GoalProgressPoint};
use crate::models::health::PortfolioHealth;
use crate::models::holding::{CryptoHolding, EtfHolding, StockHolding};
use crate::models::sector::{PositionWeight, SectorAllocation, SectorWeight};
use crate::models::transaction::{TradeKind, Transaction};
use crate::models::watchlist::WatchlistEntry;

// Fixed literals below are all valid calendar dates.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn crypto(
    symbol: &str,
    name: &str,
    amount: f64,
    avg_price: f64,
    current_price: f64,
    value: f64,
    gain: f64,
    gain_percent: f64,
    category: &str,
    market_cap: f64,
    volume_24h: f64,
) -> CryptoHolding {
    CryptoHolding {
        symbol: symbol.into(),
        name: name.into(),
        amount,
        avg_price,
        current_price,
        value,
        gain,
        gain_percent,
        category: category.into(),
        market_cap,
        volume_24h,
    }
}

pub fn crypto_holdings() -> Vec<CryptoHolding> {
    vec![
        crypto(
            "BTC",
            "Bitcoin",
            0.45,
            42500.25,
            65432.18,
            29444.48,
            22931.93,
            53.96,
            "Large Cap",
            1285.4,
            28.5,
        ),
        crypto(
            "ETH",
            "Ethereum",
            3.2,
            2850.75,
            3542.65,
            11336.48,
            2213.28,
            24.62,
            "Large Cap",
            425.8,
            15.2,
        ),
        crypto(
            "SOL",
            "Solana",
            25.0,
            85.42,
            142.35,
            3558.75,
            1423.25,
            66.65,
            "Large Cap",
            62.5,
            4.8,
        ),
        crypto(
            "ADA",
            "Cardano",
            1500.0,
            0.52,
            0.45,
            675.0,
            -105.0,
            -13.46,
            "Large Cap",
            16.2,
            0.85,
        ),
        crypto("DOT", "Polkadot", 120.0, 12.35, 7.85, 942.0, -540.0, -36.44, "Mid Cap", 9.8, 0.42),
        crypto(
            "LINK",
            "Chainlink",
            75.0,
            15.25,
            18.45,
            1383.75,
            240.0,
            20.98,
            "Mid Cap",
            10.5,
            0.65,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn stock(
    ticker: &str,
    name: &str,
    shares: f64,
    avg_price: f64,
    current_price: f64,
    value: f64,
    gain: f64,
    gain_percent: f64,
    sector: &str,
    dividend_yield: f64,
) -> StockHolding {
    StockHolding {
        ticker: ticker.into(),
        name: name.into(),
        shares,
        avg_price,
        current_price,
        value,
        gain,
        gain_percent,
        sector: sector.into(),
        last_updated: "2 mins ago".into(),
        dividend_yield,
    }
}

pub fn stock_holdings() -> Vec<StockHolding> {
    vec![
        stock("AAPL", "Apple Inc.", 25.0, 165.23, 187.68, 4692.0, 22.45, 13.59, "Technology", 0.51),
        stock(
            "MSFT",
            "Microsoft Corp.",
            15.0,
            287.18,
            326.94,
            4904.1,
            39.76,
            13.85,
            "Technology",
            0.82,
        ),
        stock(
            "AMZN",
            "Amazon.com Inc.",
            12.0,
            102.3,
            129.12,
            1549.44,
            26.82,
            26.22,
            "Consumer Discretionary",
            0.0,
        ),
        stock(
            "GOOGL",
            "Alphabet Inc.",
            8.0,
            123.48,
            142.65,
            1141.2,
            19.17,
            15.53,
            "Communication Services",
            0.0,
        ),
        stock("NVDA", "NVIDIA Corp.", 20.0, 267.4, 435.2, 8704.0, 167.8, 62.75, "Technology", 0.05),
        stock(
            "JNJ",
            "Johnson & Johnson",
            10.0,
            165.5,
            152.64,
            1526.4,
            -12.86,
            -7.77,
            "Healthcare",
            3.12,
        ),
        stock(
            "JPM",
            "JPMorgan Chase",
            12.0,
            145.25,
            169.78,
            2037.36,
            24.53,
            16.89,
            "Financial",
            2.45,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn etf(
    ticker: &str,
    name: &str,
    shares: f64,
    avg_price: f64,
    current_price: f64,
    value: f64,
    gain: f64,
    gain_percent: f64,
    category: &str,
    expense_ratio: f64,
    dividend_yield: f64,
) -> EtfHolding {
    EtfHolding {
        ticker: ticker.into(),
        name: name.into(),
        shares,
        avg_price,
        current_price,
        value,
        gain,
        gain_percent,
        category: category.into(),
        expense_ratio,
        dividend_yield,
    }
}

pub fn etf_holdings() -> Vec<EtfHolding> {
    vec![
        etf(
            "VOO",
            "Vanguard S&P 500 ETF",
            35.0,
            375.42,
            412.65,
            14442.75,
            37.23,
            9.92,
            "Large Cap",
            0.03,
            1.42,
        ),
        etf(
            "VTI",
            "Vanguard Total Stock Market ETF",
            28.0,
            210.35,
            235.78,
            6601.84,
            25.43,
            12.09,
            "Total Market",
            0.03,
            1.35,
        ),
        etf(
            "QQQ",
            "Invesco QQQ Trust",
            15.0,
            325.68,
            378.42,
            5676.3,
            52.74,
            16.19,
            "Technology",
            0.2,
            0.58,
        ),
        etf(
            "VGT",
            "Vanguard Information Technology ETF",
            12.0,
            410.25,
            465.32,
            5583.84,
            55.07,
            13.42,
            "Technology",
            0.1,
            0.65,
        ),
        etf(
            "VYM",
            "Vanguard High Dividend Yield ETF",
            25.0,
            105.42,
            112.35,
            2808.75,
            6.93,
            6.57,
            "Dividend",
            0.06,
            2.95,
        ),
        etf(
            "VXUS",
            "Vanguard Total International Stock ETF",
            40.0,
            54.25,
            58.42,
            2336.8,
            4.17,
            7.69,
            "International",
            0.08,
            3.12,
        ),
        etf(
            "BND",
            "Vanguard Total Bond Market ETF",
            45.0,
            82.15,
            78.42,
            3528.9,
            -3.73,
            -4.54,
            "Bond",
            0.03,
            2.85,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn watch(
    ticker: &str,
    name: &str,
    price: f64,
    change: f64,
    change_percent: f64,
    volume: u64,
    market_cap: f64,
    pe: f64,
    has_alert: bool,
) -> WatchlistEntry {
    WatchlistEntry {
        ticker: ticker.into(),
        name: name.into(),
        price,
        change,
        change_percent,
        volume,
        market_cap,
        pe,
        has_alert,
    }
}

pub fn watchlist() -> Vec<WatchlistEntry> {
    vec![
        watch("TSLA", "Tesla, Inc.", 248.42, 5.63, 2.32, 28_456_789, 788.5, 70.2, true),
        watch("META", "Meta Platforms, Inc.", 325.76, 7.89, 2.48, 15_678_234, 835.2, 28.4, true),
        watch(
            "AMD",
            "Advanced Micro Devices, Inc.",
            108.24,
            -2.35,
            -2.13,
            42_567_123,
            174.8,
            98.3,
            false,
        ),
        watch("DIS", "The Walt Disney Company", 89.67, 0.23, 0.26, 8_765_432, 164.2, 19.8, false),
        watch("PYPL", "PayPal Holdings, Inc.", 62.38, -1.42, -2.23, 12_345_678, 69.5, 17.6, true),
        watch("INTC", "Intel Corporation", 35.24, -0.87, -2.41, 32_456_789, 148.3, 10.2, false),
    ]
}

fn trade(
    id: u32,
    day: NaiveDate,
    ticker: &str,
    kind: TradeKind,
    shares: f64,
    price: f64,
    total: f64,
) -> Transaction {
    Transaction {
        id,
        date: day,
        ticker: ticker.into(),
        kind,
        shares,
        price,
        total,
    }
}

pub fn transactions() -> Vec<Transaction> {
    use TradeKind::{Buy, Sell};
    vec![
        trade(1, date(2023, 4, 15), "AAPL", Buy, 10.0, 165.23, 1652.3),
        trade(2, date(2023, 4, 10), "MSFT", Buy, 5.0, 287.18, 1435.9),
        trade(3, date(2023, 4, 5), "NVDA", Sell, 3.0, 267.4, 802.2),
        trade(4, date(2023, 3, 28), "GOOGL", Buy, 8.0, 123.48, 987.84),
        trade(5, date(2023, 3, 20), "AMZN", Buy, 12.0, 102.3, 1227.6),
        trade(6, date(2023, 3, 15), "TSLA", Sell, 4.0, 180.13, 720.52),
        trade(7, date(2023, 3, 10), "META", Buy, 6.0, 185.25, 1111.5),
    ]
}

pub fn price_alerts() -> Vec<PriceAlert> {
    let mut nvda = PriceAlert::new(3, "NVDA", AlertCondition::Above, 300.0);
    nvda.active = false;
    vec![
        PriceAlert::new(1, "AAPL", AlertCondition::Above, 180.0),
        PriceAlert::new(2, "MSFT", AlertCondition::Below, 270.0),
        nvda,
    ]
}

pub fn news_alerts() -> Vec<NewsAlert> {
    vec![
        NewsAlert::new(1, "AAPL", NewsAlertKind::Earnings),
        NewsAlert::new(2, "AMZN", NewsAlertKind::News),
        NewsAlert::new(3, "TSLA", NewsAlertKind::AnalystRatings),
    ]
}

pub fn event_alerts() -> Vec<EventAlert> {
    let mut launch = EventAlert::new(3, "META", "Product Launch", date(2023, 5, 15));
    launch.active = false;
    vec![
        EventAlert::new(1, "MSFT", "Earnings Call", date(2023, 4, 25)),
        EventAlert::new(2, "GOOGL", "Dividend Payment", date(2023, 5, 10)),
        launch,
    ]
}

pub fn portfolio_health() -> Result<PortfolioHealth, DashboardError> {
    PortfolioHealth::new(78, 65, 82)
}

fn history(
    id: u32,
    at: NaiveDateTime,
    ticker: &str,
    kind: &str,
    message: &str,
    status: AlertStatus,
) -> AlertHistoryEntry {
    AlertHistoryEntry {
        id,
        date: at,
        ticker: ticker.into(),
        kind: kind.into(),
        message: message.into(),
        status,
    }
}

pub fn alert_history() -> Vec<AlertHistoryEntry> {
    use AlertStatus::{Delivered, Triggered};
    vec![
        history(
            1,
            datetime(2023, 4, 15, 9, 32),
            "META",
            "price",
            "META dropped below $300.00",
            Triggered,
        ),
        history(
            2,
            datetime(2023, 4, 12, 14, 15),
            "AAPL",
            "earnings",
            "Apple Q2 earnings report released",
            Delivered,
        ),
        history(
            3,
            datetime(2023, 4, 10, 10, 45),
            "NVDA",
            "news",
            "NVIDIA announces new AI chip",
            Delivered,
        ),
        history(
            4,
            datetime(2023, 4, 5, 16, 20),
            "TSLA",
            "price",
            "TSLA rose above $240.00",
            Triggered,
        ),
        history(
            5,
            datetime(2023, 4, 1, 11, 5),
            "MSFT",
            "analyst",
            "Microsoft receives upgrade to Buy",
            Delivered,
        ),
    ]
}

pub fn goals() -> Vec<Goal> {
    vec![
        Goal {
            id: 1,
            name: "Retirement Fund".into(),
            target: 500_000.0,
            current: 125_863.0,
            target_date: date(2040, 1, 1),
        },
        Goal {
            id: 2,
            name: "House Down Payment".into(),
            target: 100_000.0,
            current: 78_500.0,
            target_date: date(2025, 6, 1),
        },
        Goal {
            id: 3,
            name: "Education Fund".into(),
            target: 50_000.0,
            current: 12_300.0,
            target_date: date(2030, 9, 1),
        },
    ]
}

/// Retirement fund balance by month; months not reached yet have no value.
pub fn goal_progress() -> Vec<GoalProgressPoint> {
    let actual = [Some(100_000.0), Some(105_000.0), Some(112_000.0), Some(125_863.0)];
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        .iter()
        .enumerate()
        .map(|(i, month)| GoalProgressPoint {
            month: (*month).to_string(),
            value: actual.get(i).copied().flatten(),
        })
        .collect()
}

pub fn budget_categories() -> Vec<BudgetCategory> {
    vec![
        BudgetCategory::new("Technology Stocks", 1500.0, 425.5),
        BudgetCategory::new("Healthcare Stocks", 600.0, 137.58),
        BudgetCategory::new("Financial Stocks", 400.0, 0.0),
        BudgetCategory::new("ETFs", 350.0, 0.0),
    ]
}

/// Monthly budget and spending shown on the budget card.
pub const MONTHLY_BUDGET: f64 = 2850.0;
pub const MONTHLY_SPENT: f64 = 563.08;

pub fn sector_allocation() -> SectorAllocation {
    let sectors = [
        ("Technology", 45.0),
        ("Healthcare", 15.0),
        ("Financial", 12.0),
        ("Consumer", 10.0),
        ("Energy", 8.0),
        ("Other", 10.0),
    ]
    .iter()
    .map(|(name, weight)| SectorWeight {
        name: (*name).to_string(),
        weight: *weight,
    })
    .collect();

    let by_sector: [(&str, &[(&str, f64)]); 6] = [
        ("Technology", &[("AAPL", 15.0), ("MSFT", 12.0), ("NVDA", 10.0), ("GOOGL", 8.0)]),
        ("Healthcare", &[("JNJ", 8.0), ("PFE", 4.0), ("UNH", 3.0)]),
        ("Financial", &[("JPM", 6.0), ("BAC", 4.0), ("V", 2.0)]),
        ("Consumer", &[("AMZN", 7.0), ("WMT", 3.0)]),
        ("Energy", &[("XOM", 5.0), ("CVX", 3.0)]),
        ("Other", &[("Other Stocks", 10.0)]),
    ];
    let positions: HashMap<String, Vec<PositionWeight>> = by_sector
        .iter()
        .map(|(sector, stocks)| {
            let weights = stocks
                .iter()
                .map(|(name, weight)| PositionWeight {
                    name: (*name).to_string(),
                    weight: *weight,
                })
                .collect();
            ((*sector).to_string(), weights)
        })
        .collect();

    SectorAllocation { sectors, positions }
}
