pub mod errors;
pub mod format;
pub mod models;
pub mod sample;
pub mod services;
pub mod widgets;

use chrono::NaiveDate;
use models::{
    alert::{AlertBook, AlertHistoryEntry, AlertTab, EventAlert, NewsAlert, PriceAlert},
    analytics::AllocationSlice,
    budget::{BudgetCategory, BudgetTracker},
    goal::{Goal, GoalProgressPoint},
    health::PortfolioHealth,
    holding::{
        AssetClass, CryptoField, CryptoHolding, EtfField, EtfHolding, StockField, StockHolding,
    },
    sector::SectorAllocation,
    settings::{NotificationPreferences, Settings},
    transaction::Transaction,
    watchlist::WatchlistEntry,
};
use widgets::HoldingsTable;

use errors::DashboardError;

/// Main entry point for the dashboard core.
/// Holds every widget's dataset and view state for one session.
#[must_use]
pub struct Dashboard {
    settings: Settings,
    crypto: HoldingsTable<CryptoHolding>,
    stocks: HoldingsTable<StockHolding>,
    etfs: HoldingsTable<EtfHolding>,
    watchlist: HoldingsTable<WatchlistEntry>,
    transactions: HoldingsTable<Transaction>,
    alert_history: HoldingsTable<AlertHistoryEntry>,
    alerts: AlertBook,
    goals: Vec<Goal>,
    goal_progress: Vec<GoalProgressPoint>,
    budget: BudgetTracker,
    budget_categories: Vec<BudgetCategory>,
    sectors: SectorAllocation,
    health: PortfolioHealth,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("settings", &self.settings)
            .field("crypto", &self.crypto.dataset().len())
            .field("stocks", &self.stocks.dataset().len())
            .field("etfs", &self.etfs.dataset().len())
            .field("watchlist", &self.watchlist.dataset().len())
            .field("transactions", &self.transactions.dataset().len())
            .field("goals", &self.goals.len())
            .finish()
    }
}

impl Dashboard {
    /// Dashboard over the built-in demo portfolio with default settings.
    /// `today` picks the month shown on the budget card.
    pub fn with_sample_data(today: NaiveDate) -> Result<Self, DashboardError> {
        Self::with_settings(Settings::default(), today)
    }

    /// Dashboard over the demo portfolio using settings parsed from JSON.
    pub fn from_settings_json(json: &str, today: NaiveDate) -> Result<Self, DashboardError> {
        let settings = Settings::from_json(json)?;
        Self::with_settings(settings, today)
    }

    pub fn with_settings(settings: Settings, today: NaiveDate) -> Result<Self, DashboardError> {
        settings.validate()?;
        let currency = settings.default_currency.clone();
        let budget = BudgetTracker::new(today, sample::MONTHLY_BUDGET, sample::MONTHLY_SPENT)?;
        let health = sample::portfolio_health()?;
        tracing::debug!(currency = %currency, "building dashboard from sample data");

        let mut dashboard = Self {
            crypto: HoldingsTable::new(sample::crypto_holdings(), &currency),
            stocks: HoldingsTable::new(sample::stock_holdings(), &currency),
            etfs: HoldingsTable::new(sample::etf_holdings(), &currency),
            watchlist: HoldingsTable::new(sample::watchlist(), &currency),
            transactions: HoldingsTable::new(sample::transactions(), &currency).full_width(true),
            alert_history: HoldingsTable::new(sample::alert_history(), &currency).full_width(true),
            alerts: AlertBook::new(
                sample::price_alerts(),
                sample::news_alerts(),
                sample::event_alerts(),
            ),
            goals: sample::goals(),
            goal_progress: sample::goal_progress(),
            budget,
            budget_categories: sample::budget_categories(),
            sectors: sample::sector_allocation(),
            health,
            settings,
        };
        dashboard.apply_display_settings();
        Ok(dashboard)
    }

    // ── Tables ──────────────────────────────────────────────────────

    pub fn crypto(&self) -> &HoldingsTable<CryptoHolding> {
        &self.crypto
    }

    pub fn crypto_mut(&mut self) -> &mut HoldingsTable<CryptoHolding> {
        &mut self.crypto
    }

    pub fn stocks(&self) -> &HoldingsTable<StockHolding> {
        &self.stocks
    }

    pub fn stocks_mut(&mut self) -> &mut HoldingsTable<StockHolding> {
        &mut self.stocks
    }

    pub fn etfs(&self) -> &HoldingsTable<EtfHolding> {
        &self.etfs
    }

    pub fn etfs_mut(&mut self) -> &mut HoldingsTable<EtfHolding> {
        &mut self.etfs
    }

    pub fn watchlist(&self) -> &HoldingsTable<WatchlistEntry> {
        &self.watchlist
    }

    pub fn watchlist_mut(&mut self) -> &mut HoldingsTable<WatchlistEntry> {
        &mut self.watchlist
    }

    pub fn transactions(&self) -> &HoldingsTable<Transaction> {
        &self.transactions
    }

    pub fn transactions_mut(&mut self) -> &mut HoldingsTable<Transaction> {
        &mut self.transactions
    }

    pub fn alert_history(&self) -> &HoldingsTable<AlertHistoryEntry> {
        &self.alert_history
    }

    pub fn alert_history_mut(&mut self) -> &mut HoldingsTable<AlertHistoryEntry> {
        &mut self.alert_history
    }

    // ── Portfolio overview ──────────────────────────────────────────

    /// Sum of value over the full crypto, stock and ETF datasets,
    /// independent of any table's current filter.
    #[must_use]
    pub fn portfolio_total_value(&self) -> f64 {
        self.value_by_class().iter().map(|(_, value)| value).sum()
    }

    /// Full-dataset value per asset class, in display order.
    #[must_use]
    pub fn value_by_class(&self) -> Vec<(AssetClass, f64)> {
        vec![
            (AssetClass::Stock, self.stocks.dataset().iter().map(|s| s.value).sum()),
            (AssetClass::Etf, self.etfs.dataset().iter().map(|e| e.value).sum()),
            (AssetClass::Crypto, self.crypto.dataset().iter().map(|c| c.value).sum()),
        ]
    }

    /// Crypto allocation of the current crypto view by market-cap bucket.
    #[must_use]
    pub fn crypto_allocation(&self) -> Vec<AllocationSlice> {
        self.crypto.allocation_by(CryptoField::Category)
    }

    /// Stock allocation of the current stock view by sector.
    #[must_use]
    pub fn stock_allocation(&self) -> Vec<AllocationSlice> {
        self.stocks.allocation_by(StockField::Sector)
    }

    /// ETF allocation of the current ETF view by category.
    #[must_use]
    pub fn etf_allocation(&self) -> Vec<AllocationSlice> {
        self.etfs.allocation_by(EtfField::Category)
    }

    #[must_use]
    pub fn sectors(&self) -> &SectorAllocation {
        &self.sectors
    }

    #[must_use]
    pub fn health(&self) -> &PortfolioHealth {
        &self.health
    }

    // ── Goals & Budget ──────────────────────────────────────────────

    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    #[must_use]
    pub fn goal_progress(&self) -> &[GoalProgressPoint] {
        &self.goal_progress
    }

    #[must_use]
    pub fn budget(&self) -> &BudgetTracker {
        &self.budget
    }

    pub fn budget_mut(&mut self) -> &mut BudgetTracker {
        &mut self.budget
    }

    #[must_use]
    pub fn budget_categories(&self) -> &[BudgetCategory] {
        &self.budget_categories
    }

    // ── Alerts ──────────────────────────────────────────────────────

    #[must_use]
    pub fn alerts(&self) -> &AlertBook {
        &self.alerts
    }

    /// Flip an alert's switch on the given tab. Returns the new state.
    pub fn toggle_alert(&mut self, tab: AlertTab, id: u32) -> Result<bool, DashboardError> {
        self.alerts.toggle(tab, id)
    }

    /// Price alerts that fire for this quote and would be delivered under
    /// the current notification preferences.
    #[must_use]
    pub fn alerts_to_notify(&self, ticker: &str, market_price: f64) -> Vec<&PriceAlert> {
        let prefs = &self.settings.notifications;
        if !prefs.price_alerts || !prefs.has_channel() {
            return Vec::new();
        }
        self.alerts.met_by(ticker, market_price)
    }

    /// Active news alerts whose kind is switched on in the preferences.
    #[must_use]
    pub fn news_subscriptions(&self) -> Vec<&NewsAlert> {
        let prefs = &self.settings.notifications;
        if !prefs.has_channel() {
            return Vec::new();
        }
        self.alerts
            .news
            .iter()
            .filter(|a| a.active && prefs.allows_news(a.kind))
            .collect()
    }

    #[must_use]
    pub fn upcoming_events(&self, today: NaiveDate) -> Vec<&EventAlert> {
        self.alerts.upcoming_events(today)
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Change the display currency of every table.
    pub fn set_default_currency(&mut self, currency: &str) -> Result<(), DashboardError> {
        self.settings.set_default_currency(currency)?;
        self.apply_display_settings();
        Ok(())
    }

    /// Switch summary cards between `$47,340.46` and `$47.34K`.
    pub fn set_compact_numbers(&mut self, compact: bool) {
        self.settings.compact_numbers = compact;
        self.apply_display_settings();
    }

    pub fn set_notifications(&mut self, notifications: NotificationPreferences) {
        tracing::debug!(?notifications, "notification preferences changed");
        self.settings.notifications = notifications;
    }

    fn apply_display_settings(&mut self) {
        let code = self.settings.default_currency.clone();
        let compact = self.settings.compact_numbers;
        self.crypto.set_currency(&code);
        self.crypto.set_compact_numbers(compact);
        self.stocks.set_currency(&code);
        self.stocks.set_compact_numbers(compact);
        self.etfs.set_currency(&code);
        self.etfs.set_compact_numbers(compact);
        self.watchlist.set_currency(&code);
        self.watchlist.set_compact_numbers(compact);
        self.transactions.set_currency(&code);
        self.transactions.set_compact_numbers(compact);
        self.alert_history.set_currency(&code);
        self.alert_history.set_compact_numbers(compact);
    }

    pub fn settings_to_json(&self) -> Result<String, DashboardError> {
        self.settings.to_json()
    }
}
