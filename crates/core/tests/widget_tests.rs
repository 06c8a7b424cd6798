use chrono::NaiveDate;
use folio_dashboard_core::errors::DashboardError;
use folio_dashboard_core::format::{
    format_compact, format_market_cap, format_month_year, format_short_date, format_signed_currency,
    format_signed_percent, NumberFormat, Tone,
};
use folio_dashboard_core::models::alert::AlertTab;
use folio_dashboard_core::models::health::RiskLevel;
use folio_dashboard_core::models::holding::{AssetClass, CryptoField, CryptoHolding};
use folio_dashboard_core::models::query::SortDirection;
use folio_dashboard_core::models::settings::{NotificationPreferences, Settings};
use folio_dashboard_core::models::watchlist::WatchlistField;
use folio_dashboard_core::sample;
use folio_dashboard_core::widgets::HoldingsTable;
use folio_dashboard_core::Dashboard;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn crypto_table() -> HoldingsTable<CryptoHolding> {
    HoldingsTable::new(sample::crypto_holdings(), "USD")
}

// ═══════════════════════════════════════════════════════════════════
//  Holdings table
// ═══════════════════════════════════════════════════════════════════

mod holdings_table {
    use super::*;

    #[test]
    fn summary_over_full_dataset() {
        let table = crypto_table();
        let [value, gain, ret] = table.summary();

        assert_eq!(value.label, "Total Value");
        assert_eq!(value.text, "$47,340.46");
        assert_eq!(value.tone, None);

        assert_eq!(gain.label, "Total Gain/Loss");
        assert_eq!(gain.text, "+$26,163.46");
        assert_eq!(gain.tone, Some(Tone::Positive));

        assert_eq!(ret.label, "Return");
        assert_eq!(ret.text, "+123.55%");
        assert_eq!(ret.tone, Some(Tone::Positive));
    }

    #[test]
    fn summary_follows_category_filter() {
        let mut table = crypto_table();
        table.filter_category("Mid Cap");
        let [value, gain, ret] = table.summary();

        assert_eq!(value.text, "$2,325.75");
        assert_eq!(gain.text, "-$300.00");
        assert_eq!(gain.tone, Some(Tone::Negative));
        assert_eq!(ret.text, "-11.43%");
        assert_eq!(ret.tone, Some(Tone::Negative));
    }

    #[test]
    fn empty_view_summary() {
        let mut table = crypto_table();
        table.search("zzz");
        let [value, gain, ret] = table.summary();
        assert_eq!(value.text, "$0.00");
        assert_eq!(gain.text, "+$0.00");
        assert_eq!(ret.text, "+0.00%");
    }

    #[test]
    fn sort_indicator_marks_active_column_only() {
        let mut table = crypto_table();
        assert_eq!(table.sort_indicator(CryptoField::Value), Some(SortDirection::Descending));
        assert_eq!(table.sort_indicator(CryptoField::Name), None);

        table.click_header(CryptoField::Value);
        assert_eq!(table.sort_indicator(CryptoField::Value), Some(SortDirection::Ascending));

        table.click_header_named("name").unwrap();
        assert_eq!(table.sort_indicator(CryptoField::Value), None);
        assert_eq!(table.sort_indicator(CryptoField::Name), Some(SortDirection::Descending));
    }

    #[test]
    fn unknown_header_name_is_rejected() {
        let mut table = crypto_table();
        let err = table.click_header_named("price").unwrap_err();
        assert!(matches!(err, DashboardError::UnknownField { .. }));
        assert_eq!(table.query().sort_field(), Some(CryptoField::Value));
    }

    #[test]
    fn reset_query_restores_full_view() {
        let mut table = crypto_table();
        table.search("eth");
        table.filter_category("Mid Cap");
        assert!(table.view().is_empty());

        table.reset_query();
        let symbols: Vec<&str> = table.view().rows.into_iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BTC", "ETH", "SOL", "LINK", "DOT", "ADA"]);
    }

    #[test]
    fn categories_come_from_full_dataset() {
        let mut table = crypto_table();
        table.search("btc");
        assert_eq!(table.categories(), vec!["all", "Large Cap", "Mid Cap"]);
    }

    #[test]
    fn allocation_of_current_view() {
        let table = crypto_table();
        let slices = table.allocation_by(CryptoField::Category);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Large Cap");
        assert!((slices[0].value - 45014.71).abs() < 1e-6);
        assert!((slices[0].percent + slices[1].percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn display_hint_defaults_to_grid_cell() {
        assert!(!crypto_table().hint().full_width);
        assert!(crypto_table().full_width(true).hint().full_width);
    }

    #[test]
    fn watchlist_sorts_by_change_percent() {
        let mut table = HoldingsTable::new(sample::watchlist(), "USD");
        assert_eq!(table.view().rows[0].ticker, "TSLA");

        table.click_header(WatchlistField::ChangePercent);
        let tickers: Vec<&str> = table.view().rows.into_iter().map(|w| w.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["META", "TSLA", "DIS", "AMD", "PYPL", "INTC"]);
    }

    #[test]
    fn watchlist_search_matches_names() {
        let mut table = HoldingsTable::new(sample::watchlist(), "USD");
        table.search("inc");
        assert_eq!(table.view().len(), 4);
    }

    #[test]
    fn watchlist_has_no_totals() {
        let table = HoldingsTable::new(sample::watchlist(), "USD");
        let totals = table.totals();
        assert_eq!(totals.count, 6);
        assert_eq!(totals.total_value, 0.0);
        assert_eq!(totals.total_gain_percent, 0.0);
    }

    #[test]
    fn transactions_newest_first() {
        let table = HoldingsTable::new(sample::transactions(), "USD");
        let ids: Vec<u32> = table.view().rows.into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn transactions_filter_by_type() {
        let mut table = HoldingsTable::new(sample::transactions(), "USD");
        table.filter_category("sell");
        let tickers: Vec<&str> = table.view().rows.into_iter().map(|t| t.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["NVDA", "TSLA"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Export
// ═══════════════════════════════════════════════════════════════════

mod export {
    use super::*;

    #[test]
    fn csv_header_and_row() {
        let mut table = crypto_table();
        table.search("btc");
        let csv = table.export_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            concat!(
                "symbol,name,amount,avgPrice,currentPrice,value,gain,gainPercent,",
                "category,marketCap,volume24h"
            )
        );
        assert_eq!(
            lines[1],
            "BTC,Bitcoin,0.45,42500.25,65432.18,29444.48,22931.93,53.96,Large Cap,1285.4,28.5"
        );
    }

    #[test]
    fn csv_quotes_cells_with_commas() {
        let mut table = HoldingsTable::new(sample::watchlist(), "USD");
        table.search("tsla");
        let csv = table.export_csv();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with("TSLA,\"Tesla, Inc.\",248.42,"));
        assert!(row.ends_with(",1"));
    }

    #[test]
    fn csv_of_empty_view_is_header_only() {
        let mut table = crypto_table();
        table.search("nothing");
        assert_eq!(table.export_csv().lines().count(), 1);
    }

    #[test]
    fn csv_dates_are_iso() {
        let table = HoldingsTable::new(sample::transactions(), "USD");
        let csv = table.export_csv();
        assert_eq!(csv.lines().nth(1).unwrap(), "1,2023-04-15,AAPL,buy,10,165.23,1652.3");
    }

    #[test]
    fn json_follows_view_order() {
        let mut table = crypto_table();
        table.filter_category("Mid Cap");
        let json = table.export_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["symbol"], "LINK");
        assert_eq!(rows[1]["symbol"], "DOT");
        assert_eq!(rows[1]["gainPercent"], -36.44);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Formatting
// ═══════════════════════════════════════════════════════════════════

mod formatting {
    use super::*;

    #[test]
    fn currency_with_grouping() {
        let usd = NumberFormat::currency("USD");
        assert_eq!(usd.format(29444.48), "$29,444.48");
        assert_eq!(usd.format(1_234_567.891), "$1,234,567.89");
        assert_eq!(usd.format(0.5), "$0.50");
        assert_eq!(usd.format(-12.86), "-$12.86");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(NumberFormat::currency("USD").format(-0.001), "$0.00");
    }

    #[test]
    fn currency_symbols() {
        assert_eq!(NumberFormat::currency("eur").format(10.0), "€10.00");
        assert_eq!(NumberFormat::currency("GBP").format(10.0), "£10.00");
        assert_eq!(NumberFormat::currency("CHF").format(10.0), "CHF\u{a0}10.00");
    }

    #[test]
    fn whole_currency() {
        assert_eq!(NumberFormat::whole_currency("USD").format(125_863.0), "$125,863");
        assert_eq!(NumberFormat::whole_currency("USD").format(500_000.4), "$500,000");
    }

    #[test]
    fn fiat_totals_drop_trailing_zeros() {
        let f = NumberFormat::fiat_total("USD");
        assert_eq!(f.format(4692.0), "$4,692");
        assert_eq!(f.format(4904.1), "$4,904.1");
        assert_eq!(f.format(1549.44), "$1,549.44");
    }

    #[test]
    fn crypto_amounts_keep_up_to_eight_digits() {
        let f = NumberFormat::crypto_amount();
        assert_eq!(f.format(0.45), "0.45");
        assert_eq!(f.format(1.5), "1.50");
        assert_eq!(f.format(0.12345678), "0.12345678");
        assert_eq!(f.format(1500.0), "1,500.00");
    }

    #[test]
    fn plain_numbers_trim_trailing_zeros() {
        assert_eq!(NumberFormat::plain(2).format(1234.5), "1,234.5");
        assert_eq!(NumberFormat::plain(2).format(3.0), "3");
    }

    #[test]
    fn non_finite() {
        let usd = NumberFormat::currency("USD");
        assert_eq!(usd.format(f64::NAN), "NaN");
        assert_eq!(usd.format(f64::INFINITY), "$∞");
        assert_eq!(usd.format(f64::NEG_INFINITY), "-$∞");
    }

    #[test]
    fn signed_values() {
        let usd = NumberFormat::currency("USD");
        assert_eq!(format_signed_currency(1234.5, &usd), "+$1,234.50");
        assert_eq!(format_signed_currency(-12.86, &usd), "-$12.86");
        assert_eq!(format_signed_percent(53.96), "+53.96%");
        assert_eq!(format_signed_percent(-13.46), "-13.46%");
        assert_eq!(format_signed_percent(0.0), "+0.00%");
    }

    #[test]
    fn tone_of_zero_is_positive() {
        assert_eq!(Tone::of(0.0), Tone::Positive);
        assert_eq!(Tone::of(-0.01), Tone::Negative);
    }

    #[test]
    fn compact_notation() {
        assert_eq!(format_compact(28_456_789.0), "28.46M");
        assert_eq!(format_compact(875_000.0), "875K");
        assert_eq!(format_compact(1_200_000_000.0), "1.2B");
        assert_eq!(format_compact(-1500.0), "-1.5K");
        assert_eq!(format_compact(512.5), "512.5");
    }

    #[test]
    fn compacted_currency() {
        let usd = NumberFormat::currency("USD").compacted(true);
        assert_eq!(usd.format(47_340.46), "$47.34K");
        assert_eq!(usd.format(-1500.0), "-$1.5K");
        assert_eq!(usd.format(512.5), "$512.5");
        assert_eq!(usd.format(-0.001), "$0");
        assert_eq!(format_signed_currency(2_500_000.0, &usd), "+$2.5M");
    }

    #[test]
    fn compact_rolls_over_to_next_unit() {
        assert_eq!(format_compact(999_999.0), "1M");
        assert_eq!(format_compact(999.999), "1K");
    }

    #[test]
    fn market_cap_and_dates() {
        assert_eq!(format_market_cap(788.5), "788.5B");
        assert_eq!(format_market_cap(69.5), "69.5B");
        assert_eq!(format_short_date(d(2023, 4, 5)), "Apr 5");
        assert_eq!(format_month_year(d(2040, 1, 1)), "Jan 2040");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Dashboard facade
// ═══════════════════════════════════════════════════════════════════

mod dashboard {
    use super::*;

    fn dashboard() -> Dashboard {
        Dashboard::with_sample_data(d(2023, 4, 18)).unwrap()
    }

    #[test]
    fn sample_data_loaded() {
        let dash = dashboard();
        assert_eq!(dash.crypto().dataset().len(), 6);
        assert_eq!(dash.stocks().dataset().len(), 7);
        assert_eq!(dash.etfs().dataset().len(), 7);
        assert_eq!(dash.watchlist().dataset().len(), 6);
        assert_eq!(dash.transactions().dataset().len(), 7);
        assert_eq!(dash.alert_history().dataset().len(), 5);
        assert_eq!(dash.goals().len(), 3);
        assert_eq!(dash.budget_categories().len(), 4);
    }

    #[test]
    fn portfolio_value_ignores_table_filters() {
        let mut dash = dashboard();
        let before = dash.portfolio_total_value();
        assert!((before - 112_874.14).abs() < 1e-6);

        dash.stocks_mut().search("zzz");
        assert!((dash.portfolio_total_value() - before).abs() < 1e-9);
    }

    #[test]
    fn value_by_class_order() {
        let classes: Vec<AssetClass> = dashboard()
            .value_by_class()
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(classes, vec![AssetClass::Stock, AssetClass::Etf, AssetClass::Crypto]);
    }

    #[test]
    fn stock_allocation_follows_stock_view() {
        let mut dash = dashboard();
        dash.stocks_mut().filter_category("Technology");
        let slices = dash.stock_allocation();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "Technology");
        assert!((slices[0].value - 18300.1).abs() < 1e-6);
        assert!((slices[0].percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn etf_allocation_covers_every_category() {
        assert_eq!(dashboard().etf_allocation().len(), 6);
    }

    #[test]
    fn full_width_tables() {
        let dash = dashboard();
        assert!(dash.transactions().hint().full_width);
        assert!(dash.alert_history().hint().full_width);
        assert!(!dash.crypto().hint().full_width);
    }

    #[test]
    fn budget_month_from_today() {
        let mut dash = dashboard();
        assert_eq!(dash.budget().month_label(), "April 2023");
        dash.budget_mut().next_month();
        assert_eq!(dash.budget().month_label(), "May 2023");
    }

    #[test]
    fn toggle_alert_through_facade() {
        let mut dash = dashboard();
        assert_eq!(dash.alerts().active_count(AlertTab::Price), 2);
        assert!(dash.toggle_alert(AlertTab::Price, 3).unwrap());
        assert_eq!(dash.alerts().active_count(AlertTab::Price), 3);
        assert!(!dash.toggle_alert(AlertTab::News, 1).unwrap());
        assert_eq!(dash.alerts().active_count(AlertTab::News), 2);
        assert!(dash.toggle_alert(AlertTab::Events, 99).is_err());
    }

    #[test]
    fn price_alert_delivery_follows_preferences() {
        let mut dash = dashboard();
        assert_eq!(dash.alerts_to_notify("AAPL", 187.68).len(), 1);

        dash.set_notifications(NotificationPreferences {
            price_alerts: false,
            ..NotificationPreferences::default()
        });
        assert!(dash.alerts_to_notify("AAPL", 187.68).is_empty());

        dash.set_notifications(NotificationPreferences {
            email: false,
            push: false,
            ..NotificationPreferences::default()
        });
        assert!(dash.alerts_to_notify("AAPL", 187.68).is_empty());
    }

    #[test]
    fn news_subscriptions_follow_preferences() {
        let mut dash = dashboard();
        assert_eq!(dash.news_subscriptions().len(), 3);

        dash.set_notifications(NotificationPreferences {
            market_news: false,
            ..NotificationPreferences::default()
        });
        let tickers: Vec<&str> = dash
            .news_subscriptions()
            .iter()
            .map(|a| a.ticker.as_str())
            .collect();
        assert_eq!(tickers, vec!["AAPL"]);
        assert!(!dash.settings().notifications.market_news);
    }

    #[test]
    fn upcoming_events_through_facade() {
        let dash = dashboard();
        let headlines: Vec<String> = dash
            .upcoming_events(d(2023, 4, 18))
            .iter()
            .map(|e| e.headline())
            .collect();
        assert_eq!(headlines, vec!["MSFT: Earnings Call", "GOOGL: Dividend Payment"]);
    }

    #[test]
    fn health_scores_loaded() {
        let health = *dashboard().health();
        assert_eq!(health.diversification, 78);
        assert_eq!(health.risk_level(), RiskLevel::Moderate);
    }

    #[test]
    fn compact_numbers_setting_reaches_summary_cards() {
        let mut dash = dashboard();
        assert_eq!(dash.crypto().summary()[0].text, "$47,340.46");

        dash.set_compact_numbers(true);
        assert!(dash.settings().compact_numbers);
        let cards = dash.crypto().summary();
        assert_eq!(cards[0].text, "$47.34K");
        assert_eq!(cards[1].text, "+$26.16K");
        assert_eq!(cards[2].text, "+123.55%");

        // Currency changes keep the compact style
        dash.set_default_currency("EUR").unwrap();
        assert_eq!(dash.crypto().summary()[0].text, "€47.34K");

        dash.set_compact_numbers(false);
        assert_eq!(dash.crypto().summary()[0].text, "€47,340.46");
    }

    #[test]
    fn compact_numbers_from_settings_json() {
        let json = r#"{"compact_numbers":true}"#;
        let dash = Dashboard::from_settings_json(json, d(2023, 4, 18)).unwrap();
        assert_eq!(dash.etfs().summary()[0].text, "$40.98K");
    }

    #[test]
    fn currency_change_keeps_query_state() {
        let mut dash = dashboard();
        dash.crypto_mut().filter_category("Mid Cap");
        dash.set_default_currency("eur").unwrap();

        assert_eq!(dash.settings().default_currency, "EUR");
        assert_eq!(dash.crypto().summary()[0].text, "€2,325.75");
        assert_eq!(dash.crypto().view().len(), 2);
    }

    #[test]
    fn invalid_currency_leaves_settings() {
        let mut dash = dashboard();
        assert!(dash.set_default_currency("euro").is_err());
        assert_eq!(dash.settings().default_currency, "USD");
        assert_eq!(dash.crypto().summary()[0].text, "$47,340.46");
    }

    #[test]
    fn from_settings_json() {
        let json = r#"{"default_currency":"gbp"}"#;
        let dash = Dashboard::from_settings_json(json, d(2023, 4, 18)).unwrap();
        assert_eq!(dash.settings().default_currency, "GBP");
        assert_eq!(dash.etfs().summary()[0].text, "£40,979.18");
    }

    #[test]
    fn from_settings_json_rejects_bad_input() {
        assert!(Dashboard::from_settings_json("[1, 2]", d(2023, 4, 18)).is_err());
        let json = r#"{"default_currency":"E1R"}"#;
        assert!(Dashboard::from_settings_json(json, d(2023, 4, 18)).is_err());
    }

    #[test]
    fn with_settings_validates() {
        let settings = Settings {
            default_currency: "US".into(),
            ..Settings::default()
        };
        assert!(matches!(
            Dashboard::with_settings(settings, d(2023, 4, 18)),
            Err(DashboardError::InvalidSettings(_))
        ));
    }

    #[test]
    fn settings_json_roundtrip() {
        let dash = dashboard();
        let json = dash.settings_to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), *dash.settings());
    }

    #[test]
    fn debug_output_is_compact() {
        let debug = format!("{:?}", dashboard());
        assert!(debug.starts_with("Dashboard"));
        assert!(debug.contains("crypto: 6"));
    }
}
