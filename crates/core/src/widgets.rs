use serde::Serialize;

use crate::errors::DashboardError;
use crate::format::{format_signed_currency, format_signed_percent, NumberFormat, Tone};
use crate::models::analytics::{AllocationSlice, DerivedView, ViewTotals};
use crate::models::query::{CategoryFilter, QueryState, SortDirection, TableSchema};
use crate::models::record::Record;
use crate::services::view_service::ViewService;

/// Layout hint passed to every widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayHint {
    /// Span the whole content row instead of one grid column
    pub full_width: bool,
}

/// One of the three summary cards above a holdings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub text: String,
    /// `None` for cards without up/down coloring
    pub tone: Option<Tone>,
}

/// A searchable, filterable, sortable table over a fixed dataset.
///
/// Owns its query state: building the widget starts from the schema
/// defaults, dropping it discards them.
pub struct HoldingsTable<R: Record> {
    dataset: Vec<R>,
    schema: TableSchema<R::Field>,
    query: QueryState<R::Field>,
    hint: DisplayHint,
    money: NumberFormat,
    view_service: ViewService,
}

impl<R: Record> HoldingsTable<R> {
    /// Table with the record type's default schema, displayed in `currency`.
    pub fn new(dataset: Vec<R>, currency: &str) -> Self {
        Self::with_schema(dataset, R::schema(), currency)
    }

    pub fn with_schema(dataset: Vec<R>, schema: TableSchema<R::Field>, currency: &str) -> Self {
        let query = QueryState::for_schema(&schema);
        Self {
            dataset,
            schema,
            query,
            hint: DisplayHint::default(),
            money: NumberFormat::currency(currency),
            view_service: ViewService::new(),
        }
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.hint.full_width = full_width;
        self
    }

    /// Keeps the compact setting.
    pub fn set_currency(&mut self, code: &str) {
        self.money = NumberFormat::currency(code).compacted(self.money.compact);
    }

    /// Summary cards switch to `$47.34K` style amounts.
    pub fn set_compact_numbers(&mut self, compact: bool) {
        self.money.compact = compact;
    }

    pub fn hint(&self) -> DisplayHint {
        self.hint
    }

    pub fn dataset(&self) -> &[R] {
        &self.dataset
    }

    pub fn schema(&self) -> &TableSchema<R::Field> {
        &self.schema
    }

    pub fn query(&self) -> &QueryState<R::Field> {
        &self.query
    }

    // ── User interaction ────────────────────────────────────────────

    pub fn search(&mut self, text: impl Into<String>) {
        self.query.set_search(text);
    }

    pub fn filter_category(&mut self, category: impl Into<CategoryFilter>) {
        self.query.set_category(category);
    }

    pub fn click_header(&mut self, field: R::Field) {
        self.query.click_header(field);
    }

    /// Header click by column name (e.g. `"gainPercent"`).
    pub fn click_header_named(&mut self, name: &str) -> Result<R::Field, DashboardError> {
        self.query.click_header_named(name)
    }

    pub fn reset_query(&mut self) {
        self.query.reset(&self.schema);
    }

    // ── Derived output ──────────────────────────────────────────────

    pub fn view(&self) -> DerivedView<'_, R> {
        self.view_service
            .derive_view(&self.dataset, &self.schema, &self.query)
    }

    pub fn totals(&self) -> ViewTotals {
        self.view().totals
    }

    /// Dropdown entries: "all" then each category of the full dataset.
    pub fn categories(&self) -> Vec<String> {
        self.view_service
            .distinct_categories(&self.dataset, &self.schema)
    }

    /// Arrow shown next to a column header; only the active column has one.
    pub fn sort_indicator(&self, field: R::Field) -> Option<SortDirection> {
        (self.query.sort_field() == Some(field)).then(|| self.query.sort_direction())
    }

    /// Allocation of the current view grouped by a column.
    pub fn allocation_by(&self, field: R::Field) -> Vec<AllocationSlice> {
        let view = self.view();
        self.view_service.allocation(&view.rows, field)
    }

    /// Total Value, Total Gain/Loss and Return cards for the current view.
    pub fn summary(&self) -> [SummaryCard; 3] {
        let totals = self.totals();
        [
            SummaryCard {
                label: "Total Value",
                text: self.money.format(totals.total_value),
                tone: None,
            },
            SummaryCard {
                label: "Total Gain/Loss",
                text: format_signed_currency(totals.total_gain, &self.money),
                tone: Some(Tone::of(totals.total_gain)),
            },
            SummaryCard {
                label: "Return",
                text: format_signed_percent(totals.total_gain_percent),
                tone: Some(Tone::of(totals.total_gain_percent)),
            },
        ]
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Current view as CSV, one column per record field.
    pub fn export_csv(&self) -> String {
        let columns = R::columns();
        let header: Vec<String> = columns.iter().map(ToString::to_string).collect();
        let mut csv = header.join(",");
        csv.push('\n');

        for row in self.view().rows {
            let cells: Vec<String> = columns
                .iter()
                .map(|&field| escape_csv(&row.field(field).to_string()))
                .collect();
            csv.push_str(&cells.join(","));
            csv.push('\n');
        }
        csv
    }

    /// Current view as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String, DashboardError>
    where
        R: Serialize,
    {
        let view = self.view();
        serde_json::to_string_pretty(&view.rows).map_err(|e| {
            DashboardError::Serialization(format!("Failed to export {} view: {e}", R::DATASET))
        })
    }
}

fn escape_csv(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
