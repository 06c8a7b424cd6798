use std::cmp::Ordering;

use crate::models::analytics::{AllocationSlice, DerivedView, ViewTotals};
use crate::models::query::{QueryState, SortDirection, TableSchema};
use crate::models::record::{FieldValue, Record};

/// Derives filtered, sorted table views and their totals from in-memory datasets.
///
/// Pure logic: no I/O, no mutation of the dataset. The same dataset and query
/// always produce the same view.
pub struct ViewService;

impl ViewService {
    pub fn new() -> Self {
        Self
    }

    /// Filter, sort and aggregate a dataset for display.
    ///
    /// 1. Keep rows matching the category filter AND the search text
    /// 2. Sort by the query's column if the schema lists it as sortable,
    ///    otherwise keep input order
    /// 3. Total value and gain over the kept rows
    pub fn derive_view<'a, R: Record>(
        &self,
        dataset: &'a [R],
        schema: &TableSchema<R::Field>,
        query: &QueryState<R::Field>,
    ) -> DerivedView<'a, R> {
        let needle = query.search_text().to_lowercase();

        let mut rows: Vec<&'a R> = dataset
            .iter()
            .filter(|record| self.matches(*record, schema, query, &needle))
            .collect();

        match query.sort_field() {
            Some(field) if schema.is_sortable(field) => {
                let direction = query.sort_direction();
                rows.sort_by(|a, b| {
                    let ord = compare_values(&a.field(field), &b.field(field));
                    match direction {
                        SortDirection::Ascending => ord,
                        SortDirection::Descending => ord.reverse(),
                    }
                });
            }
            Some(field) => {
                tracing::debug!(
                    dataset = R::DATASET,
                    field = %field,
                    "sort column not sortable, keeping input order"
                );
            }
            None => {}
        }

        let totals = self.totals(&rows);
        tracing::debug!(
            dataset = R::DATASET,
            total = dataset.len(),
            shown = rows.len(),
            "derived table view"
        );

        DerivedView { rows, totals }
    }

    /// Category and search predicates for a single row.
    /// `needle` must already be lowercased; an empty needle matches everything.
    fn matches<R: Record>(
        &self,
        record: &R,
        schema: &TableSchema<R::Field>,
        query: &QueryState<R::Field>,
        needle: &str,
    ) -> bool {
        let in_category = match schema.category {
            Some(field) => {
                let value = record.field(field);
                match value.as_text() {
                    Some(category) => query.category_filter().matches(category),
                    None => query.category_filter().matches(&value.to_string()),
                }
            }
            // Tables without a category column ignore the dropdown
            None => true,
        };
        if !in_category {
            return false;
        }

        needle.is_empty()
            || schema.searchable.iter().any(|&field| {
                record
                    .field(field)
                    .as_text()
                    .is_some_and(|text| text.to_lowercase().contains(needle))
            })
    }

    /// Sum value and gain over rows and derive the return on implied cost basis.
    pub fn totals<R: Record>(&self, rows: &[&R]) -> ViewTotals {
        let (total_value, total_gain) = rows.iter().fold((0.0, 0.0), |(value, gain), row| {
            let c = row.contribution();
            (value + c.value, gain + c.gain)
        });

        // Cost basis is value - gain; a non-positive basis has no meaningful return
        let basis = total_value - total_gain;
        let total_gain_percent = if basis > 0.0 {
            (total_gain / basis) * 100.0
        } else {
            0.0
        };

        ViewTotals {
            count: rows.len(),
            total_value,
            total_gain,
            total_gain_percent,
        }
    }

    /// Options for the category dropdown: "all" followed by each distinct
    /// category in first-seen order. Just `["all"]` for tables without one.
    pub fn distinct_categories<R: Record>(
        &self,
        dataset: &[R],
        schema: &TableSchema<R::Field>,
    ) -> Vec<String> {
        let mut categories = vec!["all".to_string()];
        if let Some(field) = schema.category {
            for record in dataset {
                let label = record.field(field).to_string();
                if !categories.contains(&label) {
                    categories.push(label);
                }
            }
        }
        categories
    }

    /// Group rows by a column and express each group's value as a share of
    /// the rows' total value. Groups keep first-seen order.
    pub fn allocation<R: Record>(&self, rows: &[&R], group_by: R::Field) -> Vec<AllocationSlice> {
        let mut slices: Vec<AllocationSlice> = Vec::new();
        let mut total = 0.0;

        for row in rows {
            let value = row.contribution().value;
            let label = row.field(group_by).to_string();
            total += value;
            match slices.iter_mut().find(|s| s.label == label) {
                Some(slice) => slice.value += value,
                None => slices.push(AllocationSlice {
                    label,
                    value,
                    percent: 0.0,
                }),
            }
        }

        for slice in &mut slices {
            slice.percent = if total > 0.0 {
                (slice.value / total) * 100.0
            } else {
                0.0
            };
        }
        slices
    }
}

impl Default for ViewService {
    fn default() -> Self {
        Self::new()
    }
}

/// Order two cells of the same column.
///
/// Total order, as `sort_by` requires: NaN sorts after every number (and
/// equal to other NaNs), and cells of different kinds order by kind
/// (numbers, then dates, then text).
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => collate(a, b),
        (FieldValue::Number(a), FieldValue::Number(b)) => compare_numbers(*a, *b),
        (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

fn kind_rank(value: &FieldValue<'_>) -> u8 {
    match value {
        FieldValue::Number(_) => 0,
        FieldValue::Date(_) => 1,
        FieldValue::Text(_) => 2,
    }
}

/// Locale-style string ordering for table columns.
///
/// Letters compare case-insensitively first ("apple" < "Banana"); on a
/// case-only difference lowercase sorts before uppercase ("a" < "A"); code
/// point order breaks any remaining tie so the ordering is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => Ordering::Equal,
                })
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}
