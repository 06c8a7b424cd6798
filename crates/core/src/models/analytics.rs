use serde::{Deserialize, Serialize};

/// Aggregate totals over a filtered view (never the full dataset).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewTotals {
    /// Number of rows in the view
    pub count: usize,

    /// Sum of the rows' market value
    pub total_value: f64,

    /// Sum of the rows' absolute gain
    pub total_gain: f64,

    /// Return on the implied cost basis: gain / (value - gain) * 100.
    /// Zero when the implied basis is zero or negative.
    pub total_gain_percent: f64,
}

/// The filtered, sorted rows of a dataset plus their totals.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a, R> {
    /// Rows in display order, borrowed from the dataset
    pub rows: Vec<&'a R>,

    /// Totals over `rows`
    pub totals: ViewTotals,
}

impl<R> DerivedView<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// One slice of an allocation chart (by asset, sector or category).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// Group label (e.g., "Technology", "Large Cap")
    pub label: String,

    /// Summed market value of the group
    pub value: f64,

    /// Share of the view total, in percent
    pub percent: f64,
}
