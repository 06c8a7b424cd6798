use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::DashboardError;

/// Which columns of a dataset take part in search, sorting and filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema<F> {
    /// Text columns matched by the free-text search box
    pub searchable: Vec<F>,

    /// Columns whose header can be clicked to sort
    pub sortable: Vec<F>,

    /// Column compared against the category dropdown, if the table has one
    pub category: Option<F>,

    /// Sort column a fresh view starts with (`None` keeps input order)
    pub default_sort: Option<F>,
}

impl<F: Copy + Eq> TableSchema<F> {
    pub fn new(searchable: Vec<F>, sortable: Vec<F>) -> Self {
        Self {
            searchable,
            sortable,
            category: None,
            default_sort: None,
        }
    }

    pub fn with_category(mut self, field: F) -> Self {
        self.category = Some(field);
        self
    }

    pub fn with_default_sort(mut self, field: F) -> Self {
        self.default_sort = Some(field);
        self
    }

    pub fn is_sortable(&self, field: F) -> bool {
        self.sortable.contains(&field)
    }
}

/// Sort direction of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    #[default]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(DashboardError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// Category dropdown selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Matches every record regardless of category
    #[default]
    All,
    /// Exact, case-sensitive match against the category column
    Only(String),
}

impl CategoryFilter {
    pub const ALL_KEY: &'static str = "all";

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == Self::ALL_KEY {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(s: String) -> Self {
        if s == Self::ALL_KEY {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => CategoryFilter::ALL_KEY.to_string(),
            CategoryFilter::Only(s) => s,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", Self::ALL_KEY),
            CategoryFilter::Only(s) => write!(f, "{s}"),
        }
    }
}

/// User-controlled search/filter/sort parameters of one table view.
///
/// Created with the schema defaults when a widget is built and dropped with
/// it; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState<F> {
    search_text: String,
    category_filter: CategoryFilter,
    sort_field: Option<F>,
    sort_direction: SortDirection,
}

impl<F: Copy + Eq + std::fmt::Debug + FromStr<Err = DashboardError>> QueryState<F> {
    /// Empty search, all categories, descending on the schema's default column.
    pub fn for_schema(schema: &TableSchema<F>) -> Self {
        Self {
            search_text: String::new(),
            category_filter: CategoryFilter::All,
            sort_field: schema.default_sort,
            sort_direction: SortDirection::Descending,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn category_filter(&self) -> &CategoryFilter {
        &self.category_filter
    }

    pub fn sort_field(&self) -> Option<F> {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        tracing::trace!(search = %self.search_text, "search text updated");
    }

    pub fn set_category(&mut self, filter: impl Into<CategoryFilter>) {
        self.category_filter = filter.into();
        tracing::trace!(category = %self.category_filter, "category filter updated");
    }

    /// Set the sort explicitly, bypassing the header toggle rule.
    pub fn set_sort(&mut self, field: Option<F>, direction: SortDirection) {
        self.sort_field = field;
        self.sort_direction = direction;
    }

    /// Header click: flip direction on the active column, otherwise switch
    /// to the clicked column sorted descending.
    pub fn click_header(&mut self, field: F) {
        if self.sort_field == Some(field) {
            self.sort_direction = self.sort_direction.flip();
        } else {
            self.sort_field = Some(field);
            self.sort_direction = SortDirection::Descending;
        }
        tracing::trace!(field = ?field, direction = %self.sort_direction, "sort header clicked");
    }

    /// Header click by column name. Unknown names leave the state untouched.
    pub fn click_header_named(&mut self, name: &str) -> Result<F, DashboardError> {
        let field = name.parse::<F>()?;
        self.click_header(field);
        Ok(field)
    }

    /// Back to the schema defaults.
    pub fn reset(&mut self, schema: &TableSchema<F>) {
        *self = Self::for_schema(schema);
    }
}
