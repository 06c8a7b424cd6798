use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

use crate::errors::DashboardError;
use crate::models::query::TableSchema;

/// A single typed cell read from a record.
///
/// The engine picks the comparator from the variant, so string columns get
/// collation and numeric columns get arithmetic ordering without any runtime
/// type sniffing on the caller's side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDateTime),
}

impl<'a> FieldValue<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Date(dt) => {
                if dt.time() == chrono::NaiveTime::MIN {
                    write!(f, "{}", dt.date())
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S"))
                }
            }
        }
    }
}

/// What a record adds to the aggregate totals of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Contribution {
    /// Current market value of the row
    pub value: f64,

    /// Absolute gain of the row (already multiplied by quantity for per-share data)
    pub gain: f64,
}

/// One row type of a tabular dataset.
///
/// `Field` is the closed set of column names for the record. Each dataset
/// declares its own schema (searchable, sortable and category columns) so
/// every widget runs the same engine against its own data.
pub trait Record {
    type Field: Copy + Eq + fmt::Debug + fmt::Display + FromStr<Err = DashboardError> + 'static;

    /// Dataset name used in logs and error messages.
    const DATASET: &'static str;

    /// Typed accessor for a single column.
    fn field(&self, field: Self::Field) -> FieldValue<'_>;

    /// All columns in display order.
    fn columns() -> &'static [Self::Field];

    /// Default table configuration for this dataset.
    fn schema() -> TableSchema<Self::Field>;

    /// Contribution to view totals. Datasets without a value column add nothing.
    fn contribution(&self) -> Contribution {
        Contribution::default()
    }
}

/// Declares a column enum with its wire/column names, `Display`, `FromStr`
/// and an `ALL` list in declaration order.
macro_rules! record_fields {
    (
        $(#[$meta:meta])*
        $name:ident in $dataset:literal {
            $($variant:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Column name as shown in table headers and exports.
            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.key())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::DashboardError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    other => Err($crate::errors::DashboardError::unknown_field($dataset, other)),
                }
            }
        }
    };
}

pub(crate) use record_fields;
