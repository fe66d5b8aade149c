//! # Values and Row Sets
//!
//! `Value` is the typed cell of a generated row; `RowSet` is the transient,
//! column-ordered collection a generator hands to the loader. A `RowSet` is
//! created by one generator call, uploaded once, and discarded — it never
//! outlives the pipeline step that produced it.
//!
//! The `String` variant uses `Cow<'static, str>` so values drawn from static
//! lookup tables (regions, damage types, the note vocabulary) are held as
//! zero-cost `&'static str` borrows, while generated values (names, phone
//! numbers) are stored as owned `String`s.

use std::borrow::Cow;

use chrono::NaiveDate;

/// A generated value for a database column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
    Date(NaiveDate),
}

impl Value {
    /// Wrap a static string literal without allocating.
    pub fn text(s: &'static str) -> Self {
        Value::String(Cow::Borrowed(s))
    }

    /// Wrap a dynamically generated string.
    pub fn owned(s: String) -> Self {
        Value::String(Cow::Owned(s))
    }

    /// Convert to a SQL literal suitable for an SQLite INSERT statement.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => {
                if f.is_finite() {
                    format!("{}", f)
                } else {
                    "NULL".to_string()
                }
            }
            Value::String(s) => format!("'{}'", s.replace('\'', "''")),
            Value::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d),
        }
    }
}

/// A transient, column-ordered collection of generated rows.
///
/// Column order is fixed at construction and every row must match it; the
/// loader validates the column names against the target table before any
/// insert happens.
#[derive(Debug, Clone)]
pub struct RowSet {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl RowSet {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. The row must have one value per declared column.
    pub fn push(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a cell by row index and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let col_idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(col_idx)
    }

    /// Iterate over all values of one column.
    pub fn column_values<'a>(&'a self, column: &str) -> impl Iterator<Item = &'a Value> + 'a {
        let col_idx = self.columns.iter().position(|c| c == column);
        self.rows
            .iter()
            .filter_map(move |row| col_idx.and_then(|i| row.get(i)))
    }
}
