use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Value – a single cell in a table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common tabular dtypes.
/// Cleansed files carry no enforced schema, so a column may hold a mix.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => write!(f, ""),
        }
    }
}

impl Value {
    /// Try to read the value as a finite number.
    ///
    /// Integers and finite floats convert directly; strings are parsed
    /// (`"3.5"` counts, `"abc"` does not). Booleans and nulls never coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Float(v) if v.is_finite() => Some(*v),
            Value::Integer(i) => Some(*i as f64),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// Whether the cell is missing.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

// ---------------------------------------------------------------------------
// Row / Dataset – one immutable table snapshot
// ---------------------------------------------------------------------------

/// One table row: column name → cell value.
pub type Row = BTreeMap<String, Value>;

/// The full parsed table. One file open produces one snapshot; the next
/// open replaces it wholesale, so rows and columns never mutate in place.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All rows, in file order.
    pub rows: Vec<Row>,
    /// Ordered column list, authoritative for the snapshot's lifetime.
    pub columns: Vec<String>,
}

impl Dataset {
    /// Build a dataset from rows and an explicit column order
    /// (CSV header, Parquet schema).
    pub fn new(rows: Vec<Row>, columns: Vec<String>) -> Self {
        Dataset { rows, columns }
    }

    /// Build a dataset from rows alone, deriving the column order from the
    /// first row's keys. Sources without a header land here.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();
        Dataset { rows, columns }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell lookup; `None` when the row index is out of range or the row
    /// has no entry for the column.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
