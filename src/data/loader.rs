use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{Dataset, Row, Value};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tabular dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with column names, one record per line
/// * `.json`    – `[{ "col": value, ... }, ...]` (records orientation)
/// * `.parquet` – flat table of scalar columns
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names; the header order becomes the
/// dataset's column order. Cell types are guessed per cell.
fn load_csv(path: &Path) -> Result<Dataset> {
    let reader = csv::Reader::from_path(path).context("opening CSV")?;
    read_csv(reader)
}

fn read_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let mut row = Row::new();
        for (col_idx, cell) in record.iter().enumerate() {
            let Some(col_name) = headers.get(col_idx) else {
                bail!("CSV row {row_no} has more cells than header columns");
            };
            row.insert(col_name.clone(), guess_value(cell));
        }
        rows.push(row);
    }

    Ok(Dataset::new(rows, headers))
}

/// Guess a cell's type from its text: int, float, bool, empty → null,
/// anything else stays a string.
fn guess_value(s: &str) -> Value {
    if s.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Value::Float(f);
    }
    if s == "true" || s == "false" {
        return Value::Bool(s == "true");
    }
    Value::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "region": "North", "units": 120, "revenue": 8400.5 },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<Dataset> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        let mut row = Row::new();
        for (key, val) in obj {
            row.insert(key.clone(), json_to_value(val));
        }
        rows.push(row);
    }

    // JSON objects carry no declared column order; derive it from row keys.
    Ok(Dataset::from_rows(rows))
}

fn json_to_value(val: &JsonValue) -> Value {
    match val {
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Null => Value::Null,
        other => Value::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing a flat table of scalar columns
/// (strings, ints, floats, bools). The schema order becomes the dataset's
/// column order.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        if columns.is_empty() {
            columns = schema.fields().iter().map(|f| f.name().clone()).collect();
        }

        for row_idx in 0..batch.num_rows() {
            let mut row = Row::new();
            for (col_idx, col_name) in columns.iter().enumerate() {
                let col_array = batch.column(col_idx);
                let value = extract_value(col_array, row_idx).with_context(|| {
                    format!("Row {row_idx}: failed to read column '{col_name}'")
                })?;
                row.insert(col_name.clone(), value);
            }
            rows.push(row);
        }
    }

    Ok(Dataset::new(rows, columns))
}

/// Extract a single scalar value from an Arrow column at a given row.
fn extract_value(col: &Arc<dyn Array>, row: usize) -> Result<Value> {
    if col.is_null(row) {
        return Ok(Value::Null);
    }
    let value = match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Value::String(arr.value(row).to_string())
        }
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Value::Integer(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Value::Integer(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Value::Float(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Value::Float(arr.value(row))
        }
        DataType::Boolean => {
            let arr = col
                .as_any()
                .downcast_ref::<BooleanArray>()
                .context("expected BooleanArray")?;
            Value::Bool(arr.value(row))
        }
        other => bail!("Unsupported column type {other:?} (expected a flat scalar table)"),
    };
    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_header_order_and_type_guessing() {
        let input = "name,age,score,active,note\nAlice,42,4.2,true,\nBob,x,9.9,false,hi\n";
        let reader = csv::Reader::from_reader(input.as_bytes());
        let ds = read_csv(reader).expect("parse csv");

        assert_eq!(
            ds.columns,
            vec!["name", "age", "score", "active", "note"]
        );
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.value(0, "name"), Some(&Value::String("Alice".into())));
        assert_eq!(ds.value(0, "age"), Some(&Value::Integer(42)));
        assert_eq!(ds.value(0, "score"), Some(&Value::Float(4.2)));
        assert_eq!(ds.value(0, "active"), Some(&Value::Bool(true)));
        assert_eq!(ds.value(0, "note"), Some(&Value::Null));
        assert_eq!(ds.value(1, "age"), Some(&Value::String("x".into())));
    }

    #[test]
    fn json_records_parse() {
        let input = r#"[
            {"region": "North", "units": 120, "revenue": 8400.5, "flagged": false},
            {"region": "South", "units": null, "revenue": 7100.0, "flagged": true}
        ]"#;
        let ds = parse_json(input).expect("parse json");

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.value(0, "units"), Some(&Value::Integer(120)));
        assert_eq!(ds.value(1, "units"), Some(&Value::Null));
        assert_eq!(ds.value(1, "flagged"), Some(&Value::Bool(true)));
        // Derived column order: first row's keys, sorted.
        assert_eq!(ds.columns, vec!["flagged", "region", "revenue", "units"]);
    }

    #[test]
    fn json_rejects_non_array() {
        assert!(parse_json(r#"{"a": 1}"#).is_err());
        assert!(parse_json("not json").is_err());
    }

    #[test]
    fn unsupported_extension_rejected() {
        let err = load_file(Path::new("data.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }
}
