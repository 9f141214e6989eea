use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Classification policy
// ---------------------------------------------------------------------------

/// How numeric-ness of a column is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifyPolicy {
    /// Inspect the first row only: the column is numeric when that cell is
    /// non-null and coerces to a finite number. O(columns), cheap, and
    /// fragile when later rows disagree with the first.
    #[default]
    FirstRowSample,
    /// Scan the whole column: numeric when more than half of the non-null
    /// cells coerce. A column with no non-null cells is not numeric.
    FullColumnMajorityVote,
}

impl ClassifyPolicy {
    /// Display label for the policy selector.
    pub fn label(&self) -> &'static str {
        match self {
            ClassifyPolicy::FirstRowSample => "First row sample",
            ClassifyPolicy::FullColumnMajorityVote => "Full column majority",
        }
    }
}

// ---------------------------------------------------------------------------
// NumericColumns – the classified subset, in column order
// ---------------------------------------------------------------------------

/// Ordered set of columns classified as numeric.
///
/// Membership is decided once per dataset snapshot and stays fixed for that
/// snapshot's lifetime, even if rows outside the sampled ones would have
/// voted differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumericColumns(Vec<String>);

impl NumericColumns {
    pub fn contains(&self, column: &str) -> bool {
        self.0.iter().any(|c| c == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.as_str())
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(|c| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

/// Decide which of the dataset's columns are numeric.
///
/// An empty dataset yields an empty set under either policy. The result
/// preserves the dataset's column order.
pub fn classify(dataset: &Dataset, policy: ClassifyPolicy) -> NumericColumns {
    let columns = dataset
        .columns
        .iter()
        .filter(|col| match policy {
            ClassifyPolicy::FirstRowSample => first_row_numeric(dataset, col),
            ClassifyPolicy::FullColumnMajorityVote => majority_numeric(dataset, col),
        })
        .cloned()
        .collect();
    NumericColumns(columns)
}

fn first_row_numeric(dataset: &Dataset, column: &str) -> bool {
    dataset
        .rows
        .first()
        .and_then(|row| row.get(column))
        .is_some_and(|v| v.as_number().is_some())
}

fn majority_numeric(dataset: &Dataset, column: &str) -> bool {
    let mut non_null = 0usize;
    let mut numeric = 0usize;
    for row in &dataset.rows {
        match row.get(column) {
            None => {}
            Some(v) if v.is_null() => {}
            Some(v) => {
                non_null += 1;
                if v.as_number().is_some() {
                    numeric += 1;
                }
            }
        }
    }
    non_null > 0 && numeric * 2 > non_null
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Row, Value};

    fn row(cells: &[(&str, Value)]) -> Row {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn dataset(rows: Vec<Row>, columns: &[&str]) -> Dataset {
        Dataset::new(rows, columns.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn first_row_sample_inspects_only_the_first_row() {
        let ds = dataset(
            vec![
                row(&[
                    ("name", Value::String("Alice".into())),
                    ("age", Value::Integer(42)),
                    ("score", Value::String("3.5".into())),
                ]),
                // Later rows disagree with the classification; it must not change.
                row(&[
                    ("name", Value::Integer(7)),
                    ("age", Value::String("old".into())),
                    ("score", Value::Null),
                ]),
            ],
            &["name", "age", "score"],
        );

        let numeric = classify(&ds, ClassifyPolicy::FirstRowSample);
        assert!(!numeric.contains("name"));
        assert!(numeric.contains("age"));
        assert!(numeric.contains("score"));
        assert_eq!(numeric.len(), 2);
    }

    #[test]
    fn empty_dataset_classifies_nothing() {
        let ds = dataset(Vec::new(), &["a", "b"]);
        assert!(classify(&ds, ClassifyPolicy::FirstRowSample).is_empty());
        assert!(classify(&ds, ClassifyPolicy::FullColumnMajorityVote).is_empty());
    }

    #[test]
    fn null_first_cell_is_not_numeric() {
        let ds = dataset(
            vec![
                row(&[("a", Value::Null)]),
                row(&[("a", Value::Integer(1))]),
            ],
            &["a"],
        );
        assert!(!classify(&ds, ClassifyPolicy::FirstRowSample).contains("a"));
    }

    #[test]
    fn majority_vote_overrules_a_misleading_first_row() {
        let ds = dataset(
            vec![
                row(&[("a", Value::Integer(1)), ("b", Value::String("x".into()))]),
                row(&[("a", Value::String("x".into())), ("b", Value::Integer(2))]),
                row(&[("a", Value::String("y".into())), ("b", Value::Integer(3))]),
            ],
            &["a", "b"],
        );

        let numeric = classify(&ds, ClassifyPolicy::FullColumnMajorityVote);
        // "a" is numeric in 1 of 3 non-null cells, "b" in 2 of 3.
        assert!(!numeric.contains("a"));
        assert!(numeric.contains("b"));
    }

    #[test]
    fn majority_vote_ignores_nulls() {
        let ds = dataset(
            vec![
                row(&[("a", Value::Null)]),
                row(&[("a", Value::Null)]),
                row(&[("a", Value::Integer(5))]),
            ],
            &["a"],
        );
        // 1 numeric of 1 non-null cell.
        assert!(classify(&ds, ClassifyPolicy::FullColumnMajorityVote).contains("a"));
    }

    #[test]
    fn result_preserves_column_order() {
        let ds = dataset(
            vec![row(&[
                ("z", Value::Integer(1)),
                ("m", Value::Integer(2)),
                ("a", Value::Integer(3)),
            ])],
            &["z", "m", "a"],
        );
        let numeric = classify(&ds, ClassifyPolicy::FirstRowSample);
        let order: Vec<&str> = numeric.iter().collect();
        assert_eq!(order, vec!["z", "m", "a"]);
    }
}
