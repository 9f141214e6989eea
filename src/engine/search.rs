use crate::data::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// Page – one display window over the filtered rows
// ---------------------------------------------------------------------------

/// A filtered, paginated window borrowed from the dataset snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// The rows of the current page, in dataset order.
    pub rows: Vec<&'a Row>,
    /// The requested index clamped into `1..=total_pages`
    /// (stays 1 when there are no pages at all).
    pub page_index: usize,
    /// `ceil(filtered / page_size)`; 0 when nothing matches.
    pub total_pages: usize,
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Whether a row matches a free-text query: any column's stringified value
/// contains the query, case-insensitively. The empty query matches every
/// row. Null and missing cells never match.
pub fn row_matches(row: &Row, columns: &[String], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    columns.iter().any(|col| match row.get(col) {
        None => false,
        Some(v) if v.is_null() => false,
        Some(v) => v.to_string().to_lowercase().contains(&needle),
    })
}

// ---------------------------------------------------------------------------
// filter_and_page
// ---------------------------------------------------------------------------

/// Filter the snapshot by `query`, then slice out the requested page.
///
/// Page indices are 1-based. Out-of-range requests are clamped into
/// `[1, total_pages]`; this clamp is the one documented exception to the
/// engine's no-silent-fallback rule. `page_size` must be at least 1.
///
/// Pure over the snapshot: identical arguments always produce an identical
/// window, and the underlying rows are only borrowed, never copied or
/// reordered.
pub fn filter_and_page<'a>(
    dataset: &'a Dataset,
    query: &str,
    page_index: usize,
    page_size: usize,
) -> Page<'a> {
    debug_assert!(page_size > 0, "page_size must be at least 1");
    let page_size = page_size.max(1);

    let filtered: Vec<&Row> = dataset
        .rows
        .iter()
        .filter(|row| row_matches(row, &dataset.columns, query))
        .collect();

    let total_pages = filtered.len().div_ceil(page_size);
    let page_index = page_index.clamp(1, total_pages.max(1));

    let start = (page_index - 1) * page_size;
    let rows = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Page {
        rows,
        page_index,
        total_pages,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Value;

    fn people_dataset(n: usize) -> Dataset {
        let rows: Vec<Row> = (0..n)
            .map(|i| {
                [
                    ("name".to_string(), Value::String(format!("Person{i}"))),
                    ("city".to_string(), {
                        if i % 2 == 0 {
                            Value::String("Vienna".into())
                        } else {
                            Value::String("Graz".into())
                        }
                    }),
                    ("age".to_string(), Value::Integer(20 + i as i64)),
                ]
                .into_iter()
                .collect()
            })
            .collect();
        Dataset::new(rows, vec!["name".into(), "city".into(), "age".into()])
    }

    #[test]
    fn empty_query_matches_every_row() {
        let ds = people_dataset(25);
        let page = filter_and_page(&ds, "", 1, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.rows.len(), 10);
    }

    #[test]
    fn matching_is_case_insensitive_across_columns() {
        let ds = people_dataset(10);
        let by_city = filter_and_page(&ds, "VIENNA", 1, 10);
        assert_eq!(by_city.rows.len(), 5);

        // Numbers match through their stringified form.
        let by_age = filter_and_page(&ds, "23", 1, 10);
        assert_eq!(by_age.rows.len(), 1);
        assert_eq!(by_age.rows[0].get("name"), Some(&Value::String("Person3".into())));
    }

    #[test]
    fn null_cells_never_match() {
        let rows: Vec<Row> = vec![
            [("note".to_string(), Value::Null)].into_iter().collect(),
        ];
        let ds = Dataset::new(rows, vec!["note".into()]);
        assert_eq!(filter_and_page(&ds, "null", 1, 10).rows.len(), 0);
        assert_eq!(filter_and_page(&ds, "", 1, 10).rows.len(), 1);
    }

    #[test]
    fn page_count_is_ceiling_of_filtered_rows() {
        let ds = people_dataset(21);
        assert_eq!(filter_and_page(&ds, "", 1, 10).total_pages, 3);
        assert_eq!(filter_and_page(&ds, "", 1, 7).total_pages, 3);
        assert_eq!(filter_and_page(&ds, "", 1, 21).total_pages, 1);
    }

    #[test]
    fn out_of_range_page_indices_clamp() {
        let ds = people_dataset(25);
        // Below range → first page.
        assert_eq!(filter_and_page(&ds, "", 0, 10).page_index, 1);
        // Above range → last page, with the short tail.
        let last = filter_and_page(&ds, "", 4, 10);
        assert_eq!(last.page_index, 3);
        assert_eq!(last.rows.len(), 5);
    }

    #[test]
    fn no_matches_means_zero_pages() {
        let ds = people_dataset(5);
        let page = filter_and_page(&ds, "zzz", 3, 10);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page_index, 1);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn identical_arguments_return_an_identical_window() {
        let ds = people_dataset(25);
        let a = filter_and_page(&ds, "vienna", 2, 5);
        let b = filter_and_page(&ds, "vienna", 2, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn window_preserves_dataset_order() {
        let ds = people_dataset(25);
        let page = filter_and_page(&ds, "", 2, 10);
        let names: Vec<&Value> = page
            .rows
            .iter()
            .filter_map(|row| row.get("name"))
            .collect();
        assert_eq!(names[0], &Value::String("Person10".into()));
        assert_eq!(names[9], &Value::String("Person19".into()));
    }
}
