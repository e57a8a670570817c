use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

/// Immutable tabular snapshot delivered for one load/refresh cycle.
///
/// Every cell is held as text; numeric ordering is inferred at comparison time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Column names, one per logical column
    pub columns: Vec<String>,
    /// Records aligned positionally with `columns`
    pub rows: Vec<Vec<String>>,
    /// Row count as reported by the source
    pub row_count: usize,
    /// Column count as reported by the source
    pub column_count: usize,
}

impl Payload {
    /// Builds a payload whose records all have exactly `columns.len()` cells.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let row_count = rows.len();
        let column_count = columns.len();
        Self::with_reported_counts(columns, rows, row_count, column_count)
    }

    pub fn with_reported_counts(
        columns: Vec<String>,
        mut rows: Vec<Vec<String>>,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let width = columns.len();
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self {
            columns,
            rows,
            row_count,
            column_count,
        }
    }

    /// Cell text at (row, column); absent cells read as empty.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn shape_display(&self) -> String {
        let rows = if self.row_count == 1 { "row" } else { "rows" };
        let cols = if self.column_count == 1 {
            "column"
        } else {
            "columns"
        };
        format!(
            "{} {} × {} {}",
            self.row_count, rows, self.column_count, cols
        )
    }
}

/// What a data source produced for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Arc<Payload>),
    /// Upstream reported an error; the text is shown verbatim
    Failed(String),
    /// Neither data nor an error yet
    Pending,
}

/// Wire shape of the intermediate file written by the export transport.
///
/// Success: `{ columns, rows, rowCount, columnCount }`. Failure: `{ error }`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadEnvelope {
    #[serde(default)]
    pub columns: Option<Vec<Value>>,
    #[serde(default)]
    pub rows: Option<Vec<Value>>,
    /// Kept loose: a count that is not a non-negative integer is ignored
    #[serde(default)]
    pub row_count: Option<Value>,
    #[serde(default)]
    pub column_count: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PayloadEnvelope {
    pub fn into_outcome(self) -> LoadOutcome {
        if let Some(error) = self.error {
            return LoadOutcome::Failed(error);
        }

        let (Some(columns), Some(rows)) = (self.columns, self.rows) else {
            return LoadOutcome::Pending;
        };

        let columns: Vec<String> = columns.iter().map(cell_text).collect();
        let rows: Vec<Vec<String>> = rows.iter().map(record_cells).collect();
        let row_count = reported_count(self.row_count.as_ref()).unwrap_or(rows.len());
        let column_count = reported_count(self.column_count.as_ref()).unwrap_or(columns.len());

        LoadOutcome::Loaded(Arc::new(Payload::with_reported_counts(
            columns,
            rows,
            row_count,
            column_count,
        )))
    }
}

fn reported_count(value: Option<&Value>) -> Option<usize> {
    value
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
}

fn record_cells(record: &Value) -> Vec<String> {
    match record {
        Value::Array(cells) => cells.iter().map(cell_text).collect(),
        // A scalar where a record was expected becomes a one-cell record
        other => vec![cell_text(other)],
    }
}

/// Text form of a JSON cell. `null` is empty; strings are taken as-is.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
