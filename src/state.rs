use crate::data::model::Dataset;
use crate::engine::classify::{ClassifyPolicy, NumericColumns, classify};

// ---------------------------------------------------------------------------
// View state – the UI-local search and pagination cursor
// ---------------------------------------------------------------------------

/// Search query and pagination cursor for the preview table. Derived UI
/// state, independent of the dataset itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub query: String,
    /// 1-based; the engine clamps out-of-range requests.
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page_index: 1,
            page_size: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// Chart kind / central tab
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Line, ChartKind::Pie];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Pie => "Pie",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Preview,
    Analysis,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is an immutable snapshot: opening a file swaps it and every
/// value derived from it (numeric set, selection, view cursor) in one step,
/// so nothing computed against a discarded snapshot can leak into the UI.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<Dataset>,

    /// Columns classified numeric for the current snapshot (cached; the
    /// classification runs once per snapshot).
    pub numeric_columns: NumericColumns,

    /// Active classification policy.
    pub classify_policy: ClassifyPolicy,

    /// Numeric columns selected for charts/statistics, in click order.
    pub selected_columns: Vec<String>,

    /// Which chart the analysis tab draws.
    pub chart_kind: ChartKind,

    /// Active central-panel tab.
    pub tab: Tab,

    /// Search query and pagination cursor for the preview table.
    pub view: ViewState,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            numeric_columns: NumericColumns::default(),
            classify_policy: ClassifyPolicy::default(),
            selected_columns: Vec::new(),
            chart_kind: ChartKind::default(),
            tab: Tab::default(),
            view: ViewState::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: classify once, select the first
    /// numeric column, reset the view cursor. The previous snapshot and
    /// everything derived from it are dropped together.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.numeric_columns = classify(&dataset, self.classify_policy);
        self.selected_columns = self
            .numeric_columns
            .first()
            .map(|c| vec![c.to_string()])
            .unwrap_or_default();
        self.view = ViewState::default();

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Drop the dataset and return to the initial state.
    pub fn clear_dataset(&mut self) {
        let policy = self.classify_policy;
        *self = Self::default();
        self.classify_policy = policy;
    }

    /// Switch classification policy and re-derive the numeric set for the
    /// current snapshot. Selected columns that lose their numeric status
    /// are pruned.
    pub fn set_classify_policy(&mut self, policy: ClassifyPolicy) {
        self.classify_policy = policy;
        if let Some(ds) = &self.dataset {
            self.numeric_columns = classify(ds, policy);
            self.selected_columns
                .retain(|c| self.numeric_columns.contains(c));
        }
    }

    /// Toggle a numeric column in the chart/statistics selection,
    /// preserving click order for the columns that stay.
    pub fn toggle_column(&mut self, column: &str) {
        if let Some(pos) = self.selected_columns.iter().position(|c| c == column) {
            self.selected_columns.remove(pos);
        } else if self.numeric_columns.contains(column) {
            self.selected_columns.push(column.to_string());
        }
    }

    /// Update the search query; a new query always starts at page 1.
    pub fn set_query(&mut self, query: String) {
        if self.view.query != query {
            self.view.query = query;
            self.view.page_index = 1;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
