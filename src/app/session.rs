use std::sync::Arc;

use crate::app::engine::{TableView, ViewOptions, WindowChange};
use crate::app::render_cache::RenderCache;
use crate::domain::Payload;

/// One open table: the engine plus its display cache, kept in step.
#[derive(Debug, Clone)]
pub struct TableSession {
    view: TableView,
    cache: RenderCache,
}

impl TableSession {
    pub fn new(payload: Arc<Payload>, options: ViewOptions) -> Self {
        let view = TableView::new(payload, options);
        let cache = RenderCache::build(&view);
        Self { view, cache }
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn cache(&self) -> &RenderCache {
        &self.cache
    }

    /// Runs `f` against the engine and syncs the cache with the resulting
    /// window change.
    pub fn update<F>(&mut self, f: F) -> WindowChange
    where
        F: FnOnce(&mut TableView) -> WindowChange,
    {
        let change = f(&mut self.view);
        self.cache.apply(&self.view, &change);
        change
    }

    // Width edits leave the row sequence alone, so the cache stays valid.

    pub fn begin_resize(&mut self, column: usize, pointer_x: u16, current_width: u16) {
        self.view.begin_resize(column, pointer_x, current_width);
    }

    pub fn drag_resize(&mut self, pointer_x: u16) -> Option<(usize, u16)> {
        self.view.drag_resize(pointer_x)
    }

    pub fn end_resize(&mut self) -> Option<(usize, u16)> {
        self.view.end_resize()
    }

    pub fn nudge_width(&mut self, column: usize, current: u16, delta: i16) -> u16 {
        self.view.nudge_width(column, current, delta)
    }

    /// Filter text edits are recorded without recomputing.
    pub fn edit_filter(&mut self, column: usize, text: impl Into<String>) {
        self.view.edit_filter(column, text);
    }
}

/// What the viewer currently has to show.
#[derive(Debug, Clone, Default)]
pub enum DataState {
    #[default]
    Loading,
    /// Payload could not be read or parsed
    Unavailable(String),
    /// The source reported an error; shown verbatim
    Failed(String),
    Ready(Box<TableSession>),
}

impl DataState {
    pub fn session(&self) -> Option<&TableSession> {
        match self {
            Self::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut TableSession> {
        match self {
            Self::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
