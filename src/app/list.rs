// src/app/list.rs
use std::collections::HashMap;
use std::ops::Range;

use super::card::{self, CardState, CardView};
use super::data::Movie;

/// Card state keyed by movie id. Cards never share or leak state into siblings.
#[derive(Clone, Debug, Default)]
pub struct CardStates {
    by_id: HashMap<String, CardState>,
}

impl CardStates {
    pub fn is_expanded(&self, id: &str) -> bool {
        self.by_id.get(id).is_some_and(|st| st.expanded)
    }

    /// Flip one card and return its new `expanded` value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let st = self.by_id.entry(id.to_string()).or_default();
        st.toggle();
        st.expanded
    }

    pub fn expanded_count(&self) -> usize {
        self.by_id.values().filter(|st| st.expanded).count()
    }
}

/// One card view per movie, in list order.
pub fn render_list<'a>(movies: &'a [Movie], states: &CardStates) -> Vec<CardView<'a>> {
    render_window(movies, states, 0..movies.len())
        .into_iter()
        .map(|(_, view)| view)
        .collect()
}

/// Card views for the rows in `window` only, each paired with its list index.
/// The window is clamped to the list.
pub fn render_window<'a>(
    movies: &'a [Movie],
    states: &CardStates,
    window: Range<usize>,
) -> Vec<(usize, CardView<'a>)> {
    let end = window.end.min(movies.len());
    let start = window.start.min(end);
    movies[start..end]
        .iter()
        .enumerate()
        .map(|(i, m)| (start + i, card::render(m, states.is_expanded(&m.id))))
        .collect()
}

/// Row heights for virtualization: measured once painted, estimated before that.
#[derive(Clone, Debug)]
pub struct RowHeights {
    estimate: f32,
    measured: HashMap<String, f32>,
}

impl RowHeights {
    pub fn new(estimate: f32) -> Self {
        Self {
            estimate: estimate.max(1.0),
            measured: HashMap::new(),
        }
    }

    pub fn is_measured(&self, id: &str) -> bool {
        self.measured.contains_key(id)
    }

    pub fn height_of(&self, id: &str) -> f32 {
        self.measured.get(id).copied().unwrap_or(self.estimate)
    }

    /// Store a measured height; returns true when it moved enough to matter.
    pub fn record(&mut self, id: &str, height: f32) -> bool {
        let height = height.max(1.0);
        let prev = self.measured.insert(id.to_string(), height);
        prev.map_or(true, |p| (p - height).abs() > 0.5)
    }

    pub fn heights_for(&self, movies: &[Movie]) -> Vec<f32> {
        movies.iter().map(|m| self.height_of(&m.id)).collect()
    }
}

pub fn offset_of(heights: &[f32], idx: usize) -> f32 {
    heights.iter().take(idx).sum()
}

pub fn total_height(heights: &[f32]) -> f32 {
    heights.iter().sum()
}

/// Rows touching `[scroll_offset, scroll_offset + viewport_height)`, widened by `overscan`
/// rows on both sides and clamped to the list.
pub fn visible_window(
    heights: &[f32],
    scroll_offset: f32,
    viewport_height: f32,
    overscan: usize,
) -> Range<usize> {
    let len = heights.len();
    if len == 0 {
        return 0..0;
    }

    let top = scroll_offset.max(0.0);
    let bottom = top + viewport_height.max(0.0);

    let mut first = len;
    let mut end = len;
    let mut y = 0.0f32;
    for (i, h) in heights.iter().enumerate() {
        let row_bottom = y + h;
        if first == len && row_bottom > top {
            first = i;
        }
        if y >= bottom {
            end = i;
            break;
        }
        y = row_bottom;
    }
    let end = end.max(first);

    first.saturating_sub(overscan)..(end + overscan).min(len)
}
