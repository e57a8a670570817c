use std::cmp::Ordering;

use crate::app::engine::collate::compare_cells;
use crate::domain::{Payload, SortDirection, SortKey};

pub const MAX_SORT_KEYS: usize = 3;

/// Ordered sort keys; index 0 is the primary key. A column appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    keys: Vec<SortKey>,
}

impl SortState {
    pub fn from_keys(keys: impl IntoIterator<Item = SortKey>) -> Self {
        let mut state = Self::default();
        for key in keys {
            if state.position_of(key.column).is_none() && state.keys.len() < MAX_SORT_KEYS {
                state.keys.push(key);
            }
        }
        state
    }

    /// Header-click cycle for `column`.
    pub fn toggle(&mut self, column: usize) {
        match self.position_of(column) {
            Some(0) => match self.keys[0].direction {
                SortDirection::Ascending => self.keys[0].direction = SortDirection::Descending,
                SortDirection::Descending => {
                    self.keys.remove(0);
                }
            },
            Some(position) => {
                self.keys.remove(position);
                self.keys.insert(0, SortKey::ascending(column));
            }
            None => {
                self.keys.insert(0, SortKey::ascending(column));
                self.keys.truncate(MAX_SORT_KEYS);
            }
        }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn position_of(&self, column: usize) -> Option<usize> {
        self.keys.iter().position(|key| key.column == column)
    }

    pub fn key_for(&self, column: usize) -> Option<(usize, SortKey)> {
        self.position_of(column).map(|pos| (pos, self.keys[pos]))
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Orders `rows` by the sort keys. The input slice is left untouched; ties on
/// every key keep their incoming order.
pub fn sort_rows(payload: &Payload, rows: &[usize], sort: &SortState) -> Vec<usize> {
    let mut ordered = rows.to_vec();
    if sort.is_empty() {
        return ordered;
    }

    merge_sort_by(&mut ordered, |a, b| compare_rows(payload, a, b, sort.keys()));
    ordered
}

/// Stable bottom-up merge sort over row indices.
///
/// Per-pair cell comparison is not transitive on mixed columns ("1.10" <
/// "1.5" < "1.5x" < "1.10"), which `slice::sort_by` may reject with a panic.
/// Merging only asks whether the right head goes strictly first, so any
/// comparator yields a permutation of the input.
fn merge_sort_by<F>(items: &mut Vec<usize>, mut compare: F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buffer = vec![0; len];
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(
                &items[start..mid],
                &items[mid..end],
                &mut buffer[start..end],
                &mut compare,
            );
            start = end;
        }
        std::mem::swap(items, &mut buffer);
        width *= 2;
    }
}

fn merge<F>(left: &[usize], right: &[usize], out: &mut [usize], compare: &mut F)
where
    F: FnMut(usize, usize) -> Ordering,
{
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_right = j < right.len()
            && (i >= left.len() || compare(right[j], left[i]) == Ordering::Less);
        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }
}

fn compare_rows(payload: &Payload, a: usize, b: usize, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let ord = compare_cells(payload.cell(a, key.column), payload.cell(b, key.column));
        let ord = match key.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}
