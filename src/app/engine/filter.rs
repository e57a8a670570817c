use std::collections::BTreeMap;

use crate::domain::Payload;

/// Per-column free-text predicates, combined with AND.
///
/// The raw text is kept as typed so the filter row can echo it back; a
/// predicate that is blank after trimming constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    predicates: BTreeMap<usize, String>,
}

impl FilterState {
    pub fn set(&mut self, column: usize, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.predicates.remove(&column);
        } else {
            self.predicates.insert(column, text);
        }
    }

    pub fn get(&self, column: usize) -> Option<&str> {
        self.predicates.get(&column).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.predicates.clear();
    }

    /// Lowercased, trimmed predicates that actually constrain rows.
    pub fn active_predicates(&self) -> Vec<(usize, String)> {
        self.predicates
            .iter()
            .filter_map(|(&column, text)| {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| (column, trimmed.to_lowercase()))
            })
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.predicates
            .values()
            .filter(|text| !text.trim().is_empty())
            .count()
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }
}

/// Indices of the payload rows matching every active predicate, in payload order.
pub fn filter_rows(payload: &Payload, filters: &FilterState) -> Vec<usize> {
    let predicates = filters.active_predicates();
    if predicates.is_empty() {
        return (0..payload.len()).collect();
    }

    (0..payload.len())
        .filter(|&row| {
            predicates.iter().all(|(column, needle)| {
                payload
                    .cell(row, *column)
                    .to_lowercase()
                    .contains(needle.as_str())
            })
        })
        .collect()
}
