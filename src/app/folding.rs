//! Code folding ranges from comment section markers.
//!
//! Recognised markers:
//! - `# Title ----` (also `====` or `####`, four or more); the number of
//!   leading `#` is the nesting level
//! - `# %%` cell separators, level 1

use regex::Regex;

use crate::domain::FoldSection;

const SECTION_MARKER: &str = r"^\s*(#+)\s*(.*?)\s*[-=#]{4,}\s*$";
const CELL_MARKER: &str = r"^\s*#\s*%%(.*)$";

struct Marker {
    line: usize,
    level: usize,
    title: String,
}

#[derive(Debug, Clone)]
pub struct SectionFolder {
    section: Regex,
    cell: Regex,
}

impl SectionFolder {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            section: Regex::new(SECTION_MARKER)?,
            cell: Regex::new(CELL_MARKER)?,
        })
    }

    /// Foldable sections of `source`, in marker order.
    pub fn fold_sections(&self, source: &str) -> Vec<FoldSection> {
        let lines: Vec<&str> = source.lines().collect();
        let markers: Vec<Marker> = lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| self.parse_marker(i, line))
            .collect();

        markers
            .iter()
            .enumerate()
            .filter_map(|(i, marker)| {
                let next = markers[i + 1..]
                    .iter()
                    .find(|m| m.level <= marker.level)
                    .map_or(lines.len(), |m| m.line);

                let mut end = next.saturating_sub(1);
                while end > marker.line && lines[end].trim().is_empty() {
                    end -= 1;
                }

                (end > marker.line).then(|| FoldSection {
                    title: marker.title.clone(),
                    level: marker.level,
                    start_line: marker.line,
                    end_line: end,
                })
            })
            .collect()
    }

    fn parse_marker(&self, line_index: usize, line: &str) -> Option<Marker> {
        if let Some(caps) = self.cell.captures(line) {
            let title = caps.get(1).map_or("", |m| m.as_str()).trim();
            return Some(Marker {
                line: line_index,
                level: 1,
                title: title.to_string(),
            });
        }

        let caps = self.section.captures(line)?;
        let title = caps.get(2)?.as_str().trim();
        if title.is_empty() {
            return None;
        }
        Some(Marker {
            line: line_index,
            level: caps.get(1)?.as_str().len(),
            title: title.to_string(),
        })
    }
}
