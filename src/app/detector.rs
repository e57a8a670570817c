//! Lexical heuristics for spotting table-like variables in source text.

use std::collections::HashSet;

use regex::Regex;

use crate::domain::{CandidateReason, TableCandidate};

/// Identifiers that conventionally hold a table.
const NAME_PATTERN: &str =
    r"^(?:df\d*|data|dt|tbl|frame|table)$|^(?:df|dt|tbl)_\w+$|^\w+_(?:df|dt|tbl|data|frame)$";

/// Assignment target: `name = ...` or `name <- ...` (not `==`)
const TARGET_PATTERN: &str = r"^[ \t]*([A-Za-z_][A-Za-z0-9_.]*)[ \t]*(?:<-|=(?:[^=]|$))";

/// Call at the start of the assigned expression, e.g. `pd.read_csv(`
const CALL_PATTERN: &str =
    r"^[ \t]*((?:[A-Za-z_][A-Za-z0-9_]*(?:\.|::))*[A-Za-z_][A-Za-z0-9_]*)[ \t]*\(";

/// Constructor and reader calls that produce a table.
const CONSTRUCTOR_PATTERN: &str = r"(?x)
    (?:^|\.|::)
    (?:
        DataFrame | from_dict | from_records | concat | merge | pivot_table
      | read_(?:csv|tsv|excel|parquet|json|sql|sql_query|table|feather|fwf|delim|rds|xlsx)
      | data\.frame | data\.table | as\.data\.frame | as_tibble | tibble | tribble
      | fread | readRDS
    )$";

#[derive(Debug, Clone)]
pub struct TableDetector {
    name: Regex,
    target: Regex,
    call: Regex,
    constructor: Regex,
}

impl TableDetector {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            name: Regex::new(NAME_PATTERN)?,
            target: Regex::new(TARGET_PATTERN)?,
            call: Regex::new(CALL_PATTERN)?,
            constructor: Regex::new(CONSTRUCTOR_PATTERN)?,
        })
    }

    /// True when `identifier` reads like a table by name alone.
    pub fn is_candidate(&self, identifier: &str) -> bool {
        self.name.is_match(&identifier.to_ascii_lowercase())
    }

    /// Assigned variables that look like tables, unique, in order of first assignment.
    pub fn scan(&self, source: &str) -> Vec<TableCandidate> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let code = mask_line(line);
            let Some(caps) = self.target.captures(&code) else {
                continue;
            };
            let Some(target) = caps.get(1) else {
                continue;
            };
            let rest = &code[target.end()..];
            let rest = rest
                .trim_start()
                .trim_start_matches("<-")
                .trim_start_matches('=');

            let from_constructor = self
                .call
                .captures(rest)
                .and_then(|c| c.get(1))
                .is_some_and(|callee| self.constructor.is_match(callee.as_str()));

            let reason = if from_constructor {
                CandidateReason::Constructor
            } else if self.is_candidate(target.as_str()) {
                CandidateReason::Name
            } else {
                continue;
            };

            if seen.insert(target.as_str().to_string()) {
                found.push(TableCandidate {
                    name: target.as_str().to_string(),
                    line: index + 1,
                    reason,
                });
            }
        }

        found
    }
}

/// Blanks string literal contents and drops a trailing `#` comment so patterns
/// only see code.
fn mask_line(line: &str) -> String {
    let mut masked = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in line.chars() {
        match quote {
            Some(q) => {
                if c == q && !escaped {
                    quote = None;
                    masked.push(c);
                } else {
                    masked.push(' ');
                }
                escaped = c == '\\' && !escaped;
            }
            None if c == '#' => break,
            None => {
                if c == '"' || c == '\'' {
                    quote = Some(c);
                }
                masked.push(c);
            }
        }
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn detector() -> TableDetector {
        TableDetector::new().unwrap()
    }

    #[rstest]
    #[case("df", true)]
    #[case("df2", true)]
    #[case("DF", true)]
    #[case("sales_df", true)]
    #[case("tbl_orders", true)]
    #[case("data", true)]
    #[case("raw_data", true)]
    #[case("dfx", false)]
    #[case("index", false)]
    #[case("database", false)]
    #[case("x", false)]
    fn is_candidate_recognises_table_names(#[case] identifier: &str, #[case] expected: bool) {
        assert_eq!(detector().is_candidate(identifier), expected);
    }

    #[test]
    fn scan_finds_constructor_assignments() {
        let source = "import pandas as pd\n\
                      orders = pd.read_csv('orders.csv')\n\
                      people <- data.frame(name = c('a'))\n\
                      totals = sum(values)\n";

        let found = detector().scan(source);

        assert_eq!(
            found,
            vec![
                TableCandidate {
                    name: "orders".to_string(),
                    line: 2,
                    reason: CandidateReason::Constructor,
                },
                TableCandidate {
                    name: "people".to_string(),
                    line: 3,
                    reason: CandidateReason::Constructor,
                },
            ]
        );
    }

    #[test]
    fn scan_reports_each_name_once_at_first_assignment() {
        let source = "df = load()\nprint(df)\nsales_df = df.copy()\ndf = other()\n";

        let found = detector().scan(source);

        let summary: Vec<(&str, usize, CandidateReason)> = found
            .iter()
            .map(|c| (c.name.as_str(), c.line, c.reason))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("df", 1, CandidateReason::Name),
                ("sales_df", 3, CandidateReason::Name),
            ]
        );
    }

    #[test]
    fn scan_ignores_comments_strings_and_comparisons() {
        let source = "# df = pd.DataFrame()\nx = 'df = 1' # data = 2\ndf == other\n";

        assert!(detector().scan(source).is_empty());
    }

    #[rstest]
    #[case("x = 1 # note", "x = 1 ")]
    #[case("s = '#no'", "s = '   '")]
    #[case(r#"t = "a\"b" # c"#, r#"t = "    " "#)]
    #[case("plain", "plain")]
    fn mask_line_cases(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(mask_line(line), expected);
    }
}
