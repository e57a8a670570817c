//! Cell comparison used by the sort engine.
//!
//! Two cells that both read as numbers compare numerically; anything else falls
//! back to a natural text order where digit runs compare by value ("2" < "10")
//! and letters compare case-insensitively.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use unicode_casefold::UnicodeCaseFold;

/// Chooses numeric or text comparison per cell pair.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => natural_cmp(a, b),
    }
}

/// Strict numeric reading of a cell. Blank text and NaN are not numbers.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let primary = compare_runs(a, b);
    if primary != Ordering::Equal {
        return primary;
    }
    // Only case differs: lowercase first, then plain code point order
    case_tiebreak(a, b).then_with(|| a.cmp(b))
}

fn compare_runs(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = if l.is_ascii_digit() && r.is_ascii_digit() {
                    compare_digit_runs(&take_digits(&mut left), &take_digits(&mut right))
                } else if l.is_ascii_digit() {
                    // Digits sort before letters, as in most collations
                    Ordering::Less
                } else if r.is_ascii_digit() {
                    Ordering::Greater
                } else {
                    fold(&take_text(&mut left)).cmp(&fold(&take_text(&mut right)))
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn take_text(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(|c| !c.is_ascii_digit()) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        // "007" after "7" so equal values still order deterministically
        .then_with(|| a.len().cmp(&b.len()))
}

fn fold(text: &str) -> String {
    text.chars().case_fold().collect()
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (l, r) in a.chars().zip(b.chars()) {
        if l == r {
            continue;
        }
        match (l.is_lowercase(), r.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
