use tabpeek::domain::Payload;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

pub fn people() -> Payload {
    Payload::new(
        strings(&["name", "age", "city"]),
        vec![
            strings(&["Alice", "25", "Paris"]),
            strings(&["Bob", "30", "Berlin"]),
            strings(&["Carol", "41", "Tokyo"]),
        ],
    )
}

/// The two-column table used by the end-to-end filter and sort scenario.
pub fn ages() -> Payload {
    Payload::new(
        strings(&["name", "age"]),
        vec![
            strings(&["Alice", "25"]),
            strings(&["Bob", "9"]),
            strings(&["Carl", "30"]),
        ],
    )
}

/// `count` rows of `id`, `label` with labels "row-<id>".
pub fn numbered(count: usize) -> Payload {
    Payload::new(
        strings(&["id", "label"]),
        (0..count)
            .map(|i| vec![i.to_string(), format!("row-{i}")])
            .collect(),
    )
}
