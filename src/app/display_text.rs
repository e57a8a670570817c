/// Makes arbitrary cell or error text safe to draw in a single terminal line.
///
/// Newlines and tabs become spaces; any other control character becomes `�`.
pub fn sanitize_for_display(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '\u{FFFD}',
            c => c,
        })
        .collect()
}
