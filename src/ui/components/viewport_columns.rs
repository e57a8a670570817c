/// Columns that fit in `available` cells starting at `horizontal_offset`.
///
/// Every drawn column is followed by a one-cell separator, which is also its
/// resize handle. At least one column is returned, narrowed to fit if needed.
pub fn select_viewport_columns(
    all_widths: &[u16],
    horizontal_offset: usize,
    available_width: u16,
) -> Vec<(usize, u16)> {
    let mut selected = Vec::new();
    let mut used_width: u16 = 0;

    for (i, &width) in all_widths.iter().enumerate().skip(horizontal_offset) {
        let needed = width.saturating_add(1);
        if used_width.saturating_add(needed) > available_width {
            break;
        }
        used_width += needed;
        selected.push((i, width));
    }

    if selected.is_empty() && horizontal_offset < all_widths.len() && available_width > 1 {
        let width = all_widths[horizontal_offset].min(available_width - 1);
        selected.push((horizontal_offset, width));
    }

    selected
}
