//! Text helpers shared by the screens.

/// `mm:ss`, both fields zero-padded. Minutes are not wrapped into hours.
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Share of the quiz reached when viewing question `index`, in percent.
pub fn progress_percent(index: usize, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    ((index + 1) as f64 / len as f64 * 100.0).min(100.0)
}

/// Positional label of an option: `A`, `B`, `C`...
pub fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|index| *index < 26)
        .map_or('?', |index| char::from(b'A' + index))
}

/// Inverse of [`option_label`].
pub fn option_index_for_label(label: char) -> Option<usize> {
    label
        .is_ascii_uppercase()
        .then(|| usize::from(label as u8 - b'A'))
}
