//! Line-level cleanup shared by the itinerary parser.

/// Characters treated as line breaks when splitting a day block.
const LINE_BREAKS: [char; 7] = [
    '\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}', '\u{2029}',
];

/// Split on any line break, trim each line and drop the blank ones.
pub(crate) fn normalized_lines(block: &str) -> impl Iterator<Item = &str> {
    block
        .split(|c: char| LINE_BREAKS.contains(&c))
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Strip a leading hyphen bullet and the whitespace around it.
///
/// Returns `None` when the line is not an activity line.
pub(crate) fn activity_text(line: &str) -> Option<&str> {
    line.trim_start()
        .strip_prefix('-')
        .map(str::trim_start)
}
