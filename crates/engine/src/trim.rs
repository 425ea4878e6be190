use log::warn;

const START_MARKER: &str = "*** START OF THE PROJECT GUTENBERG EBOOK";
const END_MARKER: &str = "*** END OF THE PROJECT GUTENBERG EBOOK";

/// Strip the Project Gutenberg header and footer from `text`.
///
/// The header ends at the first line containing the start marker and the
/// footer begins at the last line containing the end marker; the marker
/// lines themselves are dropped. The two searches are independent, so a
/// text carrying only one marker is trimmed on that side only. A missing
/// marker is reported as a warning and leaves that side untouched. Outer
/// whitespace is always stripped.
#[must_use]
pub fn trim_gutenberg(text: &str) -> String {
    let mut lines: Vec<&str> = text.split_inclusive('\n').collect();

    if let Some(i) = lines.iter().position(|line| line.contains(START_MARKER)) {
        lines.drain(..=i);
    } else {
        warn!("Project Gutenberg header not found");
    }

    if let Some(i) = lines.iter().rposition(|line| line.contains(END_MARKER)) {
        lines.truncate(i);
    } else {
        warn!("Project Gutenberg footer not found");
    }

    lines.concat().trim().to_string()
}
