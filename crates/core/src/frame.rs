//! Code frame rendering: a gutter-style source excerpt around a location
//!
//! ```text
//!     1 | import { ref } from 'vue'
//!   > 2 | const count: string = 1
//!       |       ^^^^^
//!     3 |
//! ```
//!
//! Color escapes are always emitted here; [`strip_ansi`] produces the plain
//! variant that is safe to ship to a remote overlay.

use crate::location::SourceLocation;
use crate::EOL;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Source lines shown above the first flagged line
pub const LINES_ABOVE: i64 = 2;
/// Source lines shown below the last flagged line
pub const LINES_BELOW: i64 = 3;

const GREY: &str = "\x1b[90m";
const GREY_END: &str = "\x1b[39m";
const RED_BOLD: &str = "\x1b[31m\x1b[1m";
const RED_BOLD_END: &str = "\x1b[22m\x1b[39m";

static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\r\n|[\n\r\u{2028}\u{2029}]").unwrap());

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[\x1b\x{9b}][\[\]()#;?]*(?:",
        r"(?:(?:(?:;[-a-zA-Z\d/#&.:=?%@~_]+)*|[a-zA-Z\d]+(?:;[-a-zA-Z\d/#&.:=?%@~_]*)*)?\x07)",
        r"|(?:(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PR-TZcf-ntqry=><~]))",
    ))
    .unwrap()
});

/// Both renderings of one excerpt, computed together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFrame {
    /// Excerpt with ANSI color escapes
    pub decorated: String,
    /// The same excerpt with every escape removed
    pub stripped: String,
}

impl CodeFrame {
    pub fn render(source: &str, location: &SourceLocation) -> Self {
        let decorated = create_frame(source, location);
        let stripped = strip_ansi(&decorated);
        Self {
            decorated,
            stripped,
        }
    }
}

/// Remove every ANSI escape sequence from `text`
pub fn strip_ansi(text: &str) -> String {
    ANSI_RE.replace_all(text, "").into_owned()
}

/// Which part of a flagged line the caret row underlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    /// The whole line is flagged, no caret row
    Line,
    /// Carets start at 1-based `column` and span `len` characters (at least one)
    Columns { column: i64, len: i64 },
}

struct Window {
    start: usize,
    end: usize,
    markers: HashMap<i64, Marker>,
}

fn line_len(lines: &[&str], line_number: i64) -> i64 {
    usize::try_from(line_number - 1)
        .ok()
        .and_then(|idx| lines.get(idx))
        .map_or(0, |l| l.chars().count() as i64)
}

fn compute_window(location: &SourceLocation, lines: &[&str]) -> Window {
    let start_line = location.start.line;
    let start_column = location.start.column;
    let end_line = location.end.line;
    let end_column = location.end.column;
    let total = lines.len() as i64;

    let start = start_line.saturating_sub(LINES_ABOVE + 1).max(0);
    let end = total.min(end_line.saturating_add(LINES_BELOW)).max(0);

    let mut markers = HashMap::new();
    let line_diff = end_line.saturating_sub(start_line);

    if line_diff != 0 {
        // Only lines inside the window are ever shown; inverted ranges flag nothing
        let first = start_line.max(start + 1);
        let last = end_line.min(end);
        for line_number in first..=last {
            let marker = if start_column == 0 {
                Marker::Line
            } else if line_number == start_line {
                Marker::Columns {
                    column: start_column,
                    len: line_len(lines, line_number)
                        .saturating_sub(start_column)
                        .saturating_add(1),
                }
            } else if line_number == end_line {
                Marker::Columns {
                    column: 0,
                    len: end_column,
                }
            } else {
                Marker::Columns {
                    column: 0,
                    len: line_len(lines, line_number),
                }
            };
            markers.insert(line_number, marker);
        }
    } else if start_column == end_column {
        let marker = if start_column != 0 {
            Marker::Columns {
                column: start_column,
                len: 0,
            }
        } else {
            Marker::Line
        };
        markers.insert(start_line, marker);
    } else {
        markers.insert(
            start_line,
            Marker::Columns {
                column: start_column,
                len: end_column.saturating_sub(start_column),
            },
        );
    }

    Window {
        start: start as usize,
        end: end as usize,
        markers,
    }
}

/// Carets never run past the end of the flagged line
fn caret_count(line: &str, column: i64, len: i64) -> usize {
    let available = (line.chars().count() as i64).saturating_sub(column.max(1)) + 1;
    len.min(available).max(1) as usize
}

fn render_rows(source: &str, location: &SourceLocation) -> Vec<String> {
    let lines: Vec<&str> = LINE_BREAK_RE.split(source).collect();
    let window = compute_window(location, &lines);
    if window.start >= window.end {
        return Vec::new();
    }

    let number_width = window.end.to_string().len();
    let mut rows = Vec::new();

    for (index, line) in lines[window.start..window.end].iter().enumerate() {
        let number = (window.start + 1 + index) as i64;
        let gutter = format!(" {:>width$} |", number, width = number_width);
        let body = if line.is_empty() {
            String::new()
        } else {
            format!(" {}", line)
        };

        match window.markers.get(&number) {
            Some(marker) => {
                rows.push(format!(
                    "{RED_BOLD}>{RED_BOLD_END}{GREY}{gutter}{GREY_END}{body}"
                ));
                if let Marker::Columns { column, len } = *marker {
                    let spacing: String = line
                        .chars()
                        .take(column.saturating_sub(1).max(0) as usize)
                        .map(|c| if c == '\t' { '\t' } else { ' ' })
                        .collect();
                    let carets = "^".repeat(caret_count(line, column, len));
                    let blank_gutter: String = gutter
                        .chars()
                        .map(|c| if c.is_ascii_digit() { ' ' } else { c })
                        .collect();
                    rows.push(format!(
                        " {GREY}{blank_gutter}{GREY_END} {spacing}{RED_BOLD}{carets}{RED_BOLD_END}"
                    ));
                }
            }
            None => rows.push(format!(" {GREY}{gutter}{GREY_END}{body}")),
        }
    }

    rows
}

/// Render a color-decorated frame around `location` in `source`.
///
/// Every row is indented by two spaces and rows are joined with the platform
/// line separator. Locations outside the text produce a shorter (possibly
/// empty) frame rather than an error.
pub fn create_frame(source: &str, location: &SourceLocation) -> String {
    render_rows(source, location)
        .iter()
        .map(|row| format!("  {}", row))
        .collect::<Vec<_>>()
        .join(EOL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Position;

    fn loc(sl: i64, sc: i64, el: i64, ec: i64) -> SourceLocation {
        SourceLocation::new(Position::new(sl, sc), Position::new(el, ec))
    }

    #[test]
    fn single_line_marker_spans_columns() {
        let window = compute_window(&loc(2, 3, 2, 7), &["a", "bcdefgh", "i"]);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 3);
        assert_eq!(
            window.markers.get(&2),
            Some(&Marker::Columns { column: 3, len: 4 })
        );
    }

    #[test]
    fn multi_line_marks_every_line() {
        let window = compute_window(&loc(1, 2, 3, 4), &["abc", "defg", "hi"]);
        assert_eq!(window.markers.len(), 3);
        assert_eq!(
            window.markers.get(&1),
            Some(&Marker::Columns { column: 2, len: 2 })
        );
        assert_eq!(
            window.markers.get(&2),
            Some(&Marker::Columns { column: 0, len: 4 })
        );
        assert_eq!(
            window.markers.get(&3),
            Some(&Marker::Columns { column: 0, len: 4 })
        );
    }

    #[test]
    fn inverted_range_marks_nothing() {
        let window = compute_window(&loc(4, 1, 0, 5), &["a", "b", "c", "d", "e"]);
        assert!(window.markers.is_empty());
        assert_eq!(window.start, 1);
        assert_eq!(window.end, 3);
    }

    #[test]
    fn markers_stay_inside_window() {
        let window = compute_window(&loc(1, 1, 50_000_000, 1), &["a", "b", "c"]);
        assert_eq!(window.end, 3);
        assert_eq!(window.markers.len(), 3);
    }

    #[test]
    fn caret_count_is_clamped_to_line() {
        assert_eq!(caret_count("let a = 1", 1, 2_000_000_000), 9);
        assert_eq!(caret_count("let a = 1", 5, 3), 3);
        assert_eq!(caret_count("", 1, 0), 1);
        assert_eq!(caret_count("abc", 10, 4), 1);
    }

    #[test]
    fn zero_column_marks_whole_line() {
        let window = compute_window(&loc(1, 0, 1, 0), &["abc"]);
        assert_eq!(window.markers.get(&1), Some(&Marker::Line));
    }

    #[test]
    fn strip_removes_sgr_sequences() {
        assert_eq!(strip_ansi("\x1b[31m\x1b[1mhi\x1b[22m\x1b[39m"), "hi");
        assert_eq!(strip_ansi("plain"), "plain");
    }
}
