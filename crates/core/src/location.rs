//! Location model: canonical 1-based ranges and conversions from 0-based engine positions

use serde::{Deserialize, Serialize};

/// A 1-based line/column position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: i64,
    pub column: i64,
}

impl Position {
    pub fn new(line: i64, column: i64) -> Self {
        Self { line, column }
    }
}

/// A 1-based start/end range inside one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl SourceLocation {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A 0-based position as reported by compiler-style APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineAndCharacter {
    pub line: i64,
    pub character: i64,
}

/// A 0-based range in the language-server protocol shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LspRange {
    pub start: LineAndCharacter,
    pub end: LineAndCharacter,
}

fn to_one_based(pos: LineAndCharacter) -> Position {
    Position {
        line: pos.line.saturating_add(1),
        column: pos.character.saturating_add(1),
    }
}

/// Convert a 0-based compiler start/end pair into a canonical location.
///
/// Every line and character is shifted by one independently; no clamping.
pub fn ts_location_to_location(start: LineAndCharacter, end: LineAndCharacter) -> SourceLocation {
    SourceLocation {
        start: to_one_based(start),
        end: to_one_based(end),
    }
}

/// Convert a language-server range into a canonical location (same +1 rule).
pub fn lsp_range_to_location(range: &LspRange) -> SourceLocation {
    ts_location_to_location(range.start, range.end)
}

/// Resolve a character offset into a 0-based line/character pair.
///
/// Line breaks are `\r\n`, `\n`, `\r`, U+2028 and U+2029. Offsets are counted
/// in Unicode scalar values; an offset past the end resolves to the end of
/// the text.
pub fn line_and_character_of_position(text: &str, offset: usize) -> LineAndCharacter {
    let mut line = 0i64;
    let mut line_start = 0usize;
    let mut chars = text.chars().enumerate().peekable();

    while let Some((idx, ch)) = chars.next() {
        if idx >= offset {
            break;
        }
        match ch {
            '\r' => {
                if let Some((next_idx, '\n')) = chars.peek().copied() {
                    if next_idx >= offset {
                        // Offset points between \r and \n: still on the same line
                        break;
                    }
                    chars.next();
                    line_start = next_idx + 1;
                } else {
                    line_start = idx + 1;
                }
                line += 1;
            }
            '\n' | '\u{2028}' | '\u{2029}' => {
                line += 1;
                line_start = idx + 1;
            }
            _ => {}
        }
    }

    let total = text.chars().count();
    let clamped = offset.min(total);
    LineAndCharacter {
        line,
        character: clamped.saturating_sub(line_start) as i64,
    }
}
