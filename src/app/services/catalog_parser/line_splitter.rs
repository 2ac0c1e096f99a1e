//! Record boundary detection
//!
//! The first line of the catalog is the column header and is always dropped.
//! Blank lines never reach the decoder. Column counts are not checked here.

/// One data line of the catalog with its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub line_number: usize,
    pub text: &'a str,
}

/// Lazily split catalog text into data records
///
/// Handles both `\n` and `\r\n` line endings.
pub fn split_records(content: &str) -> impl Iterator<Item = RawRecord<'_>> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, text)| RawRecord {
            line_number: index + 1,
            text,
        })
}
