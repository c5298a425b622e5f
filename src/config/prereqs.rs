// src/config/prereqs.rs

//! Parsing of prerequisite cells exported from a spreadsheet.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[,;\n]\s*").expect("separator regex is valid"));

/// Split a cell like `"Calculus I, Linear Algebra; Physics"` into names.
///
/// Separators are commas, semicolons and newlines. Surrounding whitespace is
/// trimmed and empty entries are dropped, so `"A,,B, "` yields `["A", "B"]`.
pub fn split_prerequisite_cell(cell: &str) -> Vec<String> {
    SEPARATOR
        .split(cell)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
