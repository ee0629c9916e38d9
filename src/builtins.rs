//! Line and document primitives behind the named filters.
//!
//! Everything here is a pure function. Widths and lengths count `char`s.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Runs of characters outside ASCII `[a-zA-Z0-9]`, the word separator for
/// the case conversions.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("valid regex"));

// ---------------------------------------------------------------------------
// Element-wise
// ---------------------------------------------------------------------------

pub fn snake_case(line: &str) -> String {
    delimited_case(line, '_')
}

pub fn kebab_case(line: &str) -> String {
    delimited_case(line, '-')
}

fn delimited_case(line: &str, delim: char) -> String {
    let sep = delim.to_string();
    let replaced = SEPARATOR_RE.replace_all(line, sep.as_str());
    replaced.trim_matches(delim).to_lowercase()
}

/// First word lowercased, the rest capitalized.
///
/// A leading separator produces an empty first word, so `" foo"` becomes
/// `"Foo"`.
pub fn camel_case(line: &str) -> String {
    let mut words = SEPARATOR_RE.split(line);
    let mut out = words.next().map(str::to_lowercase).unwrap_or_default();
    for word in words {
        out.push_str(&capitalize(word));
    }
    out
}

pub fn pascal_case(line: &str) -> String {
    SEPARATOR_RE.split(line).map(capitalize).collect()
}

/// Uppercase the first letter of every word and lowercase the others.
///
/// A word starts at any letter not preceded by another letter, so
/// `"it's a pre-war 1st"` becomes `"It'S A Pre-War 1St"`.
pub fn title_case(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_word = false;
    for c in line.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

pub fn sentence_case(line: &str) -> String {
    capitalize(line.trim())
}

/// Uppercase the first character, lowercase the rest.
pub fn capitalize(line: &str) -> String {
    let mut chars = line.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

pub fn reverse(line: &str) -> String {
    line.chars().rev().collect()
}

/// Decimal character count.
pub fn char_count(line: &str) -> String {
    line.chars().count().to_string()
}

pub fn indent(line: &str, n: usize) -> String {
    let mut out = " ".repeat(n);
    out.push_str(line);
    out
}

/// Right-justify to `width`, filling on the left.
pub fn pad_left(line: &str, width: usize, fill: char) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.to_string();
    }
    let mut out: String = std::iter::repeat_n(fill, width - len).collect();
    out.push_str(line);
    out
}

/// Left-justify to `width`, filling on the right.
pub fn pad_right(line: &str, width: usize, fill: char) -> String {
    let len = line.chars().count();
    let mut out = line.to_string();
    if len < width {
        out.extend(std::iter::repeat_n(fill, width - len));
    }
    out
}

pub fn truncate(line: &str, n: usize) -> String {
    match line.char_indices().nth(n) {
        Some((end, _)) => line[..end].to_string(),
        None => line.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Collection-wise
// ---------------------------------------------------------------------------

/// All lines concatenated into one. An empty document joins to one empty line.
pub fn join(lines: &[String]) -> Vec<String> {
    vec![lines.concat()]
}

pub fn sort(lines: &[String]) -> Vec<String> {
    let mut sorted = lines.to_vec();
    sorted.sort();
    sorted
}

/// Drop repeats of earlier lines, keeping first occurrences in order.
pub fn unique(lines: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for line in lines {
        if seen.insert(line.as_str()) {
            out.push(line.clone());
        }
    }
    out
}

pub fn first(lines: &[String]) -> Vec<String> {
    lines.first().cloned().into_iter().collect()
}

pub fn last(lines: &[String]) -> Vec<String> {
    lines.last().cloned().into_iter().collect()
}

/// Drop lines that are empty after trimming whitespace.
pub fn remove_empty(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .cloned()
        .collect()
}

/// Split every line into chunks of at most `width` chars.
///
/// Empty source lines produce nothing. `width` must be non-zero.
pub fn col_width(lines: &[String], width: usize) -> Vec<String> {
    debug_assert!(width > 0);
    let mut out = Vec::new();
    for line in lines {
        let chars: Vec<char> = line.chars().collect();
        out.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    out
}
