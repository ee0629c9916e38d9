//! Typed filters.
//!
//! A [`Filter`] is either element-wise ([`LineFilter`]) or collection-wise
//! ([`DocumentFilter`]). Parameters are already coerced, so applying a
//! filter cannot fail.

use crate::Document;
use crate::builtins;
use crate::registry::FilterKind;

/// A resolved filter, ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Element(LineFilter),
    Collection(DocumentFilter),
}

/// Filters applied to each line independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFilter {
    SnakeCase,
    KebabCase,
    CamelCase,
    PascalCase,
    TitleCase,
    SentenceCase,
    Lowercase,
    Uppercase,
    Capitalize,
    Trim,
    Reverse,
    /// Character count, registered as both `count` and `length`.
    Count,
    Indent {
        n: usize,
    },
    Dedent,
    PadLeft {
        width: usize,
        fill: char,
    },
    PadRight {
        width: usize,
        fill: char,
    },
    Truncate {
        n: usize,
    },
}

/// Filters that see the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFilter {
    Join,
    Sort,
    Unique,
    First,
    Last,
    RemoveEmpty,
    /// Width is at least 1.
    ColWidth {
        width: usize,
    },
}

impl Filter {
    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Element(_) => FilterKind::Element,
            Filter::Collection(_) => FilterKind::Collection,
        }
    }

    /// Apply to a whole document.
    ///
    /// Element-wise filters map every line in order and preserve the line
    /// count.
    pub fn apply(&self, document: &[String]) -> Document {
        match self {
            Filter::Element(filter) => document.iter().map(|line| filter.apply(line)).collect(),
            Filter::Collection(filter) => filter.apply(document),
        }
    }
}

impl LineFilter {
    pub fn apply(&self, line: &str) -> String {
        match *self {
            LineFilter::SnakeCase => builtins::snake_case(line),
            LineFilter::KebabCase => builtins::kebab_case(line),
            LineFilter::CamelCase => builtins::camel_case(line),
            LineFilter::PascalCase => builtins::pascal_case(line),
            LineFilter::TitleCase => builtins::title_case(line),
            LineFilter::SentenceCase => builtins::sentence_case(line),
            LineFilter::Lowercase => line.to_lowercase(),
            LineFilter::Uppercase => line.to_uppercase(),
            LineFilter::Capitalize => builtins::capitalize(line),
            LineFilter::Trim => line.trim().to_string(),
            LineFilter::Reverse => builtins::reverse(line),
            LineFilter::Count => builtins::char_count(line),
            LineFilter::Indent { n } => builtins::indent(line, n),
            LineFilter::Dedent => line.trim_start().to_string(),
            LineFilter::PadLeft { width, fill } => builtins::pad_left(line, width, fill),
            LineFilter::PadRight { width, fill } => builtins::pad_right(line, width, fill),
            LineFilter::Truncate { n } => builtins::truncate(line, n),
        }
    }
}

impl DocumentFilter {
    pub fn apply(&self, lines: &[String]) -> Document {
        match *self {
            DocumentFilter::Join => builtins::join(lines),
            DocumentFilter::Sort => builtins::sort(lines),
            DocumentFilter::Unique => builtins::unique(lines),
            DocumentFilter::First => builtins::first(lines),
            DocumentFilter::Last => builtins::last(lines),
            DocumentFilter::RemoveEmpty => builtins::remove_empty(lines),
            DocumentFilter::ColWidth { width } => builtins::col_width(lines, width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        lines.iter().map(|s| s.to_string()).collect()
    }

    const ALL_LINE_FILTERS: &[LineFilter] = &[
        LineFilter::SnakeCase,
        LineFilter::KebabCase,
        LineFilter::CamelCase,
        LineFilter::PascalCase,
        LineFilter::TitleCase,
        LineFilter::SentenceCase,
        LineFilter::Lowercase,
        LineFilter::Uppercase,
        LineFilter::Capitalize,
        LineFilter::Trim,
        LineFilter::Reverse,
        LineFilter::Count,
        LineFilter::Indent { n: 3 },
        LineFilter::Dedent,
        LineFilter::PadLeft {
            width: 12,
            fill: '.',
        },
        LineFilter::PadRight {
            width: 12,
            fill: '.',
        },
        LineFilter::Truncate { n: 4 },
    ];

    #[test]
    fn test_element_filters_preserve_cardinality() {
        let input = doc(&["Hello World!", "", "  padded  ", "ümlaut-Ärger", "x"]);
        for filter in ALL_LINE_FILTERS {
            let output = Filter::Element(*filter).apply(&input);
            assert_eq!(output.len(), input.len(), "{filter:?}");
            for (i, line) in input.iter().enumerate() {
                assert_eq!(output[i], filter.apply(line), "{filter:?} line {i}");
            }
        }
    }

    #[test]
    fn test_idempotent_filters() {
        let input = doc(&["  Mixed Case  ", "\tTabbed", "ALREADY", ""]);
        for filter in [
            LineFilter::Trim,
            LineFilter::Lowercase,
            LineFilter::Uppercase,
            LineFilter::Dedent,
        ] {
            let once = Filter::Element(filter).apply(&input);
            let twice = Filter::Element(filter).apply(&once);
            assert_eq!(once, twice, "{filter:?}");
        }
    }

    #[test]
    fn test_dedent_keeps_trailing_whitespace() {
        assert_eq!(LineFilter::Dedent.apply("   foo  "), "foo  ");
    }

    #[test]
    fn test_collection_filters_on_empty_document() {
        let empty: Document = vec![];
        assert!(DocumentFilter::First.apply(&empty).is_empty());
        assert!(DocumentFilter::Last.apply(&empty).is_empty());
        assert_eq!(DocumentFilter::Join.apply(&empty), doc(&[""]));
        assert!(DocumentFilter::Sort.apply(&empty).is_empty());
        assert!(DocumentFilter::Unique.apply(&empty).is_empty());
        assert!(DocumentFilter::RemoveEmpty.apply(&empty).is_empty());
        assert!(DocumentFilter::ColWidth { width: 3 }.apply(&empty).is_empty());
    }

    #[test]
    fn test_collection_reshapes() {
        let input = doc(&["abcdef", "gh"]);
        let output = Filter::Collection(DocumentFilter::ColWidth { width: 4 }).apply(&input);
        assert_eq!(output, doc(&["abcd", "ef", "gh"]));
        assert_eq!(
            Filter::Collection(DocumentFilter::Join).apply(&input),
            doc(&["abcdefgh"])
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(Filter::Element(LineFilter::Trim).kind(), FilterKind::Element);
        assert_eq!(
            Filter::Collection(DocumentFilter::Sort).kind(),
            FilterKind::Collection
        );
    }
}
