//! The filter catalogue.
//!
//! A static table maps each filter name to its kind, its declared
//! parameters, and a builder that coerces raw parameter tokens into a typed
//! [`Filter`]. The table is immutable and shared by every chain run.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::error::ParamError;
use crate::filter::{DocumentFilter, Filter, LineFilter};

/// How a filter consumes the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    /// One line in, one line out, independent of the other lines.
    Element,
    /// The whole document in, any number of lines out.
    Collection,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::Element => f.pad("element"),
            FilterKind::Collection => f.pad("collection"),
        }
    }
}

/// A declared positional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: &'static str,
}

type Builder = fn(&Params<'_>) -> Result<Filter, ParamError>;

/// One registry entry.
pub struct FilterSpec {
    pub name: &'static str,
    pub kind: FilterKind,
    pub params: &'static [ParamSpec],
    pub summary: &'static str,
    build: Builder,
}

impl FilterSpec {
    /// Coerce raw tokens into a typed filter.
    ///
    /// Missing trailing tokens take their declared defaults; surplus tokens
    /// are rejected.
    pub fn build(&self, tokens: &[String]) -> Result<Filter, ParamError> {
        let max = self.params.len();
        if let Some(extra) = tokens.get(max) {
            return Err(ParamError::new(
                max + 1,
                extra,
                format!("at most {max} parameter(s)"),
            ));
        }
        (self.build)(&Params { tokens })
    }

    /// Usage signature, e.g. `pad-left[:w[:c]]`.
    pub fn signature(&self) -> String {
        let mut sig = self.name.to_string();
        for param in self.params {
            sig.push_str("[:");
            sig.push_str(param.name);
        }
        sig.push_str(&"]".repeat(self.params.len()));
        sig
    }
}

impl fmt::Debug for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterSpec")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Raw parameter tokens with typed accessors. Indices are 1-based.
pub struct Params<'a> {
    tokens: &'a [String],
}

impl<'a> Params<'a> {
    fn token(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index - 1).map(String::as_str)
    }

    /// Non-negative integer, surrounding whitespace allowed.
    pub fn usize_or(&self, index: usize, default: usize) -> Result<usize, ParamError> {
        match self.token(index) {
            None => Ok(default),
            Some(token) => token
                .trim()
                .parse()
                .map_err(|_| ParamError::new(index, token, "a non-negative integer")),
        }
    }

    pub fn positive_or(&self, index: usize, default: usize) -> Result<usize, ParamError> {
        match self.usize_or(index, default)? {
            0 => Err(ParamError::new(
                index,
                self.token(index).unwrap_or_default(),
                "a positive integer",
            )),
            n => Ok(n),
        }
    }

    /// Exactly one character, taken verbatim.
    pub fn char_or(&self, index: usize, default: char) -> Result<char, ParamError> {
        let Some(token) = self.token(index) else {
            return Ok(default);
        };
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ParamError::new(index, token, "a single character")),
        }
    }
}

const NO_PARAMS: &[ParamSpec] = &[];
const INDENT_PARAMS: &[ParamSpec] = &[ParamSpec { name: "n", default: "4" }];
const TRUNCATE_PARAMS: &[ParamSpec] = &[ParamSpec { name: "n", default: "10" }];
const COL_WIDTH_PARAMS: &[ParamSpec] = &[ParamSpec { name: "n", default: "10" }];
const PAD_PARAMS: &[ParamSpec] = &[
    ParamSpec { name: "w", default: "10" },
    ParamSpec { name: "c", default: " " },
];

const fn element(
    name: &'static str,
    params: &'static [ParamSpec],
    summary: &'static str,
    build: Builder,
) -> FilterSpec {
    FilterSpec {
        name,
        kind: FilterKind::Element,
        params,
        summary,
        build,
    }
}

const fn collection(
    name: &'static str,
    params: &'static [ParamSpec],
    summary: &'static str,
    build: Builder,
) -> FilterSpec {
    FilterSpec {
        name,
        kind: FilterKind::Collection,
        params,
        summary,
        build,
    }
}

fn line(filter: LineFilter) -> Result<Filter, ParamError> {
    Ok(Filter::Element(filter))
}

fn document(filter: DocumentFilter) -> Result<Filter, ParamError> {
    Ok(Filter::Collection(filter))
}

/// Every filter, in catalogue order.
pub static FILTERS: &[FilterSpec] = &[
    collection("join", NO_PARAMS, "Join all lines into a single line", |_| {
        document(DocumentFilter::Join)
    }),
    element("snake-case", NO_PARAMS, "Convert to snake_case", |_| {
        line(LineFilter::SnakeCase)
    }),
    element("kebab-case", NO_PARAMS, "Convert to kebab-case", |_| {
        line(LineFilter::KebabCase)
    }),
    element("camel-case", NO_PARAMS, "Convert to camelCase", |_| {
        line(LineFilter::CamelCase)
    }),
    element("pascal-case", NO_PARAMS, "Convert to PascalCase", |_| {
        line(LineFilter::PascalCase)
    }),
    element("title-case", NO_PARAMS, "Convert to Title Case", |_| {
        line(LineFilter::TitleCase)
    }),
    element("sentence-case", NO_PARAMS, "Convert to Sentence case", |_| {
        line(LineFilter::SentenceCase)
    }),
    element("lowercase", NO_PARAMS, "Convert to lowercase", |_| {
        line(LineFilter::Lowercase)
    }),
    element("uppercase", NO_PARAMS, "Convert to UPPERCASE", |_| {
        line(LineFilter::Uppercase)
    }),
    element("capitalize", NO_PARAMS, "Capitalize the first character", |_| {
        line(LineFilter::Capitalize)
    }),
    element("trim", NO_PARAMS, "Remove leading and trailing whitespace", |_| {
        line(LineFilter::Trim)
    }),
    element("reverse", NO_PARAMS, "Reverse each line", |_| {
        line(LineFilter::Reverse)
    }),
    collection("sort", NO_PARAMS, "Sort all lines", |_| {
        document(DocumentFilter::Sort)
    }),
    collection("unique", NO_PARAMS, "Remove duplicate lines, preserving order", |_| {
        document(DocumentFilter::Unique)
    }),
    element("count", NO_PARAMS, "Count the characters in each line", |_| {
        line(LineFilter::Count)
    }),
    element("length", NO_PARAMS, "Alias for count", |_| line(LineFilter::Count)),
    collection("first", NO_PARAMS, "Output only the first line", |_| {
        document(DocumentFilter::First)
    }),
    collection("last", NO_PARAMS, "Output only the last line", |_| {
        document(DocumentFilter::Last)
    }),
    element("indent", INDENT_PARAMS, "Indent each line by n spaces", |p| {
        line(LineFilter::Indent {
            n: p.usize_or(1, 4)?,
        })
    }),
    element("dedent", NO_PARAMS, "Remove leading whitespace", |_| {
        line(LineFilter::Dedent)
    }),
    element("pad-left", PAD_PARAMS, "Pad on the left to width w with char c", |p| {
        line(LineFilter::PadLeft {
            width: p.usize_or(1, 10)?,
            fill: p.char_or(2, ' ')?,
        })
    }),
    element("pad-right", PAD_PARAMS, "Pad on the right to width w with char c", |p| {
        line(LineFilter::PadRight {
            width: p.usize_or(1, 10)?,
            fill: p.char_or(2, ' ')?,
        })
    }),
    collection("remove-empty", NO_PARAMS, "Remove blank lines", |_| {
        document(DocumentFilter::RemoveEmpty)
    }),
    element("truncate", TRUNCATE_PARAMS, "Truncate each line to n characters", |p| {
        line(LineFilter::Truncate {
            n: p.usize_or(1, 10)?,
        })
    }),
    collection("col-width", COL_WIDTH_PARAMS, "Split lines longer than n characters", |p| {
        document(DocumentFilter::ColWidth {
            width: p.positive_or(1, 10)?,
        })
    }),
];

static INDEX: LazyLock<HashMap<&'static str, &'static FilterSpec>> =
    LazyLock::new(|| FILTERS.iter().map(|spec| (spec.name, spec)).collect());

/// Find a filter by exact name.
pub fn lookup(name: &str) -> Option<&'static FilterSpec> {
    INDEX.get(name).copied()
}

/// All filters in catalogue order.
pub fn all() -> &'static [FilterSpec] {
    FILTERS
}
