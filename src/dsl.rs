//! Parser for filter chain expressions.
//!
//! Expression format:
//! ```text
//! snake-case | pad-left:20:. | sort | unique
//! ```
//!
//! - `|` separates segments, evaluated left to right
//! - Whitespace around each segment is stripped
//! - Inside a segment, `:` separates the filter name from positional parameters
//! - The name is trimmed; parameter tokens are kept verbatim, so
//!   `pad-left: 5 :x` yields the tokens `" 5 "` and `"x"`
//! - Empty segments (`a || b`) are skipped
//!
//! Filter names are not validated here; the executor resolves them.

/// One segment of a chain: a filter name and its raw parameter tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub params: Vec<String>,
}

impl Invocation {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// Ordered list of invocations parsed from one expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChain {
    invocations: Vec<Invocation>,
}

impl FilterChain {
    /// The identity chain.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Invocation> {
        self.invocations.iter()
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }
}

impl From<Vec<Invocation>> for FilterChain {
    fn from(invocations: Vec<Invocation>) -> Self {
        Self { invocations }
    }
}

impl<'a> IntoIterator for &'a FilterChain {
    type Item = &'a Invocation;
    type IntoIter = std::slice::Iter<'a, Invocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.invocations.iter()
    }
}

/// Parse an optional expression. `None` yields the identity chain.
pub fn parse_chain(expression: Option<&str>) -> FilterChain {
    match expression {
        Some(text) => parse_expression(text),
        None => FilterChain::empty(),
    }
}

/// Parse a filter expression into a chain.
pub fn parse_expression(text: &str) -> FilterChain {
    let invocations = text
        .split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_invocation)
        .collect();
    FilterChain { invocations }
}

/// Parse one already-trimmed segment.
fn parse_invocation(segment: &str) -> Invocation {
    let mut tokens = segment.split(':');
    // split always yields at least one item
    let name = tokens.next().unwrap_or_default().trim().to_string();
    let params = tokens.map(str::to_string).collect();
    Invocation { name, params }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(chain: &FilterChain) -> Vec<&str> {
        chain.iter().map(|inv| inv.name.as_str()).collect()
    }

    #[test]
    fn test_parse_single_filter() {
        let chain = parse_expression("snake-case");
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.invocations()[0], Invocation::new("snake-case", vec![]));
    }

    #[test]
    fn test_parse_pipe_preserves_order() {
        let chain = parse_expression("snake-case | reverse|count");
        assert_eq!(names(&chain), vec!["snake-case", "reverse", "count"]);
    }

    #[test]
    fn test_parse_params() {
        let chain = parse_expression("pad-left:5:0");
        let inv = &chain.invocations()[0];
        assert_eq!(inv.name, "pad-left");
        assert_eq!(inv.params, vec!["5", "0"]);
    }

    #[test]
    fn test_params_keep_inner_whitespace() {
        let chain = parse_expression("pad-right: 8 : :x | trim");
        assert_eq!(chain.invocations()[0].params, vec![" 8 ", " ", "x"]);
        assert_eq!(chain.invocations()[1].name, "trim");
    }

    #[test]
    fn test_name_is_trimmed() {
        let chain = parse_expression("  indent :2");
        assert_eq!(chain.invocations()[0].name, "indent");
        assert_eq!(chain.invocations()[0].params, vec!["2"]);
    }

    #[test]
    fn test_segment_trim_eats_trailing_space_param() {
        let chain = parse_expression("pad-right:8: | trim");
        assert_eq!(chain.invocations()[0].params, vec!["8", ""]);
    }

    #[test]
    fn test_empty_trailing_param_is_kept() {
        let chain = parse_expression("pad-left:5:");
        assert_eq!(chain.invocations()[0].params, vec!["5", ""]);
    }

    #[test]
    fn test_none_and_blank_are_identity() {
        assert!(parse_chain(None).is_empty());
        assert!(parse_chain(Some("")).is_empty());
        assert!(parse_chain(Some("   ")).is_empty());
    }

    #[test]
    fn test_empty_segments_skipped() {
        let chain = parse_expression("trim || | uppercase |");
        assert_eq!(names(&chain), vec!["trim", "uppercase"]);
    }

    #[test]
    fn test_unknown_names_are_not_rejected() {
        let chain = parse_expression("no-such-filter:1:2");
        assert_eq!(chain.invocations()[0].name, "no-such-filter");
        assert_eq!(chain.invocations()[0].params, vec!["1", "2"]);
    }
}
