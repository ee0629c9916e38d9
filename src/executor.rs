//! Filter chain executor.
//!
//! Runs each invocation of a chain in order against the current document.
//! Element-wise filters map every line; collection-wise filters replace the
//! document wholesale. The first error aborts the run.

use tracing::{debug, warn};

use crate::Document;
use crate::dsl::{FilterChain, Invocation, parse_chain};
use crate::error::FilterError;
use crate::filter::Filter;
use crate::registry::{self, FilterKind};

/// What to do with a chain segment whose name is not registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFilterPolicy {
    /// Fail with [`FilterError::UnknownFilter`].
    #[default]
    Reject,
    /// Leave the document untouched and continue with the next segment.
    PassThrough,
}

/// Execution settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecOptions {
    pub unknown_filter: UnknownFilterPolicy,
}

impl ExecOptions {
    pub fn lenient() -> Self {
        Self {
            unknown_filter: UnknownFilterPolicy::PassThrough,
        }
    }
}

/// Record of one chain segment's effect on the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTrace {
    /// 1-based segment index.
    pub position: usize,
    pub name: String,
    /// `None` when the segment was an unknown name that was passed through.
    pub kind: Option<FilterKind>,
    pub input_count: usize,
    pub output_count: usize,
}

impl StageTrace {
    pub fn skipped(&self) -> bool {
        self.kind.is_none()
    }
}

/// Resolve an invocation against the registry and coerce its parameters.
///
/// Returns `Ok(None)` for an unknown name under the pass-through policy.
pub fn resolve(
    invocation: &Invocation,
    position: usize,
    options: &ExecOptions,
) -> Result<Option<Filter>, FilterError> {
    let Some(spec) = registry::lookup(&invocation.name) else {
        return match options.unknown_filter {
            UnknownFilterPolicy::Reject => Err(FilterError::UnknownFilter {
                name: invocation.name.clone(),
                position,
            }),
            UnknownFilterPolicy::PassThrough => {
                warn!(filter = %invocation.name, position, "unknown filter, passing through");
                Ok(None)
            }
        };
    };

    spec.build(&invocation.params)
        .map(Some)
        .map_err(|e| e.into_filter_error(spec.name, position))
}

/// Run a chain over a document.
pub fn execute(
    chain: &FilterChain,
    document: Document,
    options: &ExecOptions,
) -> Result<Document, FilterError> {
    run_chain(chain, document, options, None)
}

/// Run a chain and capture a [`StageTrace`] for every segment.
pub fn execute_traced(
    chain: &FilterChain,
    document: Document,
    options: &ExecOptions,
) -> Result<(Document, Vec<StageTrace>), FilterError> {
    let mut traces = Vec::with_capacity(chain.len());
    let output = run_chain(chain, document, options, Some(&mut traces))?;
    Ok((output, traces))
}

/// Parse an optional expression and run it over `lines`.
pub fn run(
    expression: Option<&str>,
    lines: Document,
    options: &ExecOptions,
) -> Result<Document, FilterError> {
    let chain = parse_chain(expression);
    execute(&chain, lines, options)
}

fn run_chain(
    chain: &FilterChain,
    document: Document,
    options: &ExecOptions,
    mut traces: Option<&mut Vec<StageTrace>>,
) -> Result<Document, FilterError> {
    let mut current = document;

    for (idx, invocation) in chain.iter().enumerate() {
        let position = idx + 1;
        let input_count = current.len();
        let filter = resolve(invocation, position, options)?;

        if let Some(filter) = &filter {
            current = filter.apply(&current);
            debug!(
                filter = %invocation.name,
                position,
                kind = %filter.kind(),
                input_count,
                output_count = current.len(),
                "applied filter"
            );
        }

        if let Some(traces) = traces.as_deref_mut() {
            traces.push(StageTrace {
                position,
                name: invocation.name.clone(),
                kind: filter.as_ref().map(Filter::kind),
                input_count,
                output_count: current.len(),
            });
        }
    }

    Ok(current)
}
