//! # tq
//!
//! A plaintext line processor. A document (a sequence of lines) is threaded
//! through a chain of named filters written as a pipe expression.
//!
//! ## Overview
//!
//! - **Element-wise filters** transform each line on its own and keep the
//!   line count (`snake-case`, `pad-left`, `truncate`, ...)
//! - **Collection-wise filters** see the whole document and may reshape it
//!   (`sort`, `unique`, `first`, `col-width`, ...)
//! - Filters take positional parameters after `:` (`pad-left:20:.`)
//!
//! ## Example
//!
//! ```
//! use tq::{ExecOptions, run};
//!
//! let lines = vec!["Hello World!".to_string(), "hello world".to_string()];
//!
//! let result = run(Some("snake-case | unique | pad-right:14:."), lines, &ExecOptions::default())
//!     .unwrap();
//!
//! assert_eq!(result, vec!["hello_world..."]);
//! ```

pub mod builtins;
pub mod dsl;
pub mod error;
pub mod executor;
pub mod filter;
pub mod registry;

/// An ordered sequence of newline-free lines.
pub type Document = Vec<String>;

pub use dsl::{FilterChain, Invocation, parse_chain, parse_expression};
pub use error::{FilterError, ParamError};
pub use executor::{
    ExecOptions, StageTrace, UnknownFilterPolicy, execute, execute_traced, resolve, run,
};
pub use filter::{DocumentFilter, Filter, LineFilter};
pub use registry::{FilterKind, FilterSpec, ParamSpec, lookup};
