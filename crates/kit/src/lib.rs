//! Small functional helpers for branching and for calls that must not fail.
//!
//! # Modules
//!
//! - [`cond`]: run one of two optional callbacks depending on a condition,
//!   eagerly ([`cond::may`]) or through a fire-once chain ([`cond::then`])
//! - [`must`]: invoke a fallible function and turn its failure into an
//!   unrecoverable abort ([`must::Fatal`]), reporting it to a pluggable
//!   [`must::Logger`] first
//!
//! The two modules are independent of each other.
//!
//! # Example
//!
//! ```
//! use micro_kit::cond::may_true;
//! use micro_kit::must::{must_call, Fatal, Message};
//!
//! fn divide(a: i32, b: i32) -> Result<i32, String> {
//!     if b == 0 { Err("division by zero".to_owned()) } else { Ok(a / b) }
//! }
//!
//! let mut verbose = Vec::new();
//! may_true(true, Some(|| verbose.push("dividing")));
//! assert_eq!(must_call(divide, (9, 3), Message::None), 3);
//!
//! let fatal = Fatal::catch(|| must_call(divide, (1, 0), "divide")).unwrap_err();
//! assert_eq!(fatal.to_string(), "divide: division by zero");
//! ```
//!
//! # Global logger
//!
//! [`must::set_logger`] installs a process-wide [`must::Logger`]. The binding
//! is a plain last-writer-wins setting: nothing orders a concurrent
//! `set_logger` against a failing must-call on another thread. Use
//! [`must::Must::with_logger`] to pin a logger per call site instead.

pub mod cond;
pub mod must;
