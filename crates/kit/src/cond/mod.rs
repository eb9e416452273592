//! Conditional callback execution.
//!
//! Replaces `if`/`else` blocks whose only job is to fire a callback with
//! small functional helpers. Every callback is optional: passing `None` on the
//! selected branch is a silent no-op, never an error.
//!
//! - [`may`] picks one of two callbacks eagerly
//! - [`may_true`] / [`may_false`] are the single-branch forms
//! - [`then`] builds a [`Then`] chain that fires at most once
//!
//! # Example
//!
//! ```
//! use micro_kit::cond::{may, then};
//!
//! let mut hits = Vec::new();
//! may(true, Some(|| hits.push("yes")), None::<fn()>);
//! assert_eq!(hits, ["yes"]);
//!
//! let mut branch = "";
//! then(false).run(Some(|| branch = "do")).otherwise(Some(|| branch = "else"));
//! assert_eq!(branch, "else");
//! ```

mod then;

pub use then::Then;
pub use then::then;

/// Invokes `on_true` when `condition` holds, `on_false` otherwise.
///
/// Exactly one branch is selected; the other is never invoked even when present.
#[inline]
pub fn may<T, F>(condition: bool, on_true: Option<T>, on_false: Option<F>)
where
    T: FnOnce(),
    F: FnOnce(),
{
    if condition {
        invoke(on_true);
    } else {
        invoke(on_false);
    }
}

/// Invokes `on_true` iff `condition` is `true`.
#[inline]
pub fn may_true<T: FnOnce()>(condition: bool, on_true: Option<T>) {
    may(condition, on_true, None::<fn()>);
}

/// Invokes `on_false` iff `condition` is `false`.
#[inline]
pub fn may_false<F: FnOnce()>(condition: bool, on_false: Option<F>) {
    may(condition, None::<fn()>, on_false);
}

/// returns whether a callback actually ran
#[inline]
pub(crate) fn invoke<F: FnOnce()>(f: Option<F>) -> bool {
    match f {
        Some(f) => {
            f();
            true
        }
        None => false,
    }
}
