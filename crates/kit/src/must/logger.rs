//! The pluggable failure sink and its process-wide binding.

use crate::must::message::render_template;
use arc_swap::ArcSwapOption;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;
use tracing::error;

/// Receives failures before a must-call aborts.
///
/// Must-calls only ever use [`Logger::panic`] and [`Logger::panic_formatted`];
/// the `error*` pair is there for hosts that reuse the same sink for
/// recoverable failures. An implementation must not rely on being able to
/// stop the abort: the caller raises it as soon as the logger returns.
#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    fn panic(&self, message: &str, context: &Context);

    fn panic_formatted(&self, template: &str, args: &[String]) {
        self.panic(&render_template(template, args), &Context::default());
    }

    fn error(&self, message: &str, context: &Context);

    fn error_formatted(&self, template: &str, args: &[String]) {
        self.error(&render_template(template, args), &Context::default());
    }
}

/// Structured key/value fields attached to a logged failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    fields: Vec<(&'static str, String)>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with<V: fmt::Display>(mut self, key: &'static str, value: V) -> Self {
        self.fields.push((key, value.to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// A [`Logger`] that emits through `tracing` at error level.
///
/// The `error` and `backtrace` context entries become event fields. It only
/// records the failure; aborting is left to the must-call.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn panic(&self, message: &str, context: &Context) {
        error!(fatal = true, error = context.get("error"), backtrace = context.get("backtrace"), "{}", message);
    }

    fn error(&self, message: &str, context: &Context) {
        error!(error = context.get("error"), backtrace = context.get("backtrace"), "{}", message);
    }
}

// no ordering between concurrent `set_logger` calls and failing must-calls
static LOGGER: Lazy<ArcSwapOption<Arc<dyn Logger>>> = Lazy::new(ArcSwapOption::empty);

/// Installs `logger` process wide, or clears the binding with `None`.
///
/// Last writer wins. The binding is read when a must-call fails, not when it
/// starts.
pub fn set_logger(logger: Option<Arc<dyn Logger>>) {
    LOGGER.store(logger.map(Arc::new));
}

/// The logger currently bound, if any.
pub fn logger() -> Option<Arc<dyn Logger>> {
    LOGGER.load_full().map(|slot| Arc::clone(&*slot))
}
