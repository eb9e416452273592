//! Must-succeed call wrappers.
//!
//! A must-call invokes a fallible function and, if it fails, turns the error
//! into an unrecoverable abort ([`Fatal`]). Before aborting, the failure is
//! offered to a [`Logger`], either the process-wide one installed with
//! [`set_logger`] or one injected through [`Must::with_logger`].
//!
//! Arguments are passed as a tuple and threaded through unchanged, so one
//! operation covers every arity from zero to three:
//!
//! ```
//! use micro_kit::must::{must_call, Message};
//!
//! fn add(x: i32, y: i32) -> Result<i32, String> {
//!     Ok(x + y)
//! }
//!
//! assert_eq!(must_call(add, (10, 20), Message::None), 30);
//! ```
//!
//! The abort message follows [`Message::render`] and is byte for byte the one
//! handed to the logger.

mod fallible;
mod fatal;
mod logger;
mod message;

pub use fallible::FallibleFn;
pub use fatal::Fatal;
pub use logger::Context;
pub use logger::Logger;
pub use logger::TracingLogger;
pub use logger::logger;
pub use logger::set_logger;
pub use message::Message;
pub use message::render_template;

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Invokes `f(args...)` and aborts with [`Fatal`] if it fails.
///
/// The process-wide logger, if one is bound at the time of the failure, is
/// notified first. On success the produced value is returned unchanged.
pub fn must_call<F, Args, M>(f: F, args: Args, message: M) -> F::Output
where
    F: FallibleFn<Args>,
    F::Error: Into<Box<dyn Error + Send + Sync>>,
    M: Into<Message>,
{
    Must::global().call(f, args, message)
}

/// Where a [`Must`] looks for its logger.
#[derive(Clone, Default)]
enum LoggerSource {
    #[default]
    Global,
    Fixed(Option<Arc<dyn Logger>>),
}

/// A must-call configuration.
///
/// The default reads the process-wide binding at failure time; the other
/// constructors pin a logger (or none) so the outcome does not depend on
/// global state.
#[derive(Clone, Default)]
pub struct Must {
    source: LoggerSource,
}

impl Must {
    pub fn global() -> Self {
        Self { source: LoggerSource::Global }
    }

    pub fn with_logger(logger: Arc<dyn Logger>) -> Self {
        Self { source: LoggerSource::Fixed(Some(logger)) }
    }

    /// Never logs, only aborts.
    pub fn silent() -> Self {
        Self { source: LoggerSource::Fixed(None) }
    }

    /// Invokes `f(args...)`; see [`must_call`].
    pub fn call<F, Args, M>(&self, f: F, args: Args, message: M) -> F::Output
    where
        F: FallibleFn<Args>,
        F::Error: Into<Box<dyn Error + Send + Sync>>,
        M: Into<Message>,
    {
        self.check(f.invoke(args), message)
    }

    /// Applies the failure handling to an already computed result.
    pub fn check<T, E, M>(&self, result: Result<T, E>, message: M) -> T
    where
        E: Into<Box<dyn Error + Send + Sync>>,
        M: Into<Message>,
    {
        match result {
            Ok(value) => value,
            Err(e) => self.fail(e.into(), &message.into()),
        }
    }

    fn logger(&self) -> Option<Arc<dyn Logger>> {
        match &self.source {
            LoggerSource::Global => logger(),
            LoggerSource::Fixed(logger) => logger.clone(),
        }
    }

    fn fail(&self, error: Box<dyn Error + Send + Sync>, message: &Message) -> ! {
        let error_text = error.to_string();

        if let Some(logger) = self.logger() {
            match message.template_call(&error_text) {
                Some((template, args)) => logger.panic_formatted(template, &args),
                None => logger.panic(&message.render(&error_text), &failure_context(&error_text)),
            }
        }

        Fatal::new(message.render(&error_text), error).raise()
    }
}

impl fmt::Debug for Must {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match &self.source {
            LoggerSource::Global => "global",
            LoggerSource::Fixed(Some(_)) => "fixed",
            LoggerSource::Fixed(None) => "silent",
        };
        f.debug_struct("Must").field("logger", &source).finish()
    }
}

fn failure_context(error_text: &str) -> Context {
    let context = Context::new().with("error", error_text);

    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => context.with("backtrace", backtrace),
        _ => context,
    }
}

/// Must-call handling for a `Result` that is already at hand.
///
/// ```
/// use micro_kit::must::MustExt;
///
/// let port: u16 = "8080".parse::<u16>().must_with("invalid port");
/// assert_eq!(port, 8080);
/// ```
pub trait MustExt<T> {
    fn must(self) -> T;

    fn must_with<M: Into<Message>>(self, message: M) -> T;
}

impl<T, E> MustExt<T> for Result<T, E>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    fn must(self) -> T {
        Must::global().check(self, Message::None)
    }

    fn must_with<M: Into<Message>>(self, message: M) -> T {
        Must::global().check(self, message)
    }
}
