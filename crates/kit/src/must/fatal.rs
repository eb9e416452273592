use std::cell::RefCell;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

thread_local! {
    // the abort currently unwinding on this thread, claimed by `Fatal::catch`
    static RAISED: RefCell<Option<Fatal>> = const { RefCell::new(None) };
}

/// The unrecoverable abort raised by a failed must-call.
///
/// It unwinds as an ordinary panic whose payload is the rendered message, so
/// the default panic hook prints it. Code that needs to survive it, or wants
/// the original error back, has to catch it explicitly with [`Fatal::catch`].
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Fatal {
    message: String,
    #[source]
    source: Box<dyn Error + Send + Sync>,
}

impl Fatal {
    pub fn new<M, E>(message: M, source: E) -> Self
    where
        M: Into<String>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        Self { message: message.into(), source: source.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error reported by the failed call.
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_cause(self) -> Box<dyn Error + Send + Sync> {
        self.source
    }

    /// Unwinds the current stack with the message as a `String` payload.
    pub fn raise(self) -> ! {
        let message = self.message.clone();
        RAISED.with(|raised| *raised.borrow_mut() = Some(self));
        panic!("{message}")
    }

    /// Runs `f`, turning a [`Fatal`] unwind into `Err`.
    ///
    /// Any other panic is resumed untouched. State observed by `f` may be left
    /// half updated when it aborts; the caller owns that.
    pub fn catch<T, F: FnOnce() -> T>(f: F) -> Result<T, Fatal> {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Ok(value),
            Err(payload) => match RAISED.with(|raised| raised.borrow_mut().take()) {
                Some(fatal) if payload.downcast_ref::<String>().is_some_and(|message| *message == fatal.message) => Err(fatal),
                _ => panic::resume_unwind(payload),
            },
        }
    }
}
