use crate::cond::invoke;

/// Starts a fire-once conditional chain bound to `condition`.
#[inline]
#[must_use]
pub fn then(condition: bool) -> Then {
    Then::new(condition)
}

/// A conditional chain that executes at most one callback.
///
/// The condition is captured when the chain is created and never re-evaluated.
/// [`Then::run`] fires on `true`, [`Then::otherwise`] fires on `false`; the
/// first call that matches *and* carries a callback wins, every later call on
/// the same instance is a no-op. A matching call with `None` leaves the chain
/// open.
#[derive(Debug)]
pub struct Then {
    condition: bool,
    fired: bool,
}

impl Then {
    fn new(condition: bool) -> Self {
        Self { condition, fired: false }
    }

    /// Runs `f` if the condition is `true` and nothing has fired yet.
    pub fn run<F: FnOnce()>(&mut self, f: Option<F>) -> &mut Self {
        self.fire_if(self.condition, f)
    }

    /// Runs `f` if the condition is `false` and nothing has fired yet.
    pub fn otherwise<F: FnOnce()>(&mut self, f: Option<F>) -> &mut Self {
        self.fire_if(!self.condition, f)
    }

    /// The condition captured by [`then`].
    pub fn condition(&self) -> bool {
        self.condition
    }

    /// Whether a callback of this chain has already executed.
    pub fn fired(&self) -> bool {
        self.fired
    }

    fn fire_if<F: FnOnce()>(&mut self, matched: bool, f: Option<F>) -> &mut Self {
        if matched && !self.fired {
            self.fired = invoke(f);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::then;
    use std::cell::{Cell, RefCell};

    #[test]
    fn run_fires_on_true() {
        let hit = Cell::new(false);
        let mut chain = then(true);
        chain.run(Some(|| hit.set(true)));

        assert!(hit.get());
        assert!(chain.fired());
    }

    #[test]
    fn otherwise_fires_on_false() {
        let branch = Cell::new("");
        let mut chain = then(false);
        chain.run(Some(|| branch.set("run"))).otherwise(Some(|| branch.set("otherwise")));

        assert_eq!(branch.get(), "otherwise");
        assert!(chain.fired());
        assert!(!chain.condition());
    }

    #[test]
    fn only_first_matching_run_executes() {
        let calls = RefCell::new(Vec::new());

        then(true)
            .run(Some(|| calls.borrow_mut().push(1)))
            .run(Some(|| calls.borrow_mut().push(2)))
            .otherwise(Some(|| calls.borrow_mut().push(3)));

        assert_eq!(*calls.borrow(), [1]);
    }

    #[test]
    fn absent_callback_keeps_chain_open() {
        let calls = RefCell::new(Vec::new());

        let mut chain = then(false);
        chain.otherwise(None::<fn()>);
        assert!(!chain.fired());

        chain
            .run(Some(|| calls.borrow_mut().push("run")))
            .otherwise(Some(|| calls.borrow_mut().push("second")))
            .otherwise(Some(|| calls.borrow_mut().push("third")));

        assert_eq!(*calls.borrow(), ["second"]);
    }

    #[test]
    fn no_matching_call_fires_nothing() {
        let hit = Cell::new(false);
        let mut chain = then(true);
        chain.otherwise(Some(|| hit.set(true))).otherwise(Some(|| hit.set(true)));

        assert!(!hit.get());
        assert!(!chain.fired());
    }

    #[test]
    fn separate_calls_on_one_binding_fire_once() {
        let count = Cell::new(0);
        let inc = || count.set(count.get() + 1);

        let mut chain = then(true);
        chain.run(None::<fn()>);
        chain.run(Some(inc));
        chain.run(Some(inc));
        chain.otherwise(Some(inc));

        assert_eq!(count.get(), 1);
        assert!(chain.fired());
    }

    #[test]
    fn separate_otherwise_calls_on_one_binding_fire_once() {
        let count = Cell::new(0);
        let inc = || count.set(count.get() + 1);

        let mut chain = then(false);
        chain.otherwise(Some(inc));
        chain.otherwise(Some(inc));

        assert_eq!(count.get(), 1);
    }
}
