/// A function returning `Result`, callable with its arguments packed in a tuple.
///
/// This lets one must-call operation cover every arity: `()` for no argument,
/// `(a,)`, `(a, b)` and `(a, b, c)`. A function without a useful result simply
/// has `Output = ()`.
pub trait FallibleFn<Args> {
    type Output;
    type Error;

    fn invoke(self, args: Args) -> Result<Self::Output, Self::Error>;
}

/// impl `FnOnce` for `FallibleFn`, From 0 parameters to 3 parameters
///
/// for example, it will impl FnOnce(A, B) like this:
///```ignore
/// impl<Func, Out, Err, A, B> FallibleFn<(A, B)> for Func
///    where
///        Func: FnOnce(A, B) -> Result<Out, Err>,
/// {
///    type Output = Out;
///    type Error = Err;
///
///    #[inline]
///    #[allow(non_snake_case)]
///    fn invoke(self, (A, B): (A, B)) -> Result<Out, Err> {
///        (self)(A, B)
///    }
/// }
///```
macro_rules! impl_fallible_fn_for_fn ({ $($param:ident)* } => {
    impl<Func, Out, Err, $($param,)*> FallibleFn<($($param,)*)> for Func
    where
        Func: FnOnce($($param),*) -> Result<Out, Err>,
    {
        type Output = Out;
        type Error = Err;

        #[inline]
        #[allow(non_snake_case, reason = "tuple fields are bound to the generic parameter names")]
        fn invoke(self, ($($param,)*): ($($param,)*)) -> Result<Out, Err> {
            (self)($($param,)*)
        }
    }
});

impl_fallible_fn_for_fn! {}
impl_fallible_fn_for_fn! { A }
impl_fallible_fn_for_fn! { A B }
impl_fallible_fn_for_fn! { A B C }

#[cfg(test)]
mod tests {
    use super::FallibleFn;

    fn assert_is_fallible_fn<Args, F: FallibleFn<Args>>(_f: F) {
        //noop
    }

    fn foo0() -> Result<(), String> {
        Ok(())
    }
    fn foo1(_a: u8) -> Result<u8, String> {
        Ok(1)
    }
    fn foo2(_a1: &str, _a2: Vec<u8>) -> Result<(), std::io::Error> {
        Ok(())
    }
    fn foo3(a1: i32, a2: i32, a3: i32) -> Result<i32, String> {
        Ok(a1 * a2 * a3)
    }

    #[test]
    fn test_fn_is_fallible_fn() {
        assert_is_fallible_fn(foo0);
        assert_is_fallible_fn(foo1);
        assert_is_fallible_fn(foo2);
        assert_is_fallible_fn(foo3);
    }

    #[test]
    fn invoke_threads_arguments() {
        assert_eq!(foo3.invoke((2, 3, 4)), Ok(24));
        assert_eq!(foo1.invoke((9,)), Ok(1));

        let owned = String::from("moved");
        let consume = move || -> Result<String, String> { Ok(owned) };
        assert_eq!(consume.invoke(()), Ok(String::from("moved")));
    }
}
