/// A scalar function of `N` solver variables.
///
/// Solvers call the function repeatedly with different `x` and never expect
/// it to change between calls: the same `x` must produce the same result.
///
/// The const generic `N` is the number of solver variables.
/// For example, `N = 1` represents a function of one variable.
pub trait Function<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function is undefined at `x`.
    fn call(&self, x: &[f64; N]) -> Result<f64, Self::Error>;
}

impl<const N: usize, T> Function<N> for &T
where
    T: Function<N> + ?Sized,
{
    type Error = T::Error;

    fn call(&self, x: &[f64; N]) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Paraboloid;

    impl Function<2> for Paraboloid {
        type Error = Infallible;

        fn call(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
            Ok(x[0] * x[0] + x[1] * x[1])
        }
    }

    fn call_twice<F: Function<2>>(f: F, x: [f64; 2]) -> (f64, f64) {
        let a = f.call(&x).ok().unwrap_or(f64::NAN);
        let b = f.call(&x).ok().unwrap_or(f64::NAN);
        (a, b)
    }

    #[test]
    fn references_are_functions() {
        let f = Paraboloid;
        let (a, b) = call_twice(&f, [3.0, 4.0]);

        assert_eq!(a, 25.0);
        assert_eq!(a, b);
    }
}
