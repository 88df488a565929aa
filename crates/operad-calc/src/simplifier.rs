//! Value simplification, decoupled from the calculators.
//!
//! A [`Simplifier`] rewrites a value into an equivalent but tidier form,
//! such as cancelling a common factor across the terms of a symbolic
//! expression. Calculators never simplify implicitly; callers apply a
//! simplifier exactly where they want canonical output.

/// Rewrites values of type `T` into equivalent simplified forms.
pub trait Simplifier<T> {
    /// Simplifies a single value. The default is the identity.
    fn simplify(&self, x: T) -> T {
        x
    }

    /// Simplifies each value independently.
    fn simplify_list(&self, xs: Vec<T>) -> Vec<T> {
        xs.into_iter().map(|x| self.simplify(x)).collect()
    }

    /// Simplifies a pair jointly. The default simplifies each side on its
    /// own; implementations may instead cancel structure shared between
    /// the two, such as a common denominator.
    fn simplify_pair(&self, a: T, b: T) -> (T, T) {
        (self.simplify(a), self.simplify(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Halve;

    impl Simplifier<i64> for Halve {
        fn simplify(&self, x: i64) -> i64 {
            if x % 2 == 0 {
                x / 2
            } else {
                x
            }
        }
    }

    #[test]
    fn defaults_apply_elementwise() {
        let s = Halve;
        assert_eq!(s.simplify_list(vec![2, 3, 8]), vec![1, 3, 4]);
        assert_eq!(s.simplify_pair(4, 5), (2, 5));
    }
}
