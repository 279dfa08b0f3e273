//! Bounded-iteration root finding.

/// Iteration cap shared by every convergence loop in the standard.
pub(crate) const MAX_ITERATIONS: usize = 20;

/// A converged root and the number of correction steps it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Root {
    pub value: f64,
    pub iterations: usize,
}

/// Secant iteration with a unit probe step.
///
/// Drives `residual` to zero starting from `guess`, estimating the local
/// slope from a second evaluation one unit away. Returns `None` when more
/// than `max_iterations` correction steps would be needed.
pub(crate) fn secant(
    mut residual: impl FnMut(f64) -> f64,
    guess: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Option<Root> {
    let mut value = guess;
    let mut iterations = 0;
    loop {
        let r = residual(value);
        if r.abs() <= tolerance {
            return Some(Root { value, iterations });
        }
        if iterations == max_iterations {
            return None;
        }
        let probe = residual(value + 1.0);
        value += r / (r - probe);
        iterations += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn finds_root_of_a_linear_residual() {
        let root = secant(|x| 2.0 * x - 3.0, 0.0, 1e-12, MAX_ITERATIONS).unwrap();

        // One correction step lands exactly on the root of a linear function.
        assert_relative_eq!(root.value, 1.5);
        assert_eq!(root.iterations, 1);
    }

    #[test]
    fn converged_guess_takes_no_steps() {
        let root = secant(|x| x - 1.0, 1.0, 1e-12, MAX_ITERATIONS).unwrap();

        assert_eq!(root.iterations, 0);
        assert_relative_eq!(root.value, 1.0);
    }

    #[test]
    fn gives_up_at_the_iteration_cap() {
        // A residual that never shrinks cannot converge.
        assert!(secant(|x| 1.0 + x.abs(), 0.0, 1e-12, 4).is_none());
    }

    #[test]
    fn zero_budget_only_accepts_an_already_converged_guess() {
        assert!(secant(|x| x - 5.0, 0.0, 1e-12, 0).is_none());
        assert!(secant(|x| x - 5.0, 5.0, 1e-12, 0).is_some());
    }
}
