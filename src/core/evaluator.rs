use crate::domain::model::Recurrence;

/// Canned answer for every linear recurrence; coefficients are ignored.
pub const LINEAR_SOLUTION: &str = "This is a linear recurrence relation. The solution typically involves solving the characteristic equation.";

/// Maps a classified recurrence to its textual asymptotic bound. Total over
/// the classifier's output domain and free of side effects.
pub fn evaluate(form: &Recurrence) -> String {
    match form {
        Recurrence::Linear { .. } => LINEAR_SOLUTION.to_string(),

        // The two "a applied without a shrinking divisor" shapes share one
        // direct rule instead of the divide-and-conquer case split.
        Recurrence::NoDivisor { a, d } => simple_bound(*a, *d),
        Recurrence::SimpleHalving { .. } => simple_bound(1, 0),

        Recurrence::DivideAndConquer { a, b, d } => {
            // log_b(a) as a natural-log ratio; compared to d with exact
            // floating-point equality, no epsilon.
            let c = (*a as f64).ln() / (*b as f64).ln();
            if c > *d as f64 {
                format!("Divide and Conquer Recurrence: O(N^{:.2})", c)
            } else if c == *d as f64 {
                format!("Divide and Conquer Recurrence: O(N^{} * log N)", d)
            } else {
                format!("Divide and Conquer Recurrence: O(N^{})", d)
            }
        }
    }
}

fn simple_bound(a: u64, d: u32) -> String {
    if a == 1 {
        format!("O(N^{})", d)
    } else {
        format!("O({}^N * N^{})", a, d)
    }
}
