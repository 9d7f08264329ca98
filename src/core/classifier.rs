use crate::domain::model::Recurrence;
use crate::utils::error::{Result, SolverError};
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::LazyLock;

// Patterns are anchored at both ends: trailing or leading garbage fails
// classification outright, there are no partial matches.

/// T(N) = aT(N/b) + O(N^d), a and ^d optional.
static DIVISOR_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^T\(N\)\s*=\s*(\d*)T\(N/(\d+)\)\s*\+\s*O\(N(?:\^(\d+))?\)$").unwrap()
});

/// T(N) = aT(N/b) + O(1) with an explicit coefficient; d defaults to 1.
/// Without a coefficient the input belongs to the simple-halving form below.
static DIVISOR_CONST_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^T\(N\)\s*=\s*(\d+)T\(N/(\d+)\)\s*\+\s*O\(1\)$").unwrap());

/// T(N) = aT(N) + O(N^d), no shrinking divisor.
static NO_DIVISOR_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^T\(N\)\s*=\s*(\d*)T\(N\)\s*\+\s*O\(N(?:\^(\d+))?\)$").unwrap());

/// T(N) = T(N/b) + O(1).
static SIMPLE_HALVING_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^T\(N\)\s*=\s*T\(N/(\d+)\)\s*\+\s*O\(1\)$").unwrap());

/// T(N) = c_1T(N-1) + c_2T(N-2) + ... + O(1), any number of terms.
static LINEAR_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^T\(N\)\s*=\s*((?:c_\d+T\(N-\d+\)\s*\+\s*)*O\(1\))$").unwrap()
});

/// Parses the input into a structured recurrence. Patterns are tried in a
/// fixed priority order and the first match wins; this ordering is an
/// observable contract since some inputs satisfy more than one pattern.
pub fn classify(input: &str) -> Result<Recurrence> {
    if let Some(caps) = DIVISOR_FORM.captures(input) {
        return Ok(Recurrence::DivideAndConquer {
            a: numeric_capture(&caps, 1, 1)?,
            b: numeric_capture(&caps, 2, 1)?,
            d: numeric_capture(&caps, 3, 1)?,
        });
    }

    if let Some(caps) = DIVISOR_CONST_FORM.captures(input) {
        return Ok(Recurrence::DivideAndConquer {
            a: numeric_capture(&caps, 1, 1)?,
            b: numeric_capture(&caps, 2, 1)?,
            d: 1,
        });
    }

    if let Some(caps) = NO_DIVISOR_FORM.captures(input) {
        return Ok(Recurrence::NoDivisor {
            a: numeric_capture(&caps, 1, 1)?,
            d: numeric_capture(&caps, 2, 1)?,
        });
    }

    if let Some(caps) = SIMPLE_HALVING_FORM.captures(input) {
        return Ok(Recurrence::SimpleHalving {
            b: numeric_capture(&caps, 1, 1)?,
        });
    }

    if let Some(caps) = LINEAR_FORM.captures(input) {
        return Ok(Recurrence::Linear {
            raw: caps[1].to_string(),
        });
    }

    tracing::debug!("No pattern matched input: {:?}", input);
    Err(SolverError::FormatError)
}

/// Reads capture group `index` as a base-10 integer, falling back to
/// `default` when the group is absent or empty. An out-of-range number is a
/// classification failure rather than a panic.
fn numeric_capture<T: FromStr>(caps: &Captures, index: usize, default: T) -> Result<T> {
    match caps.get(index) {
        Some(m) if !m.as_str().is_empty() => {
            m.as_str().parse().map_err(|_| SolverError::FormatError)
        }
        _ => Ok(default),
    }
}
