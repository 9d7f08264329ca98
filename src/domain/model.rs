use serde::{Deserialize, Serialize};

/// A recurrence relation in one of the four recognized shapes. Exactly one
/// shape is selected per input, in classifier priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Recurrence {
    /// T(N) = aT(N/b) + O(N^d)
    DivideAndConquer { a: u64, b: u64, d: u32 },
    /// T(N) = aT(N) + O(N^d); no shrinking divisor, b is effectively 1.
    NoDivisor { a: u64, d: u32 },
    /// T(N) = T(N/b) + O(1); a is 1 and d is 0 by construction.
    SimpleHalving { b: u64 },
    /// T(N) = c_1T(N-1) + c_2T(N-2) + ... + O(1). Coefficients and indices
    /// are matched but never parsed into numbers.
    Linear { raw: String },
}

impl Recurrence {
    /// Short label for logs and the JSON output mode.
    pub fn classification(&self) -> &'static str {
        match self {
            Recurrence::DivideAndConquer { .. } => "divide_and_conquer",
            Recurrence::NoDivisor { .. } => "no_divisor",
            Recurrence::SimpleHalving { .. } => "simple_halving",
            Recurrence::Linear { .. } => "linear",
        }
    }
}

/// Result of one submission, discarded after display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub equation: String,
    pub classification: String,
    pub bound: String,
}
