use crate::domain::model::Recurrence;
use crate::utils::error::Result;

/// The classify/evaluate seam. Both operations are pure: classify either
/// produces a structured form or fails, evaluate is total over classify's
/// output domain and never fails.
pub trait Solver {
    fn classify(&self, input: &str) -> Result<Recurrence>;
    fn evaluate(&self, form: &Recurrence) -> String;
}

pub trait ConfigProvider {
    fn output_format(&self) -> &str;
    fn prompt(&self) -> &str;
    fn banner(&self) -> bool;
}
