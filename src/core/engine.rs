use crate::core::{classifier, evaluator};
use crate::domain::model::{Recurrence, Solution};
use crate::domain::ports::Solver;
use crate::utils::error::Result;

/// Production solver backed by the regex pattern set.
#[derive(Debug, Clone, Default)]
pub struct PatternSolver;

impl PatternSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Solver for PatternSolver {
    fn classify(&self, input: &str) -> Result<Recurrence> {
        classifier::classify(input)
    }

    fn evaluate(&self, form: &Recurrence) -> String {
        evaluator::evaluate(form)
    }
}

/// Runs the classify->evaluate pipeline for one submission. Stateless; a
/// later submission simply produces a fresh `Solution`.
pub struct SolverEngine<S: Solver> {
    solver: S,
}

impl<S: Solver> SolverEngine<S> {
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    pub fn run(&self, equation: &str) -> Result<Solution> {
        tracing::debug!("Classifying equation: {}", equation);
        let form = self.solver.classify(equation)?;
        tracing::debug!("Classified as {}: {:?}", form.classification(), form);

        let bound = self.solver.evaluate(&form);
        tracing::info!("Solved {} -> {}", equation, bound);

        Ok(Solution {
            equation: equation.to_string(),
            classification: form.classification().to_string(),
            bound,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_runs_full_pipeline() {
        let engine = SolverEngine::new(PatternSolver::new());
        let solution = engine.run("T(N) = 2T(N/2) + O(N)").unwrap();
        assert_eq!(solution.equation, "T(N) = 2T(N/2) + O(N)");
        assert_eq!(solution.classification, "divide_and_conquer");
        assert_eq!(solution.bound, "Divide and Conquer Recurrence: O(N^1 * log N)");
    }

    #[test]
    fn test_engine_propagates_classification_failure() {
        let engine = SolverEngine::new(PatternSolver::new());
        assert!(engine.run("banana").is_err());
    }
}
