//! Top-level CDCL search loop.

use crate::analysis::{analyze, AnalysisResult};
use crate::assignment::Assignment;
use crate::backtrack::backtrack;
use crate::bcp::propagate;
use crate::branching::{BranchContext, BranchingStrategy};
use crate::clause::Formula;
use crate::graph::ImplicationGraph;
use crate::literal::Variable;
use crate::trail::Trail;

/// The result of a complete solve. Unsat is a normal outcome, not an error.
pub enum SolveResult {
    Sat(Assignment),
    Unsat,
}

/// Owns assignment, implication graph, trail, and formula for one solve, and
/// drives the search loop: propagate, then either analyze a conflict or make
/// another decision.
pub struct Solver {
    formula: Formula,
    assignment: Assignment,
    graph: ImplicationGraph,
    trail: Trail,
    level: u32,
    strategy: Box<dyn BranchingStrategy>,
    branch_count: u64,
}

impl Solver {
    pub fn new(formula: Formula, num_variables: usize, strategy: Box<dyn BranchingStrategy>) -> Self {
        log::info!("constructed solver with {} variables, {} clauses", num_variables, formula.len());
        Solver {
            formula,
            assignment: Assignment::new(num_variables),
            graph: ImplicationGraph::new(num_variables),
            trail: Trail::new(),
            level: 0,
            strategy,
            branch_count: 0,
        }
    }

    /// Runs the search loop to completion, returning the result together
    /// with the number of decisions made (reported as "picked: N times" by
    /// the CLI).
    pub fn solve(mut self) -> (SolveResult, u64) {
        self.trail.ensure_level_zero();

        {
            let ctx = BranchContext { assignment: &self.assignment, formula: &self.formula };
            self.strategy.preprocess(&ctx);
        }

        loop {
            let conflict = propagate(&self.formula, &mut self.assignment, &mut self.graph, &mut self.trail, self.level);

            if let Some(conflict_id) = conflict {
                match analyze(&self.formula, &self.graph, &self.trail, conflict_id, self.level) {
                    AnalysisResult::Unsat => {
                        log::info!("unsat: conflict at decision level 0");
                        return (SolveResult::Unsat, self.branch_count);
                    }
                    AnalysisResult::Learned { backjump_level, clause } => {
                        log::trace!(
                            "learned clause with {} literals, backjumping to level {}",
                            clause.len(),
                            backjump_level
                        );
                        self.formula.add_learned(clause);
                        backtrack(&mut self.assignment, &mut self.graph, &mut self.trail, backjump_level);
                        self.level = backjump_level;
                    }
                }
                continue;
            }

            if self.assignment.all_assigned() {
                log::info!("sat: all {} variables assigned", self.assignment.num_variables());
                return (SolveResult::Sat(self.assignment), self.branch_count);
            }

            self.level += 1;
            let (variable, value) = {
                let ctx = BranchContext { assignment: &self.assignment, formula: &self.formula };
                self.strategy
                    .pick_branch(&ctx)
                    .expect("pick_branch must return a variable while unassigned variables remain")
            };
            self.branch_count += 1;
            log::debug!("decision {}: {} := {} at level {}", self.branch_count, variable, value, self.level);

            self.trail.begin_level(literal_for(variable, value));
            self.graph.record_decision(variable, value, self.level);
            self.assignment.assign_variable(variable, value);
        }
    }
}

fn literal_for(variable: Variable, value: bool) -> crate::literal::Literal {
    crate::literal::Literal::new(variable, value)
}
