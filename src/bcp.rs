//! Boolean constraint propagation: the unit-clause rule, run to a fixed
//! point.
//!
//! Each pass scans every original and learned clause once; scanning the
//! whole clause set every pass (rather than watching literals) keeps
//! termination easy to see, at the cost of being quadratic in the worst
//! case. A `fixedbitset` tracks which variables were already enqueued this
//! pass so duplicate pairs are suppressed without a hash set.

use fixedbitset::FixedBitSet;

use crate::assignment::{Assignment, Value};
use crate::clause::{ClauseId, Formula};
use crate::graph::ImplicationGraph;
use crate::literal::{Literal, Variable};
use crate::trail::Trail;

/// The outcome of a full fixed-point BCP run: either a conflicting clause,
/// or none.
pub type BcpOutcome = Option<ClauseId>;

/// Runs BCP to a fixed point at `level`, mutating `assignment`, `graph`, and
/// `trail` in place. Returns the conflicting clause id if one is found.
pub fn propagate(
    formula: &Formula,
    assignment: &mut Assignment,
    graph: &mut ImplicationGraph,
    trail: &mut Trail,
    level: u32,
) -> BcpOutcome {
    loop {
        let mut queue: Vec<(Literal, ClauseId)> = Vec::new();
        // Indexed by `2 * array_index + polarity`, so opposite-polarity
        // pairs for the same variable are distinct entries and both reach
        // the apply phase below; only a literally repeated (literal,
        // clause) pair is suppressed.
        let mut enqueued = FixedBitSet::with_capacity(assignment.num_variables() * 2);

        for id in formula.iter_ids() {
            let clause = formula.clause(id);
            match assignment.value_of_clause(clause) {
                Value::False => return Some(id),
                Value::True => continue,
                Value::Unassign => {
                    if let Some(literal) = assignment.unit_literal(clause) {
                        let idx = literal.variable().array_index() * 2 + literal.polarity() as usize;
                        if !enqueued[idx] {
                            enqueued.set(idx, true);
                            queue.push((literal, id));
                        }
                    }
                }
            }
        }

        if queue.is_empty() {
            return None;
        }

        for (literal, antecedent) in queue {
            let variable = literal.variable();
            match assignment.value_of_variable(variable) {
                Value::Unassign => {
                    apply_propagation(formula, assignment, graph, trail, level, literal, antecedent);
                }
                current if literal_is_consistent(current, literal) => {
                    // Another pair earlier in this pass already assigned
                    // the variable consistently with this one; nothing to
                    // do.
                }
                _ => {
                    // This pair contradicts an assignment already made
                    // earlier in the same pass. Rather than waiting for the
                    // next scan to see the clause go FALSE, report the
                    // conflict immediately.
                    return Some(antecedent);
                }
            }
        }
    }
}

fn literal_is_consistent(value: Value, literal: Literal) -> bool {
    match value {
        Value::True => literal.polarity(),
        Value::False => !literal.polarity(),
        Value::Unassign => true,
    }
}

fn apply_propagation(
    formula: &Formula,
    assignment: &mut Assignment,
    graph: &mut ImplicationGraph,
    trail: &mut Trail,
    level: u32,
    literal: Literal,
    antecedent: ClauseId,
) {
    let variable = literal.variable();
    let parents: Vec<Variable> = formula
        .clause(antecedent)
        .literals()
        .iter()
        .map(|l| l.variable())
        .filter(|&v| v != variable)
        .collect();

    assignment.assign_literal_true(literal);
    graph.record_propagation(variable, literal.polarity(), level, antecedent, parents);
    trail.record_propagation(level, literal);
    log::trace!("propagated {} at level {} because of clause {:?}", literal, level, antecedent);
}
