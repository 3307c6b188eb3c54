//! Conflict analysis: first-UIP resolution.
//!
//! Walks the trail's history at the conflict level from latest to earliest,
//! resolving away every literal at the conflict level except the last one
//! standing (the asserting literal).

use std::collections::{HashMap, HashSet};

use crate::clause::{Clause, ClauseId, Formula};
use crate::graph::ImplicationGraph;
use crate::literal::{Literal, Variable};
use crate::trail::Trail;

pub enum AnalysisResult {
    /// A conflict was derived at decision level 0: the formula is UNSAT.
    Unsat,
    Learned {
        backjump_level: u32,
        clause: Clause,
    },
}

/// Analyzes the conflict clause `conflict` detected by BCP at `level`.
pub fn analyze(
    formula: &Formula,
    graph: &ImplicationGraph,
    trail: &Trail,
    conflict: ClauseId,
    level: u32,
) -> AnalysisResult {
    if level == 0 {
        return AnalysisResult::Unsat;
    }

    // History of the conflict level: the decision literal followed by every
    // literal BCP propagated at this level, in the order it was forced. The
    // pivot choice below always resolves away whichever `curr` literal comes
    // latest in this order.
    let history = trail.history_at(level);
    let mut position_in_history: HashMap<Variable, usize> = HashMap::with_capacity(history.len());
    for (idx, literal) in history.iter().enumerate() {
        position_in_history.insert(literal.variable(), idx);
    }

    // `curr` and `prev` accumulate across rounds; only the newly expanded
    // `pool` is (re-)partitioned each round.
    let mut curr: HashSet<Literal> = HashSet::new();
    let mut prev: HashSet<Literal> = HashSet::new();
    let mut done: HashSet<Variable> = HashSet::new();
    let mut pool: Vec<Literal> = formula.clause(conflict).literals().to_vec();

    loop {
        for literal in pool.drain(..) {
            match graph.node(literal.variable()).level {
                Some(lvl) if lvl == level => {
                    curr.insert(literal);
                }
                _ => {
                    prev.insert(literal);
                }
            }
        }

        if curr.len() == 1 {
            let mut literals: Vec<Literal> = curr.into_iter().collect();
            literals.extend(prev.iter().copied());
            let backjump = backjump_level(&prev, graph, level);
            return AnalysisResult::Learned {
                backjump_level: backjump,
                clause: Clause::new(literals),
            };
        }

        let pivot = *curr
            .iter()
            .max_by_key(|literal| position_in_history.get(&literal.variable()).copied().unwrap_or(0))
            .expect("curr is non-empty while |curr| > 1");
        curr.remove(&pivot);
        done.insert(pivot.variable());

        let antecedent = graph
            .node(pivot.variable())
            .antecedent
            .unwrap_or_else(|| unreachable!("pivot literal at the conflict level must have an antecedent"));

        pool = formula
            .clause(antecedent)
            .literals()
            .iter()
            .copied()
            .filter(|l| !done.contains(&l.variable()))
            .collect();
    }
}

/// Backjump level: the highest decision level among the clause's
/// below-conflict-level literals, or one level below the conflict if there
/// are none.
fn backjump_level(prev: &HashSet<Literal>, graph: &ImplicationGraph, level: u32) -> u32 {
    prev.iter()
        .filter_map(|l| graph.node(l.variable()).level)
        .max()
        .unwrap_or_else(|| level.saturating_sub(1))
}
