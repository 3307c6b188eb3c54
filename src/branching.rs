//! Branching heuristics: how the solver picks the next variable to decide.
//!
//! `BranchingStrategy` is the sole polymorphic boundary in the core, modeled
//! as a trait object chosen at [`crate::solver::Solver`] construction.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::assignment::Assignment;
use crate::clause::Formula;
use crate::literal::Variable;

/// Read-only view of solver state handed to a [`BranchingStrategy`]; it
/// cannot mutate the assignment, only inspect it.
pub struct BranchContext<'a> {
    pub assignment: &'a Assignment,
    pub formula: &'a Formula,
}

impl<'a> BranchContext<'a> {
    fn unassigned_variables(&self) -> impl Iterator<Item = Variable> + '_ {
        (1..=self.assignment.num_variables() as u32)
            .map(Variable::new)
            .filter(move |&v| self.assignment.value_of_variable(v).is_unassigned())
    }
}

pub trait BranchingStrategy {
    /// Called once before the main loop starts. Default: no-op.
    fn preprocess(&mut self, _ctx: &BranchContext) {}

    /// Picks an unassigned variable and the value to assign it, or `None`
    /// once every variable is assigned.
    fn pick_branch(&mut self, ctx: &BranchContext) -> Option<(Variable, bool)>;
}

/// First unassigned variable in input order, always assigned TRUE.
#[derive(Debug, Default)]
pub struct Ordered;

impl BranchingStrategy for Ordered {
    fn pick_branch(&mut self, ctx: &BranchContext) -> Option<(Variable, bool)> {
        ctx.unassigned_variables().next().map(|v| (v, true))
    }
}

/// Uniform random variable and polarity, using a seeded `SmallRng` so a run
/// can be reproduced from its seed.
pub struct Random {
    rng: SmallRng,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Random { rng: SmallRng::seed_from_u64(seed) }
    }
}

impl BranchingStrategy for Random {
    fn pick_branch(&mut self, ctx: &BranchContext) -> Option<(Variable, bool)> {
        let candidates: Vec<Variable> = ctx.unassigned_variables().collect();
        if candidates.is_empty() {
            return None;
        }
        let variable = candidates[self.rng.gen_range(0..candidates.len())];
        let value = self.rng.gen_bool(0.5);
        Some((variable, value))
    }
}

/// Unassigned variable with the highest static literal-occurrence count in
/// the original clauses, computed once in `preprocess`, ties broken by
/// input order.
#[derive(Default)]
pub struct Frequency {
    order: Vec<Variable>,
}

impl BranchingStrategy for Frequency {
    fn preprocess(&mut self, ctx: &BranchContext) {
        let num_variables = ctx.assignment.num_variables();
        let mut counts = vec![0u32; num_variables];
        for id in ctx.formula.iter_ids() {
            for literal in ctx.formula.clause(id).literals() {
                counts[literal.variable().array_index()] += 1;
            }
        }

        let mut order: Vec<(Variable, u32, u32)> = (0..num_variables)
            .map(|idx| (Variable::new(idx as u32 + 1), counts[idx], idx as u32))
            .collect();
        // Stable sort by descending count; ties keep ascending input order
        // because the index is part of the key and the sort is stable.
        order.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        self.order = order.into_iter().map(|(v, _, _)| v).collect();
    }

    fn pick_branch(&mut self, ctx: &BranchContext) -> Option<(Variable, bool)> {
        self.order
            .iter()
            .copied()
            .find(|&v| ctx.assignment.value_of_variable(v).is_unassigned())
            .map(|v| (v, true))
    }
}

/// Dynamic Largest Individual Sum: recomputed every call over currently
/// unresolved clauses. Deterministic — unlike `Random` and `Frequency`,
/// DLIS's argmax tie-break (smallest variable id) leaves no randomness to
/// seed.
#[derive(Debug, Default)]
pub struct Dlis;

impl BranchingStrategy for Dlis {
    fn pick_branch(&mut self, ctx: &BranchContext) -> Option<(Variable, bool)> {
        let num_variables = ctx.assignment.num_variables();
        let mut positive = vec![0u32; num_variables];
        let mut negative = vec![0u32; num_variables];

        for id in ctx.formula.iter_ids() {
            let clause = ctx.formula.clause(id);
            if ctx.assignment.value_of_clause(clause).is_true() {
                continue;
            }
            for &literal in clause.literals() {
                if ctx.assignment.value_of_literal(literal).is_unassigned() {
                    let idx = literal.variable().array_index();
                    if literal.polarity() {
                        positive[idx] += 1;
                    } else {
                        negative[idx] += 1;
                    }
                }
            }
        }

        let unassigned: Vec<Variable> = ctx.unassigned_variables().collect();

        // `max_by_key` returns the *last* maximum on ties; pairing the count
        // with `Reverse(index)` makes the tie-break land on the smallest
        // variable id.
        let a = unassigned
            .iter()
            .copied()
            .max_by_key(|v| (positive[v.array_index()], std::cmp::Reverse(v.index())));
        let b = unassigned
            .iter()
            .copied()
            .max_by_key(|v| (negative[v.array_index()], std::cmp::Reverse(v.index())));

        let a = a.map(|v| (v, positive[v.array_index()]));
        let b = b.map(|v| (v, negative[v.array_index()]));

        match (a, b) {
            (Some((a_var, a_count)), Some((b_var, b_count))) => {
                if a_count > b_count {
                    Some((a_var, true))
                } else {
                    Some((b_var, false))
                }
            }
            (Some((a_var, _)), None) => Some((a_var, true)),
            (None, Some((b_var, _))) => Some((b_var, false)),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::Clause;
    use crate::literal::Literal;

    fn lit(v: u32, pos: bool) -> Literal {
        Literal::new(Variable::new(v), pos)
    }

    #[test]
    fn ordered_picks_first_unassigned_variable_true() {
        let assignment = Assignment::new(3);
        let formula = Formula::new();
        let ctx = BranchContext { assignment: &assignment, formula: &formula };
        assert_eq!(Ordered.pick_branch(&ctx), Some((Variable::new(1), true)));
    }

    #[test]
    fn ordered_skips_assigned_variables_and_stops_when_none_remain() {
        let mut assignment = Assignment::new(1);
        assignment.assign_variable(Variable::new(1), true);
        let formula = Formula::new();
        let ctx = BranchContext { assignment: &assignment, formula: &formula };
        assert_eq!(Ordered.pick_branch(&ctx), None);
    }

    #[test]
    fn random_only_returns_unassigned_variables() {
        let mut assignment = Assignment::new(3);
        assignment.assign_variable(Variable::new(2), true);
        let formula = Formula::new();
        let mut strategy = Random::new(42);
        for _ in 0..20 {
            let ctx = BranchContext { assignment: &assignment, formula: &formula };
            let (variable, _) = strategy.pick_branch(&ctx).expect("two variables remain unassigned");
            assert!(variable == Variable::new(1) || variable == Variable::new(3));
        }
    }

    #[test]
    fn frequency_orders_by_descending_occurrence_count_ties_by_input_order() {
        let mut formula = Formula::new();
        // Variable 2 occurs 3 times, variable 1 occurs 1, variable 3 occurs 1.
        formula.add_original(Clause::new(vec![lit(1, true), lit(2, true)]));
        formula.add_original(Clause::new(vec![lit(2, false), lit(3, true)]));
        formula.add_original(Clause::new(vec![lit(2, true)]));

        let assignment = Assignment::new(3);
        let mut strategy = Frequency::default();
        {
            let ctx = BranchContext { assignment: &assignment, formula: &formula };
            strategy.preprocess(&ctx);
        }
        let ctx = BranchContext { assignment: &assignment, formula: &formula };
        // Variable 2 has the highest count and must be picked first.
        assert_eq!(strategy.pick_branch(&ctx), Some((Variable::new(2), true)));
    }

    #[test]
    fn frequency_skips_assigned_variables_after_preprocessing() {
        let mut formula = Formula::new();
        formula.add_original(Clause::new(vec![lit(1, true), lit(2, true), lit(2, false)]));

        let mut assignment = Assignment::new(2);
        let mut strategy = Frequency::default();
        {
            let ctx = BranchContext { assignment: &assignment, formula: &formula };
            strategy.preprocess(&ctx);
        }
        assignment.assign_variable(Variable::new(2), true);
        let ctx = BranchContext { assignment: &assignment, formula: &formula };
        assert_eq!(strategy.pick_branch(&ctx), Some((Variable::new(1), true)));
    }

    #[test]
    fn dlis_picks_the_polarity_with_the_larger_occurrence_count() {
        // Variable 1 appears positively in two unresolved clauses, negatively
        // in none: Cp(1) = 2 > Cn(anything), so (1, TRUE) must win.
        let mut formula = Formula::new();
        formula.add_original(Clause::new(vec![lit(1, true), lit(2, true)]));
        formula.add_original(Clause::new(vec![lit(1, true), lit(2, false)]));

        let assignment = Assignment::new(2);
        let ctx = BranchContext { assignment: &assignment, formula: &formula };
        assert_eq!(Dlis.pick_branch(&ctx), Some((Variable::new(1), true)));
    }

    #[test]
    fn dlis_ignores_clauses_already_satisfied() {
        // Clause 1 is already TRUE (variable 1 assigned TRUE) and must not
        // contribute to the occurrence counts for the remaining decision.
        let mut formula = Formula::new();
        formula.add_original(Clause::new(vec![lit(1, true), lit(2, true)]));
        formula.add_original(Clause::new(vec![lit(3, false)]));

        let mut assignment = Assignment::new(3);
        assignment.assign_variable(Variable::new(1), true);
        let ctx = BranchContext { assignment: &assignment, formula: &formula };
        // Only variable 3 contributes an unresolved occurrence (negative).
        assert_eq!(Dlis.pick_branch(&ctx), Some((Variable::new(3), false)));
    }

    #[test]
    fn dlis_breaks_ties_on_smallest_variable_id() {
        let mut formula = Formula::new();
        formula.add_original(Clause::new(vec![lit(1, true)]));
        formula.add_original(Clause::new(vec![lit(2, true)]));

        let assignment = Assignment::new(2);
        let ctx = BranchContext { assignment: &assignment, formula: &formula };
        assert_eq!(Dlis.pick_branch(&ctx), Some((Variable::new(1), true)));
    }
}
