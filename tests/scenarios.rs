//! End-to-end scenarios over the DIMACS parser and the solver.

use cdcl_sat::branching::Ordered;
use cdcl_sat::dimacs::parse_dimacs;
use cdcl_sat::solver::{SolveResult, Solver};

fn solve(input: &str) -> SolveResult {
    let parsed = parse_dimacs(input).expect("well-formed DIMACS input");
    let solver = Solver::new(parsed.formula, parsed.num_variables, Box::new(Ordered));
    solver.solve().0
}

#[test]
fn unit_clause_is_satisfiable() {
    match solve("p cnf 1 1\n1 0\n") {
        SolveResult::Sat(assignment) => {
            assert!(assignment.value_of_variable(cdcl_sat::literal::Variable::new(1)).is_true());
        }
        SolveResult::Unsat => panic!("expected SAT"),
    }
}

#[test]
fn contradictory_units_are_unsatisfiable() {
    match solve("p cnf 1 2\n1 0\n-1 0\n") {
        SolveResult::Unsat => {}
        SolveResult::Sat(_) => panic!("expected UNSAT"),
    }
}

#[test]
fn free_variable_does_not_prevent_sat() {
    match solve("p cnf 3 2\n1 2 0\n-1 2 0\n") {
        SolveResult::Sat(assignment) => {
            assert!(assignment.value_of_variable(cdcl_sat::literal::Variable::new(2)).is_true());
        }
        SolveResult::Unsat => panic!("expected SAT"),
    }
}

#[test]
fn chained_unit_propagation_to_unsat() {
    // -3 forces 3=FALSE; clauses 2 and 3 then force 1 and 2 FALSE, leaving
    // clause 1 falsified.
    match solve("p cnf 3 4\n1 2 0\n-1 3 0\n-2 3 0\n-3 0\n") {
        SolveResult::Unsat => {}
        SolveResult::Sat(_) => panic!("expected UNSAT"),
    }
}

#[test]
fn cyclic_implications_are_satisfiable_both_ways() {
    match solve("p cnf 3 3\n1 -2 0\n2 -3 0\n3 -1 0\n") {
        SolveResult::Sat(assignment) => assert!(assignment.all_assigned()),
        SolveResult::Unsat => panic!("expected SAT"),
    }
}
