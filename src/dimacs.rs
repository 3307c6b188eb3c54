//! DIMACS CNF input format: reader and writer.
//!
//! Parsing filters ignorable lines, validates the header, validates every
//! clause line, then cross-checks the header's declared counts against what
//! was actually found.

use std::collections::HashSet;
use std::fmt::Write as _;

use crate::clause::{Clause, Formula};
use crate::error::SolverError;
use crate::literal::Literal;

/// Result of a successful parse: the formula and the number of distinct
/// variables that appear in it.
pub struct ParsedCnf {
    pub formula: Formula,
    pub num_variables: usize,
}

fn is_ignorable(line: &str) -> bool {
    line.is_empty() || line.starts_with('c') || line.starts_with('%') || line.starts_with('0')
}

/// Parses a complete DIMACS CNF document.
pub fn parse_dimacs(input: &str) -> Result<ParsedCnf, SolverError> {
    let mut relevant_lines = Vec::new();
    for (idx, raw_line) in input.lines().enumerate() {
        let line = raw_line.trim();
        if is_ignorable(line) {
            continue;
        }
        relevant_lines.push((idx + 1, line));
    }

    let (header_line_no, header_line) = *relevant_lines
        .first()
        .ok_or(SolverError::MissingHeader { line: 1 })?;

    let header_tokens: Vec<&str> = header_line.split_whitespace().collect();
    if header_tokens.len() != 4 || header_tokens[0] != "p" || header_tokens[1] != "cnf" {
        return Err(SolverError::MissingHeader { line: header_line_no });
    }
    let declared_vars: usize = header_tokens[2]
        .parse()
        .map_err(|_| SolverError::MissingHeader { line: header_line_no })?;
    let declared_clauses: usize = header_tokens[3]
        .parse()
        .map_err(|_| SolverError::MissingHeader { line: header_line_no })?;

    let clause_lines = &relevant_lines[1..];

    let mut formula = Formula::new();
    let mut seen_variables: HashSet<u32> = HashSet::new();

    for &(line_no, line) in clause_lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.last() != Some(&"0") {
            return Err(SolverError::UnterminatedClause { line: line_no });
        }

        let mut literals = Vec::with_capacity(tokens.len() - 1);
        for &token in &tokens[..tokens.len() - 1] {
            let value: i64 = token
                .parse()
                .map_err(|_| SolverError::InvalidLiteral { line: line_no, token: token.to_string() })?;
            let literal = Literal::from_dimacs(value)
                .ok_or_else(|| SolverError::InvalidLiteral { line: line_no, token: token.to_string() })?;
            seen_variables.insert(literal.variable().index());
            literals.push(literal);
        }

        formula.add_original(Clause::new(literals));
    }

    if seen_variables.len() != declared_vars {
        return Err(SolverError::VariableCountMismatch {
            expected: declared_vars,
            actual: seen_variables.len(),
        });
    }
    if clause_lines.len() != declared_clauses {
        return Err(SolverError::ClauseCountMismatch {
            expected: declared_clauses,
            actual: clause_lines.len(),
        });
    }

    let num_variables = seen_variables.into_iter().max().unwrap_or(0) as usize;
    Ok(ParsedCnf { formula, num_variables })
}

/// Re-emits a formula in DIMACS CNF form, so that parsing the output
/// reproduces the same clause set.
pub fn write_dimacs(formula: &Formula, num_variables: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "p cnf {} {}", num_variables, formula.len());
    for id in formula.iter_ids() {
        let clause = formula.clause(id);
        for literal in clause.literals() {
            let _ = write!(out, "{} ", literal.to_dimacs());
        }
        out.push_str("0\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_satisfiable_instance() {
        let parsed = parse_dimacs("p cnf 1 1\n1 0\n").unwrap();
        assert_eq!(parsed.num_variables, 1);
        assert_eq!(parsed.formula.original_count(), 1);
    }

    #[test]
    fn skips_comments_and_footers() {
        let input = "c a comment\np cnf 2 2\n1 2 0\n% trailer\n-1 2 0\n0\n";
        let parsed = parse_dimacs(input).unwrap();
        assert_eq!(parsed.formula.original_count(), 2);
    }

    #[test]
    fn rejects_missing_header() {
        let err = parse_dimacs("1 2 0\n").unwrap_err();
        assert!(matches!(err, SolverError::MissingHeader { .. }));
    }

    #[test]
    fn rejects_clause_without_trailing_zero() {
        let err = parse_dimacs("p cnf 2 1\n1 2\n").unwrap_err();
        assert!(matches!(err, SolverError::UnterminatedClause { .. }));
    }

    #[test]
    fn rejects_variable_count_mismatch() {
        let err = parse_dimacs("p cnf 5 1\n1 2 0\n").unwrap_err();
        assert!(matches!(err, SolverError::VariableCountMismatch { .. }));
    }

    #[test]
    fn rejects_clause_count_mismatch() {
        let err = parse_dimacs("p cnf 2 2\n1 2 0\n").unwrap_err();
        assert!(matches!(err, SolverError::ClauseCountMismatch { .. }));
    }

    #[test]
    fn dedups_duplicate_clauses_but_validates_against_raw_line_count() {
        // Two identical clause lines: the header's clause count must match
        // the raw line count, even though the Formula collapses them to one.
        let parsed = parse_dimacs("p cnf 1 2\n1 0\n1 0\n").unwrap();
        assert_eq!(parsed.formula.original_count(), 1);
    }

    #[test]
    fn round_trip_reparses_to_the_same_clause_set() {
        let input = "p cnf 3 2\n1 2 0\n-1 2 3 0\n";
        let parsed = parse_dimacs(input).unwrap();
        let text = write_dimacs(&parsed.formula, parsed.num_variables);
        let reparsed = parse_dimacs(&text).unwrap();
        assert_eq!(reparsed.formula.original_count(), parsed.formula.original_count());
        for id in parsed.formula.iter_ids() {
            assert_eq!(reparsed.formula.clause(id).literals(), parsed.formula.clause(id).literals());
        }
    }
}
