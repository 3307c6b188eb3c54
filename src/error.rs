//! Error types.
//!
//! Only malformed-input is a recoverable error; an internal-invariant
//! violation is a programming error and is reported with `debug_assert!` /
//! `unreachable!` at the point of detection instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("line {line}: missing or malformed DIMACS header, expected 'p cnf <vars> <clauses>'")]
    MissingHeader { line: usize },

    #[error("line {line}: clause does not terminate with 0")]
    UnterminatedClause { line: usize },

    #[error("line {line}: invalid literal token '{token}'")]
    InvalidLiteral { line: usize, token: String },

    #[error("header declares {expected} variables but {actual} distinct variables were found")]
    VariableCountMismatch { expected: usize, actual: usize },

    #[error("header declares {expected} clauses but {actual} clauses were found")]
    ClauseCountMismatch { expected: usize, actual: usize },
}
