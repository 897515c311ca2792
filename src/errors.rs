//! Error types for the sum-check protocol and the LDE evaluators

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SumCheckError {
    #[error("evaluation table is empty")]
    EmptyInput,

    #[error("evaluation point has {actual} coordinates, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("evaluation table of length {len} does not fit in {num_vars} variables")]
    InvalidArity { len: usize, num_vars: usize },

    #[error("all {num_rounds} round polynomials have already been produced")]
    RoundOverflow { num_rounds: usize },

    #[error("round {round} requires the challenge issued for round {}", round - 1)]
    MissingChallenge { round: usize },

    #[error("round {round} does not take a challenge")]
    UnexpectedChallenge { round: usize },

    #[error("round {round} polynomial has {len} evaluations, at most {max} allowed")]
    Degree { round: usize, len: usize, max: usize },

    #[error("round {round}: g(0) + g(1) = {actual}, expected {expected}")]
    SumMismatch {
        round: usize,
        expected: String,
        actual: String,
    },

    #[error("oracle query: g(r) = {actual}, last round polynomial gives {expected}")]
    OracleMismatch { expected: String, actual: String },

    #[error("oracle query needs {expected} completed rounds, only {completed} ran")]
    IncompleteRounds { expected: usize, completed: usize },

    #[error("all {num_rounds} rounds have already been verified")]
    TooManyRounds { num_rounds: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("session was rejected and cannot continue")]
    SessionRejected,

    #[error("session is already finished")]
    SessionFinished,

    #[error("challenge source exhausted after {drawn} challenges")]
    ChallengesExhausted { drawn: usize },
}

impl SumCheckError {
    /// True for failures meaning the proof is wrong, as opposed to the API being misused.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            SumCheckError::Degree { .. }
                | SumCheckError::SumMismatch { .. }
                | SumCheckError::OracleMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SumCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_classification() {
        let mismatch = SumCheckError::SumMismatch {
            round: 2,
            expected: "7".into(),
            actual: "8".into(),
        };
        assert!(mismatch.is_rejection());
        assert!(SumCheckError::Degree { round: 1, len: 3, max: 2 }.is_rejection());
        assert!(!SumCheckError::RoundOverflow { num_rounds: 3 }.is_rejection());
        assert!(!SumCheckError::EmptyInput.is_rejection());
    }

    #[test]
    fn messages_carry_context() {
        let err = SumCheckError::SumMismatch {
            round: 2,
            expected: "7".into(),
            actual: "8".into(),
        };
        assert_eq!(err.to_string(), "round 2: g(0) + g(1) = 8, expected 7");

        let err = SumCheckError::MissingChallenge { round: 3 };
        assert_eq!(err.to_string(), "round 3 requires the challenge issued for round 2");
    }
}
