// ********* Output data structures ***********

use std::error::Error;
use std::fmt::Display;

/// The outcome of resolving one candidate name that is absent (verbatim)
/// from the reference name set.
///
/// Candidate names that match a reference name byte-for-byte need no
/// correction and do not produce a `MatchResult`.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct MatchResult {
    /// The name as it appears in the data source, after trimming.
    pub candidate: String,
    /// The best reference name, or `None` when no reference name reached
    /// the similarity threshold.
    pub suggestion: Option<String>,
}

/// Errors that prevent a reconciliation run from completing.
///
/// The absence of a suggestion for a candidate is a normal result, not an
/// error.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ReconcileErrors {
    EmptyCandidateSet,
    EmptyReferenceSet,
    /// The similarity threshold was outside of the [0, 1] interval.
    InvalidThreshold,
}

impl Error for ReconcileErrors {}

impl Display for ReconcileErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReconcileErrors::EmptyCandidateSet => {
                write!(f, "reconcile: the candidate name set is empty")
            }
            ReconcileErrors::EmptyReferenceSet => {
                write!(f, "reconcile: the reference name set is empty")
            }
            ReconcileErrors::InvalidThreshold => {
                write!(f, "reconcile: the similarity threshold must be within [0, 1]")
            }
        }
    }
}

// ********* Configuration **********

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct MatchRules {
    /// The minimum fuzzy similarity ratio (0 to 1) for a suggestion to be
    /// surfaced. Suggestions scoring exactly at the threshold are kept.
    pub similarity_threshold: f64,
}

impl MatchRules {
    pub const DEFAULT_RULES: MatchRules = MatchRules {
        similarity_threshold: 0.75,
    };
}
