//! Session state and the report produced when the loop ends.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The query being refined. Only the controller mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub query: String,
    /// Whitespace-separated words of `query`; the reformulator works on these.
    pub words: Vec<String>,
    /// Rounds started so far (1-based once the loop runs).
    pub iteration: usize,
    /// Precision of the most recently evaluated round.
    pub precision: Option<f64>,
}

impl QueryState {
    pub fn new<S: Into<String>>(query: S) -> Self {
        let query = query.into();
        let words = query.split_whitespace().map(str::to_string).collect();
        Self {
            query,
            words,
            iteration: 0,
            precision: None,
        }
    }

    /// Replace the current query.
    pub fn set_query<S: Into<String>>(&mut self, query: S) {
        *self = Self {
            iteration: self.iteration,
            precision: self.precision,
            ..Self::new(query)
        };
    }
}

/// Judged documents of one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JudgedSet {
    pub relevant: Vec<String>,
    pub non_relevant: Vec<String>,
}

impl JudgedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, document: String, relevant: bool) {
        if relevant {
            self.relevant.push(document);
        } else {
            self.non_relevant.push(document);
        }
    }

    pub fn total(&self) -> usize {
        self.relevant.len() + self.non_relevant.len()
    }

    /// Fraction judged relevant; `None` before any judgment.
    pub fn precision(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.relevant.len() as f64 / total as f64),
        }
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum TerminationReason {
    /// The search service returned fewer results than requested.
    InsufficientResults { requested: usize, returned: usize },
    /// Every result of a round was judged non-relevant.
    AllNonRelevant,
    /// A round met the desired precision.
    TargetReached { precision: f64 },
    /// The iteration cap was hit.
    MaxIterations { iterations: usize },
    /// The judgments could not produce a new query.
    ExpansionExhausted { detail: String },
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::InsufficientResults {
                requested,
                returned,
            } => write!(
                f,
                "insufficient results ({returned} of {requested} returned)"
            ),
            TerminationReason::AllNonRelevant => write!(f, "all non-relevant"),
            TerminationReason::TargetReached { precision } => {
                write!(f, "target reached (precision {precision})")
            }
            TerminationReason::MaxIterations { iterations } => {
                write!(f, "max iterations ({iterations})")
            }
            TerminationReason::ExpansionExhausted { detail } => {
                write!(f, "expansion exhausted ({detail})")
            }
        }
    }
}

/// One completed or aborted round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    pub iteration: usize,
    pub query: String,
    pub results: usize,
    pub relevant: usize,
    pub precision: Option<f64>,
    /// Terms added to the query at the end of this round.
    pub expansion_terms: Vec<String>,
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReport {
    pub initial_query: String,
    pub final_query: String,
    pub iterations: Vec<IterationRecord>,
    pub termination: TerminationReason,
}
