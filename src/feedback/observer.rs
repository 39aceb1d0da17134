//! Progress events emitted by the feedback loop.

use crate::ml::query_expansion::Reformulation;
use crate::search::SearchResult;

use super::state::TerminationReason;

/// Receives progress events from the feedback loop.
///
/// Every method has an empty default so observers implement only what they
/// display.
pub trait FeedbackObserver {
    /// A round is about to search for `query`.
    fn iteration_started(&mut self, _iteration: usize, _query: &str) {}

    /// A result is about to be judged.
    fn result_presented(&mut self, _rank: usize, _result: &SearchResult) {}

    /// All results of the round were judged.
    fn feedback_summary(&mut self, _query: &str, _precision: f64, _desired_precision: f64) {}

    /// Precision fell short and the query is being reformulated.
    fn expanding(&mut self, _desired_precision: f64) {}

    /// A new query was produced.
    fn query_expanded(&mut self, _reformulation: &Reformulation) {}

    /// The loop stopped.
    fn terminated(&mut self, _reason: &TerminationReason) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FeedbackObserver for NoopObserver {}
