//! Feedback loop controller.

use log::{debug, info, warn};

use crate::error::Result;
use crate::ml::query_expansion::QueryReformulator;
use crate::search::SearchClient;

use super::config::FeedbackConfig;
use super::judge::RelevanceJudge;
use super::observer::{FeedbackObserver, NoopObserver};
use super::state::{FeedbackReport, IterationRecord, JudgedSet, QueryState, TerminationReason};

/// Drives search, judgment and reformulation rounds until a stop condition.
///
/// Execution is strictly sequential: each search and each judgment blocks the
/// loop, and results are judged in rank order.
pub struct FeedbackController {
    config: FeedbackConfig,
    search: Box<dyn SearchClient>,
    judge: Box<dyn RelevanceJudge>,
    reformulator: Box<dyn QueryReformulator>,
    observer: Box<dyn FeedbackObserver>,
}

impl FeedbackController {
    /// Create a controller; the configuration is validated here.
    pub fn new(
        config: FeedbackConfig,
        search: Box<dyn SearchClient>,
        judge: Box<dyn RelevanceJudge>,
        reformulator: Box<dyn QueryReformulator>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            search,
            judge,
            reformulator,
            observer: Box::new(NoopObserver),
        })
    }

    /// Attach an observer for progress output.
    pub fn with_observer(mut self, observer: Box<dyn FeedbackObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Run the loop starting from `initial_query`.
    ///
    /// Normal stops (shortfall, no relevant results, target met, iteration cap,
    /// exhausted expansion) come back in the report. Search, judgment and
    /// analysis failures abort the run with an error.
    pub fn run(&mut self, initial_query: &str) -> Result<FeedbackReport> {
        let mut state = QueryState::new(initial_query);
        let mut iterations = Vec::new();

        let termination = loop {
            if state.iteration >= self.config.max_iterations {
                break TerminationReason::MaxIterations {
                    iterations: state.iteration,
                };
            }
            state.iteration += 1;

            let (record, outcome) = self.run_iteration(&mut state)?;
            iterations.push(record);
            if let Some(reason) = outcome {
                break reason;
            }
        };

        info!("Feedback loop terminated: {termination}");
        self.observer.terminated(&termination);

        Ok(FeedbackReport {
            initial_query: initial_query.to_string(),
            final_query: state.query,
            iterations,
            termination,
        })
    }

    /// One Searching → Judging → Evaluating (→ Expanding) pass.
    fn run_iteration(
        &mut self,
        state: &mut QueryState,
    ) -> Result<(IterationRecord, Option<TerminationReason>)> {
        let requested = self.config.num_results;
        let mut record = IterationRecord {
            iteration: state.iteration,
            query: state.query.clone(),
            results: 0,
            relevant: 0,
            precision: None,
            expansion_terms: Vec::new(),
        };

        self.observer.iteration_started(state.iteration, &state.query);
        debug!("Iteration {} searching '{}'", state.iteration, state.query);

        let results = self.search.search(&state.query, requested)?;
        record.results = results.len();
        if results.len() < requested {
            warn!(
                "Search returned {} results, {} requested",
                results.len(),
                requested
            );
            let reason = TerminationReason::InsufficientResults {
                requested,
                returned: results.len(),
            };
            return Ok((record, Some(reason)));
        }

        let mut judged = JudgedSet::new();
        for (idx, result) in results.iter().take(requested).enumerate() {
            let rank = idx + 1;
            self.observer.result_presented(rank, result);
            let relevant = self.judge.judge(rank, result)?;
            judged.record(result.document_text(), relevant);
        }
        record.relevant = judged.relevant.len();

        if judged.relevant.is_empty() {
            return Ok((record, Some(TerminationReason::AllNonRelevant)));
        }

        let precision = judged.relevant.len() as f64 / judged.total() as f64;
        state.precision = Some(precision);
        record.precision = Some(precision);
        self.observer
            .feedback_summary(&state.query, precision, self.config.desired_precision);

        if precision >= self.config.desired_precision {
            return Ok((record, Some(TerminationReason::TargetReached { precision })));
        }

        self.observer.expanding(self.config.desired_precision);
        match self
            .reformulator
            .reformulate_words(&state.words, &judged.relevant, &judged.non_relevant)
        {
            Ok(reformulation) => {
                self.observer.query_expanded(&reformulation);
                record.expansion_terms = reformulation.expansion_terms.clone();
                state.set_query(reformulation.query);
                Ok((record, None))
            }
            Err(e) if e.is_recoverable() => {
                warn!("{} could not expand the query: {e}", self.reformulator.name());
                let reason = TerminationReason::ExpansionExhausted {
                    detail: e.to_string(),
                };
                Ok((record, Some(reason)))
            }
            Err(e) => Err(e),
        }
    }
}
