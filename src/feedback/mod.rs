//! The interactive relevance-feedback loop.
//!
//! ```text
//! Searching → Judging → Evaluating → (Expanding → Searching) | Terminated
//! ```
//!
//! [`FeedbackController`] owns the loop and talks to its collaborators only
//! through traits: [`SearchClient`](crate::search::SearchClient) for results,
//! [`RelevanceJudge`] for judgments,
//! [`QueryReformulator`](crate::ml::query_expansion::QueryReformulator) for
//! new queries and [`FeedbackObserver`] for progress output.

pub mod config;
pub mod controller;
pub mod judge;
pub mod observer;
pub mod state;

pub use config::FeedbackConfig;
pub use controller::FeedbackController;
pub use judge::{ConsoleJudge, RelevanceJudge, parse_judgment};
pub use observer::{FeedbackObserver, NoopObserver};
pub use state::{FeedbackReport, IterationRecord, JudgedSet, QueryState, TerminationReason};
