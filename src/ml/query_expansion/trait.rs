//! Query reformulator trait definition.

use crate::error::Result;

use super::types::Reformulation;

/// Relevance-feedback reformulation strategy.
///
/// Implementations receive one round of judged documents and return the
/// query to search with next. Documents are plain text (title + snippet).
pub trait QueryReformulator: Send + Sync {
    /// Derive a new query from the words of the current one and its judged
    /// results.
    ///
    /// # Arguments
    /// * `words` - Whitespace-separated words of the query that produced the
    ///   judged results, in order
    /// * `relevant` - Texts of results judged relevant
    /// * `non_relevant` - Texts of results judged non-relevant
    ///
    /// # Errors
    /// [`RocchioError::InsufficientFeedback`](crate::error::RocchioError::InsufficientFeedback)
    /// when the judgments cannot support a new query.
    fn reformulate_words(
        &self,
        words: &[String],
        relevant: &[String],
        non_relevant: &[String],
    ) -> Result<Reformulation>;

    /// Split `query` on whitespace and reformulate its words.
    fn reformulate(
        &self,
        query: &str,
        relevant: &[String],
        non_relevant: &[String],
    ) -> Result<Reformulation> {
        let words: Vec<String> = query.split_whitespace().map(str::to_string).collect();
        self.reformulate_words(&words, relevant, non_relevant)
    }

    /// Get the name of this reformulator for debugging and logging.
    fn name(&self) -> &str;
}
