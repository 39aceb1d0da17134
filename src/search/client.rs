//! Search client trait and result type.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One ranked web search result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display URL of the result.
    pub url: String,
    /// Page title, when the service reports one.
    pub title: Option<String>,
    /// Text snippet, when the service reports one.
    pub snippet: Option<String>,
    /// Document format tag such as "PDF/Adobe Acrobat".
    pub file_format: Option<String>,
}

impl SearchResult {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_snippet<S: Into<String>>(mut self, snippet: S) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    pub fn with_file_format<S: Into<String>>(mut self, file_format: S) -> Self {
        self.file_format = Some(file_format.into());
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Snippet with embedded newlines and non-breaking spaces removed.
    pub fn description(&self) -> String {
        self.snippet
            .as_deref()
            .unwrap_or("")
            .chars()
            .filter(|&c| c != '\n' && c != '\u{a0}')
            .collect()
    }

    /// Text used as a feedback document: title followed by the description.
    pub fn document_text(&self) -> String {
        let title = self.title();
        let description = self.description();
        match (title.is_empty(), description.is_empty()) {
            (true, _) => description,
            (false, true) => title.to_string(),
            (false, false) => format!("{title} {description}"),
        }
    }
}

/// A web search service returning ranked results for a query.
///
/// Credentials and engine identifiers are bound when the client is built.
/// Transport failures are returned as errors and end the feedback run.
pub trait SearchClient: Send {
    /// Fetch up to `count` results for `query`, best first.
    fn search(&mut self, query: &str, count: usize) -> Result<Vec<SearchResult>>;

    /// Get the name of this client for logging.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_strips_newlines_and_nbsp() {
        let result = SearchResult::new("https://example.com")
            .with_snippet("Jaguars are\nlarge\u{a0}cats.");

        assert_eq!(result.description(), "Jaguars arelargecats.");
    }

    #[test]
    fn test_document_text() {
        let result = SearchResult::new("https://example.com")
            .with_title("Jaguar")
            .with_snippet("Big cat");
        assert_eq!(result.document_text(), "Jaguar Big cat");

        let untitled = SearchResult::new("https://example.com").with_snippet("Big cat");
        assert_eq!(untitled.document_text(), "Big cat");

        let bare = SearchResult::new("https://example.com");
        assert_eq!(bare.document_text(), "");
        assert_eq!(bare.title(), "");
    }
}
