//! TF-IDF term vectors over a feedback corpus.
//!
//! A [`TermVectorizer`] is fitted on the judged documents of one feedback
//! round and then used to project the query and the documents onto the same
//! vocabulary. Vectors use raw term counts, smoothed idf
//! `ln((1 + N) / (1 + df)) + 1`, and are L2-normalized per document.
//!
//! Columns are ordered lexicographically by term so that the same corpus
//! always produces the same dictionary.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Index;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::{Result, RocchioError};

/// Dense vector of term weights, one column per dictionary term.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TermVector(Vec<f64>);

impl TermVector {
    /// A zero vector with `len` columns.
    pub fn zeros(len: usize) -> Self {
        TermVector(vec![0.0; len])
    }

    pub fn from_vec(weights: Vec<f64>) -> Self {
        TermVector(weights)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Whether every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0.0)
    }

    /// Scale to unit length; zero vectors are left untouched.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for w in &mut self.0 {
                *w /= norm;
            }
        }
    }

    /// `self += factor * other`, component-wise.
    pub fn add_scaled(&mut self, other: &TermVector, factor: f64) -> Result<()> {
        if self.len() != other.len() {
            return Err(RocchioError::analysis(format!(
                "Vector length mismatch: {} vs {}",
                self.len(),
                other.len()
            )));
        }
        for (w, o) in self.0.iter_mut().zip(&other.0) {
            *w += factor * o;
        }
        Ok(())
    }

    /// Mean of a non-empty set of equally sized vectors.
    pub fn centroid(vectors: &[TermVector]) -> Result<TermVector> {
        let first = vectors
            .first()
            .ok_or_else(|| RocchioError::analysis("Cannot take the centroid of no vectors"))?;

        let mut sum = TermVector::zeros(first.len());
        for vector in vectors {
            sum.add_scaled(vector, 1.0)?;
        }

        let n = vectors.len() as f64;
        for w in &mut sum.0 {
            *w /= n;
        }
        Ok(sum)
    }
}

impl Index<usize> for TermVector {
    type Output = f64;

    fn index(&self, column: usize) -> &f64 {
        &self.0[column]
    }
}

/// Mapping from term to column index, fixed by one `fit`.
#[derive(Debug, Clone, Default)]
pub struct TermDictionary {
    columns: HashMap<String, usize>,
    terms: Vec<String>,
}

impl TermDictionary {
    /// Build a dictionary from distinct terms; columns follow lexicographic order.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sorted: BTreeSet<String> = terms.into_iter().map(Into::into).collect();
        let terms: Vec<String> = sorted.into_iter().collect();
        let columns = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        TermDictionary { columns, terms }
    }

    pub fn column(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Rank terms by weight, highest first.
///
/// Ties keep ascending column order, so the ranking is reproducible.
pub fn rank_terms<'a>(terms: &'a [String], weights: &TermVector) -> Vec<(&'a str, f64)> {
    let mut ranked: Vec<(&str, f64)> = terms
        .iter()
        .zip(weights.as_slice())
        .map(|(term, &w)| (term.as_str(), w))
        .collect();

    // Stable sort keeps column order for equal weights.
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Smoothed, L2-normalized TF-IDF vectorizer.
pub struct TermVectorizer {
    dictionary: TermDictionary,
    idf: Vec<f64>,
    n_documents: usize,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TermVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermVectorizer")
            .field("vocabulary_size", &self.dictionary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TermVectorizer {
    /// Create a new vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            dictionary: TermDictionary::default(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Create a vectorizer using the [`StandardAnalyzer`].
    pub fn standard() -> Result<Self> {
        Ok(Self::new(Arc::new(StandardAnalyzer::new()?)))
    }

    /// Fit the vocabulary and idf table on a corpus.
    ///
    /// Any previous fit is discarded.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(RocchioError::analysis("Cannot fit on an empty corpus"));
        }

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique_terms: BTreeSet<String> =
                self.analyzer.terms(doc.as_ref())?.into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(RocchioError::analysis(
                "Corpus yields an empty vocabulary (only stop words?)",
            ));
        }

        let n = documents.len() as f64;
        let dictionary = TermDictionary::from_terms(document_frequency.keys().cloned());
        let idf = dictionary
            .terms()
            .iter()
            .map(|term| {
                let df = document_frequency[term] as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        debug!(
            "Fitted vocabulary of {} terms over {} documents",
            dictionary.len(),
            documents.len()
        );

        self.dictionary = dictionary;
        self.idf = idf;
        self.n_documents = documents.len();

        Ok(())
    }

    /// Fit on `documents` and return their vectors.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<TermVector>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Transform several texts over the fitted vocabulary.
    pub fn transform<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<TermVector>> {
        texts
            .iter()
            .map(|text| self.transform_one(text.as_ref()))
            .collect()
    }

    /// Transform one text; out-of-vocabulary terms contribute nothing.
    pub fn transform_one(&self, text: &str) -> Result<TermVector> {
        if self.dictionary.is_empty() {
            return Err(RocchioError::analysis("Vectorizer has not been fitted"));
        }

        let mut vector = TermVector::zeros(self.dictionary.len());
        for term in self.analyzer.terms(text)? {
            if let Some(column) = self.dictionary.column(&term) {
                vector.0[column] += 1.0;
            }
        }

        for (w, idf) in vector.0.iter_mut().zip(&self.idf) {
            *w *= idf;
        }
        vector.l2_normalize();

        Ok(vector)
    }

    /// Terms of the vocabulary ranked by their weight in `vector`.
    pub fn inverse(&self, vector: &TermVector) -> Result<Vec<(&str, f64)>> {
        if vector.len() != self.dictionary.len() {
            return Err(RocchioError::analysis(format!(
                "Vector has {} columns, vocabulary has {}",
                vector.len(),
                self.dictionary.len()
            )));
        }
        Ok(rank_terms(self.dictionary.terms(), vector))
    }

    pub fn dictionary(&self) -> &TermDictionary {
        &self.dictionary
    }

    pub fn term(&self, column: usize) -> Option<&str> {
        self.dictionary.term(column)
    }

    pub fn column(&self, term: &str) -> Option<usize> {
        self.dictionary.column(term)
    }

    /// Vocabulary terms in column order.
    pub fn terms(&self) -> &[String] {
        self.dictionary.terms()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.dictionary.column(term).map(|column| self.idf[column])
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.dictionary.len()
    }

    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}
