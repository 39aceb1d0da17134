//! Rocchio relevance-feedback reformulation.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info};

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::error::{Result, RocchioError};
use crate::ml::tfidf::{TermVector, TermVectorizer};

use super::r#trait::QueryReformulator;
use super::types::{EXPANSION_TERMS, Reformulation, RocchioConfig};

/// Apply the Rocchio update to a query vector.
///
/// `q1 = alpha * q0 + beta * centroid_r - gamma * centroid_n`; components may
/// go negative.
pub fn rocchio_update(
    q0: &TermVector,
    centroid_r: &TermVector,
    centroid_n: &TermVector,
    config: &RocchioConfig,
) -> Result<TermVector> {
    let mut q1 = TermVector::zeros(q0.len());
    q1.add_scaled(q0, config.alpha)?;
    q1.add_scaled(centroid_r, config.beta)?;
    q1.add_scaled(centroid_n, -config.gamma)?;
    Ok(q1)
}

/// Choose the words of the reformulated query from a ranked term list.
///
/// Takes the top `original.len() + EXPANSION_TERMS` ranked terms. Original
/// words met along the way are recovered (case-insensitive, one occurrence
/// each). Every original word that was not recovered replaces the
/// lowest-ranked expansion candidate and is appended in original order, so no
/// original word is ever lost. Recovered original words are never the ones
/// truncated, even when they sit in the last ranked slots.
///
/// Returns the final words and the expansion terms among them.
pub fn select_query_terms(
    ranked: &[(&str, f64)],
    original: &[String],
) -> (Vec<String>, Vec<String>) {
    let target = original.len() + EXPANSION_TERMS;
    let lowered: Vec<String> = original.iter().map(|w| w.to_lowercase()).collect();
    let mut recovered = vec![false; original.len()];

    // (term, is an original word)
    let mut candidates: Vec<(String, bool)> = Vec::with_capacity(target);
    for (term, _) in ranked.iter().take(target) {
        let hit = lowered
            .iter()
            .enumerate()
            .position(|(i, word)| !recovered[i] && word == term);
        if let Some(i) = hit {
            recovered[i] = true;
        }
        candidates.push((term.to_string(), hit.is_some()));
    }

    let missing: Vec<&String> = original
        .iter()
        .zip(&recovered)
        .filter(|&(_, &found)| !found)
        .map(|(word, _)| word)
        .collect();

    let mut to_drop = (candidates.len() + missing.len()).saturating_sub(target);
    let mut idx = candidates.len();
    while to_drop > 0 && idx > 0 {
        idx -= 1;
        if !candidates[idx].1 {
            candidates.remove(idx);
            to_drop -= 1;
        }
    }

    let mut words: Vec<String> = candidates.into_iter().map(|(term, _)| term).collect();
    words.extend(missing.into_iter().cloned());

    let original_set: HashSet<&str> = lowered.iter().map(String::as_str).collect();
    let expansion_terms = words
        .iter()
        .filter(|w| !original_set.contains(w.to_lowercase().as_str()))
        .cloned()
        .collect();

    (words, expansion_terms)
}

/// Reformulates queries with TF-IDF vectors and the Rocchio update.
///
/// A fresh vocabulary is fitted on every call; nothing carries over between
/// feedback rounds.
pub struct RocchioReformulator {
    config: RocchioConfig,
    analyzer: Arc<dyn Analyzer>,
}

impl RocchioReformulator {
    /// Create a reformulator using the [`StandardAnalyzer`].
    pub fn new(config: RocchioConfig) -> Result<Self> {
        Ok(Self::with_analyzer(config, Arc::new(StandardAnalyzer::new()?)))
    }

    pub fn with_analyzer(config: RocchioConfig, analyzer: Arc<dyn Analyzer>) -> Self {
        Self { config, analyzer }
    }

    pub fn config(&self) -> &RocchioConfig {
        &self.config
    }

    /// Compute the updated query vector together with the vectorizer it lives in.
    pub fn query_vector(
        &self,
        query: &str,
        relevant: &[String],
        non_relevant: &[String],
    ) -> Result<(TermVectorizer, TermVector)> {
        if relevant.is_empty() {
            return Err(RocchioError::insufficient_feedback(
                "no relevant documents to move the query towards",
            ));
        }
        if non_relevant.is_empty() {
            return Err(RocchioError::insufficient_feedback(
                "no non-relevant documents to move the query away from",
            ));
        }

        let corpus: Vec<&str> = relevant
            .iter()
            .chain(non_relevant)
            .map(String::as_str)
            .collect();

        let mut vectorizer = TermVectorizer::new(Arc::clone(&self.analyzer));
        vectorizer.fit(&corpus)?;

        let q0 = vectorizer.transform_one(query)?;
        let centroid_r = TermVector::centroid(&vectorizer.transform(relevant)?)?;
        let centroid_n = TermVector::centroid(&vectorizer.transform(non_relevant)?)?;

        let q1 = rocchio_update(&q0, &centroid_r, &centroid_n, &self.config)?;
        Ok((vectorizer, q1))
    }
}

impl QueryReformulator for RocchioReformulator {
    fn reformulate_words(
        &self,
        original: &[String],
        relevant: &[String],
        non_relevant: &[String],
    ) -> Result<Reformulation> {
        if original.is_empty() {
            return Err(RocchioError::insufficient_feedback("query has no words"));
        }

        let query = original.join(" ");
        let (vectorizer, q1) = self.query_vector(&query, relevant, non_relevant)?;
        let ranked = vectorizer.inverse(&q1)?;
        debug!(
            "Top ranked terms: {:?}",
            ranked.iter().take(original.len() + EXPANSION_TERMS).collect::<Vec<_>>()
        );

        let (words, expansion_terms) = select_query_terms(&ranked, original);
        if expansion_terms.len() < EXPANSION_TERMS {
            return Err(RocchioError::insufficient_feedback(format!(
                "only {} new term(s) available from a vocabulary of {}",
                expansion_terms.len(),
                vectorizer.vocabulary_size()
            )));
        }

        let reformulation = Reformulation::from_words(words, expansion_terms);
        info!("Reformulated '{query}' -> '{}'", reformulation.query.trim());
        Ok(reformulation)
    }

    fn name(&self) -> &str {
        "rocchio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_rocchio_update_worked_example() {
        let q0 = TermVector::from_vec(vec![0.7, 0.7, 0.0, 0.0]);
        let cr = TermVector::from_vec(vec![0.2, 0.1, 0.9, 0.0]);
        let cn = TermVector::from_vec(vec![0.1, 0.0, 0.0, 0.5]);

        let q1 = rocchio_update(&q0, &cr, &cn, &RocchioConfig::default()).unwrap();

        let expected = [0.835, 0.775, 0.675, -0.075];
        for (got, want) in q1.as_slice().iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} != {want}");
        }
    }

    #[test]
    fn test_rocchio_update_length_mismatch() {
        let q0 = TermVector::zeros(2);
        let cr = TermVector::zeros(3);
        let cn = TermVector::zeros(2);
        assert!(rocchio_update(&q0, &cr, &cn, &RocchioConfig::default()).is_err());
    }

    #[test]
    fn test_select_all_recovered() {
        let ranked = [("alpha", 0.835), ("beta", 0.775), ("gamma", 0.675), ("delta", -0.075)];
        let (words, expansion) = select_query_terms(&ranked, &strings(&["alpha", "beta"]));

        assert_eq!(words, strings(&["alpha", "beta", "gamma", "delta"]));
        assert_eq!(expansion, strings(&["gamma", "delta"]));
    }

    #[test]
    fn test_select_appends_unrecovered_word() {
        let ranked = [("x", 0.9), ("alpha", 0.8), ("y", 0.7), ("z", 0.6), ("beta", 0.1)];
        let (words, expansion) = select_query_terms(&ranked, &strings(&["alpha", "beta"]));

        assert_eq!(words, strings(&["x", "alpha", "y", "beta"]));
        assert_eq!(expansion, strings(&["x", "y"]));
    }

    #[test]
    fn test_select_keeps_recovered_word_at_tail() {
        // "alpha" is recovered in the last slot; dropping the tail blindly would lose it.
        let ranked = [("x", 0.9), ("y", 0.8), ("z", 0.7), ("alpha", 0.6), ("beta", 0.0)];
        let (words, expansion) = select_query_terms(&ranked, &strings(&["alpha", "beta"]));

        assert_eq!(words, strings(&["x", "y", "alpha", "beta"]));
        assert_eq!(expansion, strings(&["x", "y"]));
    }

    #[test]
    fn test_select_truncates_expansion_candidate_not_recovered_word() {
        // "beta" ranks outside the top four and displaces "z", not the recovered "alpha".
        let ranked = [
            ("x", 0.9),
            ("y", 0.8),
            ("z", 0.7),
            ("alpha", 0.6),
            ("w", 0.5),
            ("beta", 0.4),
        ];
        let (words, expansion) = select_query_terms(&ranked, &strings(&["alpha", "beta"]));

        assert_eq!(words, strings(&["x", "y", "alpha", "beta"]));
        assert_eq!(expansion, strings(&["x", "y"]));
    }

    #[test]
    fn test_select_out_of_vocabulary_and_case() {
        let ranked = [("jaguar", 0.9), ("cat", 0.5), ("habitat", 0.4), ("car", -0.1)];
        let (words, expansion) = select_query_terms(&ranked, &strings(&["Jaguar", "the"]));

        assert_eq!(words, strings(&["jaguar", "cat", "habitat", "the"]));
        assert_eq!(expansion, strings(&["cat", "habitat"]));
    }

    #[test]
    fn test_select_short_vocabulary() {
        let ranked = [("python", 0.9), ("snake", 0.3)];
        let (words, expansion) = select_query_terms(&ranked, &strings(&["python"]));

        assert_eq!(words, strings(&["python", "snake"]));
        assert_eq!(expansion, strings(&["snake"]));
    }

    #[test]
    fn test_reformulate_preserves_original_words() {
        let reformulator = RocchioReformulator::new(RocchioConfig::default()).unwrap();
        let relevant = strings(&[
            "Jaguar big cat habitat in the rainforest",
            "Jaguar Panthera onca wild cat facts",
        ]);
        let non_relevant = strings(&[
            "Jaguar car dealership new models",
            "Jaguar Land Rover car prices",
        ]);

        let reformulation = reformulator
            .reformulate("jaguar", &relevant, &non_relevant)
            .unwrap();

        assert_eq!(reformulation.words.len(), 3);
        assert_eq!(reformulation.words[0], "jaguar");
        assert_eq!(reformulation.expansion_terms.len(), 2);
        assert!(reformulation.expansion_terms.contains(&"cat".to_string()));
        assert!(!reformulation.expansion_terms.contains(&"car".to_string()));
        assert!(reformulation.query.ends_with(' '));
    }

    #[test]
    fn test_reformulate_words_matches_query_split() {
        let reformulator = RocchioReformulator::new(RocchioConfig::default()).unwrap();
        let relevant = strings(&[
            "Jaguar big cat habitat in the rainforest",
            "Jaguar Panthera onca wild cat facts",
        ]);
        let non_relevant = strings(&["Jaguar car dealership new models"]);

        let from_words = reformulator
            .reformulate_words(&strings(&["jaguar", "cat"]), &relevant, &non_relevant)
            .unwrap();
        let from_query = reformulator
            .reformulate("  jaguar \t cat ", &relevant, &non_relevant)
            .unwrap();

        assert_eq!(from_words, from_query);
    }

    #[test]
    fn test_reformulate_requires_both_sides() {
        let reformulator = RocchioReformulator::new(RocchioConfig::default()).unwrap();
        let docs = strings(&["rust language"]);

        let err = reformulator.reformulate("rust", &docs, &[]).unwrap_err();
        assert!(err.is_recoverable());

        let err = reformulator.reformulate("rust", &[], &docs).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_reformulate_too_few_new_terms() {
        let reformulator = RocchioReformulator::new(RocchioConfig::default()).unwrap();
        let relevant = strings(&["python snake"]);
        let non_relevant = strings(&["python"]);

        let err = reformulator
            .reformulate("python", &relevant, &non_relevant)
            .unwrap_err();
        assert!(matches!(err, RocchioError::InsufficientFeedback(_)));
    }
}
