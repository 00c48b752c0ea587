//! TF-IDF relevance index.
//!
//! Each record is reduced to its `combined_text` (every column value in
//! declared order, space separated). A vocabulary is fit over the whole
//! corpus once, and every record becomes a unit-length TF-IDF vector. A query
//! is projected into the same fixed space and scored by cosine similarity.
//!
//! Weights are `tf(t, r) * idf(t)` with the smoothed inverse document
//! frequency `idf(t) = ln((1 + N) / (1 + df(t))) + 1`, which keeps every
//! weight strictly positive even for tiny corpora.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::time::Instant;

use vitrine_core::{Record, RecordSet};

use crate::error::{SearchError, SearchResult};
use crate::tokenizer::tokenize;
use crate::vector::SparseVector;

/// Similarity a record must strictly exceed to be returned, unless the
/// caller supplies another.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// A record paired with its cosine similarity to a query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    /// Position of the record in the catalog.
    pub position: usize,
    /// Cosine similarity in `[0, 1]`.
    pub score: f64,
    pub record: Record,
}

/// Serializes as the record's columns plus a `similarity` field.
impl Serialize for ScoredRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.record.values().len() + 1))?;
        for (column, value) in self.record.iter() {
            map.serialize_entry(column, value)?;
        }
        map.serialize_entry("similarity", &self.score)?;
        map.end()
    }
}

/// Immutable vector space model over the catalog.
#[derive(Debug)]
pub struct RelevanceIndex {
    records: RecordSet,
    combined_text: Vec<String>,
    vocabulary: HashMap<String, u32>,
    terms: Vec<String>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
    /// Per term id, the `(record position, weight)` pairs containing it.
    postings: Vec<Vec<(u32, f64)>>,
}

impl RelevanceIndex {
    /// Fit the vocabulary and record vectors over `records`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::EmptyCorpus`] when `records` is empty.
    /// - [`SearchError::EmptyVocabulary`] when no record yields a term.
    pub fn build(records: RecordSet) -> SearchResult<Self> {
        if records.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }
        let started = Instant::now();

        let combined_text: Vec<String> = records.iter().map(Record::combined_text).collect();
        let tokenized: Vec<Vec<String>> = combined_text.iter().map(|t| tokenize(t)).collect();

        // BTreeMap keeps dimension ids in lexicographic term order
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }
        if document_frequency.is_empty() {
            return Err(SearchError::EmptyVocabulary {
                records: records.len(),
            });
        }

        let n = records.len() as f64;
        let mut vocabulary = HashMap::with_capacity(document_frequency.len());
        let mut terms = Vec::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (id, (term, df)) in document_frequency.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), id as u32);
            terms.push(term.to_string());
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
        }

        let vectors: Vec<SparseVector> = tokenized
            .iter()
            .map(|tokens| weigh(&vocabulary, &idf, tokens.iter().map(String::as_str)))
            .collect();

        let mut postings = vec![Vec::new(); terms.len()];
        for (position, vector) in vectors.iter().enumerate() {
            for &(term, weight) in vector.entries() {
                postings[term as usize].push((position as u32, weight));
            }
        }

        tracing::info!(
            "Built relevance index: {} records, {} terms in {:?}",
            records.len(),
            terms.len(),
            started.elapsed()
        );

        Ok(Self {
            records,
            combined_text,
            vocabulary,
            terms,
            idf,
            vectors,
            postings,
        })
    }

    /// Project `text` into the fitted vector space.
    ///
    /// Terms outside the vocabulary are dropped; the result is unit length,
    /// or zero when no term is known.
    pub fn transform(&self, text: &str) -> SparseVector {
        let tokens = tokenize(text);
        weigh(&self.vocabulary, &self.idf, tokens.iter().map(String::as_str))
    }

    /// Rank records by cosine similarity to `text`.
    ///
    /// Only records scoring strictly above `threshold` are returned, best
    /// first; equal scores keep catalog order. A query sharing no vocabulary
    /// with the catalog returns an empty list.
    pub fn query(&self, text: &str, threshold: f64) -> Vec<ScoredRecord> {
        let query = self.transform(text);
        if query.is_zero() {
            tracing::debug!("Query {:?} shares no terms with the catalog", text);
            return Vec::new();
        }

        let mut scores = vec![0.0_f64; self.records.len()];
        for &(term, weight) in query.entries() {
            for &(position, record_weight) in &self.postings[term as usize] {
                scores[position as usize] += weight * record_weight;
            }
        }

        let mut results: Vec<ScoredRecord> = scores
            .into_iter()
            .enumerate()
            .map(|(position, score)| (position, score.clamp(0.0, 1.0)))
            .filter(|&(_, score)| score > threshold)
            .map(|(position, score)| ScoredRecord {
                position,
                score,
                record: self.records.records()[position].clone(),
            })
            .collect();

        // sort_by is stable, so ties stay in catalog order
        results.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            "Query {:?} matched {} records above {}",
            text,
            results.len(),
            threshold
        );
        results
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    /// Vocabulary terms in dimension order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn vector(&self, position: usize) -> Option<&SparseVector> {
        self.vectors.get(position)
    }

    pub fn combined_text(&self, position: usize) -> Option<&str> {
        self.combined_text.get(position).map(String::as_str)
    }

    /// Inverse document frequency of a vocabulary term.
    pub fn term_weight(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&id| self.idf[id as usize])
    }
}

fn weigh<'a>(
    vocabulary: &HashMap<String, u32>,
    idf: &[f64],
    tokens: impl Iterator<Item = &'a str>,
) -> SparseVector {
    let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
    for token in tokens {
        if let Some(&id) = vocabulary.get(token) {
            *counts.entry(id).or_insert(0) += 1;
        }
    }
    SparseVector::weighted(&counts, idf)
}
