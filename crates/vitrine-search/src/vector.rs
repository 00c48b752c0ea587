//! Sparse term vectors.

use std::collections::BTreeMap;

/// A sparse vector over the vocabulary: `(term id, weight)` pairs sorted by
/// term id, with no zero weights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f64)>,
}

impl SparseVector {
    /// Weigh raw term counts by `idf` and normalize to unit length.
    ///
    /// Terms with a non-positive weight are dropped. The result is the zero
    /// vector when nothing survives.
    pub fn weighted(counts: &BTreeMap<u32, u32>, idf: &[f64]) -> Self {
        let entries = counts
            .iter()
            .filter_map(|(&term, &count)| {
                let weight = f64::from(count) * idf[term as usize];
                (weight > 0.0).then_some((term, weight))
            })
            .collect();
        let mut vector = Self { entries };
        vector.normalize();
        vector
    }

    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean (L2) norm.
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scale to unit length. Returns `false` and leaves the vector untouched
    /// when it has zero magnitude.
    pub fn normalize(&mut self) -> bool {
        let norm = self.norm();
        if norm == 0.0 {
            return false;
        }
        for (_, w) in &mut self.entries {
            *w /= norm;
        }
        true
    }

}
