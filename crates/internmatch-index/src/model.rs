//! Pretrained TF-IDF weighting table.
//!
//! The artifact is produced offline and only read here. On disk it is JSON:
//! `{"vocabulary": {"term": dim, ...}, "idf": [w0, w1, ...]}`.
use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use internmatch_core::error::{Error, Result};
use internmatch_core::normalize::normalize;
use internmatch_core::traits::WeightingModel;
use internmatch_core::types::SparseVector;

/// Tokens shorter than this are never part of the vocabulary.
const MIN_TOKEN_CHARS: usize = 2;

#[derive(Debug, Serialize, Deserialize)]
struct ModelArtifact {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfModel {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(vocabulary.len());
        for (term, &dim) in &vocabulary {
            if dim >= idf.len() {
                return Err(Error::InvalidModel(format!(
                    "term '{term}' maps to dimension {dim} but only {} weights exist",
                    idf.len()
                )));
            }
            if !seen.insert(dim) {
                return Err(Error::InvalidModel(format!("dimension {dim} is assigned to more than one term")));
            }
        }
        if let Some((dim, w)) = idf.iter().enumerate().find(|(_, w)| !w.is_finite() || **w < 0.0) {
            return Err(Error::InvalidModel(format!("weight {w} at dimension {dim} is not a finite non-negative number")));
        }
        Ok(Self { vocabulary, idf })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let artifact: ModelArtifact =
            serde_json::from_str(json).map_err(|e| Error::InvalidModel(e.to_string()))?;
        Self::new(artifact.vocabulary, artifact.idf)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Model { path: path.display().to_string(), reason: e.to_string() })?;
        let model = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), terms = model.vocabulary.len(), "weighting model loaded");
        Ok(model)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// IDF weight of `term`, if it is in the vocabulary.
    pub fn weight(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&dim| self.idf[dim])
    }
}

impl WeightingModel for TfIdfModel {
    fn dim(&self) -> usize {
        self.idf.len()
    }

    fn project(&self, text: &str) -> SparseVector {
        let normalized = normalize(text);
        let mut tf: HashMap<usize, f64> = HashMap::new();
        for token in normalized.split_whitespace().filter(|t| t.chars().count() >= MIN_TOKEN_CHARS) {
            if let Some(&dim) = self.vocabulary.get(token) {
                *tf.entry(dim).or_insert(0.0) += 1.0;
            }
        }
        let entries = tf.into_iter().map(|(dim, count)| (dim, count * self.idf[dim])).collect();
        SparseVector::from_entries(entries).l2_normalized()
    }
}
