//! Domain types shared by the index and ranking crates.

use serde::{Deserialize, Serialize};

pub type ListingId = u64;

/// One catalog row as it comes out of the loader, before preprocessing.
///
/// Header names follow the catalog CSV (`internship_title`, `company_name`,
/// `location`, `stipend`, optional `InternshipID`). Every field is optional;
/// missing text is treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(rename = "InternshipID", default)]
    pub id: Option<ListingId>,
    #[serde(rename = "internship_title", default)]
    pub title: Option<String>,
    #[serde(rename = "company_name", default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub stipend: Option<String>,
}

/// Sparse term-weighted vector. Entries are sorted by dimension and unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds a vector from unordered `(dimension, weight)` pairs. Repeated
    /// dimensions are summed and zero weights dropped.
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|&(dim, _)| dim);
        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (dim, weight) in entries {
            match merged.last_mut() {
                Some((last, acc)) if *last == dim => *acc += weight,
                _ => merged.push((dim, weight)),
            }
        }
        merged.retain(|&(_, w)| w != 0.0);
        Self { entries: merged }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scales the vector to unit length. A zero vector is left as is.
    #[must_use]
    pub fn l2_normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }

    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (da, wa) = self.entries[i];
            let (db, wb) = other.entries[j];
            match da.cmp(&db) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine similarity clamped to `[0, 1]`; zero when either side has zero norm.
    pub fn cosine(&self, other: &Self) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(0.0, 1.0)
    }
}

/// A preprocessed catalog entry. Text fields are normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub stipend: f64,
    pub combined_text: String,
    pub vector: SparseVector,
}

/// What the caller knows about the candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateQuery {
    pub skills: String,
    pub location_preference: Option<String>,
}

impl CandidateQuery {
    pub fn new(skills: impl Into<String>) -> Self {
        Self { skills: skills.into(), location_preference: None }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location_preference = Some(location.into());
        self
    }
}

/// Ranking knobs. `top_n <= 0` yields an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendOptions {
    pub top_n: i64,
    pub location_boost: f64,
    pub stipend_boost: f64,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self { top_n: 5, location_boost: 0.1, stipend_boost: 0.05 }
    }
}

/// One ranked match. `score` is cosine similarity plus boosts, so it lies in
/// `[0, 1 + location_boost + stipend_boost]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub listing_id: ListingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub stipend: f64,
    pub score: f64,
    pub reason: String,
}
