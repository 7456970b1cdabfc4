use crate::types::{CandidateQuery, RankedResult, RecommendOptions, SparseVector};

/// A fitted term-weighting table. Read-only; text in, vector out.
pub trait WeightingModel: Send + Sync {
    fn dim(&self) -> usize;
    fn project(&self, text: &str) -> SparseVector;
}

pub trait Recommend: Send + Sync {
    fn recommend(&self, candidate: &CandidateQuery, options: &RecommendOptions) -> Vec<RankedResult>;
}
