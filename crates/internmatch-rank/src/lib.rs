//! internmatch-rank
//!
//! Query-time half of the recommender: location filtering, cosine scoring,
//! boosting, and match reasons, composed by [`Recommender`]. [`service`] is
//! the request boundary callers talk to.
pub mod boost;
pub mod engine;
pub mod location;
pub mod reason;
pub mod scorer;
pub mod service;

pub use engine::Recommender;
pub use service::{RecommendRequest, RecommendResponse, RecommendService, Recommendation};
