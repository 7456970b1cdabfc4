//! internmatch-index
//!
//! The pretrained term-weighting model and the immutable corpus index built
//! from the catalog. See `model` and `corpus`.
pub mod corpus;
pub mod model;

pub use corpus::CorpusIndex;
pub use model::TfIdfModel;
