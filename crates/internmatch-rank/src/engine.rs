use std::sync::Arc;

use internmatch_core::normalize::{normalize, normalize_opt};
use internmatch_core::traits::Recommend;
use internmatch_core::types::{CandidateQuery, RankedResult, RecommendOptions};
use internmatch_index::CorpusIndex;

use crate::boost::boost_and_rank;
use crate::location::filter_by_location;
use crate::reason::match_reason;
use crate::scorer::score_subset;

/// Ranks the shared corpus against candidate profiles. Cheap to clone; all
/// clones read the same index.
#[derive(Clone)]
pub struct Recommender {
    index: Arc<CorpusIndex>,
}

impl Recommender {
    pub fn new(index: Arc<CorpusIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn recommend(&self, candidate: &CandidateQuery, options: &RecommendOptions) -> Vec<RankedResult> {
        let skills = normalize(&candidate.skills);
        let preference = normalize_opt(candidate.location_preference.as_deref());
        let listings = self.index.listings();

        let subset = filter_by_location(listings, &preference);
        let base = score_subset(&self.index, &skills, &subset.indices);
        let ranked = boost_and_rank(listings, &subset.indices, &base, &preference, options);
        tracing::debug!(
            filter = ?subset.outcome,
            subset = subset.indices.len(),
            returned = ranked.len(),
            top_n = options.top_n,
            "recommendation computed"
        );

        ranked
            .into_iter()
            .map(|s| {
                let l = &listings[s.index];
                RankedResult {
                    listing_id: l.id,
                    title: l.title.clone(),
                    company: l.company.clone(),
                    location: l.location.clone(),
                    stipend: l.stipend,
                    score: s.score,
                    reason: match_reason(&skills, &l.title),
                }
            })
            .collect()
    }
}

impl Recommend for Recommender {
    fn recommend(&self, candidate: &CandidateQuery, options: &RecommendOptions) -> Vec<RankedResult> {
        Self::recommend(self, candidate, options)
    }
}
