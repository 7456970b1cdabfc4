//! Request boundary: fixed-shape wire records and failure isolation.
//!
//! Field names on the wire are `Skills`, `LocationPreference`, `InternshipID`,
//! `Title`, `Company`, `Location`, `Stipend`, `Score` and `Reason`.
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use internmatch_core::error::{Error, Result};
use internmatch_core::traits::Recommend;
use internmatch_core::types::{CandidateQuery, ListingId, RankedResult, RecommendOptions};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    #[serde(rename = "Skills")]
    pub skills: String,
    #[serde(rename = "LocationPreference", default)]
    pub location_preference: Option<String>,
}

impl From<RecommendRequest> for CandidateQuery {
    fn from(r: RecommendRequest) -> Self {
        Self { skills: r.skills, location_preference: r.location_preference }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recommendation {
    #[serde(rename = "InternshipID")]
    pub internship_id: ListingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub stipend: f64,
    pub score: f64,
    pub reason: String,
}

impl From<RankedResult> for Recommendation {
    fn from(r: RankedResult) -> Self {
        Self {
            internship_id: r.listing_id,
            title: r.title,
            company: r.company,
            location: r.location,
            stipend: r.stipend,
            score: r.score,
            reason: r.reason,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
}

pub struct RecommendService<R: Recommend> {
    recommender: R,
    defaults: RecommendOptions,
}

impl<R: Recommend> RecommendService<R> {
    pub fn new(recommender: R, defaults: RecommendOptions) -> Self {
        Self { recommender, defaults }
    }

    pub fn defaults(&self) -> &RecommendOptions {
        &self.defaults
    }

    /// Runs one recommendation. `top_n` overrides the configured default.
    ///
    /// A panic inside ranking is contained here and reported as
    /// `Error::Operation`; the shared index is read-only, so later calls are
    /// unaffected.
    pub fn handle(&self, request: RecommendRequest, top_n: Option<i64>) -> Result<RecommendResponse> {
        let options = RecommendOptions { top_n: top_n.unwrap_or(self.defaults.top_n), ..self.defaults };
        let candidate = CandidateQuery::from(request);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.recommender.recommend(&candidate, &options)));
        match outcome {
            Ok(results) => Ok(RecommendResponse { recommendations: results.into_iter().map(Recommendation::from).collect() }),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "panic payload not string".into());
                tracing::error!(panic_message = %message, "recommendation failed");
                Err(Error::Operation("recommendation failed".into()))
            }
        }
    }

    /// Parses a JSON request body, then [`handle`](Self::handle)s it.
    pub fn handle_json(&self, body: &str, top_n: Option<i64>) -> Result<RecommendResponse> {
        let request: RecommendRequest =
            serde_json::from_str(body).map_err(|e| Error::InvalidRequest(e.to_string()))?;
        self.handle(request, top_n)
    }
}
