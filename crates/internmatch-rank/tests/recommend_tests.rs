use std::path::PathBuf;
use std::sync::Arc;

use internmatch_core::error::Error;
use internmatch_core::traits::Recommend;
use internmatch_core::types::{CandidateQuery, RankedResult, RawListing, RecommendOptions};
use internmatch_index::{CorpusIndex, TfIdfModel};
use internmatch_rank::{RecommendRequest, RecommendService, Recommender};

fn fixture_recommender() -> Recommender {
    // crates/internmatch-rank -> crates -> repo root
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2).unwrap().to_path_buf();
    let index = CorpusIndex::open(&root.join("test_data/internship.csv"), &root.join("test_data/tfidf_model.json"))
        .expect("index");
    Recommender::new(Arc::new(index))
}

fn two_listing_recommender() -> Recommender {
    let model = TfIdfModel::from_json_str(
        r#"{"vocabulary": {"python": 0, "data": 1, "intern": 2, "java": 3, "backend": 4, "acme": 5, "beta": 6},
            "idf": [1.9, 1.9, 1.0, 1.9, 1.9, 1.9, 1.9]}"#,
    )
    .expect("model");
    let rows = vec![
        RawListing {
            id: None,
            title: Some("python data intern".into()),
            company: Some("Acme".into()),
            location: Some("delhi".into()),
            stipend: Some("10000".into()),
        },
        RawListing {
            id: None,
            title: Some("java backend intern".into()),
            company: Some("Beta".into()),
            location: Some("mumbai".into()),
            stipend: Some("unpaid".into()),
        },
    ];
    Recommender::new(Arc::new(CorpusIndex::build(rows, Box::new(model)).expect("index")))
}

fn opts(top_n: i64) -> RecommendOptions {
    RecommendOptions { top_n, ..RecommendOptions::default() }
}

#[test]
fn end_to_end_scenario() {
    let rec = two_listing_recommender();
    let query = CandidateQuery::new("python data").with_location("delhi");
    let results = rec.recommend(&query, &opts(2));

    assert_eq!(results[0].listing_id, 1);
    assert_eq!(results[0].company, "acme");
    assert!(results[0].reason.contains("python") || results[0].reason.contains("data"));
    for r in &results[1..] {
        assert!(results[0].score > r.score);
    }

    // Without a location the Beta listing is ranked too, strictly below Acme.
    let results = rec.recommend(&CandidateQuery::new("python data"), &opts(2));
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].listing_id, 1);
    assert_eq!(results[1].listing_id, 2);
    assert!(results[0].score > results[1].score);
    assert_eq!(results[1].reason, "Relevant based on title and company.");
}

#[test]
fn exact_location_match_scores_cosine_plus_both_boosts() {
    let rec = two_listing_recommender();
    let results = rec.recommend(&CandidateQuery::new("python data").with_location("Delhi"), &opts(5));
    assert_eq!(results.len(), 1, "only delhi listings survive the filter");
    let top = &results[0];
    let cosine = top.score - 0.1 - 0.05;
    assert!(cosine > 0.0 && cosine <= 1.0, "cosine part {cosine}");
}

#[test]
fn unmatched_location_ranks_whole_corpus() {
    let rec = fixture_recommender();
    let results = rec.recommend(&CandidateQuery::new("python").with_location("atlantis"), &opts(100));
    assert_eq!(results.len(), rec.index().len());
}

#[test]
fn location_filter_narrows_to_substring_matches() {
    let rec = fixture_recommender();
    let results = rec.recommend(&CandidateQuery::new("data").with_location("delhi"), &opts(100));
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.location.contains("delhi")));
    // "new delhi" passes the filter but does not get the exact-match boost.
    assert!(results.iter().any(|r| r.location == "new delhi"));
}

#[test]
fn scores_are_bounded_and_sorted() {
    let rec = fixture_recommender();
    let options = RecommendOptions { top_n: 100, location_boost: 0.1, stipend_boost: 0.05 };
    for (skills, loc) in [
        ("python data", Some("delhi")),
        ("java backend developer", None),
        ("", Some("mumbai")),
        ("design", Some("nowhere")),
        ("Data!! ENGINEERING, python", Some("Hyderabad")),
    ] {
        let mut q = CandidateQuery::new(skills);
        q.location_preference = loc.map(str::to_string);
        let results = rec.recommend(&q, &options);
        for r in &results {
            assert!(r.score >= 0.0 && r.score <= 1.0 + 0.1 + 0.05 + 1e-9, "{skills}: {}", r.score);
        }
        for w in results.windows(2) {
            assert!(w[0].score >= w[1].score);
        }
    }
}

#[test]
fn equal_scores_keep_corpus_order() {
    let rec = fixture_recommender();
    let options = RecommendOptions { top_n: 100, location_boost: 0.1, stipend_boost: 0.0 };
    let results = rec.recommend(&CandidateQuery::new("zzz unknown"), &options);
    let ids: Vec<u64> = results.iter().map(|r| r.listing_id).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<u64>>());
}

#[test]
fn top_n_zero_and_oversized() {
    let rec = fixture_recommender();
    assert!(rec.recommend(&CandidateQuery::new("python"), &opts(0)).is_empty());
    assert!(rec.recommend(&CandidateQuery::new("python"), &opts(-1)).is_empty());
    assert_eq!(rec.recommend(&CandidateQuery::new("python"), &opts(1_000)).len(), 12);
    assert_eq!(rec.recommend(&CandidateQuery::new("python"), &RecommendOptions::default()).len(), 5);
}

#[test]
fn empty_corpus_yields_empty_result() {
    let model = TfIdfModel::from_json_str(r#"{"vocabulary": {}, "idf": []}"#).expect("model");
    let rec = Recommender::new(Arc::new(CorpusIndex::build(Vec::new(), Box::new(model)).expect("index")));
    assert!(rec.recommend(&CandidateQuery::new("python").with_location("delhi"), &opts(5)).is_empty());
}

#[test]
fn identical_calls_are_identical() {
    let rec = fixture_recommender();
    let q = CandidateQuery::new("python backend developer").with_location("pune");
    assert_eq!(rec.recommend(&q, &opts(12)), rec.recommend(&q, &opts(12)));
}

#[test]
fn concurrent_calls_match_serial() {
    let rec = fixture_recommender();
    let queries = ["python data", "java backend", "graphic design", "android developer"];
    let serial: Vec<Vec<RankedResult>> =
        queries.iter().map(|q| rec.recommend(&CandidateQuery::new(*q), &opts(5))).collect();

    let parallel: Vec<Vec<RankedResult>> = std::thread::scope(|s| {
        let handles: Vec<_> = queries
            .iter()
            .map(|q| {
                let rec = rec.clone();
                s.spawn(move || rec.recommend(&CandidateQuery::new(*q), &opts(5)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().expect("thread")).collect()
    });
    assert_eq!(serial, parallel);
}

struct Exploding;

impl Recommend for Exploding {
    fn recommend(&self, _candidate: &CandidateQuery, _options: &RecommendOptions) -> Vec<RankedResult> {
        panic!("ranking blew up")
    }
}

#[test]
fn service_contains_internal_failures() {
    let service = RecommendService::new(Exploding, RecommendOptions::default());
    let request = RecommendRequest { skills: "python".into(), location_preference: None };
    let err = service.handle(request, None).unwrap_err();
    assert!(matches!(err, Error::Operation(_)));

    let healthy = RecommendService::new(fixture_recommender(), RecommendOptions::default());
    let request = RecommendRequest { skills: "python".into(), location_preference: None };
    assert_eq!(healthy.handle(request, Some(3)).expect("response").recommendations.len(), 3);
}

#[test]
fn service_json_round() -> anyhow::Result<()> {
    let service = RecommendService::new(two_listing_recommender(), RecommendOptions::default());
    let response = service.handle_json(r#"{"Skills": "python data", "LocationPreference": "delhi"}"#, Some(3))?;
    assert_eq!(response.recommendations.len(), 1);

    let json = serde_json::to_value(&response)?;
    let first = &json["recommendations"][0];
    assert_eq!(first["InternshipID"], 1);
    assert_eq!(first["Title"], "python data intern");
    assert_eq!(first["Stipend"], 10000.0);
    assert!(first["Score"].as_f64().is_some());
    assert!(first["Reason"].as_str().is_some_and(|r| r.starts_with("Matched skills:")));
    Ok(())
}

#[test]
fn service_rejects_missing_skills() {
    let service = RecommendService::new(two_listing_recommender(), RecommendOptions::default());
    let err = service.handle_json(r#"{"LocationPreference": "delhi"}"#, None).unwrap_err();
    assert!(matches!(err, Error::InvalidRequest(_)));
}
