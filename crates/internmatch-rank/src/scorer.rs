use internmatch_index::CorpusIndex;

/// Cosine similarity between `query_text` and each listing in `subset`, in
/// subset order. Every score is in `[0, 1]`.
pub fn score_subset(index: &CorpusIndex, query_text: &str, subset: &[usize]) -> Vec<f64> {
    let query = index.project(query_text);
    if query.is_empty() {
        return vec![0.0; subset.len()];
    }
    let listings = index.listings();
    subset.iter().map(|&i| query.cosine(&listings[i].vector)).collect()
}
