use internmatch_core::types::Listing;

/// Which branch of the location filter produced the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFilter {
    /// No preference given.
    All,
    /// At least one listing location contains the preference.
    Matched,
    /// A preference was given but nothing matched; every listing is kept.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationSubset {
    pub indices: Vec<usize>,
    pub outcome: LocationFilter,
}

/// Indices of listings whose normalized location contains `preference`.
/// An empty preference, or one that matches nothing, keeps the whole corpus.
pub fn filter_by_location(listings: &[Listing], preference: &str) -> LocationSubset {
    let all = || (0..listings.len()).collect::<Vec<_>>();
    if preference.is_empty() {
        return LocationSubset { indices: all(), outcome: LocationFilter::All };
    }
    let matched: Vec<usize> = listings
        .iter()
        .enumerate()
        .filter(|(_, l)| l.location.contains(preference))
        .map(|(i, _)| i)
        .collect();
    if matched.is_empty() {
        tracing::warn!(preference, "no listing matches location preference; ranking all listings");
        LocationSubset { indices: all(), outcome: LocationFilter::Fallback }
    } else {
        LocationSubset { indices: matched, outcome: LocationFilter::Matched }
    }
}
