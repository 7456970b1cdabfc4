//! Additive score boosts and top-N selection.
use internmatch_core::types::{Listing, RecommendOptions};

/// A listing position in the corpus with its final score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub index: usize,
    pub score: f64,
}

/// Applies the location and stipend boosts to `base` (aligned with `subset`),
/// sorts by score descending and keeps the first `options.top_n`.
///
/// The location boost goes to listings whose location equals `preference`
/// exactly. The stipend boost is `stipend_boost * stipend / max_stipend` over
/// the subset. Equal scores keep their subset order.
pub fn boost_and_rank(
    listings: &[Listing],
    subset: &[usize],
    base: &[f64],
    preference: &str,
    options: &RecommendOptions,
) -> Vec<Scored> {
    let Some(limit) = usize::try_from(options.top_n).ok().filter(|&n| n > 0) else {
        return Vec::new();
    };

    let mut scored: Vec<Scored> = subset
        .iter()
        .zip(base)
        .map(|(&index, &score)| Scored { index, score })
        .collect();

    if !preference.is_empty() {
        for s in &mut scored {
            if listings[s.index].location == preference {
                s.score += options.location_boost;
            }
        }
    }

    let max_stipend = subset.iter().map(|&i| listings[i].stipend).fold(0.0_f64, f64::max);
    if options.stipend_boost > 0.0 && max_stipend > 0.0 {
        for s in &mut scored {
            s.score += options.stipend_boost * (listings[s.index].stipend / max_stipend);
        }
    }

    // `sort_by` is stable, so ties stay in corpus order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}
