use crate::models::LocatedCandidate;

/// Cap on the total number of candidates emitted per lookup
pub const MAX_RESULTS: usize = 10;

/// Merge the two distance-annotated tiers into one ranked sequence: all
/// primary candidates by ascending distance, then secondary candidates by
/// ascending distance until the total reaches [`MAX_RESULTS`].
///
/// The cap is only checked while appending secondary candidates, so a
/// primary set larger than the cap is emitted whole. Sorting is stable;
/// candidates at equal distance keep their discovery order.
pub fn rank(
    mut primary: Vec<LocatedCandidate>,
    mut secondary: Vec<LocatedCandidate>,
) -> Vec<LocatedCandidate> {
    let by_distance = |a: &LocatedCandidate, b: &LocatedCandidate| {
        a.distance_miles
            .partial_cmp(&b.distance_miles)
            .unwrap_or(std::cmp::Ordering::Equal)
    };

    primary.sort_by(by_distance);
    secondary.sort_by(by_distance);

    let mut ranked = primary;
    for candidate in secondary {
        if ranked.len() >= MAX_RESULTS {
            break;
        }
        ranked.push(candidate);
    }

    ranked
}
