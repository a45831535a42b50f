use crate::core::distance::great_circle_distance;
use crate::models::{Coordinates, LocatedCandidate, MatchTier, ServiceRecord};

/// Maximum allowed distance in miles between the query origin and a
/// candidate for it to qualify
pub const RADIUS_MILES: f64 = 30.0;

/// Annotate each candidate index with its distance from the origin and keep
/// only those within [`RADIUS_MILES`].
///
/// Input order is preserved, so discovery order survives as the tie-break
/// for equal distances later in ranking. Records without usable coordinates
/// are dropped rather than treated as errors.
pub fn within_radius(
    indices: &[usize],
    tier: MatchTier,
    origin: Coordinates,
    records: &[ServiceRecord],
) -> Vec<LocatedCandidate> {
    indices
        .iter()
        .filter_map(|&record_index| {
            let (lat, lon) = records.get(record_index)?.coordinates()?;

            let distance_miles =
                great_circle_distance(origin.latitude, origin.longitude, lat, lon);

            if distance_miles <= RADIUS_MILES {
                Some(LocatedCandidate {
                    record_index,
                    tier,
                    distance_miles,
                })
            } else {
                None
            }
        })
        .collect()
}
