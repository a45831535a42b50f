use std::collections::HashSet;

use crate::core::{
    filters::within_radius,
    ranking::rank,
    response::build_reply,
    similarity::partial_similarity,
};
use crate::models::{Coordinates, MatchTier, ServiceQuery, ServiceRecord, TieredMatches};

/// Minimum partial-similarity score (0-100) for a field to count as a match
pub const MATCH_THRESHOLD: u32 = 85;

/// Result of one lookup
#[derive(Debug)]
pub struct LookupResult {
    pub reply: String,
    pub matched: usize,
    pub total_candidates: usize,
}

/// Scan the record table for fuzzy matches on the category keyword and
/// classify each hit into a tier.
///
/// The name field feeds the primary tier; quote, about-me, services, search
/// description and member keywords feed the secondary tier, scanned in that
/// fixed order. Each tier keeps discovery order and deduplicates through a
/// membership set; an index already in the primary tier never reappears in
/// the secondary one.
pub fn match_records(category: &str, records: &[ServiceRecord]) -> TieredMatches {
    let category = category.trim();
    if category.is_empty() {
        return TieredMatches::default();
    }

    let mut primary = Vec::new();
    let mut primary_seen: HashSet<usize> = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        if field_qualifies(record.name.as_deref(), category) && primary_seen.insert(index) {
            primary.push(index);
        }
    }

    let secondary_fields: [fn(&ServiceRecord) -> Option<&str>; 5] = [
        |r| r.quote.as_deref(),
        |r| r.about_me.as_deref(),
        |r| r.services.as_deref(),
        |r| r.search_description.as_deref(),
        |r| r.custom_member_keywords.as_deref(),
    ];

    let mut secondary = Vec::new();
    let mut secondary_seen: HashSet<usize> = HashSet::new();

    for field in secondary_fields {
        for (index, record) in records.iter().enumerate() {
            if primary_seen.contains(&index) || secondary_seen.contains(&index) {
                continue;
            }
            if field_qualifies(field(record), category) {
                secondary_seen.insert(index);
                secondary.push(index);
            }
        }
    }

    TieredMatches { primary, secondary }
}

fn field_qualifies(field: Option<&str>, category: &str) -> bool {
    field
        .map(|text| partial_similarity(category, text) >= MATCH_THRESHOLD)
        .unwrap_or(false)
}

/// Lookup orchestrator - runs the full matching pipeline
///
/// # Pipeline Stages
/// 1. Tiered fuzzy text matching over the record table
/// 2. Radius filtering with distance annotation
/// 3. Tier-then-distance ranking with the result cap
/// 4. Reply text rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceMatcher;

impl ServiceMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Run the whole pipeline for one resolved query over a request-scoped
    /// snapshot of the record table.
    ///
    /// Pure over its inputs: identical query, origin and snapshot produce
    /// identical reply text.
    pub fn find_services(
        &self,
        query: &ServiceQuery,
        origin: Coordinates,
        records: &[ServiceRecord],
    ) -> LookupResult {
        let matches = match_records(&query.category, records);

        let primary = within_radius(&matches.primary, MatchTier::Primary, origin, records);
        let secondary = within_radius(&matches.secondary, MatchTier::Secondary, origin, records);

        let ranked = rank(primary, secondary);

        let location_label = format!("{}, {}", query.city.trim(), query.country.trim());
        let reply = build_reply(&ranked, records, query.category.trim(), &location_label);

        LookupResult {
            reply,
            matched: ranked.len(),
            total_candidates: records.len(),
        }
    }
}
