// Integration tests for Helpline Algo - full pipeline scenarios

use helpline_algo::core::{
    filters::{within_radius, RADIUS_MILES},
    matcher::match_records,
    ranking::rank,
    ServiceMatcher,
};
use helpline_algo::models::{Coordinates, MatchTier, ServiceQuery, ServiceRecord};

fn record_with(
    name: Option<&str>,
    services: Option<&str>,
    keywords: Option<&str>,
    lat: f64,
    lon: f64,
) -> ServiceRecord {
    ServiceRecord {
        name: name.map(|s| s.to_string()),
        quote: None,
        about_me: None,
        services: services.map(|s| s.to_string()),
        search_description: None,
        custom_member_keywords: keywords.map(|s| s.to_string()),
        phone_number: Some("555-0100".to_string()),
        full_filename: Some("https://example.org/p/1".to_string()),
        latitude: Some(lat),
        longitude: Some(lon),
        country_code: "us".to_string(),
    }
}

fn query(category: &str) -> ServiceQuery {
    ServiceQuery {
        country: "USA".to_string(),
        city: "New York".to_string(),
        category: category.to_string(),
    }
}

#[test]
fn test_scenario_nearby_name_match_is_primary() {
    // A name hit within the radius comes back as a primary match
    let records = vec![record_with(Some("Acme Shul"), None, None, 40.0, -73.0)];
    let origin = Coordinates {
        latitude: 40.01,
        longitude: -73.01,
    };

    let matches = match_records("shul", &records);
    assert_eq!(matches.primary, vec![0]);

    let located = within_radius(&matches.primary, MatchTier::Primary, origin, &records);
    assert_eq!(located.len(), 1);
    assert!(located[0].distance_miles < RADIUS_MILES);

    let result = ServiceMatcher::new().find_services(&query("shul"), origin, &records);
    assert_eq!(result.matched, 1);
    assert!(result.reply.contains("Acme Shul"));
}

#[test]
fn test_scenario_text_match_outside_radius_excluded() {
    // The same record fails the lookup when the origin is an ocean away
    let records = vec![record_with(Some("Acme Shul"), None, None, 40.0, -73.0)];
    let origin = Coordinates {
        latitude: 0.0,
        longitude: 0.0,
    };

    let result = ServiceMatcher::new().find_services(&query("shul"), origin, &records);

    assert_eq!(result.matched, 0);
    assert!(result.reply.contains("shul"));
    assert!(result.reply.contains("New York, USA"));
}

#[test]
fn test_scenario_no_text_match_yields_apology() {
    let records = vec![
        record_with(Some("Acme Shul"), None, None, 40.0, -73.0),
        record_with(Some("Beth Midrash"), Some("torah classes"), None, 40.0, -73.0),
    ];
    let origin = Coordinates {
        latitude: 40.0,
        longitude: -73.0,
    };

    let result = ServiceMatcher::new().find_services(&query("xyz-no-match"), origin, &records);

    assert_eq!(result.matched, 0);
    assert!(result.reply.contains("xyz-no-match"));
    assert!(result.reply.contains("New York, USA"));
}

#[test]
fn test_scenario_twelve_secondary_matches_capped_at_ten() {
    // Twelve keyword hits in range, no name hits: exactly the ten closest
    // come back, closest first.
    let origin = Coordinates {
        latitude: 40.0,
        longitude: -73.0,
    };
    let records: Vec<ServiceRecord> = (0..12)
        .map(|i| {
            record_with(
                Some(&format!("Provider {}", i)),
                Some("kosher catering"),
                None,
                40.0 + (i as f64) * 0.01,
                -73.0,
            )
        })
        .collect();

    let matches = match_records("kosher", &records);
    assert!(matches.primary.is_empty());
    assert_eq!(matches.secondary.len(), 12);

    let located = within_radius(&matches.secondary, MatchTier::Secondary, origin, &records);
    assert_eq!(located.len(), 12, "all twelve are inside the radius");

    let ranked = rank(vec![], located);
    assert_eq!(ranked.len(), 10);

    // The ten closest records are indices 0..9, ascending
    let indices: Vec<usize> = ranked.iter().map(|c| c.record_index).collect();
    assert_eq!(indices, (0..10).collect::<Vec<usize>>());

    let distances: Vec<f64> = ranked.iter().map(|c| c.distance_miles).collect();
    let mut sorted = distances.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(distances, sorted);

    let result = ServiceMatcher::new().find_services(&query("kosher"), origin, &records);
    assert_eq!(result.matched, 10);
}

#[test]
fn test_scenario_candidate_at_origin_passes() {
    // Identical origin and candidate coordinates: distance is exactly 0 and
    // the candidate qualifies (the acos argument is clamped, never NaN).
    let records = vec![record_with(Some("Acme Shul"), None, None, 40.0, -73.0)];
    let origin = Coordinates {
        latitude: 40.0,
        longitude: -73.0,
    };

    let matches = match_records("shul", &records);
    let located = within_radius(&matches.primary, MatchTier::Primary, origin, &records);

    assert_eq!(located.len(), 1);
    assert!(located[0].distance_miles.abs() < 1e-6);
}

#[test]
fn test_primary_entries_precede_secondary_entries() {
    let origin = Coordinates {
        latitude: 40.0,
        longitude: -73.0,
    };
    let records = vec![
        // Secondary hit, very close
        record_with(Some("Community Center"), Some("shul upstairs"), None, 40.001, -73.001),
        // Primary hit, further out
        record_with(Some("Acme Shul"), None, None, 40.1, -73.1),
    ];

    let matches = match_records("shul", &records);
    let primary = within_radius(&matches.primary, MatchTier::Primary, origin, &records);
    let secondary = within_radius(&matches.secondary, MatchTier::Secondary, origin, &records);
    let ranked = rank(primary, secondary);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].tier, MatchTier::Primary);
    assert_eq!(ranked[1].tier, MatchTier::Secondary);
    // The closer secondary hit did not overtake the primary one
    assert!(ranked[0].distance_miles > ranked[1].distance_miles);
}

#[test]
fn test_pipeline_is_idempotent() {
    let origin = Coordinates {
        latitude: 40.0,
        longitude: -73.0,
    };
    let records: Vec<ServiceRecord> = (0..20)
        .map(|i| {
            record_with(
                Some(&format!("Shul {}", i)),
                Some("daily minyan"),
                Some("shul, minyan"),
                40.0 + (i as f64) * 0.005,
                -73.0,
            )
        })
        .collect();

    let matcher = ServiceMatcher::new();
    let first = matcher.find_services(&query("shul"), origin, &records);
    let second = matcher.find_services(&query("shul"), origin, &records);

    assert_eq!(first.reply, second.reply);
    assert_eq!(first.matched, second.matched);
}

#[test]
fn test_empty_dataset_behaves_like_no_match() {
    let origin = Coordinates {
        latitude: 40.0,
        longitude: -73.0,
    };
    let records: Vec<ServiceRecord> = vec![];

    let result = ServiceMatcher::new().find_services(&query("shul"), origin, &records);

    assert_eq!(result.matched, 0);
    assert_eq!(result.total_candidates, 0);
    assert!(result.reply.contains("shul"));
}

#[test]
fn test_every_emitted_distance_within_radius() {
    let origin = Coordinates {
        latitude: 40.0,
        longitude: -73.0,
    };
    // Mix of near and far records, all matching on keywords
    let records: Vec<ServiceRecord> = (0..30)
        .map(|i| {
            record_with(
                Some(&format!("Provider {}", i)),
                None,
                Some("food bank"),
                40.0 + (i as f64) * 0.1,
                -73.0,
            )
        })
        .collect();

    let matches = match_records("food bank", &records);
    let located = within_radius(&matches.secondary, MatchTier::Secondary, origin, &records);

    assert!(!located.is_empty());
    assert!(located.iter().all(|c| c.distance_miles <= RADIUS_MILES));
}
