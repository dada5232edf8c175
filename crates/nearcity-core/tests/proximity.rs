use nearcity_core::prelude::*;
use nearcity_core::{great_circle_km, MAX_K};
use std::sync::Arc;
use std::thread;

fn record(name: &str, lat: f64, lng: f64) -> LargeCityRecord {
    LargeCityRecord {
        display_name: name.to_string(),
        citystate_code: to_citystate(name),
        population: 100_000,
        coordinates: Coordinates::new(lat, lng).unwrap(),
    }
}

fn socal() -> ProximityIndex {
    ProximityIndex::from_records(vec![
        record("Irvine, CA", 33.6846, -117.8265),
        record("Los Angeles, CA", 34.0522, -118.2437),
        record("San Diego, CA", 32.7157, -117.1611),
    ])
    .unwrap()
}

fn irvine() -> Coordinates {
    Coordinates::new(33.6846, -117.8265).unwrap()
}

#[cfg(feature = "json")]
fn bundled() -> ProximityIndex {
    ProximityIndex::load_raw_json(ProximityIndex::default_dataset_path()).unwrap()
}

#[test]
fn irvine_scenario() {
    let index = socal();
    let hits = index.find_k_nearest(&irvine(), 2).unwrap();
    let names: Vec<_> = hits.iter().map(|h| h.name()).collect();
    assert_eq!(names, ["Los Angeles, CA", "San Diego, CA"]);
    assert!(hits[0].distance_km <= hits[1].distance_km);
}

#[test]
fn invalid_k_scenario() {
    let index = socal();
    assert!(matches!(
        index.find_k_nearest(&irvine(), MAX_K + 1),
        Err(NearCityError::InvalidArgument(_))
    ));
    assert!(matches!(
        index.find_k_nearest(&irvine(), 0),
        Err(NearCityError::InvalidArgument(_))
    ));
}

#[test]
fn empty_radius_scenario() {
    let index = socal();
    assert!(index.find_all_within_radius(&irvine(), 1.0).unwrap().is_empty());
}

#[test]
fn self_match_is_excluded_everywhere() {
    let index = socal();
    let q = irvine();
    let is_self = |h: &Nearby<'_>| h.code() == "irvine-ca";

    assert!(!index.find_k_nearest(&q, 20).unwrap().iter().any(is_self));
    assert!(!index
        .find_all_within_radius(&q, 20_000.0)
        .unwrap()
        .iter()
        .any(is_self));
    let (within, nearest) = index.find_k_nearest_and_within_radius(&q, 5, 20_000.0).unwrap();
    assert!(!within.iter().any(is_self));
    assert!(!nearest.iter().any(is_self));
    assert_eq!(within.len(), 2);
}

#[cfg(feature = "json")]
#[test]
fn bundled_dataset_loads() {
    let index = bundled();
    assert!(index.len() > 50);
    for record in index.records() {
        assert!(record.population > 0, "{record}");
        assert!(!record.citystate_code.is_empty(), "{record}");
    }
    assert_eq!(index.stats().cities, index.len());
}

#[cfg(feature = "json")]
#[test]
fn bundled_codes_are_unique() {
    let index = bundled();
    let mut codes: Vec<_> = index.records().iter().map(|r| r.code()).collect();
    codes.sort_unstable();
    let before = codes.len();
    codes.dedup();
    assert_eq!(before, codes.len());
}

#[cfg(feature = "json")]
#[test]
fn bundled_irvine_summary() {
    let index = bundled();
    let summary = index
        .summary_for_city("irvine-ca", DEFAULT_NEARBY_K, DEFAULT_NEARBY_RADIUS_KM)
        .unwrap();

    assert_eq!(summary.closest.len(), DEFAULT_NEARBY_K);
    assert_eq!(summary.closest[0].citystate_code, "santa+ana-ca");
    assert!(summary.closest_display().starts_with("Santa Ana, CA ("));
    assert!(summary.nearby.iter().any(|e| e.citystate_code == "los+angeles-ca"));
    assert!(summary.nearby.iter().any(|e| e.citystate_code == "san+diego-ca"));
    assert!(!summary.nearby.iter().any(|e| e.citystate_code == "irvine-ca"));
    assert!(summary
        .nearby
        .iter()
        .all(|e| e.distance_km <= DEFAULT_NEARBY_RADIUS_KM));
}

/// Canadian provinces and territories; everything else in the data is a US state.
#[cfg(feature = "json")]
const CANADIAN: &[&str] = &[
    "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT",
];

#[cfg(feature = "json")]
#[test]
fn bundled_records_meet_population_thresholds() {
    let index = bundled();
    assert!(index.len() >= 300, "only {} records", index.len());
    for record in index.records() {
        let (_, state) = record.display_name.rsplit_once(", ").unwrap();
        let floor = if CANADIAN.contains(&state) { 50_000 } else { 100_000 };
        assert!(record.population >= floor, "{record} is below {floor}");
    }
}

#[cfg(feature = "json")]
#[test]
fn bundled_irvine_nearby_includes_orange_county() {
    let index = bundled();
    let summary = index
        .summary_for_city("irvine-ca", DEFAULT_NEARBY_K, DEFAULT_NEARBY_RADIUS_KM)
        .unwrap();
    let codes: Vec<_> = summary
        .nearby
        .iter()
        .map(|e| e.citystate_code.as_str())
        .collect();
    for code in [
        "orange-ca",
        "fullerton-ca",
        "costa+mesa-ca",
        "garden+grove-ca",
        "anaheim-ca",
        "huntington+beach-ca",
    ] {
        assert!(codes.contains(&code), "{code} missing from {codes:?}");
    }
    assert!(summary.nearby_count() > 40);
}

#[cfg(feature = "json")]
#[test]
fn bundled_distances_match_geometry() {
    let index = bundled();
    let q = irvine();
    for hit in index.find_k_nearest(&q, MAX_K).unwrap() {
        let d = great_circle_km(&q, &hit.record.coordinates);
        assert_eq!(d, hit.distance_km);
    }
}

#[test]
fn unknown_city_is_reported() {
    let index = socal();
    let err = index.summary_for_city("atlantis-xx", 3, 250.0).unwrap_err();
    assert!(matches!(err, NearCityError::UnknownCity(ref c) if c == "atlantis-xx"));
    assert!(!err.is_load_error());
}

#[test]
fn index_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProximityIndex>();
    assert_send_sync::<LazyIndex>();

    let index = Arc::new(socal());
    let expected: Vec<_> = index
        .find_k_nearest(&irvine(), 2)
        .unwrap()
        .iter()
        .map(|h| h.code().to_string())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                index
                    .find_k_nearest(&irvine(), 2)
                    .unwrap()
                    .iter()
                    .map(|h| h.code().to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}
