use chrono::TimeZone;
use skywatch::catalog::{find_star, StarRecord, BRIGHT_STARS};
use skywatch::models::{Moment, Observer, SiderealBasis};
use skywatch::services::{
    compute_best_window, compute_visibility_report, horizontal_position, project_sky_map,
};

fn taipei() -> Observer {
    Observer::new(25.03, 121.56)
}

fn taipei_moment(y: i32, mo: u32, d: u32, h: u32) -> Moment {
    chrono::FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(y, mo, d, h, 0, 0)
        .unwrap()
        .into()
}

#[test]
fn test_visibility_pipeline_on_real_catalog() {
    let moment = taipei_moment(2024, 7, 2, 0);
    let report = compute_visibility_report(BRIGHT_STARS, &taipei(), moment);

    assert_eq!(report.catalog_size, BRIGHT_STARS.len());
    assert!(!report.stars.is_empty());
    for pair in report.stars.windows(2) {
        assert!(pair[0].magnitude <= pair[1].magnitude);
    }
    for star in &report.stars {
        assert!(star.altitude_deg > 5.0);
        assert!(star.azimuth_deg >= 0.0 && star.azimuth_deg < 360.0);
    }
}

#[test]
fn test_visibility_deterministic_across_calls() {
    let moment = taipei_moment(2025, 1, 15, 22);
    let a = compute_visibility_report(BRIGHT_STARS, &taipei(), moment);
    let b = compute_visibility_report(BRIGHT_STARS, &taipei(), moment);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_empty_catalog_is_not_an_error() {
    let report = compute_visibility_report(&[], &taipei(), taipei_moment(2024, 7, 2, 0));
    assert!(report.stars.is_empty());
    assert_eq!(report.catalog_size, 0);

    // An empty report projects to an empty chart, also not an error.
    let chart = project_sky_map(&report);
    assert!(chart.markers.is_empty());
}

#[test]
fn test_projection_consumes_visibility_output() {
    let moment = taipei_moment(2024, 12, 15, 21);
    let report = compute_visibility_report(BRIGHT_STARS, &taipei(), moment);
    let chart = project_sky_map(&report);

    assert!(chart.markers.len() <= 10);
    assert_eq!(chart.markers.len(), report.stars.len().min(10));
    for (marker, star) in chart.markers.iter().zip(&report.stars) {
        assert_eq!(marker.name, star.name);
        assert!((marker.x.powi(2) + marker.y.powi(2)).sqrt() <= 1.0 + 1e-12);
        assert!(marker.size >= 2.0);
        assert_eq!(marker.color, star.brightness.color());
    }
}

#[test]
fn test_winter_sky_has_orion_from_taipei() {
    // Rigel and Betelgeuse dominate December evenings.
    let moment = taipei_moment(2024, 12, 31, 23);
    let report = compute_visibility_report(BRIGHT_STARS, &taipei(), moment);
    let names: Vec<&str> = report.stars.iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"Rigel"));
    assert!(names.contains(&"Betelgeuse"));
    assert!(names.contains(&"Sirius"));
}

#[test]
fn test_best_window_matches_visibility_transform() {
    // The window search and the visibility filter share one transform, so a
    // star reported near its transit altitude must have a window at least
    // that high.
    let vega = find_star("Vega").unwrap();
    let reference = taipei_moment(2024, 7, 1, 12);
    let window = compute_best_window(vega, &taipei(), reference).unwrap();

    let midnight = reference.at_civil_hour(24);
    let basis = SiderealBasis::at(midnight, taipei().longitude_deg);
    let at_midnight =
        horizontal_position(vega.ra_hours, vega.dec_deg, taipei().latitude_deg, basis.lst_deg);
    assert!(window.altitude_deg >= at_midnight.altitude_deg - 1e-9);
}

#[test]
fn test_best_window_absent_for_unreachable_star() {
    let southern = StarRecord {
        name: "octans-test",
        ra_hours: 21.0,
        dec_deg: -77.0,
        constellation: "Octans",
        magnitude: 3.7,
    };
    assert!(compute_best_window(&southern, &taipei(), taipei_moment(2024, 7, 1, 12)).is_none());
}

#[test]
fn test_scrubbing_changes_the_sky() {
    // Six hours of rotation move the visible set; the reports must differ.
    let now = taipei_moment(2024, 10, 1, 20);
    let later = now.with_hour_offset(6);
    let a = compute_visibility_report(BRIGHT_STARS, &taipei(), now);
    let b = compute_visibility_report(BRIGHT_STARS, &taipei(), later);
    let names_a: Vec<&str> = a.stars.iter().map(|s| s.name.as_str()).collect();
    let names_b: Vec<&str> = b.stars.iter().map(|s| s.name.as_str()).collect();
    assert_ne!(names_a, names_b);
}

#[test]
fn test_southern_observer_sees_southern_sky() {
    // Sanity check that the engine is not Taipei-specific: Acrux is
    // circumpolar-ish from Sydney and must appear at some hour.
    let sydney = Observer::new(-33.86, 151.21);
    let mut seen = false;
    for h in 0..24 {
        let report =
            compute_visibility_report(BRIGHT_STARS, &sydney, taipei_moment(2024, 5, 1, 0).with_hour_offset(h));
        if report.stars.iter().any(|s| s.name == "Acrux") {
            seen = true;
            break;
        }
    }
    assert!(seen, "Acrux should be visible from Sydney at some hour");
}
