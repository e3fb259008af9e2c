use tc_catalog::Catalogue;
use tc_core::GeoPoint;

use crate::router::{JourneyRouter, RouteItem};
use crate::settings::RouterSettings;

fn p(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon)
}

fn linear_three_stop_catalogue() -> Catalogue {
    let mut c = Catalogue::new();
    let a = c.add_stop("A", p(55.0, 37.0));
    let b = c.add_stop("B", p(55.01, 37.0));
    let cc = c.add_stop("C", p(55.02, 37.0));
    c.add_distance(a, b, 1000).unwrap();
    c.add_distance(b, cc, 1000).unwrap();
    c.add_bus("1", false, &["A", "B", "C"]).unwrap();
    c
}

#[test]
fn direct_edge_beats_two_hop_when_cheaper() {
    let catalog = linear_three_stop_catalogue();
    let settings = RouterSettings { bus_velocity_km_h: 600.0, bus_wait_time_min: 6 };
    let router = JourneyRouter::build(&catalog, settings);

    let answer = router.route(&catalog, "A", "C").unwrap();
    assert!((answer.total_time_min - 6.2).abs() < 1e-9);
    assert_eq!(answer.items.len(), 2);
    match &answer.items[0] {
        RouteItem::Wait { stop_name, time_min } => {
            assert_eq!(stop_name, "A");
            assert_eq!(*time_min, 6.0);
        }
        _ => panic!("expected Wait item first"),
    }
    match &answer.items[1] {
        RouteItem::Bus { bus_name, span_count, time_min } => {
            assert_eq!(bus_name, "1");
            assert_eq!(*span_count, 2);
            assert!((time_min - 0.2).abs() < 1e-9);
        }
        _ => panic!("expected Bus item second"),
    }
}

#[test]
fn wait_decomposition_law_holds() {
    let catalog = linear_three_stop_catalogue();
    let settings = RouterSettings { bus_velocity_km_h: 600.0, bus_wait_time_min: 6 };
    let router = JourneyRouter::build(&catalog, settings);

    let answer = router.route(&catalog, "A", "C").unwrap();
    let ride_count = answer.items.iter().filter(|i| matches!(i, RouteItem::Bus { .. })).count();
    let ride_total: f64 = answer
        .items
        .iter()
        .filter_map(|i| match i {
            RouteItem::Bus { time_min, .. } => Some(*time_min),
            _ => None,
        })
        .sum();
    let expected = ride_total + ride_count as f64 * settings.bus_wait_time_min as f64;
    assert!((answer.total_time_min - expected).abs() < 1e-9);
}

#[test]
fn self_route_is_free() {
    let catalog = linear_three_stop_catalogue();
    let settings = RouterSettings { bus_velocity_km_h: 600.0, bus_wait_time_min: 6 };
    let router = JourneyRouter::build(&catalog, settings);

    let answer = router.route(&catalog, "A", "A").unwrap();
    assert_eq!(answer.total_time_min, 0.0);
    assert!(answer.items.is_empty());
}

#[test]
fn unknown_stop_name_returns_none() {
    let catalog = linear_three_stop_catalogue();
    let settings = RouterSettings { bus_velocity_km_h: 600.0, bus_wait_time_min: 6 };
    let router = JourneyRouter::build(&catalog, settings);

    assert!(router.route(&catalog, "A", "Nowhere").is_none());
}

#[test]
fn unreachable_stop_returns_none() {
    let mut catalog = linear_three_stop_catalogue();
    catalog.add_stop("Island", p(10.0, 10.0));
    let settings = RouterSettings { bus_velocity_km_h: 600.0, bus_wait_time_min: 6 };
    let router = JourneyRouter::build(&catalog, settings);

    assert!(router.route(&catalog, "A", "Island").is_none());
}
