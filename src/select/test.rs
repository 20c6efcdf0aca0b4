use geo::{point, Point};

use crate::select::{select_closest, Facility, Selection};
use crate::spatial::SpatialReference;

const PLANAR: SpatialReference = SpatialReference::WebMercator;

fn home() -> Point {
    point! { x: 0.0, y: 0.0 }
}

/// Facilities at planar distances [3, 1, 4, 1, 5] from the origin, in that
/// input order. The two distance-1 entries are geometrically distinct so
/// order is observable.
fn fixture() -> Vec<Facility> {
    vec![
        Facility::from(point! { x: 3.0, y: 0.0 }),
        Facility::from(point! { x: 1.0, y: 0.0 }),
        Facility::from(point! { x: 0.0, y: 4.0 }),
        Facility::from(point! { x: 0.0, y: 1.0 }),
        Facility::from(point! { x: 5.0, y: 0.0 }),
    ]
}

#[test]
fn returns_n_closest_ascending() {
    let Selection::Closest(results) = select_closest(&fixture(), home(), 3, PLANAR) else {
        panic!("Expected a result set");
    };

    assert_eq!(results.len(), 3);
    assert_eq!(results.distances().collect::<Vec<_>>(), vec![1.0, 1.0, 3.0]);
}

#[test]
fn ties_keep_source_order() {
    let Selection::Closest(results) = select_closest(&fixture(), home(), 3, PLANAR) else {
        panic!("Expected a result set");
    };

    let geometries = results.iter().map(|r| r.geometry).collect::<Vec<_>>();

    // Input positions 1 and 3 share distance 1.0; position 1 must come first.
    assert_eq!(
        geometries,
        vec![
            point! { x: 1.0, y: 0.0 },
            point! { x: 0.0, y: 1.0 },
            point! { x: 3.0, y: 0.0 },
        ]
    );
}

#[test]
fn returned_distances_are_input_distances() {
    let facilities = fixture();
    let Selection::Closest(results) = select_closest(&facilities, home(), 5, PLANAR) else {
        panic!("Expected a result set");
    };

    for distance in results.distances() {
        assert!(facilities
            .iter()
            .any(|f| PLANAR.distance(home(), f.geometry) == distance));
    }
}

#[test]
fn oversized_request_is_not_available() {
    let selection = select_closest(&fixture(), home(), 6, PLANAR);

    assert_eq!(
        selection,
        Selection::NotAvailable {
            requested: 6,
            available: 5
        }
    );
}

#[test]
fn empty_collection_is_not_available() {
    let selection = select_closest(&[], home(), 1, PLANAR);

    assert_eq!(
        selection,
        Selection::NotAvailable {
            requested: 1,
            available: 0
        }
    );
}

#[test]
fn zero_request_is_empty_not_missing() {
    let Selection::Closest(results) = select_closest(&fixture(), home(), 0, PLANAR) else {
        panic!("A request for zero facilities is always satisfiable");
    };

    assert!(results.is_empty());

    // Holds for an empty collection too.
    assert!(matches!(
        select_closest(&[], home(), 0, PLANAR),
        Selection::Closest(results) if results.is_empty()
    ));
}

#[test]
fn ranking_is_idempotent() {
    let facilities = fixture();

    let first = select_closest(&facilities, home(), 4, PLANAR);
    let second = select_closest(&facilities, home(), 4, PLANAR);

    assert_eq!(first, second);
}

#[test]
fn geodesic_reference_ranks_by_haversine() {
    let facilities = vec![
        Facility::from(point! { x: 10.0, y: 0.0 }),
        Facility::from(point! { x: 1.0, y: 0.0 }),
    ];

    let Selection::Closest(results) =
        select_closest(&facilities, home(), 2, SpatialReference::Wgs84)
    else {
        panic!("Expected a result set");
    };

    let geometries = results.iter().map(|r| r.geometry).collect::<Vec<_>>();
    assert_eq!(
        geometries,
        vec![point! { x: 1.0, y: 0.0 }, point! { x: 10.0, y: 0.0 }]
    );
}
