//! Closest-N selection over a facility collection.
//!
//! The only logic this crate owns: annotate every facility with its distance
//! to the home point, stable-sort ascending, and keep the closest `n`.

use geo::Point;

use crate::spatial::SpatialReference;

#[cfg(test)]
mod test;

/// A single facility record, holding only its geometry.
///
/// Facilities are structurally distinct records even when geometrically
/// identical; no duplicate-identity constraint exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facility {
    pub geometry: Point,
}

impl From<Point> for Facility {
    fn from(geometry: Point) -> Self {
        Facility { geometry }
    }
}

/// A facility after ranking. The distance is present and final; the type
/// split from [`Facility`] means an unranked record can never be sorted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedFacility {
    pub geometry: Point,
    pub distance: f64,
}

/// The closest-`n` prefix of a ranked facility collection, ascending by
/// distance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet(Vec<RankedFacility>);

impl ResultSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedFacility> {
        self.0.iter()
    }

    pub fn distances(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|ranked| ranked.distance)
    }
}

impl IntoIterator for ResultSet {
    type Item = RankedFacility;
    type IntoIter = std::vec::IntoIter<RankedFacility>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a RankedFacility;
    type IntoIter = std::slice::Iter<'a, RankedFacility>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The outcome of a closest-N request.
///
/// `NotAvailable` is a distinguished outcome, not an error: a request for
/// more facilities than exist is answered with nothing rather than a
/// silently truncated result.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Closest(ResultSet),
    NotAvailable { requested: usize, available: usize },
}

/// Finds the `n` facilities closest to `home`.
///
/// Every facility is annotated with its scalar distance under `sref`, the
/// collection is stable-sorted ascending, and the first `n` entries are
/// returned with their distances retained.
///
/// ### Note
/// Ties keep their source order (the sort is stable), so identical input
/// yields identical output across runs. `n == 0` is a valid request and
/// returns an empty [`ResultSet`].
pub fn select_closest(
    facilities: &[Facility],
    home: Point,
    n: usize,
    sref: SpatialReference,
) -> Selection {
    if n > facilities.len() {
        return Selection::NotAvailable {
            requested: n,
            available: facilities.len(),
        };
    }

    let mut ranked = facilities
        .iter()
        .map(|facility| RankedFacility {
            geometry: facility.geometry,
            distance: sref.distance(home, facility.geometry),
        })
        .collect::<Vec<_>>();

    // sort_by is stable: equal distances retain their pre-sort order.
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked.truncate(n);

    Selection::Closest(ResultSet(ranked))
}
