//! Named spatial references and the scalar distance primitive.
//!
//! The crate owns no geometry math: distance computation delegates to the
//! metric implementations in [`geo`].

use geo::{Distance, Euclidean, Haversine, Point};
use serde::{Deserialize, Serialize};

pub mod error;

#[doc(inline)]
pub use error::SpatialError;

/// A recognised output spatial reference, resolved by name.
///
/// The reference decides which distance metric a scan uses: geographic
/// references measure geodesic metres, projected references measure in the
/// projection's native planar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpatialReference {
    /// Geographic lat/lng (EPSG:4326). Distances are haversine metres.
    Wgs84,
    /// Projected web-mercator (EPSG:3857). Distances are planar.
    WebMercator,
}

impl SpatialReference {
    /// Resolves a spatial reference from its well-known name or EPSG code.
    /// Unrecognised names are a configuration error and should abort the run.
    pub fn resolve(name: &str) -> Result<Self, SpatialError> {
        match name.trim() {
            "WGS 1984" | "WGS84" | "EPSG:4326" => Ok(SpatialReference::Wgs84),
            "WGS 1984 Web Mercator" | "Web Mercator" | "EPSG:3857" => {
                Ok(SpatialReference::WebMercator)
            }
            other => Err(SpatialError::UnknownReference(other.to_string())),
        }
    }

    /// Scalar distance between two points under this reference.
    pub fn distance(&self, a: Point, b: Point) -> f64 {
        match self {
            SpatialReference::Wgs84 => Haversine.distance(a, b),
            SpatialReference::WebMercator => Euclidean.distance(a, b),
        }
    }
}
