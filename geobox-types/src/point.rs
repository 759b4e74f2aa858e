use crate::bbox::LatLngBounds;
use geo::Point;
use serde::{Deserialize, Serialize};

/// A geographic point expressed as latitude and longitude in degrees.
///
/// Field order follows the usual "lat, lng" convention, which is the reverse
/// of `geo::Point` (x = longitude, y = latitude). Use the `From` conversions
/// to cross between the two.
///
/// # Examples
///
/// ```
/// use geobox_types::LatLng;
/// use geo::Point;
///
/// let sf = LatLng::new(37.781, -122.4113);
/// let p: Point = sf.into();
/// assert_eq!(p.x(), -122.4113);
/// assert_eq!(p.y(), 37.781);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if the point lies inside `bounds`, edges included.
    ///
    /// A point sitting exactly on an edge shared by two rectangles is inside
    /// both of them.
    ///
    /// ```
    /// use geobox_types::{LatLng, LatLngBounds};
    ///
    /// let cell = LatLngBounds::new(LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0));
    /// assert!(LatLng::new(1.0, 0.5).within(&cell));
    /// assert!(!LatLng::new(1.5, 0.5).within(&cell));
    /// ```
    #[inline]
    pub fn within(&self, bounds: &LatLngBounds) -> bool {
        self.lat >= bounds.sw.lat
            && self.lng >= bounds.sw.lng
            && self.lat <= bounds.ne.lat
            && self.lng <= bounds.ne.lng
    }

    /// True when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<Point<f64>> for LatLng {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<LatLng> for Point<f64> {
    fn from(latlng: LatLng) -> Self {
        Point::new(latlng.lng, latlng.lat)
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}
