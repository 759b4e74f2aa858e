use crate::point::LatLng;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned latitude/longitude rectangle given by its south-west and
/// north-east corners.
///
/// Unlike `geo::Rect`, the corners are stored exactly as given and are not
/// normalized, so an inverted rectangle stays inverted and can be rejected by
/// [`LatLngBounds::is_well_formed`].
///
/// # Examples
///
/// ```
/// use geobox_types::{LatLng, LatLngBounds};
///
/// let bounds = LatLngBounds::new(LatLng::new(40.7, -74.0), LatLng::new(40.8, -73.9));
/// assert!(bounds.is_well_formed());
/// assert!((bounds.lat_span() - 0.1).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub sw: LatLng,
    pub ne: LatLng,
}

impl LatLngBounds {
    pub const fn new(sw: LatLng, ne: LatLng) -> Self {
        Self { sw, ne }
    }

    /// A zero-area rectangle whose corners are both `point`.
    pub const fn from_point(point: LatLng) -> Self {
        Self {
            sw: point,
            ne: point,
        }
    }

    /// South-east corner (south latitude, east longitude).
    pub fn se(&self) -> LatLng {
        LatLng::new(self.sw.lat, self.ne.lng)
    }

    /// North-west corner (north latitude, west longitude).
    pub fn nw(&self) -> LatLng {
        LatLng::new(self.ne.lat, self.sw.lng)
    }

    /// Height in degrees of latitude.
    pub fn lat_span(&self) -> f64 {
        (self.ne.lat - self.sw.lat).abs()
    }

    /// Width in degrees of longitude.
    pub fn lng_span(&self) -> f64 {
        (self.ne.lng - self.sw.lng).abs()
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.sw.lat + self.ne.lat) / 2.0,
            (self.sw.lng + self.ne.lng) / 2.0,
        )
    }

    /// True when every corner coordinate is finite and the south-west corner
    /// is not north or east of the north-east corner.
    pub fn is_well_formed(&self) -> bool {
        self.sw.is_finite()
            && self.ne.is_finite()
            && self.sw.lat <= self.ne.lat
            && self.sw.lng <= self.ne.lng
    }

    pub fn contains(&self, point: &LatLng) -> bool {
        point.within(self)
    }

    /// Closed-interval intersection test: rectangles that only share an edge
    /// or a corner intersect.
    pub fn intersects(&self, other: &LatLngBounds) -> bool {
        self.sw.lat <= other.ne.lat
            && other.sw.lat <= self.ne.lat
            && self.sw.lng <= other.ne.lng
            && other.sw.lng <= self.ne.lng
    }

    /// Convert to a `geo::Rect` (x = longitude, y = latitude).
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            geo::coord! { x: self.sw.lng, y: self.sw.lat },
            geo::coord! { x: self.ne.lng, y: self.ne.lat },
        )
    }
}

impl From<Rect> for LatLngBounds {
    fn from(rect: Rect) -> Self {
        Self::new(
            LatLng::new(rect.min().y, rect.min().x),
            LatLng::new(rect.max().y, rect.max().x),
        )
    }
}

impl std::fmt::Display for LatLngBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[sw {} ne {}]", self.sw, self.ne)
    }
}
