//! # geobox-types
//!
//! Plain value types shared by the geobox geocoding index.
//!
//! - **Point types**: `LatLng`
//! - **Bounds types**: `LatLngBounds`
//!
//! Both are serializable with Serde and convert to and from the `geo` crate's
//! primitives (x = longitude, y = latitude).
//!
//! ## Examples
//!
//! ```rust
//! use geobox_types::{LatLng, LatLngBounds};
//!
//! let sf = LatLng::new(37.781, -122.4113);
//! let bay = LatLngBounds::new(LatLng::new(37.0, -123.0), LatLng::new(38.5, -121.5));
//! assert!(sf.within(&bay));
//! ```

pub mod bbox;
pub mod point;

pub use bbox::LatLngBounds;
pub use point::LatLng;
