//! Conversion between cartesian coordinates on (or near) the sphere and
//! latitude/longitude.

use crate::vector::Vec3;
use float_eq::float_eq;
use std::fmt;

/// Denormal-scale threshold below which a vector's length is treated as zero.
const EPSILON: f64 = 1.0e-99;

/// Epsilon used for `PartialEq`, in radians (~2e-7 arcsec).
const EPSILON_RAD: f64 = 1.0e-12;

/// A point on the sphere, as latitude/longitude.
///
/// Stored internally in radians; the `Display` impl prints degrees.
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    lat: f64,
    lon: f64,
}

impl LatLon {
    /// Initializes a coordinate from radians, without normalizing or
    /// validating the longitude range.
    #[must_use]
    pub const fn from_radians(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Initializes a coordinate from degrees.
    #[must_use]
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self::from_radians(lat.to_radians(), lon.to_radians())
    }

    /// Latitude, in radians.
    #[must_use]
    pub const fn lat_radians(self) -> f64 {
        self.lat
    }

    /// Longitude, in radians.
    #[must_use]
    pub const fn lon_radians(self) -> f64 {
        self.lon
    }

    /// Latitude, in degrees.
    #[must_use]
    pub fn lat_degrees(self) -> f64 {
        self.lat.to_degrees()
    }

    /// Longitude, in degrees.
    #[must_use]
    pub fn lon_degrees(self) -> f64 {
        self.lon.to_degrees()
    }

    /// Longitude, in degrees, folded into `[-180, 180]`.
    ///
    /// [`Self::lon_degrees`] already returns a value in this range for any
    /// longitude produced by [`Self::from_xyz`]; this exists for callers
    /// building a [`LatLon`] from externally supplied degrees that may fall
    /// outside it (e.g. a `[0, 360)` convention).
    #[must_use]
    pub fn rearranged_lon_degrees(self) -> f64 {
        let lon = self.lon_degrees();
        if lon < -180.0 {
            lon + 360.0
        } else if lon > 180.0 {
            lon - 360.0
        } else {
            lon
        }
    }

    /// Decodes a cartesian vector into latitude/longitude.
    ///
    /// Degenerate (near-zero-length) vectors map to `(0, 0)`. Vectors
    /// parallel to the polar axis map to `(±π/2, 0)` rather than leaving
    /// longitude undefined.
    #[must_use]
    pub fn from_xyz(v: Vec3) -> Self {
        let length = v.norm();
        if length < EPSILON {
            return Self::from_radians(0.0, 0.0);
        }

        let sin_lat = v.z / length;
        if sin_lat >= 1.0 {
            return Self::from_radians(std::f64::consts::FRAC_PI_2, 0.0);
        }
        if sin_lat <= -1.0 {
            return Self::from_radians(-std::f64::consts::FRAC_PI_2, 0.0);
        }
        let lat = sin_lat.asin();

        let length_h = v.x.hypot(v.y);
        if length_h < EPSILON {
            return Self::from_radians(lat, 0.0);
        }

        let mut lon = (v.x / length_h).clamp(-1.0, 1.0).acos();
        if v.y < 0.0 {
            lon = -lon;
        }

        Self::from_radians(lat, lon)
    }

    /// Encodes this coordinate as a unit-sphere cartesian vector.
    ///
    /// Callers scale the result by a radius when a scaled cartesian
    /// representation is needed.
    #[must_use]
    pub fn to_xyz(self) -> Vec3 {
        let r = self.lat.cos();

        Vec3::new(r * self.lon.cos(), r * self.lon.sin(), self.lat.sin())
    }
}

impl PartialEq for LatLon {
    fn eq(&self, other: &Self) -> bool {
        float_eq!(self.lat, other.lat, abs <= EPSILON_RAD)
            && float_eq!(self.lon, other.lon, abs <= EPSILON_RAD)
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.10}, {:.10})", self.lat_degrees(), self.lon_degrees())
    }
}

impl fmt::Debug for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatLon")
            .field("lat_deg", &self.lat_degrees())
            .field("lon_deg", &self.lon_degrees())
            .finish()
    }
}

#[cfg(feature = "geo")]
impl From<LatLon> for geo_types::Coord {
    fn from(value: LatLon) -> Self {
        Self {
            x: value.lon_degrees(),
            y: value.lat_degrees(),
        }
    }
}

#[cfg(test)]
#[path = "./coord_tests.rs"]
mod tests;
