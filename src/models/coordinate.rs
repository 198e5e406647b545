use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Finite and inside [-90, 90] x [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// (0, 0) is what an unset client location serializes to.
    pub fn is_unset(&self) -> bool {
        self.lat == 0.0 && self.lon == 0.0
    }

    pub fn lat_radians(&self) -> f64 {
        self.lat.to_radians()
    }

    pub fn lon_radians(&self) -> f64 {
        self.lon.to_radians()
    }
}
