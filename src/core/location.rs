use crate::core::{
    constants::{DEFAULT_CITY_CENTER, PLACEHOLDER_SPREAD},
    geo::LatLng,
};
use serde::{Deserialize, Serialize};
use std::hash::Hasher;

/// Where the map is "centred": supplied by the parent view, immutable afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    pub latitude: f64,
    pub longitude: f64,
    /// Displayed verbatim; only the overlay elides it
    pub address: String,
}

impl LocationInput {
    pub fn new(latitude: f64, longitude: f64, address: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            address: address.into(),
        }
    }

    /// Builds the input for a property record that has no geocoded position.
    ///
    /// The address reads `"street, neighborhood, city"`. Coordinates sit within
    /// [`PLACEHOLDER_SPREAD`] degrees north-east of the default city centre, at
    /// an offset derived from `seed` (usually the property id) so the pin of a
    /// given property never moves between renders.
    pub fn from_property_parts(street: &str, neighborhood: &str, city: &str, seed: &str) -> Self {
        let mut hasher = fxhash::FxHasher64::default();
        hasher.write(seed.as_bytes());
        let hash = hasher.finish();

        let (base_lat, base_lng) = DEFAULT_CITY_CENTER;
        let lat_offset = unit_fraction(hash & 0xFFFF) * PLACEHOLDER_SPREAD;
        let lng_offset = unit_fraction((hash >> 16) & 0xFFFF) * PLACEHOLDER_SPREAD;

        let address = [street, neighborhood, city]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Self::new(base_lat + lat_offset, base_lng + lng_offset, address)
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// Maps 16 hash bits into `[0, 1)`
fn unit_fraction(bits: u64) -> f64 {
    bits as f64 / 65_536.0
}
