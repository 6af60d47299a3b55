//! Observer location for local-mean-time corrections.

/// A named place with its standard time zone offset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeoLocation {
    /// Display name.
    pub name: &'static str,
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Standard (non-daylight) offset from UTC in seconds, east positive.
    pub standard_offset_seconds: i32,
}

/// The molad is announced in Jerusalem local mean time.
pub const MOLAD_LOCATION: GeoLocation = GeoLocation::new("Jerusalem", 31.778, 35.2354, 2 * 3600);

impl GeoLocation {
    /// A named place on standard offset `standard_offset_seconds`.
    pub const fn new(
        name: &'static str,
        latitude_deg: f64,
        longitude_deg: f64,
        standard_offset_seconds: i32,
    ) -> Self {
        Self {
            name,
            latitude_deg,
            longitude_deg,
            standard_offset_seconds,
        }
    }

    /// Milliseconds by which local mean time runs ahead of standard time.
    ///
    /// The sun crosses one degree of longitude every 4 minutes.
    pub fn local_mean_time_offset_ms(&self) -> i64 {
        (self.longitude_deg * 240_000.0).round() as i64 - i64::from(self.standard_offset_seconds) * 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jerusalem_runs_ahead_of_standard_time() {
        // 20 minutes 56.496 seconds.
        assert_eq!(MOLAD_LOCATION.local_mean_time_offset_ms(), 1_256_496);
    }

    #[test]
    fn greenwich_has_no_offset() {
        let greenwich = GeoLocation::new("Greenwich", 51.4779, 0.0, 0);
        assert_eq!(greenwich.local_mean_time_offset_ms(), 0);
    }

    #[test]
    fn west_of_meridian_runs_behind() {
        let new_york = GeoLocation::new("New York", 40.7128, -75.0, -5 * 3600);
        assert_eq!(new_york.local_mean_time_offset_ms(), 0);
        let lakewood = GeoLocation::new("Lakewood", 40.0821, -74.2097, -5 * 3600);
        assert_eq!(lakewood.local_mean_time_offset_ms(), 189_672);
    }
}
