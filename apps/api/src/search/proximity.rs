//! Nearest-hospital ranking by great-circle distance.
//!
//! Full scan: every hospital with a well-formed point is measured, sorted on
//! the raw distance, truncated, and only then rounded for output.

use serde::Serialize;

use crate::models::hospital::{GeoPoint, Hospital};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Maximum number of hospitals returned by a nearest search.
pub const NEAREST_HOSPITAL_LIMIT: usize = 5;

/// Haversine distance between two points in kilometers. Inputs are degrees.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    // rounding can push `a` past 1.0 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalWithDistance {
    #[serde(flatten)]
    pub hospital: Hospital,
    pub distance_in_km: f64,
}

/// Returns up to `limit` hospitals nearest to `origin`, closest first.
/// Hospitals without a two-element coordinate pair are skipped. Approval
/// state is not consulted.
pub fn rank_nearest(
    origin: GeoPoint,
    hospitals: Vec<Hospital>,
    limit: usize,
) -> Vec<HospitalWithDistance> {
    let mut measured: Vec<(f64, Hospital)> = hospitals
        .into_iter()
        .filter_map(|h| h.point().map(|p| (haversine_km(origin, p), h)))
        .collect();

    // stable: equal distances keep collection order
    measured.sort_by(|a, b| a.0.total_cmp(&b.0));
    measured.truncate(limit);

    measured
        .into_iter()
        .map(|(distance, hospital)| HospitalWithDistance {
            hospital,
            distance_in_km: round_2dp(distance),
        })
        .collect()
}
