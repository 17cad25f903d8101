use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HospitalType {
    Government,
    Private,
    Ayurvedic,
}

impl HospitalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HospitalType::Government => "government",
            HospitalType::Private => "private",
            HospitalType::Ayurvedic => "ayurvedic",
        }
    }
}

impl FromStr for HospitalType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "government" => Ok(HospitalType::Government),
            "private" => Ok(HospitalType::Private),
            "ayurvedic" => Ok(HospitalType::Ayurvedic),
            other => Err(AppError::Validation(format!(
                "unknown hospital type '{other}'"
            ))),
        }
    }
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// GeoJSON-style point. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "type", default = "point_kind")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

fn point_kind() -> String {
    "Point".to_string()
}

impl Location {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Location {
            kind: point_kind(),
            coordinates: vec![longitude, latitude],
        }
    }

    /// Returns the point only when exactly two finite coordinates are stored.
    pub fn point(&self) -> Option<GeoPoint> {
        match self.coordinates.as_slice() {
            [lng, lat] if lng.is_finite() && lat.is_finite() => Some(GeoPoint {
                latitude: *lat,
                longitude: *lng,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    pub day: String,
    pub open_time: String,
    pub close_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub hospital_type: HospitalType,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<Location>,
    pub is_24_hours: bool,
    pub working_hours: Vec<WorkingHours>,
    pub is_approved: bool,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hospital {
    pub fn point(&self) -> Option<GeoPoint> {
        self.location.as_ref().and_then(Location::point)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct HospitalRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub hospital_type: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub coordinates: Option<Vec<f64>>,
    pub is_24_hours: bool,
    pub working_hours: Json<Vec<WorkingHours>>,
    pub is_approved: bool,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<HospitalRow> for Hospital {
    type Error = AppError;

    fn try_from(row: HospitalRow) -> Result<Self, Self::Error> {
        let hospital_type = HospitalType::from_str(&row.hospital_type).map_err(|_| {
            anyhow!(
                "hospital {} has unknown type '{}'",
                row.id,
                row.hospital_type
            )
        })?;

        Ok(Hospital {
            id: row.id,
            owner_id: row.owner_id,
            name: row.name,
            hospital_type,
            address: row.address,
            city: row.city,
            phone: row.phone,
            email: row.email,
            location: row.coordinates.map(|coordinates| Location {
                kind: point_kind(),
                coordinates,
            }),
            is_24_hours: row.is_24_hours,
            working_hours: row.working_hours.0,
            is_approved: row.is_approved,
            images: row.images,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Registration payload. Approval is never accepted from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalInput {
    pub name: String,
    pub hospital_type: HospitalType,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<Location>,
    #[serde(default)]
    pub is_24_hours: bool,
    #[serde(default)]
    pub working_hours: Vec<WorkingHours>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl HospitalInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if let Some(location) = &self.location {
            let point = location.point().ok_or_else(|| {
                AppError::Validation(
                    "location.coordinates must be [longitude, latitude]".into(),
                )
            })?;
            if !(-180.0..=180.0).contains(&point.longitude) {
                return Err(AppError::Validation(format!(
                    "longitude {} is out of range",
                    point.longitude
                )));
            }
            if !(-90.0..=90.0).contains(&point.latitude) {
                return Err(AppError::Validation(format!(
                    "latitude {} is out of range",
                    point.latitude
                )));
            }
        }
        Ok(())
    }
}
