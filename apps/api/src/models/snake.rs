use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;

/// The nine provinces a snake can be native to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Province {
    Western,
    Central,
    Southern,
    Northern,
    Eastern,
    #[serde(rename = "North Western")]
    NorthWestern,
    #[serde(rename = "North Central")]
    NorthCentral,
    Uva,
    Sabaragamuwa,
}

impl Province {
    pub const ALL: [Province; 9] = [
        Province::Western,
        Province::Central,
        Province::Southern,
        Province::Northern,
        Province::Eastern,
        Province::NorthWestern,
        Province::NorthCentral,
        Province::Uva,
        Province::Sabaragamuwa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Province::Western => "Western",
            Province::Central => "Central",
            Province::Southern => "Southern",
            Province::Northern => "Northern",
            Province::Eastern => "Eastern",
            Province::NorthWestern => "North Western",
            Province::NorthCentral => "North Central",
            Province::Uva => "Uva",
            Province::Sabaragamuwa => "Sabaragamuwa",
        }
    }

    pub fn from_name(name: &str) -> Option<Province> {
        Province::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

/// Snake record as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snake {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    /// Free text, e.g. "4 meter". Never parsed as a number.
    pub length: Option<String>,
    pub head_shape: Option<String>,
    pub pattern: Option<String>,
    pub behavior: Option<String>,
    pub venom_type: Option<String>,
    pub symptoms: Vec<String>,
    pub pain_level: Option<i32>,
    pub pain_type: Option<String>,
    pub time_to_symptoms: Option<String>,
    pub provinces: Vec<Province>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct SnakeRow {
    pub id: Uuid,
    pub name: String,
    pub image: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub length: Option<String>,
    pub head_shape: Option<String>,
    pub pattern: Option<String>,
    pub behavior: Option<String>,
    pub venom_type: Option<String>,
    pub symptoms: Vec<String>,
    pub pain_level: Option<i32>,
    pub pain_type: Option<String>,
    pub time_to_symptoms: Option<String>,
    pub provinces: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<SnakeRow> for Snake {
    type Error = AppError;

    fn try_from(row: SnakeRow) -> Result<Self, Self::Error> {
        let provinces = row
            .provinces
            .iter()
            .map(|p| {
                Province::from_name(p)
                    .ok_or_else(|| anyhow!("snake {} has unknown province '{p}'", row.id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Snake {
            id: row.id,
            name: row.name,
            image: row.image,
            color: row.color,
            size: row.size,
            length: row.length,
            head_shape: row.head_shape,
            pattern: row.pattern,
            behavior: row.behavior,
            venom_type: row.venom_type,
            symptoms: row.symptoms,
            pain_level: row.pain_level,
            pain_type: row.pain_type,
            time_to_symptoms: row.time_to_symptoms,
            provinces,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Create / full-replace payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakeInput {
    pub name: String,
    pub image: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub length: Option<String>,
    pub head_shape: Option<String>,
    pub pattern: Option<String>,
    pub behavior: Option<String>,
    pub venom_type: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub pain_level: Option<i32>,
    pub pain_type: Option<String>,
    pub time_to_symptoms: Option<String>,
    #[serde(default)]
    pub provinces: Vec<Province>,
}

impl SnakeInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if let Some(level) = self.pain_level {
            if !(1..=10).contains(&level) {
                return Err(AppError::Validation(format!(
                    "painLevel must be between 1 and 10, got {level}"
                )));
            }
        }
        if self.provinces.is_empty() {
            return Err(AppError::Validation(
                "at least one province is required".into(),
            ));
        }
        Ok(())
    }
}

/// Partial update payload. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnakePatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub length: Option<String>,
    pub head_shape: Option<String>,
    pub pattern: Option<String>,
    pub behavior: Option<String>,
    pub venom_type: Option<String>,
    pub symptoms: Option<Vec<String>>,
    pub pain_level: Option<i32>,
    pub pain_type: Option<String>,
    pub time_to_symptoms: Option<String>,
    pub provinces: Option<Vec<Province>>,
}

impl SnakePatch {
    /// Checks only the supplied fields; stored values already passed validation.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::Validation("name must not be blank".into()));
        }
        if let Some(level) = self.pain_level {
            if !(1..=10).contains(&level) {
                return Err(AppError::Validation(format!(
                    "painLevel must be between 1 and 10, got {level}"
                )));
            }
        }
        if self.provinces.as_ref().is_some_and(|p| p.is_empty()) {
            return Err(AppError::Validation(
                "at least one province is required".into(),
            ));
        }
        Ok(())
    }

    /// Merges the patch onto an existing record, producing a full payload.
    pub fn merge_onto(self, current: &Snake) -> SnakeInput {
        SnakeInput {
            name: self.name.unwrap_or_else(|| current.name.clone()),
            image: self.image.or_else(|| current.image.clone()),
            color: self.color.or_else(|| current.color.clone()),
            size: self.size.or_else(|| current.size.clone()),
            length: self.length.or_else(|| current.length.clone()),
            head_shape: self.head_shape.or_else(|| current.head_shape.clone()),
            pattern: self.pattern.or_else(|| current.pattern.clone()),
            behavior: self.behavior.or_else(|| current.behavior.clone()),
            venom_type: self.venom_type.or_else(|| current.venom_type.clone()),
            symptoms: self.symptoms.unwrap_or_else(|| current.symptoms.clone()),
            pain_level: self.pain_level.or(current.pain_level),
            pain_type: self.pain_type.or_else(|| current.pain_type.clone()),
            time_to_symptoms: self
                .time_to_symptoms
                .or_else(|| current.time_to_symptoms.clone()),
            provinces: self.provinces.unwrap_or_else(|| current.provinces.clone()),
        }
    }
}
