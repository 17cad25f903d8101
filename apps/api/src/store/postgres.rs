use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::hospital::{Hospital, HospitalInput, HospitalRow};
use crate::models::snake::{Snake, SnakeInput, SnakePatch, SnakeRow};
use crate::store::{HospitalStore, SnakeStore};

const SNAKE_COLUMNS: &str = "id, name, image, color, size, length, head_shape, pattern, \
     behavior, venom_type, symptoms, pain_level, pain_type, time_to_symptoms, provinces, \
     created_at, updated_at";

const HOSPITAL_COLUMNS: &str = "id, owner_id, name, hospital_type, address, city, phone, \
     email, coordinates, is_24_hours, working_hours, is_approved, images, created_at, updated_at";

/// PostgreSQL-backed store for snakes and hospitals.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn province_names(input: &SnakeInput) -> Vec<String> {
    input
        .provinces
        .iter()
        .map(|p| p.as_str().to_string())
        .collect()
}

fn coordinates(input: &HospitalInput) -> Option<Vec<f64>> {
    input.location.as_ref().map(|l| l.coordinates.clone())
}

#[async_trait]
impl SnakeStore for PgStore {
    async fn list_snakes(&self) -> Result<Vec<Snake>, AppError> {
        let rows: Vec<SnakeRow> = sqlx::query_as(&format!(
            "SELECT {SNAKE_COLUMNS} FROM snakes ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Snake::try_from).collect()
    }

    async fn get_snake(&self, id: Uuid) -> Result<Option<Snake>, AppError> {
        let row: Option<SnakeRow> =
            sqlx::query_as(&format!("SELECT {SNAKE_COLUMNS} FROM snakes WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        row.map(Snake::try_from).transpose()
    }

    async fn insert_snake(&self, input: &SnakeInput) -> Result<Snake, AppError> {
        let id = Uuid::new_v4();
        let row: SnakeRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO snakes
                (id, name, image, color, size, length, head_shape, pattern, behavior,
                 venom_type, symptoms, pain_level, pain_type, time_to_symptoms, provinces)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {SNAKE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.image)
        .bind(&input.color)
        .bind(&input.size)
        .bind(&input.length)
        .bind(&input.head_shape)
        .bind(&input.pattern)
        .bind(&input.behavior)
        .bind(&input.venom_type)
        .bind(&input.symptoms)
        .bind(input.pain_level)
        .bind(&input.pain_type)
        .bind(&input.time_to_symptoms)
        .bind(province_names(input))
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted snake {id} ({})", input.name);
        Snake::try_from(row)
    }

    async fn replace_snake(
        &self,
        id: Uuid,
        input: &SnakeInput,
    ) -> Result<Option<Snake>, AppError> {
        let row: Option<SnakeRow> = sqlx::query_as(&format!(
            r#"
            UPDATE snakes SET
                name = $2, image = $3, color = $4, size = $5, length = $6,
                head_shape = $7, pattern = $8, behavior = $9, venom_type = $10,
                symptoms = $11, pain_level = $12, pain_type = $13,
                time_to_symptoms = $14, provinces = $15, updated_at = now()
            WHERE id = $1
            RETURNING {SNAKE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(&input.image)
        .bind(&input.color)
        .bind(&input.size)
        .bind(&input.length)
        .bind(&input.head_shape)
        .bind(&input.pattern)
        .bind(&input.behavior)
        .bind(&input.venom_type)
        .bind(&input.symptoms)
        .bind(input.pain_level)
        .bind(&input.pain_type)
        .bind(&input.time_to_symptoms)
        .bind(province_names(input))
        .fetch_optional(&self.pool)
        .await?;

        row.map(Snake::try_from).transpose()
    }

    async fn patch_snake(&self, id: Uuid, patch: &SnakePatch) -> Result<Option<Snake>, AppError> {
        let provinces: Option<Vec<String>> = patch
            .provinces
            .as_ref()
            .map(|ps| ps.iter().map(|p| p.as_str().to_string()).collect());

        let row: Option<SnakeRow> = sqlx::query_as(&format!(
            r#"
            UPDATE snakes SET
                name = COALESCE($2, name),
                image = COALESCE($3, image),
                color = COALESCE($4, color),
                size = COALESCE($5, size),
                length = COALESCE($6, length),
                head_shape = COALESCE($7, head_shape),
                pattern = COALESCE($8, pattern),
                behavior = COALESCE($9, behavior),
                venom_type = COALESCE($10, venom_type),
                symptoms = COALESCE($11, symptoms),
                pain_level = COALESCE($12, pain_level),
                pain_type = COALESCE($13, pain_type),
                time_to_symptoms = COALESCE($14, time_to_symptoms),
                provinces = COALESCE($15, provinces),
                updated_at = now()
            WHERE id = $1
            RETURNING {SNAKE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.image)
        .bind(&patch.color)
        .bind(&patch.size)
        .bind(&patch.length)
        .bind(&patch.head_shape)
        .bind(&patch.pattern)
        .bind(&patch.behavior)
        .bind(&patch.venom_type)
        .bind(&patch.symptoms)
        .bind(patch.pain_level)
        .bind(&patch.pain_type)
        .bind(&patch.time_to_symptoms)
        .bind(provinces)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Snake::try_from).transpose()
    }

    async fn delete_snake(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM snakes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl HospitalStore for PgStore {
    async fn list_hospitals(&self) -> Result<Vec<Hospital>, AppError> {
        let rows: Vec<HospitalRow> = sqlx::query_as(&format!(
            "SELECT {HOSPITAL_COLUMNS} FROM hospitals ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Hospital::try_from).collect()
    }

    async fn list_approved_hospitals(&self) -> Result<Vec<Hospital>, AppError> {
        let rows: Vec<HospitalRow> = sqlx::query_as(&format!(
            "SELECT {HOSPITAL_COLUMNS} FROM hospitals WHERE is_approved ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(Hospital::try_from).collect()
    }

    async fn get_hospital(&self, id: Uuid) -> Result<Option<Hospital>, AppError> {
        let row: Option<HospitalRow> = sqlx::query_as(&format!(
            "SELECT {HOSPITAL_COLUMNS} FROM hospitals WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Hospital::try_from).transpose()
    }

    async fn insert_hospital(
        &self,
        owner_id: Uuid,
        input: &HospitalInput,
    ) -> Result<Hospital, AppError> {
        let id = Uuid::new_v4();
        let row: HospitalRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO hospitals
                (id, owner_id, name, hospital_type, address, city, phone, email,
                 coordinates, is_24_hours, working_hours, is_approved, images)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, FALSE, $12)
            RETURNING {HOSPITAL_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(owner_id)
        .bind(&input.name)
        .bind(input.hospital_type.as_str())
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(coordinates(input))
        .bind(input.is_24_hours)
        .bind(Json(input.working_hours.clone()))
        .bind(&input.images)
        .fetch_one(&self.pool)
        .await?;

        info!("Registered hospital {id} ({}) for owner {owner_id}", input.name);
        Hospital::try_from(row)
    }

    async fn set_hospital_approval(
        &self,
        id: Uuid,
        approved: bool,
    ) -> Result<Option<Hospital>, AppError> {
        let row: Option<HospitalRow> = sqlx::query_as(&format!(
            r#"
            UPDATE hospitals SET is_approved = $2, updated_at = now()
            WHERE id = $1
            RETURNING {HOSPITAL_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(approved)
        .fetch_optional(&self.pool)
        .await?;
        row.map(Hospital::try_from).transpose()
    }

    async fn delete_hospital(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM hospitals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
