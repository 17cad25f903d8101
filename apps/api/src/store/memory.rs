//! In-memory store used by handler tests. Insertion order is the natural order.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::hospital::{Hospital, HospitalInput};
use crate::models::snake::{Snake, SnakeInput, SnakePatch};
use crate::store::{HospitalStore, SnakeStore};

#[derive(Default)]
pub struct MemoryStore {
    snakes: RwLock<Vec<Snake>>,
    hospitals: RwLock<Vec<Hospital>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a hospital record as-is, bypassing boundary validation.
    pub async fn seed_hospital(&self, hospital: Hospital) {
        self.hospitals.write().await.push(hospital);
    }
}

fn snake_from_input(id: Uuid, input: &SnakeInput, created_at: chrono::DateTime<Utc>) -> Snake {
    Snake {
        id,
        name: input.name.clone(),
        image: input.image.clone(),
        color: input.color.clone(),
        size: input.size.clone(),
        length: input.length.clone(),
        head_shape: input.head_shape.clone(),
        pattern: input.pattern.clone(),
        behavior: input.behavior.clone(),
        venom_type: input.venom_type.clone(),
        symptoms: input.symptoms.clone(),
        pain_level: input.pain_level,
        pain_type: input.pain_type.clone(),
        time_to_symptoms: input.time_to_symptoms.clone(),
        provinces: input.provinces.clone(),
        created_at,
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl SnakeStore for MemoryStore {
    async fn list_snakes(&self) -> Result<Vec<Snake>, AppError> {
        Ok(self.snakes.read().await.clone())
    }

    async fn get_snake(&self, id: Uuid) -> Result<Option<Snake>, AppError> {
        Ok(self.snakes.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn insert_snake(&self, input: &SnakeInput) -> Result<Snake, AppError> {
        let snake = snake_from_input(Uuid::new_v4(), input, Utc::now());
        self.snakes.write().await.push(snake.clone());
        Ok(snake)
    }

    async fn replace_snake(
        &self,
        id: Uuid,
        input: &SnakeInput,
    ) -> Result<Option<Snake>, AppError> {
        let mut snakes = self.snakes.write().await;
        Ok(snakes.iter_mut().find(|s| s.id == id).map(|slot| {
            *slot = snake_from_input(id, input, slot.created_at);
            slot.clone()
        }))
    }

    async fn patch_snake(&self, id: Uuid, patch: &SnakePatch) -> Result<Option<Snake>, AppError> {
        let mut snakes = self.snakes.write().await;
        Ok(snakes.iter_mut().find(|s| s.id == id).map(|slot| {
            let merged = patch.clone().merge_onto(slot);
            *slot = snake_from_input(id, &merged, slot.created_at);
            slot.clone()
        }))
    }

    async fn delete_snake(&self, id: Uuid) -> Result<bool, AppError> {
        let mut snakes = self.snakes.write().await;
        let before = snakes.len();
        snakes.retain(|s| s.id != id);
        Ok(snakes.len() != before)
    }
}

#[async_trait]
impl HospitalStore for MemoryStore {
    async fn list_hospitals(&self) -> Result<Vec<Hospital>, AppError> {
        Ok(self.hospitals.read().await.clone())
    }

    async fn list_approved_hospitals(&self) -> Result<Vec<Hospital>, AppError> {
        Ok(self
            .hospitals
            .read()
            .await
            .iter()
            .filter(|h| h.is_approved)
            .cloned()
            .collect())
    }

    async fn get_hospital(&self, id: Uuid) -> Result<Option<Hospital>, AppError> {
        Ok(self
            .hospitals
            .read()
            .await
            .iter()
            .find(|h| h.id == id)
            .cloned())
    }

    async fn insert_hospital(
        &self,
        owner_id: Uuid,
        input: &HospitalInput,
    ) -> Result<Hospital, AppError> {
        let now = Utc::now();
        let hospital = Hospital {
            id: Uuid::new_v4(),
            owner_id,
            name: input.name.clone(),
            hospital_type: input.hospital_type,
            address: input.address.clone(),
            city: input.city.clone(),
            phone: input.phone.clone(),
            email: input.email.clone(),
            location: input.location.clone(),
            is_24_hours: input.is_24_hours,
            working_hours: input.working_hours.clone(),
            is_approved: false,
            images: input.images.clone(),
            created_at: now,
            updated_at: now,
        };
        self.hospitals.write().await.push(hospital.clone());
        Ok(hospital)
    }

    async fn set_hospital_approval(
        &self,
        id: Uuid,
        approved: bool,
    ) -> Result<Option<Hospital>, AppError> {
        let mut hospitals = self.hospitals.write().await;
        Ok(hospitals.iter_mut().find(|h| h.id == id).map(|h| {
            h.is_approved = approved;
            h.updated_at = Utc::now();
            h.clone()
        }))
    }

    async fn delete_hospital(&self, id: Uuid) -> Result<bool, AppError> {
        let mut hospitals = self.hospitals.write().await;
        let before = hospitals.len();
        hospitals.retain(|h| h.id != id);
        Ok(hospitals.len() != before)
    }
}
