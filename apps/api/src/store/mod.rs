//! Record stores. Handlers depend on these traits only; `AppState` carries
//! them as `Arc<dyn ...>` so the PostgreSQL backend can be swapped for the
//! in-memory one in tests.

#[cfg(test)]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::hospital::{Hospital, HospitalInput};
use crate::models::snake::{Snake, SnakeInput, SnakePatch};

#[async_trait]
pub trait SnakeStore: Send + Sync {
    /// Every snake, in natural collection order.
    async fn list_snakes(&self) -> Result<Vec<Snake>, AppError>;

    async fn get_snake(&self, id: Uuid) -> Result<Option<Snake>, AppError>;

    async fn insert_snake(&self, input: &SnakeInput) -> Result<Snake, AppError>;

    /// Replaces every field. Returns `None` when the id is unknown.
    async fn replace_snake(&self, id: Uuid, input: &SnakeInput)
        -> Result<Option<Snake>, AppError>;

    /// Applies only the supplied fields in a single write, so concurrent
    /// patches to different fields do not overwrite each other.
    async fn patch_snake(&self, id: Uuid, patch: &SnakePatch) -> Result<Option<Snake>, AppError>;

    async fn delete_snake(&self, id: Uuid) -> Result<bool, AppError>;
}

#[async_trait]
pub trait HospitalStore: Send + Sync {
    /// Every hospital regardless of approval state.
    async fn list_hospitals(&self) -> Result<Vec<Hospital>, AppError>;

    async fn list_approved_hospitals(&self) -> Result<Vec<Hospital>, AppError>;

    async fn get_hospital(&self, id: Uuid) -> Result<Option<Hospital>, AppError>;

    /// New hospitals are always stored unapproved.
    async fn insert_hospital(
        &self,
        owner_id: Uuid,
        input: &HospitalInput,
    ) -> Result<Hospital, AppError>;

    async fn set_hospital_approval(
        &self,
        id: Uuid,
        approved: bool,
    ) -> Result<Option<Hospital>, AppError>;

    async fn delete_hospital(&self, id: Uuid) -> Result<bool, AppError>;
}
