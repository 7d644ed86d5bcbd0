//! Inventory service capability.

use async_trait::async_trait;
use mockall::automock;

use satchel::{
    checkout::Order,
    lessons::{Lesson, LessonId},
};

use crate::remote::{client::LessonsClient, errors::RemoteError};

/// The remote source of truth for lessons and orders, as the store consumes
/// it. Implemented over HTTP by [`LessonsClient`]; mocked in tests.
#[automock]
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Fetch the full lesson catalog.
    async fn list_lessons(&self) -> Result<Vec<Lesson>, RemoteError>;

    /// Fetch the lessons matching a server-side search query.
    async fn search_lessons(&self, query: String) -> Result<Vec<Lesson>, RemoteError>;

    /// Persist a lesson's remaining capacity.
    async fn update_spaces(&self, id: LessonId, spaces: u64) -> Result<Lesson, RemoteError>;

    /// Submit a completed order.
    async fn submit_order(&self, order: Order) -> Result<(), RemoteError>;
}

#[async_trait]
impl InventoryService for LessonsClient {
    async fn list_lessons(&self) -> Result<Vec<Lesson>, RemoteError> {
        Self::list_lessons(self).await
    }

    async fn search_lessons(&self, query: String) -> Result<Vec<Lesson>, RemoteError> {
        Self::search_lessons(self, &query).await
    }

    async fn update_spaces(&self, id: LessonId, spaces: u64) -> Result<Lesson, RemoteError> {
        Self::update_spaces(self, &id, spaces).await
    }

    async fn submit_order(&self, order: Order) -> Result<(), RemoteError> {
        Self::submit_order(self, &order).await
    }
}
