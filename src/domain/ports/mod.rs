use crate::domain::models::{booking::Booking, event::Event};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, draft: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, AppError>;
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Booking>, AppError>;
}
