use std::sync::Arc;

use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use crate::infra::db::PostgresProvider;
use async_trait::async_trait;

pub struct PostgresBookingRepo {
    provider: Arc<PostgresProvider>,
}

impl PostgresBookingRepo {
    pub fn new(provider: Arc<PostgresProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        let booking = booking.validated()?;
        let pool = self.provider.get().await?;

        // The referenced event must exist at save time. There is no foreign
        // key on bookings.event_id; the check lives here.
        let event_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM events WHERE id = $1)")
                .bind(&booking.event_id)
                .fetch_one(pool)
                .await
                .map_err(AppError::Database)?;

        if !event_exists {
            return Err(AppError::ReferentialIntegrity(
                "referenced event does not exist".to_string(),
            ));
        }

        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, event_id, email, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&booking.id)
        .bind(&booking.event_id)
        .bind(&booking.email)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .fetch_one(pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Booking>, AppError> {
        let pool = self.provider.get().await?;

        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE event_id = $1 ORDER BY created_at ASC",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
        .map_err(AppError::Database)
    }
}
