use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::services::normalize::require_email;
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub event_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(event_id: String, email: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Re-checks the email shape immediately before the write, independent
    /// of any handler-level validation.
    pub fn validated(&self) -> Result<Booking, AppError> {
        let mut booking = self.clone();
        booking.email = require_email(&self.email)?;
        booking.updated_at = Utc::now();
        Ok(booking)
    }
}
