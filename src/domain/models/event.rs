use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::services::normalize::{
    normalize_date, normalize_time, require_text, require_text_list, slugify,
};
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Event {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub organizer: String,
    pub agenda: Vec<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewEventParams {
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub organizer: String,
    pub agenda: Vec<String>,
    pub tags: Vec<String>,
}

impl Event {
    /// Builds an unvalidated draft. The slug stays empty until the draft is
    /// prepared for its first insert.
    pub fn new(params: NewEventParams) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            slug: String::new(),
            title: params.title,
            description: params.description,
            overview: params.overview,
            image: params.image,
            venue: params.venue,
            location: params.location,
            date: params.date,
            time: params.time,
            mode: params.mode,
            audience: params.audience,
            organizer: params.organizer,
            agenda: params.agenda,
            tags: params.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validates and normalizes a draft before its first insert. The slug is
    /// always derived from the title here.
    pub fn prepared_for_insert(&self) -> Result<Event, AppError> {
        self.prepared(None)
    }

    /// Validates and normalizes a mutated copy before an update. `previous`
    /// is the last persisted state; the slug is regenerated only when the
    /// title changed, otherwise the persisted slug is kept.
    pub fn prepared_for_update(&self, previous: &Event) -> Result<Event, AppError> {
        self.prepared(Some(previous))
    }

    fn prepared(&self, previous: Option<&Event>) -> Result<Event, AppError> {
        let mut event = self.clone();

        event.title = require_text("title", &self.title)?;
        event.description = require_text("description", &self.description)?;
        event.overview = require_text("overview", &self.overview)?;
        event.image = require_text("image", &self.image)?;
        event.venue = require_text("venue", &self.venue)?;
        event.location = require_text("location", &self.location)?;
        event.mode = require_text("mode", &self.mode)?;
        event.audience = require_text("audience", &self.audience)?;
        event.organizer = require_text("organizer", &self.organizer)?;

        event.agenda = require_text_list("agenda", &self.agenda)?;
        event.tags = require_text_list("tags", &self.tags)?;

        event.date = normalize_date(&self.date)?;
        event.time = normalize_time(&self.time)?;

        event.slug = match previous {
            Some(prev) if prev.title == event.title => prev.slug.clone(),
            _ => slugify(&event.title),
        };

        event.updated_at = Utc::now();

        Ok(event)
    }

    pub(crate) fn agenda_json(&self) -> Result<String, AppError> {
        serde_json::to_string(&self.agenda)
            .map_err(|e| AppError::Internal(format!("failed to encode agenda: {}", e)))
    }

    pub(crate) fn tags_json(&self) -> Result<String, AppError> {
        serde_json::to_string(&self.tags)
            .map_err(|e| AppError::Internal(format!("failed to encode tags: {}", e)))
    }
}

/// Storage projection of [`Event`]. The agenda and tags travel as
/// JSON-encoded text columns.
#[derive(Debug, FromRow)]
pub struct EventRow {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub overview: String,
    pub image: String,
    pub venue: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub mode: String,
    pub audience: String,
    pub organizer: String,
    pub agenda: String,
    pub tags: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = AppError;

    fn try_from(row: EventRow) -> Result<Event, AppError> {
        let agenda: Vec<String> = serde_json::from_str(&row.agenda)
            .map_err(|e| AppError::Internal(format!("corrupt agenda column for event {}: {}", row.id, e)))?;
        let tags: Vec<String> = serde_json::from_str(&row.tags)
            .map_err(|e| AppError::Internal(format!("corrupt tags column for event {}: {}", row.id, e)))?;

        Ok(Event {
            id: row.id,
            slug: row.slug,
            title: row.title,
            description: row.description,
            overview: row.overview,
            image: row.image,
            venue: row.venue,
            location: row.location,
            date: row.date,
            time: row.time,
            mode: row.mode,
            audience: row.audience,
            organizer: row.organizer,
            agenda,
            tags,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
