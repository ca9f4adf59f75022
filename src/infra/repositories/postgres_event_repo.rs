use std::sync::Arc;

use crate::domain::{
    models::event::{Event, EventRow},
    ports::EventRepository,
};
use crate::error::AppError;
use crate::infra::db::PostgresProvider;
use async_trait::async_trait;

pub struct PostgresEventRepo {
    provider: Arc<PostgresProvider>,
}

impl PostgresEventRepo {
    pub fn new(provider: Arc<PostgresProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepo {
    async fn create(&self, draft: &Event) -> Result<Event, AppError> {
        let event = draft.prepared_for_insert()?;
        let pool = self.provider.get().await?;

        let row = sqlx::query_as::<_, EventRow>(
            r#"INSERT INTO events (
                id, slug, title, description, overview, image, venue, location,
                date, time, mode, audience, organizer, agenda, tags, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *"#,
        )
        .bind(&event.id)
        .bind(&event.slug)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.overview)
        .bind(&event.image)
        .bind(&event.venue)
        .bind(&event.location)
        .bind(&event.date)
        .bind(&event.time)
        .bind(&event.mode)
        .bind(&event.audience)
        .bind(&event.organizer)
        .bind(event.agenda_json()?)
        .bind(event.tags_json()?)
        .bind(event.created_at)
        .bind(event.updated_at)
        .fetch_one(pool)
        .await
        .map_err(AppError::Database)?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        let pool = self.provider.get().await?;

        sqlx::query_as::<_, EventRow>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(AppError::Database)?
            .map(Event::try_from)
            .transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, AppError> {
        let pool = self.provider.get().await?;

        sqlx::query_as::<_, EventRow>("SELECT * FROM events WHERE slug = $1")
            .bind(slug)
            .fetch_optional(pool)
            .await
            .map_err(AppError::Database)?
            .map(Event::try_from)
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Event>, AppError> {
        let pool = self.provider.get().await?;

        sqlx::query_as::<_, EventRow>("SELECT * FROM events ORDER BY date ASC, time ASC")
            .fetch_all(pool)
            .await
            .map_err(AppError::Database)?
            .into_iter()
            .map(Event::try_from)
            .collect()
    }

    async fn update(&self, event: &Event) -> Result<Event, AppError> {
        let previous = self
            .find_by_id(&event.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".into()))?;
        let event = event.prepared_for_update(&previous)?;
        let pool = self.provider.get().await?;

        let row = sqlx::query_as::<_, EventRow>(
            r#"UPDATE events SET
                slug=$1, title=$2, description=$3, overview=$4, image=$5, venue=$6, location=$7,
                date=$8, time=$9, mode=$10, audience=$11, organizer=$12, agenda=$13, tags=$14, updated_at=$15
               WHERE id=$16 RETURNING *"#,
        )
        .bind(&event.slug)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.overview)
        .bind(&event.image)
        .bind(&event.venue)
        .bind(&event.location)
        .bind(&event.date)
        .bind(&event.time)
        .bind(&event.mode)
        .bind(&event.audience)
        .bind(&event.organizer)
        .bind(event.agenda_json()?)
        .bind(event.tags_json()?)
        .bind(event.updated_at)
        .bind(&event.id)
        .fetch_one(pool)
        .await
        .map_err(AppError::Database)?;

        row.try_into()
    }
}
