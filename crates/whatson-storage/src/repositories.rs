// Repository layer for database operations

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::*;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Apply embedded migrations (events + email_captures).
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    // ============================================
    // Events (written only by the sync service)
    // ============================================

    /// Existence probe: does any event row exist at all?
    pub async fn has_any_events(&self) -> Result<bool> {
        let row: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM events LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// All active events, ordered by start date ascending.
    pub async fn list_active_events(&self) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, description, event_date, event_end_date, venue, address,
                   image_url, original_url, ticket_url, price, category, source,
                   is_active, created_at, updated_at
            FROM events
            WHERE is_active = TRUE
            ORDER BY event_date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// (id, original_url) pairs for every stored event; the sync service
    /// matches candidates against these to decide insert vs update.
    pub async fn list_event_keys(&self) -> Result<Vec<EventKeyRow>> {
        let rows = sqlx::query_as::<_, EventKeyRow>("SELECT id, original_url FROM events")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn insert_event(&self, input: NewEvent) -> Result<EventRow> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (id, title, description, event_date, event_end_date, venue,
                                address, image_url, original_url, ticket_url, price,
                                category, source, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, TRUE)
            RETURNING id, title, description, event_date, event_end_date, venue, address,
                      image_url, original_url, ticket_url, price, category, source,
                      is_active, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.event_date)
        .bind(input.event_end_date)
        .bind(&input.venue)
        .bind(&input.address)
        .bind(&input.image_url)
        .bind(&input.original_url)
        .bind(&input.ticket_url)
        .bind(&input.price)
        .bind(&input.category)
        .bind(&input.source)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Re-sync update: overwrite the scraped fields of an existing row,
    /// leaving id, is_active, and created_at untouched.
    pub async fn update_event(&self, id: Uuid, input: NewEvent) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE events
            SET
                title = $2,
                description = $3,
                event_date = $4,
                event_end_date = $5,
                venue = $6,
                address = $7,
                image_url = $8,
                original_url = $9,
                ticket_url = $10,
                price = $11,
                category = $12,
                source = $13,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, event_date, event_end_date, venue, address,
                      image_url, original_url, ticket_url, price, category, source,
                      is_active, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.event_date)
        .bind(input.event_end_date)
        .bind(&input.venue)
        .bind(&input.address)
        .bind(&input.image_url)
        .bind(&input.original_url)
        .bind(&input.ticket_url)
        .bind(&input.price)
        .bind(&input.category)
        .bind(&input.source)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    // ============================================
    // Email captures (insert-only from the client)
    // ============================================

    pub async fn insert_email_capture(&self, input: NewEmailCapture) -> Result<EmailCaptureRow> {
        let row = sqlx::query_as::<_, EmailCaptureRow>(
            r#"
            INSERT INTO email_captures (id, email, event_id)
            VALUES ($1, $2, $3)
            RETURNING id, email, event_id, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.email)
        .bind(input.event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
