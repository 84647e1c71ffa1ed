//! PostgreSQL implementation of RsvpRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use club_core::entities::{Rsvp, RsvpStatus};
use club_core::error::DomainError;
use club_core::traits::{RepoResult, RsvpRepository};

use crate::mappers::RsvpInsert;
use crate::models::RsvpModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of RsvpRepository
///
/// The partial unique index `uq_rsvps_active` is the final arbiter of the
/// one-active-RSVP rule; concurrent inserts that slip past a pre-check fail here.
#[derive(Clone)]
pub struct PgRsvpRepository {
    pool: PgPool,
}

impl PgRsvpRepository {
    /// Create a new PgRsvpRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_entities(rows: Vec<RsvpModel>) -> RepoResult<Vec<Rsvp>> {
    rows.into_iter().map(Rsvp::try_from).collect()
}

#[async_trait]
impl RsvpRepository for PgRsvpRepository {
    #[instrument(skip(self))]
    async fn find_for_member(&self, member_id: Uuid, rsvp_id: Uuid) -> RepoResult<Option<Rsvp>> {
        let result = sqlx::query_as::<_, RsvpModel>(
            r#"
            SELECT id, member_id, event_name, event_date, event_time, event_location,
                   event_description, rsvp_at, status
            FROM rsvps
            WHERE id = $1 AND member_id = $2
            "#,
        )
        .bind(rsvp_id)
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Rsvp::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_active(
        &self,
        member_id: Uuid,
        event_name: &str,
        event_date: NaiveDate,
    ) -> RepoResult<Option<Rsvp>> {
        let result = sqlx::query_as::<_, RsvpModel>(
            r#"
            SELECT id, member_id, event_name, event_date, event_time, event_location,
                   event_description, rsvp_at, status
            FROM rsvps
            WHERE member_id = $1 AND event_name = $2 AND event_date = $3
              AND status <> 'cancelled'
            "#,
        )
        .bind(member_id)
        .bind(event_name)
        .bind(event_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Rsvp::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_member(
        &self,
        member_id: Uuid,
        status: Option<RsvpStatus>,
    ) -> RepoResult<Vec<Rsvp>> {
        let results = sqlx::query_as::<_, RsvpModel>(
            r#"
            SELECT id, member_id, event_name, event_date, event_time, event_location,
                   event_description, rsvp_at, status
            FROM rsvps
            WHERE member_id = $1 AND ($2::TEXT IS NULL OR status = $2)
            ORDER BY event_date ASC, rsvp_at ASC
            "#,
        )
        .bind(member_id)
        .bind(status.map(|s| s.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_entities(results)
    }

    #[instrument(skip(self, rsvp), fields(rsvp_id = %rsvp.id, member_id = %rsvp.member_id))]
    async fn create(&self, rsvp: &Rsvp) -> RepoResult<()> {
        let insert = RsvpInsert::new(rsvp);

        sqlx::query(
            r#"
            INSERT INTO rsvps (id, member_id, event_name, event_date, event_time,
                               event_location, event_description, rsvp_at, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(insert.id)
        .bind(insert.member_id)
        .bind(insert.event_name)
        .bind(insert.event_date)
        .bind(insert.event_time)
        .bind(insert.event_location)
        .bind(insert.event_description)
        .bind(insert.rsvp_at)
        .bind(insert.status)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::RsvpAlreadyExists {
                event_name: rsvp.event_name.clone(),
                event_date: rsvp.event_date,
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        member_id: Uuid,
        rsvp_id: Uuid,
        status: RsvpStatus,
    ) -> RepoResult<Option<Rsvp>> {
        let result = sqlx::query_as::<_, RsvpModel>(
            r#"
            UPDATE rsvps
            SET status = $3
            WHERE id = $1 AND member_id = $2
            RETURNING id, member_id, event_name, event_date, event_time, event_location,
                      event_description, rsvp_at, status
            "#,
        )
        .bind(rsvp_id)
        .bind(member_id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError(format!(
                    "RSVP {rsvp_id} cannot be reactivated while another is active"
                ))
            })
        })?;

        result.map(Rsvp::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn delete(&self, member_id: Uuid, rsvp_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM rsvps
            WHERE id = $1 AND member_id = $2
            "#,
        )
        .bind(rsvp_id)
        .bind(member_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
