//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{credential::Credential, session::Session};
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::error::AuthResult;

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Credential Repository Implementation
// ============================================================================

impl CredentialRepository for PgAuthRepository {
    async fn find_by_identifier(&self, identifier: &str) -> AuthResult<Option<Credential>> {
        // The login form accepts a numeric user id or an email
        // address in the same field. A non-numeric identifier binds
        // NULL for the id comparison, which matches nothing.
        let as_id: Option<i64> = identifier.parse().ok();

        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT
                id,
                fullname,
                password
            FROM system_user
            WHERE id = $1 OR email = $2
            "#,
        )
        .bind(as_id)
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CredentialRow::into_credential))
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgAuthRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_session (
                session_id,
                user_id,
                display_name,
                expires_at_ms,
                created_at,
                last_activity_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_i64())
        .bind(&session.display_name)
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .bind(session.last_activity_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        let now_ms = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                display_name,
                expires_at_ms,
                created_at,
                last_activity_at
            FROM auth_session
            WHERE session_id = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(session_id)
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn touch(&self, session_id: Uuid, at: DateTime<Utc>) -> AuthResult<()> {
        sqlx::query("UPDATE auth_session SET last_activity_at = $2 WHERE session_id = $1")
            .bind(session_id)
            .bind(at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM auth_session WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM auth_session WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    fullname: String,
    password: String,
}

impl CredentialRow {
    fn into_credential(self) -> Credential {
        Credential {
            user_id: UserId::from_i64(self.id),
            fullname: self.fullname,
            password_hash: self.password,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: i64,
    display_name: String,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
    last_activity_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            session_id: self.session_id,
            user_id: UserId::from_i64(self.user_id),
            display_name: self.display_name,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
            last_activity_at: self.last_activity_at,
        }
    }
}
