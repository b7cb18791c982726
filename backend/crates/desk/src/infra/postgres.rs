//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{CustomerId, FeedbackId, MessageId, TicketId, UserId};
use sqlx::PgPool;

use crate::domain::entity::customer::CustomerAccount;
use crate::domain::entity::feedback::FeedbackEntry;
use crate::domain::entity::message::{NewMessage, ThreadMessage};
use crate::domain::entity::profile::{ProfileChanges, UserProfile};
use crate::domain::entity::ticket::{TicketDetail, TicketStatus, TicketSummary};
use crate::domain::repository::{
    CustomerRepository, FeedbackRepository, MessageRepository, ProfileRepository, TicketRepository,
};
use crate::error::DeskResult;

/// PostgreSQL-backed desk repository
#[derive(Clone)]
pub struct PgDeskRepository {
    pool: PgPool,
}

impl PgDeskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Feedback Repository Implementation
// ============================================================================

impl FeedbackRepository for PgDeskRepository {
    async fn list(&self) -> DeskResult<Vec<FeedbackEntry>> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            r#"
            SELECT
                f.id,
                f.arrived,
                COALESCE(u.fullname, f.guest_name) AS name,
                f.feedback
            FROM feedback AS f
            LEFT JOIN system_user AS u ON f.from_user = u.id
            ORDER BY f.arrived DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FeedbackRow::into_entry).collect())
    }
}

// ============================================================================
// Customer Repository Implementation
// ============================================================================

impl CustomerRepository for PgDeskRepository {
    async fn list(&self) -> DeskResult<Vec<CustomerAccount>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                u.id,
                u.fullname AS name,
                u.email,
                c.name AS company
            FROM system_user AS u
            LEFT JOIN customer AS c ON u.customer_id = c.id
            ORDER BY u.fullname ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CustomerRow::into_account).collect())
    }
}

// ============================================================================
// Ticket Repository Implementation
// ============================================================================

impl TicketRepository for PgDeskRepository {
    async fn list(&self) -> DeskResult<Vec<TicketSummary>> {
        let rows = sqlx::query_as::<_, TicketSummaryRow>(
            r#"
            SELECT
                st.id,
                st.arrived,
                c.name AS customer,
                st.description,
                ts.description AS status
            FROM support_ticket AS st
            LEFT JOIN customer AS c ON st.customer_id = c.id
            LEFT JOIN ticket_status AS ts ON st.status = ts.id
            ORDER BY st.arrived DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TicketSummaryRow::into_summary).collect())
    }

    async fn find_detail(&self, id: TicketId) -> DeskResult<Option<TicketDetail>> {
        let row = sqlx::query_as::<_, TicketDetailRow>(
            r#"
            SELECT
                st.id,
                st.arrived,
                c.name AS customer,
                st.description,
                st.handled,
                ts.description AS status,
                st.status AS status_id
            FROM support_ticket AS st
            LEFT JOIN ticket_status AS ts ON st.status = ts.id
            LEFT JOIN customer AS c ON st.customer_id = c.id
            WHERE st.id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TicketDetailRow::into_detail))
    }

    async fn set_status(
        &self,
        id: TicketId,
        status: TicketStatus,
        now: DateTime<Utc>,
    ) -> DeskResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE support_ticket
            SET status = $2, handled = $3
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(status.id())
        .bind(status.handled_on_entry(now))
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }
}

// ============================================================================
// Message Repository Implementation
// ============================================================================

impl MessageRepository for PgDeskRepository {
    async fn list_for_ticket(&self, id: TicketId) -> DeskResult<Vec<ThreadMessage>> {
        let rows = sqlx::query_as::<_, ThreadMessageRow>(
            r#"
            SELECT
                sm.id,
                sm.created_at,
                su.fullname AS sender,
                sm.body
            FROM support_message AS sm
            LEFT JOIN system_user AS su ON sm.from_user = su.id
            WHERE sm.ticket_id = $1
            ORDER BY sm.created_at ASC
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ThreadMessageRow::into_message).collect())
    }

    async fn create(&self, message: &NewMessage, at: DateTime<Utc>) -> DeskResult<MessageId> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO support_message (ticket_id, from_user, body, created_at, reply_to)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(message.ticket_id.as_i64())
        .bind(message.from_user.as_i64())
        .bind(&message.body)
        .bind(at)
        .bind(message.reply_to.map(|m| m.as_i64()))
        .fetch_one(&self.pool)
        .await?;

        Ok(MessageId::from_i64(id))
    }
}

// ============================================================================
// Profile Repository Implementation
// ============================================================================

impl ProfileRepository for PgDeskRepository {
    async fn find(&self, id: UserId) -> DeskResult<Option<UserProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                id,
                fullname,
                email,
                customer_id
            FROM system_user
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn update(&self, id: UserId, changes: &ProfileChanges) -> DeskResult<bool> {
        // The password column is only touched when a new hash was
        // produced; COALESCE keeps the stored one otherwise.
        let updated = sqlx::query(
            r#"
            UPDATE system_user
            SET fullname = $2,
                email = $3,
                password = COALESCE($4, password)
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(&changes.fullname)
        .bind(&changes.email)
        .bind(changes.password_hash.as_deref())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct FeedbackRow {
    id: i64,
    arrived: DateTime<Utc>,
    name: Option<String>,
    feedback: String,
}

impl FeedbackRow {
    fn into_entry(self) -> FeedbackEntry {
        FeedbackEntry {
            id: FeedbackId::from_i64(self.id),
            arrived: self.arrived,
            name: self.name,
            body: self.feedback,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    email: String,
    company: Option<String>,
}

impl CustomerRow {
    fn into_account(self) -> CustomerAccount {
        CustomerAccount {
            id: UserId::from_i64(self.id),
            name: self.name,
            email: self.email,
            company: self.company,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TicketSummaryRow {
    id: i64,
    arrived: DateTime<Utc>,
    customer: Option<String>,
    description: String,
    status: String,
}

impl TicketSummaryRow {
    fn into_summary(self) -> TicketSummary {
        TicketSummary {
            id: TicketId::from_i64(self.id),
            arrived: self.arrived,
            customer: self.customer,
            description: self.description,
            status: self.status,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TicketDetailRow {
    id: i64,
    arrived: DateTime<Utc>,
    customer: Option<String>,
    description: String,
    handled: Option<DateTime<Utc>>,
    status: String,
    status_id: i16,
}

impl TicketDetailRow {
    fn into_detail(self) -> TicketDetail {
        TicketDetail {
            id: TicketId::from_i64(self.id),
            arrived: self.arrived,
            customer: self.customer,
            description: self.description,
            handled: self.handled,
            status: self.status,
            status_id: self.status_id,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ThreadMessageRow {
    id: i64,
    created_at: DateTime<Utc>,
    sender: Option<String>,
    body: String,
}

impl ThreadMessageRow {
    fn into_message(self) -> ThreadMessage {
        ThreadMessage {
            id: MessageId::from_i64(self.id),
            sent_at: self.created_at,
            sender: self.sender,
            body: self.body,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: i64,
    fullname: String,
    email: String,
    customer_id: Option<i64>,
}

impl ProfileRow {
    fn into_profile(self) -> UserProfile {
        UserProfile {
            id: UserId::from_i64(self.id),
            fullname: self.fullname,
            email: self.email,
            customer_id: self.customer_id.map(CustomerId::from_i64),
        }
    }
}
