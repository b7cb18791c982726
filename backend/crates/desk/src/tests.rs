//! Router-level tests
//!
//! The full desk router behind the real auth gate, with in-memory
//! repositories standing in for PostgreSQL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use auth::application::config::AuthConfig;
use auth::application::token::sign_session_token;
use auth::domain::entity::session::Session;
use auth::domain::repository::SessionRepository;
use auth::error::AuthResult;
use auth::presentation::middleware::{AuthGateState, require_session};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use chrono::{DateTime, Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use kernel::id::{MessageId, TicketId, UserId};

use crate::application::config::DeskConfig;
use crate::domain::entity::customer::CustomerAccount;
use crate::domain::entity::feedback::FeedbackEntry;
use crate::domain::entity::message::{NewMessage, ThreadMessage};
use crate::domain::entity::profile::{ProfileChanges, UserProfile};
use crate::domain::entity::ticket::{TicketDetail, TicketStatus, TicketSummary};
use crate::domain::repository::{
    CustomerRepository, FeedbackRepository, MessageRepository, ProfileRepository, TicketRepository,
};
use crate::error::DeskResult;
use crate::presentation::router::desk_router_generic;

// ============================================================================
// In-memory desk repository
// ============================================================================

struct TicketRecord {
    id: i64,
    arrived: DateTime<Utc>,
    customer: Option<String>,
    description: String,
    handled: Option<DateTime<Utc>>,
    status: TicketStatus,
}

struct StoredMessage {
    id: i64,
    ticket_id: i64,
    from_user: i64,
    body: String,
    created_at: DateTime<Utc>,
    reply_to: Option<i64>,
}

struct StoredUser {
    id: i64,
    fullname: String,
    email: String,
    password_hash: String,
}

#[derive(Default)]
struct DeskState {
    feedback: Vec<FeedbackEntry>,
    tickets: Vec<TicketRecord>,
    messages: Vec<StoredMessage>,
    users: Vec<StoredUser>,
    next_message_id: i64,
    /// How many times any list/find hit the store; the gate tests
    /// assert this stays at zero for rejected requests
    store_hits: usize,
}

#[derive(Clone, Default)]
struct InMemoryDesk {
    state: Arc<Mutex<DeskState>>,
}

impl InMemoryDesk {
    fn seeded() -> Self {
        let repo = Self::default();
        {
            let mut s = repo.state.lock().unwrap();
            s.feedback = vec![
                FeedbackEntry {
                    id: kernel::id::FeedbackId::from_i64(1),
                    arrived: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
                    name: Some("Liisa".to_string()),
                    body: "Quick response, thanks".to_string(),
                },
                FeedbackEntry {
                    id: kernel::id::FeedbackId::from_i64(2),
                    arrived: Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap(),
                    name: None,
                    body: "Website was down".to_string(),
                },
            ];
            s.tickets = vec![TicketRecord {
                id: 7,
                arrived: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
                customer: Some("Acme Oy".to_string()),
                description: "Printer on fire".to_string(),
                handled: None,
                status: TicketStatus::Open,
            }];
            s.messages = vec![
                StoredMessage {
                    id: 1,
                    ticket_id: 7,
                    from_user: 2,
                    body: "It is still burning".to_string(),
                    created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 5, 0).unwrap(),
                    reply_to: None,
                },
                StoredMessage {
                    id: 2,
                    ticket_id: 7,
                    from_user: 1,
                    body: "Have you tried water".to_string(),
                    created_at: Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 0).unwrap(),
                    reply_to: Some(1),
                },
            ];
            s.users = vec![StoredUser {
                id: 1,
                fullname: "Maija Meikäläinen".to_string(),
                email: "maija@example.com".to_string(),
                password_hash: "$argon2id$old".to_string(),
            }];
            s.next_message_id = 3;
        }
        repo
    }

    fn ticket(&self, id: i64) -> (TicketStatus, Option<DateTime<Utc>>) {
        let s = self.state.lock().unwrap();
        let t = s.tickets.iter().find(|t| t.id == id).unwrap();
        (t.status, t.handled)
    }

    fn store_hits(&self) -> usize {
        self.state.lock().unwrap().store_hits
    }

    fn password_hash(&self, user_id: i64) -> String {
        let s = self.state.lock().unwrap();
        s.users
            .iter()
            .find(|u| u.id == user_id)
            .unwrap()
            .password_hash
            .clone()
    }
}

impl FeedbackRepository for InMemoryDesk {
    async fn list(&self) -> DeskResult<Vec<FeedbackEntry>> {
        let mut s = self.state.lock().unwrap();
        s.store_hits += 1;
        let mut entries = s.feedback.clone();
        entries.sort_by(|a, b| b.arrived.cmp(&a.arrived));
        Ok(entries)
    }
}

impl CustomerRepository for InMemoryDesk {
    async fn list(&self) -> DeskResult<Vec<CustomerAccount>> {
        let mut s = self.state.lock().unwrap();
        s.store_hits += 1;
        Ok(s.users
            .iter()
            .map(|u| CustomerAccount {
                id: UserId::from_i64(u.id),
                name: u.fullname.clone(),
                email: u.email.clone(),
                company: None,
            })
            .collect())
    }
}

impl TicketRepository for InMemoryDesk {
    async fn list(&self) -> DeskResult<Vec<TicketSummary>> {
        let mut s = self.state.lock().unwrap();
        s.store_hits += 1;
        let mut tickets: Vec<_> = s
            .tickets
            .iter()
            .map(|t| TicketSummary {
                id: TicketId::from_i64(t.id),
                arrived: t.arrived,
                customer: t.customer.clone(),
                description: t.description.clone(),
                status: t.status.description().to_string(),
            })
            .collect();
        tickets.sort_by(|a, b| b.arrived.cmp(&a.arrived));
        Ok(tickets)
    }

    async fn find_detail(&self, id: TicketId) -> DeskResult<Option<TicketDetail>> {
        let mut s = self.state.lock().unwrap();
        s.store_hits += 1;
        Ok(s.tickets.iter().find(|t| t.id == id.as_i64()).map(|t| {
            TicketDetail {
                id: TicketId::from_i64(t.id),
                arrived: t.arrived,
                customer: t.customer.clone(),
                description: t.description.clone(),
                handled: t.handled,
                status: t.status.description().to_string(),
                status_id: t.status.id(),
            }
        }))
    }

    async fn set_status(
        &self,
        id: TicketId,
        status: TicketStatus,
        now: DateTime<Utc>,
    ) -> DeskResult<bool> {
        let mut s = self.state.lock().unwrap();
        s.store_hits += 1;
        match s.tickets.iter_mut().find(|t| t.id == id.as_i64()) {
            Some(t) => {
                t.status = status;
                t.handled = status.handled_on_entry(now);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl MessageRepository for InMemoryDesk {
    async fn list_for_ticket(&self, id: TicketId) -> DeskResult<Vec<ThreadMessage>> {
        let mut s = self.state.lock().unwrap();
        s.store_hits += 1;
        let mut messages: Vec<_> = s
            .messages
            .iter()
            .filter(|m| m.ticket_id == id.as_i64())
            .map(|m| ThreadMessage {
                id: MessageId::from_i64(m.id),
                sent_at: m.created_at,
                sender: Some(format!("User {}", m.from_user)),
                body: m.body.clone(),
            })
            .collect();
        messages.sort_by_key(|m| m.sent_at);
        Ok(messages)
    }

    async fn create(&self, message: &NewMessage, at: DateTime<Utc>) -> DeskResult<MessageId> {
        let mut s = self.state.lock().unwrap();
        s.store_hits += 1;
        let id = s.next_message_id;
        s.next_message_id += 1;
        s.messages.push(StoredMessage {
            id,
            ticket_id: message.ticket_id.as_i64(),
            from_user: message.from_user.as_i64(),
            body: message.body.clone(),
            created_at: at,
            reply_to: message.reply_to.map(|m| m.as_i64()),
        });
        Ok(MessageId::from_i64(id))
    }
}

impl ProfileRepository for InMemoryDesk {
    async fn find(&self, id: UserId) -> DeskResult<Option<UserProfile>> {
        let mut s = self.state.lock().unwrap();
        s.store_hits += 1;
        Ok(s.users
            .iter()
            .find(|u| u.id == id.as_i64())
            .map(|u| UserProfile {
                id: UserId::from_i64(u.id),
                fullname: u.fullname.clone(),
                email: u.email.clone(),
                customer_id: None,
            }))
    }

    async fn update(&self, id: UserId, changes: &ProfileChanges) -> DeskResult<bool> {
        let mut s = self.state.lock().unwrap();
        s.store_hits += 1;
        match s.users.iter_mut().find(|u| u.id == id.as_i64()) {
            Some(u) => {
                u.fullname = changes.fullname.clone();
                u.email = changes.email.clone();
                if let Some(hash) = &changes.password_hash {
                    u.password_hash = hash.clone();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// ============================================================================
// In-memory session store for the gate
// ============================================================================

#[derive(Clone, Default)]
struct InMemorySessions {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl SessionRepository for InMemorySessions {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions
            .get(&session_id)
            .filter(|s| !s.is_expired())
            .cloned())
    }

    async fn touch(&self, session_id: Uuid, at: DateTime<Utc>) -> AuthResult<()> {
        if let Some(session) = self.sessions.lock().unwrap().get_mut(&session_id) {
            session.last_activity_at = at;
        }
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.lock().unwrap().remove(&session_id);
        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}

// ============================================================================
// Test harness
// ============================================================================

struct Harness {
    app: Router,
    repo: InMemoryDesk,
    sessions: InMemorySessions,
    auth_config: Arc<AuthConfig>,
}

impl Harness {
    fn new() -> Self {
        let repo = InMemoryDesk::seeded();
        let sessions = InMemorySessions::default();
        let auth_config = Arc::new(AuthConfig::development());

        let gate = AuthGateState {
            repo: Arc::new(sessions.clone()),
            config: auth_config.clone(),
        };
        let app = desk_router_generic(repo.clone(), Arc::new(DeskConfig::default())).layer(
            axum::middleware::from_fn(
                move |req: axum::extract::Request, next: axum::middleware::Next| {
                    let gate = gate.clone();
                    async move { require_session(gate, req, next).await }
                },
            ),
        );

        Self {
            app,
            repo,
            sessions,
            auth_config,
        }
    }

    /// Create a live session and return the Cookie header value
    fn sign_in(&self) -> String {
        let session = Session::new(
            UserId::from_i64(1),
            "Maija Meikäläinen".to_string(),
            Duration::hours(12),
        );
        let token = sign_session_token(&self.auth_config.session_secret, session.session_id);
        self.sessions
            .sessions
            .lock()
            .unwrap()
            .insert(session.session_id, session);
        format!("{}={}", self.auth_config.session_cookie_name, token)
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        self.app
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(&self, uri: &str, cookie: &str, body: &str) -> Response<Body> {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::COOKIE, cookie)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

// ============================================================================
// Auth gate
// ============================================================================

#[tokio::test]
async fn test_no_cookie_redirects_to_login_without_store_access() {
    let h = Harness::new();

    let response = h.get("/feedback", None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(h.repo.store_hits(), 0);
}

#[tokio::test]
async fn test_forged_cookie_is_rejected() {
    let h = Harness::new();
    let cookie = format!(
        "{}={}.not-a-real-signature",
        h.auth_config.session_cookie_name,
        Uuid::new_v4()
    );

    let response = h.get("/tickets", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(h.repo.store_hits(), 0);
}

#[tokio::test]
async fn test_expired_session_is_rejected() {
    let h = Harness::new();
    let cookie = h.sign_in();
    for session in h.sessions.sessions.lock().unwrap().values_mut() {
        session.expires_at_ms = Utc::now().timestamp_millis() - 1_000;
    }

    let response = h.get("/feedback", Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(h.repo.store_hits(), 0);
}

// ============================================================================
// Lists
// ============================================================================

#[tokio::test]
async fn test_feedback_list_newest_first() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.get("/feedback", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    let newer = html.find("Website was down").unwrap();
    let older = html.find("Quick response, thanks").unwrap();
    assert!(newer < older);
    assert!(html.contains("Liisa"));
}

#[tokio::test]
async fn test_ticket_list_renders() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.get("/tickets", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Printer on fire"));
    assert!(html.contains("Acme Oy"));
    assert!(html.contains("Open"));
}

#[tokio::test]
async fn test_customer_list_renders() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.get("/customers", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("maija@example.com"));
}

// ============================================================================
// Ticket detail
// ============================================================================

#[tokio::test]
async fn test_ticket_detail_thread_oldest_first() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.get("/ticket?id=7", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    let first = html.find("It is still burning").unwrap();
    let second = html.find("Have you tried water").unwrap();
    assert!(first < second);
}

#[tokio::test]
async fn test_ticket_detail_requires_id() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.get("/ticket", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(h.repo.store_hits(), 0);
}

#[tokio::test]
async fn test_unknown_ticket_is_404() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.get("/ticket?id=999", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Reply
// ============================================================================

#[tokio::test]
async fn test_reply_is_attributed_to_admin_and_redirects() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h
        .post_form("/reply", &cookie, "ticketId=7&message=On+our+way&reply_to=")
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/ticket?id=7");

    let state = h.repo.state.lock().unwrap();
    let message = state.messages.last().unwrap();
    assert_eq!(message.body, "On our way");
    assert_eq!(message.from_user, 1);
    assert_eq!(message.reply_to, None);
}

#[tokio::test]
async fn test_reply_keeps_parent_reference() {
    let h = Harness::new();
    let cookie = h.sign_in();

    h.post_form("/reply", &cookie, "ticketId=7&message=Answering&reply_to=2")
        .await;

    let state = h.repo.state.lock().unwrap();
    assert_eq!(state.messages.last().unwrap().reply_to, Some(2));
}

#[tokio::test]
async fn test_reply_requires_ticket_and_message() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.post_form("/reply", &cookie, "message=No+ticket").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = h.post_form("/reply", &cookie, "ticketId=7&message=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reply_to_unknown_ticket_is_404() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h
        .post_form("/reply", &cookie, "ticketId=999&message=Hello")
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Status transitions
// ============================================================================

#[tokio::test]
async fn test_close_ticket_stamps_handled() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.post_form("/close-ticket", &cookie, "ticketId=7").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/ticket?id=7");

    let (status, handled) = h.repo.ticket(7);
    assert_eq!(status, TicketStatus::Closed);
    assert!(handled.is_some());
}

#[tokio::test]
async fn test_reopen_clears_handled() {
    let h = Harness::new();
    let cookie = h.sign_in();

    h.post_form("/close-ticket", &cookie, "ticketId=7").await;
    let response = h.post_form("/reopen-ticket", &cookie, "ticketId=7").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let (status, handled) = h.repo.ticket(7);
    assert_eq!(status, TicketStatus::Open);
    assert_eq!(handled, None);
}

#[tokio::test]
async fn test_update_status_away_from_closed_clears_handled() {
    let h = Harness::new();
    let cookie = h.sign_in();

    h.post_form("/close-ticket", &cookie, "ticketId=7").await;
    let response = h
        .post_form("/update-status", &cookie, "ticketId=7&newStatus=2")
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let (status, handled) = h.repo.ticket(7);
    assert_eq!(status, TicketStatus::InProgress);
    assert_eq!(handled, None);
}

#[tokio::test]
async fn test_update_status_to_closed_stamps_handled() {
    let h = Harness::new();
    let cookie = h.sign_in();

    h.post_form("/update-status", &cookie, "ticketId=7&newStatus=4")
        .await;

    let (status, handled) = h.repo.ticket(7);
    assert_eq!(status, TicketStatus::Closed);
    assert!(handled.is_some());
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h
        .post_form("/update-status", &cookie, "ticketId=7&newStatus=9")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _) = h.repo.ticket(7);
    assert_eq!(status, TicketStatus::Open);
}

#[tokio::test]
async fn test_transitions_require_ticket_id() {
    let h = Harness::new();
    let cookie = h.sign_in();

    for uri in ["/close-ticket", "/reopen-ticket"] {
        let response = h.post_form(uri, &cookie, "").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let response = h.post_form("/update-status", &cookie, "newStatus=2").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_form_values_are_rejected() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.post_form("/close-ticket", &cookie, "ticketId=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = h
        .post_form("/update-status", &cookie, "ticketId=7&newStatus=")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, _) = h.repo.ticket(7);
    assert_eq!(status, TicketStatus::Open);
}

#[tokio::test]
async fn test_close_unknown_ticket_is_404() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.post_form("/close-ticket", &cookie, "ticketId=999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Profile
// ============================================================================

#[tokio::test]
async fn test_profile_page_renders() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.get("/user/1", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("maija@example.com"));
}

#[tokio::test]
async fn test_unknown_profile_is_404() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h.get("/user/999", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_update_with_blank_password_keeps_hash() {
    let h = Harness::new();
    let cookie = h.sign_in();
    let before = h.repo.password_hash(1);

    let response = h
        .post_form(
            "/user/1",
            &cookie,
            "fullname=Maija+M&email=maija%40example.com&password=",
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/user/1");
    assert_eq!(h.repo.password_hash(1), before);

    let state = h.repo.state.lock().unwrap();
    assert_eq!(state.users[0].fullname, "Maija M");
}

#[tokio::test]
async fn test_profile_update_rehashes_new_password() {
    use platform::password::{ClearTextPassword, HashedPassword};

    let h = Harness::new();
    let cookie = h.sign_in();
    let before = h.repo.password_hash(1);

    let response = h
        .post_form(
            "/user/1",
            &cookie,
            "fullname=Maija&email=maija%40example.com&password=correct+horse+battery",
        )
        .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let after = h.repo.password_hash(1);
    assert_ne!(after, before);
    // Stored as a PHC string, never plaintext
    assert!(after.starts_with("$argon2"));
    assert!(!after.contains("correct horse battery"));

    let stored = HashedPassword::from_phc_string(&after).unwrap();
    let new_password = ClearTextPassword::for_verification("correct horse battery".to_string());
    let old_password = ClearTextPassword::for_verification("the old one".to_string());
    assert!(stored.verify(&new_password, None));
    assert!(!stored.verify(&old_password, None));
}

#[tokio::test]
async fn test_profile_update_requires_name_and_email() {
    let h = Harness::new();
    let cookie = h.sign_in();

    let response = h
        .post_form("/user/1", &cookie, "fullname=&email=maija%40example.com")
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = h.post_form("/user/1", &cookie, "fullname=Maija&email=").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
