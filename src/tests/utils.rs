use crate::chat::{ChatAssistant, ChatError};
use crate::db::connection::{init_db, Database};
use crate::db::sales::insert_sales_records;
use crate::domain::chat::ChatMessage;
use crate::domain::record::SaleRecord;
use crate::logging;
use crate::router::{handle, App};
use astra::{Body, Response};
use chrono::{Duration, Local, NaiveDateTime};
use http::{Method, Request};
use std::io::Read;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

pub const PASSWORD: &str = "sesame";

/// What the fake assistant saw on its last call.
#[derive(Debug, Clone, Default)]
pub struct SeenCall {
    pub context: String,
    pub history: Vec<ChatMessage>,
    pub question: String,
}

/// Canned assistant: returns `reply` or fails with `ApiError(reply)`.
pub struct FakeAssistant {
    reply: Result<String, String>,
    seen: Arc<Mutex<Option<SeenCall>>>,
}

impl FakeAssistant {
    pub fn replying(text: &str) -> (Self, Arc<Mutex<Option<SeenCall>>>) {
        Self::new(Ok(text.to_string()))
    }

    pub fn failing(message: &str) -> (Self, Arc<Mutex<Option<SeenCall>>>) {
        Self::new(Err(message.to_string()))
    }

    fn new(reply: Result<String, String>) -> (Self, Arc<Mutex<Option<SeenCall>>>) {
        let seen = Arc::new(Mutex::new(None));
        (
            Self {
                reply,
                seen: Arc::clone(&seen),
            },
            seen,
        )
    }
}

impl ChatAssistant for FakeAssistant {
    fn reply(
        &self,
        context: &str,
        history: &[ChatMessage],
        question: &str,
    ) -> Result<String, ChatError> {
        *self.seen.lock().unwrap() = Some(SeenCall {
            context: context.to_string(),
            history: history.to_vec(),
            question: question.to_string(),
        });
        self.reply.clone().map_err(ChatError::ApiError)
    }
}

/// Fresh database from the production schema. Keep the `TempDir` alive for
/// the duration of the test.
pub fn init_test_db() -> (Database, TempDir) {
    logging::init_test();
    let dir = tempfile::tempdir().expect("create temp dir");
    let db = Database::new(dir.path().join("test.sqlite3").display().to_string());
    init_db(&db, "sql/schema.sql").unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    (db, dir)
}

pub fn test_app(assistant: FakeAssistant) -> (App, TempDir) {
    let (db, dir) = init_test_db();
    let app = App {
        db,
        chat_password: PASSWORD.to_string(),
        assistant: Box::new(assistant),
    };
    (app, dir)
}

pub fn seed(app: &App, records: &[SaleRecord]) {
    app.db
        .with_conn(|conn| insert_sales_records(conn, records))
        .expect("seed records");
}

/// Noon, `days` days before today (local time).
pub fn days_ago(days: i64) -> NaiveDateTime {
    (Local::now().date_naive() - Duration::days(days))
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn sale(phone: &str, name: &str, days: i64, price: Option<f64>) -> SaleRecord {
    SaleRecord {
        buyer_phone: Some(phone.to_string()),
        buyer_name: Some(name.to_string()),
        product_name: Some("ทุเรียนหมอนทอง".to_string()),
        quantity: Some(1.0),
        price,
        seller_name: Some("Nid".to_string()),
        ..SaleRecord::new(days_ago(days))
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str, session: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("chat_session={token}"));
    }
    builder.body(Body::from(body.as_bytes().to_vec())).unwrap()
}

pub fn with_session(mut req: Request<Body>, token: &str) -> Request<Body> {
    req.headers_mut().insert(
        "Cookie",
        format!("chat_session={token}").parse().unwrap(),
    );
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Unlocks the chat and returns the session token from the cookie.
pub fn unlock(app: &App) -> String {
    let resp = handle(post_form("/chat/unlock", &format!("password={PASSWORD}"), None), app)
        .expect("unlock handler failed");
    assert_eq!(resp.status(), 302);

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .expect("session cookie");
    cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("chat_session="))
        .expect("chat_session cookie")
        .to_string()
}
