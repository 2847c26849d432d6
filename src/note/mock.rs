//! In-process stand-in for the note.com API, used by tests
//!
//! Binds an axum server on 127.0.0.1:0 and records every request it sees.

use crate::config::NoteConfig;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, Response, StatusCode, Uri};
use axum::Router;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

pub const NOTE_ID: u64 = 4242;
pub const NOTE_KEY: &str = "abcd1234";
pub const SESSION_VALUE: &str = "mock-session";
pub const XSRF_VALUE: &str = "mock-xsrf";

/// How the mock answers draft_save
#[derive(Debug, Clone)]
pub enum DraftReply {
    /// JSON with `data.note_url`
    Url(String),
    /// JSON without `note_url`
    NoUrl,
    /// `text/html` body
    Html,
    /// `application/json` content type with a broken body
    BrokenJson,
}

#[derive(Debug, Clone)]
pub struct MockBehavior {
    pub sign_in_status: StatusCode,
    /// Answer sign-in with `302 Location: /landing`; `/landing` sets the session
    pub sign_in_redirect: bool,
    pub set_session_cookie: bool,
    pub set_xsrf_cookie: bool,
    pub create_status: StatusCode,
    pub publish_status: StatusCode,
    pub draft_status: StatusCode,
    pub draft_reply: DraftReply,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            sign_in_status: StatusCode::CREATED,
            sign_in_redirect: false,
            set_session_cookie: true,
            set_xsrf_cookie: true,
            create_status: StatusCode::CREATED,
            publish_status: StatusCode::OK,
            draft_status: StatusCode::CREATED,
            draft_reply: DraftReply::NoUrl,
        }
    }
}

/// One request as the mock received it
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub xsrf_header: Option<String>,
    pub cookie: Option<String>,
    pub user_agent: Option<String>,
    pub origin: Option<String>,
    pub body: String,
}

impl RecordedCall {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

struct MockState {
    behavior: MockBehavior,
    calls: Mutex<Vec<RecordedCall>>,
}

pub struct MockNoteApi {
    pub base: Url,
    state: Arc<MockState>,
}

impl MockNoteApi {
    pub async fn start(behavior: MockBehavior) -> Self {
        let state = Arc::new(MockState {
            behavior,
            calls: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base: Url::parse(&format!("http://{}", addr)).expect("mock base URL"),
            state,
        }
    }

    pub fn config(&self) -> NoteConfig {
        NoteConfig::new(self.base.clone(), Duration::from_secs(5))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().expect("calls lock").clone()
    }

    /// `METHOD /path` of every recorded call, in order
    pub fn call_log(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|c| format!("{} {}", c.method, c.path))
            .collect()
    }
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn json_response(status: StatusCode, body: Value) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
        .body(Body::from(body.to_string()))
        .expect("mock response")
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response<Body> {
    state.calls.lock().expect("calls lock").push(RecordedCall {
        method: method.clone(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        xsrf_header: header_string(&headers, "x-xsrf-token"),
        cookie: header_string(&headers, "cookie"),
        user_agent: header_string(&headers, "user-agent"),
        origin: header_string(&headers, "origin"),
        body,
    });

    let behavior = &state.behavior;
    let create_path = format!("/api/v1/text_notes/{}", NOTE_ID);

    match (method.as_str(), uri.path()) {
        ("POST", "/api/v1/sessions/sign_in") if behavior.sign_in_redirect => Response::builder()
            .status(StatusCode::FOUND)
            .header(header::LOCATION, "/landing")
            .body(Body::empty())
            .expect("mock response"),
        (_, "/landing") => Response::builder()
            .status(StatusCode::OK)
            .header(
                header::SET_COOKIE,
                format!("_note_session_v5={}; Path=/", SESSION_VALUE),
            )
            .body(Body::from("welcome"))
            .expect("mock response"),
        ("POST", "/api/v1/sessions/sign_in") => {
            let mut builder = Response::builder()
                .status(behavior.sign_in_status)
                .header(header::CONTENT_TYPE, "application/json");
            if behavior.set_session_cookie {
                builder = builder.header(
                    header::SET_COOKIE,
                    format!("_note_session_v5={}; Path=/; HttpOnly", SESSION_VALUE),
                );
            }
            if behavior.set_xsrf_cookie {
                builder = builder.header(
                    header::SET_COOKIE,
                    format!("XSRF-TOKEN={}; Path=/", XSRF_VALUE),
                );
            }
            builder
                .body(Body::from(json!({ "data": { "id": 1 } }).to_string()))
                .expect("mock response")
        }
        ("POST", "/api/v1/text_notes") => json_response(
            behavior.create_status,
            json!({ "data": { "id": NOTE_ID, "key": NOTE_KEY, "status": "draft" } }),
        ),
        ("PUT", path) if path == create_path => json_response(
            behavior.publish_status,
            json!({ "data": { "note_url": format!("https://note.com/mock/n/{}", NOTE_KEY) } }),
        ),
        ("POST", "/api/v1/text_notes/draft_save") => match &behavior.draft_reply {
            DraftReply::Url(url) => json_response(
                behavior.draft_status,
                json!({ "data": { "note_url": url } }),
            ),
            DraftReply::NoUrl => json_response(
                behavior.draft_status,
                json!({ "data": { "result": true } }),
            ),
            DraftReply::Html => Response::builder()
                .status(behavior.draft_status)
                .header(header::CONTENT_TYPE, "text/html")
                .body(Body::from("<html>saved</html>"))
                .expect("mock response"),
            DraftReply::BrokenJson => Response::builder()
                .status(behavior.draft_status)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"data\":"))
                .expect("mock response"),
        },
        _ => json_response(StatusCode::NOT_FOUND, json!({ "error": "not found" })),
    }
}
