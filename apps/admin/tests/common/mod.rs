//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - An in-memory stub of the CMS REST API, served on an ephemeral port
//! - Helpers for building admin clients against it
//! - Access to the stub's stored records for assertions

#![allow(dead_code)]

pub mod fixtures;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use lingua_admin::config::{Config, Credentials};
use lingua_admin::AdminClient;

pub const ADMIN_EMAIL: &str = "admin@lingua.test";
pub const ADMIN_PASSWORD: &str = "correct horse";

/// Records held by the stub.
#[derive(Default)]
pub struct Backend {
    next_id: i64,
    access_tokens: HashSet<String>,
    refresh_tokens: HashSet<String>,
    pub languages: Vec<Value>,
    pub vocabulary: HashMap<i64, Vec<Value>>,
    pub modules: Vec<Value>,
    pub lessons: Vec<Value>,
    pub exercises: Vec<Value>,
    /// (file name, content type, size)
    pub uploads: Vec<(String, String, usize)>,
    /// "METHOD /path" of every request, in arrival order.
    pub requests: Vec<String>,
}

impl Backend {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn issue_access_token(&mut self) -> String {
        let token = Uuid::new_v4().to_string();
        self.access_tokens.insert(token.clone());
        token
    }

    fn collection(&mut self, kind: Kind) -> &mut Vec<Value> {
        match kind {
            Kind::Modules => &mut self.modules,
            Kind::Lessons => &mut self.lessons,
            Kind::Exercises => &mut self.exercises,
        }
    }
}

#[derive(Clone, Copy)]
enum Kind {
    Modules,
    Lessons,
    Exercises,
}

/// Shared handle to the stub's records.
#[derive(Clone, Default)]
pub struct Stub {
    inner: Arc<Mutex<Backend>>,
}

impl Stub {
    /// Run a closure against the stored records.
    pub fn with<R>(&self, f: impl FnOnce(&mut Backend) -> R) -> R {
        f(&mut self.inner.lock().unwrap())
    }

    pub fn requests(&self) -> Vec<String> {
        self.with(|b| b.requests.clone())
    }

    pub fn clear_requests(&self) {
        self.with(|b| b.requests.clear())
    }

    /// Store a record as the server would, assigning an id.
    pub fn seed_language(&self, language: Value) -> i64 {
        self.with(|b| {
            let id = b.next_id();
            b.languages.push(with_id(language, id));
            id
        })
    }

    pub fn seed_module(&self, module: Value) -> i64 {
        self.seed(Kind::Modules, module)
    }

    pub fn seed_lesson(&self, lesson: Value) -> i64 {
        self.seed(Kind::Lessons, lesson)
    }

    pub fn seed_exercise(&self, exercise: Value) -> i64 {
        self.seed(Kind::Exercises, exercise)
    }

    pub fn seed_word(&self, language_id: i64, item: Value) {
        self.with(|b| b.vocabulary.entry(language_id).or_default().push(item))
    }

    pub fn exercise(&self, id: i64) -> Option<Value> {
        self.with(|b| find_by_id(&b.exercises, id).cloned())
    }

    pub fn language(&self, id: i64) -> Option<Value> {
        self.with(|b| find_by_id(&b.languages, id).cloned())
    }

    fn seed(&self, kind: Kind, record: Value) -> i64 {
        self.with(|b| {
            let id = b.next_id();
            b.collection(kind).push(with_id(record, id));
            id
        })
    }
}

/// Running stub server.
pub struct TestServer {
    pub base_url: String,
    pub stub: Stub,
}

impl TestServer {
    /// Start the stub on 127.0.0.1 with an OS-assigned port.
    pub async fn spawn() -> Self {
        let stub = Stub::default();
        let app = build_router(stub.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            stub,
        }
    }

    pub fn config(&self) -> Config {
        Config::new(self.base_url.clone())
    }

    pub fn config_with_credentials(&self, email: &str, password: &str) -> Config {
        let mut config = self.config();
        config.credentials = Some(Credentials {
            email: email.to_string(),
            password: password.to_string(),
        });
        config
    }

    /// Client with no session.
    pub fn admin(&self) -> AdminClient {
        AdminClient::new(self.config()).expect("Failed to build admin client")
    }

    /// Client logged in as the stub's administrator.
    pub async fn logged_in(&self) -> AdminClient {
        let admin = self.admin();
        admin
            .auth
            .login(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("Failed to log in");
        admin
    }
}

fn build_router(stub: Stub) -> Router {
    let protected = Router::new()
        .route("/api/auth/logout", post(logout))
        .route("/api/users/profile", get(profile))
        .route("/api/languages", get(list_languages).post(create_language))
        .route(
            "/api/languages/:id",
            patch(update_language).delete(delete_language),
        )
        .route(
            "/api/languages/:id/vocabulary",
            get(list_words).post(add_word).delete(delete_word),
        )
        .route("/api/files/upload", post(upload));

    let protected = learning_routes(protected, "/api/learning/modules", Kind::Modules);
    let protected = learning_routes(protected, "/api/learning/lessons", Kind::Lessons);
    let protected = learning_routes(protected, "/api/learning/exercises", Kind::Exercises)
        .layer(middleware::from_fn_with_state(stub.clone(), require_auth));

    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh", post(refresh))
        .merge(protected)
        .layer(middleware::from_fn_with_state(stub.clone(), record_request))
        .with_state(stub)
}

fn learning_routes(router: Router<Stub>, base: &str, kind: Kind) -> Router<Stub> {
    router
        .route(
            base,
            get(
                move |State(stub): State<Stub>, Query(query): Query<HashMap<String, String>>| async move {
                    list_learning(&stub, kind, &query)
                },
            )
            .put(
                move |State(stub): State<Stub>, Json(body): Json<Value>| async move {
                    create_learning(&stub, kind, body)
                },
            ),
        )
        .route(
            &format!("{}/:id", base),
            patch(
                move |State(stub): State<Stub>, Path(id): Path<i64>, Json(body): Json<Value>| async move {
                    update_learning(&stub, kind, id, body)
                },
            )
            .delete(move |State(stub): State<Stub>, Path(id): Path<i64>| async move {
                delete_learning(&stub, kind, id)
            }),
        )
}

/// Create an Authorization header value from a token.
pub fn auth_header_value(token: &str) -> String {
    format!("Bearer {}", token)
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn with_id(mut record: Value, id: i64) -> Value {
    if let Some(obj) = record.as_object_mut() {
        obj.insert("id".to_string(), json!(id));
    }
    record
}

fn find_by_id(items: &[Value], id: i64) -> Option<&Value> {
    items.iter().find(|item| item["id"] == json!(id))
}

fn field_matches(item: &Value, key: &str, expected: &str) -> bool {
    match item.get(key) {
        Some(Value::String(s)) => s == expected,
        Some(other) => other.to_string() == expected,
        None => false,
    }
}

fn merge(target: &mut Value, patch: Value) {
    if let (Some(target), Value::Object(patch)) = (target.as_object_mut(), patch) {
        for (key, value) in patch {
            if key != "id" {
                target.insert(key, value);
            }
        }
    }
}

fn refresh_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().strip_prefix("refresh_token="))
        .map(str::to_string)
        .next()
}

async fn record_request(State(stub): State<Stub>, req: Request, next: Next) -> Response {
    stub.with(|b| {
        b.requests
            .push(format!("{} {}", req.method(), req.uri().path()))
    });
    next.run(req).await
}

async fn require_auth(State(stub): State<Stub>, req: Request, next: Next) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string);

    let valid = token.is_some_and(|t| stub.with(|b| b.access_tokens.contains(&t)));
    if !valid {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    next.run(req).await
}

async fn login(State(stub): State<Stub>, Json(body): Json<Value>) -> Response {
    if body["email"] != ADMIN_EMAIL || body["password"] != ADMIN_PASSWORD {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }

    let (access, refresh) = stub.with(|b| {
        let refresh = Uuid::new_v4().to_string();
        b.refresh_tokens.insert(refresh.clone());
        (b.issue_access_token(), refresh)
    });

    let cookie = format!("refresh_token={}; Path=/api; HttpOnly", refresh);
    (
        [(header::SET_COOKIE, cookie)],
        Json(json!({ "access_token": access })),
    )
        .into_response()
}

async fn refresh(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    let token = refresh_cookie(&headers)
        .and_then(|cookie| stub.with(|b| b.refresh_tokens.contains(&cookie).then(|| b.issue_access_token())));

    match token {
        Some(access) => Json(json!({ "access_token": access })).into_response(),
        None => error(StatusCode::UNAUTHORIZED, "Refresh token missing or expired"),
    }
}

async fn logout(State(stub): State<Stub>) -> Response {
    stub.with(|b| {
        b.refresh_tokens.clear();
        b.access_tokens.clear();
    });
    Json(json!({})).into_response()
}

async fn profile() -> Response {
    Json(json!({
        "id": 1,
        "email": ADMIN_EMAIL,
        "name": "Admin",
        "role": "admin"
    }))
    .into_response()
}

async fn list_languages(State(stub): State<Stub>) -> Response {
    Json(stub.with(|b| b.languages.clone())).into_response()
}

async fn create_language(State(stub): State<Stub>, Json(body): Json<Value>) -> Response {
    if body["code"].as_str().map_or(true, str::is_empty) {
        return error(StatusCode::BAD_REQUEST, "code should not be empty");
    }
    let created = stub.with(|b| {
        let id = b.next_id();
        let record = with_id(body, id);
        b.languages.push(record.clone());
        record
    });
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn update_language(
    State(stub): State<Stub>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let updated = stub.with(|b| {
        let record = b.languages.iter_mut().find(|l| l["id"] == json!(id))?;
        merge(record, body);
        Some(record.clone())
    });
    match updated {
        Some(record) => Json(record).into_response(),
        None => error(StatusCode::NOT_FOUND, "Language not found"),
    }
}

async fn delete_language(State(stub): State<Stub>, Path(id): Path<i64>) -> Response {
    let removed = stub.with(|b| {
        let before = b.languages.len();
        b.languages.retain(|l| l["id"] != json!(id));
        b.vocabulary.remove(&id);
        b.languages.len() < before
    });
    if removed {
        StatusCode::NO_CONTENT.into_response()
    } else {
        error(StatusCode::NOT_FOUND, "Language not found")
    }
}

async fn list_words(State(stub): State<Stub>, Path(id): Path<i64>) -> Response {
    Json(stub.with(|b| b.vocabulary.get(&id).cloned().unwrap_or_default())).into_response()
}

async fn add_word(
    State(stub): State<Stub>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let added = stub.with(|b| {
        let words = b.vocabulary.entry(id).or_default();
        if words.iter().any(|w| w["word"] == body["word"]) {
            return false;
        }
        words.push(body);
        true
    });
    if added {
        (StatusCode::CREATED, Json(json!({}))).into_response()
    } else {
        error(StatusCode::CONFLICT, "Word already exists")
    }
}

async fn delete_word(
    State(stub): State<Stub>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let removed = stub.with(|b| {
        let Some(words) = b.vocabulary.get_mut(&id) else {
            return false;
        };
        let before = words.len();
        words.retain(|w| w["word"] != body["word"]);
        words.len() < before
    });
    if removed {
        Json(json!({})).into_response()
    } else {
        error(StatusCode::NOT_FOUND, "Word not found")
    }
}

fn list_learning(stub: &Stub, kind: Kind, query: &HashMap<String, String>) -> Response {
    let items: Vec<Value> = stub.with(|b| {
        b.collection(kind)
            .iter()
            .filter(|item| query.iter().all(|(k, v)| field_matches(item, k, v)))
            .cloned()
            .collect()
    });
    Json(items).into_response()
}

fn create_learning(stub: &Stub, kind: Kind, body: Value) -> Response {
    let created = stub.with(|b| {
        let id = b.next_id();
        let record = with_id(body, id);
        b.collection(kind).push(record.clone());
        record
    });
    (StatusCode::CREATED, Json(created)).into_response()
}

fn update_learning(stub: &Stub, kind: Kind, id: i64, body: Value) -> Response {
    let updated = stub.with(|b| {
        let record = b.collection(kind).iter_mut().find(|r| r["id"] == json!(id))?;
        merge(record, body);
        Some(record.clone())
    });
    match updated {
        Some(record) => Json(record).into_response(),
        None => error(StatusCode::NOT_FOUND, "Not found"),
    }
}

fn delete_learning(stub: &Stub, kind: Kind, id: i64) -> Response {
    let removed = stub.with(|b| {
        let items = b.collection(kind);
        let before = items.len();
        items.retain(|r| r["id"] != json!(id));
        items.len() < before
    });
    if removed {
        StatusCode::NO_CONTENT.into_response()
    } else {
        error(StatusCode::NOT_FOUND, "Not found")
    }
}

async fn upload(State(stub): State<Stub>, mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or("blob").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let Ok(bytes) = field.bytes().await else {
            return error(StatusCode::BAD_REQUEST, "Unreadable file");
        };

        stub.with(|b| b.uploads.push((name.clone(), content_type, bytes.len())));
        return (
            StatusCode::CREATED,
            Json(json!({ "url": format!("/uploads/{}", name) })),
        )
            .into_response();
    }
    error(StatusCode::BAD_REQUEST, "file is required")
}
