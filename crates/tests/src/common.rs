use api_client::ApiClient;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use shared_types::{AppError, AuthUser};
use std::sync::{Arc, Mutex};

/// Password the stub backend accepts for every fixture account.
pub const VALID_PASSWORD: &str = "correct-horse";

/// Who the stub backend considers signed in. Shared by every client of one
/// stub instance, since the native client does not carry cookies.
#[derive(Clone, Default)]
pub struct StubState {
    pub signed_in: Arc<Mutex<Option<AuthUser>>>,
}

pub fn facilitator() -> AuthUser {
    AuthUser {
        id: "u-100".into(),
        display_name: "Robin Ortiz".into(),
        email: "robin@example.org".into(),
        role: "facilitator".into(),
        avatar_url: None,
    }
}

pub fn case_studies() -> Value {
    json!([
        {
            "id": "cs-1",
            "title": "Jobs Plan",
            "description": "Finding a first part-time job",
            "content": "Maya worked with a job coach.\n\nShe now works weekends.",
            "tags": ["employment"],
            "media": { "kind": "video", "url": "https://media.example.org/maya.mp4" }
        },
        {
            "id": "cs-2",
            "title": "Home Life",
            "description": "Moving into supported housing",
            "content": "Alex learned to budget for groceries.",
            "tags": ["independent"]
        },
        {
            "id": "cs-3",
            "title": "Community Garden",
            "description": "Volunteering on Saturdays",
            "content": "A weekly commitment that built confidence at home and work."
        }
    ])
}

pub fn students() -> Value {
    json!([
        {
            "id": "s-1",
            "first_name": "Jordan",
            "last_name": "Lee",
            "school": "Westview High",
            "grade": 11,
            "domains": [
                { "domain": "employment", "completed_goals": 2, "total_goals": 4 },
                { "domain": "independent_living", "completed_goals": 1, "total_goals": 1 }
            ],
            "tags": ["employment"],
            "last_activity": "2026-09-30T14:00:00Z"
        },
        {
            "id": "s-2",
            "first_name": "Sam",
            "last_name": "Patel",
            "school": "Lakeside Academy",
            "domains": [
                { "domain": "astrology", "completed_goals": 0, "total_goals": 2 }
            ]
        }
    ])
}

pub fn alerts() -> Value {
    json!([
        {
            "id": "al-1",
            "student_id": "s-1",
            "student_name": "Jordan Lee",
            "severity": "warning",
            "title": "Plan review overdue",
            "created_at": "2026-09-01T09:00:00Z"
        },
        {
            "id": "al-2",
            "student_id": "s-2",
            "student_name": "Sam Patel",
            "severity": "critical",
            "title": "No goals in employment domain",
            "message": "Add at least one employment goal.",
            "created_at": "2026-09-20T09:00:00Z"
        },
        {
            "id": "al-3",
            "student_id": "s-1",
            "student_name": "Jordan Lee",
            "severity": "info",
            "title": "Consent form renewed",
            "created_at": "2026-08-15T09:00:00Z",
            "resolved": true
        }
    ])
}

fn learning_modules() -> Value {
    json!([
        {
            "id": "lm-1",
            "title": "Person-Centered Planning",
            "description": "Foundations for facilitators",
            "tags": ["planning"],
            "duration_minutes": 90
        }
    ])
}

fn plan_templates() -> Value {
    json!([
        {
            "id": "pt-1",
            "title": "First Job Plan",
            "description": "Template for employment goals",
            "tags": ["employment"],
            "domain": "employment"
        }
    ])
}

fn error(status: StatusCode, err: AppError) -> Response {
    (status, Json(err)).into_response()
}

fn find_by_id(collection: Value, id: &str) -> Option<Value> {
    collection
        .as_array()?
        .iter()
        .find(|item| item["id"] == id)
        .cloned()
}

async fn case_study(Path(id): Path<String>) -> Response {
    match find_by_id(case_studies(), &id) {
        Some(item) => Json(item).into_response(),
        None => error(StatusCode::NOT_FOUND, AppError::not_found(format!("case study {id} not found"))),
    }
}

async fn student(Path(id): Path<String>) -> Response {
    match find_by_id(students(), &id) {
        Some(mut item) => {
            item["notes"] = json!("Prefers morning meetings.\n\nUses a visual schedule.");
            Json(item).into_response()
        }
        None => error(StatusCode::NOT_FOUND, AppError::not_found(format!("student {id} not found"))),
    }
}

async fn me(State(state): State<StubState>) -> Response {
    let user = state.signed_in.lock().unwrap().clone();
    match user {
        Some(user) => Json(user).into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn login(State(state): State<StubState>, Json(body): Json<Value>) -> Response {
    if body["password"] != VALID_PASSWORD {
        return error(
            StatusCode::UNAUTHORIZED,
            AppError::unauthorized("Invalid email or password"),
        );
    }
    let mut user = facilitator();
    if let Some(email) = body["email"].as_str() {
        user.email = email.to_string();
    }
    *state.signed_in.lock().unwrap() = Some(user.clone());
    Json(user).into_response()
}

async fn logout(State(state): State<StubState>) -> StatusCode {
    *state.signed_in.lock().unwrap() = None;
    StatusCode::NO_CONTENT
}

/// Routes mirroring the REST surface the client talks to, plus a few
/// misbehaving endpoints for error mapping.
pub fn stub_router(state: StubState) -> Router {
    Router::new()
        .route("/api/case-studies", get(|| async { Json(case_studies()) }))
        .route("/api/case-studies/{id}", get(case_study))
        .route("/api/students", get(|| async { Json(students()) }))
        .route("/api/students/{id}", get(student))
        .route("/api/alerts", get(|| async { Json(alerts()) }))
        .route("/api/learning-modules", get(|| async { Json(learning_modules()) }))
        .route("/api/plan-templates", get(|| async { Json(plan_templates()) }))
        .route(
            "/api/dashboard/stats",
            get(|| async {
                Json(json!({
                    "total_students": 2,
                    "active_plans": 2,
                    "open_alerts": 2,
                    "completed_goals": 3
                }))
            }),
        )
        .route("/api/auth/me", get(me))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/empty", get(|| async { Json(json!([])) }))
        .route("/api/garbled", get(|| async { "<html>not json</html>" }))
        .route("/api/restricted", get(|| async { StatusCode::FORBIDDEN }))
        .route("/api/exploding", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/api/gateway", get(|| async { StatusCode::BAD_GATEWAY }))
        .with_state(state)
}

/// Serve the stub backend on an ephemeral localhost port and return a
/// client pointed at it together with the shared state.
pub async fn spawn_backend() -> (ApiClient, StubState) {
    let state = StubState::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Failed to read stub address");
    let router = stub_router(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub backend crashed");
    });
    (ApiClient::new(format!("http://{addr}")), state)
}
