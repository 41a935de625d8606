// 测试用的模拟后端
// 绑定到临时端口的 axum 服务，按路由计数命中次数，数据可被 PATCH 修改
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Form, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};

use fitfinder::AppState;
use fitfinder::config::Config;

#[derive(Clone, Default)]
pub struct Hits(Arc<Mutex<HashMap<String, usize>>>);

impl Hits {
    fn bump(&self, key: &str) {
        *self.0.lock().unwrap().entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, key: &str) -> usize {
        self.0.lock().unwrap().get(key).copied().unwrap_or(0)
    }
}

#[derive(Clone)]
pub struct MockState {
    pub hits: Hits,
    /// /user/me 的响应体，None 表示 401
    pub session: Arc<Mutex<Option<Value>>>,
    /// PowerHouse 健身房的步入状态，PATCH 会修改它
    pub walk_in: Arc<AtomicBool>,
    /// 打开后附近搜索一律 500
    pub fail_nearby: Arc<AtomicBool>,
    /// 记录联想端点收到的 input 参数
    pub autocomplete_inputs: Arc<Mutex<Vec<String>>>,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: MockState,
}

impl MockBackend {
    pub fn set_session(&self, user: Option<Value>) {
        *self.state.session.lock().unwrap() = user;
    }

    pub fn admin_session() -> Value {
        json!({
            "user_id": 1,
            "user_username": "admin",
            "user_email": "admin@fitfinder.my",
            "user_role": "admin"
        })
    }

    pub fn user_session() -> Value {
        json!({
            "user_id": 2,
            "user_username": "aiman",
            "user_email": "aiman@example.com",
            "user_role": "user"
        })
    }
}

pub async fn spawn() -> MockBackend {
    let state = MockState {
        hits: Hits::default(),
        session: Arc::new(Mutex::new(None)),
        walk_in: Arc::new(AtomicBool::new(true)),
        fail_nearby: Arc::new(AtomicBool::new(false)),
        autocomplete_inputs: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/user/me", get(me))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/places/autocomplete", get(autocomplete))
        .route("/places/geocode", get(geocode))
        .route("/places/nearby-gyms", get(nearby_gyms))
        .route("/places/gyms/{id}/walk-in", patch(update_walk_in))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend { addr, state }
}

/// 指向模拟后端的配置，窗口都调小让测试跑得快
pub fn test_config(addr: SocketAddr) -> Config {
    Config {
        api_base_url: format!("http://{}", addr),
        request_timeout_secs: 5,
        suggestion_min_chars: 2,
        suggestion_debounce_ms: 30,
        suggestion_hide_delay_ms: 40,
        default_radius_m: 1500,
        nearby_cache_ttl_secs: 300,
        session_cache_ttl_secs: 300,
    }
}

pub fn test_state(addr: SocketAddr) -> AppState {
    AppState::new(test_config(addr)).unwrap()
}

async fn me(State(state): State<MockState>) -> impl IntoResponse {
    state.hits.bump("me");
    match state.session.lock().unwrap().clone() {
        Some(user) => (StatusCode::OK, Json(user)),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Not authenticated"})),
        ),
    }
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(State(state): State<MockState>, Form(form): Form<LoginForm>) -> impl IntoResponse {
    state.hits.bump("login");
    if form.password == "secret" {
        (
            StatusCode::OK,
            Json(json!({
                "user_id": 1,
                "user_username": form.username,
                "user_email": "admin@fitfinder.my",
                "access_token": "token",
                "token_type": "bearer"
            })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "detail": [
                    {"loc": ["body", "user_password"], "msg": "Incorrect username or password", "type": "value_error"}
                ]
            })),
        )
    }
}

async fn logout(State(state): State<MockState>) -> StatusCode {
    state.hits.bump("logout");
    StatusCode::NO_CONTENT
}

async fn autocomplete(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.hits.bump("autocomplete");
    let input = params.get("input").cloned().unwrap_or_default();
    state.autocomplete_inputs.lock().unwrap().push(input.clone());

    if input.contains("offline") {
        return (
            StatusCode::BAD_GATEWAY,
            Json(json!({"detail": "places provider unavailable"})),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "predictions": [
                {
                    "placeId": "ChIJklcc",
                    "description": "Kuala Lumpur City Center, Kuala Lumpur, Malaysia",
                    "mainText": "Kuala Lumpur City Center",
                    "secondaryText": "Kuala Lumpur, Malaysia"
                },
                {
                    "placeId": "ChIJkualalumpur",
                    "description": format!("{}, Malaysia", input),
                    "mainText": input,
                    "secondaryText": "Malaysia"
                }
            ]
        })),
    )
}

async fn geocode(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.hits.bump("geocode");
    let address = params.get("address").cloned().unwrap_or_default();

    if address.contains("Nowhere") {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "No results for address"})),
        );
    }

    let (lat, lng) = if address.starts_with("Kuala Lumpur City Center") {
        (3.1573, 101.7116)
    } else {
        (3.1390, 101.6869)
    };

    (
        StatusCode::OK,
        Json(json!({
            "lat": lat,
            "lng": lng,
            "formatted_address": format!("{}, Malaysia", address)
        })),
    )
}

async fn nearby_gyms(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.hits.bump("nearby");

    if state.fail_nearby.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "Google API error"})),
        );
    }

    let lat: f64 = params
        .get("lat")
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    let lng: f64 = params
        .get("lng")
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();

    (
        StatusCode::OK,
        Json(json!({
            "places": [
                {
                    "id": "ChIJpowerhouse",
                    "displayName": "PowerHouse Fitness",
                    "formattedAddress": format!("123 Fitness Street ({}, {})", lat, lng),
                    "rating": 4.5,
                    "userRatingCount": 342,
                    "googleMapsUri": "https://maps.google.com/?q=PowerHouse+Fitness",
                    "websiteUri": "https://powerhousefitness.my",
                    "nationalPhoneNumber": "+60-12-345-6789",
                    "photos": [],
                    "walk_in": state.walk_in.load(Ordering::SeqCst)
                },
                {
                    "displayName": "Elite Gym & Spa",
                    "formattedAddress": "456 Health Avenue, Kuala Lumpur",
                    "rating": 0.0,
                    "userRatingCount": 0,
                    "googleMapsUri": "https://maps.google.com/?q=Elite+Gym+Spa",
                    "walk_in": true
                }
            ]
        })),
    )
}

async fn update_walk_in(
    State(state): State<MockState>,
    Path(place_id): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    state.hits.bump("walk_in");

    if place_id == "broken" {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"detail": "database error"})),
        );
    }

    let walk_in = body["walk_in"].as_bool().unwrap_or(true);
    state.walk_in.store(walk_in, Ordering::SeqCst);

    (
        StatusCode::OK,
        Json(json!({
            "id": 1,
            "places_id": place_id,
            "walk_in": walk_in
        })),
    )
}
