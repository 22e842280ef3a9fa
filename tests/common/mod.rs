//! Helpers compartidos por los tests de integración: una API de Amadeus
//! simulada servida con axum en un puerto efímero y utilidades para llamar
//! al router de la aplicación.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use travelsphere::config::EnvironmentConfig;
use travelsphere::state::AppState;
use travelsphere::utils::Metrics;

pub const CLIENT_ID: &str = "test-client-id";
pub const CLIENT_SECRET: &str = "test-client-secret";
const ACCESS_TOKEN: &str = "mock-access-token";

/// API de Amadeus simulada
#[derive(Clone)]
pub struct MockAmadeus {
    pub token_calls: Arc<AtomicUsize>,
    pub offer_calls: Arc<AtomicUsize>,
    pub last_departure_date: Arc<Mutex<Option<String>>>,
    offers_status: Arc<Mutex<StatusCode>>,
    total: Arc<Mutex<String>>,
    token_body: Arc<Mutex<Option<String>>>,
}

impl MockAmadeus {
    pub async fn start() -> (Self, String) {
        let mock = Self {
            token_calls: Arc::new(AtomicUsize::new(0)),
            offer_calls: Arc::new(AtomicUsize::new(0)),
            last_departure_date: Arc::new(Mutex::new(None)),
            offers_status: Arc::new(Mutex::new(StatusCode::OK)),
            total: Arc::new(Mutex::new("5271.00".to_string())),
            token_body: Arc::new(Mutex::new(None)),
        };

        let router = Router::new()
            .route("/v1/security/oauth2/token", post(token))
            .route("/v2/shopping/flight-offers", get(flight_offers))
            .with_state(mock.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        (mock, format!("http://{}", addr))
    }

    pub fn set_offers_status(&self, status: StatusCode) {
        *self.offers_status.lock().unwrap() = status;
    }

    pub fn set_total(&self, total: &str) {
        *self.total.lock().unwrap() = total.to_string();
    }

    /// Cuerpo literal (200) que devolverá el endpoint de token
    pub fn set_token_body(&self, body: &str) {
        *self.token_body.lock().unwrap() = Some(body.to_string());
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn offer_calls(&self) -> usize {
        self.offer_calls.load(Ordering::SeqCst)
    }
}

async fn token(State(mock): State<MockAmadeus>, Form(form): Form<HashMap<String, String>>) -> Response {
    mock.token_calls.fetch_add(1, Ordering::SeqCst);

    let valid = form.get("grant_type").map(String::as_str) == Some("client_credentials")
        && form.get("client_id").map(String::as_str) == Some(CLIENT_ID)
        && form.get("client_secret").map(String::as_str) == Some(CLIENT_SECRET);
    if !valid {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid_client", "code": 38187 })),
        )
            .into_response();
    }

    if let Some(body) = mock.token_body.lock().unwrap().clone() {
        return ([(header::CONTENT_TYPE, "application/json")], body).into_response();
    }

    Json(json!({
        "type": "amadeusOAuth2Token",
        "access_token": ACCESS_TOKEN,
        "expires_in": 1799,
        "state": "approved"
    }))
    .into_response()
}

async fn flight_offers(
    State(mock): State<MockAmadeus>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    mock.offer_calls.fetch_add(1, Ordering::SeqCst);

    let expected = format!("Bearer {}", ACCESS_TOKEN);
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return (StatusCode::UNAUTHORIZED, "invalid access token").into_response();
    }

    *mock.last_departure_date.lock().unwrap() = params.get("departureDate").cloned();

    let status = *mock.offers_status.lock().unwrap();
    if !status.is_success() {
        return (status, "upstream exploded").into_response();
    }

    let total = mock.total.lock().unwrap().clone();
    Json(json!({
        "meta": { "count": 1 },
        "data": [{
            "type": "flight-offer",
            "id": "1",
            "price": { "currency": "INR", "total": total, "base": "4500.00" }
        }]
    }))
    .into_response()
}

pub fn config_for(base_url: &str, with_credentials: bool) -> EnvironmentConfig {
    EnvironmentConfig {
        amadeus_base_url: base_url.to_string(),
        amadeus_client_id: with_credentials.then(|| CLIENT_ID.to_string()),
        amadeus_client_secret: with_credentials.then(|| CLIENT_SECRET.to_string()),
        upstream_timeout_seconds: 5,
        ..EnvironmentConfig::default()
    }
}

pub fn create_test_app(config: EnvironmentConfig) -> Router {
    let state = AppState::with_amadeus(config, Metrics::new().unwrap()).unwrap();
    travelsphere::create_app(state)
}

/// GET contra el router; devuelve status y cuerpo
pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}
