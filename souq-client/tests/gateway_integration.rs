//! Gateway integration tests against an in-process service fixture.
//!
//! The fixture is a small axum router emulating the remote service's wire
//! contract: JSON bodies, a cookie-based session credential, and error
//! responses carrying a `message` field.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;

use shared::client::{Ack, ListQuery, LoginRequest, RegisterRequest, RespondRequest, SessionResponse};
use shared::models::{Notification, Shortage, ShortageCreate, ShortageResponse, StoreInfo, Unit};
use souq_client::{ApiClient, ClientConfig, ClientError};

const SESSION_COOKIE: &str = "session=tok-1";
const BAD_LOGIN_MESSAGE: &str = "اسم المستخدم أو كلمة المرور غير صحيحة";

struct ServiceState {
    shortages: Mutex<Vec<Shortage>>,
    notifications: Mutex<Vec<Notification>>,
    unread_hits: AtomicUsize,
    fail_shortages: AtomicBool,
}

impl ServiceState {
    fn seeded() -> Self {
        let shortages = vec![
            Shortage {
                id: 1,
                product_name: "أرز".to_string(),
                quantity: 50.0,
                unit: Unit::Kilogram,
                notes: None,
                store_id: 5,
                store_name: "متجر البركة".to_string(),
                timestamp: Utc::now(),
                is_fulfilled: false,
                responses: vec![],
            },
            Shortage {
                id: 2,
                product_name: "زيت زيتون".to_string(),
                quantity: 12.0,
                unit: Unit::Liter,
                notes: Some("تعبئة صغيرة".to_string()),
                store_id: 9,
                store_name: "سوق المدينة".to_string(),
                timestamp: Utc::now(),
                is_fulfilled: false,
                responses: vec![],
            },
        ];
        let notifications = vec![
            Notification {
                id: 1,
                message: "رد جديد على نقص الأرز".to_string(),
                timestamp: Utc::now(),
                is_read: false,
            },
            Notification {
                id: 2,
                message: "تم تلبية نقص السكر".to_string(),
                timestamp: Utc::now(),
                is_read: true,
            },
        ];

        Self {
            shortages: Mutex::new(shortages),
            notifications: Mutex::new(notifications),
            unread_hits: AtomicUsize::new(0),
            fail_shortages: AtomicBool::new(false),
        }
    }
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|cookies| cookies.contains(SESSION_COOKIE))
}

fn current_store() -> StoreInfo {
    StoreInfo {
        id: 5,
        username: "متجر البركة".to_string(),
    }
}

async fn login(Json(request): Json<LoginRequest>) -> impl IntoResponse {
    if request.username == "baraka" && request.password == "secret" {
        (
            StatusCode::OK,
            [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/"))],
            Json(json!({ "success": true, "store": current_store() })),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": BAD_LOGIN_MESSAGE })),
        )
            .into_response()
    }
}

async fn logout() -> Json<Ack> {
    Json(Ack {
        success: true,
        message: None,
    })
}

async fn check_session(headers: HeaderMap) -> Json<SessionResponse> {
    if has_session(&headers) {
        Json(SessionResponse {
            logged_in: true,
            store: Some(current_store()),
        })
    } else {
        Json(SessionResponse {
            logged_in: false,
            store: None,
        })
    }
}

async fn register(Json(request): Json<RegisterRequest>) -> impl IntoResponse {
    if request.username == "baraka" {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "message": "اسم المستخدم مستخدم بالفعل" })),
        )
            .into_response();
    }

    Json(json!({
        "store": StoreInfo {
            id: 11,
            username: request.username,
        }
    }))
    .into_response()
}

async fn list_shortages(
    State(state): State<Arc<ServiceState>>,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    if state.fail_shortages.load(Ordering::SeqCst) {
        // Deliberately no `message` field.
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    if !has_session(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "يجب تسجيل الدخول" })),
        )
            .into_response();
    }
    let mut shortages = state.shortages.lock().unwrap().clone();
    if let Some(limit) = query.limit {
        shortages.truncate(limit as usize);
    }
    Json(json!({ "shortages": shortages })).into_response()
}

async fn list_my_shortages(
    State(state): State<Arc<ServiceState>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !has_session(&headers) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "يجب تسجيل الدخول" })),
        )
            .into_response();
    }
    let mine: Vec<Shortage> = state
        .shortages
        .lock()
        .unwrap()
        .iter()
        .filter(|s| s.store_id == current_store().id)
        .cloned()
        .collect();
    Json(json!({ "shortages": mine })).into_response()
}

async fn create_shortage(
    State(state): State<Arc<ServiceState>>,
    Json(payload): Json<ShortageCreate>,
) -> impl IntoResponse {
    if payload.product_name.trim().is_empty() || payload.quantity <= 0.0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "بيانات النقص غير صالحة" })),
        )
            .into_response();
    }

    let mut shortages = state.shortages.lock().unwrap();
    let created = Shortage {
        id: shortages.iter().map(|s| s.id).max().unwrap_or(0) + 1,
        product_name: payload.product_name,
        quantity: payload.quantity,
        unit: payload.unit,
        notes: payload.notes,
        store_id: current_store().id,
        store_name: current_store().username,
        timestamp: Utc::now(),
        is_fulfilled: false,
        responses: vec![],
    };
    shortages.push(created.clone());
    Json(created).into_response()
}

async fn respond(
    State(state): State<Arc<ServiceState>>,
    Path(id): Path<i64>,
    Json(request): Json<RespondRequest>,
) -> impl IntoResponse {
    if request.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "الرسالة فارغة" })),
        )
            .into_response();
    }

    let mut shortages = state.shortages.lock().unwrap();
    let Some(shortage) = shortages.iter_mut().find(|s| s.id == id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "النقص غير موجود" })),
        )
            .into_response();
    };

    let response_id = shortage.responses.len() as i64 + 1;
    shortage.responses.push(ShortageResponse {
        id: response_id,
        store_id: 9,
        store_name: "سوق المدينة".to_string(),
        message: request.message,
        timestamp: Utc::now(),
    });

    Json(Ack {
        success: true,
        message: None,
    })
    .into_response()
}

async fn list_notifications(State(state): State<Arc<ServiceState>>) -> impl IntoResponse {
    let notifications = state.notifications.lock().unwrap().clone();
    Json(json!({ "notifications": notifications }))
}

async fn mark_read(
    State(state): State<Arc<ServiceState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let mut notifications = state.notifications.lock().unwrap();
    match notifications.iter_mut().find(|n| n.id == id) {
        Some(notification) => {
            notification.is_read = true;
            Json(Ack {
                success: true,
                message: None,
            })
            .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "الإشعار غير موجود" })),
        )
            .into_response(),
    }
}

async fn unread_count(State(state): State<Arc<ServiceState>>) -> impl IntoResponse {
    state.unread_hits.fetch_add(1, Ordering::SeqCst);
    let count = state
        .notifications
        .lock()
        .unwrap()
        .iter()
        .filter(|n| !n.is_read)
        .count();
    Json(json!({ "count": count }))
}

async fn spawn_service() -> (ApiClient, Arc<ServiceState>) {
    let state = Arc::new(ServiceState::seeded());

    let app = Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/check-session", get(check_session))
        .route("/register", post(register))
        .route("/shortages", get(list_shortages).post(create_shortage))
        .route("/shortages/{id}/respond", post(respond))
        .route("/my-shortages", get(list_my_shortages))
        .route("/notifications", get(list_notifications))
        .route("/notifications/{id}/read", post(mark_read))
        .route("/notifications/unread-count", get(unread_count))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ClientConfig::new(format!("http://{addr}")).build_client();
    (client, state)
}

#[tokio::test]
async fn test_login_failure_surfaces_server_message() {
    let (client, _state) = spawn_service().await;

    let err = client.login("baraka", "wrong").await.unwrap_err();
    match &err {
        ClientError::Server { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, BAD_LOGIN_MESSAGE);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.message(), BAD_LOGIN_MESSAGE);
}

#[tokio::test]
async fn test_missing_message_field_falls_back() {
    let (client, state) = spawn_service().await;
    state.fail_shortages.store(true, Ordering::SeqCst);

    let err = client.shortages(None).await.unwrap_err();
    assert_eq!(err.message(), "server error");
}

#[tokio::test]
async fn test_session_cookie_carries_across_requests() {
    let (client, _state) = spawn_service().await;

    // Anonymous at first.
    let session = client.check_session().await.unwrap();
    assert!(!session.logged_in);
    assert!(client.shortages(None).await.is_err());

    let store = client.login("baraka", "secret").await.unwrap();
    assert_eq!(store.id, 5);

    // The cookie set by login now rides along automatically.
    let session = client.check_session().await.unwrap();
    assert!(session.logged_in);
    assert_eq!(session.store.unwrap().id, 5);

    let shortages = client.shortages(None).await.unwrap();
    assert_eq!(shortages.len(), 2);
}

#[tokio::test]
async fn test_register_new_store() {
    let (client, _state) = spawn_service().await;

    let created = client
        .register(&RegisterRequest {
            username: "nour".to_string(),
            password: "secret".to_string(),
            store_name: "متجر النور".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.store.id, 11);
    assert_eq!(created.store.username, "nour");

    // A taken username surfaces the server's message.
    let err = client
        .register(&RegisterRequest {
            username: "baraka".to_string(),
            password: "secret".to_string(),
            store_name: "متجر البركة".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.message(), "اسم المستخدم مستخدم بالفعل");
}

#[tokio::test]
async fn test_shortage_list_query_params() {
    let (client, _state) = spawn_service().await;
    client.login("baraka", "secret").await.unwrap();

    let limited = client
        .shortages(Some(ListQuery {
            limit: Some(1),
            offset: None,
        }))
        .await
        .unwrap();
    assert_eq!(limited.len(), 1);
}

#[tokio::test]
async fn test_my_shortages_returns_only_owned_records() {
    let (client, _state) = spawn_service().await;
    client.login("baraka", "secret").await.unwrap();

    let mine = client.my_shortages(None).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert!(mine.iter().all(|s| s.store_id == 5));
}

#[tokio::test]
async fn test_create_shortage_roundtrip() {
    let (client, _state) = spawn_service().await;
    client.login("baraka", "secret").await.unwrap();

    let created = client
        .create_shortage(&ShortageCreate {
            product_name: "سكر".to_string(),
            quantity: 25.0,
            unit: Unit::Bag,
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 3);
    assert_eq!(created.unit, Unit::Bag);

    let all = client.shortages(None).await.unwrap();
    assert!(all.iter().any(|s| s.id == created.id));
}

#[tokio::test]
async fn test_respond_then_refetch_shows_response() {
    let (client, _state) = spawn_service().await;
    client.login("baraka", "secret").await.unwrap();

    let ack = client.respond_to_shortage(1, "متوفر غدًا").await.unwrap();
    assert!(ack.success);

    let all = client.shortages(None).await.unwrap();
    let shortage = all.iter().find(|s| s.id == 1).unwrap();
    assert_eq!(shortage.responses.len(), 1);
    assert_eq!(shortage.responses[0].message, "متوفر غدًا");
}

#[tokio::test]
async fn test_mark_read_then_refetch_shows_read() {
    let (client, _state) = spawn_service().await;

    client.mark_notification_read(1).await.unwrap();

    let notifications = client.notifications(None).await.unwrap();
    let marked = notifications.iter().find(|n| n.id == 1).unwrap();
    assert!(marked.is_read);

    assert_eq!(client.unread_count().await.unwrap(), 0);
}
