//! HTTP gateway for network calls to the shortage-exchange service
//!
//! Single choke point for all shortage/response/notification/session calls.
//! Failures are logged once here; callers only need to match on the error.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::SERVER_ERROR_FALLBACK;
use crate::{ClientConfig, ClientError, ClientResult};
use shared::client::{
    Ack, ListQuery, LoginRequest, LoginResponse, NotificationListResponse, RegisterRequest,
    RespondRequest, SessionResponse, ShortageListResponse, StoreCreated, UnreadCountResponse,
};
use shared::models::{Notification, Shortage, ShortageCreate, StoreInfo};

/// HTTP gateway to the shortage-exchange service.
///
/// Holds one cookie-enabled HTTP client; the session cookie set by `login`
/// rides along on every subsequent request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| Self::transport_error(endpoint, e))?;
        Self::handle_response(endpoint, response).await
    }

    /// Make a GET request with optional query parameters
    async fn get_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Option<ListQuery>,
    ) -> ClientResult<T> {
        let mut request = self.client.get(self.url(endpoint));
        if let Some(query) = query {
            request = request.query(&query);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Self::transport_error(endpoint, e))?;
        Self::handle_response(endpoint, response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| Self::transport_error(endpoint, e))?;
        Self::handle_response(endpoint, response).await
    }

    /// Make a POST request without body
    async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(endpoint))
            .send()
            .await
            .map_err(|e| Self::transport_error(endpoint, e))?;
        Self::handle_response(endpoint, response).await
    }

    fn transport_error(endpoint: &str, e: reqwest::Error) -> ClientError {
        tracing::error!(endpoint, error = %e, "Request failed");
        ClientError::Http(e)
    }

    /// Handle the HTTP response
    ///
    /// Non-success statuses become `ClientError::Server` carrying the body's
    /// `message` field, or a fixed fallback when absent.
    async fn handle_response<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_message(&body)
                .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
            tracing::error!(endpoint, status = status.as_u16(), %message, "Server reported failure");
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(|e| {
            tracing::error!(endpoint, error = %e, "Invalid response body");
            ClientError::Http(e)
        })
    }

    // ========== Auth API ==========

    /// Login with username and password
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<StoreInfo> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.post("/login", &request).await?;
        match response.store {
            Some(store) if response.success => Ok(store),
            _ => Err(ClientError::InvalidResponse(
                "login response missing store".to_string(),
            )),
        }
    }

    /// Logout the current session
    pub async fn logout(&self) -> ClientResult<Ack> {
        self.post_empty("/logout").await
    }

    /// Check whether the session cookie still maps to an active session
    pub async fn check_session(&self) -> ClientResult<SessionResponse> {
        self.get("/check-session").await
    }

    /// Register a new store account
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<StoreCreated> {
        self.post("/register", request).await
    }

    // ========== Shortage API ==========

    /// Fetch all open shortages
    pub async fn shortages(&self, query: Option<ListQuery>) -> ClientResult<Vec<Shortage>> {
        let response: ShortageListResponse = self.get_with_query("/shortages", query).await?;
        Ok(response.shortages)
    }

    /// Fetch shortages owned by the current store
    pub async fn my_shortages(&self, query: Option<ListQuery>) -> ClientResult<Vec<Shortage>> {
        let response: ShortageListResponse = self.get_with_query("/my-shortages", query).await?;
        Ok(response.shortages)
    }

    /// Report a new shortage
    pub async fn create_shortage(&self, payload: &ShortageCreate) -> ClientResult<Shortage> {
        self.post("/shortages", payload).await
    }

    /// Respond to another store's shortage
    pub async fn respond_to_shortage(&self, shortage_id: i64, message: &str) -> ClientResult<Ack> {
        let request = RespondRequest {
            message: message.to_string(),
        };
        self.post(&format!("/shortages/{shortage_id}/respond"), &request)
            .await
    }

    // ========== Notification API ==========

    /// Fetch the notification list
    pub async fn notifications(&self, query: Option<ListQuery>) -> ClientResult<Vec<Notification>> {
        let response: NotificationListResponse =
            self.get_with_query("/notifications", query).await?;
        Ok(response.notifications)
    }

    /// Mark a notification as read
    pub async fn mark_notification_read(&self, notification_id: i64) -> ClientResult<Ack> {
        self.post_empty(&format!("/notifications/{notification_id}/read"))
            .await
    }

    /// Fetch the unread notification count
    pub async fn unread_count(&self) -> ClientResult<u64> {
        let response: UnreadCountResponse = self.get("/notifications/unread-count").await?;
        Ok(response.count)
    }
}

/// Extract the `message` field from an error response body, if any.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
