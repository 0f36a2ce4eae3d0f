//! HTTP client for the cashier REST API

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{Menu, Order, OrderStatus};
use shared::order::{PaymentRequest, PaymentResult};
use shared::response::ApiResponse;

/// HTTP client implementing [`crate::OrderApi`] against the cashier backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request and unwrap the response envelope
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request without body and unwrap the response envelope
    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.put(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body and unwrap the response envelope
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// The backend wraps payloads in `{ success, message, data }` and also
    /// signals failures through non-2xx statuses; both paths surface the
    /// server message verbatim.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::Api(format!("Not found: {}", text))),
                StatusCode::BAD_REQUEST | StatusCode::CONFLICT => Err(ClientError::Api(text)),
                _ => Err(ClientError::Api(format!("Server error ({}): {}", status, text))),
            };
        }

        let envelope: ApiResponse<T> = response.json().await?;
        envelope.into_data().map_err(ClientError::Api)
    }
}

#[async_trait]
impl crate::OrderApi for HttpClient {
    async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("cashier/api/orders/all").await
    }

    async fn fetch_menus(&self) -> ClientResult<Vec<Menu>> {
        self.get("customer/api/menus").await
    }

    async fn update_status(&self, order_id: i64, target: OrderStatus) -> ClientResult<Order> {
        self.put_empty(&format!(
            "cashier/api/orders/{}/status?status={}",
            order_id,
            target.as_str()
        ))
        .await
    }

    async fn submit_payment(&self, request: &PaymentRequest) -> ClientResult<PaymentResult> {
        self.post("cashier/api/payments", request).await
    }
}
