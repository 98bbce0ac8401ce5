//! HTTP clients for the three API calls.
//!
//! Every call resolves to an [`HttpReply`], never an error: a transport
//! failure (connection refused, DNS, timeout) is logged and reported as a
//! reply with neither body nor status code, and a body that fails to
//! deserialize is reported as a reply with a status code but no body. The
//! repositories turn those absences into sentinel status codes.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::models::{AccountResponse, Credentials, LoginResponse, TransferRequest, TransferResponse};

/// What came back from one HTTP exchange, with both halves optional.
#[derive(Clone, Debug)]
pub struct HttpReply<T> {
    pub body: Option<T>,
    pub status_code: Option<u16>,
}

impl<T> HttpReply<T> {
    pub fn empty() -> Self {
        HttpReply {
            body: None,
            status_code: None,
        }
    }
}

#[async_trait]
pub trait LoginClient: Send + Sync {
    async fn post_credentials(&self, credentials: Credentials) -> HttpReply<LoginResponse>;
}

#[async_trait]
pub trait AccountClient: Send + Sync {
    async fn get_user_accounts(&self, user_id: &str) -> HttpReply<Vec<AccountResponse>>;
}

#[async_trait]
pub trait TransferClient: Send + Sync {
    async fn post_transfer(&self, request: TransferRequest) -> HttpReply<TransferResponse>;
}

/// reqwest-backed client for all three endpoints. The base URL is
/// environment-dependent (emulator loopback vs LAN address) and is supplied
/// by the caller.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn read<T: DeserializeOwned>(
        &self,
        sent: Result<reqwest::Response, reqwest::Error>,
    ) -> HttpReply<T> {
        let response = match sent {
            Ok(response) => response,
            Err(error) => {
                warn!("request failed before a response arrived: {error}");
                return HttpReply::empty();
            }
        };

        let status_code = response.status().as_u16();

        let body = match response.json::<T>().await {
            Ok(body) => Some(body),
            Err(error) => {
                warn!("response body could not be read: {error}");
                None
            }
        };

        HttpReply {
            body,
            status_code: Some(status_code),
        }
    }
}

#[async_trait]
impl LoginClient for ApiClient {
    async fn post_credentials(&self, credentials: Credentials) -> HttpReply<LoginResponse> {
        let sent = self
            .http
            .post(format!("{}/login", self.base_url))
            .json(&credentials)
            .send()
            .await;

        self.read(sent).await
    }
}

#[async_trait]
impl AccountClient for ApiClient {
    async fn get_user_accounts(&self, user_id: &str) -> HttpReply<Vec<AccountResponse>> {
        let sent = self
            .http
            .get(format!("{}/accounts/{user_id}", self.base_url))
            .send()
            .await;

        self.read(sent).await
    }
}

#[async_trait]
impl TransferClient for ApiClient {
    async fn post_transfer(&self, request: TransferRequest) -> HttpReply<TransferResponse> {
        let sent = self
            .http
            .post(format!("{}/transfer", self.base_url))
            .json(&request)
            .send()
            .await;

        self.read(sent).await
    }
}
