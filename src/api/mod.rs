//! StayHub API Client
//!
//! Authenticated REST bindings to the backend, organized by resource.
//! Every call attaches the session bearer token and maps non-success
//! statuses onto [`ApiError`].

mod complaint;
mod facility;
mod room;
mod room_type;

use leptos::prelude::*;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::Form;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ApiError;
use crate::session;

// Re-export all public items
pub use complaint::*;
pub use facility::*;
pub use room::*;
pub use room_type::*;

/// List responses wrap their payload in a `data` field
#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// 4xx bodies carry a `message` field when the backend has one
#[derive(Deserialize)]
struct ServerMessage {
    message: String,
}

/// Authenticated client for one backend deployment
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
}

/// Get the shared client out of the reactive context
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        join_url(&self.config.api_base, path)
    }

    /// Resolve a relative upload url against the backend's static base
    pub fn image_url(&self, relative: &str) -> String {
        join_url(&self.config.api_base, relative)
    }

    fn bearer(&self) -> Result<String, ApiError> {
        session::token()
            .map(|token| format!("Bearer {token}"))
            .ok_or(ApiError::AuthMissing)
    }

    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, ApiError> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .get(self.endpoint(path))
            .header(AUTHORIZATION, bearer)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = checked(response).await?;
        let envelope: DataEnvelope<Vec<T>> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }

    /// POST a JSON body. The response body is ignored beyond its status;
    /// callers refetch instead of trusting a returned entity.
    pub(crate) async fn post_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .post(self.endpoint(path))
            .header(AUTHORIZATION, bearer)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        checked(response).await.map(drop)
    }

    pub(crate) async fn put_json<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .put(self.endpoint(path))
            .header(AUTHORIZATION, bearer)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        checked(response).await.map(drop)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .delete(self.endpoint(path))
            .header(AUTHORIZATION, bearer)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        checked(response).await.map(drop)
    }

    pub(crate) async fn post_multipart(&self, path: &str, form: Form) -> Result<(), ApiError> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .post(self.endpoint(path))
            .header(AUTHORIZATION, bearer)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        checked(response).await.map(drop)
    }

    pub(crate) async fn put_multipart(&self, path: &str, form: Form) -> Result<(), ApiError> {
        let bearer = self.bearer()?;
        let response = self
            .http
            .put(self.endpoint(path))
            .header(AUTHORIZATION, bearer)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        checked(response).await.map(drop)
    }
}

/// Map a non-success status onto the error taxonomy
async fn checked(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ApiError::AuthRejected);
    }
    if status.is_client_error() {
        let message = response
            .json::<ServerMessage>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("Permintaan ditolak (status {})", status.as_u16()));
        return Err(ApiError::Validation(message));
    }
    Err(ApiError::Server(status.as_u16()))
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("http://localhost:8000", "room"), "http://localhost:8000/room");
        assert_eq!(join_url("http://localhost:8000/", "room"), "http://localhost:8000/room");
        assert_eq!(
            join_url("http://localhost:8000", "/uploads/r1.jpg"),
            "http://localhost:8000/uploads/r1.jpg"
        );
    }

    #[test]
    fn data_envelope_unwraps_lists() {
        let envelope: DataEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"data": ["a", "b"]}"#).unwrap();
        assert_eq!(envelope.data, vec!["a", "b"]);
    }
}
