//! HTTP client for the users REST endpoint.
//!
//! Each call is a single independent request: no retries, no backoff, no
//! request timeout. Any non-2xx status, transport failure or undecodable body
//! becomes a [`FetchError`] carrying the operation that failed.

pub mod types;

pub use types::{Company, DEFAULT_COMPANY, NewUser, User, UserPatch};

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

use crate::error::{ConfigError, FetchError, Operation, Result};
use types::{CreateBody, UpdateBody};

/// Base URL of the public placeholder API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Stateless client for `/users`. Cheap to clone.
#[derive(Clone, Debug)]
pub struct UsersClient {
    http: Client,
    base_url: String,
}

impl UsersClient {
    /// Build a client for `base_url` (trailing slashes are trimmed).
    pub fn new(base_url: &str) -> std::result::Result<Self, ConfigError> {
        let url = base_url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(ConfigError::InvalidBaseUrl("URL cannot be empty".into()));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl(format!(
                "{url}: must start with http:// or https://"
            )));
        }
        let http = Client::builder()
            .user_agent(format!("user-admin-tui/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;
        Ok(Self { http, base_url: url.to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /users`
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let op = Operation::ListUsers;
        let resp = self.send(op, self.request(Method::GET, "/users")).await?;
        decode(op, resp).await
    }

    /// `POST /users` with a client-generated id and the default company when none is given.
    pub async fn create_user(&self, new: &NewUser) -> Result<User> {
        let op = Operation::CreateUser;
        let body = CreateBody::new(new, timestamp_id());
        let resp = self
            .send(op, self.request(Method::POST, "/users").json(&body))
            .await?;
        decode(op, resp).await
    }

    /// `PUT /users/{id}`
    pub async fn update_user(&self, id: u64, patch: &UserPatch) -> Result<User> {
        let op = Operation::UpdateUser;
        let body = UpdateBody { id, patch };
        let resp = self
            .send(op, self.request(Method::PUT, &format!("/users/{id}")).json(&body))
            .await?;
        decode(op, resp).await
    }

    /// `DELETE /users/{id}`; the response body is ignored.
    pub async fn delete_user(&self, id: u64) -> Result<()> {
        let op = Operation::DeleteUser;
        self.send(op, self.request(Method::DELETE, &format!("/users/{id}")))
            .await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, url = %url, "sending request");
        self.http.request(method, url)
    }

    async fn send(&self, op: Operation, req: RequestBuilder) -> Result<Response> {
        let resp = req.send().await.map_err(|source| {
            warn!(?op, error = %source, "request failed");
            FetchError::Transport { op, source }
        })?;
        let status = resp.status();
        if !status.is_success() {
            warn!(?op, status = status.as_u16(), "non-success status");
            return Err(FetchError::Status { op, status: status.as_u16() });
        }
        Ok(resp)
    }
}

async fn decode<T: DeserializeOwned>(op: Operation, resp: Response) -> Result<T> {
    resp.json::<T>().await.map_err(|source| {
        warn!(?op, error = %source, "undecodable response body");
        FetchError::Decode { op, source }
    })
}

/// Milliseconds since the Unix epoch; used as the id of locally created users.
fn timestamp_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = UsersClient::new("https://example.com///").unwrap();
        assert_eq!(client.base_url(), "https://example.com");
    }

    #[test]
    fn rejects_empty_and_schemeless_urls() {
        assert!(matches!(UsersClient::new(""), Err(ConfigError::InvalidBaseUrl(_))));
        assert!(matches!(UsersClient::new("example.com"), Err(ConfigError::InvalidBaseUrl(_))));
        assert!(UsersClient::new("ftp://example.com").is_err());
    }

    #[test]
    fn timestamp_ids_fit_in_u64_milliseconds() {
        let id = timestamp_id();
        let secs = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default();
        assert!(id / 1000 <= secs && secs - id / 1000 <= 1);
    }

    #[test]
    fn timestamp_ids_are_not_zero() {
        assert!(timestamp_id() > 0);
    }
}
