use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use store::{ClientConfig, TokenStore};

use crate::auth::AuthService;
use crate::error::{ApiError, ErrorKind, Operation};
use crate::notes::NotesService;

/// Entry point to the REST backend.
///
/// Holds the `reqwest` client, the backend base URL and the token store the
/// bearer token is read from (and, on sign-in, written to). Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    http: reqwest::Client,
    base_url: String,
    tokens: T,
}

impl<T: TokenStore> ApiClient<T> {
    pub fn new(base_url: &str, tokens: T) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn from_config(config: &ClientConfig, tokens: T) -> Self {
        Self::new(&config.api.base_url, tokens)
    }

    pub fn auth(&self) -> AuthService<'_, T> {
        AuthService::new(self)
    }

    pub fn notes(&self) -> NotesService<'_, T> {
        NotesService::new(self)
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `segments` under the base URL. Each segment is
    /// percent-encoded, so ids can't escape their path position.
    fn endpoint(&self, op: Operation, segments: &[&str]) -> Result<Url, ApiError> {
        let invalid = || {
            tracing::error!("Invalid API base URL: {}", self.base_url);
            ApiError::new(ErrorKind::Network, op.fallback_message())
        };
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Start a request, attaching the bearer token when one is stored.
    pub(crate) fn request(
        &self,
        op: Operation,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(op, segments)?;
        tracing::debug!("{:?}: {} {}", op, method, url);
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.tokens.get() {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// Send and check the status; the body is left unread.
    pub(crate) async fn execute(
        &self,
        op: Operation,
        builder: RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::network(op, &e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(op, status, &body))
    }

    /// Send, check the status and decode the JSON body.
    pub(crate) async fn fetch<R: DeserializeOwned>(
        &self,
        op: Operation,
        builder: RequestBuilder,
    ) -> Result<R, ApiError> {
        let response = self.execute(op, builder).await?;
        response
            .json::<R>()
            .await
            .map_err(|e| ApiError::network(op, &e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryTokenStore;

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = ApiClient::new("http://localhost:8000/", MemoryTokenStore::new());
        assert_eq!(client.base_url(), "http://localhost:8000");

        let url = client
            .endpoint(Operation::FetchNote, &["notes", "a b/c"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/notes/a%20b%2Fc");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ApiClient::new("https://example.com/api", MemoryTokenStore::new());
        let url = client.endpoint(Operation::FetchNotes, &["notes"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/notes");
    }

    #[test]
    fn test_invalid_base_url() {
        let client = ApiClient::new("not a url", MemoryTokenStore::new());
        let err = client.endpoint(Operation::FetchNotes, &["notes"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Network);
        assert_eq!(err.message, "Failed to fetch notes");
    }
}
