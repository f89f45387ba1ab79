// Store API HTTP client
//
// Wraps `reqwest::Client` with base-URL joining, bearer attachment,
// envelope unwrapping and error-body parsing. Endpoint methods live in
// `storefront.rs` (anonymous) and `admin.rs` (bearer) as inherent impls
// so this module stays focused on transport mechanics.

use reqwest::header::AUTHORIZATION;
use reqwest::multipart;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::AuthToken;
use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{Envelope, ListEnvelope, Page};

/// Error body shape: `{ success: false, message, errors? }`; a few
/// endpoints use `error` instead of `message`.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

/// Whether a request must carry the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Public,
    Privileged,
}

/// Async client for the Hisi REST API.
///
/// All paths are relative to `<base>/api/v1/`. Privileged requests attach
/// `Authorization: Bearer <token>` and fail fast with
/// [`Error::MissingToken`] when no token is configured.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<AuthToken>,
}

impl StoreClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL (e.g. `http://localhost:5000`), an optional
    /// bearer token, and transport settings.
    pub fn new(
        base_url: &str,
        token: Option<AuthToken>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(http, base_url, token)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: &str,
        token: Option<AuthToken>,
    ) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        let token = token.filter(|t| !t.is_empty());
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Append `/api/v1/` unless the caller already pointed at it.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/api/v1") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/v1/"));
        }

        Ok(url)
    }

    /// The normalized base URL (always ends with `/api/v1/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether a bearer token is configured.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    // ── Request building ─────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        access: Access,
    ) -> Result<reqwest::RequestBuilder, Error> {
        let url = self.url(path)?;
        debug!("{method} {url}");
        let mut builder = self.http.request(method, url);
        match (access, &self.token) {
            (Access::Privileged, None) => return Err(Error::MissingToken),
            (_, Some(token)) => builder = builder.header(AUTHORIZATION, token.header_value()?),
            (Access::Public, None) => {}
        }
        Ok(builder)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        access: Access,
    ) -> Result<T, Error> {
        let resp = self.request(reqwest::Method::GET, path, access)?.send().await?;
        self.handle_data(resp).await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        access: Access,
    ) -> Result<T, Error> {
        trace!(?params, "query");
        let resp = self
            .request(reqwest::Method::GET, path, access)?
            .query(params)
            .send()
            .await?;
        self.handle_data(resp).await
    }

    /// GET a list endpoint and normalize whatever envelope it emits.
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        access: Access,
    ) -> Result<Page<T>, Error> {
        let (page, per_page) = requested_page(params);
        trace!(?params, "list query");
        let resp = self
            .request(reqwest::Method::GET, path, access)?
            .query(params)
            .send()
            .await?;
        let envelope: ListEnvelope<T> = self.handle_body(resp).await?;
        Ok(envelope.into_page(page, per_page))
    }

    /// GET raw bytes (exports).
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        params: &[(String, String)],
        access: Access,
    ) -> Result<Vec<u8>, Error> {
        let resp = self
            .request(reqwest::Method::GET, path, access)?
            .query(params)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp.bytes().await?.to_vec())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        access: Access,
    ) -> Result<T, Error> {
        let resp = self
            .request(reqwest::Method::POST, path, access)?
            .json(body)
            .send()
            .await?;
        self.handle_data(resp).await
    }

    pub(crate) async fn post_no_response<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        access: Access,
    ) -> Result<(), Error> {
        let resp = self
            .request(reqwest::Method::POST, path, access)?
            .json(body)
            .send()
            .await?;
        self.handle_empty(resp).await
    }

    /// Privileged write whose response is decoded as-is, for the endpoints
    /// that answer outside the canonical envelope.
    pub(crate) async fn send_unwrapped<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let resp = self
            .request(method, path, Access::Privileged)?
            .json(body)
            .send()
            .await?;
        self.handle_body(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let resp = self
            .request(reqwest::Method::PUT, path, Access::Privileged)?
            .json(body)
            .send()
            .await?;
        self.handle_data(resp).await
    }

    pub(crate) async fn put_no_response<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let resp = self
            .request(reqwest::Method::PUT, path, Access::Privileged)?
            .json(body)
            .send()
            .await?;
        self.handle_empty(resp).await
    }

    pub(crate) async fn patch_no_response<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let resp = self
            .request(reqwest::Method::PATCH, path, Access::Privileged)?
            .json(body)
            .send()
            .await?;
        self.handle_empty(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let resp = self
            .request(reqwest::Method::DELETE, path, Access::Privileged)?
            .send()
            .await?;
        self.handle_empty(resp).await
    }

    /// Multipart upload with the payload under the `file` field.
    pub(crate) async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<T, Error> {
        let part = multipart::Part::bytes(bytes).file_name(filename.to_owned());
        let form = multipart::Form::new().part("file", part);
        let resp = self
            .request(reqwest::Method::POST, path, Access::Privileged)?
            .multipart(form)
            .send()
            .await?;
        self.handle_data(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    /// Decode `{ data: T }` and return `T`.
    async fn handle_data<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, Error> {
        let envelope: Envelope<T> = self.handle_body(resp).await?;
        envelope.into_data()
    }

    async fn handle_body<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<ErrorBody>(&raw).ok();

        let (message, errors) = match parsed {
            Some(body) => (body.message.or(body.error), body.errors),
            None => (None, None),
        };
        let message = message.unwrap_or_else(|| {
            if raw.is_empty() {
                status.to_string()
            } else {
                raw
            }
        });

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::Unauthorized { message };
        }

        Error::Api {
            status: status.as_u16(),
            message,
            errors,
        }
    }
}

/// Requested page/per_page from a query, defaulting to 1 and 20.
fn requested_page(params: &[(String, String)]) -> (u32, u32) {
    let lookup = |key: &str, default: u32| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.parse().ok())
            .unwrap_or(default)
    };
    (lookup("page", 1), lookup("per_page", 20))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_api_prefix() {
        let client = StoreClient::with_client(
            reqwest::Client::new(),
            "http://localhost:5000",
            None,
        )
        .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/api/v1/");
    }

    #[test]
    fn base_url_with_prefix_is_kept() {
        let client = StoreClient::with_client(
            reqwest::Client::new(),
            "https://shop.example.com/api/v1/",
            None,
        )
        .unwrap();
        assert_eq!(client.base_url().as_str(), "https://shop.example.com/api/v1/");
        assert_eq!(
            client.url("/products").unwrap().as_str(),
            "https://shop.example.com/api/v1/products"
        );
    }

    #[test]
    fn empty_token_is_dropped() {
        let client = StoreClient::with_client(
            reqwest::Client::new(),
            "http://localhost:5000",
            Some(AuthToken::from(String::new())),
        )
        .unwrap();
        assert!(!client.has_token());
    }

    #[test]
    fn privileged_request_without_token_fails_fast() {
        let client =
            StoreClient::with_client(reqwest::Client::new(), "http://localhost:5000", None)
                .unwrap();
        let result = client.request(reqwest::Method::GET, "orders", Access::Privileged);
        assert!(matches!(result, Err(Error::MissingToken)));
    }

    #[test]
    fn requested_page_defaults() {
        assert_eq!(requested_page(&[]), (1, 20));
        let params = vec![
            ("page".to_string(), "3".to_string()),
            ("per_page".to_string(), "12".to_string()),
        ];
        assert_eq!(requested_page(&params), (3, 12));
    }
}
