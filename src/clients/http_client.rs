//! # HTTP Gateway Client
//!
//! [`HttpNetworkClient`] talks JSON to a session gateway that fronts the
//! social-networking service. The gateway owns cookie handling and request
//! signing; this client only keeps the session cookie it is handed back.
//!
//! | Call | Request |
//! |------|---------|
//! | `authenticate` | `POST {base}/auth/login` |
//! | `search_people` | `POST {base}/search/people` |
//! | `add_connection` | `POST {base}/connections` |
//! | `unfollow_connection` | `DELETE {base}/connections/{urn}/follow` |
use crate::clients::{ClientError, NetworkClient};
use crate::domain::{Profile, SearchQuery};
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, instrument};

/// Gateway address used when none is given on the command line.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8787";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
    refresh_cookies: bool,
}

#[derive(Serialize)]
struct ConnectRequest<'a> {
    public_id: &'a str,
    message: &'a str,
    profile_urn: Option<&'a str>,
}

#[derive(Deserialize)]
struct ActionResponse {
    success: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Bare(Vec<Profile>),
    Wrapped { results: Vec<Profile> },
}

impl SearchResponse {
    fn into_profiles(self) -> Vec<Profile> {
        match self {
            SearchResponse::Bare(profiles) => profiles,
            SearchResponse::Wrapped { results } => results,
        }
    }
}

/// [`NetworkClient`] backed by `reqwest` with a cookie store.
pub struct HttpNetworkClient {
    http: reqwest::Client,
    base_url: Url,
    authenticated: AtomicBool,
}

impl HttpNetworkClient {
    /// Builds a client for the gateway at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ClientError::Config(format!("invalid API URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "unsupported API URL scheme '{}'",
                parsed.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: parsed,
            authenticated: AtomicBool::new(false),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    ///
    /// A segment containing `/`, `?` or `#` stays a single path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("API URL '{}' cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn require_session(&self) -> Result<(), ClientError> {
        if self.authenticated.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ClientError::NotAuthenticated)
        }
    }
}

/// Reads an error body for reporting. A body that cannot be read is logged and left empty.
async fn error_body(response: Response) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!(error = %e, "Could not read response body");
            String::new()
        }
    }
}

/// Turns a non-2xx response into [`ClientError::Status`], otherwise decodes the JSON body.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = error_body(response).await;
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[async_trait]
impl NetworkClient for HttpNetworkClient {
    #[instrument(skip(self, password))]
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
        force_refresh: bool,
    ) -> Result<(), ClientError> {
        debug!("Sending login request");
        let response = self
            .http
            .post(self.endpoint(&["auth", "login"])?)
            .json(&LoginRequest {
                email,
                password,
                refresh_cookies: force_refresh,
            })
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let body = error_body(response).await;
            return Err(ClientError::Authentication(if body.is_empty() {
                status.to_string()
            } else {
                body
            }));
        }
        if !status.is_success() {
            let body = error_body(response).await;
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        self.authenticated.store(true, Ordering::SeqCst);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn search_people(&self, query: &SearchQuery) -> Result<Vec<Profile>, ClientError> {
        self.require_session()?;
        debug!("Sending search request");
        let response = self
            .http
            .post(self.endpoint(&["search", "people"])?)
            .json(query)
            .send()
            .await?;

        let mut profiles = read_json::<SearchResponse>(response).await?.into_profiles();
        profiles.truncate(query.limit);
        Ok(profiles)
    }

    #[instrument(skip(self, message))]
    async fn add_connection(
        &self,
        public_id: &str,
        message: &str,
        profile_urn: Option<&str>,
    ) -> Result<bool, ClientError> {
        self.require_session()?;
        debug!("Sending connection request");
        let response = self
            .http
            .post(self.endpoint(&["connections"])?)
            .json(&ConnectRequest {
                public_id,
                message,
                profile_urn,
            })
            .send()
            .await?;

        Ok(read_json::<ActionResponse>(response).await?.success)
    }

    #[instrument(skip(self))]
    async fn unfollow_connection(&self, profile_urn: &str) -> Result<bool, ClientError> {
        self.require_session()?;
        debug!("Sending unfollow request");
        let response = self
            .http
            .delete(self.endpoint(&["connections", profile_urn, "follow"])?)
            .send()
            .await?;

        Ok(read_json::<ActionResponse>(response).await?.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            HttpNetworkClient::new("not a url"),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            HttpNetworkClient::new("ftp://gateway.local"),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = HttpNetworkClient::new("http://gateway.local:8787/api/").unwrap();
        assert_eq!(client.base_url(), "http://gateway.local:8787/api");
        assert_eq!(
            client.endpoint(&["search", "people"]).unwrap().as_str(),
            "http://gateway.local:8787/api/search/people"
        );

        let root = HttpNetworkClient::new("http://gateway.local:8787").unwrap();
        assert_eq!(
            root.endpoint(&["connections"]).unwrap().as_str(),
            "http://gateway.local:8787/connections"
        );
    }

    #[test]
    fn test_endpoint_keeps_urn_in_one_segment() {
        let client = HttpNetworkClient::new("http://gateway.local:8787/api").unwrap();
        let url = client
            .endpoint(&["connections", "urn:li:member/123?x=1#frag", "follow"])
            .unwrap();

        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
        assert_eq!(
            url.path(),
            "/api/connections/urn:li:member%2F123%3Fx=1%23frag/follow"
        );
        let segments: Vec<&str> = url.path_segments().unwrap().collect();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments.last(), Some(&"follow"));
    }

    #[tokio::test]
    async fn test_calls_before_login_are_refused() {
        let client = HttpNetworkClient::new(DEFAULT_API_URL).unwrap();

        let search = client
            .search_people(&SearchQuery::not_connected("Rust", 5))
            .await;
        assert_eq!(search, Err(ClientError::NotAuthenticated));

        let connect = client.add_connection("jane", "hi", None).await;
        assert_eq!(connect, Err(ClientError::NotAuthenticated));

        let unfollow = client.unfollow_connection("ACoAA1").await;
        assert_eq!(unfollow, Err(ClientError::NotAuthenticated));
    }

    #[test]
    fn test_search_response_accepts_both_shapes() {
        let bare: SearchResponse = serde_json::from_str(r#"[{"name": "A", "public_id": "a"}]"#).unwrap();
        assert_eq!(bare.into_profiles().len(), 1);

        let wrapped: SearchResponse =
            serde_json::from_str(r#"{"results": [{"name": "A"}, {"name": "B"}]}"#).unwrap();
        assert_eq!(wrapped.into_profiles().len(), 2);
    }
}
