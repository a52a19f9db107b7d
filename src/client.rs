use crate::enrichment::EnrichmentService;
use crate::errors::{sanitize_url, ClearbitError, ErrorResponse};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER};
use reqwest::{Method, Request, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Version of this library, stamped into the user agent.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifier sent as `User-Agent` on every request.
pub const USER_AGENT: &str = concat!("clearbit-client-", env!("CARGO_PKG_VERSION"));

/// Host serving the person and combined endpoints.
pub const DEFAULT_BASE_URL: &str = "https://person.clearbit.com";

/// Client for the Clearbit enrichment API.
///
/// Holds the API key and a `reqwest::Client`. Cloning is cheap and clones
/// share the underlying connection pool, so one instance can serve many
/// concurrent callers.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    user_agent: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Client {
    /// Creates a new `Client`.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The Clearbit secret key, sent as the Basic auth username.
    /// * `http_client` - A pre-configured transport (timeouts, proxy, TLS). A
    ///   default `reqwest::Client` is used when `None`.
    pub fn new(api_key: impl Into<String>, http_client: Option<reqwest::Client>) -> Self {
        Self {
            http: http_client.unwrap_or_default(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Points the client at another host. Used for proxies and mock servers.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the user agent. An empty string suppresses the header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Person and combined lookups by email.
    pub fn enrichment(&self) -> EnrichmentService<'_> {
        EnrichmentService::new(self)
    }

    /// Builds a request against `url`.
    ///
    /// When `body` is `Some`, it is encoded as JSON. `Accept: application/json`
    /// is always set, and so is the user agent unless it is empty.
    ///
    /// # Returns
    ///
    /// * `Result<Request, ClearbitError>` - `ClearbitError::Request` if the URL
    ///   does not parse or the body cannot be serialized.
    pub fn new_request<B>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Request, ClearbitError>
    where
        B: Serialize + ?Sized,
    {
        let url = Url::parse(url)
            .map_err(|e| ClearbitError::Request(format!("invalid URL '{}': {}", url, e)))?;

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(|e| {
                ClearbitError::Request(format!("failed to serialize request body: {}", e))
            })?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(payload);
        }

        if !self.user_agent.is_empty() {
            builder = builder.header(USER_AGENT_HEADER, self.user_agent.as_str());
        }

        builder
            .build()
            .map_err(|e| ClearbitError::Request(format!("failed to build request: {}", e)))
    }

    /// Sends `request` and decodes a 2xx body into `T`.
    ///
    /// An empty or `null` success body is not an error: `T::default()` is returned.
    /// Non-2xx responses become `ClearbitError::Api`.
    pub async fn execute<T>(&self, request: Request) -> Result<T, ClearbitError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.dispatch(request).await?;
        let body = response.bytes().await?;
        decode_body(&body)
    }

    /// Sends `request` and drops the success body without decoding it.
    pub async fn execute_discarding(&self, request: Request) -> Result<(), ClearbitError> {
        let response = self.dispatch(request).await?;
        response.bytes().await?;
        Ok(())
    }

    /// Authenticates and sends the request, then classifies the status.
    async fn dispatch(&self, request: Request) -> Result<Response, ClearbitError> {
        let method = request.method().clone();
        let request = RequestBuilder::from_parts(self.http.clone(), request)
            .basic_auth(&self.api_key, None::<&str>)
            .build()
            .map_err(|e| ClearbitError::Request(format!("failed to build request: {}", e)))?;

        tracing::debug!("Clearbit request: {} {}", method, sanitize_url(request.url()));

        let response = self.http.execute(request).await?;

        tracing::debug!("Clearbit response status: {}", response.status());

        check_response(&method, response).await
    }
}

/// Passes 2xx responses through and turns anything else into an API error.
///
/// On failure the whole body is read so the connection can be reused, and
/// decoded as `{"error": {"type", "message"}}` when possible. The returned
/// error is produced even if the body is empty or unreadable.
pub async fn check_response(
    method: &Method,
    response: Response,
) -> Result<Response, ClearbitError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().clone();
    let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();

    Err(ClearbitError::Api(ErrorResponse::new(
        status,
        method.clone(),
        &url,
        &body,
    )))
}

/// Decodes the first JSON value of a success body.
///
/// An empty body or a literal `null` yields `T::default()`. Anything after the
/// first value is ignored.
pub(crate) fn decode_body<T>(body: &[u8]) -> Result<T, ClearbitError>
where
    T: DeserializeOwned + Default,
{
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<T>>()
        .next();

    match first {
        None => Ok(T::default()),
        Some(value) => Ok(value?.unwrap_or_default()),
    }
}
