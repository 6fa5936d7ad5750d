use crate::client::{default_header_map, join_url, parse_base_url, ClientResponse, StatusHandlers};
use crate::configuration::ClientSettings;
use crate::error::ClientError;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use std::time::Duration;

/// Async fluent client.
///
/// ```no_run
/// # async fn call(client: api_call_example::client::WebClient) {
/// let greeting = client
///     .get()
///     .uri("/test")
///     .query_param("username", "12345")
///     .retrieve()
///     .body_to_string()
///     .await;
/// # }
/// ```
#[derive(Clone)]
pub struct WebClient {
    http_client: Client,
    base_url: Url,
    default_status_handlers: StatusHandlers,
}

impl std::fmt::Debug for WebClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl WebClient {
    pub fn builder() -> WebClientBuilder {
        WebClientBuilder::default()
    }

    pub fn get(&self) -> WebUriSpec<'_> {
        self.method(Method::GET)
    }

    pub fn post(&self) -> WebUriSpec<'_> {
        self.method(Method::POST)
    }

    pub fn method(&self, method: Method) -> WebUriSpec<'_> {
        WebUriSpec {
            client: self,
            method,
        }
    }
}

#[derive(Default)]
pub struct WebClientBuilder {
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
    default_status_handlers: StatusHandlers,
}

impl WebClientBuilder {
    /// Base url and default headers taken from the configuration.
    pub fn from_settings(settings: &ClientSettings) -> Self {
        settings.default_headers.iter().fold(
            Self::default().base_url(&settings.base_url),
            |builder, (key, value)| builder.default_header(key, value),
        )
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Applied to every call after the handlers registered on the call itself.
    pub fn default_status_handler<P, H>(mut self, predicate: P, handler: H) -> Self
    where
        P: Fn(StatusCode) -> bool + Send + Sync + 'static,
        H: Fn(&ClientResponse) -> ClientError + Send + Sync + 'static,
    {
        self.default_status_handlers.push(predicate, handler);
        self
    }

    pub fn build(self) -> Result<WebClient, ClientError> {
        let base_url = parse_base_url(self.base_url.as_deref().unwrap_or_default())?;
        let http_client = Client::builder()
            .default_headers(default_header_map(&self.default_headers)?)
            .build()?;
        Ok(WebClient {
            http_client,
            base_url,
            default_status_handlers: self.default_status_handlers,
        })
    }
}

pub struct WebUriSpec<'a> {
    client: &'a WebClient,
    method: Method,
}

impl<'a> WebUriSpec<'a> {
    /// Path resolved against the base url.
    pub fn uri(self, path: &str) -> WebRequestSpec<'a> {
        let request = join_url(&self.client.base_url, path).map(|url| {
            self.client
                .http_client
                .request(self.method.clone(), url)
        });
        WebRequestSpec {
            client: self.client,
            method: self.method,
            request,
        }
    }
}

pub struct WebRequestSpec<'a> {
    client: &'a WebClient,
    method: Method,
    request: Result<RequestBuilder, ClientError>,
}

impl<'a> WebRequestSpec<'a> {
    fn map(mut self, f: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Self {
        self.request = self.request.map(f);
        self
    }

    pub fn query_param(self, key: &str, value: &str) -> Self {
        self.map(|request| request.query(&[(key, value)]))
    }

    pub fn json<T: Serialize + ?Sized>(self, body: &T) -> Self {
        self.map(|request| request.json(body))
    }

    pub fn form<T: Serialize + ?Sized>(self, body: &T) -> Self {
        self.map(|request| request.form(body))
    }

    pub fn multipart(self, form: reqwest::multipart::Form) -> Self {
        self.map(|request| request.multipart(form))
    }

    /// Describe how the response is consumed. Nothing is sent yet.
    pub fn retrieve(self) -> WebResponseSpec<'a> {
        WebResponseSpec {
            client: self.client,
            method: self.method,
            request: self.request,
            status_handlers: StatusHandlers::default(),
            timeout: None,
        }
    }
}

pub struct WebResponseSpec<'a> {
    client: &'a WebClient,
    method: Method,
    request: Result<RequestBuilder, ClientError>,
    status_handlers: StatusHandlers,
    timeout: Option<Duration>,
}

impl<'a> WebResponseSpec<'a> {
    pub fn on_status<P, H>(mut self, predicate: P, handler: H) -> Self
    where
        P: Fn(StatusCode) -> bool + Send + Sync + 'static,
        H: Fn(&ClientResponse) -> ClientError + Send + Sync + 'static,
    {
        self.status_handlers.push(predicate, handler);
        self
    }

    /// Fail with `ClientError::Timeout` when the whole exchange takes longer.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub async fn body_to_string(self) -> Result<String, ClientError> {
        let status_handlers = self
            .status_handlers
            .then(&self.client.default_status_handlers);
        let exchange = exchange(self.method, self.request?, status_handlers);
        match self.timeout {
            None => exchange.await,
            Some(timeout) => tokio::time::timeout(timeout, exchange)
                .await
                .map_err(|_| {
                    tracing::warn!("Request timed out after {:?}", timeout);
                    ClientError::Timeout
                })?,
        }
    }
}

async fn exchange(
    method: Method,
    request: RequestBuilder,
    status_handlers: StatusHandlers,
) -> Result<String, ClientError> {
    let response = request.send().await.map_err(|e| {
        tracing::error!("Failed to send request: {:?}", e);
        ClientError::Request(e)
    })?;
    let url = response.url().clone();
    let status = response.status();
    let body = response.text().await?;
    status_handlers.resolve(ClientResponse {
        method,
        url,
        status,
        body,
    })
}
