use crate::client::{default_header_map, join_url, parse_base_url, ClientResponse, StatusHandlers};
use crate::configuration::ClientSettings;
use crate::error::ClientError;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use std::time::Duration;

/// Blocking fluent client.
///
/// Must not be called from inside an async runtime, use
/// `tokio::task::spawn_blocking` there.
#[derive(Clone)]
pub struct RestClient {
    http_client: Client,
    base_url: Url,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl RestClient {
    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::default()
    }

    pub fn get(&self) -> RestUriSpec<'_> {
        self.method(Method::GET)
    }

    pub fn post(&self) -> RestUriSpec<'_> {
        self.method(Method::POST)
    }

    pub fn method(&self, method: Method) -> RestUriSpec<'_> {
        RestUriSpec {
            client: self,
            method,
        }
    }
}

#[derive(Default)]
pub struct RestClientBuilder {
    base_url: Option<String>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    default_headers: Vec<(String, String)>,
}

impl RestClientBuilder {
    /// Base url, timeouts and default headers taken from the configuration.
    pub fn from_settings(settings: &ClientSettings) -> Self {
        settings.default_headers.iter().fold(
            Self::default()
                .base_url(&settings.base_url)
                .connect_timeout(settings.connect_timeout())
                .read_timeout(settings.read_timeout()),
            |builder, (key, value)| builder.default_header(key, value),
        )
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<RestClient, ClientError> {
        let base_url = parse_base_url(self.base_url.as_deref().unwrap_or_default())?;
        let mut builder = Client::builder()
            .default_headers(default_header_map(&self.default_headers)?)
            // the blocking client applies this as the read timeout
            .timeout(self.read_timeout);
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        Ok(RestClient {
            http_client: builder.build()?,
            base_url,
        })
    }
}

pub struct RestUriSpec<'a> {
    client: &'a RestClient,
    method: Method,
}

impl<'a> RestUriSpec<'a> {
    /// Path resolved against the base url.
    pub fn uri(self, path: &str) -> RestRequestSpec {
        let request = join_url(&self.client.base_url, path).map(|url| {
            self.client
                .http_client
                .request(self.method.clone(), url)
        });
        RestRequestSpec {
            method: self.method,
            request,
        }
    }
}

pub struct RestRequestSpec {
    method: Method,
    request: Result<RequestBuilder, ClientError>,
}

impl RestRequestSpec {
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

    pub fn multipart(self, form: reqwest::blocking::multipart::Form) -> Self {
        self.map(|request| request.multipart(form))
    }

    /// Describe how the response is consumed. Nothing is sent yet.
    pub fn retrieve(self) -> RestResponseSpec {
        RestResponseSpec {
            method: self.method,
            request: self.request,
            status_handlers: StatusHandlers::default(),
        }
    }
}

pub struct RestResponseSpec {
    method: Method,
    request: Result<RequestBuilder, ClientError>,
    status_handlers: StatusHandlers,
}

impl RestResponseSpec {
    pub fn on_status<P, H>(mut self, predicate: P, handler: H) -> Self
    where
        P: Fn(StatusCode) -> bool + Send + Sync + 'static,
        H: Fn(&ClientResponse) -> ClientError + Send + Sync + 'static,
    {
        self.status_handlers.push(predicate, handler);
        self
    }

    /// Send the request and read the body as text.
    pub fn body(self) -> Result<String, ClientError> {
        let response = self.request?.send().map_err(|e| {
            tracing::error!("Failed to send request: {:?}", e);
            ClientError::Request(e)
        })?;
        let url = response.url().clone();
        let status = response.status();
        let body = response.text()?;
        self.status_handlers.resolve(ClientResponse {
            method: self.method,
            url,
            status,
            body,
        })
    }
}
