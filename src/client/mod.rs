//! Four ways of calling the test controller.
//!
//! * [`http_interface`]: a declarative interface backed by a [`WebClient`] proxy.
//! * [`feign`]: a declarative remote client with a pluggable [`ErrorDecoder`].
//! * [`rest_client`]: a blocking fluent client.
//! * [`web_client`]: an async fluent client.

mod feign;
mod http_interface;
mod rest_client;
mod status_handler;
mod web_client;

pub use feign::*;
pub use http_interface::*;
pub use rest_client::*;
pub use status_handler::*;
pub use web_client::*;

use crate::error::ClientError;
use crate::request::{FilePart, PostTestRequest};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{StatusCode, Url};

/// The operations exposed by the test controller.
#[async_trait]
pub trait TestApi {
    /// `GET /test?username=`
    async fn get_test(&self, username: Option<&str>) -> Result<String, ClientError>;

    /// `POST /test/request-body` with a JSON body.
    async fn post_test(&self, request: &PostTestRequest) -> Result<String, ClientError>;

    /// `POST /test/form-data` with a form-urlencoded body.
    async fn post_test_form(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, ClientError>;

    /// `POST /test/multi-part` with a file part and two text parts.
    async fn post_test_multipart(
        &self,
        file: &FilePart,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, ClientError>;
}

/// Predicate matching 4xx and 5xx responses.
pub fn is_error(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}

pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, ClientError> {
    Url::parse(base_url).map_err(|e| {
        tracing::error!("Failed to parse url: url={}, e={:?}", base_url, e);
        ClientError::InvalidUrl(base_url.to_string())
    })
}

pub(crate) fn join_url(base_url: &Url, path: &str) -> Result<Url, ClientError> {
    base_url.join(path).map_err(|e| {
        tracing::error!("Url failed to join {}: {:?}", path, e);
        ClientError::InvalidUrl(path.to_string())
    })
}

pub(crate) fn default_header_map(headers: &[(String, String)]) -> Result<HeaderMap, ClientError> {
    let mut header_map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| ClientError::InvalidHeader(key.clone()))?;
        let value =
            HeaderValue::from_str(value).map_err(|_| ClientError::InvalidHeader(key.clone()))?;
        header_map.insert(name, value);
    }
    Ok(header_map)
}

/// Text parts of a multipart call, absent values are not sent.
pub(crate) fn text_parts<'a>(
    username: Option<&'a str>,
    password: Option<&'a str>,
) -> impl Iterator<Item = (&'static str, String)> + 'a {
    [
        (crate::constant::USERNAME_FIELD, username),
        (crate::constant::PASSWORD_FIELD, password),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|value| (name, value.to_string())))
}
