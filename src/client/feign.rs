use crate::client::{
    default_header_map, join_url, parse_base_url, text_parts, ClientResponse, TestApi,
};
use crate::configuration::ClientSettings;
use crate::constant::{
    FEIGN_ERROR_MESSAGE, FORM_DATA_PATH, MULTI_PART_PATH, REQUEST_BODY_PATH, TEST_PATH,
};
use crate::error::ClientError;
use crate::request::{FilePart, PostTestRequest};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use std::sync::Arc;

/// Turns every non-2xx response of a [`FeignClient`] into an error.
pub trait ErrorDecoder: Send + Sync {
    fn decode(&self, method_key: &str, response: &ClientResponse) -> ClientError;
}

/// Recognises the test controller paths and hides their bodies
/// behind a fixed message.
#[derive(Debug, Clone)]
pub struct FeignClientErrorDecoder {
    check_paths: Vec<String>,
}

impl FeignClientErrorDecoder {
    pub fn new<I, S>(check_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            check_paths: check_paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for FeignClientErrorDecoder {
    fn default() -> Self {
        Self::new([TEST_PATH, FORM_DATA_PATH, REQUEST_BODY_PATH, MULTI_PART_PATH])
    }
}

impl ErrorDecoder for FeignClientErrorDecoder {
    fn decode(&self, method_key: &str, response: &ClientResponse) -> ClientError {
        if self.check_paths.iter().any(|path| path == response.path()) {
            tracing::error!(
                method_key = %method_key,
                url = %response.url,
                status = %response.status,
                "Remote call failed"
            );
            return ClientError::Remote(FEIGN_ERROR_MESSAGE.to_string());
        }
        ClientError::UnexpectedStatus {
            status: response.status,
            body: response.body.clone(),
        }
    }
}

/// Declarative remote client bound to a name and a base url.
#[derive(Clone)]
pub struct FeignClient {
    name: String,
    url: Url,
    http_client: Client,
    decoder: Arc<dyn ErrorDecoder>,
}

impl std::fmt::Debug for FeignClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeignClient")
            .field("name", &self.name)
            .field("url", &self.url.as_str())
            .finish()
    }
}

impl FeignClient {
    pub fn new(
        name: impl Into<String>,
        url: &str,
        decoder: impl ErrorDecoder + 'static,
    ) -> Result<Self, ClientError> {
        Self::with_http_client(name, url, Client::new(), decoder)
    }

    /// Client named `test` with the default decoder and the configured headers.
    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ClientError> {
        let headers: Vec<(String, String)> = settings
            .default_headers
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let http_client = Client::builder()
            .default_headers(default_header_map(&headers)?)
            .build()?;
        Self::with_http_client(
            "test",
            &settings.base_url,
            http_client,
            FeignClientErrorDecoder::default(),
        )
    }

    fn with_http_client(
        name: impl Into<String>,
        url: &str,
        http_client: Client,
        decoder: impl ErrorDecoder + 'static,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            name: name.into(),
            url: parse_base_url(url)?,
            http_client,
            decoder: Arc::new(decoder),
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        Ok(self.http_client.request(method, join_url(&self.url, path)?))
    }

    /// Send the request, handing non-2xx responses to the decoder.
    async fn execute(
        &self,
        method_key: &str,
        method: Method,
        request: RequestBuilder,
    ) -> Result<String, ClientError> {
        let response = request.send().await?;
        let url = response.url().clone();
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            return Ok(body);
        }
        let response = ClientResponse {
            method,
            url,
            status,
            body,
        };
        Err(self.decoder.decode(method_key, &response))
    }

    fn method_key(&self, method: &str) -> String {
        format!("{}#{}", self.name, method)
    }
}

#[async_trait]
impl TestApi for FeignClient {
    #[tracing::instrument(name = "Feign: GET /test", skip(self))]
    async fn get_test(&self, username: Option<&str>) -> Result<String, ClientError> {
        let mut request = self.request(Method::GET, TEST_PATH)?;
        if let Some(username) = username {
            request = request.query(&[("username", username)]);
        }
        self.execute(&self.method_key("get_test"), Method::GET, request)
            .await
    }

    #[tracing::instrument(
        name = "Feign: POST /test/request-body",
        skip_all,
        fields(username = ?request.username)
    )]
    async fn post_test(&self, request: &PostTestRequest) -> Result<String, ClientError> {
        let builder = self.request(Method::POST, REQUEST_BODY_PATH)?.json(request);
        self.execute(&self.method_key("post_test"), Method::POST, builder)
            .await
    }

    #[tracing::instrument(name = "Feign: POST /test/form-data", skip(self, password))]
    async fn post_test_form(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, ClientError> {
        // Absent fields are left out of the body
        let request = self
            .request(Method::POST, FORM_DATA_PATH)?
            .form(&text_parts(username, password).collect::<Vec<_>>());
        self.execute(&self.method_key("post_test_form"), Method::POST, request)
            .await
    }

    #[tracing::instrument(
        name = "Feign: POST /test/multi-part",
        skip(self, file, password),
        fields(file_name = %file.file_name())
    )]
    async fn post_test_multipart(
        &self,
        file: &FilePart,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, ClientError> {
        let form = text_parts(username, password).fold(
            reqwest::multipart::Form::new().part(file.field_name(), file.to_async_part()?),
            |form, (name, value)| form.text(name, value),
        );
        let request = self.request(Method::POST, MULTI_PART_PATH)?.multipart(form);
        self.execute(&self.method_key("post_test_multipart"), Method::POST, request)
            .await
    }
}
