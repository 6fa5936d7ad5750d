use crate::client::{is_error, text_parts, TestApi, WebClient, WebClientBuilder};
use crate::configuration::ClientSettings;
use crate::constant::TEST_PATH;
use crate::error::ClientError;
use crate::request::{FilePart, PostTestRequest};
use async_trait::async_trait;

/// An interface whose calls are carried out by a [`WebClient`].
pub trait HttpExchange {
    fn from_web_client(web_client: WebClient) -> Self;
}

/// Creates interface clients sharing one [`WebClient`].
#[derive(Debug, Clone)]
pub struct HttpServiceProxyFactory {
    web_client: WebClient,
}

impl HttpServiceProxyFactory {
    pub fn new(web_client: WebClient) -> Self {
        Self { web_client }
    }

    pub fn create_client<T: HttpExchange>(&self) -> T {
        T::from_web_client(self.web_client.clone())
    }
}

pub struct HttpInterfaceConfig;

impl HttpInterfaceConfig {
    /// A [`TestHttpInterface`] whose error responses fail with the response body.
    pub fn test_http_interface(settings: &ClientSettings) -> Result<TestHttpInterface, ClientError> {
        let web_client = WebClientBuilder::from_settings(settings)
            .default_status_handler(is_error, |response| {
                ClientError::Remote(response.body.clone())
            })
            .build()?;

        Ok(HttpServiceProxyFactory::new(web_client).create_client())
    }
}

/// Every call is rooted at `/test`.
#[derive(Debug, Clone)]
pub struct TestHttpInterface {
    web_client: WebClient,
}

impl HttpExchange for TestHttpInterface {
    fn from_web_client(web_client: WebClient) -> Self {
        Self { web_client }
    }
}

impl TestHttpInterface {
    fn path(segment: &str) -> String {
        format!("{}{}", TEST_PATH, segment)
    }
}

#[async_trait]
impl TestApi for TestHttpInterface {
    #[tracing::instrument(name = "HttpInterface: GET /test", skip(self))]
    async fn get_test(&self, username: Option<&str>) -> Result<String, ClientError> {
        let mut request = self.web_client.get().uri(TEST_PATH);
        if let Some(username) = username {
            request = request.query_param("username", username);
        }
        request.retrieve().body_to_string().await
    }

    #[tracing::instrument(
        name = "HttpInterface: POST /test/request-body",
        skip_all,
        fields(username = ?request.username)
    )]
    async fn post_test(&self, request: &PostTestRequest) -> Result<String, ClientError> {
        self.web_client
            .post()
            .uri(&Self::path("/request-body"))
            .json(request)
            .retrieve()
            .body_to_string()
            .await
    }

    #[tracing::instrument(name = "HttpInterface: POST /test/form-data", skip(self, password))]
    async fn post_test_form(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<String, ClientError> {
        let form = PostTestRequest {
            username: username.map(str::to_string),
            password: password.map(str::to_string),
        };
        self.web_client
            .post()
            .uri(&Self::path("/form-data"))
            .form(&form)
            .retrieve()
            .body_to_string()
            .await
    }

    #[tracing::instrument(
        name = "HttpInterface: POST /test/multi-part",
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
        self.web_client
            .post()
            .uri(&Self::path("/multi-part"))
            .multipart(form)
            .retrieve()
            .body_to_string()
            .await
    }
}
