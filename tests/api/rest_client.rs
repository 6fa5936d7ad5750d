use crate::helpers;
use crate::helpers::TestApp;
use api_call_example::client::{is_error, RestClient, RestClientBuilder};
use api_call_example::configuration::ClientSettings;
use api_call_example::error::ClientError;
use api_call_example::request::{FilePart, PostTestRequest};
use claims::{assert_err, assert_ok};

fn rest_client(settings: &ClientSettings) -> RestClient {
    RestClientBuilder::from_settings(settings)
        .build()
        .expect("Failed to build rest client")
}

// The blocking client owns a runtime, keep it off the async workers.
async fn blocking<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    tokio::task::spawn_blocking(f).await.unwrap()
}

fn blocking_form(
    file: &FilePart,
    username: Option<&str>,
    password: Option<&str>,
) -> reqwest::blocking::multipart::Form {
    let mut form = reqwest::blocking::multipart::Form::new()
        .part(file.field_name(), file.to_blocking_part().unwrap());
    if let Some(username) = username {
        form = form.text("username", username.to_string());
    }
    if let Some(password) = password {
        form = form.text("password", password.to_string());
    }
    form
}

#[tokio::test]
async fn get_returns_the_greeting() {
    let app = TestApp::spawn_app().await;
    let settings = app.client_settings.clone();

    let outcome = blocking(move || {
        rest_client(&settings)
            .get()
            .uri("/test")
            .query_param("username", "12345")
            .retrieve()
            .body()
    })
    .await;

    assert_eq!("hello 12345", assert_ok!(outcome));
}

#[tokio::test]
async fn get_error_is_raised_by_the_status_handler() {
    let app = TestApp::spawn_app().await;
    let settings = app.client_settings.clone();

    let outcome = blocking(move || {
        rest_client(&settings)
            .get()
            .uri("/test")
            .retrieve()
            .on_status(is_error, |_| ClientError::Remote("Exception occurred".into()))
            .body()
    })
    .await;

    assert!(assert_err!(outcome).to_string().contains("Exception occurred"));
}

#[tokio::test]
async fn request_body_call_succeeds_and_fails() {
    let app = TestApp::spawn_app().await;
    let settings = app.client_settings.clone();

    let (success, failure) = blocking(move || {
        let client = rest_client(&settings);
        let valid = PostTestRequest::builder()
            .username("test")
            .password("1234")
            .build();
        let invalid = PostTestRequest::builder().password("1234").build();
        let success = client
            .post()
            .uri("/test/request-body")
            .json(&valid)
            .retrieve()
            .body();
        let failure = client
            .post()
            .uri("/test/request-body")
            .json(&invalid)
            .retrieve()
            .on_status(is_error, |_| ClientError::Remote("Exception occurred".into()))
            .body();
        (success, failure)
    })
    .await;

    assert_eq!("hello test", assert_ok!(success));
    assert_eq!("Exception occurred", assert_err!(failure).to_string());
}

#[tokio::test]
async fn form_data_call_succeeds_and_fails() {
    let app = TestApp::spawn_app().await;
    let settings = app.client_settings.clone();

    let (success, failure) = blocking(move || {
        let client = rest_client(&settings);
        let valid = [("username", "test"), ("password", "1234")];
        let invalid = [("password", "1234")];
        let success = client
            .post()
            .uri("/test/form-data")
            .form(&valid)
            .retrieve()
            .body();
        let failure = client
            .post()
            .uri("/test/form-data")
            .form(&invalid)
            .retrieve()
            .on_status(is_error, |_| ClientError::Remote("Error occurred".into()))
            .body();
        (success, failure)
    })
    .await;

    assert_eq!("hello test", assert_ok!(success));
    assert!(assert_err!(failure).to_string().contains("Error occurred"));
}

#[tokio::test]
async fn multi_part_call_succeeds_and_fails() {
    let app = TestApp::spawn_app().await;
    let settings = app.client_settings.clone();
    let file = helpers::file_part();

    let (success, failure) = blocking(move || {
        let client = rest_client(&settings);
        let success = client
            .post()
            .uri("/test/multi-part")
            .multipart(blocking_form(&file, Some("test"), Some("test")))
            .retrieve()
            .body();
        let failure = client
            .post()
            .uri("/test/multi-part")
            .multipart(blocking_form(&file, None, Some("test")))
            .retrieve()
            .on_status(is_error, |_| ClientError::Remote("Error occurred".into()))
            .body();
        (success, failure)
    })
    .await;

    assert_eq!("hello test", assert_ok!(success));
    assert!(assert_err!(failure).to_string().contains("Error occurred"));
}
