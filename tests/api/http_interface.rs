use crate::helpers;
use crate::helpers::TestApp;
use api_call_example::client::{HttpInterfaceConfig, TestApi, TestHttpInterface};
use api_call_example::request::PostTestRequest;
use claims::{assert_err, assert_ok};

fn test_http_interface(app: &TestApp) -> TestHttpInterface {
    HttpInterfaceConfig::test_http_interface(&app.client_settings)
        .expect("Failed to build http interface")
}

#[tokio::test]
async fn get_returns_the_greeting() {
    let app = TestApp::spawn_app().await;
    let interface = test_http_interface(&app);

    let outcome = interface.get_test(Some("12345")).await;

    assert_eq!("hello 12345", assert_ok!(outcome));
}

#[tokio::test]
async fn get_surfaces_the_server_message() {
    let app = TestApp::spawn_app().await;
    let interface = test_http_interface(&app);

    let outcome = interface.get_test(None).await;

    let error = assert_err!(outcome);
    assert!(error.to_string().contains("Username is required."));
}

#[tokio::test]
async fn request_body_call_succeeds_and_fails_like_the_server() {
    let app = TestApp::spawn_app().await;
    let interface = test_http_interface(&app);
    let request = PostTestRequest::builder()
        .username("test")
        .password("1234")
        .build();

    let outcome = interface.post_test(&request).await;
    assert_eq!("hello test", assert_ok!(outcome));

    let request = PostTestRequest::builder().password("1234").build();
    let outcome = interface.post_test(&request).await;
    assert_eq!("Username is required.", assert_err!(outcome).to_string());
}

#[tokio::test]
async fn form_data_call_succeeds_and_fails_like_the_server() {
    let app = TestApp::spawn_app().await;
    let interface = test_http_interface(&app);

    let outcome = interface.post_test_form(Some("test"), Some("1234")).await;
    assert_eq!("hello test", assert_ok!(outcome));

    let outcome = interface.post_test_form(Some("test"), None).await;
    assert_eq!("Password is required.", assert_err!(outcome).to_string());
}

#[tokio::test]
async fn multi_part_call_succeeds_and_fails_like_the_server() {
    let app = TestApp::spawn_app().await;
    let interface = test_http_interface(&app);
    let file = helpers::file_part();

    let outcome = interface
        .post_test_multipart(&file, Some("test"), Some("test"))
        .await;
    assert_eq!("hello test", assert_ok!(outcome));

    let outcome = interface
        .post_test_multipart(&file, Some("test"), Some(""))
        .await;
    assert_eq!("User password is required.", assert_err!(outcome).to_string());
}
