use crate::helpers;
use crate::helpers::TestApp;
use api_call_example::client::{FeignClient, TestApi};
use api_call_example::request::PostTestRequest;
use claims::{assert_err, assert_ok};

fn test_feign_client(app: &TestApp) -> FeignClient {
    FeignClient::from_settings(&app.client_settings).expect("Failed to build feign client")
}

#[tokio::test]
async fn get_returns_the_greeting() {
    let app = TestApp::spawn_app().await;
    let client = test_feign_client(&app);

    let outcome = client.get_test(Some("12345")).await;

    assert_eq!("hello 12345", assert_ok!(outcome));
}

#[tokio::test]
async fn every_failing_call_is_decoded_to_the_same_message() {
    let app = TestApp::spawn_app().await;
    let client = test_feign_client(&app);
    let file = helpers::file_part();
    let request = PostTestRequest::builder().password("1234").build();

    let outcomes = vec![
        client.get_test(None).await,
        client.post_test(&request).await,
        client.post_test_form(None, Some("1234")).await,
        client.post_test_multipart(&file, Some("test"), None).await,
    ];

    for outcome in outcomes {
        let error = assert_err!(outcome);
        assert!(error.to_string().contains("Error occurred"));
    }
}

#[tokio::test]
async fn post_calls_return_the_greeting() {
    let app = TestApp::spawn_app().await;
    let client = test_feign_client(&app);
    let file = helpers::file_part();
    let request = PostTestRequest::builder()
        .username("test")
        .password("1234")
        .build();

    assert_eq!("hello test", assert_ok!(client.post_test(&request).await));
    assert_eq!(
        "hello test",
        assert_ok!(client.post_test_form(Some("test"), Some("1234")).await)
    );
    assert_eq!(
        "hello test",
        assert_ok!(
            client
                .post_test_multipart(&file, Some("test"), Some("1234"))
                .await
        )
    );
}
