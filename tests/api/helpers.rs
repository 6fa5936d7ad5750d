use api_call_example::configuration;
use api_call_example::configuration::ClientSettings;
use api_call_example::request::{FilePart, PostTestRequest};
use api_call_example::startup::Application;
use api_call_example::telemetry;
use once_cell::sync::Lazy;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink type differs between the two branches, hence the duplication
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber).expect("Failed to init subscriber");
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber).expect("Failed to init subscriber");
    };
});

pub struct TestApp {
    pub address: String,
    /// Client settings pointed at this instance
    pub client_settings: ClientSettings,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spin up an instance of our application on a random port
    /// and launch it in the background.
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        let config = {
            let mut config =
                configuration::get_configuration().expect("Failed to read configuration");
            // Use a random OS port
            config.application.port = 0;
            config
        };

        let application = Application::build(config.clone()).expect("Failed to build application");
        let port = application.port();
        let address = format!("http://127.0.0.1:{}", port);
        let _ = tokio::spawn(application.run_until_stopped());

        TestApp {
            client_settings: config.client.with_base_url(&address),
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub async fn get_test(&self, username: Option<&str>) -> reqwest::Response {
        let mut request = self.api_client.get(&format!("{}/test", &self.address));
        if let Some(username) = username {
            request = request.query(&[("username", username)]);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn post_request_body(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/test/request-body", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_form_data(&self, body: &PostTestRequest) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/test/form-data", &self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_multi_part(&self, form: reqwest::multipart::Form) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/test/multi-part", &self.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_health_check(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// A small text file, every successful multipart call sends one.
pub fn file_part() -> FilePart {
    FilePart::new("file.txt", "text/plain", b"api call example".to_vec())
}

pub fn multipart_form(
    file: Option<&FilePart>,
    username: Option<&str>,
    password: Option<&str>,
) -> reqwest::multipart::Form {
    let mut form = reqwest::multipart::Form::new();
    if let Some(file) = file {
        let part = file.to_async_part().expect("Invalid file part");
        form = form.part(file.field_name(), part);
    }
    if let Some(username) = username {
        form = form.text("username", username.to_string());
    }
    if let Some(password) = password {
        form = form.text("password", password.to_string());
    }
    form
}

pub fn assert_is_plain_text(response: &reqwest::Response) {
    let content_type = response
        .headers()
        .get("Content-Type")
        .expect("Missing Content-Type header")
        .to_str()
        .expect("Content-Type is not valid UTF8");
    assert!(content_type.starts_with("text/plain"), "got {}", content_type);
}
