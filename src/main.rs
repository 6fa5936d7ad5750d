use api_call_example::configuration;
use api_call_example::error::BizErrorEnum;
use api_call_example::startup::Application;
use api_call_example::telemetry;

#[tokio::main]
async fn main() -> Result<(), BizErrorEnum> {
    let subscriber =
        telemetry::get_subscriber("api-call-example".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    let config = configuration::get_configuration()?;
    let application = Application::build(config)?;
    application.run_until_stopped().await?;

    Ok(())
}
