use crate::configuration::Settings;
use crate::error::BizErrorEnum;
use crate::routes;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        let listener = TcpListener::bind(config.application.address()).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener");
            BizErrorEnum::BindTcpListenerError(e)
        })?;
        let port = listener
            .local_addr()
            .map_err(BizErrorEnum::LocalAddrError)?
            .port();
        tracing::info!("Test server listening on port {}", port);

        let server = run(listener)?;

        // We "save" the bound port in one of `Application`'s fields
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            BizErrorEnum::RunServerError(e)
        })
    }
}

pub fn run(listener: TcpListener) -> Result<Server, BizErrorEnum> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            // Undecodable payloads are answered the same way as validation failures
            .app_data(routes::json_config())
            .app_data(routes::form_config())
            .app_data(routes::query_config())
            .route("/health_check", web::get().to(routes::health_check))
            .service(
                web::scope("/test")
                    .route("", web::get().to(routes::get_test))
                    .route("/request-body", web::post().to(routes::post_request_body))
                    .route("/form-data", web::post().to(routes::post_form_data))
                    .route("/multi-part", web::post().to(routes::post_multi_part)),
            )
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        BizErrorEnum::ListenTcpListenerError(e)
    })?
    .run();

    // No .await here!
    Ok(server)
}
