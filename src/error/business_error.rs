use crate::constant::{
    FILE_REQUIRED, MALFORMED_BODY, PART_TOO_LARGE, PASSWORD_REQUIRED, USERNAME_REQUIRED,
    USER_PASSWORD_REQUIRED,
};
use crate::utils;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum BizErrorEnum {
    // VALIDATE TEST REQUEST
    #[error("{}", USERNAME_REQUIRED)]
    UsernameIsEmpty,

    #[error("{}", PASSWORD_REQUIRED)]
    PasswordIsEmpty,

    #[error("{}", USER_PASSWORD_REQUIRED)]
    UserPasswordIsEmpty,

    #[error("{}", FILE_REQUIRED)]
    FileIsEmpty,

    #[error("{}", MALFORMED_BODY)]
    MalformedBody(#[source] anyhow::Error),

    #[error("{}", PART_TOO_LARGE)]
    PartTooLarge,

    // OTHER
    #[error("Failed to bind TcpListener.")]
    BindTcpListenerError(#[source] std::io::Error),

    #[error("Failed to get local address of TcpListener.")]
    LocalAddrError(#[source] std::io::Error),

    #[error("Failed to listen TcpListener.")]
    ListenTcpListenerError(#[source] std::io::Error),

    #[error("Failed to run server.")]
    RunServerError(#[source] std::io::Error),

    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),
}

impl Debug for BizErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

impl BizErrorEnum {
    /// Validation failures are the caller's fault, everything else is ours.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            BizErrorEnum::UsernameIsEmpty
                | BizErrorEnum::PasswordIsEmpty
                | BizErrorEnum::UserPasswordIsEmpty
                | BizErrorEnum::FileIsEmpty
                | BizErrorEnum::MalformedBody(_)
                | BizErrorEnum::PartTooLarge
        )
    }
}

impl ResponseError for BizErrorEnum {
    fn status_code(&self) -> StatusCode {
        match self {
            BizErrorEnum::PartTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            e if e.is_validation_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Validation failures carry their message as a plain-text body,
    /// internal failures are answered with a bare status.
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            BizErrorEnum::PartTooLarge => utils::payload_too_large(self.to_string()),
            e if e.is_validation_error() => utils::bad_request(self.to_string()),
            _ => HttpResponse::new(self.status_code()),
        }
    }
}
