mod form_data;
mod get;
mod multi_part;
mod request_body;

pub use form_data::*;
pub use get::*;
pub use multi_part::*;
pub use request_body::*;

use crate::error::BizErrorEnum;
use actix_web::web;

fn malformed_body(e: impl std::fmt::Display) -> actix_web::Error {
    tracing::warn!("Failed to extract request payload: {}", e);
    BizErrorEnum::MalformedBody(anyhow::anyhow!(e.to_string())).into()
}

/// Extractor configs answering undecodable payloads with a plain-text 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|e, _req| malformed_body(e))
}

pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|e, _req| malformed_body(e))
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|e, _req| malformed_body(e))
}
