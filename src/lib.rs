pub mod client;
pub mod configuration;
pub mod constant;
pub mod domain;
pub mod error;
pub mod request;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
