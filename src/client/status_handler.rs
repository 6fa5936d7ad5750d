use crate::error::ClientError;
use reqwest::{Method, StatusCode, Url};
use std::sync::Arc;

/// Everything a status handler or an error decoder gets to look at.
#[derive(Debug, Clone)]
pub struct ClientResponse {
    pub method: Method,
    pub url: Url,
    pub status: StatusCode,
    pub body: String,
}

impl ClientResponse {
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

type StatusPredicate = dyn Fn(StatusCode) -> bool + Send + Sync;
type ErrorHandler = dyn Fn(&ClientResponse) -> ClientError + Send + Sync;

#[derive(Clone)]
struct StatusHandler {
    predicate: Arc<StatusPredicate>,
    handler: Arc<ErrorHandler>,
}

/// Ordered `(predicate, handler)` pairs, the first matching pair wins.
#[derive(Clone, Default)]
pub struct StatusHandlers(Vec<StatusHandler>);

impl StatusHandlers {
    pub fn push<P, H>(&mut self, predicate: P, handler: H)
    where
        P: Fn(StatusCode) -> bool + Send + Sync + 'static,
        H: Fn(&ClientResponse) -> ClientError + Send + Sync + 'static,
    {
        self.0.push(StatusHandler {
            predicate: Arc::new(predicate),
            handler: Arc::new(handler),
        });
    }

    /// Append `fallback` after the handlers already registered.
    pub fn then(mut self, fallback: &StatusHandlers) -> Self {
        self.0.extend(fallback.0.iter().cloned());
        self
    }

    /// Turn a response into its body or into the error chosen by the handlers.
    /// Non-2xx responses no handler claims become `UnexpectedStatus`.
    pub fn resolve(&self, response: ClientResponse) -> Result<String, ClientError> {
        if let Some(status_handler) = self
            .0
            .iter()
            .find(|status_handler| (status_handler.predicate)(response.status))
        {
            tracing::debug!(
                "Status handler matched: method={}, url={}, status={}",
                response.method,
                response.url,
                response.status
            );
            return Err((status_handler.handler)(&response));
        }
        if response.status.is_success() {
            Ok(response.body)
        } else {
            Err(ClientError::UnexpectedStatus {
                status: response.status,
                body: response.body,
            })
        }
    }
}
