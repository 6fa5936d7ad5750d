use serde::{Deserialize, Serialize};

/// Query string of `GET /test`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GetTestQuery {
    #[serde(default)]
    pub username: Option<String>,
}
