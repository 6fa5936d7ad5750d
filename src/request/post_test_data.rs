use crate::domain::{Password, TestUser, Username};
use crate::error::BizErrorEnum;
use serde::{Deserialize, Serialize};

/// Payload of the `request-body` and `form-data` endpoints.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PostTestRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl PostTestRequest {
    pub fn builder() -> PostTestRequestBuilder {
        PostTestRequestBuilder::default()
    }

    /// Fill the fields `self` lacks from `fallback`.
    pub fn or(self, fallback: PostTestRequest) -> Self {
        Self {
            username: self.username.or(fallback.username),
            password: self.password.or(fallback.password),
        }
    }
}

#[derive(Debug, Default)]
pub struct PostTestRequestBuilder {
    username: Option<String>,
    password: Option<String>,
}

impl PostTestRequestBuilder {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn build(self) -> PostTestRequest {
        PostTestRequest {
            username: self.username,
            password: self.password,
        }
    }
}

impl TryFrom<PostTestRequest> for TestUser {
    type Error = BizErrorEnum;

    fn try_from(request: PostTestRequest) -> Result<Self, Self::Error> {
        let username = Username::parse(request.username)?;
        let password = Password::parse(request.password, BizErrorEnum::PasswordIsEmpty)?;
        Ok(TestUser::new(username, password))
    }
}
