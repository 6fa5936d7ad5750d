use crate::domain::{Password, Username};

/// A user whose `username` and `password` both passed validation.
/// Only the username is kept, the password is never echoed back.
#[derive(Debug)]
pub struct TestUser {
    username: Username,
}

impl TestUser {
    pub fn new(username: Username, _password: Password) -> Self {
        Self { username }
    }

    /// Body of every successful test endpoint.
    pub fn greeting(&self) -> String {
        greeting(&self.username)
    }
}

pub fn greeting(username: &Username) -> String {
    format!("{}{}", crate::constant::GREETING_PREFIX, username.as_ref())
}
