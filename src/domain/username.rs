use crate::error::BizErrorEnum;

#[derive(Debug, Clone)]
pub struct Username(String);

impl Username {
    /// Returns an instance of `Username` if the input is present and not empty.
    pub fn parse(username: Option<String>) -> Result<Self, BizErrorEnum> {
        match username {
            Some(username) if !username.is_empty() => Ok(Self(username)),
            _ => Err(BizErrorEnum::UsernameIsEmpty),
        }
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
