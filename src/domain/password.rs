use crate::error::BizErrorEnum;

pub struct Password(String);

impl Password {
    /// Returns an instance of `Password` if the input is present and not empty,
    /// `missing` otherwise.
    pub fn parse(password: Option<String>, missing: BizErrorEnum) -> Result<Self, BizErrorEnum> {
        match password {
            Some(password) if !password.is_empty() => Ok(Self(password)),
            _ => Err(missing),
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

// Never leak the password into logs.
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
