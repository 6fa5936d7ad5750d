use crate::domain::{Password, TestUser, Username};
use crate::error::BizErrorEnum;

/// A file received in a multipart request.
#[derive(Debug)]
pub struct UploadedFile {
    file_name: Option<String>,
    bytes: Vec<u8>,
}

impl UploadedFile {
    /// A missing part and a zero-length part are both treated as no file.
    pub fn parse(file_name: Option<String>, bytes: Option<Vec<u8>>) -> Result<Self, BizErrorEnum> {
        match bytes {
            Some(bytes) if !bytes.is_empty() => Ok(Self { file_name, bytes }),
            _ => Err(BizErrorEnum::FileIsEmpty),
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug)]
pub struct NewUpload {
    user: TestUser,
    file: UploadedFile,
}

impl NewUpload {
    /// Validates `username`, then `password`, then the file part.
    pub fn parse(
        username: Option<String>,
        password: Option<String>,
        file_name: Option<String>,
        bytes: Option<Vec<u8>>,
    ) -> Result<Self, BizErrorEnum> {
        let username = Username::parse(username)?;
        let password = Password::parse(password, BizErrorEnum::UserPasswordIsEmpty)?;
        let file = UploadedFile::parse(file_name, bytes)?;
        Ok(Self {
            user: TestUser::new(username, password),
            file,
        })
    }

    pub fn user(&self) -> &TestUser {
        &self.user
    }

    pub fn file(&self) -> &UploadedFile {
        &self.file
    }
}
