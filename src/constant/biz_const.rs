/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// validation messages returned by the test controller
pub const USERNAME_REQUIRED: &str = "Username is required.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const USER_PASSWORD_REQUIRED: &str = "User password is required.";
pub const FILE_REQUIRED: &str = "File is required.";
pub const MALFORMED_BODY: &str = "Malformed request body.";
pub const PART_TOO_LARGE: &str = "Multipart part exceeds the 1 MB limit.";

/// largest multipart part the test controller reads, in bytes
pub const MAX_PART_SIZE: usize = 1024 * 1024;

/// greeting prefix of every successful response
pub const GREETING_PREFIX: &str = "hello ";

/// multipart field names
pub const FILE_FIELD: &str = "file";
pub const USERNAME_FIELD: &str = "username";
pub const PASSWORD_FIELD: &str = "password";

/// message of the feign error decoder
pub const FEIGN_ERROR_MESSAGE: &str = "Error occurred";

/// paths served by the test controller
pub const TEST_PATH: &str = "/test";
pub const REQUEST_BODY_PATH: &str = "/test/request-body";
pub const FORM_DATA_PATH: &str = "/test/form-data";
pub const MULTI_PART_PATH: &str = "/test/multi-part";
