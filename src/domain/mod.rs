mod password;
mod test_user;
mod upload;
mod username;

pub use password::Password;
pub use test_user::*;
pub use upload::*;
pub use username::Username;
