mod file_part;
mod get_test_data;
mod post_test_data;

pub use file_part::FilePart;
pub use get_test_data::GetTestQuery;
pub use post_test_data::*;
