mod health_check;
mod test_controller;

// re-export
pub use health_check::*;
pub use test_controller::*;
