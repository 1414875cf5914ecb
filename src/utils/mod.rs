pub mod parameter_error_handler;
pub mod validate;

pub use parameter_error_handler::form_error_handler;
pub use validate::{ValidationError, validate_submission};
