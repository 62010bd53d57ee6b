mod json_config;
mod response;

pub use json_config::{custom_json_config, INVALID_BODY_MESSAGE};
pub use response::ApiResponse;
