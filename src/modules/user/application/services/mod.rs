mod get_user_service;

pub use get_user_service::GetUserService;
