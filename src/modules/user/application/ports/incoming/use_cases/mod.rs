mod get_user_use_case;

pub use get_user_use_case::{GetUserError, GetUserUseCase};
