mod get_user;

pub use get_user::*;
