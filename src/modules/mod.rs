pub mod topic;
pub mod user;
