pub mod admin;
pub mod role;
pub mod user;
