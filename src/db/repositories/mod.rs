pub mod admin;
pub mod renewal;
pub mod user;
