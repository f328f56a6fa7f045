pub mod renewal;
pub mod user;
