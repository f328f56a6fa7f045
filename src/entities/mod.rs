pub mod prelude;

pub mod admins;
pub mod renewal_requests;
pub mod users;
