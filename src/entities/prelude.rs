pub use super::admins::Entity as Admins;
pub use super::renewal_requests::Entity as RenewalRequests;
pub use super::users::Entity as Users;
