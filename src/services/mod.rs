pub mod account_service;
pub use account_service::{AccountError, AccountService};

pub mod account_service_impl;
pub use account_service_impl::SeaOrmAccountService;

pub mod renewal_service;
pub use renewal_service::{RenewalError, RenewalService};

pub mod renewal_service_impl;
pub use renewal_service_impl::SeaOrmRenewalService;
