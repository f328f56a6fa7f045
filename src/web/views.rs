use askama::Template;
use axum::response::Html;

use super::WebError;
use crate::models::renewal::{DashboardRow, RenewalStatus};

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, WebError> {
    template.render().map(Html).map_err(WebError::from)
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub flashes: Vec<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub flashes: Vec<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub flashes: Vec<String>,
}

#[derive(Template)]
#[template(path = "renew_pass.html")]
pub struct RenewTemplate {
    pub flashes: Vec<String>,
}

#[derive(Template)]
#[template(path = "status.html")]
pub struct StatusTemplate {
    pub flashes: Vec<String>,
    pub status_message: String,
}

#[derive(Template)]
#[template(path = "admin_login.html")]
pub struct AdminLoginTemplate {
    pub flashes: Vec<String>,
}

/// Action link shown next to each request on the dashboard.
pub struct StatusAction {
    pub label: &'static str,
    pub status: &'static str,
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
pub struct AdminDashboardTemplate {
    pub flashes: Vec<String>,
    pub requests: Vec<DashboardRow>,
    pub actions: Vec<StatusAction>,
}

impl AdminDashboardTemplate {
    #[must_use]
    pub fn new(flashes: Vec<String>, requests: Vec<DashboardRow>) -> Self {
        Self {
            flashes,
            requests,
            actions: vec![
                StatusAction {
                    label: "Approve",
                    status: RenewalStatus::Approved.as_str(),
                },
                StatusAction {
                    label: "Reject",
                    status: RenewalStatus::Rejected.as_str(),
                },
            ],
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub flashes: Vec<String>,
    pub status: u16,
    pub message: String,
}
