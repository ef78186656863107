// Template context structures for Askama templates, organized by page group.

use actix_session::Session;
use chrono::Datelike;

use crate::session::csrf;

pub const APP_NAME: &str = "Dr. Harshal Goel";

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/experience", "Experience"),
    ("/expertise", "Expertise"),
    ("/contact", "Contact"),
];

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.nav`, etc.
pub struct PageContext {
    pub app_name: &'static str,
    pub current_path: String,
    pub nav: Vec<NavLink>,
    pub csrf_token: String,
    pub year: i32,
}

impl PageContext {
    pub fn build(session: &Session, current_path: &str) -> Self {
        let nav = NAV_LINKS
            .iter()
            .map(|&(href, label)| NavLink {
                href,
                label,
                active: href == current_path,
            })
            .collect();
        let csrf_token = csrf::get_or_create_token(session);
        let year = chrono::Local::now().year();
        Self {
            app_name: APP_NAME,
            current_path: current_path.to_string(),
            nav,
            csrf_token,
            year,
        }
    }
}

mod booking;
mod pages;

pub use self::booking::{BookTemplate, BookSubmittedTemplate, FieldMessages};
pub use self::pages::{
    AboutTemplate, ContactTemplate, ExperienceTemplate, ExpertiseTemplate, HomeTemplate,
    NotFoundTemplate,
};
