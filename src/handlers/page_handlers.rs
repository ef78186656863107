use actix_session::Session;
use actix_web::HttpResponse;
use askama::Template;

use crate::errors::{AppError, render};
use crate::templates_structs::{
    AboutTemplate, ContactTemplate, ExperienceTemplate, ExpertiseTemplate, HomeTemplate,
    NotFoundTemplate, PageContext,
};

pub async fn home(session: Session) -> Result<HttpResponse, AppError> {
    render(HomeTemplate { ctx: PageContext::build(&session, "/") })
}

pub async fn about(session: Session) -> Result<HttpResponse, AppError> {
    render(AboutTemplate { ctx: PageContext::build(&session, "/about") })
}

pub async fn experience(session: Session) -> Result<HttpResponse, AppError> {
    render(ExperienceTemplate { ctx: PageContext::build(&session, "/experience") })
}

pub async fn expertise(session: Session) -> Result<HttpResponse, AppError> {
    render(ExpertiseTemplate { ctx: PageContext::build(&session, "/expertise") })
}

pub async fn contact(session: Session) -> Result<HttpResponse, AppError> {
    render(ContactTemplate { ctx: PageContext::build(&session, "/contact") })
}

/// Default service: every unmatched path.
pub async fn not_found(session: Session) -> Result<HttpResponse, AppError> {
    let html = NotFoundTemplate { ctx: PageContext::build(&session, "") }.render()?;
    Ok(HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html))
}
