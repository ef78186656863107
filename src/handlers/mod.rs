pub mod booking_handlers;
pub mod page_handlers;

use actix_web::web;

use crate::booking::Gateway;

/// Route table shared by the server and the handler tests.
pub fn configure<G: Gateway + 'static>(cfg: &mut web::ServiceConfig) {
    cfg
        // Site pages
        .route("/", web::get().to(page_handlers::home))
        .route("/about", web::get().to(page_handlers::about))
        .route("/experience", web::get().to(page_handlers::experience))
        .route("/expertise", web::get().to(page_handlers::expertise))
        .route("/contact", web::get().to(page_handlers::contact))
        // Booking
        .route("/book", web::get().to(booking_handlers::form))
        .route("/book", web::post().to(booking_handlers::submit::<G>))
        .route("/book/reset", web::post().to(booking_handlers::reset));
}
