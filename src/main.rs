use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, middleware, web};

use consult_site::booking::{BookingStore, EmailJsGateway};
use consult_site::config::AppConfig;
use consult_site::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let gateway = web::Data::new(EmailJsGateway::new(config.email.clone()));
    let store = web::Data::new(BookingStore::new());
    let secret_key = config.session_key.clone();

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(gateway.clone())
            .app_data(store.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure::<EmailJsGateway>)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::page_handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
