use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use admission_portal::{app_state::AppState, auth::JwtService, config::Config, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if dotenvy::dotenv().is_err() {
        println!("No .env file found");
    }
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Missing JWT_SECRET or MONGODB_URI halts the process before serving.
    let config = Config::from_env().unwrap_or_else(|e| {
        log::error!("Failed to load configuration: {}", e);
        std::process::exit(1);
    });

    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

    let state = AppState::new(config, jwt_service.clone())
        .await
        .unwrap_or_else(|e| {
            log::error!("Failed to initialize application state: {}", e);
            std::process::exit(1);
        });

    let host = state.config.web_server_host.clone();
    let port = state.config.web_server_port;
    log::info!("Starting HTTP server on {}:{}", host, port);

    let state = Arc::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&state)))
            .app_data(web::Data::new(jwt_service.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
