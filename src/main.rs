mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use mongodb::Client;

use crate::config::{StoreBackend, CONFIG};
use crate::repositories::{InMemoryUserRepository, MongoUserRepository, UserStore};
use crate::services::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let store = build_store().await?;
    let user_service = web::Data::new(UserService::new(store));

    // Start HTTP server
    let server_addr = CONFIG.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}

async fn build_store() -> io::Result<Arc<dyn UserStore>> {
    info!("Configured user store: {}", CONFIG.user_store);
    match CONFIG.user_store {
        StoreBackend::Memory => {
            info!("Using in-memory user store; records are lost on shutdown");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StoreBackend::Mongo => {
            info!("Connecting to MongoDB...");
            let client = Client::with_uri_str(&CONFIG.mongodb_uri)
                .await
                .map_err(|err| startup_error("Failed to connect to MongoDB", err))?;

            let repository = MongoUserRepository::new(&client.database(&CONFIG.database_name));
            repository
                .ping()
                .await
                .map_err(|err| startup_error("Failed to ping MongoDB", err))?;
            info!("Connected to MongoDB successfully!");

            repository
                .ensure_indexes()
                .await
                .map_err(|err| startup_error("Failed to create indexes", err))?;

            Ok(Arc::new(repository))
        }
    }
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", context, err);
    io::Error::other(format!("{}: {}", context, err))
}
