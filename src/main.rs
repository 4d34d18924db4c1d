mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod repositories;
mod routes;
mod utils;

use std::io;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use crate::config::Config;
use crate::db::PgStore;
use crate::repositories::{DepartmentRepository, EmployeeRepository};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    // Initialize the database pool
    let pool = db::create_pool(&config).await.map_err(|err| {
        error!("Failed to connect to the database: {}", err);
        io::Error::new(io::ErrorKind::ConnectionRefused, err)
    })?;

    if config.init_schema {
        if let Err(err) = db::init_schema(&pool).await {
            error!("Database initialization failed: {}", err);
            pool.close().await;
            return Err(io::Error::new(io::ErrorKind::Other, err));
        }
    }

    let store = Arc::new(PgStore::new(pool.clone()));
    let departments = web::Data::new(DepartmentRepository::new(store.clone()));
    let employees = web::Data::new(EmployeeRepository::new(store));

    info!("Starting server at {}:{}", config.host, config.port);

    // Start the HTTP server
    let served = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(departments.clone())
            .app_data(employees.clone())
            .app_data(utils::validation::json_config())
            .configure(routes::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    pool.close().await;
    info!("Database pool closed");
    served
}
