#[macro_use]
extern crate log;
#[macro_use]
extern crate validator_derive;

use std::env;

use actix_cors::Cors;
use actix_web::{
    http,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use dotenv::dotenv;

mod handlers;
mod routes;
mod tests;
mod urls;
mod validate;

use crate::routes::{not_found, routes};
use db::{new_pool, PgRepository};

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let client_host = env::var("CLIENT_HOST").ok();

    let repo = Data::new(PgRepository::new(new_pool()));

    info!("Listening on {}", bind_address);

    HttpServer::new(move || {
        let cors = match &client_host {
            Some(host) => Cors::default().allowed_origin(host),
            None => Cors::default().allow_any_origin(),
        }
        .allow_any_method()
        .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
        .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(repo.clone())
            .configure(routes::<PgRepository>)
            .default_service(web::route().to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
