#[macro_use]
extern crate log;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    http,
    middleware::{Condition, Logger},
    web, App, HttpResponse, HttpServer,
};
use dotenv::dotenv;

mod config;
mod routes;
mod tests;

use crate::config::Config;
use crate::routes::routes;
use db::{PgQuestionStore, QuestionStore};
use errors::ErrorResponse;

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::load();
    let pool = db::new_pool(&config.database_url)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let store: Arc<dyn QuestionStore> = Arc::new(PgQuestionStore::new(pool));
    let store = web::Data::from(store);
    let client_host = config.client_host.clone();

    info!("Starting polls server on {}", config.bind_address);

    HttpServer::new(move || {
        let cors = match &client_host {
            Some(host) => Cors::default()
                .allowed_origin(host)
                .allow_any_method()
                .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
                .max_age(3600),
            None => Cors::default(),
        };

        App::new()
            .wrap(Condition::new(client_host.is_some(), cors))
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .app_data(store.clone())
            .configure(routes)
            .default_service(
                web::route().to(|| async {
                    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
                }),
            )
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
