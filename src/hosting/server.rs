use super::handlers;
use crate::config::Config;
use crate::feed::Snapshots;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    /// Serves until the process receives Ctrl+C.
    pub async fn run(config: &Config, snapshots: Snapshots) -> Result<(), std::io::Error> {
        let snapshots = web::Data::new(snapshots);
        log::info!("starting feed server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(snapshots.clone())
                .configure(handlers::routes)
        })
        .workers(config.workers)
        .bind(config.bind.as_str())?
        .run()
        .await
    }
}
