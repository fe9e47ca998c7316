mod error;
mod handlers;
mod options;
mod utils;

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;

use crate::options::Options;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let options = Options::parse();
    env_logger::Builder::new()
        .filter_level(options.log_level)
        .init();

    let log_directory = options.effective_log_directory();
    log::info!("log directory: {}", log_directory.display());

    let pools = options.pools().to_vec();
    if pools.is_empty() {
        log::warn!("no pool configured, give at least one host with --pool-hosts");
    }
    for pool in pools.iter() {
        log::info!(
            "pool {} (priority {}): {} as {}, extranonce subscribe {}",
            pool.name,
            pool.priority,
            pool.host,
            pool.username,
            pool.extranonce_subscribe_enabled,
        );
    }
    log::info!(
        "stratum endpoint: {}:{}",
        options.stratum_listen_address,
        options.stratum_listen_port
    );

    let rest_bind = (options.rest_listen_address.clone(), options.rest_listen_port);
    log::info!("rest endpoint: {}:{}", rest_bind.0, rest_bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pools.clone()))
            .service(
                web::resource("/health")
                    .wrap(utils::create_cors())
                    .route(web::get().to(handlers::health)),
            )
            .service(
                web::resource("/pools")
                    .wrap(utils::create_cors())
                    .route(web::get().to(handlers::pools)),
            )
            .service(
                web::resource("/pools/{priority}")
                    .wrap(utils::create_cors())
                    .route(web::get().to(handlers::pool)),
            )
    })
    .bind(rest_bind)?
    .run()
    .await
}
