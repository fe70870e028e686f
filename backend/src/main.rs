use std::path::Path;

use actix_files::Files;
use actix_web::{HttpServer, App, web::Data};
use anyhow::Context;
use config::Config;
use tracing::info;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::fmt::writer::Tee;
use util::LateInit;

mod config;
mod util;
mod api;

/// Default config path
const DEF_CONFIG_FILE: &str = "config.toml";

/// Global config
pub static CONFIG: LateInit<Config> = LateInit::new();

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cfg_path = match std::env::args().nth(1) {
        Some(p) => p,
        None => DEF_CONFIG_FILE.to_string()
    };

    if !Path::new(&cfg_path).exists() {
        std::fs::write(&cfg_path, include_bytes!("../../config.toml"))?;
    }

    let cfg_str = std::fs::read_to_string(&cfg_path)?;
    CONFIG.init(toml::from_str(&cfg_str)
        .with_context(|| format!("failed to parse config {cfg_path}"))?);

    let log_file = std::fs::File::options()
        .append(true)
        .create(true)
        .open(&CONFIG.log_file)?;

    tracing_subscriber::fmt()
        .with_writer(Tee::new(std::io::stdout, log_file))
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing::Level::from(CONFIG.log_level))
        .init();

    info!(
        mobile_max_width=CONFIG.pagination.mobile_max_width,
        middle_labels=?CONFIG.pagination.middle_labels,
        "Pagination settings"
    );

    let pagination_cfg = Data::new(CONFIG.pagination.clone());

    info!(addr=CONFIG.bind_address, port=CONFIG.port, "Starting server");
    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(TracingLogger::default())
            .app_data(pagination_cfg.clone())
            .service(api::pagination)
            .service(api::pagination_query)
        ;

        // Frontend is mounted last, so it won't shadow api routes
        app = if CONFIG.static_folder.serve {
            app.service(Files::new(
                &CONFIG.static_folder.url,
                &CONFIG.static_folder.path
            ).index_file("index.html"))
        } else { app };

        app
    })
    .bind((CONFIG.bind_address.as_str(), CONFIG.port))?
    .run()
    .await?;

    Ok(())
}
