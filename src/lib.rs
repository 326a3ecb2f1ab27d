//! Server-rendered HTML tables with pagination, sorting and search driven
//! entirely by URL query parameters.

pub mod controls;
pub mod domain;
pub mod dto;
pub mod errors;
pub mod links;
pub mod pagination;
pub mod query;
pub mod render;
pub mod templates;

#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

pub use domain::options::{PaginationConfig, SearchConfig, SortConfig, SortOrder, TableOptions};
pub use domain::table::{DatabasePaginatedData, TableData};
pub use errors::{TableError, TableResult};
pub use render::Renderer;

#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::{
    models::config::ServerConfig, routes::main::show_index, services::directory::sample_people,
};

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let renderer = Renderer::new()
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
    let people = web::Data::new(sample_people());
    let renderer = web::Data::new(renderer);
    let config = web::Data::new(server_config.clone());

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(show_index)
            .app_data(renderer.clone())
            .app_data(people.clone())
            .app_data(config.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
