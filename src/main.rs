//! Demo server rendering a people directory.

use dotenvy::dotenv;

use table_renderer::models::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            return Err(std::io::Error::other(err.to_string()));
        }
    };

    log::info!(
        "Serving the directory on http://{}:{}",
        server_config.address,
        server_config.port
    );
    table_renderer::run(server_config).await
}
