use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use word_bingo::config::ServerConfig;
use word_bingo::errors::{BingoResult, InfrastructureError};
use word_bingo::server::{cors_layer, router};
use word_bingo::{BingoService, WordBanks};

#[tokio::main]
async fn main() -> BingoResult<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();

    // Banks are loaded once, before the first request can arrive
    log::info!("Loading word banks from {}", config.word_banks.display());
    let banks = Arc::new(WordBanks::load_from_dir(&config.word_banks)?);

    let service = match config.seed {
        Some(seed) => {
            log::info!("Round order seeded with {}", seed);
            BingoService::with_seed(banks, seed)
        }
        None => BingoService::new(banks),
    };

    let cors = cors_layer(config.origin_headers()?);
    let app = router(Arc::new(service), cors);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(InfrastructureError::server)?;

    log::info!("Starting word bingo backend on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(InfrastructureError::server)?;

    log::info!("Server stopped");
    Ok(())
}
